use crate::commands::{print_json, run_pipeline, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use chrono::Local;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const CSV_HEADER: &str = "Phone Number";

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Saved page to read, or `-` for stdin
    pub input: Option<PathBuf>,
    /// Output file; defaults to whatsapp_numbers_<date>.csv
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    output: String,
    count: usize,
}

pub fn export(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let numbers = run_pipeline(ctx, args.input.as_deref())?;

    if numbers.is_empty() {
        return Err(invalid_input("no phone numbers found, nothing to export"));
    }

    let out = match args.out {
        Some(path) => path,
        None => PathBuf::from(format!(
            "whatsapp_numbers_{}.csv",
            Local::now().format("%Y-%m-%d")
        )),
    };

    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for number in &numbers {
        csv.push_str(number);
        csv.push('\n');
    }
    fs::write(&out, csv).with_context(|| format!("write csv {}", out.display()))?;

    if ctx.json {
        return print_json(&ExportReport {
            output: out.display().to_string(),
            count: numbers.len(),
        });
    }

    println!("Exported {} numbers to {}", numbers.len(), out.display());
    Ok(())
}
