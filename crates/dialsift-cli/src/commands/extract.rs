use crate::commands::{print_json, run_pipeline, Context};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Saved page to read, or `-` for stdin
    pub input: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExtractReport {
    count: usize,
    numbers: Vec<String>,
}

pub fn extract(ctx: &Context<'_>, args: ExtractArgs) -> Result<()> {
    let numbers = run_pipeline(ctx, args.input.as_deref())?;

    if ctx.json {
        return print_json(&ExtractReport {
            count: numbers.len(),
            numbers,
        });
    }

    if numbers.is_empty() {
        eprintln!("No phone numbers found. Scroll the chat list further before saving the page.");
        return Ok(());
    }

    for number in &numbers {
        println!("{number}");
    }
    eprintln!("Found {} unique phone numbers", numbers.len());
    Ok(())
}
