use anyhow::{Context as _, Result};
use dialsift_config::AppConfig;
use dialsift_core::{Extractor, PageDocument};
use serde::Serialize;
use std::fs;
use std::io::{self, Read as _, Write};
use std::path::Path;

pub mod completions;
pub mod export;
pub mod extract;

pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Reads the saved page from a file, or stdin when the path is `-` or absent.
fn read_page(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("read page {}", path.display()))
        }
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .with_context(|| "read page from stdin")?;
            Ok(raw)
        }
    }
}

pub(crate) fn run_pipeline(ctx: &Context<'_>, input: Option<&Path>) -> Result<Vec<String>> {
    let raw = read_page(input)?;
    let extractor = Extractor::new(&ctx.config.country, &ctx.config.chat_selectors)
        .with_context(|| "build extractor")?;
    let page = PageDocument::parse(&raw);
    Ok(extractor.extract(&page))
}
