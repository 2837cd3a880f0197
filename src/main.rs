use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vardump::{CaptureRegion, DocParser, Value};

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("vardump")
        .about("Dump a JSON document as browsable HTML tables")
        .arg(
            Arg::new("input")
                .help("JSON file to dump, or - for standard input")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .help("Wrap the dump in a complete HTML page")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-style")
                .long("no-style")
                .help("Do not splice the debug stylesheet into the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("doc-comment")
                .long("doc-comment")
                .help("Treat the input as a doc-comment and print its parsed form as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .context("Missing input argument")?;
    let content = read_input(input)?;

    if matches.get_flag("doc-comment") {
        let doc = DocParser::new().parse(&content);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from {}", input))?;
    let value = Value::from(json);
    debug!(category = ?vardump::classify(&value), "parsed input");

    let mut region = CaptureRegion::new(io::stdout().lock());
    if matches.get_flag("no-style") {
        region = region.without_stylesheet();
    }

    let page = matches.get_flag("page");
    if page {
        region.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>vardump</title></head><body>\n");
    }
    region.dump(&value);
    if page {
        region.push_str("\n</body></html>");
    }

    let mut stdout = region.finish().context("Failed to write output")?;
    writeln!(stdout)?;
    info!(input = %input, "dump written");

    Ok(())
}
