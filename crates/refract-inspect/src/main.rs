/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

use anyhow::{Context, Result};
use clap::Parser;
use refract_json::parse_result_from_str;
use refract_model::{Annotation, ParseResult, default_registry};
use serde_json::{Value, json};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "refract-inspect")]
#[command(about = "Inspect diagnostics carried by a refract parse result")]
#[command(version)]
struct Cli {
    /// Input file (parse-result JSON), or "-" for stdin
    input: PathBuf,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Only report annotations classified as errors
    #[arg(long)]
    errors_only: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            if report.errors > 0 {
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("refract-inspect: {:#}", err);
            std::process::exit(2);
        }
    }
}

struct Report {
    errors: usize,
}

fn run(cli: &Cli) -> Result<Report> {
    let input = read_input(&cli.input)?;
    let result = parse_result_from_str(&input, default_registry())
        .with_context(|| format!("failed to read parse result from {}", cli.input.display()))?;

    let report = Report {
        errors: result.errors().count(),
    };

    if cli.json {
        println!("{}", json_report(&result, cli.errors_only));
    } else {
        for line in text_report(&result, cli.errors_only) {
            println!("{}", line);
        }
    }

    Ok(report)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

fn severity(annotation: &Annotation) -> &'static str {
    if annotation.is_error() {
        "error"
    } else if annotation.is_warning() {
        "warning"
    } else {
        "note"
    }
}

fn code_label(annotation: &Annotation) -> Option<String> {
    annotation.code().map(|code| match code.to_value() {
        Value::String(text) => text,
        other => other.to_string(),
    })
}

fn text_report(result: &ParseResult, errors_only: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for annotation in result.annotations() {
        if errors_only && !annotation.is_error() {
            continue;
        }

        let mut line = severity(annotation).to_string();
        if let Some(code) = code_label(annotation) {
            line.push_str(&format!("[{}]", code));
        }
        line.push_str(": ");
        line.push_str(annotation.message());
        if let Some(position) = annotation.source_map_value() {
            line.push_str(&format!(" at {}", position));
        }
        lines.push(line);
    }

    let errors = result.errors().count();
    let warnings = result.warnings().count();
    lines.push(format!(
        "{} error(s), {} warning(s)",
        errors, warnings
    ));
    lines
}

fn json_report(result: &ParseResult, errors_only: bool) -> Value {
    let annotations: Vec<Value> = result
        .annotations()
        .filter(|annotation| !errors_only || annotation.is_error())
        .map(|annotation| {
            let mut entry = json!({
                "severity": severity(annotation),
                "message": annotation.message(),
            });
            if let Some(code) = annotation.code() {
                entry["code"] = code.to_value();
            }
            if let Some(position) = annotation.source_map_value() {
                entry["sourceMap"] = position;
            }
            entry
        })
        .collect();

    json!({
        "errors": result.errors().count(),
        "warnings": result.warnings().count(),
        "annotations": annotations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_model::{Element, SourceMap};

    fn sample() -> ParseResult {
        let mut error = Annotation::error("missing field", 3u64);
        error
            .attributes
            .set("sourceMap", SourceMap::from_ranges([(0, 5)]));

        ParseResult::from_elements(vec![
            Element::string("content"),
            error.into(),
            Annotation::warning("deprecated", 6u64).into(),
        ])
    }

    #[test]
    fn test_text_report_lines() {
        let lines = text_report(&sample(), false);
        assert_eq!(lines[0], "error[3.0]: missing field at [0.0,5.0]");
        assert_eq!(lines[1], "warning[6.0]: deprecated");
        assert_eq!(lines[2], "1 error(s), 1 warning(s)");
    }

    #[test]
    fn test_text_report_errors_only() {
        let lines = text_report(&sample(), true);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("error"));
    }

    #[test]
    fn test_json_report_shape() {
        let report = json_report(&sample(), false);
        assert_eq!(report["errors"], 1);
        assert_eq!(report["warnings"], 1);
        assert_eq!(report["annotations"][0]["severity"], "error");
        assert_eq!(report["annotations"][0]["code"], 3.0);
    }
}
