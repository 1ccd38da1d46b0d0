//! Converter content validation CLI

use clap::Parser;
use colored::*;
use convcheck::models::{ConverterRecord, RecordOutcome, ValidationReport};
use convcheck::parser::{self, ContentDocument};
use convcheck::report::{full_guide, structure_guide};
use convcheck::validator::{validate_converters, MIN_WORD_COUNT};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "convcheck")]
#[command(about = "Validate converter content documents before publishing", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a content document, or a directory of documents
    input: Option<PathBuf>,

    /// Emit the validation report as JSON
    #[arg(long)]
    json: bool,

    /// Write a markdown report to the given path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Print the content structure guide and exit
    #[arg(long)]
    guide: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.guide {
        println!("{}", full_guide());
        return;
    }

    let Some(input) = &cli.input else {
        println!("Usage: convcheck <content.json>");
        println!("Run `convcheck --help` for the full option list.");
        std::process::exit(1);
    };

    let all_valid = if input.is_dir() {
        run_directory(input, &cli)
    } else {
        run_document(input, &cli, cli.report.as_deref())
    };

    if !all_valid {
        std::process::exit(1);
    }
}

fn run_directory(dir: &Path, cli: &Cli) -> bool {
    let documents = parser::collect_documents(dir);
    if documents.is_empty() {
        eprintln!("{}", format!("No .json documents under {}", dir.display()).red());
        return false;
    }

    let mut all_valid = true;
    for path in documents {
        if !cli.json {
            println!("{}", format!("── {} ──", path.display()).bold());
        }
        // Per-document markdown reports would overwrite each other.
        all_valid &= run_document(&path, cli, None);
        if !cli.json {
            println!();
        }
    }
    all_valid
}

fn run_document(path: &Path, cli: &Cli, report_path: Option<&Path>) -> bool {
    let document = match parser::load_document(path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}", format!("❌ {}: {e}", path.display()).red());
            return false;
        }
    };

    let report = validate_converters(&document.converters);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{}", format!("❌ failed to encode report: {e}").red()),
        }
    } else {
        print_report(&document, &report);

        if let Some(report_path) = report_path {
            if let Ok(markdown) = convcheck::report::generate_report(&report) {
                if std::fs::write(report_path, markdown).is_ok() {
                    println!("  Report: {}", report_path.display());
                }
            }
        }
    }

    report.summary.is_valid
}

fn print_report(document: &ContentDocument, report: &ValidationReport) {
    for (record, outcome) in document.converters.iter().zip(&report.records) {
        if outcome.is_valid() {
            println!("{} {}", "✅".green(), pass_line(record, outcome));
        } else {
            println!(
                "{} {} — {} error(s)",
                "❌".red(),
                outcome.display_id.bold(),
                outcome.errors.len()
            );
            for error in &outcome.errors {
                println!("   • {}", error);
            }
        }
    }

    let guide_sections = report.guide_sections();
    if !guide_sections.is_empty() {
        println!();
        println!("{}", structure_guide(&guide_sections).dimmed());
    }

    println!();
    println!("{}", "📊 Summary".bold().blue());
    println!("{}", "=".repeat(50).blue());
    println!("  Converters: {}", report.summary.total);
    println!("  Valid:      {}", report.summary.valid);
    println!("  Failed:     {}", report.summary.failed);

    if !report.failed_ids.is_empty() {
        println!();
        println!("{}", "Failing converters:".red().bold());
        for id in &report.failed_ids {
            println!("  - {id}");
        }
    }

    println!();
    println!("{}", "Word counts:".bold());
    for entry in &report.word_counts {
        let line = format!("  {:<40} {:>6}", entry.id, entry.words);
        if entry.words < MIN_WORD_COUNT {
            println!("{}", line.yellow());
        } else {
            println!("{line}");
        }
    }

    if !report.warnings.is_empty() {
        println!();
        println!("{}", "⚠️  Warnings:".yellow().bold());
        for warning in &report.warnings {
            match &warning.location {
                Some(location) => println!("  - {}: {}", location, warning.message),
                None => println!("  - {}", warning.message),
            }
        }
    }

    println!();
    if report.summary.is_valid {
        println!("{}", "✅ All converters valid!".green().bold());
    } else {
        println!("{}", "❌ Validation failed!".red().bold());
    }
}

fn pass_line(record: &serde_json::Value, outcome: &RecordOutcome) -> String {
    match ConverterRecord::from_value(record) {
        Ok(decoded) if !decoded.title.is_empty() => {
            format!("{} — {} ({} words)", outcome.display_id, decoded.title, outcome.word_count)
        }
        _ => format!("{} ({} words)", outcome.display_id, outcome.word_count),
    }
}
