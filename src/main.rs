use anyhow::Result;
use clap::Parser;
use class_token_rewriter::{preview_file, rewrite_file, RewriteConfig, RewriteReport, WriteMode};
use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Printed once a real run finishes.
const ACKNOWLEDGMENT: &str = "Replacement complete.";

#[derive(Parser)]
#[command(name = "class-token-rewriter")]
#[command(
    about = "Rewrite the `hide` class token to `hidden` in ./index.html",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Dry run - show what would be changed without modifying the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show unified diff of changes
    #[arg(short, long)]
    diff: bool,

    /// Write through a tempfile and rename it over index.html
    #[arg(long)]
    atomic: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let write_mode = if cli.atomic {
        WriteMode::Atomic
    } else {
        WriteMode::InPlace
    };
    let config = RewriteConfig::default().with_write_mode(write_mode);

    let report = if cli.dry_run {
        preview_file(&config)?
    } else {
        rewrite_file(&config)?
    };

    if cli.diff && report.is_changed() {
        display_diff(&report.path, &report.original, &report.rewritten);
    }

    if cli.dry_run {
        print_dry_run(&report);
    } else {
        println!("{ACKNOWLEDGMENT}");
    }

    Ok(())
}

fn print_dry_run(report: &RewriteReport) {
    println!(
        "{}",
        format!(
            "[DRY RUN] {} replacement(s) would be made in {}",
            report.replacements(),
            report.path.display()
        )
        .cyan()
    );
}

/// Helper: Show unified diff between original and modified content
fn display_diff(file: &Path, original: &str, modified: &str) {
    println!("{}", format!("--- {} (original)", file.display()).dimmed());
    println!("{}", format!("+++ {} (rewritten)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, modified);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
    if !modified.ends_with('\n') {
        println!();
    }
}
