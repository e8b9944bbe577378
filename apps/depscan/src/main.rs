use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use depscan_core::{ScanConfig, ScanResult, parse_ignore_patterns, run_scan};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "depscan")]
#[command(about = "Scan a directory tree for JavaScript/TypeScript dependencies", long_about = None)]
struct Cli {
    /// Root directory to scan
    root: PathBuf,

    /// Comma-separated glob patterns for files to skip,
    /// e.g. "**/node_modules/**, **/jest*, *test*"
    ignore: Option<String>,

    /// Emit reports as a JSON array instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli);

    let start = Instant::now();

    let cfg = ScanConfig {
        root: cli.root,
        ignore_patterns: parse_ignore_patterns(cli.ignore.as_deref().unwrap_or("")),
    };
    info!(
        "Scanning {} with {} ignore patterns",
        cfg.root.display(),
        cfg.ignore_patterns.len()
    );

    let result = run_scan(&cfg)?;

    for failure in &result.failures {
        eprintln!("Error reading {}: {}", failure.path.display(), failure.error);
    }

    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &result.reports)?;
        writeln!(stdout)?;
    } else {
        print_reports(&mut stdout, &result)?;

        let elapsed_ms = start.elapsed().as_millis();
        writeln!(
            stdout,
            "\n{} Finished in {}ms on {} files.",
            "●".bright_blue(),
            elapsed_ms.to_string().cyan(),
            result.files_scanned.to_string().cyan()
        )?;
    }
    stdout.flush()?;

    Ok(())
}

fn print_reports<W: Write>(writer: &mut W, result: &ScanResult) -> Result<()> {
    for report in &result.reports {
        writeln!(writer, "File: {}", report.path.display())?;
        writeln!(writer, "Dependencies:")?;
        for dep in &report.dependencies {
            writeln!(writer, "  {}", dep)?;
        }
        writeln!(writer, "{}", "-".repeat(40))?;
    }
    Ok(())
}
