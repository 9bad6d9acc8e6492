//! Validates every `*.json` verb manifest in a directory.
//!
//! Usage: `cargo run --bin validate_manifests -- --dir crates/openverb/manifests`

use std::path::PathBuf;

use clap::Parser;
use openverb::manifest::{validate_dir, ReportLine};

#[derive(Debug, Parser)]
#[command(name = "validate_manifests", about = "OpenVerb manifest validator")]
struct Cli {
    /// Directory containing the manifest files.
    #[arg(long, env = "OPENVERB_MANIFESTS_DIR", default_value = "manifests")]
    dir: PathBuf,
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("OpenVerb Manifest Validator");
    println!();

    let report = match validate_dir(&cli.dir) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("  FAIL  {error}");
            std::process::exit(1);
        }
    };

    let mut in_summary = false;
    for line in report.render() {
        match line {
            ReportLine::Pass(_) => println!("{line}"),
            ReportLine::Fail(_) => eprintln!("{line}"),
            ReportLine::Summary(_) => {
                if !in_summary {
                    println!();
                    in_summary = true;
                }
                println!("{line}");
            }
        }
    }

    std::process::exit(report.exit_code());
}
