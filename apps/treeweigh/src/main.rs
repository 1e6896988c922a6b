mod config;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::ReportArgs;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "treeweigh")]
#[command(about = "Size reports for tree-shaken JavaScript bundles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report module sizes from a bundle stats file
    Report(ReportArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Report(args) => {
            let options = args.analyze_options()?;
            info!("Running bundle report on {}", args.stats.display());
            debug!("Options: {:?}", options);

            let bundle = input::load_bundle(&args.stats)?;
            let analysis = treeweigh_core::analyze(&bundle, &options).await?;
            debug!("Reporting {} of {} modules", analysis.modules.len(), analysis.module_count);

            if args.json {
                serde_json::to_writer_pretty(&mut stdout, &analysis)?;
                writeln!(stdout)?;
                stdout.flush()?;
            } else {
                treeweigh_report::write_report(&mut stdout, &analysis, &options)?;
            }

            let elapsed_ms = start.elapsed().as_millis();
            eprintln!(
                "\n{} Finished in {}ms on {} modules.",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                analysis.module_count.to_string().cyan()
            );

            Ok(())
        }
    }
}
