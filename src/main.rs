mod chart;
mod cli;
mod collect;
mod config;
mod error;
mod report;
mod score;
mod types;

use crate::error::Result;
use crate::types::config::SummaryFormat;
use crate::types::rubric::{criteria_count, RUBRIC};
use clap::Parser;
use std::io;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCORECARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn evaluate(cmd: &cli::EvaluateCommand) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;

    let output_dir = cmd
        .output_dir
        .clone()
        .unwrap_or_else(|| loaded.output_dir());
    let summary = match cmd.summary {
        Some(cli::SummaryArg::None) => SummaryFormat::None,
        Some(cli::SummaryArg::Md) => SummaryFormat::Md,
        Some(cli::SummaryArg::Json) => SummaryFormat::Json,
        None => loaded.summary(),
    };

    let stdin = io::stdin();
    let mut prompter = collect::Prompter::new(stdin.lock(), io::stdout());
    let run = collect::collect_run(&mut prompter)?;

    let card = score::aggregate(&run);
    let stem = report::file_stem(&run.startup_name);
    let charts = chart::svg::write_charts(&run, &card, &output_dir, &stem)?;
    tracing::info!(
        radar = %charts.radar.display(),
        bars = charts.bars.iter().map(Vec::len).sum::<usize>(),
        "chart images written"
    );

    let file_name = report::report_file_name(&stem, loaded.report_suffix());
    let path = report::write_report(
        &run,
        &card,
        &loaded.render_settings(),
        &output_dir,
        &file_name,
    )?;

    println!("\nFinal Score: {:.2}/100", card.final_score);
    println!("{}", card.tier.recommendation());
    println!("PDF report generated: {}", path.display());

    if let Some(rendered) = report::render_summary(&run, &card, summary)? {
        println!("{rendered}");
    }
    Ok(())
}

fn print_criteria() {
    for category in RUBRIC {
        println!("{} (Weight: {}%)", category.name, category.weight_percent);
        for criterion in category.criteria {
            println!("  - {}: {}", criterion.name, criterion.description);
        }
    }
    println!(
        "\n{} criteria across {} categories",
        criteria_count(),
        RUBRIC.len()
    );
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    match cli.command {
        cli::Commands::Evaluate(cmd) => {
            evaluate(&cmd)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Criteria => {
            print_criteria();
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
