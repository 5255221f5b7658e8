use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scorecard",
    version,
    about = "Weighted startup team scorecard with radar chart and PDF report"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a startup interactively and write the PDF report
    Evaluate(EvaluateCommand),
    /// Print the fixed categories, weights and criteria
    Criteria,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SummaryArg {
    None,
    Md,
    Json,
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// Directory for the PDF and chart images (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print a summary after the report is written
    #[arg(long, value_enum)]
    pub summary: Option<SummaryArg>,
}
