use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "credit-eval",
    version,
    about = "Participation credit grading grades for peer-review workshops"
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
    /// Grade an assessments-by-reviewer JSON map
    Calculate(CalculateCommand),
    /// Recompute and store the grading grades of a workshop
    Evaluate(EvaluateCommand),
    /// Inspect or change the saved evaluation mode of a workshop
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    All,
    Proportional,
    One,
}

#[derive(Args)]
pub struct CalculateCommand {
    pub file: PathBuf,
    /// all, proportional or one
    #[arg(short, long)]
    pub mode: String,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct EvaluateCommand {
    pub path: PathBuf,
    #[arg(short, long, allow_negative_numbers = true)]
    pub workshop: i64,
    /// Mode for this round; saved for the workshop when it changes
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Only regrade these reviewers (comma separated ids)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub restrict: Option<Vec<i64>>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    Show(SettingsTarget),
    Set(SettingsSetCommand),
    /// Remove the settings of a deleted workshop
    Delete(SettingsTarget),
}

#[derive(Args)]
pub struct SettingsTarget {
    pub path: PathBuf,
    #[arg(short, long, allow_negative_numbers = true)]
    pub workshop: i64,
}

#[derive(Args)]
pub struct SettingsSetCommand {
    #[command(flatten)]
    pub target: SettingsTarget,
    #[arg(short, long, value_enum)]
    pub mode: ModeArg,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
