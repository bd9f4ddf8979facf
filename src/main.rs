mod cli;
mod config;
mod error;
mod evaluation;
mod logging;
mod report;
mod store;
mod types;

use crate::config::LoadedConfig;
use crate::error::CreditError;
use crate::evaluation::run::{update_grading_grades, EvaluationRequest};
use crate::store::assessments::FileAssessmentStore;
use crate::store::settings::FileSettingsStore;
use crate::store::SettingsStore;
use crate::types::mode::EvaluationMode;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

impl From<cli::ModeArg> for EvaluationMode {
    fn from(mode: cli::ModeArg) -> Self {
        match mode {
            cli::ModeArg::All => Self::All,
            cli::ModeArg::Proportional => Self::Proportional,
            cli::ModeArg::One => Self::One,
        }
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

/// Loads the layered config of a workshop directory.
fn load_workshop_config(path: &Path) -> Result<LoadedConfig, CreditError> {
    if !path.is_dir() {
        return Err(CreditError::PathNotFound(path.display().to_string()));
    }
    config::load_config(path)
}

fn finish(path: &Path, loaded: &LoadedConfig) -> i32 {
    if !loaded.repo_file_found {
        eprintln!(
            "warning: no {} found in {}",
            config::DEFAULT_CONFIG_FILE,
            path.display()
        );
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, CreditError> {
    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::Calculate(cmd) => {
            logging::init_tracing(&logging::level_for(cli.verbose, cli.quiet, None));
            let mode: EvaluationMode = cmd.mode.parse()?;
            if !cmd.file.exists() {
                return Err(CreditError::PathNotFound(cmd.file.display().to_string()));
            }
            let content = std::fs::read_to_string(&cmd.file)?;
            let value: serde_json::Value = serde_json::from_str(&content)
                .map_err(|e| CreditError::DataParse(format!("{}: {}", cmd.file.display(), e)))?;
            let assessments = evaluation::map::assessments_map_from_json(&value)?;

            let grades = evaluation::calculate_assessment_grades(&assessments, mode);
            let rendered = report::render_grades(&grades, mode, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Evaluate(cmd) => {
            let loaded = load_workshop_config(&cmd.path)?;
            let cfg = &loaded.config;
            logging::init_tracing(&logging::level_for(
                cli.verbose,
                cli.quiet,
                cfg.log_level(),
            ));

            let assessments_path = config::resolve_path(&cmd.path, cfg.assessments_file());
            let mut assessments = FileAssessmentStore::open(&assessments_path)?;
            let mut settings =
                FileSettingsStore::new(&config::resolve_path(&cmd.path, cfg.settings_file()));

            let request = EvaluationRequest {
                workshop_id: cmd.workshop,
                mode: cmd.mode.map(EvaluationMode::from),
                restrict: cmd.restrict,
                site_default: cfg.default_mode()?,
                dry_run: cmd.dry_run,
            };
            let evaluation_report =
                update_grading_grades(&mut assessments, &mut settings, &request)?;

            let rendered = report::render(&evaluation_report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(finish(&cmd.path, &loaded))
        }
        cli::Commands::Settings(cmd) => {
            let target = match &cmd {
                cli::SettingsCommand::Show(target) | cli::SettingsCommand::Delete(target) => {
                    target
                }
                cli::SettingsCommand::Set(set) => &set.target,
            };
            let loaded = load_workshop_config(&target.path)?;
            let cfg = &loaded.config;
            logging::init_tracing(&logging::level_for(
                cli.verbose,
                cli.quiet,
                cfg.log_level(),
            ));

            let mut store =
                FileSettingsStore::new(&config::resolve_path(&target.path, cfg.settings_file()));
            let site_default = cfg.default_mode()?;
            let saved = store.load_settings(target.workshop)?;

            match &cmd {
                cli::SettingsCommand::Show(_) => {
                    let mode = evaluation::settings::resolve_mode(saved.as_ref(), site_default);
                    println!("workshop: {}", target.workshop);
                    println!("mode: {} ({})", mode, mode.label());
                    println!("saved: {}", if saved.is_some() { "yes" } else { "no" });
                    println!("site default: {site_default}");
                    let available = EvaluationMode::ALL_MODES
                        .iter()
                        .map(|mode| mode.as_str())
                        .collect::<Vec<_>>();
                    println!("available: {}", available.join(", "));
                }
                cli::SettingsCommand::Set(set) => {
                    let outcome = evaluation::settings::persist_mode_if_changed(
                        &mut store,
                        target.workshop,
                        saved.as_ref(),
                        set.mode.into(),
                    )?;
                    println!("settings {}", outcome.as_str());
                }
                cli::SettingsCommand::Delete(_) => {
                    store.delete_settings(target.workshop)?;
                    println!("settings deleted for workshop {}", target.workshop);
                }
            }
            Ok(finish(&target.path, &loaded))
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
