pub mod json;
pub mod md;

use crate::error::CreditError;
use crate::types::assessment::ReviewerGrades;
use crate::types::mode::EvaluationMode;
use crate::types::report::EvaluationReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &EvaluationReport, format: OutputFormat) -> Result<String, CreditError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CreditError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_grades(
    grades: &ReviewerGrades,
    mode: EvaluationMode,
    format: OutputFormat,
) -> Result<String, CreditError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(grades).map_err(CreditError::Json),
        OutputFormat::Md => Ok(md::grades_to_markdown(grades, mode)),
    }
}
