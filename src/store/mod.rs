pub mod assessments;
#[cfg(test)]
pub mod memory;
pub mod settings;

use crate::error::{CreditError, Result};
use crate::types::assessment::{AssessmentRecord, ReviewerId, SubmissionId, WorkshopId};
use crate::types::mode::EvaluationMode;
use crate::types::settings::EvaluationSettings;

/// Supplies assessment rows of the non-example submissions of a workshop.
pub trait AssessmentSource {
    /// `restrict` of `None` returns every reviewer; `Some` limits the rows to
    /// the listed reviewers and must not be empty.
    fn assessments(
        &self,
        workshop_id: WorkshopId,
        restrict: Option<&[ReviewerId]>,
    ) -> Result<Vec<AssessmentRecord>>;
}

pub trait SettingsStore {
    fn load_settings(&self, workshop_id: WorkshopId) -> Result<Option<EvaluationSettings>>;
    fn insert_settings(&mut self, settings: &EvaluationSettings) -> Result<()>;
    fn update_mode(&mut self, workshop_id: WorkshopId, mode: EvaluationMode) -> Result<()>;
    fn delete_settings(&mut self, workshop_id: WorkshopId) -> Result<()>;
}

/// Receives the computed grading grade of one assessment.
pub trait GradeWriter {
    fn write_grading_grade(
        &mut self,
        workshop_id: WorkshopId,
        submission_id: SubmissionId,
        reviewer_id: ReviewerId,
        grade: f64,
    ) -> Result<()>;

    /// Makes every grade written so far durable. Called once per run, before
    /// the workshop settings are saved.
    fn flush(&mut self) -> Result<()>;
}

pub fn validate_restriction(restrict: Option<&[ReviewerId]>) -> Result<()> {
    match restrict {
        Some([]) => Err(CreditError::InvalidRestriction),
        _ => Ok(()),
    }
}
