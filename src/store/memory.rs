use crate::error::{CreditError, Result};
use crate::store::{validate_restriction, AssessmentSource, GradeWriter, SettingsStore};
use crate::types::assessment::{AssessmentRecord, ReviewerId, SubmissionId, WorkshopId};
use crate::types::mode::EvaluationMode;
use crate::types::settings::EvaluationSettings;
use std::collections::BTreeMap;

/// In-memory settings store that counts writes.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: BTreeMap<WorkshopId, EvaluationSettings>,
    pub writes: usize,
}

impl SettingsStore for MemorySettingsStore {
    fn load_settings(&self, workshop_id: WorkshopId) -> Result<Option<EvaluationSettings>> {
        Ok(self.settings.get(&workshop_id).copied())
    }

    fn insert_settings(&mut self, settings: &EvaluationSettings) -> Result<()> {
        self.settings.insert(settings.workshop_id, *settings);
        self.writes += 1;
        Ok(())
    }

    fn update_mode(&mut self, workshop_id: WorkshopId, mode: EvaluationMode) -> Result<()> {
        let settings = self.settings.get_mut(&workshop_id).ok_or_else(|| {
            CreditError::DataParse(format!("no settings stored for workshop {workshop_id}"))
        })?;
        settings.mode = mode;
        self.writes += 1;
        Ok(())
    }

    fn delete_settings(&mut self, workshop_id: WorkshopId) -> Result<()> {
        if self.settings.remove(&workshop_id).is_some() {
            self.writes += 1;
        }
        Ok(())
    }
}

/// In-memory assessment rows of a single workshop, recording written grades.
/// Setting `fail_flush` makes [`GradeWriter::flush`] return an I/O error.
#[derive(Debug, Default)]
pub struct MemoryAssessments {
    pub workshop_id: WorkshopId,
    pub records: Vec<AssessmentRecord>,
    pub written: BTreeMap<(ReviewerId, SubmissionId), f64>,
    pub flushes: usize,
    pub fail_flush: bool,
}

impl MemoryAssessments {
    pub fn new(workshop_id: WorkshopId, records: Vec<AssessmentRecord>) -> Self {
        Self {
            workshop_id,
            records,
            ..Self::default()
        }
    }
}

impl AssessmentSource for MemoryAssessments {
    fn assessments(
        &self,
        workshop_id: WorkshopId,
        restrict: Option<&[ReviewerId]>,
    ) -> Result<Vec<AssessmentRecord>> {
        validate_restriction(restrict)?;
        if workshop_id != self.workshop_id {
            return Ok(Vec::new());
        }
        Ok(self
            .records
            .iter()
            .filter(|record| {
                restrict.map_or(true, |reviewers| reviewers.contains(&record.reviewer_id))
            })
            .copied()
            .collect())
    }
}

impl GradeWriter for MemoryAssessments {
    fn write_grading_grade(
        &mut self,
        workshop_id: WorkshopId,
        submission_id: SubmissionId,
        reviewer_id: ReviewerId,
        grade: f64,
    ) -> Result<()> {
        if workshop_id == self.workshop_id {
            self.written.insert((reviewer_id, submission_id), grade);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.fail_flush {
            return Err(CreditError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )));
        }
        self.flushes += 1;
        Ok(())
    }
}
