use crate::error::{CreditError, Result};
use crate::store::{validate_restriction, AssessmentSource, GradeWriter};
use crate::types::assessment::{AssessmentRecord, ReviewerId, SubmissionId, WorkshopId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRow {
    pub workshop_id: WorkshopId,
    pub reviewer_id: ReviewerId,
    pub submission_id: SubmissionId,
    pub grade: Option<f64>,
    #[serde(default)]
    pub example: bool,
    #[serde(default)]
    pub grading_grade: Option<f64>,
}

/// Assessment rows kept in a JSON array file. Grading grades are written to
/// memory and saved with [`GradeWriter::flush`]. The file is rewritten
/// as a whole, so concurrent writers are not supported.
#[derive(Debug)]
pub struct FileAssessmentStore {
    path: PathBuf,
    rows: Vec<AssessmentRow>,
    dirty: bool,
}

impl FileAssessmentStore {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CreditError::PathNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let rows: Vec<AssessmentRow> = serde_json::from_str(&content)
            .map_err(|e| CreditError::DataParse(format!("{}: {}", path.display(), e)))?;

        if let Some(row) = rows
            .iter()
            .find(|row| row.grade.is_some_and(|grade| !(0.0..=100.0).contains(&grade)))
        {
            return Err(CreditError::DataParse(format!(
                "{}: grade of reviewer {} for submission {} is outside 0..=100",
                path.display(),
                row.reviewer_id,
                row.submission_id
            )));
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), "loaded assessment rows");
        Ok(Self {
            path: path.to_path_buf(),
            rows,
            dirty: false,
        })
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[AssessmentRow] {
        &self.rows
    }
}

impl AssessmentSource for FileAssessmentStore {
    fn assessments(
        &self,
        workshop_id: WorkshopId,
        restrict: Option<&[ReviewerId]>,
    ) -> Result<Vec<AssessmentRecord>> {
        validate_restriction(restrict)?;
        Ok(self
            .rows
            .iter()
            .filter(|row| row.workshop_id == workshop_id && !row.example)
            .filter(|row| restrict.map_or(true, |reviewers| reviewers.contains(&row.reviewer_id)))
            .map(|row| AssessmentRecord::new(row.reviewer_id, row.submission_id, row.grade))
            .collect())
    }
}

impl GradeWriter for FileAssessmentStore {
    fn write_grading_grade(
        &mut self,
        workshop_id: WorkshopId,
        submission_id: SubmissionId,
        reviewer_id: ReviewerId,
        grade: f64,
    ) -> Result<()> {
        let mut matched = false;
        for row in self.rows.iter_mut().filter(|row| {
            row.workshop_id == workshop_id
                && !row.example
                && row.submission_id == submission_id
                && row.reviewer_id == reviewer_id
        }) {
            row.grading_grade = Some(grade);
            matched = true;
        }
        if !matched {
            tracing::warn!(
                workshop_id,
                submission_id,
                reviewer_id,
                "no assessment row to store grading grade"
            );
            return Ok(());
        }
        self.dirty = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let json = serde_json::to_string_pretty(&self.rows)?;
        fs::write(&self.path, json)?;
        self.dirty = false;
        tracing::info!(path = %self.path.display(), "saved grading grades");
        Ok(())
    }
}
