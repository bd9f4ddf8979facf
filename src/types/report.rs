use crate::types::assessment::{ReviewerId, WorkshopId};
use crate::types::mode::EvaluationMode;
use crate::types::settings::PersistOutcome;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReviewerSummary {
    pub reviewer_id: ReviewerId,
    pub allocated: usize,
    pub finished: usize,
    pub grade: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub workshop_id: WorkshopId,
    pub mode: EvaluationMode,
    pub evaluated_at: String,
    pub settings: PersistOutcome,
    pub grades_written: usize,
    pub reviewers: Vec<ReviewerSummary>,
}

impl EvaluationReport {
    pub fn sort_reviewers(&mut self) {
        self.reviewers.sort_by_key(|reviewer| reviewer.reviewer_id);
    }
}
