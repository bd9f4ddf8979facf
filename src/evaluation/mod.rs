pub mod map;
pub mod run;
pub mod settings;

use crate::types::assessment::{AssessmentsByReviewer, ReviewerGrades, ReviewerId};
use crate::types::mode::EvaluationMode;

const GRADE_DECIMALS: i32 = 5;

/// Allocated and finished assessment counts of one reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub allocated: usize,
    pub finished: usize,
}

impl Completion {
    pub fn grade(self, mode: EvaluationMode) -> f64 {
        match mode {
            EvaluationMode::All => {
                if self.finished == self.allocated {
                    100.0
                } else {
                    0.0
                }
            }
            EvaluationMode::One => {
                if self.finished > 0 {
                    100.0
                } else {
                    0.0
                }
            }
            EvaluationMode::Proportional => {
                round_to(100.0 * self.finished as f64 / self.allocated as f64)
            }
        }
    }
}

/// Counts allocated and finished assessments per reviewer. Reviewers without
/// a non-empty assessment set are left out.
pub fn completion_by_reviewer(
    assessments: &AssessmentsByReviewer,
) -> Vec<(ReviewerId, Completion)> {
    assessments
        .iter()
        .filter_map(|(reviewer_id, submissions)| {
            let Some(submissions) = submissions.as_ref().filter(|map| !map.is_empty()) else {
                tracing::debug!(reviewer_id, "skipping reviewer without allocated assessments");
                return None;
            };
            let finished = submissions.values().filter(|grade| grade.is_some()).count();
            Some((
                *reviewer_id,
                Completion {
                    allocated: submissions.len(),
                    finished,
                },
            ))
        })
        .collect()
}

pub fn calculate_assessment_grades(
    assessments: &AssessmentsByReviewer,
    mode: EvaluationMode,
) -> ReviewerGrades {
    completion_by_reviewer(assessments)
        .into_iter()
        .map(|(reviewer_id, completion)| (reviewer_id, completion.grade(mode)))
        .collect()
}

fn round_to(value: f64) -> f64 {
    let scale = 10f64.powi(GRADE_DECIMALS);
    (value * scale).round() / scale
}
