use std::collections::BTreeMap;

pub type ReviewerId = i64;
pub type SubmissionId = i64;
pub type WorkshopId = i64;

/// One reviewer's assessment of one submission. `grade` is `None` until the
/// reviewer finishes the assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentRecord {
    pub reviewer_id: ReviewerId,
    pub submission_id: SubmissionId,
    pub grade: Option<f64>,
}

impl AssessmentRecord {
    pub fn new(reviewer_id: ReviewerId, submission_id: SubmissionId, grade: Option<f64>) -> Self {
        Self {
            reviewer_id,
            submission_id,
            grade,
        }
    }
}

pub type SubmissionGrades = BTreeMap<SubmissionId, Option<f64>>;

/// Assessments grouped by reviewer, then by submission. A `None` entry stands
/// for a reviewer without a usable assessment set.
pub type AssessmentsByReviewer = BTreeMap<ReviewerId, Option<SubmissionGrades>>;

/// Grading grades keyed by reviewer, rounded to five decimals.
pub type ReviewerGrades = BTreeMap<ReviewerId, f64>;
