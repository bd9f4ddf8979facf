use crate::error::{CreditError, Result};
use crate::types::assessment::{AssessmentRecord, AssessmentsByReviewer, SubmissionGrades};
use serde_json::Value;

/// Groups flat assessment rows by reviewer, then by submission. A repeated
/// (reviewer, submission) pair keeps the last row's grade.
pub fn build_assessments_map<I>(records: I) -> AssessmentsByReviewer
where
    I: IntoIterator<Item = AssessmentRecord>,
{
    let mut map = AssessmentsByReviewer::new();
    for record in records {
        map.entry(record.reviewer_id)
            .or_insert_with(|| Some(SubmissionGrades::new()))
            .get_or_insert_with(SubmissionGrades::new)
            .insert(record.submission_id, record.grade);
    }
    map
}

/// Reads a map shaped `{"<reviewer>": {"<submission>": grade | null} | null}`.
/// Reviewer values that are not objects are kept as `None` so grading skips
/// them.
pub fn assessments_map_from_json(value: &Value) -> Result<AssessmentsByReviewer> {
    let Value::Object(reviewers) = value else {
        return Err(CreditError::DataParse(
            "assessments must be a JSON object keyed by reviewer id".to_string(),
        ));
    };

    let mut map = AssessmentsByReviewer::new();
    for (reviewer_key, submissions) in reviewers {
        let reviewer_id = parse_id(reviewer_key, "reviewer")?;
        let Value::Object(submissions) = submissions else {
            map.insert(reviewer_id, None);
            continue;
        };

        let mut grades = SubmissionGrades::new();
        for (submission_key, grade) in submissions {
            let submission_id = parse_id(submission_key, "submission")?;
            let grade = match grade {
                Value::Null => None,
                Value::Number(number) => number.as_f64(),
                other => {
                    return Err(CreditError::DataParse(format!(
                        "grade of reviewer {reviewer_id} for submission {submission_id} must be a number or null, got {other}"
                    )));
                }
            };
            grades.insert(submission_id, grade);
        }
        map.insert(reviewer_id, Some(grades));
    }
    Ok(map)
}

fn parse_id(key: &str, kind: &str) -> Result<i64> {
    key.trim()
        .parse()
        .map_err(|_| CreditError::DataParse(format!("invalid {kind} id: {key}")))
}
