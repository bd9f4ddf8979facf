use crate::error::Result;
use crate::evaluation::completion_by_reviewer;
use crate::evaluation::map::build_assessments_map;
use crate::evaluation::settings::{persist_mode_if_changed, resolve_mode};
use crate::store::{AssessmentSource, GradeWriter, SettingsStore};
use crate::types::assessment::{ReviewerId, WorkshopId};
use crate::types::mode::EvaluationMode;
use crate::types::report::{EvaluationReport, ReviewerSummary};
use crate::types::settings::PersistOutcome;
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub workshop_id: WorkshopId,
    /// Mode chosen for this round; overrides the saved one and gets persisted.
    pub mode: Option<EvaluationMode>,
    pub restrict: Option<Vec<ReviewerId>>,
    pub site_default: EvaluationMode,
    pub dry_run: bool,
}

/// Recomputes the grading grades of a workshop and stores them. Nothing is
/// written when any step before the writes fails.
pub fn update_grading_grades<A, S>(
    assessments: &mut A,
    settings: &mut S,
    request: &EvaluationRequest,
) -> Result<EvaluationReport>
where
    A: AssessmentSource + GradeWriter + ?Sized,
    S: SettingsStore + ?Sized,
{
    let workshop_id = request.workshop_id;
    let loaded = settings.load_settings(workshop_id)?;
    let mode = request
        .mode
        .unwrap_or_else(|| resolve_mode(loaded.as_ref(), request.site_default));
    tracing::info!(workshop_id, %mode, "evaluating grading grades");

    let records = assessments.assessments(workshop_id, request.restrict.as_deref())?;
    let map = build_assessments_map(records);

    let reviewers = completion_by_reviewer(&map)
        .into_iter()
        .map(|(reviewer_id, completion)| ReviewerSummary {
            reviewer_id,
            allocated: completion.allocated,
            finished: completion.finished,
            grade: completion.grade(mode),
        })
        .collect::<Vec<_>>();

    let mut grades_written = 0;
    let settings_outcome = if request.dry_run {
        PersistOutcome::Skipped
    } else {
        for reviewer in &reviewers {
            let Some(Some(submissions)) = map.get(&reviewer.reviewer_id) else {
                continue;
            };
            for submission_id in submissions.keys() {
                assessments.write_grading_grade(
                    workshop_id,
                    *submission_id,
                    reviewer.reviewer_id,
                    reviewer.grade,
                )?;
                tracing::debug!(
                    reviewer_id = reviewer.reviewer_id,
                    submission_id,
                    grade = reviewer.grade,
                    "grading grade written"
                );
                grades_written += 1;
            }
        }
        assessments.flush()?;
        persist_mode_if_changed(settings, workshop_id, loaded.as_ref(), mode)?
    };

    let mut report = EvaluationReport {
        workshop_id,
        mode,
        evaluated_at: Utc::now().to_rfc3339(),
        settings: settings_outcome,
        grades_written,
        reviewers,
    };
    report.sort_reviewers();
    Ok(report)
}
