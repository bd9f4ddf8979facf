use crate::types::assessment::ReviewerGrades;
use crate::types::mode::EvaluationMode;
use crate::types::report::EvaluationReport;

pub fn to_markdown(report: &EvaluationReport) -> String {
    let mut output = String::new();
    output.push_str("# Grading Grades\n\n");
    output.push_str(&format!("Workshop: {}\n", report.workshop_id));
    output.push_str(&format!(
        "Mode: {} ({})\n",
        report.mode,
        report.mode.label()
    ));
    output.push_str(&format!("Evaluated at: {}\n\n", report.evaluated_at));

    output.push_str("## Reviewers\n\n");
    if report.reviewers.is_empty() {
        output.push_str("- none\n");
    } else {
        output.push_str("| reviewer | finished | allocated | grade |\n");
        output.push_str("|---:|---:|---:|---:|\n");
        for reviewer in &report.reviewers {
            output.push_str(&format!(
                "| {} | {} | {} | {:.5} |\n",
                reviewer.reviewer_id, reviewer.finished, reviewer.allocated, reviewer.grade
            ));
        }
    }

    output.push_str(&format!(
        "\nGrades written: {}, settings: {}\n",
        report.grades_written,
        report.settings.as_str()
    ));
    output
}

pub fn grades_to_markdown(grades: &ReviewerGrades, mode: EvaluationMode) -> String {
    let mut output = format!("# Grading Grades ({})\n\n", mode.label());
    if grades.is_empty() {
        output.push_str("- none\n");
    }
    for (reviewer_id, grade) in grades {
        output.push_str(&format!("- reviewer {reviewer_id}: {grade:.5}\n"));
    }
    output
}
