//! The `rehearse batch` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use rehearse_core::bank::{load_banks, merge_banks};
use rehearse_core::report::{AnswerSheet, EvaluationReport};
use rehearse_core::{AnswerEvaluator, ScoringCriteria};

pub fn execute(
    criteria: &ScoringCriteria,
    bank_path: PathBuf,
    answers_path: PathBuf,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let formats = parse_formats(&format)?;
    let bank = merge_banks(load_banks(&bank_path)?)?;
    let sheet = AnswerSheet::load(&answers_path)?;

    eprintln!(
        "Evaluating {} answers against {} ({} questions)",
        sheet.answers.len(),
        bank.name,
        bank.questions.len()
    );

    let evaluator = AnswerEvaluator::new(criteria.clone());
    let report = EvaluationReport::build(&evaluator, &bank, &sheet);

    print_summary(&report);

    std::fs::create_dir_all(&output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            _ => {
                let path = output.join(format!("report-{timestamp}.md"));
                std::fs::write(&path, report.to_markdown())?;
                eprintln!("Markdown report: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Split a `--format` list, mapping `md` to `markdown` and dropping repeats.
fn parse_formats(format: &str) -> Result<Vec<&'static str>> {
    if format == "all" {
        return Ok(vec!["json", "markdown"]);
    }

    let mut formats = Vec::new();
    for fmt in format.split(',').map(str::trim) {
        let fmt = match fmt {
            "json" => "json",
            "markdown" | "md" => "markdown",
            other => anyhow::bail!("unknown format: {other} (expected json, markdown, or all)"),
        };
        if !formats.contains(&fmt) {
            formats.push(fmt);
        }
    }
    Ok(formats)
}

fn print_summary(report: &EvaluationReport) {
    let locale = report.locale;
    let mut table = Table::new();
    table.set_header(vec!["Question", "Score", "Grade", "Missing key points"]);

    for entry in &report.entries {
        table.add_row(vec![
            Cell::new(&entry.question_id),
            Cell::new(entry.result.score),
            Cell::new(entry.result.grade.label(locale)),
            Cell::new(entry.result.missing_points.len()),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!(
        "Mean score {:.1} over {} answers ({} unanswered)",
        report.summary.mean_score,
        report.summary.total,
        report.summary.total - report.summary.answered
    );
    if !report.unknown_questions.is_empty() {
        eprintln!(
            "Skipped unknown questions: {}",
            report.unknown_questions.join(", ")
        );
    }
}
