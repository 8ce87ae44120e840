//! The `rehearse evaluate` command.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use rehearse_core::bank::load_banks;
use rehearse_core::{AnswerEvaluator, EvaluationResult, ScoringCriteria};

pub fn execute(
    criteria: &ScoringCriteria,
    reference_path: Option<PathBuf>,
    bank_path: Option<PathBuf>,
    question_id: Option<String>,
    answer_path: PathBuf,
    format: String,
) -> Result<()> {
    let reference = match (reference_path, bank_path, question_id) {
        (Some(path), _, _) => read_text(&path)?,
        (None, Some(bank), Some(id)) => reference_from_bank(&bank, &id)?,
        _ => anyhow::bail!("either --reference or --bank with --question is required"),
    };
    let answer = read_text(&answer_path)?;

    let evaluator = AnswerEvaluator::new(criteria.clone());
    let result = evaluator.evaluate(&answer, &reference);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "text" => print_result(&result, criteria),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read answer from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn reference_from_bank(bank_path: &Path, question_id: &str) -> Result<String> {
    let banks = load_banks(bank_path)?;
    banks
        .iter()
        .find_map(|bank| bank.find(question_id))
        .map(|q| q.answer.clone())
        .with_context(|| {
            format!(
                "question '{question_id}' not found in {}",
                bank_path.display()
            )
        })
}

fn print_result(result: &EvaluationResult, criteria: &ScoringCriteria) {
    let locale = criteria.locale;
    println!("Score: {} ({})", result.score, result.grade.label(locale));
    println!("{}", result.feedback.trim_start());

    if result.details.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Aspect", "Score", "Description"]);
    for detail in &result.details {
        table.add_row(vec![
            Cell::new(detail.aspect.label(locale)),
            Cell::new(detail.score),
            Cell::new(&detail.description),
        ]);
    }
    println!("\n{table}");
}
