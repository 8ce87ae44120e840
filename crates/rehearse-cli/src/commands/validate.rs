//! The `rehearse validate` command.

use std::path::PathBuf;

use anyhow::Result;

use rehearse_core::bank::{load_banks, validate_bank, WarningKind};
use rehearse_core::keypoints::extract_key_points;
use rehearse_core::ScoringCriteria;

pub fn execute(criteria: &ScoringCriteria, bank_path: PathBuf) -> Result<()> {
    let banks = load_banks(&bank_path)?;

    let mut total_warnings = 0;
    let mut unscorable = Vec::new();

    for bank in &banks {
        let key_points: usize = bank
            .questions
            .iter()
            .map(|q| extract_key_points(&q.answer, &criteria.key_points).len())
            .sum();
        println!(
            "Question bank: {} ({} questions, {key_points} key points)",
            bank.name,
            bank.questions.len()
        );

        let warnings = validate_bank(bank, &criteria.key_points);
        for w in &warnings {
            match &w.question_id {
                Some(id) => println!("  [{id}] WARNING: {}", w.message),
                None => println!("  WARNING: {}", w.message),
            }
            if w.kind == WarningKind::NoKeyPoints {
                if let Some(id) = &w.question_id {
                    unscorable.push(id.clone());
                }
            }
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question banks valid.");
        return Ok(());
    }

    println!("\n{total_warnings} warning(s) found.");
    if !unscorable.is_empty() {
        println!(
            "Coverage is always 0 for: {} (split the reference into list items)",
            unscorable.join(", ")
        );
    }

    Ok(())
}
