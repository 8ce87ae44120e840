//! Batch evaluation reports with JSON persistence and markdown output.
//!
//! A report evaluates an answer sheet against a question bank. Reports are
//! written by the CLI; the engine itself never persists anything.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bank::QuestionBank;
use crate::engine::AnswerEvaluator;
use crate::locale::Locale;
use crate::model::{Aspect, EvaluationResult};
use crate::statistics::{compute_summary, ScoreSummary};

/// A set of candidate answers keyed by question ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSheet {
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    /// ID of the question being answered.
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl AnswerSheet {
    /// Parse an answer sheet from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse answer sheet: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// A complete batch evaluation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub bank: BankSummary,
    /// Locale the feedback was generated in.
    pub locale: Locale,
    pub entries: Vec<ReportEntry>,
    /// Question IDs on the answer sheet that the bank does not contain.
    #[serde(default)]
    pub unknown_questions: Vec<String>,
    pub summary: ScoreSummary,
}

/// Summary of a question bank (without the questions themselves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

/// One evaluated answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub question_id: String,
    pub category: String,
    pub question: String,
    pub result: EvaluationResult,
}

impl EvaluationReport {
    /// Evaluate every answer on the sheet against the bank.
    pub fn build(evaluator: &AnswerEvaluator, bank: &QuestionBank, sheet: &AnswerSheet) -> Self {
        let mut entries = Vec::new();
        let mut unknown_questions = Vec::new();

        for submitted in &sheet.answers {
            let Some(question) = bank.find(&submitted.question) else {
                tracing::warn!(
                    "question '{}' not found in bank '{}', skipping",
                    submitted.question,
                    bank.id
                );
                unknown_questions.push(submitted.question.clone());
                continue;
            };

            entries.push(ReportEntry {
                question_id: question.id.clone(),
                category: question.category.clone(),
                question: question.question.clone(),
                result: evaluator.evaluate(&submitted.answer, &question.answer),
            });
        }

        let results: Vec<EvaluationResult> = entries.iter().map(|e| e.result.clone()).collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: bank.id.clone(),
                name: bank.name.clone(),
                question_count: bank.questions.len(),
            },
            locale: evaluator.criteria().locale,
            entries,
            unknown_questions,
            summary: compute_summary(&results),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: EvaluationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let messages = self.locale.messages();
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", self.bank.name));
        md.push_str(&format!(
            "**Summary:** {} answers, mean {:.1}, median {:.1}, range {}-{}\n\n",
            self.summary.total,
            self.summary.mean_score,
            self.summary.median_score,
            self.summary.min_score,
            self.summary.max_score
        ));

        if !self.summary.grade_distribution.is_empty() {
            md.push_str("| Grade | Count |\n");
            md.push_str("|-------|-------|\n");
            for (grade, count) in &self.summary.grade_distribution {
                md.push_str(&format!("| {} | {} |\n", grade.label(self.locale), count));
            }
            md.push('\n');
        }

        if !self.entries.is_empty() {
            md.push_str(&format!(
                "| Question | Score | Grade | {} | {} | {} |\n",
                messages.aspect(Aspect::KeyPointCoverage),
                messages.aspect(Aspect::Completeness),
                messages.aspect(Aspect::Clarity)
            ));
            md.push_str("|----------|-------|-------|---|---|---|\n");
            for entry in &self.entries {
                let aspect = |a: Aspect| {
                    entry
                        .result
                        .aspect(a)
                        .map(|s| s.score.to_string())
                        .unwrap_or_else(|| "-".to_string())
                };
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    entry.question_id,
                    entry.result.score,
                    entry.result.grade.label(self.locale),
                    aspect(Aspect::KeyPointCoverage),
                    aspect(Aspect::Completeness),
                    aspect(Aspect::Clarity)
                ));
            }
            md.push('\n');

            md.push_str("### Feedback\n\n");
            for entry in &self.entries {
                md.push_str(&format!(
                    "- **{}** {}: {}\n",
                    entry.question_id, entry.question, entry.result.feedback
                ));
            }
        }

        if !self.unknown_questions.is_empty() {
            md.push_str(&format!(
                "\nUnknown questions: {}\n",
                self.unknown_questions.join(", ")
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::parse_bank_str;
    use crate::model::Grade;
    use std::path::PathBuf;

    const BANK: &str = r#"
[bank]
id = "redis"
name = "Redis"

[[categories]]
id = "redis"
name = "Redis"

[[questions]]
id = "redis-1"
category = "redis"
question = "What is Redis?"
answer = """
1. Redis stores data in memory
2. Redis supports persistence to disk
3. Redis offers rich data types
"""

[[questions]]
id = "redis-2"
category = "redis"
question = "How do you build a lock?"
answer = """
- Acquire with SET NX and an expiry
- Release only if the value matches
- Use a Lua script for atomic release
"""
"#;

    const SHEET: &str = r#"
[[answers]]
question = "redis-1"
answer = "Redis stores data in memory. Redis supports persistence to disk."

[[answers]]
question = "redis-2"
answer = ""

[[answers]]
question = "redis-9"
answer = "no such question"
"#;

    fn build() -> EvaluationReport {
        let bank = parse_bank_str(BANK, &PathBuf::from("bank.toml")).unwrap();
        let sheet = AnswerSheet::from_toml_str(SHEET).unwrap();
        EvaluationReport::build(&AnswerEvaluator::default(), &bank, &sheet)
    }

    #[test]
    fn build_evaluates_known_questions() {
        let report = build();
        assert_eq!(report.bank.question_count, 2);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.unknown_questions, vec!["redis-9"]);

        let first = &report.entries[0].result;
        assert_eq!(first.matched_points.len(), 2);
        assert_eq!(first.details[0].score, 67);

        let second = &report.entries[1].result;
        assert_eq!(second.score, 0);
        assert_eq!(second.grade, Grade::VeryPoor);

        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.answered, 1);
    }

    #[test]
    fn json_roundtrip() {
        let report = build();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = EvaluationReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.summary, report.summary);
    }

    #[test]
    fn markdown_output() {
        let md = build().to_markdown();
        assert!(md.starts_with("# Redis"));
        assert!(md.contains("| redis-1 |"));
        assert!(md.contains("关键点覆盖"));
        assert!(md.contains("未提供答案"));
        assert!(md.contains("Unknown questions: redis-9"));
    }

    #[test]
    fn empty_sheet() {
        let sheet = AnswerSheet::from_toml_str("").unwrap();
        assert!(sheet.answers.is_empty());
    }
}
