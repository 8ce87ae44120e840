//! TOML question bank loader.
//!
//! A question bank supplies the reference answers the engine evaluates
//! against. This module only reads banks and checks them for problems;
//! editing and import/export belong to the application that owns the bank.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::criteria::KeyPointRules;
use crate::keypoints::extract_key_points;

/// A named collection of interview questions with reference answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A single question and its reference answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// Id of the category this question belongs to.
    pub category: String,
    pub question: String,
    /// Reference answer, usually an itemized list.
    pub answer: String,
}

impl QuestionBank {
    pub fn find(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Questions in a category, in bank order.
    pub fn questions_in<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Question> {
        self.questions.iter().filter(move |q| q.category == category_id)
    }
}

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank`.
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        categories: parsed.categories,
        questions: parsed.questions,
    })
}

/// Recursively load all `.toml` question banks from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// Load a bank file, or every bank under a directory.
pub fn load_banks(path: &Path) -> Result<Vec<QuestionBank>> {
    if path.is_dir() {
        load_bank_directory(path)
    } else {
        Ok(vec![parse_bank(path)?])
    }
}

/// Combine loaded banks into one, keeping question order.
///
/// A single bank is returned unchanged. When ids repeat across banks the
/// first occurrence wins on lookup, the same as searching the banks in order.
pub fn merge_banks(mut banks: Vec<QuestionBank>) -> Result<QuestionBank> {
    match banks.len() {
        0 => anyhow::bail!("no question banks found"),
        1 => return Ok(banks.remove(0)),
        _ => {}
    }

    let id = banks.iter().map(|b| b.id.as_str()).collect::<Vec<_>>().join("+");
    let name = banks.iter().map(|b| b.name.as_str()).collect::<Vec<_>>().join(", ");
    let mut merged = QuestionBank {
        id,
        name,
        description: String::new(),
        categories: Vec::new(),
        questions: Vec::new(),
    };
    for bank in banks {
        merged.categories.extend(bank.categories);
        merged.questions.extend(bank.questions);
    }
    Ok(merged)
}

/// What a validation warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    DuplicateCategory,
    DuplicateQuestion,
    UnknownCategory,
    EmptyQuestion,
    EmptyAnswer,
    /// The reference is present but too short or unstructured to score against.
    NoKeyPoints,
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank, rules: &KeyPointRules) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_categories = HashSet::new();
    for category in &bank.categories {
        if !seen_categories.insert(category.id.as_str()) {
            warnings.push(ValidationWarning {
                kind: WarningKind::DuplicateCategory,
                question_id: None,
                message: format!("duplicate category ID: {}", category.id),
            });
        }
    }

    let mut seen_ids = HashSet::new();
    for q in &bank.questions {
        let warn = |kind: WarningKind, message: String| ValidationWarning {
            kind,
            question_id: Some(q.id.clone()),
            message,
        };

        if !seen_ids.insert(q.id.as_str()) {
            warnings.push(warn(
                WarningKind::DuplicateQuestion,
                format!("duplicate question ID: {}", q.id),
            ));
        }
        if !seen_categories.contains(q.category.as_str()) {
            warnings.push(warn(
                WarningKind::UnknownCategory,
                format!("unknown category: {}", q.category),
            ));
        }
        if q.question.trim().is_empty() {
            warnings.push(warn(WarningKind::EmptyQuestion, "question text is empty".into()));
        }
        if q.answer.trim().is_empty() {
            warnings.push(warn(WarningKind::EmptyAnswer, "reference answer is empty".into()));
        } else if extract_key_points(&q.answer, rules).is_empty() {
            warnings.push(warn(
                WarningKind::NoKeyPoints,
                "reference answer yields no key points; coverage will always be 0".into(),
            ));
        }
    }

    warnings
}
