//! Question bank loading and validation
//!
//! A bank is an ordered, immutable collection of questions. It is loaded once
//! (from a JSON file or the bundled alphabet bank) before any level starts.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::BankError;
use super::model::{Modality, Question};

/// Bank bundled with the binary
const BUNDLED_BANK: &str = include_str!("../../banks/alphabet.json");

/// On-disk bank format
#[derive(Debug, Serialize, Deserialize)]
struct BankFile {
    #[serde(default)]
    name: String,
    questions: Vec<Question>,
}

/// An ordered collection of validated questions
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    name: String,
    questions: Vec<Arc<Question>>,
}

impl QuestionBank {
    /// Build a bank from questions, checking every authoring rule
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(BankError::DuplicateId(question.id.clone()));
            }
            question
                .check()
                .map_err(|reason| BankError::InvalidQuestion { id: question.id.clone(), reason })?;
        }

        Ok(Self { name: name.into(), questions: questions.into_iter().map(Arc::new).collect() })
    }

    /// Parse a bank from JSON text
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let file: BankFile = serde_json::from_str(json)?;
        Self::new(file.name, file.questions)
    }

    /// Load a bank from a JSON file
    pub fn load(path: &Path) -> Result<Self, BankError> {
        let contents = std::fs::read_to_string(path)?;
        let mut bank = Self::from_json(&contents)?;
        if bank.name.is_empty() {
            bank.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
        }
        tracing::debug!("Loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// The sign alphabet bank shipped with signquiz
    pub fn bundled() -> Result<Self, BankError> {
        Self::from_json(BUNDLED_BANK)
    }

    /// Bank display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions in authored order
    pub fn questions(&self) -> &[Arc<Question>] {
        &self.questions
    }

    /// Count questions of a modality
    pub fn count_modality(&self, modality: Modality) -> usize {
        self.questions.iter().filter(|q| q.modality == modality).count()
    }
}
