//! Question bank data model

use serde::{Deserialize, Serialize};

/// How a question is answered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Pick one of several listed answers
    #[default]
    MultipleChoice,
    /// Present a physical card to the scanner
    ScanMode,
}

impl Modality {
    /// Short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple choice",
            Self::ScanMode => "scan",
        }
    }
}

/// Reference to an animation clip shown while a question is presented
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipRef {
    /// Clip name as known to the animation player
    pub name: String,
    /// Authored clip length in seconds
    pub duration_secs: f32,
}

impl ClipRef {
    pub fn new(name: impl Into<String>, duration_secs: f32) -> Self {
        Self { name: name.into(), duration_secs }
    }
}

/// A candidate answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    /// Answer label (matched against scanned card labels in scan mode)
    pub text: String,
    /// Whether this answer is correct
    #[serde(default)]
    pub correct: bool,
    /// Optional indicator asset shown next to the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
}

impl Answer {
    pub fn correct(text: impl Into<String>) -> Self {
        Self { text: text.into(), correct: true, indicator: None }
    }

    pub fn wrong(text: impl Into<String>) -> Self {
        Self { text: text.into(), correct: false, indicator: None }
    }
}

/// A single authored question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Unique identifier within a bank
    pub id: String,
    /// Prompt shown to the player
    pub prompt: String,
    /// Answer modality
    #[serde(default)]
    pub modality: Modality,
    /// Clips played in order when the question is presented
    #[serde(default)]
    pub clips: Vec<ClipRef>,
    /// Candidate answers, in authored order
    pub answers: Vec<Answer>,
}

impl Question {
    /// Whether `index` names a correct answer. Out-of-range indices are never correct.
    pub fn is_correct_index(&self, index: usize) -> bool {
        self.answers.get(index).is_some_and(|a| a.correct)
    }

    /// The first answer marked correct
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.correct)
    }

    /// Case-insensitive match of a scanned label against the correct answer
    pub fn matches_scan(&self, label: &str) -> bool {
        self.correct_answer()
            .is_some_and(|a| a.text.trim().to_lowercase() == label.trim().to_lowercase())
    }

    /// Check the authoring rules for this question's modality
    pub fn check(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt is empty".to_string());
        }
        if let Some(clip) =
            self.clips.iter().find(|c| !c.duration_secs.is_finite() || c.duration_secs < 0.0)
        {
            return Err(format!("clip '{}' has an invalid duration", clip.name));
        }

        let correct = self.answers.iter().filter(|a| a.correct).count();
        match self.modality {
            Modality::MultipleChoice => {
                if self.answers.len() < 2 {
                    return Err("multiple-choice questions need at least two answers".to_string());
                }
                if correct == 0 {
                    return Err("no answer is marked correct".to_string());
                }
            }
            Modality::ScanMode => {
                if correct != 1 {
                    return Err(format!(
                        "scan questions need exactly one correct answer, found {}",
                        correct
                    ));
                }
            }
        }
        Ok(())
    }
}
