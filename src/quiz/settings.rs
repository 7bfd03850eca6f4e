//! Tunable quiz rules

use serde::{Deserialize, Serialize};

use super::error::QuizError;

/// Which outcome wins when the last question's answer also uses up the final attempt
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Attempt exhaustion is checked first
    #[default]
    GameOver,
    /// Completing the level is checked first
    GameFinished,
}

/// Rules applied to every level of a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizSettings {
    /// Questions sampled for each level
    pub questions_per_level: usize,

    /// Points per correct answer
    pub score_multiplier: u32,

    /// Wrong answers allowed across the whole level
    pub attempt_limit: u32,

    /// Seconds allowed per question
    pub question_time_limit: f32,

    /// Pause between scoring one question and presenting the next (seconds)
    pub transition_delay: f32,

    /// Outcome precedence on the final question
    pub tie_break: TieBreak,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions_per_level: 10,
            score_multiplier: 10,
            attempt_limit: 3,
            question_time_limit: 10.0,
            transition_delay: 2.0,
            tie_break: TieBreak::GameOver,
        }
    }
}

impl QuizSettings {
    /// Reject settings that cannot drive a session
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions_per_level == 0 {
            return Err(QuizError::InvalidSettings(
                "questions_per_level must be at least 1".to_string(),
            ));
        }
        if self.checked_max_score().is_none() {
            return Err(QuizError::InvalidSettings(
                "questions_per_level * score_multiplier must fit in a 32-bit score".to_string(),
            ));
        }
        if self.attempt_limit == 0 {
            return Err(QuizError::InvalidSettings("attempt_limit must be at least 1".to_string()));
        }
        if !self.question_time_limit.is_finite() || self.question_time_limit <= 0.0 {
            return Err(QuizError::InvalidSettings(
                "question_time_limit must be a positive number of seconds".to_string(),
            ));
        }
        if !self.transition_delay.is_finite() || self.transition_delay < 0.0 {
            return Err(QuizError::InvalidSettings(
                "transition_delay must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Highest score reachable in one level, saturating at `u32::MAX`
    pub fn max_score(&self) -> u32 {
        self.checked_max_score().unwrap_or(u32::MAX)
    }

    fn checked_max_score(&self) -> Option<u32> {
        u32::try_from(self.questions_per_level).ok()?.checked_mul(self.score_multiplier)
    }
}
