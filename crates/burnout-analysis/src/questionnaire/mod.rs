//! Questionnaire definitions for input collectors.
//!
//! The assessor never calls into this module; a front end uses it to render
//! questions and to make sure every answer is a real option before calling
//! [`crate::Assessor::assess`].

pub mod reference;

use serde::Serialize;

use burnout_core::constants::PLACEHOLDER_TOKEN;
use burnout_core::errors::QuestionnaireError;
use burnout_core::types::AnswerSet;

pub use reference::reference;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKind {
    /// Pick one label.
    Choice { options: &'static [&'static str] },
    /// Integer slider, bounds inclusive. Answers are the decimal value.
    Slider { min: u8, max: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub kind: AnswerKind,
}

impl Question {
    pub const fn choice(prompt: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            prompt,
            kind: AnswerKind::Choice { options },
        }
    }

    pub const fn slider(prompt: &'static str, min: u8, max: u8) -> Self {
        Self {
            prompt,
            kind: AnswerKind::Slider { min, max },
        }
    }

    /// Whether `token` is a valid answer to this question.
    pub fn accepts(&self, token: &str) -> bool {
        match self.kind {
            AnswerKind::Choice { options } => options.iter().any(|option| *option == token),
            AnswerKind::Slider { min, max } => token
                .parse::<u8>()
                .map(|v| (min..=max).contains(&v))
                .unwrap_or(false),
        }
    }
}

/// An ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Check that `answers` answers every question with one of its options.
    pub fn check(&self, answers: &AnswerSet) -> Result<(), QuestionnaireError> {
        if answers.len() != self.questions.len() {
            return Err(QuestionnaireError::WrongLength {
                expected: self.questions.len(),
                actual: answers.len(),
            });
        }
        for (index, (question, token)) in self.questions.iter().zip(answers.iter()).enumerate() {
            if token.trim().is_empty() || token == PLACEHOLDER_TOKEN {
                return Err(QuestionnaireError::Unanswered { index });
            }
            if !question.accepts(token) {
                return Err(QuestionnaireError::InvalidOption {
                    index,
                    token: token.to_string(),
                });
            }
        }
        Ok(())
    }
}
