use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::model::ids::{ChoiceId, QuestionId};
use crate::model::question::QuestionKind;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when turning a stored answer into a wire payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("answer value does not match question kind {kind}")]
    KindMismatch { kind: String },
    #[error("question kind {kind} cannot be submitted")]
    UnsupportedKind { kind: String },
}

//
// ─── ANSWER VALUE ─────────────────────────────────────────────────────────────
//

/// A yes/no selection for boolean questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    #[must_use]
    pub fn as_bool(self) -> bool {
        matches!(self, YesNo::Yes)
    }

    /// Label shown on the selection button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// The locally stored answer for one question, keyed by question kind.
///
/// Values are recorded as the user interacts and validated only when the
/// flow tries to advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// ISO date string as picked in the calendar.
    Date(String),
    Bool(YesNo),
    /// Structured pair; either half may be left empty.
    Text { name: String, pincode: String },
    /// Selected choice ids in toggle order.
    MultiChoice(Vec<ChoiceId>),
}

impl AnswerValue {
    /// Whether this value counts as "answered" for the given question kind.
    ///
    /// - `Text`: name OR pincode non-empty after trimming.
    /// - `MultiChoice`: at least one selected choice.
    /// - `Date`: non-empty date string.
    /// - `Bool`: any recorded selection counts.
    /// - `Unsupported` kinds never validate, blocking advance but not skip.
    ///
    /// A value whose variant does not match the kind never validates.
    #[must_use]
    pub fn satisfies(&self, kind: &QuestionKind) -> bool {
        match (kind, self) {
            (QuestionKind::Date, AnswerValue::Date(date)) => !date.trim().is_empty(),
            (QuestionKind::Bool, AnswerValue::Bool(_)) => true,
            (QuestionKind::Text, AnswerValue::Text { name, pincode }) => {
                !name.trim().is_empty() || !pincode.trim().is_empty()
            }
            (QuestionKind::MultiChoice, AnswerValue::MultiChoice(selected)) => {
                !selected.is_empty()
            }
            (QuestionKind::Unsupported(_), _) => false,
            _ => false,
        }
    }

    /// Whether the given choice id is currently selected.
    ///
    /// Always false for non-multi-choice values.
    #[must_use]
    pub fn has_choice(&self, choice: ChoiceId) -> bool {
        match self {
            AnswerValue::MultiChoice(selected) => selected.contains(&choice),
            _ => false,
        }
    }

    /// Toggle a choice id in a multi-choice selection.
    ///
    /// No-op for other variants.
    pub fn toggle_choice(&mut self, choice: ChoiceId) {
        if let AnswerValue::MultiChoice(selected) = self {
            if let Some(position) = selected.iter().position(|id| *id == choice) {
                selected.remove(position);
            } else {
                selected.push(choice);
            }
        }
    }

    /// Format this value as the submission payload for the given kind.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::KindMismatch` when the stored variant does not
    /// match the question kind, and `AnswerError::UnsupportedKind` for kinds
    /// that cannot be submitted.
    pub fn payload_for(&self, kind: &QuestionKind) -> Result<AnswerPayload, AnswerError> {
        match (kind, self) {
            (QuestionKind::Date, AnswerValue::Date(date)) => {
                Ok(AnswerPayload::Date(date.clone()))
            }
            (QuestionKind::Bool, AnswerValue::Bool(value)) => {
                Ok(AnswerPayload::Bool(value.as_bool()))
            }
            (QuestionKind::Text, AnswerValue::Text { name, pincode }) => {
                Ok(AnswerPayload::Text(format!("{name},{pincode}")))
            }
            (QuestionKind::MultiChoice, AnswerValue::MultiChoice(selected)) => Ok(
                AnswerPayload::ChoiceIds(selected.iter().map(|id| id.value()).collect()),
            ),
            (QuestionKind::Unsupported(raw), _) => Err(AnswerError::UnsupportedKind {
                kind: raw.clone(),
            }),
            (kind, _) => Err(AnswerError::KindMismatch {
                kind: kind.as_tag().to_string(),
            }),
        }
    }
}

/// Locally recorded answers, keyed by question id.
pub type AnswerMap = HashMap<QuestionId, AnswerValue>;

//
// ─── ANSWER PAYLOAD ───────────────────────────────────────────────────────────
//

/// The wire shape of one submitted answer.
///
/// Serialized untagged so the backend sees a boolean, a string, or a list of
/// numeric ids depending on the question kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerPayload {
    Bool(bool),
    Text(String),
    ChoiceIds(Vec<u64>),
    Date(String),
}
