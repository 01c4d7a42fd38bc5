use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::{ChoiceId, QuestionId};

//
// ─── QUESTION KIND ────────────────────────────────────────────────────────────
//

/// The kind of input a question expects.
///
/// Decoded from the wire tags `DATE`, `BOOL`, `TEXT` and `MOD_MULTI`. Any
/// other tag decodes to `Unsupported`, which keeps the raw string so it can
/// be shown in a placeholder. All per-kind behavior (rendering, validation,
/// payload formatting) dispatches on this enum in one place, so adding a new
/// kind is a compile-checked change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionKind {
    /// ISO date answer.
    Date,
    /// Yes/no answer.
    Bool,
    /// Structured free-form pair (name + pincode).
    Text,
    /// Multiple selection from the question's choices.
    MultiChoice,
    /// A tag this build does not know how to render.
    Unsupported(String),
}

impl QuestionKind {
    /// The wire tag for this kind.
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            QuestionKind::Date => "DATE",
            QuestionKind::Bool => "BOOL",
            QuestionKind::Text => "TEXT",
            QuestionKind::MultiChoice => "MOD_MULTI",
            QuestionKind::Unsupported(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, QuestionKind::Unsupported(_))
    }
}

impl From<String> for QuestionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "DATE" => QuestionKind::Date,
            "BOOL" => QuestionKind::Bool,
            "TEXT" => QuestionKind::Text,
            "MOD_MULTI" => QuestionKind::MultiChoice,
            _ => QuestionKind::Unsupported(raw),
        }
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        kind.as_tag().to_string()
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

//
// ─── CHOICE ───────────────────────────────────────────────────────────────────
//

/// One selectable option of a multi-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
}

impl Choice {
    #[must_use]
    pub fn new(id: ChoiceId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single fetched question. Immutable for the duration of a flow.
///
/// `choices` is only meaningful for `MultiChoice` questions and defaults to
/// empty when the field is absent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    #[serde(rename = "question_type")]
    kind: QuestionKind,
    #[serde(default)]
    choices: Vec<Choice>,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        kind: QuestionKind,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
            choices,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Choices in their fetched (display) order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }
}
