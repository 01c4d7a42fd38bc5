use std::fmt;

use wander_core::model::{AnswerMap, AnswerValue, Question};

use crate::api::PreferenceSubmission;
use crate::error::FlowError;

//
// ─── FLOW SIGNAL ──────────────────────────────────────────────────────────────
//

/// What happened when the flow moved past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSignal {
    /// The flow advanced to the next question.
    Advanced,
    /// The last question was passed; the flow is done.
    Finished,
}

/// Aggregated view of flow progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowProgress {
    pub total: usize,
    pub position: usize,
    pub is_last: bool,
}

//
// ─── QUESTION FLOW ────────────────────────────────────────────────────────────
//

/// Sequential walker over an ordered question list.
///
/// Holds the cursor and the locally recorded answers. Answers are recorded
/// without validation and checked against the current question's kind only
/// when the flow is asked whether it may advance. Submitting and the
/// `is_submitting` gate live one layer up (`FlowLoopService` and the ui
/// view-model); this type is fully synchronous.
pub struct QuestionFlow {
    questions: Vec<Question>,
    current: usize,
    answers: AnswerMap,
}

impl QuestionFlow {
    /// Start a flow at the first question with no recorded answers.
    ///
    /// An empty list is allowed and produces a terminal flow that exposes
    /// no current question.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            answers: AnswerMap::new(),
        }
    }

    /// Replace the question list when the upstream source refreshes.
    ///
    /// The cursor and answer map reset only when the *length* of the list
    /// changes. This mirrors the behavior the product shipped with (reset
    /// keyed on list length, not content); see DESIGN.md.
    pub fn sync_questions(&mut self, questions: Vec<Question>) {
        let reset = questions.len() != self.questions.len();
        self.questions = questions;
        if reset {
            self.current = 0;
            self.answers.clear();
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based position of the cursor. Stays within `[0, total)` for a
    /// non-empty flow, including after the final submission.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.questions.is_empty() && self.current == self.questions.len() - 1
    }

    #[must_use]
    pub fn progress(&self) -> FlowProgress {
        FlowProgress {
            total: self.total(),
            position: self.current,
            is_last: self.is_last(),
        }
    }

    /// Record (or overwrite) the answer for the current question.
    ///
    /// Never validates; no-op when the flow has no current question. The
    /// map only ever holds ids from the current list.
    pub fn record_answer(&mut self, value: AnswerValue) {
        if let Some(question) = self.current_question() {
            let id = question.id();
            self.answers.insert(id, value);
        }
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        let question = self.current_question()?;
        self.answers.get(&question.id())
    }

    /// Whether the current question's recorded answer passes its kind's
    /// validation rule. Gates Next/Complete, never Skip.
    #[must_use]
    pub fn has_valid_answer(&self) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        self.answers
            .get(&question.id())
            .is_some_and(|answer| answer.satisfies(question.kind()))
    }

    /// Build the wire submission for the current answer.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Exhausted` when there is no current question,
    /// `FlowError::Unanswered` when the recorded answer does not validate,
    /// and `FlowError::Answer` when formatting fails.
    pub fn submission(&self) -> Result<PreferenceSubmission, FlowError> {
        let question = self.current_question().ok_or(FlowError::Exhausted)?;
        let answer = self
            .answers
            .get(&question.id())
            .ok_or(FlowError::Unanswered)?;
        if !answer.satisfies(question.kind()) {
            return Err(FlowError::Unanswered);
        }
        Ok(PreferenceSubmission {
            question_id: question.id(),
            answer: answer.payload_for(question.kind())?,
        })
    }

    /// Move past the current question without an answer.
    ///
    /// Never touches the answer map. On the last question this finishes the
    /// flow instead of advancing.
    pub fn skip(&mut self) -> FlowSignal {
        if self.is_last() || self.questions.is_empty() {
            return FlowSignal::Finished;
        }
        self.current += 1;
        FlowSignal::Advanced
    }

    /// Advance after the gateway accepted the current answer. The cursor
    /// never moves past the last question; finishing leaves it in place.
    pub fn mark_submitted(&mut self) -> FlowSignal {
        if self.is_last() || self.questions.is_empty() {
            return FlowSignal::Finished;
        }
        self.current += 1;
        FlowSignal::Advanced
    }
}

impl fmt::Debug for QuestionFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionFlow")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use wander_core::model::{
        AnswerPayload, Choice, ChoiceId, Question, QuestionId, QuestionKind, YesNo,
    };

    fn bool_question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            "Travelling alone?",
            QuestionKind::Bool,
            Vec::new(),
        )
    }

    fn multi_question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            "Which regions interest you?",
            QuestionKind::MultiChoice,
            vec![
                Choice::new(ChoiceId::new(10), "Coast"),
                Choice::new(ChoiceId::new(11), "Mountains"),
            ],
        )
    }

    fn text_question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            "Where should we deliver your guide?",
            QuestionKind::Text,
            Vec::new(),
        )
    }

    #[test]
    fn fresh_flow_starts_at_zero_with_no_answers() {
        let flow = QuestionFlow::new(vec![bool_question(1), text_question(2)]);
        assert_eq!(flow.current_index(), 0);
        assert!(flow.current_answer().is_none());
        assert!(!flow.has_valid_answer());
        assert_eq!(flow.total(), 2);
    }

    #[test]
    fn empty_flow_exposes_no_current_question() {
        let mut flow = QuestionFlow::new(Vec::new());
        assert!(flow.is_empty());
        assert!(flow.current_question().is_none());
        assert!(!flow.is_last());
        assert!(matches!(flow.submission(), Err(FlowError::Exhausted)));
        assert_eq!(flow.skip(), FlowSignal::Finished);
    }

    #[test]
    fn record_answer_overwrites_previous_value() {
        let mut flow = QuestionFlow::new(vec![bool_question(1)]);
        flow.record_answer(AnswerValue::Bool(YesNo::No));
        flow.record_answer(AnswerValue::Bool(YesNo::Yes));
        assert_eq!(
            flow.current_answer(),
            Some(&AnswerValue::Bool(YesNo::Yes))
        );
    }

    #[test]
    fn multi_choice_deselection_blocks_advance() {
        let mut flow = QuestionFlow::new(vec![multi_question(1)]);
        let mut selection = AnswerValue::MultiChoice(Vec::new());
        selection.toggle_choice(ChoiceId::new(10));
        flow.record_answer(selection.clone());
        assert!(flow.has_valid_answer());

        selection.toggle_choice(ChoiceId::new(10));
        flow.record_answer(selection);
        assert!(!flow.has_valid_answer());
        assert!(matches!(flow.submission(), Err(FlowError::Unanswered)));
    }

    #[test]
    fn skip_advances_without_touching_answers() {
        let mut flow = QuestionFlow::new(vec![bool_question(1), bool_question(2)]);
        flow.record_answer(AnswerValue::Bool(YesNo::Yes));

        assert_eq!(flow.skip(), FlowSignal::Advanced);
        assert_eq!(flow.current_index(), 1);
        // The answer recorded for question 1 is still there.
        assert_eq!(flow.answers.len(), 1);

        assert_eq!(flow.skip(), FlowSignal::Finished);
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.answers.len(), 1);
    }

    #[test]
    fn submission_formats_bool_answer_as_boolean() {
        let mut flow = QuestionFlow::new(vec![bool_question(1)]);
        flow.record_answer(AnswerValue::Bool(YesNo::Yes));
        let submission = flow.submission().unwrap();
        assert_eq!(submission.question_id, QuestionId::new(1));
        assert_eq!(submission.answer, AnswerPayload::Bool(true));
    }

    #[test]
    fn unsupported_kind_blocks_submission_but_not_skip() {
        let unsupported = Question::new(
            QuestionId::new(1),
            "???",
            QuestionKind::Unsupported("MOD_SLIDER".into()),
            Vec::new(),
        );
        let mut flow = QuestionFlow::new(vec![unsupported, bool_question(2)]);
        flow.record_answer(AnswerValue::Bool(YesNo::Yes));
        assert!(!flow.has_valid_answer());
        assert!(matches!(flow.submission(), Err(FlowError::Unanswered)));
        assert_eq!(flow.skip(), FlowSignal::Advanced);
        assert_eq!(flow.current_index(), 1);
    }

    #[test]
    fn mark_submitted_finishes_on_last_without_moving_cursor() {
        let mut flow = QuestionFlow::new(vec![bool_question(1), bool_question(2)]);
        assert_eq!(flow.mark_submitted(), FlowSignal::Advanced);
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.mark_submitted(), FlowSignal::Finished);
        assert_eq!(flow.current_index(), 1);
    }

    #[test]
    fn sync_with_different_length_resets_cursor_and_answers() {
        let mut flow = QuestionFlow::new(vec![bool_question(1), bool_question(2)]);
        flow.record_answer(AnswerValue::Bool(YesNo::Yes));
        flow.skip();

        flow.sync_questions(vec![bool_question(3)]);
        assert_eq!(flow.current_index(), 0);
        assert!(flow.current_answer().is_none());
        assert_eq!(flow.answers.len(), 0);
    }

    #[test]
    fn sync_with_same_length_keeps_state() {
        // Length-keyed reset, preserved from the shipped behavior: a
        // same-length list with different content keeps cursor and answers.
        let mut flow = QuestionFlow::new(vec![bool_question(1), bool_question(2)]);
        flow.record_answer(AnswerValue::Bool(YesNo::No));
        flow.skip();

        flow.sync_questions(vec![bool_question(7), bool_question(8)]);
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.answers.len(), 1);
    }

    #[test]
    fn progress_reports_position_and_last_flag() {
        let mut flow = QuestionFlow::new(vec![bool_question(1), bool_question(2)]);
        assert_eq!(
            flow.progress(),
            FlowProgress {
                total: 2,
                position: 0,
                is_last: false
            }
        );
        flow.skip();
        assert!(flow.progress().is_last);
    }
}
