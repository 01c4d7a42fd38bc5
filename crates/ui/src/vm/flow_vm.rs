use services::api::PreferenceSubmission;
use services::error::FlowError;
use services::question_flow::{FlowProgress, FlowSignal, QuestionFlow};
use wander_core::model::{AnswerValue, Question, QuestionId};

use crate::views::ViewError;

/// What the view should do after a submit or skip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Moved on to the next question.
    Continue,
    /// The last question was answered; the questionnaire is done.
    Completed,
    /// The last question was skipped; the questionnaire is done without
    /// a final submission.
    SkippedOut,
    /// The current answer is missing or invalid; nothing was sent.
    NeedsAnswer,
    /// A submission is already in flight; the request was dropped.
    Busy,
}

/// View-model wrapping the question flow with an in-flight gate.
///
/// The vm lives inside a `Signal` the whole time, so submitting happens in
/// two synchronous halves around the await: [`begin_submission`] claims the
/// gate and builds the wire payload, the caller awaits the gateway with no
/// vm borrow held, and [`finish_submission`] applies the verdict. The gate
/// is released on every exit path, including failures, so the user can
/// retry.
///
/// [`begin_submission`]: QuestionFlowVm::begin_submission
/// [`finish_submission`]: QuestionFlowVm::finish_submission
pub struct QuestionFlowVm {
    flow: QuestionFlow,
    submitting: bool,
}

impl QuestionFlowVm {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            flow: QuestionFlow::new(questions),
            submitting: false,
        }
    }

    /// Feed a refreshed question list through to the flow.
    pub fn sync_questions(&mut self, questions: Vec<Question>) {
        self.flow.sync_questions(questions);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.flow.current_question()
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.flow.current_answer()
    }

    #[must_use]
    pub fn progress(&self) -> FlowProgress {
        self.flow.progress()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.flow.is_last()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn record_answer(&mut self, value: AnswerValue) {
        self.flow.record_answer(value);
    }

    /// Whether the Next/Complete button should be enabled.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.submitting && self.flow.has_valid_answer()
    }

    /// Claim the in-flight gate and build the submission for the current
    /// question.
    ///
    /// # Errors
    ///
    /// Returns `FlowOutcome::Busy` while a submission is in flight and
    /// `FlowOutcome::NeedsAnswer` when the recorded answer does not
    /// validate; neither claims the gate.
    pub fn begin_submission(&mut self) -> Result<PreferenceSubmission, FlowOutcome> {
        if self.submitting {
            return Err(FlowOutcome::Busy);
        }
        let Ok(submission) = self.flow.submission() else {
            return Err(FlowOutcome::NeedsAnswer);
        };
        self.submitting = true;
        Ok(submission)
    }

    /// Apply the gateway's verdict for a submission started with
    /// [`begin_submission`](QuestionFlowVm::begin_submission).
    ///
    /// Always releases the gate. Returns `None` for a stale resolution:
    /// the gate was never claimed on this vm (it was rebuilt while the
    /// request was in flight) or the flow reset away from `question_id`.
    /// A stale verdict leaves the flow untouched.
    pub fn finish_submission(
        &mut self,
        question_id: QuestionId,
        result: Result<(), FlowError>,
    ) -> Option<Result<FlowOutcome, ViewError>> {
        if !self.submitting {
            return None;
        }
        self.submitting = false;
        if self.flow.current_question().map(Question::id) != Some(question_id) {
            return None;
        }
        Some(match result {
            Ok(()) => match self.flow.mark_submitted() {
                FlowSignal::Advanced => Ok(FlowOutcome::Continue),
                FlowSignal::Finished => Ok(FlowOutcome::Completed),
            },
            Err(FlowError::Submit(_)) => Err(ViewError::SubmitFailed),
            Err(_) => Ok(FlowOutcome::NeedsAnswer),
        })
    }

    /// Skip the current question. Recorded answers are left alone.
    pub fn skip(&mut self) -> FlowOutcome {
        if self.submitting {
            return FlowOutcome::Busy;
        }
        match self.flow.skip() {
            FlowSignal::Advanced => FlowOutcome::Continue,
            FlowSignal::Finished => FlowOutcome::SkippedOut,
        }
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use services::api::PreferenceGateway;
    use services::error::ApiError;
    use services::flow_loop::FlowLoopService;
    use wander_core::model::{Question, QuestionKind, YesNo};

    struct FakeGateway {
        submissions: Mutex<Vec<PreferenceSubmission>>,
        fail: bool,
    }

    impl FakeGateway {
        fn accepting() -> Arc<Self> {
            Arc::new(Self {
                submissions: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn rejecting() -> Arc<Self> {
            Arc::new(Self {
                submissions: Mutex::new(Vec::new()),
                fail: true,
            })
        }

        fn count(&self) -> usize {
            self.submissions.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PreferenceGateway for FakeGateway {
        async fn submit_preference(
            &self,
            submission: PreferenceSubmission,
        ) -> Result<(), ApiError> {
            self.submissions.lock().unwrap().push(submission);
            if self.fail {
                Err(ApiError::MissingAuth)
            } else {
                Ok(())
            }
        }
    }

    fn bool_question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            "Travelling alone?",
            QuestionKind::Bool,
            Vec::new(),
        )
    }

    /// Drives one full begin/await/finish step the way the view does.
    async fn advance(
        vm: &mut QuestionFlowVm,
        service: &FlowLoopService,
    ) -> Result<FlowOutcome, ViewError> {
        let submission = match vm.begin_submission() {
            Ok(submission) => submission,
            Err(outcome) => return Ok(outcome),
        };
        let question_id = submission.question_id;
        let result = service.submit(submission).await;
        vm.finish_submission(question_id, result)
            .expect("resolution applies to the flow that started it")
    }

    #[tokio::test]
    async fn advance_without_an_answer_reports_needs_answer() {
        let gateway = FakeGateway::accepting();
        let service = FlowLoopService::new(gateway.clone());
        let mut vm = QuestionFlowVm::new(vec![bool_question(1)]);

        let outcome = advance(&mut vm, &service).await.unwrap();
        assert_eq!(outcome, FlowOutcome::NeedsAnswer);
        assert!(!vm.is_submitting());
        assert_eq!(gateway.count(), 0);
    }

    #[tokio::test]
    async fn advance_walks_to_completion() {
        let gateway = FakeGateway::accepting();
        let service = FlowLoopService::new(gateway.clone());
        let mut vm = QuestionFlowVm::new(vec![bool_question(1), bool_question(2)]);

        vm.record_answer(AnswerValue::Bool(YesNo::Yes));
        assert_eq!(
            advance(&mut vm, &service).await.unwrap(),
            FlowOutcome::Continue
        );

        vm.record_answer(AnswerValue::Bool(YesNo::No));
        assert_eq!(
            advance(&mut vm, &service).await.unwrap(),
            FlowOutcome::Completed
        );

        assert_eq!(gateway.count(), 2);
        assert!(!vm.is_submitting());
    }

    #[tokio::test]
    async fn failed_submission_releases_the_gate_and_keeps_state() {
        let gateway = FakeGateway::rejecting();
        let service = FlowLoopService::new(gateway.clone());
        let mut vm = QuestionFlowVm::new(vec![bool_question(1), bool_question(2)]);
        vm.record_answer(AnswerValue::Bool(YesNo::Yes));

        let err = advance(&mut vm, &service).await.unwrap_err();
        assert_eq!(err, ViewError::SubmitFailed);
        assert!(!vm.is_submitting());
        assert_eq!(vm.progress().position, 0);
        assert!(vm.can_advance());

        // Pressing Next again resubmits the same answer.
        let _ = advance(&mut vm, &service).await;
        assert_eq!(gateway.count(), 2);
    }

    #[test]
    fn begin_submission_claims_the_gate_once() {
        let mut vm = QuestionFlowVm::new(vec![bool_question(1)]);
        vm.record_answer(AnswerValue::Bool(YesNo::Yes));

        let submission = vm.begin_submission().unwrap();
        assert_eq!(submission.question_id, QuestionId::new(1));
        assert!(vm.is_submitting());
        assert!(!vm.can_advance());

        assert_eq!(vm.begin_submission().unwrap_err(), FlowOutcome::Busy);
        assert_eq!(vm.skip(), FlowOutcome::Busy);
    }

    #[test]
    fn stale_resolution_after_a_flow_reset_is_dropped() {
        let mut vm = QuestionFlowVm::new(vec![bool_question(1), bool_question(2)]);
        vm.record_answer(AnswerValue::Bool(YesNo::Yes));
        let submission = vm.begin_submission().unwrap();

        // The question list refreshes with a different length while the
        // request is in flight, resetting the flow.
        vm.sync_questions(vec![bool_question(9)]);

        let applied = vm.finish_submission(submission.question_id, Ok(()));
        assert!(applied.is_none());
        assert!(!vm.is_submitting());
        assert_eq!(vm.progress().position, 0);
    }

    #[test]
    fn resolution_landing_on_a_fresh_vm_is_ignored() {
        // The vm was rebuilt (sheet dismissed and reopened) while a
        // submission was pending; its verdict must not touch the new flow.
        let mut vm = QuestionFlowVm::new(vec![bool_question(1), bool_question(2)]);
        let applied = vm.finish_submission(QuestionId::new(1), Ok(()));
        assert!(applied.is_none());
        assert_eq!(vm.progress().position, 0);
    }

    #[tokio::test]
    async fn skip_finishes_on_the_last_question_without_submitting() {
        let gateway = FakeGateway::accepting();
        let _service = FlowLoopService::new(gateway.clone());
        let mut vm = QuestionFlowVm::new(vec![bool_question(1), bool_question(2)]);
        vm.record_answer(AnswerValue::Bool(YesNo::Yes));

        assert_eq!(vm.skip(), FlowOutcome::Continue);
        assert_eq!(vm.skip(), FlowOutcome::SkippedOut);
        assert_eq!(gateway.count(), 0);
        // The recorded answer for question 1 is still there.
        assert!(vm.progress().is_last);
    }
}
