use std::sync::Arc;

use crate::api::{PreferenceGateway, PreferenceSubmission};
use crate::error::FlowError;
use crate::question_flow::{FlowSignal, QuestionFlow};

/// Orchestrates one submission step of the question flow.
///
/// Validation and formatting happen in the flow itself; this service owns
/// the call to the submission gateway and only advances the cursor after
/// the backend accepted the answer. A failed submission leaves the flow
/// untouched so pressing Next again retries with the same recorded value.
#[derive(Clone)]
pub struct FlowLoopService {
    gateway: Arc<dyn PreferenceGateway>,
}

impl FlowLoopService {
    #[must_use]
    pub fn new(gateway: Arc<dyn PreferenceGateway>) -> Self {
        Self { gateway }
    }

    /// Send one prepared submission through the gateway.
    ///
    /// Callers that hold the flow behind shared UI state build the
    /// submission synchronously, await this, and advance afterwards.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Submit` when the backend rejects the answer.
    pub async fn submit(&self, submission: PreferenceSubmission) -> Result<(), FlowError> {
        let question_id = submission.question_id;
        self.gateway
            .submit_preference(submission)
            .await
            .map_err(|err| {
                tracing::warn!(%question_id, error = %err, "preference submission failed");
                FlowError::from(err)
            })
    }

    /// Submit the current answer and advance.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Unanswered`/`FlowError::Exhausted` without
    /// contacting the gateway, and `FlowError::Submit` when the backend
    /// rejects the answer.
    pub async fn submit_current(&self, flow: &mut QuestionFlow) -> Result<FlowSignal, FlowError> {
        let submission = flow.submission()?;
        self.submit(submission).await?;
        Ok(flow.mark_submitted())
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::api::PreferenceSubmission;
    use crate::error::ApiError;
    use wander_core::model::{
        AnswerPayload, AnswerValue, Question, QuestionId, QuestionKind, YesNo,
    };

    struct FakeGateway {
        submissions: Mutex<Vec<PreferenceSubmission>>,
        fail: bool,
    }

    impl FakeGateway {
        fn accepting() -> Self {
            Self {
                submissions: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn rejecting() -> Self {
            Self {
                submissions: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn recorded(&self) -> Vec<PreferenceSubmission> {
            self.submissions.lock().unwrap().clone()
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
                Err(ApiError::HttpStatus(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                ))
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

    #[tokio::test]
    async fn unanswered_question_never_reaches_the_gateway() {
        let gateway = Arc::new(FakeGateway::accepting());
        let service = FlowLoopService::new(gateway.clone());
        let mut flow = QuestionFlow::new(vec![bool_question(1)]);

        let err = service.submit_current(&mut flow).await.unwrap_err();
        assert!(matches!(err, FlowError::Unanswered));
        assert_eq!(flow.current_index(), 0);
        assert!(gateway.recorded().is_empty());
    }

    #[tokio::test]
    async fn successful_submission_advances_to_the_next_question() {
        let gateway = Arc::new(FakeGateway::accepting());
        let service = FlowLoopService::new(gateway.clone());
        let mut flow = QuestionFlow::new(vec![bool_question(1), bool_question(2)]);
        flow.record_answer(AnswerValue::Bool(YesNo::Yes));

        let signal = service.submit_current(&mut flow).await.unwrap();
        assert_eq!(signal, FlowSignal::Advanced);
        assert_eq!(flow.current_index(), 1);

        let recorded = gateway.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].question_id, QuestionId::new(1));
        assert_eq!(recorded[0].answer, AnswerPayload::Bool(true));
    }

    #[tokio::test]
    async fn last_question_signals_completion_exactly_once() {
        let gateway = Arc::new(FakeGateway::accepting());
        let service = FlowLoopService::new(gateway.clone());
        let mut flow = QuestionFlow::new(vec![bool_question(1)]);
        flow.record_answer(AnswerValue::Bool(YesNo::Yes));

        let signal = service.submit_current(&mut flow).await.unwrap();
        assert_eq!(signal, FlowSignal::Finished);
        assert_eq!(flow.current_index(), 0);
    }

    #[tokio::test]
    async fn rejected_submission_keeps_state_for_retry() {
        let gateway = Arc::new(FakeGateway::rejecting());
        let service = FlowLoopService::new(gateway.clone());
        let mut flow = QuestionFlow::new(vec![bool_question(1), bool_question(2)]);
        flow.record_answer(AnswerValue::Bool(YesNo::No));

        let err = service.submit_current(&mut flow).await.unwrap_err();
        assert!(matches!(err, FlowError::Submit(_)));
        assert_eq!(flow.current_index(), 0);
        assert_eq!(
            flow.current_answer(),
            Some(&AnswerValue::Bool(YesNo::No))
        );

        // User-driven retry resubmits the same payload.
        let _ = service.submit_current(&mut flow).await;
        let recorded = gateway.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0], recorded[1]);
    }
}
