use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use services::api::{PreferenceGateway, PreferenceSubmission};
use services::error::ApiError;
use services::flow_loop::FlowLoopService;
use services::question_flow::{FlowSignal, QuestionFlow};
use wander_core::model::{
    AnswerPayload, AnswerValue, Choice, ChoiceId, Question, QuestionId, QuestionKind, YesNo,
};

#[derive(Default)]
struct RecordingGateway {
    submissions: Mutex<Vec<PreferenceSubmission>>,
}

#[async_trait]
impl PreferenceGateway for RecordingGateway {
    async fn submit_preference(&self, submission: PreferenceSubmission) -> Result<(), ApiError> {
        self.submissions.lock().unwrap().push(submission);
        Ok(())
    }
}

fn questionnaire() -> Vec<Question> {
    vec![
        Question::new(
            QuestionId::new(1),
            "When does your trip start?",
            QuestionKind::Date,
            Vec::new(),
        ),
        Question::new(
            QuestionId::new(2),
            "Travelling with kids?",
            QuestionKind::Bool,
            Vec::new(),
        ),
        Question::new(
            QuestionId::new(3),
            "Which vibes are you after?",
            QuestionKind::MultiChoice,
            vec![
                Choice::new(ChoiceId::new(10), "Beaches"),
                Choice::new(ChoiceId::new(11), "Food"),
                Choice::new(ChoiceId::new(12), "Hiking"),
            ],
        ),
        Question::new(
            QuestionId::new(4),
            "Where should we send your guide?",
            QuestionKind::Text,
            Vec::new(),
        ),
    ]
}

#[tokio::test]
async fn full_walk_submits_each_answer_in_wire_format() {
    let gateway = Arc::new(RecordingGateway::default());
    let service = FlowLoopService::new(gateway.clone());
    let mut flow = QuestionFlow::new(questionnaire());

    flow.record_answer(AnswerValue::Date("2026-10-02".into()));
    assert_eq!(
        service.submit_current(&mut flow).await.unwrap(),
        FlowSignal::Advanced
    );

    flow.record_answer(AnswerValue::Bool(YesNo::No));
    assert_eq!(
        service.submit_current(&mut flow).await.unwrap(),
        FlowSignal::Advanced
    );

    let mut vibes = AnswerValue::MultiChoice(Vec::new());
    vibes.toggle_choice(ChoiceId::new(11));
    vibes.toggle_choice(ChoiceId::new(12));
    flow.record_answer(vibes);
    assert_eq!(
        service.submit_current(&mut flow).await.unwrap(),
        FlowSignal::Advanced
    );

    flow.record_answer(AnswerValue::Text {
        name: "Mina".into(),
        pincode: "411001".into(),
    });
    assert_eq!(
        service.submit_current(&mut flow).await.unwrap(),
        FlowSignal::Finished
    );

    let recorded = gateway.submissions.lock().unwrap().clone();
    let answers: Vec<AnswerPayload> = recorded.iter().map(|s| s.answer.clone()).collect();
    assert_eq!(
        answers,
        vec![
            AnswerPayload::Date("2026-10-02".into()),
            AnswerPayload::Bool(false),
            AnswerPayload::ChoiceIds(vec![11, 12]),
            AnswerPayload::Text("Mina,411001".into()),
        ]
    );
}

#[tokio::test]
async fn skipping_a_question_leaves_no_trace_on_the_wire() {
    let gateway = Arc::new(RecordingGateway::default());
    let service = FlowLoopService::new(gateway.clone());
    let mut flow = QuestionFlow::new(questionnaire());

    assert_eq!(flow.skip(), FlowSignal::Advanced);

    flow.record_answer(AnswerValue::Bool(YesNo::Yes));
    assert_eq!(
        service.submit_current(&mut flow).await.unwrap(),
        FlowSignal::Advanced
    );

    let recorded = gateway.submissions.lock().unwrap().clone();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].question_id, QuestionId::new(2));
}
