use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use wander_core::model::{AnswerValue, ChoiceId, Question, QuestionKind, YesNo};

use crate::context::AppContext;
use crate::notify::{ToastKind, ToastQueue};
use crate::sheet::{SheetController, SheetHint};
use crate::views::QuestionsResource;
use crate::vm::{FlowOutcome, QuestionFlowVm, format_date_label};

/// How long the sheet's close animation gets before the question list is
/// refetched behind it.
const REFRESH_DELAY: Duration = Duration::from_millis(500);

struct FlowSnapshot {
    question: Option<Question>,
    answer: Option<AnswerValue>,
    position: usize,
    total: usize,
    is_last: bool,
    can_advance: bool,
    submitting: bool,
}

fn hint_for_current(vm: &QuestionFlowVm) -> Option<SheetHint> {
    vm.current_question()
        .map(|question| SheetHint::Question(question.kind().clone()))
}

#[component]
pub fn QuestionnaireSheet() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<Option<QuestionFlowVm>>>();
    let controller = use_context::<Signal<SheetController>>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let questions_resource = use_context::<QuestionsResource>();

    let snapshot = {
        let guard = vm.read();
        guard.as_ref().map(|vm| FlowSnapshot {
            question: vm.current_question().cloned(),
            answer: vm.current_answer().cloned(),
            position: vm.progress().position,
            total: vm.progress().total,
            is_last: vm.is_last(),
            can_advance: vm.can_advance(),
            submitting: vm.is_submitting(),
        })
    };

    let on_answer = use_callback(move |value: AnswerValue| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.record_answer(value);
        }
    });

    let flow_loop = ctx.flow_loop();
    let on_next = use_callback(move |()| {
        let flow_loop = Arc::clone(&flow_loop);
        let mut vm = vm;
        let mut controller = controller;
        let mut toasts = toasts;
        let mut questions_resource = questions_resource;
        spawn(async move {
            // The vm stays in the signal; no borrow is held across the
            // await, so re-renders keep showing the in-flight question.
            let started = {
                let mut guard = vm.write();
                let Some(vm) = guard.as_mut() else {
                    return;
                };
                vm.begin_submission()
            };
            let submission = match started {
                Ok(submission) => submission,
                Err(FlowOutcome::Busy) => return,
                Err(_) => {
                    toasts.write().push(
                        ToastKind::Info,
                        "One more thing",
                        "Please answer before continuing.",
                    );
                    return;
                }
            };
            let question_id = submission.question_id;
            let result = flow_loop.submit(submission).await;

            // A stale verdict (the flow was rebuilt or reset meanwhile)
            // comes back as None and is dropped on the floor.
            let outcome = {
                let mut guard = vm.write();
                let Some(vm) = guard.as_mut() else {
                    return;
                };
                vm.finish_submission(question_id, result)
            };
            let hint = vm.read().as_ref().and_then(hint_for_current);
            match outcome {
                Some(Ok(FlowOutcome::Continue)) => controller.write().set_hint(hint),
                Some(Ok(FlowOutcome::Completed)) => {
                    toasts.write().push(
                        ToastKind::Success,
                        "All set",
                        "Your travel preferences are saved.",
                    );
                    controller.write().close();
                    spawn(async move {
                        tokio::time::sleep(REFRESH_DELAY).await;
                        questions_resource.restart();
                    });
                }
                Some(Err(err)) => {
                    toasts
                        .write()
                        .push(ToastKind::Error, "Not saved", err.message());
                }
                Some(Ok(_)) | None => {}
            }
        });
    });

    let on_skip = use_callback(move |()| {
        let mut vm = vm;
        let mut controller = controller;
        let outcome = {
            let mut guard = vm.write();
            let Some(vm) = guard.as_mut() else {
                return;
            };
            vm.skip()
        };
        match outcome {
            FlowOutcome::Continue => {
                let hint = vm.read().as_ref().and_then(hint_for_current);
                controller.write().set_hint(hint);
            }
            FlowOutcome::SkippedOut => controller.write().close(),
            _ => {}
        }
    });

    let Some(snapshot) = snapshot else {
        return rsx! {
            p { class: "sheet-empty", "Nothing to answer right now." }
        };
    };
    let Some(question) = snapshot.question else {
        return rsx! {
            p { class: "sheet-empty", "No questions right now. Check back later." }
        };
    };

    let progress_label = format!("Question {} of {}", snapshot.position + 1, snapshot.total);
    let skip_label = if snapshot.is_last { "Skip All" } else { "Skip" };
    let next_label = if snapshot.submitting {
        "Saving..."
    } else if snapshot.is_last {
        "Complete"
    } else {
        "Next"
    };

    rsx! {
        div { class: "questionnaire",
            p { class: "questionnaire__progress", "{progress_label}" }
            h3 { class: "questionnaire__text", "{question.text()}" }
            match question.kind() {
                QuestionKind::Date => rsx! {
                    DateInput { answer: snapshot.answer.clone(), on_answer }
                },
                QuestionKind::Bool => rsx! {
                    YesNoInput { answer: snapshot.answer.clone(), on_answer }
                },
                QuestionKind::Text => rsx! {
                    ContactInput { answer: snapshot.answer.clone(), on_answer }
                },
                QuestionKind::MultiChoice => rsx! {
                    ChoiceList { question: question.clone(), answer: snapshot.answer.clone(), on_answer }
                },
                QuestionKind::Unsupported(raw) => rsx! {
                    p { class: "questionnaire__unsupported",
                        "This question type isn't supported yet ({raw}). You can skip it."
                    }
                },
            }
            div { class: "questionnaire__actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: snapshot.submitting,
                    onclick: move |_| on_skip.call(()),
                    "{skip_label}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !snapshot.can_advance,
                    onclick: move |_| on_next.call(()),
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn DateInput(answer: Option<AnswerValue>, on_answer: EventHandler<AnswerValue>) -> Element {
    let value = match answer {
        Some(AnswerValue::Date(raw)) => raw,
        _ => String::new(),
    };
    let label = format_date_label(&value);

    rsx! {
        div { class: "question-input question-input--date",
            input {
                r#type: "date",
                value: "{value}",
                oninput: move |evt| on_answer.call(AnswerValue::Date(evt.value())),
            }
            if let Some(label) = label {
                p { class: "question-input__hint", "Departing {label}" }
            }
        }
    }
}

#[component]
fn YesNoInput(answer: Option<AnswerValue>, on_answer: EventHandler<AnswerValue>) -> Element {
    let selected = match answer {
        Some(AnswerValue::Bool(value)) => Some(value),
        _ => None,
    };
    let class_for = |value: YesNo| {
        if selected == Some(value) {
            "choice-pill choice-pill--selected"
        } else {
            "choice-pill"
        }
    };

    rsx! {
        div { class: "question-input question-input--bool",
            button {
                class: class_for(YesNo::Yes),
                r#type: "button",
                onclick: move |_| on_answer.call(AnswerValue::Bool(YesNo::Yes)),
                "Yes"
            }
            button {
                class: class_for(YesNo::No),
                r#type: "button",
                onclick: move |_| on_answer.call(AnswerValue::Bool(YesNo::No)),
                "No"
            }
        }
    }
}

#[component]
fn ContactInput(answer: Option<AnswerValue>, on_answer: EventHandler<AnswerValue>) -> Element {
    let (name, pincode) = match answer {
        Some(AnswerValue::Text { name, pincode }) => (name, pincode),
        _ => (String::new(), String::new()),
    };
    let name_for_pin = name.clone();
    let pincode_for_name = pincode.clone();

    rsx! {
        div { class: "question-input question-input--contact",
            input {
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| {
                    on_answer.call(AnswerValue::Text {
                        name: evt.value(),
                        pincode: pincode_for_name.clone(),
                    });
                },
            }
            input {
                placeholder: "Pincode",
                value: "{pincode}",
                oninput: move |evt| {
                    on_answer.call(AnswerValue::Text {
                        name: name_for_pin.clone(),
                        pincode: evt.value(),
                    });
                },
            }
        }
    }
}

#[component]
fn ChoiceList(
    question: Question,
    answer: Option<AnswerValue>,
    on_answer: EventHandler<AnswerValue>,
) -> Element {
    let current = match answer {
        Some(AnswerValue::MultiChoice(ids)) => ids,
        _ => Vec::new(),
    };

    rsx! {
        div { class: "question-input question-input--choices",
            for choice in question.choices().iter().cloned() {
                ChoiceRow {
                    key: "{choice.id()}",
                    label: choice.text().to_string(),
                    choice_id: choice.id(),
                    selected: current.contains(&choice.id()),
                    current: current.clone(),
                    on_answer,
                }
            }
        }
    }
}

#[component]
fn ChoiceRow(
    label: String,
    choice_id: ChoiceId,
    selected: bool,
    current: Vec<ChoiceId>,
    on_answer: EventHandler<AnswerValue>,
) -> Element {
    let class = if selected {
        "choice-row choice-row--selected"
    } else {
        "choice-row"
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| {
                let mut next = AnswerValue::MultiChoice(current.clone());
                next.toggle_choice(choice_id);
                on_answer.call(next);
            },
            span { class: "choice-row__mark", if selected { "✓" } else { "" } }
            span { class: "choice-row__label", "{label}" }
        }
    }
}
