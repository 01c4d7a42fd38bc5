use dioxus::prelude::*;

use crate::context::AppContext;
use crate::sheet::{SheetConfig, SheetContent, SheetController, SheetHint};
use crate::views::{QuestionsResource, ViewError, ViewState, view_state_from_resource};
use crate::vm::QuestionFlowVm;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<Option<QuestionFlowVm>>>();
    let controller = use_context::<Signal<SheetController>>();
    let questions_resource = use_context::<QuestionsResource>();
    let state = view_state_from_resource(questions_resource);

    let countries = ctx.countries();
    let selected_resource = use_resource(move || {
        let countries = countries.clone();
        async move {
            countries
                .selected_country()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });
    let selected = selected_resource
        .value()
        .read()
        .as_ref()
        .and_then(|value| value.as_ref().ok())
        .copied()
        .flatten();

    let open_plans = use_callback(move |()| {
        let mut controller = controller;
        controller.write().open(
            SheetConfig::new(SheetContent::Plans, "Pick a trip plan")
                .with_hint(Some(SheetHint::Plans)),
        );
    });

    rsx! {
        div { class: "page",
            h2 { "Home" }
            if let Some(country) = selected {
                p { class: "home__destination", "Destination saved (#{country})" }
            } else {
                p { class: "home__destination", "No destination picked yet." }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading your questions..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut questions_resource = questions_resource;
                            questions_resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(questions) => {
                    let count = questions.len();
                    let open_questionnaire = move |_| {
                        let questions = questions.clone();
                        let mut vm = vm;
                        let mut controller = controller;
                        {
                            let mut guard = vm.write();
                            match guard.as_mut() {
                                Some(existing) => existing.sync_questions(questions),
                                None => *guard = Some(QuestionFlowVm::new(questions)),
                            }
                        }
                        let hint = vm.read().as_ref().and_then(|vm| {
                            vm.current_question()
                                .map(|question| SheetHint::Question(question.kind().clone()))
                        });
                        controller.write().open(
                            SheetConfig::new(SheetContent::Questionnaire, "Tell us about your trip")
                                .with_hint(hint),
                        );
                    };
                    rsx! {
                        if count == 0 {
                            div { class: "home__card",
                                h3 { "You're all caught up" }
                                p { "No questions waiting. Enjoy the trip." }
                            }
                        } else {
                            div { class: "home__card",
                                h3 { "Help us plan your trip" }
                                p { "{count} quick questions about how you like to travel." }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: open_questionnaire,
                                    "Answer now"
                                }
                            }
                        }
                    }
                }
            }
            button {
                class: "btn btn-secondary home__plans",
                r#type: "button",
                onclick: move |_| open_plans.call(()),
                "Browse trip plans"
            }
        }
    }
}
