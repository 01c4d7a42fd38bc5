use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::notify::{ToastHost, ToastQueue};
use crate::routes::Route;
use crate::sheet::SheetController;
use crate::views::{QuestionsResource, SheetHost, ViewError};
use crate::vm::QuestionFlowVm;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    use_context_provider(|| Signal::new(SheetController::new()));
    use_context_provider(|| Signal::new(ToastQueue::default()));
    use_context_provider(|| Signal::new(None::<QuestionFlowVm>));

    let questions = ctx.questions();
    let questions_resource: QuestionsResource = use_resource(move || {
        let questions = questions.clone();
        async move {
            questions.fetch_questions().await.map_err(|err| {
                tracing::warn!(error = %err, "question fetch failed");
                ViewError::Unknown
            })
        }
    });
    use_context_provider(move || questions_resource);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route titles are rendered inside the right pane.
        document::Title { "Wander" }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
            SheetHost {}
            ToastHost {}
        }
    }
}
