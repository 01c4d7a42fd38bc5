use std::rc::Rc;

use dioxus::document::eval;
use dioxus::prelude::*;

use crate::sheet::{SheetContent, SheetController, SheetSurface, SnapPoint, SurfaceError};
use crate::views::{PlansSheet, QuestionnaireSheet};

/// Drives the rendered panel through webview script.
///
/// The declarative height class covers initial layout; the script channel
/// animates transitions between snap points.
struct EvalSheetSurface;

impl SheetSurface for EvalSheetSurface {
    fn snap_to(&self, point: SnapPoint) -> Result<(), SurfaceError> {
        let percent = point.percent();
        let js = format!(
            "const panel = document.getElementById('sheet-panel');\n\
             if (panel) {{ panel.style.height = '{percent}%'; }}"
        );
        let _ = eval(&js);
        Ok(())
    }

    fn hide(&self) -> Result<(), SurfaceError> {
        let js = "const panel = document.getElementById('sheet-panel');\n\
                  if (panel) { panel.style.height = '0'; }";
        let _ = eval(js);
        Ok(())
    }
}

/// Renders the app-wide bottom sheet when the controller says it is open.
#[component]
pub fn SheetHost() -> Element {
    let mut controller = use_context::<Signal<SheetController>>();

    // Runs once after first render; the panel's DOM exists from here on.
    use_effect(move || {
        controller.write().attach_surface(Rc::new(EvalSheetSurface));
    });

    let (title, snap, content) = {
        let guard = controller.read();
        if !guard.is_open() {
            return rsx! {};
        }
        let config = guard.config();
        (
            config.map_or_else(String::new, |config| config.header_title().to_string()),
            guard.snap_point(),
            config.map(|config| config.content().clone()),
        )
    };

    rsx! {
        div {
            class: "sheet-backdrop",
            onclick: move |_| controller.write().on_visibility_changed(-1),
        }
        section {
            class: "sheet-panel {snap.css_class()}",
            id: "sheet-panel",
            role: "dialog",
            aria_modal: "true",
            header { class: "sheet-panel__header",
                span { class: "sheet-panel__grabber" }
                h3 { class: "sheet-panel__title", "{title}" }
            }
            div { class: "sheet-panel__body",
                match content {
                    Some(SheetContent::Questionnaire) => rsx! { QuestionnaireSheet {} },
                    Some(SheetContent::Plans) => rsx! { PlansSheet {} },
                    None => rsx! {},
                }
            }
        }
    }
}
