use dioxus::prelude::*;

use crate::notify::{ToastKind, ToastQueue};
use crate::sheet::SheetController;

struct PlanTier {
    name: &'static str,
    blurb: &'static str,
    price: &'static str,
}

static TIERS: [PlanTier; 3] = [
    PlanTier {
        name: "Wanderer",
        blurb: "Curated city guide for one destination.",
        price: "Free",
    },
    PlanTier {
        name: "Explorer",
        blurb: "Day-by-day itinerary with local picks.",
        price: "$9 / trip",
    },
    PlanTier {
        name: "Globetrotter",
        blurb: "Full concierge planning with live support.",
        price: "$29 / trip",
    },
];

/// Plan picker shown inside the bottom sheet.
#[component]
pub fn PlansSheet() -> Element {
    let controller = use_context::<Signal<SheetController>>();
    let toasts = use_context::<Signal<ToastQueue>>();

    rsx! {
        div { class: "plans",
            for tier in &TIERS {
                div { class: "plans__tier",
                    div { class: "plans__heading",
                        h4 { "{tier.name}" }
                        span { class: "plans__price", "{tier.price}" }
                    }
                    p { class: "plans__blurb", "{tier.blurb}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: {
                            let name = tier.name;
                            let mut controller = controller;
                            let mut toasts = toasts;
                            move |_| {
                                toasts.write().push(
                                    ToastKind::Success,
                                    "Plan chosen",
                                    format!("{name} it is. We'll take it from here."),
                                );
                                controller.write().close();
                            }
                        },
                        "Choose"
                    }
                }
            }
        }
    }
}
