use std::sync::Arc;

use dioxus::prelude::*;

use wander_core::model::{Country, CountryId};

use crate::context::AppContext;
use crate::notify::{ToastKind, ToastQueue};
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn CountriesView() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<Signal<ToastQueue>>();

    let countries = ctx.countries();
    let list_resource = use_resource(move || {
        let countries = countries.clone();
        async move {
            countries
                .list_countries()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });

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

    let state = view_state_from_resource(list_resource);

    let countries = ctx.countries();
    let select = use_callback(move |country_id: CountryId| {
        let countries = Arc::clone(&countries);
        let mut toasts = toasts;
        let mut selected_resource = selected_resource;
        spawn(async move {
            match countries.select_country(country_id).await {
                Ok(()) => {
                    toasts.write().push(
                        ToastKind::Success,
                        "Destination saved",
                        "We'll tailor suggestions to it.",
                    );
                    selected_resource.restart();
                }
                Err(_) => {
                    toasts.write().push(
                        ToastKind::Error,
                        "Not saved",
                        ViewError::Unknown.message(),
                    );
                }
            }
        });
    });

    rsx! {
        div { class: "page",
            h2 { "Where to?" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading destinations..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut list_resource = list_resource;
                            list_resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(countries) => rsx! {
                    div { class: "country-grid",
                        for country in countries {
                            CountryCard {
                                key: "{country.id()}",
                                country: country.clone(),
                                selected: selected == Some(country.id()),
                                on_select: select,
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CountryCard(
    country: Country,
    selected: bool,
    on_select: Callback<CountryId>,
) -> Element {
    let id = country.id();
    let class = if selected {
        "country-card country-card--selected"
    } else {
        "country-card"
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_select.call(id),
            if let Some(url) = country.image_url() {
                img { class: "country-card__image", src: "{url}", alt: "{country.name()}" }
            }
            span { class: "country-card__name", "{country.name()}" }
            if let Some(code) = country.code() {
                span { class: "country-card__code", "{code}" }
            }
            if selected {
                span { class: "country-card__badge", "Selected" }
            }
        }
    }
}
