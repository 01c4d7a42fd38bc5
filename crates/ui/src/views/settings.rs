use std::sync::Arc;

use dioxus::prelude::*;

use services::error::AuthServiceError;

use crate::context::AppContext;
use crate::notify::{ToastKind, ToastQueue};
use crate::views::ViewError;

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let mut draft = use_signal(String::new);

    let auth = ctx.auth();
    let token_resource = use_resource(move || {
        let auth = auth.clone();
        async move { auth.current_token().await.map_err(|_| ViewError::Unknown) }
    });
    let has_session = token_resource
        .value()
        .read()
        .as_ref()
        .and_then(|value| value.as_ref().ok())
        .is_some_and(Option::is_some);

    let auth = ctx.auth();
    let on_save = use_callback(move |()| {
        let auth = Arc::clone(&auth);
        let token = draft();
        let mut toasts = toasts;
        let mut token_resource = token_resource;
        let mut draft = draft;
        spawn(async move {
            match auth.sign_in(&token).await {
                Ok(()) => {
                    toasts.write().push(
                        ToastKind::Success,
                        "Token saved",
                        "Restart the app to use the new session.",
                    );
                    draft.set(String::new());
                    token_resource.restart();
                }
                Err(AuthServiceError::EmptyToken) => {
                    toasts.write().push(
                        ToastKind::Info,
                        "Nothing to save",
                        "Paste an API token first.",
                    );
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

    let auth = ctx.auth();
    let on_sign_out = use_callback(move |()| {
        let auth = Arc::clone(&auth);
        let mut toasts = toasts;
        let mut token_resource = token_resource;
        spawn(async move {
            match auth.sign_out().await {
                Ok(()) => {
                    toasts
                        .write()
                        .push(ToastKind::Success, "Signed out", "The stored token is gone.");
                    token_resource.restart();
                }
                Err(_) => {
                    toasts.write().push(
                        ToastKind::Error,
                        "Sign-out failed",
                        ViewError::Unknown.message(),
                    );
                }
            }
        });
    });

    rsx! {
        div { class: "page",
            h2 { "Settings" }
            section { class: "settings-section",
                h3 { "API session" }
                if has_session {
                    p { "A token is stored for this device." }
                } else {
                    p { "No token stored. Paste one to talk to the travel API." }
                }
                div { class: "settings-row",
                    input {
                        r#type: "password",
                        placeholder: "API token",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !has_session,
                    onclick: move |_| on_sign_out.call(()),
                    "Sign out"
                }
            }
        }
    }
}
