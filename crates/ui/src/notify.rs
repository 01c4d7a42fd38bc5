use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    title: String,
    body: String,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Transient in-app notifications, newest last. Dismissal is click-driven.
#[derive(Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, body: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[component]
pub fn ToastHost() -> Element {
    let queue = use_context::<Signal<ToastQueue>>();
    let toasts = queue.read().toasts().to_vec();

    rsx! {
        div { class: "toast-host",
            for toast in toasts {
                ToastCard { key: "{toast.id()}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();
    let id = toast.id();

    rsx! {
        button {
            class: "{toast.kind().css_class()}",
            r#type: "button",
            onclick: move |_| queue.write().dismiss(id),
            strong { class: "toast__title", "{toast.title()}" }
            span { class: "toast__body", "{toast.body()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_keep_arrival_order_and_unique_ids() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Info, "First", "a");
        queue.push(ToastKind::Error, "Second", "b");

        let ids: Vec<u64> = queue.toasts().iter().map(Toast::id).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(queue.toasts()[0].title(), "First");
    }

    #[test]
    fn dismiss_removes_only_the_named_toast() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Info, "Keep", "");
        queue.push(ToastKind::Info, "Drop", "");
        let drop_id = queue.toasts()[1].id();

        queue.dismiss(drop_id);
        queue.dismiss(drop_id);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title(), "Keep");
    }
}
