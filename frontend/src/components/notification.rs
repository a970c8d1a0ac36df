use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use serde::Serialize;
use yew::prelude::*;

use crate::config::{TOAST_DURATION_MS, TOAST_LIMIT};

/// Title and body of a transient toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Fire-and-forget sink for notifications. Implementations must not block.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier> Notifier for Option<N> {
    fn notify(&self, notification: Notification) {
        match self {
            Some(notifier) => notifier.notify(notification),
            None => warn!("No notifier mounted, dropping \"{}\"", notification.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u64),
}

/// Toasts currently on screen, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if let Ok(json) = serde_json::to_string(&notification) {
            debug!("Showing toast {}: {}", id, json);
        }
        self.toasts.insert(0, Toast { id, notification });
        self.toasts.truncate(self.limit);
        id
    }

    /// Returns false when the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notification) => {
                next.push(notification);
            }
            ToastAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
                debug!("Dismissed toast {}", id);
            }
        }
        Rc::new(next)
    }
}

/// Handle handed to components through context for raising toasts.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        self.dispatcher.dispatch(ToastAction::Push(notification));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = Toaster {
        dispatcher: queue.dispatcher(),
    };
    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div class="toast-viewport" role="region" aria-live="polite">
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id.to_string()}
                        toast={toast.clone()}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    // Dropping the Timeout cancels it, so a toast closed by hand never fires.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }
    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-body">
                <p class="toast-title">{ &props.toast.notification.title }</p>
                <p class="toast-description">{ &props.toast.notification.description }</p>
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str) -> Notification {
        Notification::new(title, "body")
    }

    #[test]
    fn notification_serializes_for_the_debug_log() {
        let json = serde_json::to_string(&Notification::new("Saved", "All good")).unwrap();
        assert_eq!(json, r#"{"title":"Saved","description":"All good"}"#);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut queue = ToastQueue::with_limit(5);
        let a = queue.push(note("a"));
        let b = queue.push(note("b"));
        let c = queue.push(note("c"));
        assert!(a < b && b < c);
    }

    #[test]
    fn newest_toast_comes_first() {
        let mut queue = ToastQueue::with_limit(3);
        queue.push(note("first"));
        queue.push(note("second"));
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.notification.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut queue = ToastQueue::with_limit(1);
        queue.push(note("old"));
        let newest = queue.push(note("new"));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, newest);
        assert_eq!(queue.toasts()[0].notification.title, "new");
    }

    #[test]
    fn zero_limit_still_shows_one_toast() {
        let mut queue = ToastQueue::with_limit(0);
        queue.push(note("only"));
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::with_limit(3);
        let a = queue.push(note("a"));
        let b = queue.push(note("b"));
        assert!(queue.dismiss(a));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
    }

    #[test]
    fn dismissing_unknown_id_is_a_noop() {
        let mut queue = ToastQueue::with_limit(3);
        queue.push(note("a"));
        let before = queue.clone();
        assert!(!queue.dismiss(42));
        assert_eq!(queue, before);
    }

    #[test]
    fn reducer_keeps_same_state_for_stale_dismiss() {
        let queue = Rc::new(ToastQueue::with_limit(1));
        let pushed = queue.clone().reduce(ToastAction::Push(note("a")));
        let after = pushed.clone().reduce(ToastAction::Dismiss(99));
        assert!(Rc::ptr_eq(&pushed, &after));

        let id = pushed.toasts()[0].id;
        let cleared = pushed.reduce(ToastAction::Dismiss(id));
        assert!(cleared.toasts().is_empty());
    }

    #[test]
    fn missing_notifier_drops_silently() {
        let none: Option<Toaster> = None;
        none.notify(note("lost"));
    }
}
