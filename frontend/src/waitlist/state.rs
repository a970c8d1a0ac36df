use log::{debug, info};

use crate::components::notification::{Notification, Notifier};
use crate::config::BRAND_NAME;
use crate::waitlist::validation::{validate_email, ValidationError};

pub const JOIN_LABEL: &str = "Get Early Access";
pub const JOINED_LABEL: &str = "You're on the list";
pub const CONFIRMATION_TITLE: &str = "You're on the waitlist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitlistPhase {
    #[default]
    Idle,
    /// Terminal for the session; there is no way to leave the waitlist.
    Joined,
}

/// Everything the waitlist form renders from. Lives only as long as the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub email_value: String,
    pub phase: WaitlistPhase,
    pub error: Option<ValidationError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitlistEvent {
    EmailChanged(String),
    Submitted,
}

/// Result of applying one event: the next state and, on an accepted
/// submission, the toast to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: FormState,
    pub notification: Option<Notification>,
}

impl FormState {
    pub fn has_joined(&self) -> bool {
        self.phase == WaitlistPhase::Joined
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.has_joined() {
            JOINED_LABEL
        } else {
            JOIN_LABEL
        }
    }

    pub fn update_email(&self, raw: impl Into<String>) -> FormState {
        FormState {
            email_value: raw.into(),
            ..self.clone()
        }
    }
}

pub fn confirmation() -> Notification {
    Notification::new(
        CONFIRMATION_TITLE,
        format!("You'll hear from {} as new products go live.", BRAND_NAME),
    )
}

/// Pure transition function for the waitlist form.
///
/// Typing never validates. Submitting validates the current value: a failure
/// records the error and keeps the value for correction, a success moves to
/// `Joined`, clears the field and asks for a confirmation toast. Submitting
/// again while joined simply confirms again.
pub fn transition(state: &FormState, event: WaitlistEvent) -> Transition {
    match event {
        WaitlistEvent::EmailChanged(raw) => Transition {
            state: state.update_email(raw),
            notification: None,
        },
        WaitlistEvent::Submitted => match validate_email(&state.email_value) {
            Ok(_accepted) => {
                info!("Waitlist submission accepted");
                Transition {
                    state: FormState {
                        email_value: String::new(),
                        phase: WaitlistPhase::Joined,
                        error: None,
                    },
                    notification: Some(confirmation()),
                }
            }
            Err(e) => {
                debug!("Waitlist submission rejected: {}", e.kind());
                Transition {
                    state: FormState {
                        error: Some(e),
                        ..state.clone()
                    },
                    notification: None,
                }
            }
        },
    }
}

/// Applies `event` and hands any resulting notification to `notifier`.
pub fn dispatch<N: Notifier + ?Sized>(state: &FormState, event: WaitlistEvent, notifier: &N) -> FormState {
    let Transition { state, notification } = transition(state, event);
    if let Some(notification) = notification {
        notifier.notify(notification);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.sent.borrow_mut().push(notification);
        }
    }

    fn submit(state: &FormState, raw: &str, notifier: &RecordingNotifier) -> FormState {
        let typed = dispatch(state, WaitlistEvent::EmailChanged(raw.to_string()), notifier);
        dispatch(&typed, WaitlistEvent::Submitted, notifier)
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = FormState::default();
        assert_eq!(state.email_value, "");
        assert!(!state.has_joined());
        assert_eq!(state.error_message(), None);
        assert_eq!(state.submit_label(), "Get Early Access");
    }

    #[test]
    fn typing_stores_the_raw_value_without_validating() {
        let state = FormState::default();
        let next = transition(&state, WaitlistEvent::EmailChanged("  nope ".to_string()));
        assert_eq!(next.state.email_value, "  nope ");
        assert_eq!(next.state.error, None);
        assert_eq!(next.notification, None);
    }

    #[test]
    fn typing_the_same_value_twice_does_not_accumulate() {
        let state = FormState::default()
            .update_email("user@example.com")
            .update_email("user@example.com");
        assert_eq!(state.email_value, "user@example.com");
    }

    #[test]
    fn empty_submission_reports_required() {
        let notifier = RecordingNotifier::default();
        let state = submit(&FormState::default(), "", &notifier);

        assert_eq!(state.phase, WaitlistPhase::Idle);
        assert_eq!(state.error_message().as_deref(), Some("Email is required"));
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn malformed_submission_keeps_value_for_correction() {
        let notifier = RecordingNotifier::default();
        let state = submit(&FormState::default(), "not-an-email", &notifier);

        assert_eq!(state.phase, WaitlistPhase::Idle);
        assert_eq!(state.email_value, "not-an-email");
        assert_eq!(state.error_message().as_deref(), Some("Enter a valid email address"));
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn valid_submission_joins_resets_and_notifies() {
        let notifier = RecordingNotifier::default();
        let state = submit(&FormState::default(), "  user@example.com  ", &notifier);

        assert_eq!(state.phase, WaitlistPhase::Joined);
        assert_eq!(state.email_value, "");
        assert_eq!(state.error, None);
        assert_eq!(state.submit_label(), "You're on the list");

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "You're on the waitlist");
        assert_eq!(sent[0].description, "You'll hear from Lade Stack as new products go live.");
    }

    #[test]
    fn success_clears_a_previous_error() {
        let notifier = RecordingNotifier::default();
        let failed = submit(&FormState::default(), "bad", &notifier);
        assert!(failed.error.is_some());

        let joined = submit(&failed, "good@example.com", &notifier);
        assert_eq!(joined.error, None);
        assert!(joined.has_joined());
    }

    #[test]
    fn joined_never_goes_back_to_idle() {
        let notifier = RecordingNotifier::default();
        let joined = submit(&FormState::default(), "user@example.com", &notifier);

        let after_bad = submit(&joined, "still bad", &notifier);
        assert!(after_bad.has_joined());
        assert_eq!(after_bad.error, Some(ValidationError::Format));

        let after_empty = dispatch(&after_bad, WaitlistEvent::EmailChanged(String::new()), &notifier);
        assert!(after_empty.has_joined());
    }

    #[test]
    fn repeated_valid_submissions_confirm_again() {
        let notifier = RecordingNotifier::default();
        let once = submit(&FormState::default(), "user@example.com", &notifier);
        let twice = submit(&once, "user@example.com", &notifier);

        assert!(twice.has_joined());
        assert_eq!(twice.email_value, "");
        assert_eq!(notifier.sent.borrow().len(), 2);
    }

    #[test]
    fn submitting_the_reset_field_reports_required() {
        let notifier = RecordingNotifier::default();
        let joined = submit(&FormState::default(), "user@example.com", &notifier);
        let again = dispatch(&joined, WaitlistEvent::Submitted, &notifier);

        assert!(again.has_joined());
        assert_eq!(again.error, Some(ValidationError::Empty));
        assert_eq!(notifier.sent.borrow().len(), 1);
    }
}
