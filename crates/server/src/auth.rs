//! Authentication collaborator interface and dialog state machine.
//!
//! The identity provider itself is an external service; this module owns
//! only the boundary: the provider trait the composition root implements
//! against its backend, the signed-in/out session state, and the auth
//! dialog modelled as an explicit tagged-variant state machine instead of
//! a pile of boolean flags.

use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by an identity provider.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    EmailInUse,

    #[error("password does not meet the minimum requirements")]
    WeakPassword,

    /// A password reset was requested without an email address
    #[error("please enter your email address")]
    MissingEmail,

    /// Anything else the backend reports, passed through opaquely
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// An authenticated user, as the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// The external identity service.
///
/// Constructed once by the composition root and passed in explicitly,
/// like the document store client.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Email/password sign-in.
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserSession, AuthError>;

    /// Create an account and set its display name.
    async fn sign_up(&self, name: &str, email: &str, password: &str)
        -> Result<UserSession, AuthError>;

    /// Send a password-reset email.
    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Sign-in through the federated provider popup.
    async fn federated_sign_in(&self) -> Result<UserSession, AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Whether someone is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn(UserSession),
}

impl AuthState {
    /// The catalogue sits behind sign-in; everything else is public.
    pub fn can_view_catalogue(&self) -> bool {
        matches!(self, AuthState::SignedIn(_))
    }
}

// =============================================================================
// Auth Dialog State Machine
// =============================================================================

/// Which pane of the auth dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPane {
    SignIn,
    SignUp,
    ForgotPassword,
}

/// The dialog itself: either closed, or open on one pane with a submit
/// possibly in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open { pane: AuthPane, busy: bool },
}

/// Discrete user and provider events that drive the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// The user opened the dialog
    Opened,
    /// The user dismissed it
    Dismissed,
    /// The user switched to another pane
    PaneSelected(AuthPane),
    /// A submit (sign-in, sign-up, reset, federated) started
    SubmitStarted,
    /// The in-flight submit failed; the pane stays put for another try
    SubmitFailed,
    /// The provider confirmed a session
    SignedIn,
    /// The reset email went out
    ResetEmailSent,
}

impl DialogState {
    /// Advance the machine by one event.
    ///
    /// ## Transitions
    /// - Opening always lands on the sign-in pane with nothing in flight,
    ///   regardless of where the dialog was last closed
    /// - Pane switches are ignored while a submit is in flight
    /// - A successful sign-in closes the dialog
    /// - A sent reset email returns to the sign-in pane
    /// - Events other than `Opened` are ignored while closed
    pub fn handle(&mut self, event: DialogEvent) {
        *self = match (*self, event) {
            (_, DialogEvent::Opened) => DialogState::Open {
                pane: AuthPane::SignIn,
                busy: false,
            },
            (DialogState::Closed, _) => DialogState::Closed,
            (DialogState::Open { .. }, DialogEvent::Dismissed) => DialogState::Closed,
            (state @ DialogState::Open { busy: true, .. }, DialogEvent::PaneSelected(_)) => state,
            (DialogState::Open { .. }, DialogEvent::PaneSelected(pane)) => {
                DialogState::Open { pane, busy: false }
            }
            (DialogState::Open { pane, .. }, DialogEvent::SubmitStarted) => {
                DialogState::Open { pane, busy: true }
            }
            (DialogState::Open { pane, .. }, DialogEvent::SubmitFailed) => {
                DialogState::Open { pane, busy: false }
            }
            (DialogState::Open { .. }, DialogEvent::SignedIn) => DialogState::Closed,
            (DialogState::Open { .. }, DialogEvent::ResetEmailSent) => DialogState::Open {
                pane: AuthPane::SignIn,
                busy: false,
            },
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> UserSession {
        UserSession {
            uid: "u1".to_string(),
            email: "user@example.com".to_string(),
            display_name: Some("User".to_string()),
        }
    }

    #[test]
    fn test_opening_resets_to_sign_in() {
        let mut dialog = DialogState::Closed;
        dialog.handle(DialogEvent::Opened);
        dialog.handle(DialogEvent::PaneSelected(AuthPane::SignUp));
        dialog.handle(DialogEvent::Dismissed);

        dialog.handle(DialogEvent::Opened);

        assert_eq!(
            dialog,
            DialogState::Open {
                pane: AuthPane::SignIn,
                busy: false
            }
        );
    }

    #[test]
    fn test_pane_switching_and_busy_lock() {
        let mut dialog = DialogState::Closed;
        dialog.handle(DialogEvent::Opened);
        dialog.handle(DialogEvent::PaneSelected(AuthPane::ForgotPassword));
        assert_eq!(
            dialog,
            DialogState::Open {
                pane: AuthPane::ForgotPassword,
                busy: false
            }
        );

        dialog.handle(DialogEvent::SubmitStarted);
        dialog.handle(DialogEvent::PaneSelected(AuthPane::SignUp));

        // Switch ignored while the submit is in flight.
        assert_eq!(
            dialog,
            DialogState::Open {
                pane: AuthPane::ForgotPassword,
                busy: true
            }
        );
    }

    #[test]
    fn test_failed_submit_stays_on_pane() {
        let mut dialog = DialogState::Closed;
        dialog.handle(DialogEvent::Opened);
        dialog.handle(DialogEvent::PaneSelected(AuthPane::SignUp));
        dialog.handle(DialogEvent::SubmitStarted);

        dialog.handle(DialogEvent::SubmitFailed);

        assert_eq!(
            dialog,
            DialogState::Open {
                pane: AuthPane::SignUp,
                busy: false
            }
        );
    }

    #[test]
    fn test_sign_in_closes_dialog() {
        let mut dialog = DialogState::Closed;
        dialog.handle(DialogEvent::Opened);
        dialog.handle(DialogEvent::SubmitStarted);

        dialog.handle(DialogEvent::SignedIn);

        assert_eq!(dialog, DialogState::Closed);
    }

    #[test]
    fn test_reset_email_returns_to_sign_in() {
        let mut dialog = DialogState::Closed;
        dialog.handle(DialogEvent::Opened);
        dialog.handle(DialogEvent::PaneSelected(AuthPane::ForgotPassword));
        dialog.handle(DialogEvent::SubmitStarted);

        dialog.handle(DialogEvent::ResetEmailSent);

        assert_eq!(
            dialog,
            DialogState::Open {
                pane: AuthPane::SignIn,
                busy: false
            }
        );
    }

    #[test]
    fn test_events_while_closed_are_ignored() {
        let mut dialog = DialogState::Closed;

        dialog.handle(DialogEvent::SubmitStarted);
        dialog.handle(DialogEvent::SignedIn);

        assert_eq!(dialog, DialogState::Closed);
    }

    #[test]
    fn test_catalogue_gate() {
        assert!(!AuthState::SignedOut.can_view_catalogue());
        assert!(AuthState::SignedIn(session()).can_view_catalogue());
    }
}
