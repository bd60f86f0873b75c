//! Authentication state for the reminders app.
//!
//! The identity provider publishes the current user (or `None`) on a
//! [`tokio::sync::watch`] channel. [`AuthStateObserver`] maps each emission to
//! an [`AuthenticationState`]; callers redirect to sign-in when
//! [`AuthenticationState::requires_sign_in`] is true.

mod auth_state;

pub use auth_state::{auth_signal, AuthStateObserver, AuthUser, AuthenticationState};
