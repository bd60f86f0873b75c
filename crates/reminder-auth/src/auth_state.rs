//! Current-user signal reduced to an authentication state.
//!
//! ```text
//!   Some(user) ──► Authenticated
//!   None       ──► Unauthenticated
//!   (never)    ──► InvalidAuthentication
//! ```
//!
//! The mapping is a pure function of the latest signal. No previous state is
//! consulted, so any emission may move to either reachable state.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationState {
    Authenticated,
    Unauthenticated,
    /// Reserved for a malformed or failed provider signal. Nothing produces
    /// it yet.
    InvalidAuthentication,
}

impl AuthenticationState {
    pub fn from_user(user: Option<&AuthUser>) -> Self {
        match user {
            Some(_) => Self::Authenticated,
            None => Self::Unauthenticated,
        }
    }

    /// Only a signed-out user is sent to sign-in; other states need no
    /// navigation.
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// Create the provider-side sender and an observer on it.
pub fn auth_signal(
    initial: Option<AuthUser>,
) -> (watch::Sender<Option<AuthUser>>, AuthStateObserver) {
    let (tx, rx) = watch::channel(initial);
    (tx, AuthStateObserver::new(rx))
}

/// Follows the current-user signal and reports the mapped state.
#[derive(Debug, Clone)]
pub struct AuthStateObserver {
    users: watch::Receiver<Option<AuthUser>>,
}

impl AuthStateObserver {
    pub fn new(users: watch::Receiver<Option<AuthUser>>) -> Self {
        Self { users }
    }

    /// State for the latest emitted user.
    pub fn current(&self) -> AuthenticationState {
        AuthenticationState::from_user(self.users.borrow().as_ref())
    }

    /// Wait for the next emission and return its state.
    ///
    /// Returns `None` once the provider has dropped its sender.
    pub async fn changed(&mut self) -> Option<AuthenticationState> {
        self.users.changed().await.ok()?;
        let state = AuthenticationState::from_user(self.users.borrow_and_update().as_ref());
        debug!(state = ?state, "Authentication state changed");
        Some(state)
    }
}
