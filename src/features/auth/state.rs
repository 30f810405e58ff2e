//! Auth session state and context for the frontend: the single source of
//! truth for "is this tab authenticated, as whom, with what session". The
//! provider hydrates state once on mount and exposes derived signals for the
//! guard and routes. Mutating operations are single-flight: a second
//! login/logout started while one is pending is rejected instead of racing.

use crate::features::auth::client::HttpSessionApi;
use crate::features::auth::provider::PopupIdentityProvider;
use crate::features::auth::session::SessionClient;
use crate::features::auth::types::UserSession;
use leptos::{prelude::*, task::spawn_local};
use send_wrapper::SendWrapper;
use std::rc::Rc;

/// The four observable states of the auth lifecycle, derived from the three
/// context flags. The guard renders from this, never from raw flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Uninitialized,
    Busy,
    Unauthenticated,
    Authenticated,
}

impl AuthPhase {
    pub fn from_flags(is_initialized: bool, is_loading: bool, is_authenticated: bool) -> Self {
        if !is_initialized {
            AuthPhase::Uninitialized
        } else if is_loading {
            AuthPhase::Busy
        } else if is_authenticated {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }
}

#[derive(Clone)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    session: SendWrapper<Rc<SessionClient>>,
    pub is_initialized: RwSignal<bool>,
    pub is_loading: RwSignal<bool>,
    pub user: RwSignal<Option<UserSession>>,
    pub principal: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    authenticated: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the injected session client.
    fn new(session: Rc<SessionClient>) -> Self {
        let authenticated = RwSignal::new(false);
        let is_authenticated = Signal::derive(move || authenticated.get());
        Self {
            session: SendWrapper::new(session),
            is_initialized: RwSignal::new(false),
            is_loading: RwSignal::new(true),
            user: RwSignal::new(None),
            principal: RwSignal::new(None),
            error: RwSignal::new(None),
            authenticated,
            is_authenticated,
        }
    }

    /// Current observable phase (tracked).
    pub fn phase(&self) -> AuthPhase {
        AuthPhase::from_flags(
            self.is_initialized.get(),
            self.is_loading.get(),
            self.authenticated.get(),
        )
    }

    /// Hydrates state once on mount. Never surfaces an error; a failed
    /// initialization settles as unauthenticated.
    pub async fn initialize(&self) {
        let active = self.session.initialize().await;
        if active {
            self.principal.set(self.session.principal());
            self.user.set(self.session.current_session().await);
        }
        self.authenticated.set(active);
        self.is_initialized.set(true);
        self.is_loading.set(false);
    }

    /// Runs the provider login flow and re-derives state. `user` stays
    /// `None` when the best-effort session fetch fails; that does not make
    /// the login unsuccessful.
    pub async fn login(&self) {
        if !self.begin_operation() {
            return;
        }
        match self.session.login().await {
            Ok(()) => {
                self.principal.set(self.session.principal());
                self.user.set(self.session.current_session().await);
                self.authenticated.set(true);
            }
            Err(err) => {
                self.error.set(Some(err.to_string()));
                self.authenticated.set(false);
            }
        }
        self.finish_operation();
    }

    /// Signs out. Always ends unauthenticated with `user` cleared, even when
    /// the backend logout fails.
    pub async fn logout(&self) {
        if !self.begin_operation() {
            return;
        }
        self.session.logout().await;
        self.user.set(None);
        self.principal.set(None);
        self.authenticated.set(false);
        self.error.set(None);
        self.finish_operation();
    }

    /// Links a GitHub username to the session and refreshes `user`.
    pub async fn set_github_username(&self, username: &str) -> bool {
        if !self.begin_operation() {
            return false;
        }
        let updated = self.session.set_github_username(username).await;
        if updated {
            self.user.set(self.session.current_session().await);
        } else {
            self.error
                .set(Some("Failed to update GitHub username.".to_string()));
        }
        self.finish_operation();
        updated
    }

    /// Extends the session's expiry and refreshes `user`.
    pub async fn renew_session(&self) -> bool {
        if !self.begin_operation() {
            return false;
        }
        let renewed = self.session.renew_session().await;
        if renewed {
            self.user.set(self.session.current_session().await);
        } else {
            self.error.set(Some("Failed to renew session.".to_string()));
        }
        self.finish_operation();
        renewed
    }

    /// Single-flight gate: rejects a mutating operation while another is in
    /// flight and clears the previous error otherwise.
    fn begin_operation(&self) -> bool {
        if self.is_loading.get_untracked() {
            self.error
                .set(Some("Another operation is already in progress.".to_string()));
            return false;
        }
        self.error.set(None);
        self.is_loading.set(true);
        true
    }

    fn finish_operation(&self) {
        self.is_loading.set(false);
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(session: Rc<SessionClient>, children: Children) -> impl IntoView {
    let auth = AuthContext::new(session);
    provide_context(auth.clone());

    let auth_for_init = auth.clone();
    spawn_local(async move {
        auth_for_init.initialize().await;
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback disconnected context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        AuthContext::new(SessionClient::new(
            Rc::new(PopupIdentityProvider::new()),
            Rc::new(HttpSessionApi),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::AuthPhase;

    #[test]
    fn phase_is_uninitialized_until_first_settle() {
        // `is_authenticated` must not matter before initialization settles.
        assert_eq!(
            AuthPhase::from_flags(false, true, false),
            AuthPhase::Uninitialized
        );
        assert_eq!(
            AuthPhase::from_flags(false, false, true),
            AuthPhase::Uninitialized
        );
        assert_eq!(
            AuthPhase::from_flags(false, true, true),
            AuthPhase::Uninitialized
        );
    }

    #[test]
    fn phase_is_busy_while_an_operation_is_pending() {
        assert_eq!(AuthPhase::from_flags(true, true, false), AuthPhase::Busy);
        assert_eq!(AuthPhase::from_flags(true, true, true), AuthPhase::Busy);
    }

    #[test]
    fn settled_phases_follow_the_authenticated_flag() {
        assert_eq!(
            AuthPhase::from_flags(true, false, false),
            AuthPhase::Unauthenticated
        );
        assert_eq!(
            AuthPhase::from_flags(true, false, true),
            AuthPhase::Authenticated
        );
    }
}
