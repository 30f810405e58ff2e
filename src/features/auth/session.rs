//! Identity session client: owns the provider identity handle and the
//! authenticated channel to the session backend. Both collaborators are
//! injected so the application root wires the popup provider and HTTP API in
//! the browser while tests substitute fakes.
//!
//! Failure policy: `initialize` never fails, it degrades to "not
//! authenticated"; `logout` always ends in a definite signed-out state even
//! when the backend call fails; the session pass-throughs fail soft with
//! `None`/`false` so callers can degrade gracefully.

use crate::app_lib::{AppError, config::AppConfig, now_ms};
use crate::features::auth::client::SessionApi;
use crate::features::auth::provider::{
    IdentityProvider, LoginOptions, MAX_SESSION_MS, ProviderIdentity,
};
use crate::features::auth::types::UserSession;
use std::cell::RefCell;
use std::rc::Rc;

pub struct SessionClient {
    provider: Rc<dyn IdentityProvider>,
    api: Rc<dyn SessionApi>,
    identity: RefCell<Option<ProviderIdentity>>,
}

impl SessionClient {
    pub fn new(provider: Rc<dyn IdentityProvider>, api: Rc<dyn SessionApi>) -> Rc<Self> {
        Rc::new(Self {
            provider,
            api,
            identity: RefCell::new(None),
        })
    }

    /// Restores an identity from a prior page load and verifies the backend
    /// session best-effort. Returns whether a session is currently active;
    /// transient setup failures degrade to `false` instead of surfacing.
    pub async fn initialize(&self) -> bool {
        let Some(identity) = self.provider.restore() else {
            return false;
        };
        self.identity.replace(Some(identity));

        match self.api.fetch_session().await {
            Ok(Some(session)) if !session.is_valid(now_ms()) => {
                // expired backend session: normal flow, no user-visible error
                log::info!("stored session has expired, signing out");
                self.provider.logout().await;
                self.identity.replace(None);
                false
            }
            Ok(_) => true,
            Err(err) => {
                log::warn!("session verification failed, continuing: {err}");
                true
            }
        }
    }

    /// Runs the provider flow and materializes a backend session
    /// best-effort. Fails only when the provider flow itself fails.
    pub async fn login(&self) -> Result<(), AppError> {
        let config = AppConfig::load();
        let options = LoginOptions {
            provider_url: config.identity_provider_url,
            max_session_ms: MAX_SESSION_MS,
        };

        let identity = self.provider.login(options).await?;
        let principal = identity.principal.clone();
        self.identity.replace(Some(identity));

        if let Err(err) = self.api.authenticate(&principal).await {
            log::warn!("backend authenticate failed after provider login: {err}");
        }
        Ok(())
    }

    /// Tears down the backend session best-effort, then always clears the
    /// provider identity. The client ends signed out regardless of the
    /// backend outcome.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            log::warn!("backend logout failed, clearing local identity anyway: {err}");
        }
        self.provider.logout().await;
        self.identity.replace(None);
    }

    /// The current identity reference, if a session is active.
    pub fn principal(&self) -> Option<String> {
        self.identity
            .borrow()
            .as_ref()
            .map(|identity| identity.principal.clone())
    }

    /// Cheap local check; does not guarantee backend session validity.
    pub fn is_authenticated(&self) -> bool {
        self.identity
            .borrow()
            .as_ref()
            .is_some_and(|identity| identity.expires_at > now_ms())
    }

    /// Best-effort fetch of the backend session.
    pub async fn current_session(&self) -> Option<UserSession> {
        if !self.is_authenticated() {
            return None;
        }
        match self.api.fetch_session().await {
            Ok(session) => session,
            Err(err) => {
                log::warn!("failed to fetch session: {err}");
                None
            }
        }
    }

    /// Links a GitHub username to the session. Fails soft.
    pub async fn set_github_username(&self, username: &str) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        match self.api.update_session(Some(username)).await {
            Ok(_) => true,
            Err(err) => {
                log::warn!("failed to update GitHub username: {err}");
                false
            }
        }
    }

    /// Extends the backend session's expiry. The renewed session is accepted
    /// only when it keeps the identity unchanged and moves expiry forward.
    pub async fn renew_session(&self) -> bool {
        let Some(current) = self.current_session().await else {
            return false;
        };
        match self.api.renew().await {
            Ok(renewed) => match current.accept_renewal(renewed) {
                Some(_) => true,
                None => {
                    log::warn!("renewed session did not extend the current one, ignoring");
                    false
                }
            },
            Err(err) => {
                log::warn!("session renewal failed: {err}");
                false
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::SessionClient;
    use crate::app_lib::{AppError, now_ms};
    use crate::features::auth::client::{LocalBoxFuture, SessionApi};
    use crate::features::auth::provider::{IdentityProvider, LoginOptions, ProviderIdentity};
    use crate::features::auth::types::{UserRole, UserSession};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeProvider {
        identity: Option<ProviderIdentity>,
        login_result: RefCell<Option<Result<ProviderIdentity, AppError>>>,
        logged_out: Cell<bool>,
    }

    impl FakeProvider {
        fn with_login(result: Result<ProviderIdentity, AppError>) -> Self {
            Self {
                identity: None,
                login_result: RefCell::new(Some(result)),
                logged_out: Cell::new(false),
            }
        }

        fn with_restored(identity: ProviderIdentity) -> Self {
            Self {
                identity: Some(identity),
                login_result: RefCell::new(None),
                logged_out: Cell::new(false),
            }
        }
    }

    impl IdentityProvider for FakeProvider {
        fn restore(&self) -> Option<ProviderIdentity> {
            self.identity.clone()
        }

        fn login<'a>(
            &'a self,
            _options: LoginOptions,
        ) -> LocalBoxFuture<'a, Result<ProviderIdentity, AppError>> {
            Box::pin(async move {
                self.login_result
                    .borrow_mut()
                    .take()
                    .expect("unexpected login call")
            })
        }

        fn logout<'a>(&'a self) -> LocalBoxFuture<'a, ()> {
            Box::pin(async move { self.logged_out.set(true) })
        }
    }

    #[derive(Default)]
    struct FakeApi {
        session: Option<UserSession>,
        fail_logout: bool,
        renew_result: Option<Result<UserSession, AppError>>,
    }

    impl SessionApi for FakeApi {
        fn authenticate<'a>(
            &'a self,
            _principal: &'a str,
        ) -> LocalBoxFuture<'a, Result<UserSession, AppError>> {
            Box::pin(async move {
                self.session
                    .clone()
                    .ok_or_else(|| AppError::Business("Authentication failed".to_string()))
            })
        }

        fn fetch_session<'a>(
            &'a self,
        ) -> LocalBoxFuture<'a, Result<Option<UserSession>, AppError>> {
            Box::pin(async move { Ok(self.session.clone()) })
        }

        fn renew<'a>(&'a self) -> LocalBoxFuture<'a, Result<UserSession, AppError>> {
            Box::pin(async move {
                self.renew_result
                    .clone()
                    .unwrap_or_else(|| Err(AppError::Network("unreachable".to_string())))
            })
        }

        fn update_session<'a>(
            &'a self,
            _github_username: Option<&'a str>,
        ) -> LocalBoxFuture<'a, Result<UserSession, AppError>> {
            Box::pin(async move {
                self.session
                    .clone()
                    .ok_or_else(|| AppError::Business("No session".to_string()))
            })
        }

        fn logout<'a>(&'a self) -> LocalBoxFuture<'a, Result<(), AppError>> {
            Box::pin(async move {
                if self.fail_logout {
                    Err(AppError::Network("unreachable".to_string()))
                } else {
                    Ok(())
                }
            })
        }
    }

    fn identity(principal: &str) -> ProviderIdentity {
        ProviderIdentity {
            principal: principal.to_string(),
            expires_at: now_ms() + 60_000,
        }
    }

    fn backend_session(expires_at: u64) -> UserSession {
        UserSession {
            user_principal: "aaaa-bbbb".to_string(),
            github_username: None,
            created_at: 0,
            last_active: 0,
            expires_at,
            role: UserRole::User,
            is_verified: true,
        }
    }

    #[test]
    fn login_then_logout_ends_signed_out_even_when_backend_logout_fails() {
        let provider = Rc::new(FakeProvider::with_login(Ok(identity("aaaa-bbbb"))));
        let api = Rc::new(FakeApi {
            session: Some(backend_session(now_ms() + 60_000)),
            fail_logout: true,
            renew_result: None,
        });
        let client = SessionClient::new(provider.clone(), api);

        block_on(async {
            client.login().await.expect("provider login should succeed");
            assert!(client.is_authenticated());
            assert_eq!(client.principal().as_deref(), Some("aaaa-bbbb"));

            client.logout().await;
            assert!(!client.is_authenticated());
            assert!(client.principal().is_none());
            assert!(client.current_session().await.is_none());
        });
        assert!(provider.logged_out.get());
    }

    #[test]
    fn provider_failure_leaves_client_signed_out() {
        let provider = Rc::new(FakeProvider::with_login(Err(AppError::Provider(
            "cancelled".to_string(),
        ))));
        let client = SessionClient::new(provider, Rc::new(FakeApi::default()));

        block_on(async {
            let err = client.login().await.expect_err("login should fail");
            assert_eq!(err, AppError::Provider("cancelled".to_string()));
            assert!(!client.is_authenticated());
        });
    }

    #[test]
    fn initialize_without_stored_identity_is_unauthenticated() {
        let provider = Rc::new(FakeProvider {
            identity: None,
            login_result: RefCell::new(None),
            logged_out: Cell::new(false),
        });
        let client = SessionClient::new(provider, Rc::new(FakeApi::default()));

        block_on(async {
            assert!(!client.initialize().await);
            assert!(!client.is_authenticated());
        });
    }

    #[test]
    fn initialize_discards_expired_backend_session() {
        let provider = Rc::new(FakeProvider::with_restored(identity("aaaa-bbbb")));
        let api = Rc::new(FakeApi {
            session: Some(backend_session(now_ms().saturating_sub(1))),
            fail_logout: false,
            renew_result: None,
        });
        let client = SessionClient::new(provider.clone(), api);

        block_on(async {
            assert!(!client.initialize().await);
            assert!(!client.is_authenticated());
        });
        assert!(provider.logged_out.get());
    }

    #[test]
    fn renew_rejects_a_session_that_does_not_extend_expiry() {
        let expires = now_ms() + 60_000;
        let provider = Rc::new(FakeProvider::with_restored(identity("aaaa-bbbb")));
        let api = Rc::new(FakeApi {
            session: Some(backend_session(expires)),
            fail_logout: false,
            renew_result: Some(Ok(backend_session(expires))),
        });
        let client = SessionClient::new(provider, api);

        block_on(async {
            assert!(client.initialize().await);
            assert!(!client.renew_session().await);
        });
    }

    #[test]
    fn renew_accepts_a_strictly_extended_session() {
        let expires = now_ms() + 60_000;
        let provider = Rc::new(FakeProvider::with_restored(identity("aaaa-bbbb")));
        let api = Rc::new(FakeApi {
            session: Some(backend_session(expires)),
            fail_logout: false,
            renew_result: Some(Ok(backend_session(expires + 60_000))),
        });
        let client = SessionClient::new(provider, api);

        block_on(async {
            assert!(client.initialize().await);
            assert!(client.renew_session().await);
        });
    }
}
