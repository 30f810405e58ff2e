//! Identity-provider boundary. The provider owns the out-of-band sign-in
//! flow; this client only learns the resulting principal and a lifetime
//! ceiling. The trait exists so the application root can inject the popup
//! implementation in the browser and tests can substitute fakes.

use crate::app_lib::{AppError, now_ms};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// LocalStorage key under which the restored identity lives between page
/// loads, mirroring how the upstream identity SDK keeps its delegation.
const IDENTITY_STORAGE_KEY: &str = "veriflair.identity";

/// Provider-enforced maximum session lifetime: seven days.
pub const MAX_SESSION_MS: u64 = 7 * 24 * 60 * 60 * 1000;

const POPUP_WIDTH: f64 = 525.0;
const POPUP_HEIGHT: f64 = 705.0;

/// The identity established by the provider: an opaque principal plus the
/// local lifetime ceiling. Immutable for the session's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    pub principal: String,
    pub expires_at: u64,
}

/// Inputs to the out-of-band flow.
#[derive(Clone, Debug)]
pub struct LoginOptions {
    pub provider_url: String,
    pub max_session_ms: u64,
}

pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// The seam between this client and the identity provider.
pub trait IdentityProvider {
    /// Returns a still-valid identity from a prior page load, if any.
    fn restore(&self) -> Option<ProviderIdentity>;

    /// Runs the out-of-band flow and resolves with the established identity,
    /// or a `Provider` error when the flow fails or is cancelled.
    fn login<'a>(
        &'a self,
        options: LoginOptions,
    ) -> LocalBoxFuture<'a, Result<ProviderIdentity, AppError>>;

    /// Tears down the local provider identity. Always succeeds.
    fn logout<'a>(&'a self) -> LocalBoxFuture<'a, ()>;
}

/// Production provider: opens a centered popup on the provider URL and waits
/// for the provider window to post back a success or error message.
pub struct PopupIdentityProvider;

impl PopupIdentityProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PopupIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for PopupIdentityProvider {
    fn restore(&self) -> Option<ProviderIdentity> {
        use gloo_storage::{LocalStorage, Storage};

        let identity: ProviderIdentity = LocalStorage::get(IDENTITY_STORAGE_KEY).ok()?;
        if identity.expires_at <= now_ms() {
            // expired delegations are discarded silently
            LocalStorage::delete(IDENTITY_STORAGE_KEY);
            return None;
        }
        Some(identity)
    }

    fn login<'a>(
        &'a self,
        options: LoginOptions,
    ) -> LocalBoxFuture<'a, Result<ProviderIdentity, AppError>> {
        Box::pin(async move { login_with_popup(options).await })
    }

    fn logout<'a>(&'a self) -> LocalBoxFuture<'a, ()> {
        Box::pin(async move {
            use gloo_storage::{LocalStorage, Storage};

            LocalStorage::delete(IDENTITY_STORAGE_KEY);
        })
    }
}

async fn login_with_popup(options: LoginOptions) -> Result<ProviderIdentity, AppError> {
    use futures::channel::oneshot;
    use gloo_storage::{LocalStorage, Storage};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::MessageEvent;

    let window = web_sys::window()
        .ok_or_else(|| AppError::Provider("No window available.".to_string()))?;
    let features = popup_features(&window);
    let popup = window
        .open_with_url_and_target_and_features(
            &options.provider_url,
            "veriflairIdentity",
            &features,
        )
        .map_err(|_| AppError::Provider("Failed to open the identity window.".to_string()))?
        .ok_or_else(|| {
            AppError::Provider("The identity window was blocked by the browser.".to_string())
        })?;

    let (sender, receiver) = oneshot::channel::<Result<String, String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));
    let sender_for_closure = Rc::clone(&sender);
    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        if let Some(outcome) = parse_provider_message(&event.data()) {
            if let Some(sender) = sender_for_closure.borrow_mut().take() {
                let _ = sender.send(outcome);
            }
        }
    });
    window
        .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
        .map_err(|_| {
            AppError::Provider("Failed to listen for the identity window.".to_string())
        })?;

    let outcome = receiver.await;

    let _ = window.remove_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
    drop(on_message);
    let _ = popup.close();

    match outcome {
        Ok(Ok(principal)) => {
            let identity = ProviderIdentity {
                principal,
                expires_at: now_ms() + options.max_session_ms,
            };
            LocalStorage::set(IDENTITY_STORAGE_KEY, &identity)
                .map_err(|err| AppError::Provider(format!("Failed to persist identity: {err}")))?;
            Ok(identity)
        }
        Ok(Err(reason)) => Err(AppError::Provider(reason)),
        Err(_) => Err(AppError::Provider(
            "The sign-in flow was abandoned.".to_string(),
        )),
    }
}

/// Geometry hint centering the provider window on the current screen.
fn popup_features(window: &web_sys::Window) -> String {
    let (left, top) = window
        .screen()
        .ok()
        .and_then(|screen| {
            let width = screen.width().ok()? as f64;
            let height = screen.height().ok()? as f64;
            Some((
                (width / 2.0 - POPUP_WIDTH / 2.0).max(0.0),
                (height / 2.0 - POPUP_HEIGHT / 2.0).max(0.0),
            ))
        })
        .unwrap_or((0.0, 0.0));

    format!(
        "left={left},top={top},toolbar=0,location=0,menubar=0,width={POPUP_WIDTH},height={POPUP_HEIGHT}"
    )
}

/// Decodes a provider window message. Unrelated messages yield `None` and
/// are ignored; the flow keeps waiting.
fn parse_provider_message(data: &wasm_bindgen::JsValue) -> Option<Result<String, String>> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let source = Reflect::get(data, &JsValue::from_str("source"))
        .ok()?
        .as_string()?;
    if source != "veriflair-identity" {
        return None;
    }

    let status = Reflect::get(data, &JsValue::from_str("status"))
        .ok()?
        .as_string()?;
    match status.as_str() {
        "success" => {
            let principal = Reflect::get(data, &JsValue::from_str("principal"))
                .ok()?
                .as_string()?;
            Some(Ok(principal))
        }
        "error" => {
            let reason = Reflect::get(data, &JsValue::from_str("reason"))
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_else(|| "The sign-in was cancelled.".to_string());
            Some(Err(reason))
        }
        _ => None,
    }
}
