//! OAuth callback landing: validates the returning `state` nonce against the
//! one stored before the redirect and exchanges the code with the backend.
//! A nonce mismatch fails here without any backend call.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::badges::client;
use crate::features::badges::oauth::{self, CallbackOutcome};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn GitHubCallbackPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let query = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();

    match oauth::parse_callback_query(&query) {
        CallbackOutcome::ProviderError(reason) => error.set(Some(reason)),
        CallbackOutcome::MissingParams => error.set(Some(
            "The GitHub response was missing the authorization code or state.".to_string(),
        )),
        CallbackOutcome::Exchange { code, state } => {
            let expected = oauth::take_stored_state();
            if oauth::validate_state(expected.as_deref(), &state) {
                spawn_local(async move {
                    match client::connect_github_oauth(&code, &state).await {
                        Ok(_) => navigate(paths::PROFILE, Default::default()),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            } else {
                error.set(Some(
                    "Invalid OAuth state. Please restart the GitHub connection.".to_string(),
                ));
            }
        }
    }

    view! {
        <AppShell>
            <div class="mx-auto flex max-w-md flex-col items-center gap-6 py-16 text-center">
                {move || match error.get() {
                    Some(message) => {
                        view! {
                            <Alert kind=AlertKind::Error message=message />
                            <A
                                href={paths::LANDING}
                                {..}
                                class="text-sm text-amber-300 hover:underline"
                            >
                                "Back to Home"
                            </A>
                        }
                        .into_any()
                    }
                    None => {
                        view! {
                            <Spinner />
                            <p class="text-sm text-slate-400">"Connecting your GitHub account..."</p>
                        }
                        .into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
