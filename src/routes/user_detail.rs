//! Public read-only view of another developer's profile and badges.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, BadgeCard, Spinner};
use crate::features::badges::client;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct UserParams {
    username: Option<String>,
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params::<UserParams>();
    let params_for_fetch = params;
    let profile = LocalResource::new(move || {
        let username = params_for_fetch
            .get()
            .ok()
            .and_then(|params| params.username)
            .unwrap_or_default();
        async move {
            if username.trim().is_empty() {
                return Err(AppError::Config("A username is required.".to_string()));
            }

            client::get_profile(Some(&username)).await
        }
    });

    let params_for_effect = params;
    Effect::new(move |_| {
        let _ = params_for_effect.get();
        profile.refetch();
    });

    view! {
        <AppShell>
            <div class="mx-auto max-w-4xl space-y-6">
                <button
                    type="button"
                    class="text-sm text-slate-400 hover:text-amber-300"
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.back();
                            }
                        }
                    }
                >
                    "\u{2190} Back"
                </button>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match profile.get() {
                        Some(Ok(Some(profile))) => {
                            let display_name = profile.display_name().to_string();
                            let badges = profile.badges.clone();
                            view! {
                                <div class="space-y-6">
                                    <div class="rounded-xl border border-slate-800 bg-slate-900 p-6">
                                        <h1 class="text-2xl font-bold text-white">{display_name}</h1>
                                        <p class="mt-1 text-sm text-slate-400">
                                            {format!(
                                                "{} points \u{b7} {} badges",
                                                profile.reputation_score,
                                                profile.total_badges,
                                            )}
                                        </p>
                                    </div>
                                    {if badges.is_empty() {
                                        view! {
                                            <p class="text-sm text-slate-500">"No badges earned yet."</p>
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                                                {badges
                                                    .into_iter()
                                                    .map(|badge| view! { <BadgeCard badge=badge /> })
                                                    .collect_view()}
                                            </div>
                                        }
                                        .into_any()
                                    }}
                                </div>
                            }
                            .into_any()
                        }
                        Some(Ok(None)) => {
                            view! {
                                <Alert
                                    kind=AlertKind::Warning
                                    message="This developer does not have a profile yet.".to_string()
                                />
                            }
                            .into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}
