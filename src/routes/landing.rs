//! Public landing page: the product pitch plus the single entry point into
//! the sign-in flow.

use crate::app_lib::build_info;
use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    let error = auth.error;
    let is_loading = auth.is_loading;
    let navigate = use_navigate();

    let auth_for_click = auth.clone();
    let get_verified = move |_| {
        let auth = auth_for_click.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if !auth.is_authenticated.get_untracked() {
                auth.login().await;
            }
            if auth.is_authenticated.get_untracked() {
                navigate(paths::LEADERBOARD, Default::default());
            }
        });
    };

    view! {
        <AppShell>
            <section class="flex flex-col items-center gap-6 py-16 text-center">
                <h1 class="max-w-2xl text-4xl font-bold text-white sm:text-5xl">
                    "Prove your GitHub reputation"
                </h1>
                <p class="max-w-xl text-lg text-slate-400">
                    "VeriFlair turns your open-source history into verified, tiered badges. \
                     Sign in, link your GitHub account, and climb the leaderboard."
                </p>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <Button
                    disabled=Signal::derive(move || is_loading.get())
                    on:click=get_verified
                >
                    "Get Verified Now"
                </Button>
            </section>
            <section class="mx-auto grid max-w-4xl gap-6 pb-16 sm:grid-cols-3">
                <div class="rounded-xl border border-slate-800 bg-slate-900 p-6">
                    <h2 class="mb-2 font-semibold text-white">"Sign in"</h2>
                    <p class="text-sm text-slate-400">
                        "Authenticate with your identity provider. No passwords, no email."
                    </p>
                </div>
                <div class="rounded-xl border border-slate-800 bg-slate-900 p-6">
                    <h2 class="mb-2 font-semibold text-white">"Link GitHub"</h2>
                    <p class="text-sm text-slate-400">
                        "Connect your GitHub account so your contributions can be analyzed."
                    </p>
                </div>
                <div class="rounded-xl border border-slate-800 bg-slate-900 p-6">
                    <h2 class="mb-2 font-semibold text-white">"Earn badges"</h2>
                    <p class="text-sm text-slate-400">
                        "Collect tiered badges for languages, contributions, and achievements."
                    </p>
                </div>
            </section>
            <footer class="pb-8 text-center text-xs text-slate-600">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </AppShell>
    }
}
