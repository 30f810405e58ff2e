//! The signed-in user's own profile: creation on first visit, GitHub account
//! linking, data re-sync, and the earned badge collection. A failed re-sync
//! keeps the last good profile on screen behind a dismissible banner.

use crate::components::{Alert, AlertKind, AppShell, BadgeCard, Button, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::badges::types::UserProfile;
use crate::features::badges::{client, oauth};
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <ProfileContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = use_auth();
    let principal = auth.principal;
    let profile = LocalResource::new(move || async move { client::get_profile(None).await });
    let banner = RwSignal::new(None::<String>);

    // Duplicate-profile responses count as success so a stale "create" button
    // never strands the user.
    let create = Action::new_local(move |&(): &()| async move {
        match client::create_initial_profile().await {
            Ok(_) => Ok(()),
            Err(err) if err.is_already_exists() => Ok(()),
            Err(err) => Err(err.to_string()),
        }
    });
    Effect::new(move |_| match create.value().get() {
        Some(Ok(())) => {
            banner.set(None);
            profile.refetch();
        }
        Some(Err(message)) => banner.set(Some(message)),
        None => {}
    });

    let sync = Action::new_local(move |&(): &()| async move {
        client::sync_github_data().await.map_err(|err| err.to_string())
    });
    Effect::new(move |_| match sync.value().get() {
        Some(Ok(_)) => {
            banner.set(None);
            profile.refetch();
        }
        Some(Err(message)) => banner.set(Some(message)),
        None => {}
    });

    let connect_github = move |_| {
        if let Err(err) = oauth::begin_authorization() {
            banner.set(Some(err.to_string()));
        }
    };

    let busy = Signal::derive(move || create.pending().get() || sync.pending().get());

    view! {
        <div class="mx-auto max-w-4xl space-y-6">
            <h1 class="text-2xl font-bold text-white">"Your profile"</h1>
            {move || {
                banner
                    .get()
                    .map(|message| {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=message
                                on_dismiss=Callback::new(move |()| banner.set(None))
                            />
                        }
                    })
            }}
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match profile.get() {
                    Some(Ok(Some(profile))) => {
                        view! {
                            <ProfileView
                                profile=profile
                                busy=busy
                                on_sync=Callback::new(move |()| {
                                    sync.dispatch(());
                                })
                                on_connect=Callback::new(connect_github)
                            />
                        }
                        .into_any()
                    }
                    Some(Ok(None)) => {
                        let principal = principal.get().unwrap_or_default();
                        view! {
                            <div class="flex flex-col items-start gap-4 rounded-xl border border-slate-800 bg-slate-900 p-6">
                                <p class="text-slate-300">
                                    "No profile yet for " <span class="font-mono text-sm">{principal}</span>
                                </p>
                                <Button
                                    disabled=Signal::derive(move || create.pending().get())
                                    on:click=move |_| {
                                        create.dispatch(());
                                    }
                                >
                                    "Create profile"
                                </Button>
                            </div>
                        }
                        .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProfileView(
    profile: UserProfile,
    busy: Signal<bool>,
    on_sync: Callback<()>,
    on_connect: Callback<()>,
) -> impl IntoView {
    let display_name = profile.display_name().to_string();
    let avatar = profile
        .github_data
        .as_ref()
        .map(|data| data.avatar_url.clone());
    let connected = profile.github_connected;
    let badges = profile.badges.clone();

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center gap-4 rounded-xl border border-slate-800 bg-slate-900 p-6">
                {avatar
                    .map(|url| {
                        view! {
                            <img
                                src=url
                                alt="avatar"
                                class="h-16 w-16 rounded-full border border-slate-700"
                            />
                        }
                    })}
                <div class="flex-1">
                    <p class="text-lg font-semibold text-white">{display_name}</p>
                    <p class="text-sm text-slate-400">
                        {format!(
                            "{} points \u{b7} {} badges",
                            profile.reputation_score,
                            profile.total_badges,
                        )}
                    </p>
                </div>
                {if connected {
                    view! {
                        <Button
                            disabled=busy
                            on:click=move |_| on_sync.run(())
                        >
                            "Sync GitHub data"
                        </Button>
                    }
                    .into_any()
                } else {
                    view! {
                        <Button
                            disabled=busy
                            on:click=move |_| on_connect.run(())
                        >
                            "Connect GitHub"
                        </Button>
                    }
                    .into_any()
                }}
            </div>
            <div>
                <h2 class="mb-4 text-lg font-semibold text-white">"Badges"</h2>
                {if badges.is_empty() {
                    view! {
                        <p class="text-sm text-slate-500">
                            "No badges yet. Connect GitHub and sync to earn your first one."
                        </p>
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
        </div>
    }
}
