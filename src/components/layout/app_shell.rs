//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup and the mobile menu toggle so routes can focus on content.
//! Navigation remains client-side; the backend still enforces access control.

use crate::features::auth::state::use_auth;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let user = auth.user;
    let principal = auth.principal;
    // GitHub username when the session carries one, shortened principal otherwise.
    let signed_in_as = move || {
        user.get()
            .and_then(|session| session.github_username)
            .or_else(|| {
                principal.get().map(|principal| {
                    principal.chars().take(10).chain("\u{2026}".chars()).collect::<String>()
                })
            })
            .unwrap_or_default()
    };
    let auth_for_login = auth.clone();
    let auth_for_logout = auth;

    let nav_link = "block py-2 px-3 text-slate-200 rounded hover:bg-slate-800 md:hover:bg-transparent md:border-0 md:hover:text-amber-300 md:p-0";

    view! {
        <div class="min-h-screen flex flex-col bg-slate-950">
            <header class="border-b border-slate-800 bg-slate-950">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/assets/logo.svg" class="h-8" alt="VeriFlair" />
                        <span class="font-semibold whitespace-nowrap text-white">
                            "VeriFlair"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-slate-400 rounded-lg md:hidden hover:bg-slate-800 focus:outline-none focus:ring-2 focus:ring-slate-600"
                        data-collapse-toggle="navbar-default"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-slate-800 rounded-lg bg-slate-900 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-transparent">
                            <li>
                                <A
                                    href="/leaderboard"
                                    {..}
                                    class=nav_link
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Leaderboard"
                                </A>
                            </li>
                            <Show when=move || is_authenticated.get()>
                                <li class="py-2 px-3 text-slate-500 md:p-0">
                                    {signed_in_as}
                                </li>
                                <li>
                                    <A
                                        href="/profile"
                                        {..}
                                        class=nav_link
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Profile"
                                    </A>
                                </li>
                            </Show>
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback={
                                        let auth = auth_for_login.clone();
                                        move || {
                                            let auth = auth.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class=nav_link
                                                    on:click=move |_| {
                                                        let auth = auth.clone();
                                                        spawn_local(async move {
                                                            auth.login().await;
                                                        });
                                                        set_menu_open.set(false);
                                                    }
                                                >
                                                    "Sign In"
                                                </button>
                                            }
                                        }
                                    }
                                >
                                    {
                                        let auth = auth_for_logout.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class=nav_link
                                                on:click=move |_| {
                                                    let auth = auth.clone();
                                                    spawn_local(async move {
                                                        auth.logout().await;
                                                    });
                                                    set_menu_open.set(false);
                                                }
                                            >
                                                "Sign Out"
                                            </button>
                                        }
                                    }
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
