//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <div class="relative">
                    <h1 class="select-none text-9xl font-black text-slate-800">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 whitespace-nowrap text-2xl font-bold text-white">
                        "Page not found"
                    </p>
                </div>
                <div class="mt-4 space-y-6">
                    <p class="mx-auto max-w-sm text-slate-400">
                        "The page you requested does not exist or has moved."
                    </p>
                    <A
                        href="/"
                        {..}
                        class="inline-flex items-center rounded-full bg-blue-600 px-5 py-2.5 text-sm font-medium text-white transition-colors hover:bg-blue-700"
                    >
                        "Go Home"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
