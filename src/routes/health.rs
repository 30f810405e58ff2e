//! Build version plus live health probes of both backends.

use crate::app_lib::build_info;
use crate::components::{AppShell, Spinner};
use crate::features::auth::client as session_client;
use crate::features::badges::client as data_client;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let session_health = LocalResource::new(move || async move {
        match session_client::health_check().await {
            Ok(health) => health.status,
            Err(err) => err.to_string(),
        }
    });
    let data_health = LocalResource::new(move || async move {
        match data_client::health_check().await {
            Ok(health) => health.status,
            Err(err) => err.to_string(),
        }
    });

    view! {
        <AppShell>
            <div class="mx-auto max-w-md space-y-4">
                <div class="rounded-xl border border-slate-800 bg-slate-900">
                    <div class="border-b border-slate-800 px-6 py-3 font-semibold text-white">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center text-sm text-slate-300">{commit}</pre>
                    </div>
                </div>
                <div class="rounded-xl border border-slate-800 bg-slate-900">
                    <div class="border-b border-slate-800 px-6 py-3 font-semibold text-white">
                        "Backends"
                    </div>
                    <div class="space-y-2 p-6 text-sm text-slate-300">
                        <Suspense fallback=move || view! { <Spinner /> }>
                            <div class="flex justify-between">
                                <span>"Session"</span>
                                <span>{move || session_health.get()}</span>
                            </div>
                            <div class="flex justify-between">
                                <span>"Data"</span>
                                <span>{move || data_health.get()}</span>
                            </div>
                        </Suspense>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
