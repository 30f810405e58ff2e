//! Public leaderboard: top profiles ranked by reputation score. Falls back to
//! placeholder rows when the backend is unreachable so the page never goes
//! blank.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::badges::client;
use crate::features::badges::leaderboard::{LeaderboardEntry, demo_entries, rank_profiles};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const TOP_LIMIT: u32 = 10;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let board = LocalResource::new(move || async move {
        client::get_leaderboard(Some(TOP_LIMIT))
            .await
            .map(|profiles| rank_profiles(&profiles))
    });

    view! {
        <AppShell>
            <div class="mx-auto max-w-3xl space-y-6">
                <h1 class="text-2xl font-bold text-white">"Leaderboard"</h1>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match board.get() {
                        Some(Ok(entries)) => view! { <LeaderboardTable entries=entries /> }.into_any(),
                        Some(Err(err)) => {
                            log::warn!("leaderboard fetch failed: {err}");
                            view! {
                                <div class="space-y-4">
                                    <Alert
                                        kind=AlertKind::Warning
                                        message="The leaderboard is temporarily unavailable. Showing sample data."
                                            .to_string()
                                    />
                                    <LeaderboardTable entries=demo_entries() />
                                </div>
                            }
                            .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}

#[component]
fn LeaderboardTable(entries: Vec<LeaderboardEntry>) -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-xl border border-slate-800">
            <table class="w-full text-left text-sm text-slate-300">
                <thead class="bg-slate-900 text-xs uppercase text-slate-500">
                    <tr>
                        <th class="px-4 py-3">"#"</th>
                        <th class="px-4 py-3">"Developer"</th>
                        <th class="px-4 py-3 text-right">"Points"</th>
                        <th class="px-4 py-3 text-right">"Badges"</th>
                    </tr>
                </thead>
                <tbody>
                    {entries
                        .into_iter()
                        .map(|entry| {
                            let detail = paths::user_detail(&entry.username);
                            view! {
                                <tr class="border-t border-slate-800 hover:bg-slate-900">
                                    <td class="px-4 py-3 font-medium text-white">{entry.place}</td>
                                    <td class="px-4 py-3">
                                        <A href={detail} {..} class="hover:text-amber-300">
                                            {entry.username}
                                        </A>
                                    </td>
                                    <td class="px-4 py-3 text-right">{entry.points}</td>
                                    <td class="px-4 py-3 text-right">{entry.badges}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
