use crate::features::badges::types::Badge;
use leptos::prelude::*;

/// Card rendering of a single earned badge.
#[component]
pub fn BadgeCard(badge: Badge) -> impl IntoView {
    let image = if badge.metadata.image_url.is_empty() {
        badge.tier.image_path().to_string()
    } else {
        badge.metadata.image_url.clone()
    };

    view! {
        <div class="flex flex-col items-center gap-2 rounded-xl border border-slate-800 bg-slate-900 p-4 text-center shadow-sm">
            <img src=image alt=badge.name.clone() class="h-20 w-20 object-contain" />
            <p class="text-sm font-semibold text-white">{badge.name.clone()}</p>
            <p class="text-xs text-slate-400">{badge.category.display_name().to_string()}</p>
            <span class="rounded-full bg-slate-800 px-3 py-1 text-xs font-medium text-amber-300">
                {badge.tier.display_name()}
            </span>
            <p class="text-xs text-slate-500">{format!("Score {}", badge.score_achieved)}</p>
        </div>
    }
}
