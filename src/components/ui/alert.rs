//! Alert banners for success, error and warning messages. Messages must be
//! safe to render and should never include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Warning,
}

/// Renders a styled alert banner. When `on_dismiss` is provided the banner
/// shows a close control and reports the click to the caller.
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "flex items-center justify-between rounded-lg border border-red-500/40 bg-red-900/30 px-4 py-3 text-sm text-red-200"
        }
        AlertKind::Success => {
            "flex items-center justify-between rounded-lg border border-emerald-500/40 bg-emerald-900/30 px-4 py-3 text-sm text-emerald-200"
        }
        AlertKind::Warning => {
            "flex items-center justify-between rounded-lg border border-amber-500/40 bg-amber-900/30 px-4 py-3 text-sm text-amber-200"
        }
    };

    view! {
        <div class=class role="alert">
            <span>{message}</span>
            {on_dismiss.map(|callback| view! {
                <button
                    type="button"
                    class="ml-4 text-inherit opacity-70 hover:opacity-100"
                    aria-label="Dismiss"
                    on:click=move |_| callback.run(())
                >
                    "\u{2715}"
                </button>
            })}
        </div>
    }
}
