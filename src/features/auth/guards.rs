//! Route guard gating protected views on the auth phase.

use crate::components::ui::Spinner;
use crate::features::auth::state::{AuthPhase, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders its children only for an authenticated session. While the phase
/// is unsettled it shows a verification screen; once the phase settles as
/// unauthenticated it redirects away exactly once. The latch resets on a
/// later successful sign-in so a sign-out afterwards redirects again.
#[component]
pub fn RequireAuth(
    #[prop(optional)] redirect_to: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let target = redirect_to.unwrap_or("/");
    let phase = Signal::derive(move || auth.phase());
    let redirected = StoredValue::new(false);

    let navigate = use_navigate();
    Effect::new(move |_| match phase.get() {
        AuthPhase::Unauthenticated => {
            if !redirected.get_value() {
                redirected.set_value(true);
                navigate(target, Default::default());
            }
        }
        AuthPhase::Authenticated => redirected.set_value(false),
        _ => {}
    });

    view! {
        {move || match phase.get() {
            AuthPhase::Authenticated => children().into_any(),
            AuthPhase::Unauthenticated => ().into_any(),
            AuthPhase::Uninitialized | AuthPhase::Busy => {
                view! {
                    <div class="flex min-h-screen flex-col items-center justify-center gap-4 bg-slate-950">
                        <Spinner/>
                        <p class="text-sm text-slate-400">"Verifying authentication..."</p>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
