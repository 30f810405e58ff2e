mod github_callback;
mod health;
mod landing;
mod leaderboard;
mod not_found;
mod profile;
mod user_detail;

pub(crate) use github_callback::GitHubCallbackPage;
pub(crate) use health::HealthPage;
pub(crate) use landing::LandingPage;
pub(crate) use leaderboard::LeaderboardPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use user_detail::UserDetailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Navigation targets used by routes and the shell.
pub(crate) mod paths {
    pub const LANDING: &str = "/";
    pub const LEADERBOARD: &str = "/leaderboard";
    pub const PROFILE: &str = "/profile";

    pub fn user_detail(username: &str) -> String {
        format!("/users/{username}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/leaderboard") view=LeaderboardPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/users/:username") view=UserDetailPage />
            <Route path=path!("/auth/github/callback") view=GitHubCallbackPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
