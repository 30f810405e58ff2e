use crate::features::auth::client::HttpSessionApi;
use crate::features::auth::provider::PopupIdentityProvider;
use crate::features::auth::session::SessionClient;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionClient::new(Rc::new(PopupIdentityProvider::new()), Rc::new(HttpSessionApi));

    view! {
        <AuthProvider session=session>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
