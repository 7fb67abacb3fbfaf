use crate::features::{auth::state::AuthProvider, page_error::PageErrorProvider};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <PageErrorProvider>
                    <AppRoutes />
                </PageErrorProvider>
            </Router>
        </AuthProvider>
    }
}
