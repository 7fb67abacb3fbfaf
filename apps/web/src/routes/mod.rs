mod activate;
mod login;
mod not_found;
mod signup;
mod users;

pub(crate) use activate::ActivatePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use signup::SignUpPage;
pub(crate) use users::UsersListPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <Redirect path="/signup" /> } />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/activate/:token") view=ActivatePage />
            <Route path=path!("/users") view=UsersListPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
