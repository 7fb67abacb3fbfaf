//! Shared layout wrapper with navigation, the page banner and the content
//! container. Navigation is client-side only; the API enforces access.

use crate::{
    app_lib::build_info,
    features::{
        auth::{BrowserAuth, state::use_auth},
        page_error::{PageBanner, use_page_error},
    },
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};
use signup_core::AuthApi;

const LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:hover:text-emerald-700 md:p-0";

/// Wraps routes with a header, the page banner and a footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let page_error = use_page_error();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = BrowserAuth.logout().await;
            auth.clear();
            match result {
                Ok(()) => navigate("/login", Default::default()),
                Err(err) => {
                    if let Some(message) = err.message() {
                        page_error.set(message);
                    }
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200">
                <nav class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/signup" {..} class="font-semibold whitespace-nowrap">
                        "Signup"
                    </A>
                    <ul class="font-medium flex flex-row space-x-6">
                        <li>
                            <A href="/users" {..} class=LINK_CLASS>
                                "Users"
                            </A>
                        </li>
                        <Show
                            when=move || auth.is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <li>
                                        <A href="/signup" {..} class=LINK_CLASS>
                                            "Sign up"
                                        </A>
                                    </li>
                                    <li>
                                        <A href="/login" {..} class=LINK_CLASS>
                                            "Log in"
                                        </A>
                                    </li>
                                }
                            }
                        >
                            <li>
                                <button type="button" class=LINK_CLASS on:click=on_logout.clone()>
                                    "Log out"
                                </button>
                            </li>
                        </Show>
                    </ul>
                </nav>
            </header>
            <main class="flex-1 max-w-screen-xl w-full mx-auto p-4">
                {children()}
                <PageBanner />
            </main>
            <footer class="p-4 text-center text-xs text-gray-400">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
