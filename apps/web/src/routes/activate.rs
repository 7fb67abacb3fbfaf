//! Activation route reached from the emailed link. It submits the token once
//! on mount, stores the returned session and reports failures through the
//! page banner.

use crate::{
    components::{Alert, AlertKind, AppShell, Spinner},
    features::{
        auth::{BrowserAuth, state::use_auth},
        page_error::use_page_error,
    },
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};
use signup_core::AuthApi;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActivationStatus {
    Pending,
    Activated,
    Failed,
}

#[component]
pub fn ActivatePage() -> impl IntoView {
    let auth = use_auth();
    let page_error = use_page_error();
    let params = use_params_map();
    let (status, set_status) = signal(ActivationStatus::Pending);

    let activate_action = Action::new_local(move |token: &String| {
        let token = token.clone();
        async move { BrowserAuth.activate(&token).await }
    });

    Effect::new(move |_| {
        let token = params.with(|params| params.get("token")).unwrap_or_default();
        set_status.set(ActivationStatus::Pending);
        activate_action.dispatch(token);
    });

    Effect::new(move |_| {
        if let Some(result) = activate_action.value().get() {
            match result {
                Ok(session) => {
                    auth.set_user(session.user);
                    set_status.set(ActivationStatus::Activated);
                }
                Err(err) => {
                    set_status.set(ActivationStatus::Failed);
                    if let Some(message) = err.message() {
                        page_error.set(message);
                    }
                }
            }
        }
    });

    view! {
        <AppShell>
            <section class="max-w-md mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-gray-900">"Account activation"</h1>
                {move || match status.get() {
                    ActivationStatus::Pending => view! { <Spinner /> }.into_any(),
                    ActivationStatus::Activated => {
                        view! {
                            <div class="space-y-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Your account is now active".to_string()
                                />
                                <A href="/users" {..} class="text-emerald-700 hover:underline">
                                    "See all users"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                    ActivationStatus::Failed => {
                        view! {
                            <p class="text-sm text-gray-600">
                                "The activation link is invalid or has expired."
                            </p>
                        }
                            .into_any()
                    }
                }}
            </section>
        </AppShell>
    }
}
