//! Login route. A successful login stores the access token in memory and
//! opens the users list; failures are reported through the page banner.

use crate::{
    components::{AppShell, Button},
    features::{
        auth::{BrowserAuth, state::use_auth},
        page_error::use_page_error,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};
use signup_core::{AuthApi, LoginRequest};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let page_error = use_page_error();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { BrowserAuth.login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    auth.set_user(session.user);
                    navigate("/users", Default::default());
                }
                Err(err) => {
                    if let Some(message) = err.message() {
                        page_error.set(message);
                    }
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            page_error.set("Email and password are required.");
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-md mx-auto space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900">"Log in"</h1>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        autocomplete="email"
                        placeholder="e.g. bobsmith@gmail.com"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        autocomplete="current-password"
                        placeholder="*******"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button
                    button_type="submit"
                    disabled=login_action.pending()
                    loading=login_action.pending()
                >
                    "Log in"
                </Button>
                <p class="text-sm text-gray-600">
                    "No account yet? "
                    <A href="/signup" {..} class="text-emerald-700 hover:underline">
                        "Sign up"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
