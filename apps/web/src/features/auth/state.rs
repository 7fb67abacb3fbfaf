//! Auth session state shared through Leptos context. The provider tries a
//! refresh once on mount so a valid refresh cookie restores the session.
//! Only the user profile is kept in signals; the token stays in `token`.

use crate::features::auth::BrowserAuth;
use leptos::{prelude::*, task::spawn_local};
use signup_core::{AuthApi, User};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(user: RwSignal<Option<User>>) -> Self {
        let is_authenticated = Signal::derive(move || user.with(Option::is_some));
        Self {
            user,
            is_authenticated,
        }
    }

    pub fn set_user(&self, user: User) {
        self.user.set(Some(user));
    }

    pub fn clear(&self) {
        self.user.set(None);
    }
}

/// Provides auth context and restores the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(None));
    provide_context(auth);

    spawn_local(async move {
        if let Ok(session) = BrowserAuth.refresh().await {
            auth.set_user(session.user);
        }
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
