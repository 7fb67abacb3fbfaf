//! Page-level error banner shared by every route. The banner starts empty,
//! is set by failing operations and is cleared whenever the route changes.

use crate::components::{Alert, AlertKind};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use signup_core::PageError;

#[derive(Clone, Copy)]
pub struct PageErrorContext {
    pub banner: RwSignal<PageError>,
}

impl PageErrorContext {
    pub fn set(&self, message: impl Into<String>) {
        let message = message.into();
        self.banner.update(|banner| banner.set(message));
    }
}

/// Provides the banner context. Must be rendered inside the router.
#[component]
pub fn PageErrorProvider(children: Children) -> impl IntoView {
    let banner = RwSignal::new(PageError::new());
    provide_context(PageErrorContext { banner });

    let location = use_location();
    Effect::new(move |previous: Option<String>| {
        let pathname = location.pathname.get();
        if previous.is_some_and(|previous| previous != pathname) {
            banner.update(PageError::clear);
        }
        pathname
    });

    view! { {children()} }
}

/// Returns the banner context or a detached empty one.
pub fn use_page_error() -> PageErrorContext {
    use_context::<PageErrorContext>().unwrap_or_else(|| PageErrorContext {
        banner: RwSignal::new(PageError::new()),
    })
}

/// Renders the banner when it holds a message.
#[component]
pub fn PageBanner() -> impl IntoView {
    let banner = use_page_error().banner;

    move || {
        banner.with(|banner| banner.message().map(ToString::to_string)).map(|message| {
            view! {
                <div class="mt-4">
                    <Alert kind=AlertKind::Error message=message />
                </div>
            }
        })
    }
}
