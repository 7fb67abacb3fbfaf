//! Users list route. It fetches the list once on mount and reports a failed
//! fetch through the page banner, leaving the list empty.

use crate::{
    components::{AppShell, Spinner},
    features::{page_error::use_page_error, users::BrowserUsers},
};
use leptos::prelude::*;
use signup_core::{PageError, UsersView};

#[component]
pub fn UsersListPage() -> impl IntoView {
    let page_error = use_page_error();
    let users = LocalResource::new(move || async move {
        let mut banner = PageError::new();
        let view = UsersView::load(&BrowserUsers, &mut banner).await;
        (view, banner.message().map(ToString::to_string))
    });

    Effect::new(move |_| {
        if let Some((_, Some(message))) = users.get() {
            page_error.set(message);
        }
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900">"Here you can see all users"</h1>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || {
                        users
                            .get()
                            .map(|(view, _)| {
                                let list = view.users().to_vec();
                                view! {
                                    <ul class="divide-y divide-gray-200">
                                        <For
                                            each=move || list.clone()
                                            key=|user| user.id.clone()
                                            children=|user| {
                                                view! {
                                                    <li class="py-4 space-y-1">
                                                        <h2 class="text-lg font-medium text-gray-900">
                                                            {format!("E-mail: {}", user.email)}
                                                        </h2>
                                                        <h3 class="text-sm text-gray-600">
                                                            {format!("Name: {}", user.name)}
                                                        </h3>
                                                        <h3 class="text-sm text-gray-600">
                                                            {format!("Surname: {}", user.surname)}
                                                        </h3>
                                                        <h3 class="text-sm text-gray-600">
                                                            {format!("Phone: {}", user.phone)}
                                                        </h3>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}
