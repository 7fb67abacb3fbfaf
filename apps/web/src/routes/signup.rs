//! Signup route. The whole form lives in one `RegistrationForm` signal: input
//! and blur events are fed to its reducer, submission goes through
//! `begin_submit`/`complete_submit`, and server failures land in the field
//! errors and the page banner.
//!
//! Flow Overview: validate on mount, POST `/registration`, then replace the
//! form with the "Check your email" confirmation.

use crate::{
    components::{AppShell, Button},
    features::{auth::BrowserAuth, page_error::use_page_error},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use signup_core::{Field, FormEvent, FormValues, Help, RegistrationApi, RegistrationForm};

const INPUT_CLASS: &str = "bg-gray-50 border text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5";

/// Renders the registration form and drives the submission.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::new());
    let page_error = use_page_error();

    let register_action = Action::new_local(move |values: &FormValues| {
        let values = values.clone();
        async move { BrowserAuth.register(&values).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            page_error.banner.update(|banner| {
                form.update(|form| form.complete_submit(result, banner));
            });
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(values) = form.try_update(RegistrationForm::begin_submit).flatten() {
            register_action.dispatch(values);
        }
    };

    let can_submit = Signal::derive(move || form.with(RegistrationForm::can_submit));
    let submitting = Signal::derive(move || form.with(RegistrationForm::is_submitting));

    view! {
        <AppShell>
            <Show
                when=move || form.with(RegistrationForm::is_registered)
                fallback=move || {
                    view! {
                        <form class="max-w-md mx-auto space-y-5" on:submit=on_submit>
                            <h1 class="text-2xl font-semibold text-gray-900">"Sign up"</h1>
                            <FormField form field=Field::Name input_type="text" autocomplete="given-name" />
                            <FormField form field=Field::Surname input_type="text" autocomplete="family-name" />
                            <FormField form field=Field::Phone input_type="tel" autocomplete="tel" />
                            <FormField form field=Field::Email input_type="email" autocomplete="email" />
                            <FormField form field=Field::Password input_type="password" autocomplete="new-password" />
                            <Button
                                button_type="submit"
                                disabled=Signal::derive(move || !can_submit.get())
                                loading=submitting
                            >
                                "Sign up"
                            </Button>
                            <p class="text-sm text-gray-600">
                                "Already have an account? "
                                <A href="/login" {..} class="text-emerald-700 hover:underline">
                                    "Log in"
                                </A>
                            </p>
                        </form>
                    }
                }
            >
                <section class="max-w-md mx-auto space-y-2">
                    <h1 class="text-2xl font-semibold text-gray-900">"Check your email"</h1>
                    <p class="text-gray-600">"We have sent you an email with the activation link"</p>
                </section>
            </Show>
        </AppShell>
    }
}

/// One labelled input bound to a form field, with its error or hint below.
#[component]
fn FormField(
    form: RwSignal<RegistrationForm>,
    field: Field,
    input_type: &'static str,
    autocomplete: &'static str,
) -> impl IntoView {
    let id = field.as_str();
    let invalid = move || form.with(|form| form.visible_error(field).is_some());
    let help = move || {
        form.with(|form| match form.help(field) {
            Some(Help::Error(message)) => Some(("mt-1 text-sm text-red-600", message.to_string())),
            Some(Help::Hint(hint)) => Some(("mt-1 text-sm text-gray-500", hint.to_string())),
            None => None,
        })
    };

    view! {
        <div>
            <label class="block mb-2 text-sm font-medium text-gray-900" for=id>
                {field.label()}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class=INPUT_CLASS
                class:border-gray-300=move || !invalid()
                class:border-red-500=invalid
                aria-invalid=move || invalid().to_string()
                autocomplete=autocomplete
                placeholder=field.placeholder()
                prop:value=move || form.with(|form| form.values().get(field).to_string())
                on:input=move |event| {
                    let value = event_target_value(&event);
                    form.update(|form| form.apply(FormEvent::Changed { field, value }));
                }
                on:blur=move |_| form.update(|form| form.apply(FormEvent::Blurred(field)))
            />
            {move || help().map(|(class, text)| view! { <p class=class>{text}</p> })}
        </div>
    }
}
