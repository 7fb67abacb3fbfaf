//! Registration form state: values, errors, touched fields and the submission
//! state machine. All updates go through small reducer-style methods so the
//! same state object drives the browser view, the CLI and the tests.
//!
//! Errors have a single slot per field with last-write-wins semantics: local
//! validation and server-reported messages overwrite each other.

use crate::{
    error::ApiError,
    page_error::PageError,
    types::{Field, FormValues},
    validation::validate_field,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Fields whose errors disable the submit button. Phone and surname errors do
/// not gate the button; invalid values there are still caught when submitting.
pub const SUBMIT_GATING_FIELDS: [Field; 3] = [Field::Email, Field::Password, Field::Name];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Not terminal, the user may submit again.
    Failed,
}

/// Current message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, message: Option<String>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// User interaction with a single input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Changed { field: Field, value: String },
    Blurred(Field),
}

/// What to render under an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Help<'a> {
    Error(&'a str),
    Hint(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationForm {
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    state: SubmissionState,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// Empty form, validated on mount.
    #[must_use]
    pub fn new() -> Self {
        Self::with_values(FormValues::default())
    }

    #[must_use]
    pub fn with_values(values: FormValues) -> Self {
        let mut form = Self {
            values,
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            state: SubmissionState::Idle,
        };
        form.validate_all();
        form
    }

    /// Applies a user interaction. Ignored once registration succeeded.
    pub fn apply(&mut self, event: FormEvent) {
        if self.is_registered() {
            return;
        }

        match event {
            FormEvent::Changed { field, value } => {
                self.values.set(field, value);
                self.validate_all();
            }
            FormEvent::Blurred(field) => {
                self.touched.insert(field);
                self.validate_all();
            }
        }
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.apply(FormEvent::Changed {
            field,
            value: value.into(),
        });
    }

    pub fn blur(&mut self, field: Field) {
        self.apply(FormEvent::Blurred(field));
    }

    /// Starts a submission attempt.
    ///
    /// Every field becomes touched and is re-validated. Returns the values to
    /// send, or `None` when a local error blocks the attempt, a request is
    /// already in flight, or the form is already registered.
    pub fn begin_submit(&mut self) -> Option<FormValues> {
        if matches!(
            self.state,
            SubmissionState::Submitting | SubmissionState::Succeeded
        ) {
            return None;
        }

        self.touched.extend(Field::ALL);
        self.validate_all();

        if !self.errors.is_empty() {
            debug!(
                invalid_fields = self.errors.0.len(),
                "submission blocked by local validation"
            );
            self.state = SubmissionState::Idle;
            return None;
        }

        self.state = SubmissionState::Submitting;
        Some(self.values.clone())
    }

    /// Reconciles the outcome of the request started by [`Self::begin_submit`].
    ///
    /// On failure the banner receives the error's top-level message. When the
    /// server sent a structured body, every field takes the server's message
    /// or is cleared, and the body's own message replaces the banner.
    pub fn complete_submit(&mut self, result: Result<(), ApiError>, banner: &mut PageError) {
        if self.state != SubmissionState::Submitting {
            warn!(state = ?self.state, "submission result received while not submitting");
        }

        match result {
            Ok(()) => {
                info!("registration accepted");
                self.state = SubmissionState::Succeeded;
            }
            Err(err) => {
                warn!(status = ?err.status(), "registration failed: {err}");
                self.state = SubmissionState::Failed;

                if let Some(message) = err.message() {
                    banner.set(message);
                }

                let Some(body) = err.body() else {
                    return;
                };

                let server = body.errors.clone().unwrap_or_default();
                for field in Field::ALL {
                    self.errors.set(field, server.get(field).map(str::to_string));
                }

                if let Some(message) = body.message.as_deref() {
                    banner.set(message);
                }
            }
        }
    }

    /// Leaves the submitting state without an outcome, e.g. when the request
    /// future was dropped.
    pub fn abort_submit(&mut self) {
        if self.state == SubmissionState::Submitting {
            debug!("submission abandoned before completion");
            self.state = SubmissionState::Idle;
        }
    }

    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The field's error, once the field has been interacted with.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    #[must_use]
    pub fn help(&self, field: Field) -> Option<Help<'_>> {
        match self.visible_error(field) {
            Some(message) => Some(Help::Error(message)),
            None => field.hint().map(Help::Hint),
        }
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.state == SubmissionState::Succeeded
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
            && !self.is_registered()
            && !SUBMIT_GATING_FIELDS
                .iter()
                .any(|field| self.errors.contains(*field))
    }

    fn validate_all(&mut self) {
        for field in Field::ALL {
            let message = validate_field(field, self.values.get(field));
            self.errors.set(field, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            email: "john@example.com".to_string(),
            password: "secret1".to_string(),
            name: "John".to_string(),
            surname: "Smith".to_string(),
            phone: "+1234567890".to_string(),
        }
    }

    fn failure(body: &str) -> ApiError {
        ApiError::http(400, body)
    }

    #[test]
    fn new_form_is_validated_on_mount() {
        let form = RegistrationForm::new();

        for field in Field::ALL {
            assert!(form.error(field).is_some(), "{field} should start invalid");
            assert_eq!(form.visible_error(field), None);
        }
        assert!(!form.can_submit());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn errors_show_only_after_touch() {
        let mut form = RegistrationForm::new();
        form.change(Field::Email, "nope");
        assert_eq!(form.visible_error(Field::Email), None);
        assert_eq!(form.help(Field::Email), None);

        form.blur(Field::Email);
        assert_eq!(form.visible_error(Field::Email), Some("Email is not valid"));
        assert_eq!(
            form.help(Field::Email),
            Some(Help::Error("Email is not valid"))
        );
        assert_eq!(
            form.help(Field::Password),
            Some(Help::Hint("At least 6 characters"))
        );
    }

    #[test]
    fn phone_and_surname_errors_do_not_gate_submit() {
        let mut values = valid_values();
        values.phone = "abc".to_string();
        values.surname = String::new();
        let form = RegistrationForm::with_values(values);

        assert!(form.error(Field::Phone).is_some());
        assert!(form.error(Field::Surname).is_some());
        assert!(form.can_submit());
    }

    #[test]
    fn gating_field_errors_disable_submit() {
        for field in SUBMIT_GATING_FIELDS {
            let mut form = RegistrationForm::with_values(valid_values());
            assert!(form.can_submit());
            form.change(field, "");
            assert!(!form.can_submit(), "{field} error should disable submit");
        }
    }

    #[test]
    fn begin_submit_is_blocked_by_any_local_error() {
        let mut values = valid_values();
        values.phone = "12-34".to_string();
        let mut form = RegistrationForm::with_values(values);

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.state(), SubmissionState::Idle);
        for field in Field::ALL {
            assert!(form.is_touched(field));
        }
        assert_eq!(form.visible_error(Field::Phone), Some("Phone is not valid"));
    }

    #[test]
    fn begin_submit_returns_values_and_disables_button() {
        let mut form = RegistrationForm::with_values(valid_values());

        assert_eq!(form.begin_submit(), Some(valid_values()));
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        // a second click while in flight sends nothing
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn success_is_terminal() {
        let mut form = RegistrationForm::with_values(valid_values());
        let mut banner = PageError::new();
        form.begin_submit();
        form.complete_submit(Ok(()), &mut banner);

        assert!(form.is_registered());
        form.change(Field::Name, "");
        assert_eq!(form.values().name, "John");
        assert_eq!(form.begin_submit(), None);
        assert!(!form.can_submit());
        assert!(banner.is_empty());
    }

    #[test]
    fn failure_overwrites_and_clears_server_errors() {
        let mut form = RegistrationForm::with_values(valid_values());
        let mut banner = PageError::new();
        form.begin_submit();
        form.complete_submit(
            Err(failure(r#"{"errors": {"phone": "bad", "name": "odd"}}"#)),
            &mut banner,
        );
        assert_eq!(form.error(Field::Phone), Some("bad"));
        assert_eq!(form.error(Field::Name), Some("odd"));

        form.begin_submit();
        assert_eq!(form.error(Field::Phone), None);
        form.complete_submit(
            Err(failure(
                r#"{"errors": {"email": "taken"}, "message": "Registration failed"}"#,
            )),
            &mut banner,
        );

        assert_eq!(form.state(), SubmissionState::Failed);
        assert_eq!(form.visible_error(Field::Email), Some("taken"));
        assert_eq!(banner.message(), Some("Registration failed"));
        for field in [Field::Password, Field::Name, Field::Surname, Field::Phone] {
            assert_eq!(form.error(field), None, "{field} should be cleared");
        }
        assert!(!form.can_submit());
    }

    #[test]
    fn failure_without_body_only_sets_banner() {
        let mut form = RegistrationForm::with_values(valid_values());
        let mut banner = PageError::new();
        form.begin_submit();
        form.complete_submit(
            Err(ApiError::Network("Unable to reach the server".to_string())),
            &mut banner,
        );

        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(form.errors().is_empty());
        assert_eq!(
            banner.message(),
            Some("Network error: Unable to reach the server")
        );
        assert!(form.can_submit());
    }

    #[test]
    fn body_without_message_keeps_transport_banner() {
        let mut form = RegistrationForm::with_values(valid_values());
        let mut banner = PageError::new();
        form.begin_submit();
        form.complete_submit(Err(failure(r#"{"errors": {}}"#)), &mut banner);

        assert_eq!(
            banner.message(),
            Some("Request failed with status code 400")
        );
    }

    #[test]
    fn editing_after_failure_revalidates_over_server_errors() {
        let mut form = RegistrationForm::with_values(valid_values());
        let mut banner = PageError::new();
        form.begin_submit();
        form.complete_submit(
            Err(failure(r#"{"errors": {"email": "taken"}}"#)),
            &mut banner,
        );
        assert!(!form.can_submit());

        form.change(Field::Email, "other@example.com");
        assert_eq!(form.error(Field::Email), None);
        assert!(form.can_submit());
    }

    #[test]
    fn abort_returns_to_idle() {
        let mut form = RegistrationForm::with_values(valid_values());
        form.begin_submit();
        form.abort_submit();

        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.can_submit());
    }
}
