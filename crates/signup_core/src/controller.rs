//! Drives a registration form against a [`RegistrationApi`]. Owns the form
//! and its page banner; only one submission can be in flight because
//! `submit` borrows the controller mutably for the whole request.

use crate::{
    api::RegistrationApi,
    form::{FormEvent, RegistrationForm, SubmissionState},
    page_error::PageError,
    types::Field,
};
use tracing::{Instrument, debug, info_span};

pub struct RegistrationController<A> {
    api: A,
    form: RegistrationForm,
    page_error: PageError,
}

impl<A: RegistrationApi> RegistrationController<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self::with_form(api, RegistrationForm::new())
    }

    #[must_use]
    pub fn with_form(api: A, form: RegistrationForm) -> Self {
        Self {
            api,
            form,
            page_error: PageError::new(),
        }
    }

    pub fn apply(&mut self, event: FormEvent) {
        self.form.apply(event);
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.form.change(field, value);
    }

    pub fn blur(&mut self, field: Field) {
        self.form.blur(field);
    }

    /// Validates and sends the form, then routes the outcome into form and
    /// banner state. Never returns an error: failures end up in state.
    pub async fn submit(&mut self) -> SubmissionState {
        let Some(values) = self.form.begin_submit() else {
            return self.form.state();
        };

        let guard = SubmittingGuard {
            form: &mut self.form,
        };

        let span = info_span!("registration.submit", http.method = "POST");
        let result = self.api.register(&values).instrument(span).await;
        guard.form.complete_submit(result, &mut self.page_error);

        debug!(state = ?guard.form.state(), "submission finished");
        guard.form.state()
    }

    /// Tears the page down, clearing the banner.
    pub fn navigate_away(&mut self) {
        self.page_error.clear();
    }

    #[must_use]
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    #[must_use]
    pub fn page_error(&self) -> &PageError {
        &self.page_error
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.form.is_registered()
    }

    pub fn into_parts(self) -> (A, RegistrationForm, PageError) {
        (self.api, self.form, self.page_error)
    }
}

/// Resets the submitting flag if the request future is dropped mid-flight.
struct SubmittingGuard<'a> {
    form: &'a mut RegistrationForm,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.form.abort_submit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ApiError, types::FormValues};
    use std::{cell::RefCell, future::pending};

    #[derive(Default)]
    struct FakeApi {
        responses: RefCell<Vec<Result<(), ApiError>>>,
        sent: RefCell<Vec<FormValues>>,
    }

    impl FakeApi {
        fn replying(responses: Vec<Result<(), ApiError>>) -> Self {
            Self {
                responses: RefCell::new(responses),
                sent: RefCell::default(),
            }
        }
    }

    impl RegistrationApi for FakeApi {
        async fn register(&self, values: &FormValues) -> Result<(), ApiError> {
            self.sent.borrow_mut().push(values.clone());
            self.responses.borrow_mut().remove(0)
        }
    }

    struct HangingApi;

    impl RegistrationApi for HangingApi {
        async fn register(&self, _values: &FormValues) -> Result<(), ApiError> {
            pending().await
        }
    }

    fn fill<A: RegistrationApi>(controller: &mut RegistrationController<A>) {
        controller.change(Field::Name, "John");
        controller.change(Field::Surname, "Smith");
        controller.change(Field::Phone, "1234567890");
        controller.change(Field::Email, "john@example.com");
        controller.change(Field::Password, "secret1");
    }

    #[tokio::test]
    async fn invalid_form_is_never_sent() {
        let api = FakeApi::default();
        let mut controller = RegistrationController::new(&api);

        assert_eq!(controller.submit().await, SubmissionState::Idle);
        assert!(api.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn successful_submission_is_terminal() {
        let api = FakeApi::replying(vec![Ok(())]);
        let mut controller = RegistrationController::new(&api);
        fill(&mut controller);

        assert_eq!(controller.submit().await, SubmissionState::Succeeded);
        assert!(controller.is_registered());
        assert_eq!(api.sent.borrow().len(), 1);
        assert_eq!(api.sent.borrow()[0].email, "john@example.com");

        // no further submissions once registered
        assert_eq!(controller.submit().await, SubmissionState::Succeeded);
        assert_eq!(api.sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn failed_submission_can_be_retried() {
        let api = FakeApi::replying(vec![
            Err(ApiError::Timeout("Request timed out.".to_string())),
            Ok(()),
        ]);
        let mut controller = RegistrationController::new(&api);
        fill(&mut controller);

        assert_eq!(controller.submit().await, SubmissionState::Failed);
        assert_eq!(
            controller.page_error().message(),
            Some("Timeout: Request timed out.")
        );
        assert!(controller.form().can_submit());

        assert_eq!(controller.submit().await, SubmissionState::Succeeded);
        assert_eq!(api.sent.borrow().len(), 2);
    }

    #[tokio::test]
    async fn dropped_submission_resets_submitting_flag() {
        let mut controller = RegistrationController::new(HangingApi);
        fill(&mut controller);

        let outcome =
            tokio::time::timeout(std::time::Duration::from_millis(10), controller.submit()).await;
        assert!(outcome.is_err());

        assert_eq!(controller.form().state(), SubmissionState::Idle);
        assert!(controller.form().can_submit());
    }

    #[tokio::test]
    async fn navigating_away_clears_banner() {
        let api = FakeApi::replying(vec![Err(ApiError::http(500, ""))]);
        let mut controller = RegistrationController::new(&api);
        fill(&mut controller);
        controller.submit().await;
        assert!(!controller.page_error().is_empty());

        controller.navigate_away();
        assert!(controller.page_error().is_empty());
    }
}
