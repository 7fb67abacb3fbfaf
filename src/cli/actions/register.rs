//! `signup register`: submits the registration form once and prints either
//! the confirmation or every visible field error plus the page banner.

use crate::cli::globals::GlobalArgs;
use anyhow::{Result, bail};
use signup_client::AuthService;
use signup_core::{Field, FormValues, PageError, RegistrationController, RegistrationForm};
use std::fmt::Write as _;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub values: FormValues,
}

/// # Errors
/// Returns an error if the client cannot be built or the registration was not accepted.
pub async fn execute(args: Args) -> Result<()> {
    let auth = AuthService::new(args.globals.http_client()?);
    let mut controller =
        RegistrationController::with_form(auth, RegistrationForm::with_values(args.values));

    let state = controller.submit().await;
    info!(state = ?state, "registration finished");

    println!("{}", render(controller.form(), controller.page_error()));

    if !controller.is_registered() {
        bail!("registration was not completed");
    }

    Ok(())
}

/// Text rendering of the form after a submission attempt.
#[must_use]
pub fn render(form: &RegistrationForm, banner: &PageError) -> String {
    if form.is_registered() {
        return "Check your email\nWe have sent you an email with the activation link".to_string();
    }

    let mut out = String::from("Sign up");
    for field in Field::ALL {
        if let Some(message) = form.visible_error(field) {
            let _ = write!(out, "\n  {}: {message}", field.label());
        }
    }
    if let Some(message) = banner.message() {
        let _ = write!(out, "\n{message}");
    }
    out.push_str("\nAlready have an account? Log in with `signup login`.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use signup_core::{ApiError, SubmissionState};
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn valid_values() -> FormValues {
        FormValues {
            email: "jane@doe.io".to_string(),
            password: "abcdef".to_string(),
            name: "Jane".to_string(),
            surname: "Doe".to_string(),
            phone: "+15550001".to_string(),
        }
    }

    #[test]
    fn render_lists_visible_errors_and_login_hint() {
        let mut form = RegistrationForm::with_values(FormValues {
            phone: "12-34".to_string(),
            ..valid_values()
        });
        assert_eq!(form.begin_submit(), None);

        let text = render(&form, &PageError::new());
        assert_eq!(
            text,
            "Sign up\n  Phone: Phone is not valid\nAlready have an account? Log in with `signup login`."
        );
    }

    #[test]
    fn render_includes_banner_after_server_failure() {
        let mut form = RegistrationForm::with_values(valid_values());
        let mut banner = PageError::new();
        form.begin_submit();
        form.complete_submit(
            Err(ApiError::http(
                400,
                r#"{"errors": {"email": "taken"}, "message": "Registration failed"}"#,
            )),
            &mut banner,
        );
        assert_eq!(form.state(), SubmissionState::Failed);

        let text = render(&form, &banner);
        assert!(text.contains("  Email: taken"));
        assert!(text.contains("\nRegistration failed\n"));
    }

    #[tokio::test]
    async fn execute_succeeds_when_api_accepts() -> Result<()> {
        if TcpListener::bind("127.0.0.1:0").is_err() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/registration"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        execute(Args {
            globals: GlobalArgs::new(server.uri()),
            values: valid_values(),
        })
        .await
    }

    #[tokio::test]
    async fn execute_fails_on_rejected_registration() -> Result<()> {
        if TcpListener::bind("127.0.0.1:0").is_err() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/registration"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "errors": { "email": "taken" }
            })))
            .mount(&server)
            .await;

        let result = execute(Args {
            globals: GlobalArgs::new(server.uri()),
            values: valid_values(),
        })
        .await;
        assert!(result.is_err());
        Ok(())
    }
}
