//! `signup login|logout|activate|refresh`: thin wrappers over the auth
//! endpoints. The access token is printed so it can be exported as
//! `SIGNUP_ACCESS_TOKEN` for later commands.

use crate::cli::globals::GlobalArgs;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use signup_client::AuthService;
use signup_core::{AuthApi, AuthSession, LoginRequest};

#[derive(Debug)]
pub enum Request {
    Login {
        email: String,
        password: SecretString,
    },
    Logout,
    Activate {
        token: String,
    },
    Refresh,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub request: Request,
}

/// # Errors
/// Returns an error if the client cannot be built or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let auth = AuthService::new(args.globals.http_client()?);
    let output = run(&auth, args.request).await?;
    println!("{output}");
    Ok(())
}

/// Performs the request and returns the text to print.
/// # Errors
/// Returns an error if the API call fails.
pub async fn run<A: AuthApi>(auth: &A, request: Request) -> Result<String> {
    match request {
        Request::Login { email, password } => {
            let request = LoginRequest {
                email,
                password: password.expose_secret().to_string(),
            };
            let session = auth.login(&request).await.context("login failed")?;
            Ok(describe("Logged in as", &session))
        }
        Request::Logout => {
            auth.logout().await.context("logout failed")?;
            Ok("Logged out".to_string())
        }
        Request::Activate { token } => {
            let session = auth.activate(&token).await.context("activation failed")?;
            Ok(describe("Account activated for", &session))
        }
        Request::Refresh => {
            let session = auth.refresh().await.context("refresh failed")?;
            Ok(describe("Session refreshed for", &session))
        }
    }
}

fn describe(prefix: &str, session: &AuthSession) -> String {
    format!(
        "{prefix} {}\nSIGNUP_ACCESS_TOKEN={}",
        session.user.email, session.access_token
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::{ApiError, FormValues, RegistrationApi, User};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingAuth {
        calls: RefCell<Vec<String>>,
    }

    fn session() -> AuthSession {
        AuthSession {
            user: User {
                id: "1".to_string(),
                email: "jane@doe.io".to_string(),
                name: "Jane".to_string(),
                surname: "Doe".to_string(),
                phone: "+15550001".to_string(),
            },
            access_token: "access".to_string(),
        }
    }

    impl RegistrationApi for RecordingAuth {
        async fn register(&self, _values: &FormValues) -> Result<(), ApiError> {
            Ok(())
        }
    }

    impl AuthApi for RecordingAuth {
        async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("login:{}:{}", request.email, request.password));
            Ok(session())
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("logout".to_string());
            Err(ApiError::http(500, ""))
        }

        async fn activate(&self, token: &str) -> Result<AuthSession, ApiError> {
            self.calls.borrow_mut().push(format!("activate:{token}"));
            Ok(session())
        }

        async fn refresh(&self) -> Result<AuthSession, ApiError> {
            self.calls.borrow_mut().push("refresh".to_string());
            Ok(session())
        }
    }

    #[tokio::test]
    async fn login_forwards_credentials_and_prints_token() -> Result<()> {
        let auth = RecordingAuth::default();
        let output = run(
            &auth,
            Request::Login {
                email: "jane@doe.io".to_string(),
                password: SecretString::from("abcdef".to_string()),
            },
        )
        .await?;

        assert_eq!(
            output,
            "Logged in as jane@doe.io\nSIGNUP_ACCESS_TOKEN=access"
        );
        assert_eq!(*auth.calls.borrow(), ["login:jane@doe.io:abcdef"]);
        Ok(())
    }

    #[tokio::test]
    async fn activate_and_refresh_describe_the_session() -> Result<()> {
        let auth = RecordingAuth::default();

        let output = run(
            &auth,
            Request::Activate {
                token: "tok".to_string(),
            },
        )
        .await?;
        assert!(output.starts_with("Account activated for jane@doe.io"));

        let output = run(&auth, Request::Refresh).await?;
        assert!(output.starts_with("Session refreshed for jane@doe.io"));
        assert_eq!(*auth.calls.borrow(), ["activate:tok", "refresh"]);
        Ok(())
    }

    #[tokio::test]
    async fn logout_failure_is_reported() {
        let auth = RecordingAuth::default();
        let err = run(&auth, Request::Logout).await.err();
        assert_eq!(
            err.map(|err| err.to_string()),
            Some("logout failed".to_string())
        );
    }
}
