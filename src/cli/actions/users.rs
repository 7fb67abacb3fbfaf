//! `signup users`: prints every registered user, one per line.

use crate::cli::globals::GlobalArgs;
use anyhow::{Result, bail};
use signup_client::UserService;
use signup_core::{PageError, UsersView};
use std::fmt::Write as _;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// # Errors
/// Returns an error if the client cannot be built or the users cannot be fetched.
pub async fn execute(args: Args) -> Result<()> {
    let service = UserService::new(args.globals.http_client()?);
    let mut banner = PageError::new();

    let view = UsersView::load(&service, &mut banner).await;
    if let Some(message) = banner.message() {
        bail!("{message}");
    }

    println!("{}", render(&view));
    Ok(())
}

#[must_use]
pub fn render(view: &UsersView) -> String {
    let mut out = String::from("Here you can see all users");
    for user in view.users() {
        let _ = write!(
            out,
            "\nE-mail: {} | Name: {} | Surname: {} | Phone: {}",
            user.email, user.name, user.surname, user.phone
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn users_are_rendered_one_per_line() -> Result<()> {
        if TcpListener::bind("127.0.0.1:0").is_err() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "email": "jane@doe.io", "name": "Jane", "surname": "Doe", "phone": "+1" },
                { "id": 2, "email": "john@doe.io", "name": "John", "surname": "Roe", "phone": "+2" }
            ])))
            .mount(&server)
            .await;

        let service = UserService::new(GlobalArgs::new(server.uri()).http_client()?);
        let mut banner = PageError::new();
        let view = UsersView::load(&service, &mut banner).await;

        assert_eq!(
            render(&view),
            "Here you can see all users\n\
             E-mail: jane@doe.io | Name: Jane | Surname: Doe | Phone: +1\n\
             E-mail: john@doe.io | Name: John | Surname: Roe | Phone: +2"
        );
        Ok(())
    }

    #[tokio::test]
    async fn unauthorized_listing_fails() -> Result<()> {
        if TcpListener::bind("127.0.0.1:0").is_err() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = execute(Args {
            globals: GlobalArgs::new(server.uri()),
        })
        .await;

        assert_eq!(
            result.err().map(|err| err.to_string()),
            Some("Request failed with status code 401".to_string())
        );
        Ok(())
    }
}
