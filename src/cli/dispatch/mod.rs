use crate::cli::{
    actions::{Action, register, session, users},
    commands::{
        ARG_ACCESS_TOKEN, ARG_API_URL, ARG_EMAIL, ARG_NAME, ARG_PASSWORD, ARG_PHONE,
        ARG_SURNAME, ARG_TIMEOUT, ARG_TOKEN, CMD_ACTIVATE, CMD_LOGIN, CMD_LOGOUT, CMD_REFRESH,
        CMD_REGISTER, CMD_USERS,
    },
    globals::GlobalArgs,
};
use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use signup_core::FormValues;
use std::time::Duration;

/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;

    let Some((name, sub_m)) = matches.subcommand() else {
        bail!("missing subcommand");
    };

    let action = match name {
        CMD_REGISTER => Action::Register(register::Args {
            globals,
            values: FormValues {
                email: optional(sub_m, ARG_EMAIL),
                password: optional(sub_m, ARG_PASSWORD),
                name: optional(sub_m, ARG_NAME),
                surname: optional(sub_m, ARG_SURNAME),
                phone: optional(sub_m, ARG_PHONE),
            },
        }),
        CMD_LOGIN => Action::Session(session::Args {
            globals,
            request: session::Request::Login {
                email: required(sub_m, ARG_EMAIL)?,
                password: SecretString::from(required(sub_m, ARG_PASSWORD)?),
            },
        }),
        CMD_LOGOUT => Action::Session(session::Args {
            globals,
            request: session::Request::Logout,
        }),
        CMD_ACTIVATE => Action::Session(session::Args {
            globals,
            request: session::Request::Activate {
                token: required(sub_m, ARG_TOKEN)?,
            },
        }),
        CMD_REFRESH => Action::Session(session::Args {
            globals,
            request: session::Request::Refresh,
        }),
        CMD_USERS => Action::Users(users::Args { globals }),
        other => bail!("unknown subcommand: {other}"),
    };

    Ok(action)
}

fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let api_url = matches
        .get_one::<String>(ARG_API_URL)
        .cloned()
        .context("missing required argument: --api-url")?;

    let mut globals = GlobalArgs::new(api_url);

    if let Some(token) = matches
        .get_one::<String>(ARG_ACCESS_TOKEN)
        .filter(|token| !token.trim().is_empty())
    {
        globals.set_token(SecretString::from(token.trim().to_string()));
    }

    if let Some(seconds) = matches.get_one::<u64>(ARG_TIMEOUT) {
        globals.timeout = Duration::from_secs(*seconds);
    }

    Ok(globals)
}

fn optional(matches: &clap::ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn required(matches: &clap::ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    fn action_from(args: &[&str]) -> Action {
        temp_env::with_vars(
            [
                ("SIGNUP_API_URL", None::<&str>),
                ("SIGNUP_ACCESS_TOKEN", None),
                ("SIGNUP_TIMEOUT", None),
                ("SIGNUP_EMAIL", None),
                ("SIGNUP_PASSWORD", None),
            ],
            || {
                let matches = commands::new().get_matches_from(args.iter().copied());
                handler(&matches).expect("action")
            },
        )
    }

    #[test]
    fn register_collects_form_values() {
        let action = action_from(&["signup", "register", "--name", "Jane", "--phone", "123"]);
        let Action::Register(args) = action else {
            panic!("expected register action");
        };

        assert_eq!(args.values.name, "Jane");
        assert_eq!(args.values.phone, "123");
        assert_eq!(args.values.email, "");
        assert_eq!(args.globals.api_url, "http://localhost:3005");
        assert_eq!(args.globals.timeout, Duration::from_secs(10));
    }

    #[test]
    fn login_keeps_password_secret() {
        let action = action_from(&[
            "signup",
            "--access-token",
            " preset ",
            "login",
            "--email",
            "jane@doe.io",
            "--password",
            "abcdef",
        ]);
        let Action::Session(args) = action else {
            panic!("expected session action");
        };

        assert_eq!(
            args.globals
                .access_token
                .as_ref()
                .map(|token| token.expose_secret().to_string()),
            Some("preset".to_string())
        );
        let session::Request::Login { email, password } = args.request else {
            panic!("expected login request");
        };
        assert_eq!(email, "jane@doe.io");
        assert_eq!(password.expose_secret(), "abcdef");
    }

    #[test]
    fn users_uses_custom_timeout() {
        let action = action_from(&["signup", "-t", "3", "users"]);
        let Action::Users(args) = action else {
            panic!("expected users action");
        };
        assert_eq!(args.globals.timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_access_token_is_ignored() {
        let action = action_from(&["signup", "--access-token", "  ", "refresh"]);
        let Action::Session(args) = action else {
            panic!("expected session action");
        };
        assert!(args.globals.access_token.is_none());
        assert!(matches!(args.request, session::Request::Refresh));
    }
}
