mod auth;
mod logging;

pub use auth::{
    ARG_EMAIL, ARG_NAME, ARG_PASSWORD, ARG_PHONE, ARG_SURNAME, ARG_TOKEN, CMD_ACTIVATE,
    CMD_LOGIN, CMD_LOGOUT, CMD_REFRESH, CMD_REGISTER,
};
pub use logging::{ARG_VERBOSITY, validator_log_level};

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_USERS: &str = "users";

pub const ARG_API_URL: &str = "api-url";
pub const ARG_ACCESS_TOKEN: &str = "access-token";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("signup")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long("api-url")
                .help("Base URL of the signup API")
                .default_value("http://localhost:3005")
                .env("SIGNUP_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_ACCESS_TOKEN)
                .long("access-token")
                .help("Access token sent as a bearer token")
                .env("SIGNUP_ACCESS_TOKEN")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value("10")
                .env("SIGNUP_TIMEOUT")
                .value_parser(clap::value_parser!(u64).range(1..))
                .global(true),
        )
        .subcommand(auth::register())
        .subcommand(auth::login())
        .subcommand(auth::logout())
        .subcommand(auth::activate())
        .subcommand(auth::refresh())
        .subcommand(Command::new(CMD_USERS).about("List registered users"));

    logging::with_args(command)
}
