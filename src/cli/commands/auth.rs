use clap::{Arg, Command};

pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_ACTIVATE: &str = "activate";
pub const CMD_REFRESH: &str = "refresh";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_NAME: &str = "name";
pub const ARG_SURNAME: &str = "surname";
pub const ARG_PHONE: &str = "phone";
pub const ARG_TOKEN: &str = "token";

fn email() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email address")
        .env("SIGNUP_EMAIL")
        .required(true)
}

fn password() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Account password, at least 6 characters")
        .env("SIGNUP_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create a new account")
        .arg(
            Arg::new(ARG_NAME)
                .long("name")
                .help("First name"),
        )
        .arg(
            Arg::new(ARG_SURNAME)
                .long("surname")
                .help("Last name"),
        )
        .arg(
            Arg::new(ARG_PHONE)
                .long("phone")
                .help("Phone number, digits with an optional leading +"),
        )
        // missing values are reported by the form validators
        .arg(email().required(false))
        .arg(password().required(false))
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Log in and print the session owner")
        .arg(email())
        .arg(password())
}

#[must_use]
pub fn logout() -> Command {
    Command::new(CMD_LOGOUT).about("Invalidate the current session")
}

#[must_use]
pub fn activate() -> Command {
    Command::new(CMD_ACTIVATE)
        .about("Activate an account with the token from the activation email")
        .arg(
            Arg::new(ARG_TOKEN)
                .help("Activation token")
                .required(true),
        )
}

#[must_use]
pub fn refresh() -> Command {
    Command::new(CMD_REFRESH).about("Refresh the access token using the session cookie")
}
