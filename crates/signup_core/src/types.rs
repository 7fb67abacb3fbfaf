//! Form fields and the request/response payloads exchanged with the API.
//! Passwords and access tokens travel through these types, so their `Debug`
//! output is redacted and they must never be logged.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Surname,
    Phone,
    Email,
    Password,
}

impl Field {
    /// All fields in the order the form renders them.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Surname,
        Field::Phone,
        Field::Email,
        Field::Password,
    ];

    /// Wire and DOM name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Surname => "Surname",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John",
            Field::Surname => "Smith",
            Field::Phone => "+1 123-456-7890",
            Field::Email => "e.g. bobsmith@gmail.com",
            Field::Password => "*******",
        }
    }

    /// Help text shown under the input while no error is visible.
    #[must_use]
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Field::Name | Field::Surname | Field::Phone => Some("This field is required"),
            Field::Password => Some("At least 6 characters"),
            Field::Email => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Values of the registration form, also the body posted to `/registration`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub email: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Name => &mut self.name,
            Field::Surname => &mut self.surname,
            Field::Phone => &mut self.phone,
        };
        *slot = value.into();
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FormValues")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("phone", &self.phone)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A registered account as listed by `/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub surname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
}

/// Returned by login, activation and refresh.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("user", &self.user)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(value) => value,
        Id::Number(value) => value.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
