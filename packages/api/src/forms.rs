//! # Form payloads and validation
//!
//! The three forms the site accepts, deserialized from
//! `application/x-www-form-urlencoded` bodies. Every field defaults to empty, so a
//! field missing from the body is reported by [`validate`](LoginForm::validate)
//! instead of failing to decode.
//!
//! | Form | Used by | Rules |
//! |------|---------|-------|
//! | [`LoginForm`] | `POST /login` | username and password required |
//! | [`DatabaseForm`] | `POST /setup`, database step | known database type |
//! | [`SetupSubmission`] | `POST /setup` | split into one of the two below |
//! | [`WelcomeForm`] | `POST /setup`, blog step | title, username, email required; password 5–25 characters, repeated in `confirm`; email shaped like `local@domain.tld`; `seo` checkbox optional |

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::db::{DatabaseConfig, DatabaseKind};

const REQUIRED: &str = "This field is required.";
const PASSWORD_MIN: usize = 5;
const PASSWORD_MAX: usize = 25;

/// Validation failures keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first error per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, REQUIRED);
            false
        } else {
            true
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Admin login form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("username", &self.username);
        errors.require("password", &self.password);
        errors.into_result()
    }
}

/// Blog details collected by the second setup step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WelcomeForm {
    pub title: String,
    pub username: String,
    pub password: String,
    pub confirm: String,
    pub email: String,
    /// Checkbox: present (any value but `false`/`off`) when ticked.
    pub seo: Option<String>,
}

impl WelcomeForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("title", &self.title);
        errors.require("username", &self.username);

        if errors.require("password", &self.password) {
            let len = self.password.chars().count();
            if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
                errors.add(
                    "password",
                    format!("Password needs to be {PASSWORD_MIN}-{PASSWORD_MAX} characters long."),
                );
            } else if self.password != self.confirm {
                errors.add("password", "Passwords must match");
            }
        }

        if errors.require("email", &self.email) && !looks_like_email(self.email.trim()) {
            errors.add("email", "Invalid Email");
        }

        errors.into_result()
    }

    /// Whether the "hide website from search engines" box was ticked.
    pub fn hide_from_search_engines(&self) -> bool {
        match self.seo.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(value) => !matches!(value.to_ascii_lowercase().as_str(), "false" | "off" | "n" | "no"),
        }
    }
}

/// Connection details collected by the first setup step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
}

impl DatabaseForm {
    pub fn validate(&self) -> Result<DatabaseKind, FormErrors> {
        let mut errors = FormErrors::new();
        if errors.require("type", &self.kind) {
            match self.kind.parse::<DatabaseKind>() {
                Ok(kind) => return Ok(kind),
                Err(e) => errors.add("type", e.to_string()),
            }
        }
        Err(errors)
    }

    /// Validate and turn the submission into a `[database]` section.
    pub fn database_config(&self) -> Result<DatabaseConfig, FormErrors> {
        let kind = self.validate()?;
        let defaults = DatabaseConfig::default();
        let name = match self.name.trim() {
            "" => defaults.name,
            name => name.to_string(),
        };

        Ok(DatabaseConfig {
            kind,
            name,
            user: self.user.trim().to_string(),
            password: self.password.clone(),
            host: self.host.trim().to_string(),
            url: String::new(),
        })
    }
}

/// The body of `POST /setup`.
///
/// Both wizard steps post to the same URL, so the body is decoded as the union of
/// their fields and split once the current stage is known. `password` is shared
/// by the two steps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SetupSubmission {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub title: String,
    pub username: String,
    pub confirm: String,
    pub email: String,
    pub seo: Option<String>,
}

impl SetupSubmission {
    pub fn database(&self) -> DatabaseForm {
        DatabaseForm {
            kind: self.kind.clone(),
            name: self.name.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            host: self.host.clone(),
        }
    }

    pub fn welcome(&self) -> WelcomeForm {
        WelcomeForm {
            title: self.title.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            confirm: self.confirm.clone(),
            email: self.email.clone(),
            seo: self.seo.clone(),
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
