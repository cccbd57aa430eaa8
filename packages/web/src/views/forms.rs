//! The login form and the two setup wizard forms.
//!
//! Forms are re-rendered with the submitted values and per-field errors when
//! validation fails. Passwords are never echoed back.

use dioxus::prelude::*;
use quire_api::db::DatabaseKind;
use quire_api::forms::{DatabaseForm, FormErrors, LoginForm, WelcomeForm};

fn field_error(errors: Option<&FormErrors>, field: &str) -> String {
    errors
        .and_then(|errors| errors.get(field))
        .unwrap_or_default()
        .to_owned()
}

fn field_class(error: &str) -> &'static str {
    if error.is_empty() {
        "field"
    } else {
        "field has-error"
    }
}

/// A labelled `<input>` with its validation message.
#[component]
fn Field(
    label: String,
    name: String,
    kind: String,
    value: String,
    error: String,
    #[props(default)] help: String,
) -> Element {
    let class = field_class(&error);

    rsx! {
        div { class: "{class}",
            label {
                span { class: "label", "{label}" }
                input { r#type: "{kind}", name: "{name}", value: "{value}" }
            }
            if !help.is_empty() {
                small { class: "help", "{help}" }
            }
            if !error.is_empty() {
                span { class: "field-error", "{error}" }
            }
        }
    }
}

pub(crate) fn login(form: &LoginForm, errors: Option<&FormErrors>) -> Element {
    rsx! {
        form { class: "form", method: "post", action: "/login",
            Field {
                label: "Username",
                name: "username",
                kind: "text",
                value: form.username.clone(),
                error: field_error(errors, "username"),
            }
            Field {
                label: "Password",
                name: "password",
                kind: "password",
                value: String::new(),
                error: field_error(errors, "password"),
            }
            button { r#type: "submit", "Log in" }
        }
    }
}

pub(crate) fn database(form: &DatabaseForm, errors: Option<&FormErrors>) -> Element {
    let selected = form.kind.parse::<DatabaseKind>().unwrap_or_default();
    let type_error = field_error(errors, "type");
    let type_class = field_class(&type_error);

    rsx! {
        form { class: "form", method: "post", action: "/setup",
            div { class: "{type_class}",
                label {
                    span { class: "label", "Database Type" }
                    select { name: "type",
                        for kind in DatabaseKind::ALL {
                            if kind == selected {
                                option { value: kind.form_value(), selected: "selected", "{kind}" }
                            } else {
                                option { value: kind.form_value(), "{kind}" }
                            }
                        }
                    }
                }
                if !type_error.is_empty() {
                    span { class: "field-error", "{type_error}" }
                }
            }
            Field {
                label: "Database Name",
                name: "name",
                kind: "text",
                value: form.name.clone(),
                error: field_error(errors, "name"),
                help: "For SQLite, the path of the database file.",
            }
            Field {
                label: "Database User",
                name: "user",
                kind: "text",
                value: form.user.clone(),
                error: field_error(errors, "user"),
            }
            Field {
                label: "Database Password",
                name: "password",
                kind: "password",
                value: String::new(),
                error: field_error(errors, "password"),
            }
            Field {
                label: "Database Host",
                name: "host",
                kind: "text",
                value: form.host.clone(),
                error: field_error(errors, "host"),
            }
            button { r#type: "submit", "Continue" }
        }
    }
}

pub(crate) fn welcome(form: &WelcomeForm, errors: Option<&FormErrors>) -> Element {
    let hide = form.hide_from_search_engines();

    rsx! {
        form { class: "form", method: "post", action: "/setup",
            Field {
                label: "Site Title",
                name: "title",
                kind: "text",
                value: form.title.clone(),
                error: field_error(errors, "title"),
            }
            Field {
                label: "Username",
                name: "username",
                kind: "text",
                value: form.username.clone(),
                error: field_error(errors, "username"),
            }
            Field {
                label: "Password",
                name: "password",
                kind: "password",
                value: String::new(),
                error: field_error(errors, "password"),
            }
            Field {
                label: "Repeat Password",
                name: "confirm",
                kind: "password",
                value: String::new(),
                error: field_error(errors, "confirm"),
            }
            Field {
                label: "Email Address",
                name: "email",
                kind: "email",
                value: form.email.clone(),
                error: field_error(errors, "email"),
            }
            div { class: "field checkbox",
                label {
                    if hide {
                        input { r#type: "checkbox", name: "seo", value: "y", checked: "checked" }
                    } else {
                        input { r#type: "checkbox", name: "seo", value: "y" }
                    }
                    span { class: "label", "Hide website from search engines" }
                }
            }
            button { r#type: "submit", "Install" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: Element) -> String {
        dioxus_ssr::render_element(element)
    }

    #[test]
    fn test_login_form_shows_errors_but_not_password() {
        let form = LoginForm {
            username: "admin".into(),
            password: "secret-value".into(),
        };
        let mut errors = FormErrors::new();
        errors.add("password", "This field is required.");

        let html = render(login(&form, Some(&errors)));
        assert!(html.contains("value=\"admin\""));
        assert!(html.contains("This field is required."));
        assert!(!html.contains("secret-value"));
    }

    #[test]
    fn test_database_form_lists_every_backend() {
        let html = render(database(&DatabaseForm::default(), None));
        assert!(html.contains("SQLite"));
        assert!(html.contains("Postgres"));
        assert!(html.contains("MySQL"));
        assert!(html.contains("value=\"sql\""));
    }

    #[test]
    fn test_welcome_form_keeps_entered_values() {
        let form = WelcomeForm {
            title: "Field Notes".into(),
            email: "admin@example.com".into(),
            seo: Some("y".into()),
            ..Default::default()
        };
        let html = render(welcome(&form, None));
        assert!(html.contains("Field Notes"));
        assert!(html.contains("admin@example.com"));
        assert!(html.contains("checked"));
    }
}
