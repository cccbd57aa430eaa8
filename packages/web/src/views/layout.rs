//! Document shell shared by every page.

use dioxus::prelude::*;
use quire_api::models::BlogSettings;

const DEFAULT_SITE_TITLE: &str = "Quire";

/// Where to send the browser after a short pause.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Refresh<'a> {
    pub secs: u32,
    pub to: &'a str,
}

impl<'a> Refresh<'a> {
    pub fn after(secs: u32, to: &'a str) -> Self {
        Self { secs, to }
    }
}

/// What every page needs to know about the blog and the visitor.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Chrome {
    pub site_title: String,
    pub noindex: bool,
    pub logged_in: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.into(),
            noindex: false,
            logged_in: false,
        }
    }
}

impl Chrome {
    pub fn new(settings: Option<&BlogSettings>, logged_in: bool) -> Self {
        match settings {
            Some(settings) => Self {
                site_title: settings.title.clone(),
                noindex: settings.seo_hidden,
                logged_in,
            },
            None => Self {
                logged_in,
                ..Self::default()
            },
        }
    }
}

/// Contents of `<head>`.
pub(crate) struct Head<'a> {
    pub title: &'a str,
    pub stylesheet: &'a str,
    pub noindex: bool,
    pub refresh: Option<Refresh<'a>>,
}

/// Render a complete HTML document around `body`.
pub(crate) fn document(head: Head<'_>, body: Element) -> String {
    let title = head.title;
    let stylesheet = head.stylesheet;
    let refresh = head
        .refresh
        .map(|refresh| format!("{};url={}", refresh.secs, refresh.to));

    let head_html = dioxus_ssr::render_element(rsx! {
        meta { charset: "utf-8" }
        meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        if head.noindex {
            meta { name: "robots", content: "noindex, nofollow" }
        }
        {refresh.map(|content| rsx! { meta { http_equiv: "refresh", content: "{content}" } })}
        title { "{title}" }
        link { rel: "stylesheet", href: "{stylesheet}" }
    });
    let body_html = dioxus_ssr::render_element(body);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>{head_html}</head>\n<body>{body_html}</body>\n</html>\n"
    )
}

/// Site header with the navigation links.
#[component]
pub(crate) fn Masthead(site_title: String, logged_in: bool) -> Element {
    rsx! {
        header { class: "masthead",
            a { class: "site-title", href: "/", "{site_title}" }
            nav {
                a { href: "/", "Home" }
                if logged_in {
                    a { href: "/admin", "Dashboard" }
                    a { href: "/logout", "Log out" }
                } else {
                    a { href: "/login", "Log in" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn Footer(site_title: String) -> Element {
    rsx! {
        footer { class: "footer",
            p { "{site_title} · powered by Quire" }
        }
    }
}
