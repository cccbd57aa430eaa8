//! The plain content page: a header, an optional line of text or error, and an
//! optional block underneath (usually a form).

use dioxus::prelude::*;

use super::layout::{document, Chrome, Footer, Head, Masthead, Refresh};

const STYLESHEET: &str = "/styles.css";

pub(crate) struct Page<'a> {
    chrome: &'a Chrome,
    title: &'a str,
    header: &'a str,
    text: Option<&'a str>,
    error: Option<&'a str>,
    refresh: Option<Refresh<'a>>,
}

impl<'a> Page<'a> {
    pub fn new(chrome: &'a Chrome, title: &'a str, header: &'a str) -> Self {
        Self {
            chrome,
            title,
            header,
            text: None,
            error: None,
            refresh: None,
        }
    }

    pub fn text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn refresh(mut self, secs: u32, to: &'a str) -> Self {
        self.refresh = Some(Refresh::after(secs, to));
        self
    }

    /// Render with `content` below the text.
    pub fn render_with(self, content: Element) -> String {
        let site_title = self.chrome.site_title.clone();
        let header = self.header;
        let text = self.text.map(str::to_owned);
        let error = self.error.map(str::to_owned);

        let body = rsx! {
            Masthead { site_title: site_title.clone(), logged_in: self.chrome.logged_in }
            main { class: "page",
                h1 { "{header}" }
                {text.map(|text| rsx! { p { class: "lead", "{text}" } })}
                {error.map(|error| rsx! { p { class: "error", "{error}" } })}
                {content}
            }
            Footer { site_title }
        };

        document(
            Head {
                title: self.title,
                stylesheet: STYLESHEET,
                noindex: self.chrome.noindex,
                refresh: self.refresh,
            },
            body,
        )
    }

    pub fn render(self) -> String {
        self.render_with(rsx! {})
    }
}

pub(crate) fn not_found(chrome: &Chrome, path: &str) -> String {
    let text = format!("We Can't Seem To Find {path}");
    Page::new(chrome, "404 Error", "404 Error - Page Not Found")
        .text(&text)
        .render()
}

pub(crate) fn maintenance(chrome: &Chrome) -> String {
    Page::new(chrome, "Down For Maintenance", "Down For Maintenance")
        .text("We'll be back shortly.")
        .render()
}

pub(crate) fn server_error() -> String {
    Page::new(&Chrome::default(), "Server Error", "Something Went Wrong")
        .text("The server hit an error while handling your request.")
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_renders_header_and_refresh() {
        let chrome = Chrome::default();
        let html = Page::new(&chrome, "Logging Out", "You have been successfully logged out")
            .refresh(3, "/")
            .render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("You have been successfully logged out"));
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("3;url=/"));
        assert!(!html.contains("noindex"));
    }

    #[test]
    fn test_hidden_site_asks_robots_to_stay_away() {
        let chrome = Chrome {
            noindex: true,
            ..Chrome::default()
        };
        let html = Page::new(&chrome, "Home", "Home").render();
        assert!(html.contains("noindex, nofollow"));
    }

    #[test]
    fn test_error_line_is_rendered() {
        let chrome = Chrome::default();
        let html = Page::new(&chrome, "Login", "Restricted Area - Login Required")
            .error(Some("Login Failed. Please Try Again."))
            .render();
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Login Failed. Please Try Again."));
    }
}
