//! Homepage and single post views.

use dioxus::prelude::*;
use quire_api::models::Post;

use super::layout::{document, Chrome, Footer, Head, Masthead};

const STYLESHEET: &str = "/styles.css";
const DATE_FORMAT: &str = "%B %-d, %Y";

/// Teaser on the homepage.
#[component]
fn PostCard(post: Post) -> Element {
    let date = post.date.format(DATE_FORMAT).to_string();

    rsx! {
        article { class: "post-card",
            a { href: "/{post.slug}",
                img { src: "/images/{post.image}", alt: "{post.title}" }
            }
            h2 {
                a { href: "/{post.slug}", "{post.title}" }
            }
            p { class: "meta", "{date} · {post.author}" }
            p { class: "excerpt", "{post.excerpt}" }
            a { class: "read-more", href: "/{post.slug}", "Continue reading" }
        }
    }
}

pub(crate) fn index(chrome: &Chrome, posts: &[Post]) -> String {
    let site_title = chrome.site_title.clone();
    let empty = posts.is_empty();
    let posts = posts.to_vec();

    let body = rsx! {
        Masthead { site_title: site_title.clone(), logged_in: chrome.logged_in }
        main { class: "posts",
            if empty {
                section { class: "empty",
                    h1 { "No Posts Found :(" }
                    p { "Sorry, We couldn't find any posts." }
                }
            }
            for post in posts {
                PostCard { key: "{post.id}", post }
            }
        }
        Footer { site_title: site_title.clone() }
    };

    document(
        Head {
            title: &site_title,
            stylesheet: STYLESHEET,
            noindex: chrome.noindex,
            refresh: None,
        },
        body,
    )
}

pub(crate) fn post(chrome: &Chrome, post: &Post) -> String {
    let site_title = chrome.site_title.clone();
    let date = post.date.format(DATE_FORMAT).to_string();
    let page_title = format!("{} | {}", post.title, site_title);

    let body = rsx! {
        Masthead { site_title: site_title.clone(), logged_in: chrome.logged_in }
        main { class: "post",
            article {
                h1 { "{post.title}" }
                p { class: "meta", "{date} · {post.author}" }
                img { class: "hero", src: "/images/{post.image}", alt: "{post.title}" }
                div { class: "content", dangerous_inner_html: "{post.content}" }
            }
        }
        Footer { site_title: site_title.clone() }
    };

    document(
        Head {
            title: &page_title,
            stylesheet: STYLESHEET,
            noindex: chrome.noindex,
            refresh: None,
        },
        body,
    )
}
