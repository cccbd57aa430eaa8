//! The admin dashboard.

use dioxus::prelude::*;
use quire_api::models::{BlogSettings, Post};

use super::layout::{document, Chrome, Head, Masthead};

const STYLESHEET: &str = "/admin.css";

#[component]
fn SettingsSummary(settings: BlogSettings) -> Element {
    let installed = settings.created_on.format("%Y-%m-%d").to_string();
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    let hidden = yes_no(settings.seo_hidden);
    let maintenance = yes_no(settings.maintenance_mode);
    let comments = yes_no(settings.allow_comments);

    rsx! {
        section { class: "summary",
            h2 { "Site" }
            dl {
                dt { "Title" }
                dd { "{settings.title}" }
                dt { "Owner" }
                dd { "{settings.owner}" }
                dt { "Installed" }
                dd { "{installed}" }
                dt { "Hidden from search engines" }
                dd { "{hidden}" }
                dt { "Comments allowed" }
                dd { "{comments}" }
                dt { "Maintenance mode" }
                dd { "{maintenance}" }
            }
        }
    }
}

#[component]
fn PostRow(post: Post) -> Element {
    let date = post.date.format("%Y-%m-%d").to_string();
    let status = post.status.as_str();

    rsx! {
        tr {
            td {
                a { href: "/{post.slug}", "{post.title}" }
            }
            td { "{post.author}" }
            td { "{date}" }
            td { class: "status {status}", "{status}" }
            td { "{post.likes}" }
        }
    }
}

pub(crate) fn dashboard(
    chrome: &Chrome,
    display_name: &str,
    settings: Option<&BlogSettings>,
    posts: &[Post],
) -> String {
    let site_title = chrome.site_title.clone();
    let welcome = format!("Welcome back, {display_name}.");
    let settings = settings.cloned();
    let count = posts.len();
    let posts = posts.to_vec();

    let body = rsx! {
        Masthead { site_title, logged_in: true }
        main { class: "dashboard",
            h1 { "Dashboard" }
            p { class: "lead", "{welcome}" }
            {settings.map(|settings| rsx! { SettingsSummary { settings } })}
            section { class: "posts",
                h2 { "Posts ({count})" }
                table {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Author" }
                            th { "Date" }
                            th { "Status" }
                            th { "Likes" }
                        }
                    }
                    tbody {
                        for post in posts {
                            PostRow { key: "{post.id}", post }
                        }
                    }
                }
            }
        }
    };

    document(
        Head {
            title: "Dashboard",
            stylesheet: STYLESHEET,
            noindex: true,
            refresh: None,
        },
        body,
    )
}
