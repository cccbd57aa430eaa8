//! Data models for the application.

mod post;
mod settings;
mod user;

pub use post::{NewPost, Post, PostStatus};
pub use settings::{BlogSettings, NewSettings};
pub use user::{NewUser, User};
