//! Server-rendered HTML. Each function returns a complete document as a string,
//! built from `rsx!` and rendered with `dioxus-ssr`.

pub(crate) mod admin;
pub(crate) mod forms;
pub(crate) mod layout;
pub(crate) mod pages;
pub(crate) mod posts;

pub(crate) use layout::Chrome;
pub(crate) use pages::Page;
