//! Page building blocks shared by every route.
//!
//! `layout` wraps page content in the document skeleton and turns a view into
//! an HTML response; `error_template` renders error pages.

pub mod error_template;
pub mod layout;
