//! Results page.
//!
//! This route is reachable directly with any `query` value, so it never
//! relies on the submission-time validator: the value is always escaped with
//! [`escape_html`] before it is placed in the page.

use axum::{
    extract::{Query, rejection::QueryRejection},
    response::Html,
};
use leptos::{
    either::Either,
    html::{a, h1, p, strong},
    prelude::*,
};
use tracing::debug;

use crate::{components::layout, escape::escape_html, types::SearchQuery};

/// Renders the results body for an already escaped query.
///
/// `safe_query` is inserted as markup, so it must come from [`escape_html`].
pub fn component(safe_query: String) -> impl IntoView {
    let summary = if safe_query.is_empty() {
        Either::Left(p().class("hint").child("No search term provided."))
    } else {
        Either::Right(p().child((
            "You searched for: ",
            strong().class("search-term").inner_html(safe_query),
        )))
    };

    (
        h1().child("Search Results"),
        summary,
        p().child(a().href("/").child("New search")),
    )
}

pub async fn search_results(query: Result<Query<SearchQuery>, QueryRejection>) -> Html<String> {
    let query = match query {
        Ok(Query(SearchQuery { query })) => query,
        Err(rejection) => {
            debug!(%rejection, "Search query could not be read");
            String::new()
        }
    };

    layout::render("Search Results", component(escape_html(&query)))
}
