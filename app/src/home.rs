//! This module defines the `home` page, which hosts the search form.
//!
//! A submitted term is trimmed and run through the [`SearchValidator`]. A
//! rejected term re-renders the form with an error notice and is otherwise
//! dropped; an accepted term is passed on, without further changes, to the
//! results page as its `query` parameter.

use std::sync::Arc;

use axum::{
    extract::{RawForm, State, rejection::RawFormRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use leptos::{
    html::{button, div, form, h1, input, label},
    prelude::*,
};
use tracing::{debug, info, warn};

use crate::{
    components::layout,
    types::SearchForm,
    validation::{SearchValidator, trim_term},
};

pub const INVALID_SEARCH_NOTICE: &str =
    "Invalid search term. Please enter a valid search query without special characters.";

/// Renders the search form, optionally preceded by an error notice.
pub fn component(notice: Option<&'static str>) -> impl IntoView {
    (
        h1().child("Search Application"),
        notice.map(|message| {
            div()
                .class("flash flash-error")
                .attr("role", "alert")
                .child(message)
        }),
        form()
            .attr("method", "post")
            .attr("action", "/")
            .child((
                label().child((
                    "Search term ",
                    input()
                        .attr("type", "text")
                        .attr("name", "search_term")
                        .attr("autocomplete", "off"),
                )),
                button().attr("type", "submit").child("Search"),
            )),
    )
}

fn render_home(notice: Option<&'static str>) -> Html<String> {
    layout::render("Search Application", component(notice))
}

/// Location of the results page for an accepted term.
pub fn results_location(search_term: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("query", search_term)
        .finish();
    format!("/search?{query}")
}

pub async fn home_page() -> Html<String> {
    render_home(None)
}

pub async fn submit_search(
    State(validator): State<Arc<SearchValidator>>,
    submission: Result<RawForm, RawFormRejection>,
) -> Response {
    // An unreadable body is handled the same as a missing field.
    let search_term = match submission {
        Ok(RawForm(body)) => SearchForm::from_urlencoded(&body)
            .search_term
            .map(|term| trim_term(&term).to_owned()),
        Err(rejection) => {
            debug!(%rejection, "Search form could not be read");
            None
        }
    };

    match validator.classify(search_term.as_deref()) {
        Ok(()) => {
            let search_term = search_term.unwrap_or_default();
            info!(length = search_term.len(), "Accepted search submission");
            (
                StatusCode::FOUND,
                [(header::LOCATION, results_location(&search_term))],
            )
                .into_response()
        }
        Err(rejection) => {
            warn!(reason = rejection.kind(), %rejection, "Rejected search submission");
            render_home(Some(INVALID_SEARCH_NOTICE)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;

    #[test]
    fn test_results_location_encodes_term() {
        assert_eq!(results_location("test"), "/search?query=test");
        assert_eq!(
            results_location("python programming"),
            "/search?query=python+programming"
        );
        assert_eq!(results_location("c++ & rust"), "/search?query=c%2B%2B+%26+rust");
    }

    #[test]
    fn test_home_page_has_form() {
        let Html(page) = tokio_test::block_on(home_page());
        assert!(page.contains("Search Application"));
        assert!(page.contains("name=\"search_term\""));
        assert!(page.contains("method=\"post\""));
        assert!(page.contains("type=\"submit\""));
        assert!(!page.contains("Invalid search term"));
    }

    #[test]
    fn test_notice_rendered_when_present() {
        let Html(page) = render_home(Some(INVALID_SEARCH_NOTICE));
        assert!(page.contains("Invalid search term"));
        assert!(page.contains("role=\"alert\""));
    }

    #[tokio::test]
    async fn test_submit_valid_term_redirects() {
        let validator = Arc::new(SearchValidator::new().unwrap());
        let form = RawForm(Bytes::from_static(b"search_term=++valid+search++"));

        let response = submit_search(State(validator), Ok(form)).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/search?query=valid+search"
        );
    }

    #[tokio::test]
    async fn test_submit_missing_term_is_rejected() {
        let validator = Arc::new(SearchValidator::new().unwrap());
        let form = RawForm(Bytes::new());

        let response = submit_search(State(validator), Ok(form)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[tokio::test]
    async fn test_submit_repeated_term_uses_first_value() {
        let validator = Arc::new(SearchValidator::new().unwrap());
        let form = RawForm(Bytes::from_static(b"search_term=hello&search_term=world"));

        let response = submit_search(State(validator), Ok(form)).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/search?query=hello"
        );
    }
}
