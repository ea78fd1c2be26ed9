//! Error pages, with the HTTP status taken from the error itself.

use axum::response::{IntoResponse, Response};
use http::status::StatusCode;
use leptos::{
    html::{a, div, h1},
    prelude::*,
};
use thiserror::Error;

use super::layout;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders the body of an error page.
pub fn component(error: &AppError) -> impl IntoView + use<> {
    let heading = format!("{} | {error}", error.status_code().as_u16());

    div().class("error").child((
        h1().child(heading),
        a().href("/").child("Go back home"),
    ))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), layout::render("Error", component(&self))).into_response()
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
