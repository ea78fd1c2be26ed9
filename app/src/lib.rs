// Search pages, input validation and request handlers
use axum::{Router, routing::get};

pub mod components;
pub mod config;
pub mod error;
pub mod escape;
pub mod home;
pub mod search;
pub mod types;
pub mod validation;

pub use config::AppConfig;
pub use error::StartupError;
pub use types::AppState;
pub use validation::{Rejection, SearchValidator};

/// Builds the application routes.
///
/// `/` serves and accepts the search form, `/search` shows results. Anything
/// else falls through to the 404 page.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page).post(home::submit_search))
        .route("/search", get(search::search_results))
        .fallback(components::error_template::not_found)
        .with_state(state)
}
