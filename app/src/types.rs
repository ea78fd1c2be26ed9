use std::sync::Arc;

use axum::extract::FromRef;
use serde::Deserialize;

use crate::{config::AppConfig, error::StartupError, validation::SearchValidator};

#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub validator: Arc<SearchValidator>,
}

impl AppState {
    /// Compiles the validator and wraps both halves for sharing across handlers.
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        Ok(Self {
            config: Arc::new(config),
            validator: Arc::new(SearchValidator::new()?),
        })
    }
}

/// Body of the home page form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub search_term: Option<String>,
}

impl SearchForm {
    /// Reads an urlencoded body. A repeated `search_term` keeps its first value.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let search_term = url::form_urlencoded::parse(body)
            .find(|(key, _)| key == "search_term")
            .map(|(_, value)| value.into_owned());
        Self { search_term }
    }
}

/// Query string of the results page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}
