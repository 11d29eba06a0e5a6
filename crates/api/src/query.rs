//! Shared request body types for API handlers.

use serde::Deserialize;

/// URL-encoded search form (`search_term=...`) posted by both search pages.
///
/// A missing term searches for the empty string, which matches every name.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
