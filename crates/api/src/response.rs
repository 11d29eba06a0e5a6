//! Shared response envelope types for API handlers.
//!
//! Read endpoints wrap their payload in a `{ "data": ... }` envelope.
//! Create, edit and delete submissions answer with a [`SubmissionResponse`]
//! carrying a flash message for the user, whether or not they succeeded.

use fyyur_db::models::listing::SearchResults;
use serde::Serialize;

use crate::error::{AppError, Failure};

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashCategory {
    Success,
    Error,
}

/// One-shot user-facing notice shown after a submission.
#[derive(Debug, Clone, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

/// Outcome of a create, edit or delete submission.
///
/// Failures are still answered with `200 OK`; the flash and `failure`
/// describe what went wrong.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse<T: Serialize> {
    pub success: bool,
    pub flash: Flash,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> SubmissionResponse<T> {
    pub fn succeeded(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            flash: Flash {
                category: FlashCategory::Success,
                message: message.into(),
            },
            failure: None,
            redirect_to: None,
            data,
        }
    }

    pub fn failed(message: impl Into<String>, err: &AppError) -> Self {
        Self {
            success: false,
            flash: Flash {
                category: FlashCategory::Error,
                message: message.into(),
            },
            failure: Some(err.failure()),
            redirect_to: None,
            data: None,
        }
    }

    /// Point the client at the page to show next.
    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }
}

/// Name search response: the submitted term echoed back plus the hits.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_term: String,
    pub results: SearchResults,
}

#[cfg(test)]
mod tests {
    use fyyur_core::error::CoreError;
    use serde_json::json;

    use super::*;

    #[test]
    fn success_omits_failure() {
        let resp = SubmissionResponse::succeeded(
            "Venue The Musical Hop was successfully listed!",
            Some(1),
        );
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["flash"]["category"], "success");
        assert_eq!(value["data"], 1);
        assert!(value.get("failure").is_none());
        assert!(value.get("redirect_to").is_none());
    }

    #[test]
    fn failure_carries_reason() {
        let err = AppError::from(CoreError::NotFound {
            entity: "Venue",
            id: 9,
        });
        let resp = SubmissionResponse::<()>::failed(
            "An error occurred. Venue 9 could not be deleted.",
            &err,
        )
        .redirect_to("/");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["flash"]["category"], "error");
        assert_eq!(value["failure"]["reason"], "not_found");
        assert_eq!(value["redirect_to"], "/");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn data_envelope() {
        let value = serde_json::to_value(DataResponse { data: vec!["a"] }).unwrap();
        assert_eq!(value, json!({ "data": ["a"] }));
    }
}
