// src/server/error.rs
//! Mapping of store errors onto HTTP responses

use crate::error::Error;
use crate::recipe::REQUIRED_FIELDS;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Message for a lookup or update on an unknown id
pub const RECIPE_NOT_FOUND: &str = "Recipe not found!";

/// Message for a delete on an unknown id
pub const NO_RECIPE_FOUND: &str = "No recipe found";

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    fn message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            required: None,
            missing: None,
            detail: None,
        }
    }
}

/// Error response for API handlers
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Unknown recipe id
    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody::message(message),
        }
    }

    /// Create payload missing required fields
    pub fn validation(missing: Vec<&'static str>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                required: Some(REQUIRED_FIELDS.to_vec()),
                missing: Some(missing),
                ..ErrorBody::message("Recipe creation failed!")
            },
        }
    }

    /// Body that could not be read as a recipe payload
    pub fn bad_request(detail: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                detail: Some(detail.to_string()),
                ..ErrorBody::message("Invalid request body")
            },
        }
    }

    /// Anything the caller cannot fix; the detail is logged, not returned
    pub fn internal(detail: &str) -> Self {
        tracing::error!("Internal error: {}", detail);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody::message("Internal server error"),
        }
    }

    /// Map a store error, using `not_found_message` for unknown ids
    pub fn from_store(err: Error, not_found_message: &str) -> Self {
        match err {
            Error::Validation { missing } => Self::validation(missing),
            Error::NotFound(_) => Self::not_found(not_found_message),
            other => Self::internal(&other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::from_store(err, RECIPE_NOT_FOUND)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(Error::Validation {
            missing: vec!["cost"],
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().message, "Recipe creation failed!");
        assert_eq!(err.body().required.as_ref().unwrap().len(), 5);
        assert_eq!(err.body().missing, Some(vec!["cost"]));
    }

    #[test]
    fn test_not_found_uses_given_message() {
        let err = ApiError::from_store(Error::NotFound(3), NO_RECIPE_FOUND);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body().message, "No recipe found");

        let err = ApiError::from(Error::NotFound(3));
        assert_eq!(err.body().message, "Recipe not found!");
    }

    #[test]
    fn test_storage_failure_hides_detail() {
        let err = ApiError::from(Error::InitError("disk on fire".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().message, "Internal server error");
        assert!(err.body().detail.is_none());
    }

    #[test]
    fn test_error_body_omits_empty_fields() {
        let json = serde_json::to_value(ErrorBody::message("Recipe not found!")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Recipe not found!"}));
    }
}
