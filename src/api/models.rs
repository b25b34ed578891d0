use crate::storage::ReviewStore;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<ReviewStore>,
}

/// Request to create a new review
///
/// All fields are optional at the type level; which ones are actually
/// present decides between a created review and a missing-fields error.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub product_id: Option<i64>,
    pub review: Option<String>,
    pub rating: Option<f64>,
}

impl CreateReviewRequest {
    /// Names of absent required fields, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.product_id.is_none() {
            missing.push("product_id");
        }
        if self.review.is_none() {
            missing.push("review");
        }
        if self.rating.is_none() {
            missing.push("rating");
        }
        missing
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_reviews: usize,
}

/// Error payload returned to clients
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Review not found")]
    NotFound,

    #[error("Invalid JSON data")]
    InvalidData,

    #[error("Missing fields: {0}")]
    MissingFields(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidData | AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(MessageResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_follow_declaration_order() {
        let request = CreateReviewRequest {
            product_id: None,
            review: None,
            rating: Some(4.0),
        };

        assert_eq!(request.missing_fields(), vec!["product_id", "review"]);
    }

    #[test]
    fn missing_fields_empty_when_all_present() {
        let request = CreateReviewRequest {
            product_id: Some(101),
            review: Some("Bagus.".to_string()),
            rating: Some(4.5),
        };

        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn missing_fields_message_is_comma_joined() {
        let err = AppError::MissingFields("product_id, review".to_string());
        assert_eq!(err.to_string(), "Missing fields: product_id, review");
    }
}
