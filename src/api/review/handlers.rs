use crate::api::models::*;
use crate::storage::Review;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

/// List every review in insertion order
pub async fn list_reviews_handler(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.reviews.list().await)
}

/// Fetch a single review by id
pub async fn get_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
) -> Result<Json<Review>, AppError> {
    let review = state
        .reviews
        .get(review_id)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json(review))
}

/// Fetch every review for one product
///
/// A product with no reviews yields an empty array, not an error.
pub async fn get_reviews_by_product_handler(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Json<Vec<Review>> {
    Json(state.reviews.list_by_product(product_id).await)
}

/// Create a new review
pub async fn create_review_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    // Unparseable, empty, or mistyped bodies never reach field checks
    let Json(request) = payload.map_err(|_| AppError::InvalidData)?;

    let missing = request.missing_fields();
    let (product_id, review, rating) = match request {
        CreateReviewRequest {
            product_id: Some(product_id),
            review: Some(review),
            rating: Some(rating),
        } => (product_id, review, rating),
        _ => return Err(AppError::MissingFields(missing.join(", "))),
    };

    info!(product_id, rating, "Adding review");

    let created = state.reviews.append(product_id, review, rating).await;

    info!(id = created.id, "Review added");

    Ok((StatusCode::CREATED, Json(created)))
}
