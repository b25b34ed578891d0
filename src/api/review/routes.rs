use crate::api::models::AppState;
use crate::api::review::handlers::{
    create_review_handler, get_review_handler, get_reviews_by_product_handler,
    list_reviews_handler,
};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(list_reviews_handler).post(create_review_handler))
        .route("/reviews/{review_id}", get(get_review_handler))
        .route(
            "/reviews/product/{product_id}",
            get(get_reviews_by_product_handler),
        )
}
