use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

/// A single product review record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub product_id: i64,
    pub review: String,
    pub rating: f64,
}

/// In-memory review collection
///
/// Holds the records in insertion order behind a single lock. Ids are
/// assigned sequentially (max + 1) and never reused.
pub struct ReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl ReviewStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            reviews: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the startup records
    pub fn with_seed_data() -> Self {
        Self {
            reviews: RwLock::new(vec![
                Review {
                    id: 1,
                    product_id: 101,
                    review: "Handphone murah yang bagus.".to_string(),
                    rating: 4.5,
                },
                Review {
                    id: 2,
                    product_id: 101,
                    review: "Baterai awet.".to_string(),
                    rating: 4.0,
                },
                Review {
                    id: 3,
                    product_id: 102,
                    review: "Laptop cepat, recommended.".to_string(),
                    rating: 5.0,
                },
            ]),
        }
    }

    /// All reviews in insertion order
    pub async fn list(&self) -> Vec<Review> {
        self.reviews.read().await.clone()
    }

    /// Look up a review by id
    pub async fn get(&self, id: i64) -> Option<Review> {
        self.reviews
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// All reviews for a product, in insertion order
    pub async fn list_by_product(&self, product_id: i64) -> Vec<Review> {
        self.reviews
            .read()
            .await
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect()
    }

    /// Append a new review, assigning the next id
    ///
    /// Id assignment and the push happen under one write guard, so
    /// concurrent creates cannot hand out the same id.
    pub async fn append(&self, product_id: i64, review: String, rating: f64) -> Review {
        let mut reviews = self.reviews.write().await;

        let new_id = reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        let record = Review {
            id: new_id,
            product_id,
            review,
            rating,
        };
        reviews.push(record.clone());

        info!(id = new_id, total = reviews.len(), "Appended review");

        record
    }

    /// Number of reviews currently held
    pub async fn count(&self) -> usize {
        self.reviews.read().await.len()
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}
