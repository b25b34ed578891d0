pub mod memory;

pub use memory::{Review, ReviewStore};
