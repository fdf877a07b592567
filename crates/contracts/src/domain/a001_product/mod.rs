pub mod aggregate;

pub use aggregate::{Product, ProductId, Rating, MAX_STARS};
