//! Axum extractors that reject with [`ApiError`](crate::response::ApiError)

mod params;
mod validated;

pub use params::{ApiPath, ApiQuery};
pub use validated::ValidatedJson;
