pub mod api_client;
pub mod error;

pub use api_client::{ApiClient, SearchQuery};
pub use error::ApiError;
