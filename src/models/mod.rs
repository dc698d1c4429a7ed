pub mod company;
pub mod responses;
pub mod user;

pub use company::Company;
pub use responses::{AuthCheckResponse, BookmarksResponse, LocationsResponse, SearchResponse};
pub use user::User;
