pub mod session_context;
pub mod use_auth;
pub mod use_bookmarks;
pub mod use_company_feed;
pub mod use_debounce;
pub mod use_infinite_scroll;
pub mod use_locations;

pub use session_context::{use_session, SessionProvider};
pub use use_auth::use_auth;
pub use use_bookmarks::use_bookmarks;
pub use use_company_feed::{use_company_feed, UseCompanyFeedHandle};
pub use use_debounce::use_debounce;
pub use use_infinite_scroll::use_infinite_scroll;
pub use use_locations::use_locations;
