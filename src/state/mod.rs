// ============================================================================
// STATE - pure UI state, no browser calls except timers
// ============================================================================

pub mod bookmarks;
pub mod debounce;
pub mod feed;
pub mod filters;
pub mod session;

pub use bookmarks::{gate_toggle, BookmarkAction, BookmarkSet, ToggleOutcome};
pub use debounce::{Debouncer, Scheduler, TimeoutScheduler};
pub use feed::{FeedAction, FeedState, PageRequest, RequestLatch};
pub use filters::SearchFilters;
pub use session::Session;
