// ============================================================================
// FEED STATE - paginated search results
// ============================================================================
// IDLE -> LOADING -> IDLE per page. A filter change starts a new generation:
// list and cursor are cleared and any response from an older generation is
// dropped when it lands.
// ============================================================================

use std::rc::Rc;
use yew::functional::Reducible;

use crate::models::{Company, SearchResponse};
use crate::services::SearchQuery;
use super::SearchFilters;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub filters: SearchFilters,
    pub companies: Vec<Company>,
    pub cursor: Option<String>,
    pub has_more: bool,
    pub loading: bool,
    pub generation: u64,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            filters: SearchFilters::default(),
            companies: Vec::new(),
            cursor: None,
            has_more: true,
            loading: false,
            generation: 0,
        }
    }
}

/// A request the feed wants sent, tagged so its response can be matched back
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub reset: bool,
    pub query: SearchQuery,
}

impl PageRequest {
    /// Action to dispatch once the server answered
    pub fn loaded(self, response: SearchResponse) -> FeedAction {
        FeedAction::PageLoaded {
            generation: self.generation,
            reset: self.reset,
            requested_cursor: self.query.cursor,
            response,
        }
    }

    pub fn failed(&self) -> FeedAction {
        FeedAction::PageFailed {
            generation: self.generation,
        }
    }
}

/// Remembers the continuation request already sent, so a second scroll event
/// seen through a stale render snapshot does not send it again
#[derive(Debug, Default)]
pub struct RequestLatch {
    sent: Option<(u64, Option<String>)>,
}

impl RequestLatch {
    /// True when `request` has not been sent yet; marks it as sent
    pub fn try_claim(&mut self, request: &PageRequest) -> bool {
        let key = (request.generation, request.query.cursor.clone());
        if self.sent.as_ref() == Some(&key) {
            return false;
        }
        self.sent = Some(key);
        true
    }

    /// Lets a failed request be sent again
    pub fn release(&mut self, request: &PageRequest) {
        let matches = self
            .sent
            .as_ref()
            .is_some_and(|(generation, cursor)| *generation == request.generation && *cursor == request.query.cursor);
        if matches {
            self.sent = None;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    /// New filters: clear everything and mark the fresh fetch as loading
    Reset {
        filters: SearchFilters,
        generation: u64,
    },
    /// Next page requested for the current filters
    PageRequested,
    PageLoaded {
        generation: u64,
        reset: bool,
        requested_cursor: Option<String>,
        response: SearchResponse,
    },
    PageFailed {
        generation: u64,
    },
}

impl FeedState {
    /// Whether scrolling to the end should fetch another page
    pub fn can_load_more(&self) -> bool {
        !self.loading && self.has_more
    }

    /// First-page request for `filters` under `generation`
    pub fn reset_request(filters: &SearchFilters, generation: u64, limit: u32) -> PageRequest {
        PageRequest {
            generation,
            reset: true,
            query: filters.to_query(limit, None),
        }
    }

    /// Continuation request, `None` when nothing more should be fetched
    pub fn next_page_request(&self, limit: u32) -> Option<PageRequest> {
        if !self.can_load_more() {
            return None;
        }
        Some(PageRequest {
            generation: self.generation,
            reset: false,
            query: self.filters.to_query(limit, self.cursor.clone()),
        })
    }

    pub fn show_end_message(&self) -> bool {
        !self.loading && !self.has_more && !self.companies.is_empty()
    }

    pub fn show_empty_message(&self) -> bool {
        !self.loading && self.companies.is_empty()
    }

    /// Applies `action`, returning false when it was ignored
    pub fn apply(&mut self, action: FeedAction) -> bool {
        match action {
            FeedAction::Reset { filters, generation } => {
                self.filters = filters;
                self.generation = generation;
                self.companies.clear();
                self.cursor = None;
                self.has_more = true;
                self.loading = true;
                true
            }
            FeedAction::PageRequested => {
                if !self.can_load_more() {
                    return false;
                }
                self.loading = true;
                true
            }
            FeedAction::PageLoaded {
                generation,
                reset,
                requested_cursor,
                response,
            } => {
                if generation != self.generation {
                    log::debug!("⏭️ Dropping stale page (generation {} != {})", generation, self.generation);
                    return false;
                }
                if !reset && requested_cursor != self.cursor {
                    log::debug!("⏭️ Dropping page for an already consumed cursor {:?}", requested_cursor);
                    return false;
                }

                if reset {
                    self.companies = response.companies_data;
                } else {
                    self.companies.extend(response.companies_data);
                }
                self.cursor = response.next_cursor;
                self.has_more = response.has_more && self.cursor.is_some();
                self.loading = false;
                true
            }
            FeedAction::PageFailed { generation } => {
                if generation != self.generation {
                    return false;
                }
                self.loading = false;
                true
            }
        }
    }
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u32 = 20;

    fn companies(prefix: &str, range: std::ops::Range<usize>) -> Vec<Company> {
        range
            .map(|i| Company {
                id: format!("{}-{}", prefix, i),
                name: format!("{} {}", prefix, i),
                location: "Paris".to_string(),
                industry: None,
                description: None,
                website: None,
                logo_url: None,
            })
            .collect()
    }

    fn page(items: Vec<Company>, next_cursor: Option<&str>, has_more: bool) -> SearchResponse {
        SearchResponse {
            companies_data: items,
            next_cursor: next_cursor.map(str::to_string),
            has_more,
        }
    }

    /// Feed after a reset to `filters` whose first page has been applied
    fn loaded_feed(filters: SearchFilters, first: SearchResponse) -> FeedState {
        let mut feed = FeedState::default();
        let request = FeedState::reset_request(&filters, 1, LIMIT);
        assert!(feed.apply(FeedAction::Reset { filters, generation: 1 }));
        assert!(feed.apply(request.loaded(first)));
        feed
    }

    fn load_next(feed: &mut FeedState, response: SearchResponse) {
        let request = feed.next_page_request(LIMIT).expect("next page");
        assert!(feed.apply(FeedAction::PageRequested));
        assert!(feed.apply(request.loaded(response)));
    }

    #[test]
    fn initial_state_is_idle_with_more_to_fetch() {
        let feed = FeedState::default();
        assert!(feed.can_load_more());
        assert!(feed.companies.is_empty());
        assert!(!feed.show_end_message());
    }

    #[test]
    fn first_page_then_scroll_appends() {
        let mut feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..20), Some("c1"), true),
        );
        assert_eq!(feed.companies.len(), 20);
        assert!(!feed.show_end_message());

        load_next(&mut feed, page(companies("a", 20..40), Some("c2"), true));
        assert_eq!(feed.companies.len(), 40);
        let ids: Vec<_> = feed.companies.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids[0], "a-0");
        assert_eq!(ids[20], "a-20");
        assert_eq!(ids[39], "a-39");
        assert_eq!(feed.cursor.as_deref(), Some("c2"));
    }

    #[test]
    fn filter_change_resets_list_and_cursor_before_next_request() {
        let mut feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..20), Some("c1"), true),
        );
        load_next(&mut feed, page(companies("a", 20..40), Some("c2"), true));

        let acme = SearchFilters::new("acme", "");
        feed.apply(FeedAction::Reset { filters: acme.clone(), generation: 2 });
        assert!(feed.companies.is_empty());
        assert_eq!(feed.cursor, None);
        assert!(feed.has_more);
        assert!(feed.loading);

        let request = FeedState::reset_request(&acme, 2, LIMIT);
        assert_eq!(request.query.cursor, None);
        assert_eq!(request.query.search, "acme");
        feed.apply(request.loaded(page(companies("acme", 0..3), None, false)));

        assert_eq!(feed.companies.len(), 3);
        assert!(feed.companies.iter().all(|c| c.id.starts_with("acme-")));
        assert!(feed.show_end_message());
    }

    #[test]
    fn exhausted_feed_does_not_request_more() {
        let mut feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..5), None, false),
        );
        assert!(!feed.has_more);
        assert_eq!(feed.next_page_request(LIMIT), None);
        assert!(!feed.apply(FeedAction::PageRequested));
        assert!(!feed.loading);
    }

    #[test]
    fn missing_cursor_means_no_more_pages() {
        let feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..20), None, true),
        );
        assert!(!feed.has_more);
        assert_eq!(feed.next_page_request(LIMIT), None);
    }

    #[test]
    fn no_second_request_while_loading() {
        let mut feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..20), Some("c1"), true),
        );
        assert!(feed.apply(FeedAction::PageRequested));
        assert_eq!(feed.next_page_request(LIMIT), None);
        assert!(!feed.apply(FeedAction::PageRequested));
    }

    #[test]
    fn duplicate_page_for_same_cursor_is_dropped() {
        let mut feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..20), Some("c1"), true),
        );
        let first = feed.next_page_request(LIMIT).unwrap();
        let second = first.clone();

        feed.apply(FeedAction::PageRequested);
        assert!(feed.apply(first.loaded(page(companies("a", 20..40), Some("c2"), true))));
        assert!(!feed.apply(second.loaded(page(companies("a", 20..40), Some("c2"), true))));
        assert_eq!(feed.companies.len(), 40);
    }

    #[test]
    fn stale_generation_response_is_dropped() {
        let mut feed = FeedState::default();
        let old = FeedState::reset_request(&SearchFilters::new("ac", ""), 1, LIMIT);
        feed.apply(FeedAction::Reset { filters: SearchFilters::new("ac", ""), generation: 1 });

        let new = FeedState::reset_request(&SearchFilters::new("acme", ""), 2, LIMIT);
        feed.apply(FeedAction::Reset { filters: SearchFilters::new("acme", ""), generation: 2 });

        assert!(feed.apply(new.loaded(page(companies("acme", 0..2), None, false))));
        // The slower, older response lands last
        assert!(!feed.apply(old.loaded(page(companies("ac", 0..20), Some("x"), true))));
        assert_eq!(feed.companies.len(), 2);
        assert_eq!(feed.filters.search, "acme");
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..20), Some("c1"), true),
        );
        let request = feed.next_page_request(LIMIT).unwrap();
        feed.apply(FeedAction::PageRequested);
        assert!(feed.apply(request.failed()));

        assert!(!feed.loading);
        assert_eq!(feed.companies.len(), 20);
        assert_eq!(feed.cursor.as_deref(), Some("c1"));
        assert!(feed.can_load_more());
    }

    #[test]
    fn stale_failure_does_not_clear_loading() {
        let mut feed = FeedState::default();
        let old = FeedState::reset_request(&SearchFilters::default(), 1, LIMIT);
        feed.apply(FeedAction::Reset { filters: SearchFilters::default(), generation: 1 });
        feed.apply(FeedAction::Reset { filters: SearchFilters::new("x", ""), generation: 2 });

        assert!(!feed.apply(old.failed()));
        assert!(feed.loading);
    }

    #[test]
    fn reducer_keeps_same_rc_for_ignored_actions() {
        let state = Rc::new(FeedState::default());
        let next = state.clone().reduce(FeedAction::PageFailed { generation: 7 });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn empty_message_only_when_idle() {
        let mut feed = FeedState::default();
        feed.apply(FeedAction::Reset { filters: SearchFilters::default(), generation: 1 });
        assert!(!feed.show_empty_message());

        feed.apply(FeedState::reset_request(&SearchFilters::default(), 1, LIMIT).loaded(page(vec![], None, false)));
        assert!(feed.show_empty_message());
        assert!(!feed.show_end_message());
    }

    #[test]
    fn latch_sends_each_continuation_once() {
        let feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..20), Some("c1"), true),
        );
        // Two scroll events read the same snapshot
        let first = feed.next_page_request(LIMIT).unwrap();
        let second = feed.next_page_request(LIMIT).unwrap();

        let mut latch = RequestLatch::default();
        assert!(latch.try_claim(&first));
        assert!(!latch.try_claim(&second));
    }

    #[test]
    fn latch_allows_retry_after_failure_and_new_cursors() {
        let mut feed = loaded_feed(
            SearchFilters::default(),
            page(companies("a", 0..20), Some("c1"), true),
        );
        let mut latch = RequestLatch::default();

        let request = feed.next_page_request(LIMIT).unwrap();
        assert!(latch.try_claim(&request));
        latch.release(&request);
        assert!(latch.try_claim(&request));

        feed.apply(FeedAction::PageRequested);
        feed.apply(request.loaded(page(companies("a", 20..40), Some("c2"), true)));
        let next = feed.next_page_request(LIMIT).unwrap();
        assert!(latch.try_claim(&next));
    }

    #[test]
    fn latch_is_per_generation() {
        let mut latch = RequestLatch::default();
        let old = PageRequest { generation: 1, reset: false, query: SearchFilters::default().to_query(LIMIT, None) };
        let new = PageRequest { generation: 2, ..old.clone() };
        assert!(latch.try_claim(&old));
        assert!(latch.try_claim(&new));
    }
}
