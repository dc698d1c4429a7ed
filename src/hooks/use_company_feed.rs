// ============================================================================
// USE COMPANY FEED - search results with cursor pagination
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::ApiClient;
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{FeedAction, FeedState, PageRequest, RequestLatch, SearchFilters};

pub struct UseCompanyFeedHandle {
    pub feed: UseReducerHandle<FeedState>,
    /// Requests the next page; no-op while loading or once exhausted
    pub load_more: Callback<()>,
}

#[hook]
pub fn use_company_feed(filters: SearchFilters) -> UseCompanyFeedHandle {
    let feed = use_reducer(FeedState::default);
    let generation = use_mut_ref(|| 0u64);
    let latch = use_mut_ref(RequestLatch::default);

    // New filters: reset, then fetch the first page
    {
        let feed = feed.clone();
        use_effect_with(filters, move |filters| {
            let next = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            log::info!("🔍 New search {:?} / {:?}", filters.search, filters.location);

            feed.dispatch(FeedAction::Reset {
                filters: filters.clone(),
                generation: next,
            });
            fetch_page(feed.clone(), FeedState::reset_request(filters, next, CONFIG.page_size), None);
            || ()
        });
    }

    let load_more = {
        let feed = feed.clone();
        Callback::from(move |_| {
            let Some(request) = feed.next_page_request(CONFIG.page_size) else {
                log::debug!("⏸️ Nothing more to load");
                return;
            };
            if !latch.borrow_mut().try_claim(&request) {
                log::debug!("⏸️ Page {:?} already requested", request.query.cursor);
                return;
            }
            log::info!("📄 Loading next page (cursor {:?})", request.query.cursor);
            feed.dispatch(FeedAction::PageRequested);
            fetch_page(feed.clone(), request, Some(latch.clone()));
        })
    };

    UseCompanyFeedHandle { feed, load_more }
}

fn fetch_page(
    feed: UseReducerHandle<FeedState>,
    request: PageRequest,
    latch: Option<Rc<RefCell<RequestLatch>>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match ApiClient::new().search_companies(&request.query).await {
            Ok(response) => feed.dispatch(request.loaded(response)),
            Err(e) => {
                log::error!("❌ Error fetching companies: {}", e);
                if let Some(latch) = latch {
                    latch.borrow_mut().release(&request);
                }
                feed.dispatch(request.failed());
            }
        }
    });
}
