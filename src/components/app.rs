use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{
    use_bookmarks, use_company_feed, use_debounce, use_infinite_scroll, use_locations, use_session,
    SessionProvider,
};
use crate::state::{gate_toggle, SearchFilters, ToggleOutcome};
use super::{BookmarksPage, CompanyList, Header, LoginDialog, Page, SearchBar};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <Finder />
        </SessionProvider>
    }
}

#[function_component(Finder)]
fn finder() -> Html {
    let session = use_session();

    // Filter inputs
    let search_text = use_state(String::new);
    let location = use_state(String::new);

    // View state
    let page = use_state(|| Page::Results);
    let show_login = use_state(|| false);

    let debounced_search = use_debounce((*search_text).clone(), CONFIG.search_debounce_ms);
    let filters = SearchFilters::new(debounced_search, (*location).clone());

    let feed = use_company_feed(filters);
    let locations = use_locations();
    let bookmarks = use_bookmarks(session.user.clone());
    let last_card_ref = use_node_ref();

    // Infinite scroll on the last card, results page only
    {
        let state = &*feed.feed;
        use_infinite_scroll(
            last_card_ref.clone(),
            *page == Page::Results && state.can_load_more(),
            (
                state.loading,
                state.has_more,
                state.cursor.clone(),
                state.filters.clone(),
                state.companies.len(),
            ),
            feed.load_more.clone(),
        );
    }

    let on_search = {
        let search_text = search_text.clone();
        Callback::from(move |value: String| search_text.set(value))
    };

    let on_location = {
        let location = location.clone();
        Callback::from(move |value: String| {
            log::info!("📍 Location filter: {:?}", value);
            location.set(value);
        })
    };

    let on_toggle_bookmark = {
        let session = session.clone();
        let bookmarks = bookmarks.clone();
        let show_login = show_login.clone();
        Callback::from(move |(id, bookmarked): (String, bool)| {
            match gate_toggle(&session, &id, bookmarked) {
                ToggleOutcome::SessionPending => {
                    log::debug!("⏳ Session check still running, ignoring bookmark click");
                }
                ToggleOutcome::LoginRequired => {
                    log::info!("🔒 Bookmark needs login");
                    show_login.set(true);
                }
                ToggleOutcome::Apply(action) => {
                    log::info!("🔖 {} {}", if bookmarked { "Bookmarked" } else { "Unbookmarked" }, id);
                    bookmarks.dispatch(action);
                }
            }
        })
    };

    let on_show_bookmarks = {
        let page = page.clone();
        let show_login = show_login.clone();
        let session = session.clone();
        Callback::from(move |_| {
            if session.is_logged_in() {
                page.set(Page::Bookmarks);
            } else if session.checked {
                show_login.set(true);
            }
        })
    };

    let on_show_results = {
        let page = page.clone();
        Callback::from(move |_| page.set(Page::Results))
    };

    let on_close_login = {
        let show_login = show_login.clone();
        Callback::from(move |_| show_login.set(false))
    };

    // Same source as the bookmarks page so both counts agree
    let bookmark_count = bookmarks.filter(&feed.feed.companies).len();

    // The bookmarks page only exists for a session user
    let current_page = if session.is_logged_in() { *page } else { Page::Results };

    html! {
        <div class="app">
            <Header
                user={session.user.clone()}
                page={current_page}
                bookmark_count={bookmark_count}
                on_show_bookmarks={on_show_bookmarks}
                on_show_results={on_show_results.clone()}
            />
            <main class="app-main">
                {
                    match current_page {
                        Page::Bookmarks => html! {
                            <BookmarksPage
                                companies={feed.feed.companies.clone()}
                                bookmarks={(*bookmarks).clone()}
                                on_toggle_bookmark={on_toggle_bookmark.clone()}
                                on_back={on_show_results}
                            />
                        },
                        Page::Results => html! {
                            <>
                                <SearchBar
                                    search={(*search_text).clone()}
                                    location={(*location).clone()}
                                    locations={locations}
                                    on_search={on_search}
                                    on_location={on_location}
                                />
                                <CompanyList
                                    companies={feed.feed.companies.clone()}
                                    bookmarks={(*bookmarks).clone()}
                                    loading={feed.feed.loading}
                                    show_end_message={feed.feed.show_end_message()}
                                    show_empty_message={feed.feed.show_empty_message()}
                                    last_card_ref={last_card_ref}
                                    on_toggle_bookmark={on_toggle_bookmark}
                                />
                            </>
                        },
                    }
                }
            </main>
            <LoginDialog
                open={*show_login}
                login_url={CONFIG.login_url()}
                on_close={on_close_login}
            />
        </div>
    }
}
