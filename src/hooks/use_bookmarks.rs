use yew::prelude::*;

use crate::services::ApiClient;
use crate::models::User;
use crate::state::{BookmarkAction, BookmarkSet};

/// Bookmarked ids of `user`. Reloaded whenever the user changes, cleared
/// when there is none.
#[hook]
pub fn use_bookmarks(user: Option<User>) -> UseReducerHandle<BookmarkSet> {
    let bookmarks = use_reducer(BookmarkSet::default);

    {
        let bookmarks = bookmarks.clone();
        use_effect_with(user, move |user| {
            if user.is_some() {
                let bookmarks = bookmarks.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().get_bookmarks().await {
                        Ok(ids) => {
                            log::info!("🔖 {} bookmarks loaded", ids.len());
                            bookmarks.dispatch(BookmarkAction::Replace(ids));
                        }
                        Err(e) => log::error!("❌ Error loading bookmarks: {}", e),
                    }
                });
            } else {
                bookmarks.dispatch(BookmarkAction::Clear);
            }
            || ()
        });
    }

    bookmarks
}
