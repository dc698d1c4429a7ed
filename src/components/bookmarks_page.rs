use yew::prelude::*;

use crate::components::company_card::CompanyCard;
use crate::models::Company;
use crate::state::BookmarkSet;

#[derive(Properties, PartialEq, Clone)]
pub struct BookmarksPageProps {
    /// Companies loaded so far; only the bookmarked ones are shown
    pub companies: Vec<Company>,
    pub bookmarks: BookmarkSet,
    pub on_toggle_bookmark: Callback<(String, bool)>,
    pub on_back: Callback<()>,
}

#[function_component(BookmarksPage)]
pub fn bookmarks_page(props: &BookmarksPageProps) -> Html {
    let bookmarked = props.bookmarks.filter(&props.companies);

    html! {
        <section class="bookmarks-page">
            <div class="bookmarks-header">
                <button class="btn-back" onclick={props.on_back.reform(|_| ())}>{"← Back to results"}</button>
                <h2>{format!("Bookmarks ({})", bookmarked.len())}</h2>
            </div>
            if bookmarked.is_empty() {
                <div class="list-status empty">{"No bookmarks yet"}</div>
            } else {
                <div class="company-list">
                    { for bookmarked.into_iter().map(|company| html! {
                        <CompanyCard
                            key={company.id.clone()}
                            company={company.clone()}
                            bookmarked={true}
                            on_toggle_bookmark={props.on_toggle_bookmark.clone()}
                        />
                    }) }
                </div>
            }
        </section>
    }
}
