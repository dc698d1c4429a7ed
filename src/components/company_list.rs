use yew::prelude::*;

use crate::components::company_card::CompanyCard;
use crate::models::Company;
use crate::state::BookmarkSet;

#[derive(Properties, PartialEq, Clone)]
pub struct CompanyListProps {
    pub companies: Vec<Company>,
    pub bookmarks: BookmarkSet,
    pub loading: bool,
    pub show_end_message: bool,
    pub show_empty_message: bool,
    /// Given to the last card only
    pub last_card_ref: NodeRef,
    pub on_toggle_bookmark: Callback<(String, bool)>,
}

#[function_component(CompanyList)]
pub fn company_list(props: &CompanyListProps) -> Html {
    let last = props.companies.len().saturating_sub(1);

    html! {
        <div class="company-list">
            { for props.companies.iter().enumerate().map(|(idx, company)| {
                let observe_ref = if idx == last {
                    props.last_card_ref.clone()
                } else {
                    NodeRef::default()
                };
                html! {
                    <CompanyCard
                        key={company.id.clone()}
                        company={company.clone()}
                        bookmarked={props.bookmarks.contains(&company.id)}
                        on_toggle_bookmark={props.on_toggle_bookmark.clone()}
                        observe_ref={observe_ref}
                    />
                }
            }) }

            if props.loading {
                <div class="list-status loading">{"Loading..."}</div>
            }
            if props.show_empty_message {
                <div class="list-status empty">{"No companies found"}</div>
            }
            if props.show_end_message {
                <div class="list-status end">{"You've reached the end"}</div>
            }
        </div>
    }
}
