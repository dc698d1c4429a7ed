use yew::prelude::*;

use crate::models::User;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Results,
    Bookmarks,
}

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub user: Option<User>,
    pub page: Page,
    pub bookmark_count: usize,
    pub on_show_bookmarks: Callback<()>,
    pub on_show_results: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_button = match props.page {
        Page::Results => html! {
            <button class="btn-nav" onclick={props.on_show_bookmarks.reform(|_| ())}>
                {format!("★ Bookmarks ({})", props.bookmark_count)}
            </button>
        },
        Page::Bookmarks => html! {
            <button class="btn-nav" onclick={props.on_show_results.reform(|_| ())}>
                {"Back to results"}
            </button>
        },
    };

    html! {
        <header class="app-header">
            <h1 class="app-title">{"Company Finder"}</h1>
            <nav class="app-nav">
                {nav_button}
                if let Some(user) = &props.user {
                    <span class="user-name">{user.display_name()}</span>
                }
            </nav>
        </header>
    }
}
