use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    pub search: String,
    pub location: String,
    pub locations: Vec<String>,
    pub on_search: Callback<String>,
    pub on_location: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let cb = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };

    let on_change = {
        let cb = props.on_location.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit(select.value());
            }
        })
    };

    html! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search companies..."
                value={props.search.clone()}
                oninput={on_input}
            />
            <select class="location-select" onchange={on_change}>
                <option value="" selected={props.location.is_empty()}>{"All locations"}</option>
                { for props.locations.iter().map(|loc| html! {
                    <option key={loc.clone()} value={loc.clone()} selected={*loc == props.location}>
                        {loc.clone()}
                    </option>
                }) }
            </select>
        </div>
    }
}
