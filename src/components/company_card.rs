use yew::prelude::*;

use crate::models::Company;

#[derive(Properties, PartialEq, Clone)]
pub struct CompanyCardProps {
    pub company: Company,
    pub bookmarked: bool,
    /// Emits `(company id, new bookmarked state)`
    pub on_toggle_bookmark: Callback<(String, bool)>,
    /// Attached to the card root so the list can observe it
    #[prop_or_default]
    pub observe_ref: NodeRef,
}

#[function_component(CompanyCard)]
pub fn company_card(props: &CompanyCardProps) -> Html {
    let c = &props.company;

    let on_bookmark_click = {
        let cb = props.on_toggle_bookmark.clone();
        let id = c.id.clone();
        let next = !props.bookmarked;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit((id.clone(), next));
        })
    };

    let bookmark_label = if props.bookmarked { "Remove bookmark" } else { "Bookmark" };

    html! {
        <div class={classes!("company-card", props.bookmarked.then_some("bookmarked"))} ref={props.observe_ref.clone()}>
            <div class="company-logo">
                {
                    if let Some(logo) = &c.logo_url {
                        html! { <img src={logo.clone()} alt={c.name.clone()} loading="lazy" /> }
                    } else {
                        html! { <span class="company-initials">{c.initials()}</span> }
                    }
                }
            </div>
            <div class="company-info">
                <div class="company-name">{&c.name}</div>
                if !c.location.is_empty() {
                    <div class="company-location">{"📍 "}{&c.location}</div>
                }
                if let Some(industry) = &c.industry {
                    <div class="company-industry">{industry}</div>
                }
                if let Some(description) = &c.description {
                    <p class="company-description">{description}</p>
                }
                if let Some(website) = &c.website {
                    <a class="company-website" href={website.clone()} target="_blank" rel="noopener noreferrer">
                        {website}
                    </a>
                }
            </div>
            <button
                class={classes!("btn-bookmark", props.bookmarked.then_some("active"))}
                title={bookmark_label}
                aria-label={bookmark_label}
                aria-pressed={props.bookmarked.to_string()}
                onclick={on_bookmark_click}
            >
                { if props.bookmarked { "★" } else { "☆" } }
            </button>
        </div>
    }
}
