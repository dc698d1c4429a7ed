// ============================================================================
// SESSION CONTEXT - share the session with every component
// ============================================================================
// The provider is the only writer: it checks the session once on mount and
// publishes the result. Everything below reads it with `use_session()`.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::use_auth;
use crate::state::Session;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let auth = use_auth();

    {
        let check_session = auth.check_session.clone();
        use_effect_with((), move |_| {
            check_session.emit(());
            || ()
        });
    }

    html! {
        <ContextProvider<Session> context={(*auth.session).clone()}>
            {props.children.clone()}
        </ContextProvider<Session>>
    }
}

/// Current session; logged out when used outside a `SessionProvider`
#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_default()
}
