use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::Session;

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub session: UseStateHandle<Session>,
    pub check_session: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let session = use_state(Session::default);

    let check_session = {
        let session = session.clone();
        Callback::from(move |_| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().check_auth().await {
                    Ok(Some(user)) => {
                        log::info!("✅ Session active: {}", user.display_name());
                        session.set(Session::logged_in(user));
                    }
                    Ok(None) => {
                        log::info!("ℹ️ No active session");
                        session.set(Session::anonymous());
                    }
                    Err(e) => {
                        log::error!("❌ Error checking session: {}", e);
                        session.set(Session::anonymous());
                    }
                }
            });
        })
    };

    UseAuthHandle {
        session,
        check_session,
    }
}
