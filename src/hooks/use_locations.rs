use yew::prelude::*;

use crate::services::ApiClient;

/// Location filter options, fetched once on mount
#[hook]
pub fn use_locations() -> Vec<String> {
    let locations = use_state(Vec::<String>::new);

    {
        let locations = locations.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().get_locations().await {
                    Ok(loaded) => {
                        log::info!("📍 {} locations loaded", loaded.len());
                        locations.set(loaded);
                    }
                    Err(e) => log::error!("❌ Error loading locations: {}", e),
                }
            });
            || ()
        });
    }

    (*locations).clone()
}
