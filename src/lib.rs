// ============================================================================
// COMPANY FINDER - Yew front-end over the company search API
// ============================================================================
// - components: function components (views, no fetching)
// - hooks: state + data fetching wired into Yew
// - state: pure state and reducers, unit-tested natively
// - services: HTTP only
// - models: shapes shared with the API
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;

use crate::components::App;
use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Company Finder starting (API: {})", CONFIG.api_url());

    yew::Renderer::<App>::new().render();
}
