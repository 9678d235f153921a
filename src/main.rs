//! Taskboard Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod drafts;
mod filters;
mod format;
mod graphql;
mod hooks;
mod models;
mod pages;
mod session;
mod store;
mod toast;
mod view_state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = rolling_logger::init(config.log_level, config.log_capacity) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("[APP] Starting taskboard-ui {}", env!("CARGO_PKG_VERSION"));

    mount_to_body(move || view! { <App config=config.clone() /> });
}
