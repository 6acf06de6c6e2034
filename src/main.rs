//! Election Admin Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod pages;

use app::App;
use election_admin_core::AdminConfig;
use leptos::prelude::*;
use log::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (AdminConfig::default(), Some(err)),
    };
    let level = config.level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    if let Some(err) = problem {
        warn!("ignoring page config, using defaults: {}", err);
    }
    info!("election admin starting, api at '{}'", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
