#![allow(warnings)]
//! iCap Manager Frontend Entry Point

mod models;
mod controller;
mod config;
mod context;
mod error;
mod format;
mod i18n;
mod logging;
mod notify;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = logging::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[app] logger not installed: {}", err).into());
    }
    let config = AppConfig::load();
    logging::set_level(config.level_filter());
    log::info!("[app] starting, language={}", config.default_language.code());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
