//! Shop Cart Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod csrf;
mod error;
mod events;
mod logger;
mod models;
mod optimistic;
mod render;
mod store;
mod view;

#[cfg(test)]
mod testing;

use config::CartConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    // `spawn_local` needs the executor even when nothing gets mounted.
    let _ = any_spawner::Executor::init_wasm_bindgen();

    logger::init(log::LevelFilter::Info);
    let config = CartConfig::from_window();
    log::set_max_level(config.log_level());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        app::start(config);
        return;
    }

    let mut config = Some(config);
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Some(config) = config.take() {
            app::start(config);
        }
    });
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}
