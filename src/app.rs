//! Cart App
//!
//! Composition root: builds the controller and wires it to the page.

use std::rc::Rc;

use leptos::task::spawn_local;

use crate::api::HttpCartBackend;
use crate::config::CartConfig;
use crate::controller::CartController;
use crate::events;
use crate::view::{CartView, DomCartView};

pub fn start(config: CartConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("[APP] no document; cart controller not started");
        return;
    };

    let backend = HttpCartBackend::new(config.endpoints.clone(), config.csrf.clone());
    let view = DomCartView::resolve(document, &config);
    let controller = Rc::new(CartController::new(
        backend,
        view,
        config.messages.clone(),
        config.placeholder_image.clone(),
    ));

    events::bind_cart_events(Rc::clone(&controller), config.selectors.clone());

    if controller.view().is_product_page() {
        log::info!("[APP] product page owns cart state; skipping initial load");
        return;
    }
    spawn_local(async move {
        controller.update_cart_display(None).await;
    });
}
