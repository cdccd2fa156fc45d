//! DOM-backed cart view
//!
//! Handles are resolved once; a missing region turns its updates into no-ops.

use std::cell::Cell;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::CartView;
use crate::components::{CartItemList, ToastHost};
use crate::config::{CartConfig, Selectors};
use crate::render::{BadgeView, CartListView};
use crate::store::{store_dismiss_toast, store_push_toast, store_set_list, CartDisplay, CartStore, MessageKind};

fn find(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Cart widget regions found on the page
struct CartHandles {
    counter: Option<HtmlElement>,
    counter_number: Option<Element>,
    items_container: Option<HtmlElement>,
    total_price: Option<Element>,
    item_count: Option<Element>,
}

impl CartHandles {
    fn resolve(document: &Document, selectors: &Selectors) -> Self {
        let counter = find(document, &selectors.counter).and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let counter_number = counter
            .as_ref()
            .and_then(|c| c.query_selector(&selectors.counter_number).ok().flatten());
        Self {
            counter,
            counter_number,
            items_container: find(document, &selectors.items_container)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            total_price: find(document, &selectors.total_price),
            item_count: find(document, &selectors.item_count),
        }
    }
}

pub struct DomCartView {
    document: Document,
    handles: CartHandles,
    product_page_marker: String,
    store: CartStore,
    toast_duration_ms: u32,
    /// Set once the list component has taken over the items container
    list_mounted: Cell<bool>,
}

impl DomCartView {
    pub fn resolve(document: Document, config: &CartConfig) -> Self {
        let handles = CartHandles::resolve(&document, &config.selectors);
        log::debug!(
            "[VIEW] handles: counter={} number={} items={} total={} count={}",
            handles.counter.is_some(),
            handles.counter_number.is_some(),
            handles.items_container.is_some(),
            handles.total_price.is_some(),
            handles.item_count.is_some(),
        );

        let store = Store::new(CartDisplay::default());
        if let Some(body) = document.body() {
            leptos::mount::mount_to(body, move || view! { <ToastHost store=store /> }).forget();
        }

        Self {
            document,
            handles,
            product_page_marker: config.selectors.product_page_marker.clone(),
            store,
            toast_duration_ms: config.toast_duration_ms,
            list_mounted: Cell::new(false),
        }
    }

    fn mount_list(&self, container: &HtmlElement) {
        // Server-rendered rows are replaced by the component's output.
        container.set_inner_html("");
        let store = self.store;
        leptos::mount::mount_to(container.clone(), move || view! { <CartItemList store=store /> }).forget();
        self.list_mounted.set(true);
    }
}

impl CartView for DomCartView {
    fn is_product_page(&self) -> bool {
        find(&self.document, &self.product_page_marker).is_some()
    }

    fn show_badge(&self, badge: &BadgeView) {
        let (Some(counter), Some(number)) = (&self.handles.counter, &self.handles.counter_number) else {
            return;
        };
        number.set_text_content(Some(&badge.text));
        let display = if badge.visible { "flex" } else { "none" };
        if let Err(e) = counter.style().set_property("display", display) {
            log::warn!("[VIEW] failed to set badge display: {:?}", e);
        }
    }

    fn show_item_count(&self, label: &str) {
        if let Some(el) = &self.handles.item_count {
            el.set_text_content(Some(label));
        }
    }

    fn show_total_price(&self, label: &str) {
        if let Some(el) = &self.handles.total_price {
            el.set_text_content(Some(label));
        }
    }

    fn show_items(&self, list: CartListView) {
        let Some(container) = &self.handles.items_container else {
            return;
        };
        store_set_list(&self.store, list);
        if !self.list_mounted.get() {
            self.mount_list(container);
        }
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        let id = store_push_toast(&self.store, text, kind);
        let store = self.store;
        Timeout::new(self.toast_duration_ms, move || store_dismiss_toast(&store, id)).forget();
    }
}
