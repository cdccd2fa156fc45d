//! Cart Display Store
//!
//! Uses Leptos reactive_stores for the parts of the widget rendered by
//! components: the item list and the notification stack.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::render::CartListView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    /// Background class for the banner
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "bg-green-500",
            MessageKind::Error => "bg-red-500",
            MessageKind::Info => "bg-blue-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Clone, Debug, Default, Store)]
pub struct CartDisplay {
    /// Current item list content
    pub list: CartListView,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

pub type CartStore = Store<CartDisplay>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole item list
pub fn store_set_list(store: &CartStore, list: CartListView) {
    store.list().set(list);
}

/// Read the current item list
pub fn store_list(store: &CartStore) -> CartListView {
    store.list().get()
}

/// Push a notification and return its id
pub fn store_push_toast(store: &CartStore, text: &str, kind: MessageKind) -> u64 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id + 1);
    store.toasts().write().push(Toast {
        id,
        text: text.to_string(),
        kind,
    });
    id
}

/// Remove a notification by id
pub fn store_dismiss_toast(store: &CartStore, id: u64) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Visible notifications
pub fn store_toasts(store: &CartStore) -> Vec<Toast> {
    store.toasts().get()
}
