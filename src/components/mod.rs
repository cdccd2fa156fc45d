//! UI Components
//!
//! Leptos components mounted into the server-rendered page.

mod cart_item_list;
mod toast_host;

pub use cart_item_list::CartItemList;
pub use toast_host::ToastHost;
