//! Display seam
//!
//! The controller only talks to the page through `CartView`.

pub mod dom;

use crate::render::{BadgeView, CartListView};
use crate::store::MessageKind;

pub use dom::DomCartView;

/// Regions of the cart widget. Implementations skip regions the page lacks.
pub trait CartView {
    /// True on product-detail pages, whose own controller owns the cart state
    fn is_product_page(&self) -> bool;

    fn show_badge(&self, badge: &BadgeView);

    fn show_item_count(&self, label: &str);

    fn show_total_price(&self, label: &str);

    /// Fully replace the item list
    fn show_items(&self, list: CartListView);

    /// Transient notification banner
    fn show_message(&self, text: &str, kind: MessageKind);
}
