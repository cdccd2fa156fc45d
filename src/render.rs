//! Cart Rendering
//!
//! Pure mapping from a server snapshot to what the widget shows. Nothing in
//! here touches the DOM.

use crate::config::Messages;
use crate::models::{CartLineItem, CartSnapshot};

/// Counter badge state
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeView {
    pub text: String,
    pub visible: bool,
}

/// One cart row
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub product_id: String,
    pub detail: String,
    pub sale_type: u32,
    pub name: String,
    pub image_url: String,
    pub quantity: u32,
    pub total_price_text: String,
    pub remove_label: String,
}

impl CartRow {
    pub fn from_item(item: &CartLineItem, messages: &Messages, placeholder_image: &str) -> Self {
        Self {
            product_id: item.id.to_string(),
            detail: item.detail.clone(),
            sale_type: item.sale_type_or_default(),
            name: item.name.clone(),
            image_url: item.image_url().unwrap_or(placeholder_image).to_string(),
            quantity: item.quantity,
            total_price_text: price_label(item.total_price, messages),
            remove_label: messages.remove_label.clone(),
        }
    }
}

/// Content of the item list container
#[derive(Debug, Clone, PartialEq)]
pub enum CartListView {
    Empty { message: String },
    Rows(Vec<CartRow>),
}

impl Default for CartListView {
    fn default() -> Self {
        CartListView::Empty { message: String::new() }
    }
}

impl CartListView {
    pub fn from_items(items: &[CartLineItem], messages: &Messages, placeholder_image: &str) -> Self {
        if items.is_empty() {
            return CartListView::Empty {
                message: messages.empty_cart.clone(),
            };
        }
        CartListView::Rows(
            items
                .iter()
                .map(|item| CartRow::from_item(item, messages, placeholder_image))
                .collect(),
        )
    }
}

/// Everything a snapshot changes on the page
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub badge: BadgeView,
    pub item_count_label: String,
    /// `None` leaves the current label text in place
    pub total_price_label: Option<String>,
    /// `None` leaves the current list in place
    pub list: Option<CartListView>,
}

impl SummaryView {
    pub fn from_snapshot(snapshot: &CartSnapshot, messages: &Messages, placeholder_image: &str) -> Self {
        Self {
            badge: BadgeView {
                text: snapshot.cart_count.to_string(),
                visible: snapshot.cart_count > 0,
            },
            item_count_label: format!("({} {})", snapshot.cart_count, messages.items_unit),
            // A zero total keeps the previous label (open product question).
            total_price_label: (snapshot.total_price > 0.0)
                .then(|| price_label(snapshot.total_price, messages)),
            list: snapshot
                .items
                .as_deref()
                .map(|items| CartListView::from_items(items, messages, placeholder_image)),
        }
    }
}

pub fn price_label(amount: f64, messages: &Messages) -> String {
    format!("{} {}", group_thousands(amount), messages.currency)
}

/// Comma-grouped number with at most three fraction digits
pub fn group_thousands(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc();
    let fraction = format!("{:.3}", rounded - whole);
    let fraction = fraction.trim_end_matches('0').trim_end_matches('.');

    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if amount < 0.0 && rounded > 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    // "0.5" -> ".5"
    if let Some(decimals) = fraction.strip_prefix('0') {
        grouped.push_str(decimals);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;

    fn make_item(id: &str, detail: &str, sale_type: Option<u32>, quantity: u32, total: f64) -> CartLineItem {
        CartLineItem {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            image: None,
            detail: detail.to_string(),
            sale_type,
            quantity,
            total_price: total,
            price: None,
            final_price: None,
            key: None,
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(100000.0), "100,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(1234.5), "1,234.5");
        assert_eq!(group_thousands(0.1234), "0.123");
        assert_eq!(group_thousands(-2500.0), "-2,500");
    }

    #[test]
    fn test_summary_for_example_snapshot() {
        let messages = Messages::default();
        let snapshot = CartSnapshot {
            cart_count: 2,
            total_price: 100000.0,
            items: Some(vec![make_item("42", "", Some(1), 2, 100000.0)]),
        };

        let summary = SummaryView::from_snapshot(&snapshot, &messages, "/placeholder.png");

        assert_eq!(summary.badge, BadgeView { text: "2".to_string(), visible: true });
        assert_eq!(summary.item_count_label, "(2 مورد)");
        assert_eq!(summary.total_price_label.as_deref(), Some("100,000 تومان"));
        match summary.list {
            Some(CartListView::Rows(rows)) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].product_id, "42");
                assert_eq!(rows[0].quantity, 2);
                assert_eq!(rows[0].total_price_text, "100,000 تومان");
                assert_eq!(rows[0].image_url, "/placeholder.png");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_cart_summary() {
        let messages = Messages::default();
        let snapshot = CartSnapshot { cart_count: 0, total_price: 0.0, items: Some(vec![]) };

        let summary = SummaryView::from_snapshot(&snapshot, &messages, "/placeholder.png");

        assert!(!summary.badge.visible);
        assert_eq!(summary.badge.text, "0");
        assert_eq!(summary.total_price_label, None);
        assert_eq!(
            summary.list,
            Some(CartListView::Empty { message: "سبد خرید شما خالی است".to_string() })
        );
    }

    #[test]
    fn test_rows_carry_line_identity() {
        let messages = Messages::default();
        let items = vec![
            make_item("5", "red", Some(2), 1, 10.0),
            make_item("5", "blue", None, 3, 30.0),
        ];

        let CartListView::Rows(rows) = CartListView::from_items(&items, &messages, "/p.png") else {
            panic!("expected rows");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].product_id.as_str(), rows[0].detail.as_str(), rows[0].sale_type), ("5", "red", 2));
        assert_eq!((rows[1].product_id.as_str(), rows[1].detail.as_str(), rows[1].sale_type), ("5", "blue", 1));
        assert_eq!(rows[1].remove_label, "حذف");
    }

    #[test]
    fn test_missing_items_leave_list_alone() {
        let snapshot = CartSnapshot { cart_count: 4, total_price: 12.0, items: None };
        let summary = SummaryView::from_snapshot(&snapshot, &Messages::default(), "/p.png");
        assert!(summary.list.is_none());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let messages = Messages::default();
        let snapshot = CartSnapshot {
            cart_count: 1,
            total_price: 5.0,
            items: Some(vec![make_item("1", "", None, 1, 5.0)]),
        };
        assert_eq!(
            SummaryView::from_snapshot(&snapshot, &messages, "/p.png"),
            SummaryView::from_snapshot(&snapshot, &messages, "/p.png")
        );
    }
}
