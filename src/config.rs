//! Cart Configuration
//!
//! Endpoints, selectors and message strings, with defaults matching the shop
//! templates. A page can override any subset through `window.CART_CONFIG`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Name of the global object a page may define to override defaults
pub const CONFIG_GLOBAL: &str = "CART_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub endpoints: Endpoints,
    pub selectors: Selectors,
    pub messages: Messages,
    pub csrf: CsrfConfig,
    /// Shown for line items without an image
    pub placeholder_image: String,
    /// Lifetime of a notification banner
    pub toast_duration_ms: u32,
    /// Enables debug-level console logging
    pub debug: bool,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            selectors: Selectors::default(),
            messages: Messages::default(),
            csrf: CsrfConfig::default(),
            placeholder_image: "/static/images/placeholder.png".to_string(),
            toast_duration_ms: 3000,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub add: String,
    pub update: String,
    pub remove: String,
    pub clear: String,
    pub summary: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            add: "/order/cart/add/".to_string(),
            update: "/order/cart/update/".to_string(),
            remove: "/order/cart/remove/".to_string(),
            clear: "/order/cart/clear/".to_string(),
            summary: "/order/cart/summary/".to_string(),
        }
    }
}

/// CSS selectors for the widget regions and the role-marked controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub counter: String,
    /// Looked up inside `counter`
    pub counter_number: String,
    pub items_container: String,
    pub total_price: String,
    pub item_count: String,
    /// Present only on product-detail pages, which manage their own cart state
    pub product_page_marker: String,
    pub add_button: String,
    pub increment: String,
    pub decrement: String,
    /// Ancestor shared by a step control and its quantity input
    pub quantity_group: String,
    pub quantity_input: String,
    pub remove_button: String,
    pub clear_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            counter: ".cart-counter".to_string(),
            counter_number: "span.bg-red-500".to_string(),
            items_container: ".cart .divide-y-2".to_string(),
            total_price: ".cart .font-DanaDemiBold".to_string(),
            item_count: ".cart h2 span".to_string(),
            product_page_marker: "#total-price".to_string(),
            add_button: ".add-to-cart-btn".to_string(),
            increment: ".increment".to_string(),
            decrement: ".decrement".to_string(),
            quantity_group: ".flex".to_string(),
            quantity_input: "input[data-product-id]".to_string(),
            remove_button: ".remove-from-cart".to_string(),
            clear_button: ".clear-cart".to_string(),
        }
    }
}

/// User-facing strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub added: String,
    pub add_failed: String,
    pub update_failed: String,
    pub removed: String,
    pub remove_failed: String,
    pub cleared: String,
    pub clear_failed: String,
    pub connection_error: String,
    pub empty_cart: String,
    pub remove_label: String,
    pub currency: String,
    /// Unit word in the item-count label, e.g. `(2 مورد)`
    pub items_unit: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            added: "محصول به سبد خرید اضافه شد".to_string(),
            add_failed: "خطا در اضافه کردن محصول".to_string(),
            update_failed: "خطا در بروزرسانی تعداد".to_string(),
            removed: "محصول از سبد خرید حذف شد".to_string(),
            remove_failed: "خطا در حذف محصول".to_string(),
            cleared: "سبد خرید پاک شد".to_string(),
            clear_failed: "خطا در پاک کردن سبد خرید".to_string(),
            connection_error: "خطا در ارتباط با سرور".to_string(),
            empty_cart: "سبد خرید شما خالی است".to_string(),
            remove_label: "حذف".to_string(),
            currency: "تومان".to_string(),
            items_unit: "مورد".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
    pub cookie_name: String,
    pub meta_name: String,
    pub header: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: "csrftoken".to_string(),
            meta_name: "csrf-token".to_string(),
            header: "X-CSRFToken".to_string(),
        }
    }
}

impl CartConfig {
    /// Decode an override object; `undefined`/`null` yields the defaults
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Read `window.CART_CONFIG`, falling back to defaults when it is absent
    /// or malformed
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        match Self::from_js(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
