//! Cart Controller
//!
//! Turns click intents into cart calls and keeps the widget in line with the
//! server's snapshot. Calls are not sequenced: concurrent responses are
//! rendered in arrival order.

use crate::api::{AddToCartArgs, CartBackend, RemoveFromCartArgs, UpdateQuantityArgs};
use crate::config::Messages;
use crate::error::CartResult;
use crate::models::{CartOutcome, CartResponse, CartSnapshot, LineKey, ProductId};
use crate::optimistic::{echo_quantity_locally, QuantityField, QuantityStep};
use crate::render::SummaryView;
use crate::store::MessageKind;
use crate::view::CartView;

/// A click on a cart control, already read out of the DOM
pub enum CartIntent<'a> {
    Add {
        product_id: ProductId,
        quantity: u32,
        detail: String,
    },
    Step {
        key: LineKey,
        step: QuantityStep,
        field: &'a dyn QuantityField,
    },
    Remove(LineKey),
    Clear,
}

/// Network work left after an intent's synchronous part ran
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    Add(AddToCartArgs),
    Update { key: LineKey, quantity: u32 },
    Remove(LineKey),
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Not ours; leave the event alone
    Ignored,
    /// Ours; default action should be prevented
    Handled(Option<CartCommand>),
}

/// Fallback texts for one mutating operation
struct Feedback<'a> {
    /// Toast shown on success, if any
    success: Option<&'a str>,
    failure: &'a str,
    /// Prefer the server's `message` over `success`
    server_message_wins: bool,
}

pub struct CartController<B, V> {
    backend: B,
    view: V,
    messages: Messages,
    placeholder_image: String,
}

impl<B: CartBackend, V: CartView> CartController<B, V> {
    pub fn new(backend: B, view: V, messages: Messages, placeholder_image: impl Into<String>) -> Self {
        Self {
            backend,
            view,
            messages,
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Synchronous part of a click: guards and the optimistic echo.
    pub fn dispatch(&self, intent: CartIntent<'_>) -> Dispatch {
        match intent {
            CartIntent::Add { product_id, quantity, detail } => {
                if self.view.is_product_page() {
                    return Dispatch::Ignored;
                }
                Dispatch::Handled(Some(CartCommand::Add(AddToCartArgs {
                    product_id,
                    quantity,
                    detail,
                })))
            }
            CartIntent::Step { key, step, field } => {
                let command = echo_quantity_locally(field, step)
                    .map(|quantity| CartCommand::Update { key, quantity });
                Dispatch::Handled(command)
            }
            CartIntent::Remove(key) => Dispatch::Handled(Some(CartCommand::Remove(key))),
            CartIntent::Clear => Dispatch::Handled(Some(CartCommand::Clear)),
        }
    }

    pub async fn execute(&self, command: CartCommand) {
        match command {
            CartCommand::Add(args) => self.add_to_cart(args.product_id, args.quantity, args.detail).await,
            CartCommand::Update { key, quantity } => self.update_cart_quantity(&key, quantity).await,
            CartCommand::Remove(key) => self.remove_from_cart(&key).await,
            CartCommand::Clear => self.clear_cart().await,
        }
    }

    pub async fn add_to_cart(&self, product_id: ProductId, quantity: u32, detail: String) {
        log::info!("[CART] add product={} qty={} detail={:?}", product_id, quantity, detail);
        let args = AddToCartArgs { product_id, quantity, detail };
        let result = self.backend.add(&args).await;
        self.apply_mutation(
            "add",
            result,
            Feedback {
                success: Some(&self.messages.added),
                failure: &self.messages.add_failed,
                server_message_wins: false,
            },
        );
    }

    pub async fn update_cart_quantity(&self, key: &LineKey, quantity: u32) {
        log::info!("[CART] update product={} qty={}", key.product_id, quantity);
        let result = self.backend.update(&UpdateQuantityArgs::new(key, quantity)).await;
        self.apply_mutation(
            "update",
            result,
            Feedback {
                success: None,
                failure: &self.messages.update_failed,
                server_message_wins: false,
            },
        );
    }

    pub async fn remove_from_cart(&self, key: &LineKey) {
        log::info!("[CART] remove product={} detail={:?}", key.product_id, key.detail);
        let result = self.backend.remove(&RemoveFromCartArgs::from(key)).await;
        self.apply_mutation(
            "remove",
            result,
            Feedback {
                success: Some(&self.messages.removed),
                failure: &self.messages.remove_failed,
                server_message_wins: false,
            },
        );
    }

    pub async fn clear_cart(&self) {
        log::info!("[CART] clear");
        let result = self.backend.clear().await;
        self.apply_mutation(
            "clear",
            result,
            Feedback {
                success: Some(&self.messages.cleared),
                failure: &self.messages.clear_failed,
                server_message_wins: true,
            },
        );
    }

    /// Initial population. Failures are logged only.
    pub async fn load_cart_data(&self) {
        match self.backend.summary().await.map(CartResponse::into_outcome) {
            Ok(CartOutcome::Accepted { snapshot, .. }) => self.render_snapshot(&snapshot),
            Ok(CartOutcome::Rejected { error }) => {
                log::warn!("[CART] summary rejected: {}", error.as_deref().unwrap_or("no reason given"));
            }
            Err(e) => log::error!("[CART] error loading cart data: {}", e),
        }
    }

    /// Render `snapshot`, or fetch one when none is given
    pub async fn update_cart_display(&self, snapshot: Option<&CartSnapshot>) {
        match snapshot {
            Some(snapshot) => self.render_snapshot(snapshot),
            None => self.load_cart_data().await,
        }
    }

    pub fn render_snapshot(&self, snapshot: &CartSnapshot) {
        let summary = SummaryView::from_snapshot(snapshot, &self.messages, &self.placeholder_image);
        self.view.show_badge(&summary.badge);
        self.view.show_item_count(&summary.item_count_label);
        if let Some(label) = &summary.total_price_label {
            self.view.show_total_price(label);
        }
        if let Some(list) = summary.list {
            self.view.show_items(list);
        }
    }

    pub fn show_message(&self, text: &str, kind: MessageKind) {
        self.view.show_message(text, kind);
    }

    fn apply_mutation(&self, op: &str, result: CartResult<CartResponse>, feedback: Feedback<'_>) {
        match result.map(CartResponse::into_outcome) {
            Ok(CartOutcome::Accepted { snapshot, message }) => {
                let toast = if feedback.server_message_wins {
                    message.as_deref().or(feedback.success)
                } else {
                    feedback.success
                };
                if let Some(text) = toast {
                    self.show_message(text, MessageKind::Success);
                }
                self.render_snapshot(&snapshot);
            }
            Ok(CartOutcome::Rejected { error }) => {
                log::warn!("[CART] {} rejected: {:?}", op, error);
                self.show_message(error.as_deref().unwrap_or(feedback.failure), MessageKind::Error);
            }
            Err(e) => {
                log::error!("[CART] error during {}: {}", op, e);
                self.show_message(&self.messages.connection_error, MessageKind::Error);
            }
        }
    }
}
