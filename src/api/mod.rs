//! Cart API
//!
//! Request bodies and the backend seam the controller talks through.

pub mod http;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CartResult;
use crate::models::{CartResponse, LineKey, ProductId};

pub use http::HttpCartBackend;

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddToCartArgs {
    pub product_id: ProductId,
    pub quantity: u32,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateQuantityArgs {
    pub product_id: ProductId,
    pub quantity: u32,
    pub detail: String,
    pub sale_type: Option<u32>,
}

impl UpdateQuantityArgs {
    pub fn new(key: &LineKey, quantity: u32) -> Self {
        Self {
            product_id: key.product_id.clone(),
            quantity,
            detail: key.detail.clone(),
            sale_type: key.sale_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveFromCartArgs {
    pub product_id: ProductId,
    pub detail: String,
    pub sale_type: Option<u32>,
}

impl From<&LineKey> for RemoveFromCartArgs {
    fn from(key: &LineKey) -> Self {
        Self {
            product_id: key.product_id.clone(),
            detail: key.detail.clone(),
            sale_type: key.sale_type,
        }
    }
}

// ========================
// Backend
// ========================

/// Remote cart operations.
///
/// `Ok` means the server answered with a JSON envelope, whether or not it
/// accepted the change.
#[async_trait(?Send)]
pub trait CartBackend {
    async fn add(&self, args: &AddToCartArgs) -> CartResult<CartResponse>;

    async fn update(&self, args: &UpdateQuantityArgs) -> CartResult<CartResponse>;

    async fn remove(&self, args: &RemoveFromCartArgs) -> CartResult<CartResponse>;

    async fn clear(&self) -> CartResult<CartResponse>;

    async fn summary(&self) -> CartResult<CartResponse>;
}
