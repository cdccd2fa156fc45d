//! Test doubles for the backend and view seams

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::api::{AddToCartArgs, CartBackend, RemoveFromCartArgs, UpdateQuantityArgs};
use crate::error::{CartError, CartResult};
use crate::models::CartResponse;
use crate::optimistic::QuantityField;
use crate::render::{BadgeView, CartListView, CartRow};
use crate::store::MessageKind;
use crate::view::CartView;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Add(AddToCartArgs),
    Update(UpdateQuantityArgs),
    Remove(RemoveFromCartArgs),
    Clear,
    Summary,
}

/// Replays queued replies and records every call
#[derive(Default)]
pub struct FakeBackend {
    replies: RefCell<VecDeque<CartResult<CartResponse>>>,
    calls: RefCell<Vec<BackendCall>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, reply: CartResult<CartResponse>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    fn answer(&self, call: BackendCall) -> CartResult<CartResponse> {
        self.calls.borrow_mut().push(call);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(CartError::Transport("no reply queued".to_string())))
    }
}

#[async_trait(?Send)]
impl CartBackend for FakeBackend {
    async fn add(&self, args: &AddToCartArgs) -> CartResult<CartResponse> {
        self.answer(BackendCall::Add(args.clone()))
    }

    async fn update(&self, args: &UpdateQuantityArgs) -> CartResult<CartResponse> {
        self.answer(BackendCall::Update(args.clone()))
    }

    async fn remove(&self, args: &RemoveFromCartArgs) -> CartResult<CartResponse> {
        self.answer(BackendCall::Remove(args.clone()))
    }

    async fn clear(&self) -> CartResult<CartResponse> {
        self.answer(BackendCall::Clear)
    }

    async fn summary(&self) -> CartResult<CartResponse> {
        self.answer(BackendCall::Summary)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    Badge(BadgeView),
    ItemCount(String),
    Total(String),
    Items(CartListView),
    Message(String, MessageKind),
}

/// Records view updates in order
#[derive(Default)]
pub struct RecordingView {
    product_page: Cell<bool>,
    ops: RefCell<Vec<ViewOp>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_product_page(&self, value: bool) {
        self.product_page.set(value);
    }

    pub fn ops(&self) -> Vec<ViewOp> {
        self.ops.borrow().clone()
    }

    pub fn messages(&self) -> Vec<(String, MessageKind)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                ViewOp::Message(text, kind) => Some((text.clone(), *kind)),
                _ => None,
            })
            .collect()
    }

    /// Rows of the most recent list render, if it had any
    pub fn last_rows(&self) -> Option<Vec<CartRow>> {
        self.ops.borrow().iter().rev().find_map(|op| match op {
            ViewOp::Items(CartListView::Rows(rows)) => Some(rows.clone()),
            _ => None,
        })
    }
}

impl CartView for RecordingView {
    fn is_product_page(&self) -> bool {
        self.product_page.get()
    }

    fn show_badge(&self, badge: &BadgeView) {
        self.ops.borrow_mut().push(ViewOp::Badge(badge.clone()));
    }

    fn show_item_count(&self, label: &str) {
        self.ops.borrow_mut().push(ViewOp::ItemCount(label.to_string()));
    }

    fn show_total_price(&self, label: &str) {
        self.ops.borrow_mut().push(ViewOp::Total(label.to_string()));
    }

    fn show_items(&self, list: CartListView) {
        self.ops.borrow_mut().push(ViewOp::Items(list));
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        self.ops.borrow_mut().push(ViewOp::Message(text.to_string(), kind));
    }
}

/// In-memory stand-in for the quantity `<input>`
pub struct FakeQuantityField {
    value: RefCell<String>,
    writes: Cell<usize>,
}

impl FakeQuantityField {
    pub fn new(value: &str) -> Self {
        Self {
            value: RefCell::new(value.to_string()),
            writes: Cell::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl QuantityField for FakeQuantityField {
    fn read_raw(&self) -> String {
        self.value.borrow().clone()
    }

    fn write_raw(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
        self.writes.set(self.writes.get() + 1);
    }
}
