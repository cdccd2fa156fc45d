//! Cart Item List Component
//!
//! Rebuilds the whole list whenever the store's list changes. Every control
//! carries the row's identity as data attributes for the delegated click
//! handlers.

use leptos::prelude::*;

use crate::render::{CartListView, CartRow};
use crate::store::{store_list, CartStore};

const PLUS_ICON: &str = r##"<use href="#plus"></use>"##;
const MINUS_ICON: &str = r##"<use href="#minus"></use>"##;
const BAG_ICON: &str = r##"<use href="#shopping-bag"></use>"##;

#[component]
pub fn CartItemList(store: CartStore) -> impl IntoView {
    move || match store_list(&store) {
        CartListView::Empty { message } => view! { <EmptyCart message=message /> }.into_any(),
        CartListView::Rows(rows) => rows
            .into_iter()
            .map(|row| view! { <CartItemRow row=row /> })
            .collect_view()
            .into_any(),
    }
}

#[component]
pub fn EmptyCart(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="py-8 text-center text-gray-500">
            <svg class="w-16 h-16 mx-auto mb-4 text-gray-300" inner_html=BAG_ICON></svg>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn CartItemRow(row: CartRow) -> impl IntoView {
    let CartRow {
        product_id,
        detail,
        sale_type,
        name,
        image_url,
        quantity,
        total_price_text,
        remove_label,
    } = row;
    let sale_type = sale_type.to_string();

    view! {
        <div
            class="grid grid-cols-12 gap-x-2 w-full py-4 cursor-pointer cart-item"
            data-product-id=product_id.clone()
            data-detail=detail.clone()
            data-sale-type=sale_type.clone()
        >
            <div class="col-span-4 w-24 h-20">
                <img src=image_url class="rounded-lg object-cover w-full h-full" alt=name.clone() />
            </div>
            <div class="col-span-8 flex flex-col justify-between">
                <h2 class="font-DanaMedium line-clamp-2 text-sm">{name}</h2>
                <div class="flex items-center justify-between gap-x-2 mt-2">
                    <button class="w-20 flex items-center justify-between gap-x-1 rounded-lg border border-gray-200 dark:border-white/20 py-1 px-2 quantity-controls">
                        <svg
                            class="size-4 increment text-green-600 cursor-pointer"
                            data-product-id=product_id.clone()
                            data-detail=detail.clone()
                            data-sale-type=sale_type.clone()
                            inner_html=PLUS_ICON
                        ></svg>
                        <input
                            type="number"
                            class="custom-input w-4 mr-2 text-sm text-center"
                            min="1"
                            max="20"
                            value=quantity.to_string()
                            data-product-id=product_id.clone()
                            data-detail=detail.clone()
                            data-sale-type=sale_type.clone()
                            readonly=true
                        />
                        <svg
                            class="size-4 decrement text-red-500 cursor-pointer"
                            data-product-id=product_id.clone()
                            data-detail=detail.clone()
                            data-sale-type=sale_type.clone()
                            inner_html=MINUS_ICON
                        ></svg>
                    </button>
                    <div class="flex flex-col items-end">
                        <p class="text-lg text-blue-500 dark:text-blue-400 font-DanaMedium">
                            {total_price_text}
                        </p>
                        <button
                            class="remove-from-cart text-xs text-red-500 hover:text-red-700 mt-1"
                            data-product-id=product_id.clone()
                            data-detail=detail.clone()
                            data-sale-type=sale_type.clone()
                        >
                            {remove_label}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
