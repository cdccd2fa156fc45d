//! Notification stack
//!
//! Each banner is independent; there is no de-duplication or queueing.

use leptos::prelude::*;

use crate::store::{store_toasts, CartStore};

#[component]
pub fn ToastHost(store: CartStore) -> impl IntoView {
    view! {
        <div class="fixed top-4 left-4 z-50 flex flex-col gap-2">
            {move || {
                store_toasts(&store)
                    .into_iter()
                    .map(|toast| {
                        let class = format!("p-4 rounded-lg text-white {}", toast.kind.css_class());
                        view! { <div class=class>{toast.text}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
