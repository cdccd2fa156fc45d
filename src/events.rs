//! Delegated click handling
//!
//! One document-level listener per control category, so rows rendered later
//! need no re-binding. Each listener reads the clicked control's data
//! attributes into a `CartIntent`.

use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, MouseEvent};

use crate::api::CartBackend;
use crate::config::Selectors;
use crate::controller::{CartController, CartIntent, Dispatch};
use crate::models::{LineKey, ProductId};
use crate::optimistic::{parse_leading_int, parse_quantity, QuantityStep};
use crate::view::CartView;

/// Nearest ancestor-or-self of the event target matching `selector`
fn closest(ev: &MouseEvent, selector: &str) -> Option<Element> {
    ev.target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

fn data(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
}

fn product_id_from(raw: Option<String>) -> Option<ProductId> {
    raw.filter(|id| !id.is_empty()).map(ProductId::new)
}

/// Intent for an add-to-cart control; `None` without a product id
fn add_intent(
    product_id: Option<String>,
    quantity: Option<String>,
    detail: Option<String>,
) -> Option<CartIntent<'static>> {
    let product_id = product_id_from(product_id)?;
    let quantity = quantity.and_then(|raw| parse_quantity(&raw)).unwrap_or(1);
    Some(CartIntent::Add {
        product_id,
        quantity,
        detail: detail.unwrap_or_default(),
    })
}

/// Line identity from a control's attributes; `None` without a product id
fn line_key_from(
    product_id: Option<String>,
    detail: Option<String>,
    sale_type: Option<String>,
) -> Option<LineKey> {
    let product_id = product_id_from(product_id)?;
    let sale_type = sale_type
        .and_then(|raw| parse_leading_int(&raw))
        .and_then(|v| u32::try_from(v).ok());
    Some(LineKey::new(product_id, detail.unwrap_or_default(), sale_type))
}

fn line_key(el: &Element) -> Option<LineKey> {
    line_key_from(data(el, "product-id"), data(el, "detail"), data(el, "sale-type"))
}

fn run<B, V>(ctl: &Rc<CartController<B, V>>, ev: &MouseEvent, intent: CartIntent<'_>)
where
    B: CartBackend + 'static,
    V: CartView + 'static,
{
    if let Dispatch::Handled(command) = ctl.dispatch(intent) {
        ev.prevent_default();
        if let Some(command) = command {
            let ctl = Rc::clone(ctl);
            spawn_local(async move { ctl.execute(command).await });
        }
    }
}

fn listen(handler: impl FnMut(MouseEvent) + 'static) {
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}

/// Attach the cart click listeners to the document
pub fn bind_cart_events<B, V>(ctl: Rc<CartController<B, V>>, selectors: Selectors)
where
    B: CartBackend + 'static,
    V: CartView + 'static,
{
    let selectors = Rc::new(selectors);

    // Add to cart
    {
        let ctl = Rc::clone(&ctl);
        let sel = Rc::clone(&selectors);
        listen(move |ev| {
            let Some(btn) = closest(&ev, &sel.add_button) else { return };
            let Some(intent) = add_intent(data(&btn, "product-id"), data(&btn, "quantity"), data(&btn, "detail"))
            else {
                log::warn!("[EVENTS] add-to-cart control without product id");
                return;
            };
            run(&ctl, &ev, intent);
        });
    }

    // Quantity steps
    {
        let ctl = Rc::clone(&ctl);
        let sel = Rc::clone(&selectors);
        listen(move |ev| {
            let (btn, step) = if let Some(btn) = closest(&ev, &sel.increment) {
                (btn, QuantityStep::Increment)
            } else if let Some(btn) = closest(&ev, &sel.decrement) {
                (btn, QuantityStep::Decrement)
            } else {
                return;
            };
            let Some(input) = btn
                .closest(&sel.quantity_group)
                .ok()
                .flatten()
                .and_then(|group| group.query_selector(&sel.quantity_input).ok().flatten())
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(key) = line_key(&input) else { return };
            run(&ctl, &ev, CartIntent::Step { key, step, field: &input });
        });
    }

    // Remove
    {
        let ctl = Rc::clone(&ctl);
        let sel = Rc::clone(&selectors);
        listen(move |ev| {
            let Some(btn) = closest(&ev, &sel.remove_button) else { return };
            let Some(key) = line_key(&btn) else {
                log::warn!("[EVENTS] remove control without product id");
                return;
            };
            run(&ctl, &ev, CartIntent::Remove(key));
        });
    }

    // Clear
    {
        let sel = Rc::clone(&selectors);
        listen(move |ev| {
            if closest(&ev, &sel.clear_button).is_some() {
                run(&ctl, &ev, CartIntent::Clear);
            }
        });
    }

    log::debug!("[EVENTS] cart listeners bound");
}
