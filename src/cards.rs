use artfolio_core::PageConfig;
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;

/// Link a click on `card` should follow, or `None` when the click landed on
/// the like control.
pub fn card_destination(card: &Element, clicked: &Element, like_selector: &str) -> Option<String> {
    if matches!(clicked.closest(like_selector), Ok(Some(_))) {
        return None;
    }
    card.query_selector("a").ok()??.get_attribute("href")
}

/// Makes whole artwork cards clickable, except for their like control.
pub fn mount(document: &Document, config: &PageConfig) -> Result<Vec<EventListener>, JsValue> {
    let selector = dom::class_selector(config.classes.artwork_card);
    let cards = dom::elements(&document.query_selector_all(&selector)?);
    if cards.is_empty() {
        console::log!("artwork cards: not on this page");
        return Ok(Vec::new());
    }
    let like_selector = dom::class_selector(config.classes.like_button);
    let listeners = cards
        .into_iter()
        .map(|card| {
            let like_selector = like_selector.clone();
            let target = card.clone();
            EventListener::new(&target, "click", move |event| {
                let Some(clicked) = dom::event_target_element(event) else {
                    return;
                };
                let Some(href) = card_destination(&card, &clicked, &like_selector) else {
                    return;
                };
                let Some(window) = web_sys::window() else {
                    return;
                };
                if let Err(err) = window.location().set_href(&href) {
                    console::warn!("artwork cards: navigation failed", dom::js_err(err));
                }
            })
        })
        .collect();
    Ok(listeners)
}
