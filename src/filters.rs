use artfolio_core::{DomIds, FilterKey, FilterState, PageConfig};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlSelectElement, KeyboardEvent};

use crate::{dom, runtime};

fn selector(document: &Document, id: &str) -> Option<HtmlSelectElement> {
    dom::by_id::<HtmlSelectElement>(document, id)
}

fn filter_selector(
    document: &Document,
    ids: &DomIds,
    key: FilterKey,
) -> Option<HtmlSelectElement> {
    match key {
        FilterKey::Medium => selector(document, ids.medium_filter),
        FilterKey::Year => selector(document, ids.year_filter),
    }
}

/// Filter state as currently shown by the selectors.
pub fn read_selectors(document: &Document, ids: &DomIds) -> FilterState {
    let value = |key| {
        filter_selector(document, ids, key)
            .map(|select| select.value())
            .unwrap_or_default()
    };
    FilterState::from_values(&value(FilterKey::Medium), &value(FilterKey::Year))
}

/// Selects the options matching the active filters. Inactive filters leave
/// their selector untouched.
pub fn preselect(document: &Document, ids: &DomIds, state: &FilterState) {
    for key in FilterKey::ALL {
        let (Some(value), Some(select)) = (state.get(key), filter_selector(document, ids, key))
        else {
            continue;
        };
        select.set_value(value);
    }
}

/// Filters whose selector is rendered on this page. Only these own the
/// hidden fields of the search form; the rest stay as the server wrote them.
pub fn present_filters(document: &Document, ids: &DomIds) -> Vec<FilterKey> {
    FilterKey::ALL
        .into_iter()
        .filter(|key| filter_selector(document, ids, *key).is_some())
        .collect()
}

/// Replaces the hidden fields of `form` named by `keys` with one hidden input
/// per active filter among them.
pub fn sync_hidden_fields(
    document: &Document,
    form: &HtmlFormElement,
    state: &FilterState,
    keys: &[FilterKey],
) -> Result<(), JsValue> {
    if keys.is_empty() {
        return Ok(());
    }
    let stale = keys
        .iter()
        .map(|key| format!("input[name=\"{}\"]", key.name()))
        .collect::<Vec<_>>()
        .join(", ");
    for element in dom::elements(&form.query_selector_all(&stale)?) {
        element.remove();
    }
    for (name, value) in state.hidden_fields() {
        if !keys.iter().any(|key| key.name() == name) {
            continue;
        }
        let input = document.create_element("input")?.dyn_into::<HtmlInputElement>()?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(&value);
        form.append_child(&input)?;
    }
    Ok(())
}

/// Syncs the selector state into `form` for every filter shown on the page.
fn sync_from_selectors(
    document: &Document,
    form: &HtmlFormElement,
    ids: &DomIds,
) -> Result<FilterState, JsValue> {
    let state = read_selectors(document, ids);
    sync_hidden_fields(document, form, &state, &present_filters(document, ids))?;
    Ok(state)
}

fn search_form(document: &Document, ids: &DomIds) -> Option<HtmlFormElement> {
    dom::by_id::<HtmlFormElement>(document, ids.search_form)
}

/// Copies the selector state into the search form and submits it.
pub fn apply_filters(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let ids = &config.ids;
    let Some(form) = search_form(document, ids) else {
        console::warn!("filters: search form missing");
        return Ok(());
    };
    let state = sync_from_selectors(document, &form, ids)?;
    console::log!("filters: applying", format!("?{}", state.to_query()));
    form.submit()
}

/// Entry point for templates that trigger filtering themselves, for example
/// from an explicit apply button.
#[wasm_bindgen(js_name = applyFilters)]
pub fn apply_filters_from_page() -> Result<(), JsValue> {
    let document = dom::document()?;
    apply_filters(&document, &runtime::page_config())
}

pub fn mount(document: &Document, config: &PageConfig) -> Result<Vec<EventListener>, JsValue> {
    let ids = &config.ids;
    let Some(form) = search_form(document, ids) else {
        console::log!("filters: not on this page");
        return Ok(Vec::new());
    };

    let location = document
        .location()
        .ok_or_else(|| JsValue::from_str("missing location"))?;
    let from_query = FilterState::from_query(&location.search()?);
    preselect(document, ids, &from_query);

    let mut listeners = Vec::new();
    // Selectors normally call `applyFilters` from their own `onchange`.
    if config.bind_filter_changes {
        for key in FilterKey::ALL {
            let Some(select) = filter_selector(document, ids, key) else {
                continue;
            };
            let document = document.clone();
            let config = config.clone();
            listeners.push(EventListener::new(&select, "change", move |_| {
                if let Err(err) = apply_filters(&document, &config) {
                    console::error!("filters: submit failed", dom::js_err(err));
                }
            }));
        }
    }

    // Plain submissions (button, Enter) carry the selector state as well.
    {
        let document = document.clone();
        let ids = ids.clone();
        let target = form.clone();
        listeners.push(EventListener::new(&form, "submit", move |_| {
            if let Err(err) = sync_from_selectors(&document, &target, &ids) {
                console::error!("filters: sync failed", dom::js_err(err));
            }
        }));
    }

    for element in dom::elements(&document.query_selector_all(ids.search_query)?) {
        let document = document.clone();
        let config = config.clone();
        let field = element.clone();
        listeners.push(EventListener::new_with_options(
            &element,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() != "Enter" || event.is_composing() {
                    return;
                }
                let Some(form) = field
                    .closest("form")
                    .ok()
                    .flatten()
                    .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
                else {
                    return;
                };
                event.prevent_default();
                let submitted = if form.id() == config.ids.search_form {
                    sync_from_selectors(&document, &form, &config.ids).and_then(|_| form.submit())
                } else {
                    form.submit()
                };
                if let Err(err) = submitted {
                    console::error!("filters: submit failed", dom::js_err(err));
                }
            },
        ));
    }

    Ok(listeners)
}
