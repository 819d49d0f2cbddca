use artfolio_core::{ArtworkDraft, DomIds, PageConfig, RequiredField, SUBMITTING_LABEL};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlFormElement};

use crate::{dom, runtime};

fn field_id(ids: &DomIds, field: RequiredField) -> &'static str {
    match field {
        RequiredField::Title => ids.title,
        RequiredField::ImageUrl => ids.image_url,
        RequiredField::Description => ids.description,
    }
}

pub fn read_draft(document: &Document, ids: &DomIds) -> ArtworkDraft {
    let value = |field| {
        document
            .get_element_by_id(field_id(ids, field))
            .map(|element| dom::field_value(&element))
            .unwrap_or_default()
    };
    ArtworkDraft::new(
        &value(RequiredField::Title),
        &value(RequiredField::ImageUrl),
        &value(RequiredField::Description),
    )
}

/// Disables the submit button and swaps its label for a spinner while the
/// browser navigates away.
pub fn mark_in_flight(form: &HtmlFormElement) -> Result<(), JsValue> {
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
    else {
        return Ok(());
    };
    button.set_disabled(true);
    button.set_inner_html(&format!(
        "<i class=\"fas fa-spinner fa-spin\"></i> {SUBMITTING_LABEL}"
    ));
    Ok(())
}

pub fn mount(document: &Document, config: &PageConfig) -> Result<Vec<EventListener>, JsValue> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, config.ids.artwork_form) else {
        console::log!("submission guard: not on this page");
        return Ok(Vec::new());
    };

    let document = document.clone();
    let ids = config.ids.clone();
    let target = form.clone();
    let on_submit = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| match read_draft(&document, &ids).validate() {
            Err(err) => {
                event.prevent_default();
                runtime::notify(&err.to_string());
                if let Some(element) = document.get_element_by_id(field_id(&ids, err.field)) {
                    dom::focus(&element);
                }
            }
            Ok(()) => {
                if let Err(err) = mark_in_flight(&target) {
                    console::warn!("submission guard: button update failed", dom::js_err(err));
                }
            }
        },
    );
    Ok(vec![on_submit])
}
