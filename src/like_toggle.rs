use std::cell::RefCell;
use std::rc::Rc;

use artfolio_core::{
    classify, like_endpoint, ClassNames, LikeError, LikeState, LikeToggle, PageConfig, Settlement,
};
use gloo::console;
use gloo::events::EventListener;
use gloo::net::http::Request;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, RequestCredentials};

use crate::{dom, runtime};

pub const ARTWORK_ID_ATTRIBUTE: &str = "data-artwork-id";

pub fn read_rendered_state(control: &Element, classes: &ClassNames) -> LikeState {
    let liked = control.class_list().contains(classes.liked);
    let count = control
        .query_selector(&dom::class_selector(classes.likes_count))
        .ok()
        .flatten()
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    LikeState::from_rendered(liked, &count)
}

/// Shows exactly the confirmed state on the control, its icon and its count.
pub fn apply_like_state(control: &Element, classes: &ClassNames, state: LikeState) {
    let _ = control
        .class_list()
        .toggle_with_force(classes.liked, state.liked);
    if let Ok(Some(icon)) = control.query_selector("i") {
        let _ = icon.class_list().toggle_with_force(classes.liked, state.liked);
    }
    if let Ok(Some(count)) = control.query_selector(&dom::class_selector(classes.likes_count)) {
        count.set_text_content(Some(&state.likes_count.to_string()));
    }
}

/// The like POST. Session cookies are sent even when the API base is on
/// another origin.
pub fn like_request(endpoint: &str) -> Result<Request, LikeError> {
    Request::post(endpoint)
        .credentials(RequestCredentials::Include)
        .build()
        .map_err(|err| LikeError::Transport(err.to_string()))
}

async fn send_like(endpoint: &str) -> Result<LikeState, LikeError> {
    let response = like_request(endpoint)?
        .send()
        .await
        .map_err(|err| LikeError::Transport(err.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| LikeError::Transport(err.to_string()))?;
    classify(status, &body)
}

/// Shows the outcome of a like request. Only `Apply` touches the control.
pub fn settle(control: &Element, classes: &ClassNames, settlement: Settlement) {
    match settlement {
        Settlement::Apply(state) => apply_like_state(control, classes, state),
        Settlement::Notify(err) => {
            console::warn!("like toggle: request failed", err.to_string());
            runtime::notify(&err.to_string());
        }
        Settlement::Stale => {
            console::log!("like toggle: dropped response of superseded request");
        }
    }
}

fn bind(control: Element, artwork_id: &str, config: &PageConfig) -> EventListener {
    let classes = config.classes.clone();
    let toggle = Rc::new(RefCell::new(LikeToggle::new(read_rendered_state(
        &control, &classes,
    ))));
    let endpoint = like_endpoint(&config.api_base, artwork_id);
    let target = control.clone();
    EventListener::new(&target, "click", move |_| {
        let ticket = toggle.borrow_mut().begin();
        let toggle = toggle.clone();
        let control = control.clone();
        let classes = classes.clone();
        let endpoint = endpoint.clone();
        spawn_local(async move {
            let result = send_like(&endpoint).await;
            let settlement = toggle.borrow_mut().settle(ticket, result);
            settle(&control, &classes, settlement);
        });
    })
}

pub fn mount(document: &Document, config: &PageConfig) -> Result<Vec<EventListener>, JsValue> {
    let selector = dom::class_selector(config.classes.like_button);
    let controls = dom::elements(&document.query_selector_all(&selector)?);
    if controls.is_empty() {
        console::log!("like toggle: not on this page");
        return Ok(Vec::new());
    }
    let mut listeners = Vec::with_capacity(controls.len());
    for control in controls {
        let Some(artwork_id) = control
            .get_attribute(ARTWORK_ID_ATTRIBUTE)
            .filter(|id| !id.trim().is_empty())
        else {
            console::warn!("like toggle: control without artwork id");
            continue;
        };
        listeners.push(bind(control, &artwork_id, config));
    }
    Ok(listeners)
}
