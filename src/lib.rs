//! Page behavior for the artfolio site.
//!
//! Load the module after the page markup (`type="module"` or at the end of
//! `<body>`). Each widget binds to its own elements and is skipped on pages
//! that do not render it.

pub mod cards;
pub mod config;
pub mod dom;
pub mod filters;
pub mod like_toggle;
pub mod preview;
pub mod runtime;
pub mod submission;
pub mod tag_editor;

use artfolio_core::PageConfig;
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

type Mount = fn(&Document, &PageConfig) -> Result<Vec<EventListener>, JsValue>;

const WIDGETS: &[(&str, Mount)] = &[
    ("tag editor", tag_editor::mount),
    ("image preview", preview::mount_image_preview),
    ("process preview", preview::mount_process_preview),
    ("filters", filters::mount),
    ("submission guard", submission::mount),
    ("like toggle", like_toggle::mount),
    ("artwork cards", cards::mount),
];

/// Mounts every widget present on the page. A widget that fails to mount is
/// logged and the rest still mount.
pub fn mount_page(document: &Document, config: &PageConfig) -> usize {
    let mut failed = 0;
    for (name, mount) in WIDGETS {
        match mount(document, config) {
            Ok(listeners) => runtime::keep(listeners),
            Err(err) => {
                failed += 1;
                console::error!(format!("{name}: mount failed"), dom::js_err(err));
            }
        }
    }
    failed
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = config::load_page_config();
    runtime::set_page_config(config.clone());
    let document = dom::document()?;
    mount_page(&document, &config);
    Ok(())
}
