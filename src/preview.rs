use std::cell::RefCell;
use std::rc::Rc;

use artfolio_core::{single_locator, LocatorList, PageConfig};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlImageElement};

use crate::dom;

pub const PROCESS_IMAGE_ALT: &str = "Process image";

pub fn render_image_preview(preview: &HtmlImageElement, raw: &str) {
    match single_locator(raw) {
        Some(url) => {
            preview.set_src(&url);
            dom::set_visible(preview, true);
        }
        None => dom::set_visible(preview, false),
    }
}

/// Single image URL field driving one preview image.
pub fn mount_image_preview(
    document: &Document,
    config: &PageConfig,
) -> Result<Vec<EventListener>, JsValue> {
    let ids = &config.ids;
    let (Some(field), Some(preview)) = (
        document.get_element_by_id(ids.image_url),
        dom::by_id::<HtmlImageElement>(document, ids.image_preview),
    ) else {
        console::log!("image preview: not on this page");
        return Ok(Vec::new());
    };

    let on_error = {
        let failed = preview.clone();
        EventListener::new(&preview, "error", move |_| {
            dom::set_visible(&failed, false);
        })
    };
    render_image_preview(&preview, &dom::field_value(&field));
    let on_input = {
        let source = field.clone();
        EventListener::new(&field, "input", move |_| {
            render_image_preview(&preview, &dom::field_value(&source));
        })
    };
    Ok(vec![on_error, on_input])
}

/// Preview region for a list of locators. Each image hides itself when it
/// fails to load without affecting the others.
pub struct LocatorPreview {
    container: Element,
    class: &'static str,
    image_listeners: Vec<EventListener>,
}

impl LocatorPreview {
    pub fn new(container: Element, class: &'static str) -> Self {
        Self {
            container,
            class,
            image_listeners: Vec::new(),
        }
    }

    pub fn render(&mut self, raw: &str) -> Result<usize, JsValue> {
        self.image_listeners.clear();
        self.container.set_inner_html("");
        let locators = LocatorList::parse(raw);
        for locator in locators.iter() {
            let image = HtmlImageElement::new()?;
            image.set_class_name(self.class);
            image.set_alt(PROCESS_IMAGE_ALT);
            let failed = image.clone();
            self.image_listeners
                .push(EventListener::new(&image, "error", move |_| {
                    dom::set_visible(&failed, false);
                }));
            image.set_src(locator);
            self.container.append_child(&image)?;
        }
        Ok(locators.len())
    }
}

pub fn mount_process_preview(
    document: &Document,
    config: &PageConfig,
) -> Result<Vec<EventListener>, JsValue> {
    let ids = &config.ids;
    let (Some(field), Some(container)) = (
        document.get_element_by_id(ids.process_images),
        document.get_element_by_id(ids.process_preview),
    ) else {
        console::log!("process preview: not on this page");
        return Ok(Vec::new());
    };

    let mut preview = LocatorPreview::new(container, config.classes.process_image);
    preview.render(&dom::field_value(&field))?;
    let preview = Rc::new(RefCell::new(preview));
    let source = field.clone();
    let on_input = EventListener::new(&field, "input", move |_| {
        if let Err(err) = preview.borrow_mut().render(&dom::field_value(&source)) {
            console::error!("process preview: render failed", dom::js_err(err));
        }
    });
    Ok(vec![on_input])
}
