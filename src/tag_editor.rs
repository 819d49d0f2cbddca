use std::cell::RefCell;
use std::rc::Rc;

use artfolio_core::{ClassNames, DuplicateCheck, PageConfig, TagSet};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

use crate::dom;

const REMOVE_GLYPH: &str = "\u{00d7}";

pub fn is_commit_key(key: &str) -> bool {
    key == "Enter" || key == ","
}

struct TagEditor {
    tags: TagSet,
    document: Document,
    entry: HtmlInputElement,
    container: Element,
    field: HtmlInputElement,
    classes: ClassNames,
}

impl TagEditor {
    fn render(&self) -> Result<(), JsValue> {
        self.container.set_inner_html("");
        for tag in self.tags.iter() {
            let chip = self.document.create_element("span")?;
            chip.set_class_name(self.classes.tag_chip);
            chip.append_child(&self.document.create_text_node(tag))?;
            let remove = self.document.create_element("span")?;
            remove.set_class_name(self.classes.remove_tag);
            remove.set_attribute("data-tag", tag)?;
            remove.set_text_content(Some(REMOVE_GLYPH));
            chip.append_child(&remove)?;
            self.container.append_child(&chip)?;
        }
        self.field.set_value(&self.tags.serialize());
        Ok(())
    }

    fn commit_entry(&mut self) -> Result<(), JsValue> {
        let text = self.entry.value();
        self.entry.set_value("");
        let outcome = self.tags.commit(&text);
        if !outcome.rejected.is_empty() {
            console::log!("tag editor: rejected", outcome.rejected.join(","));
        }
        if outcome.changed() {
            self.render()?;
        }
        Ok(())
    }

    fn remove(&mut self, tag: &str) -> Result<(), JsValue> {
        if self.tags.remove(tag) {
            self.render()?;
        }
        Ok(())
    }
}

/// Binds the tag entry field, chip container and hidden tags field. The
/// hidden field's server-rendered value seeds the tag set.
pub fn mount(document: &Document, config: &PageConfig) -> Result<Vec<EventListener>, JsValue> {
    let ids = &config.ids;
    let (Some(entry), Some(container), Some(field)) = (
        dom::by_id::<HtmlInputElement>(document, ids.tag_entry),
        document.get_element_by_id(ids.tag_container),
        dom::by_id::<HtmlInputElement>(document, ids.tags_field),
    ) else {
        console::log!("tag editor: not on this page");
        return Ok(Vec::new());
    };

    let tags = TagSet::from_serialized(&field.value(), DuplicateCheck::Containment);
    let editor = TagEditor {
        tags,
        document: document.clone(),
        entry: entry.clone(),
        container: container.clone(),
        field,
        classes: config.classes.clone(),
    };
    editor.render()?;
    let editor = Rc::new(RefCell::new(editor));

    let on_key = {
        let editor = editor.clone();
        EventListener::new_with_options(
            &entry,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.is_composing() || !is_commit_key(&event.key()) {
                    return;
                }
                event.prevent_default();
                if let Err(err) = editor.borrow_mut().commit_entry() {
                    console::error!("tag editor: render failed", dom::js_err(err));
                }
            },
        )
    };

    let remove_selector = dom::class_selector(config.classes.remove_tag);
    let on_remove = EventListener::new(&container, "click", move |event| {
        let Some(target) = dom::event_target_element(event) else {
            return;
        };
        let Ok(Some(control)) = target.closest(&remove_selector) else {
            return;
        };
        let Some(tag) = control.get_attribute("data-tag") else {
            return;
        };
        if let Err(err) = editor.borrow_mut().remove(&tag) {
            console::error!("tag editor: render failed", dom::js_err(err));
        }
    });

    Ok(vec![on_key, on_remove])
}
