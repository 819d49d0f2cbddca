use std::cell::RefCell;
use std::rc::Rc;

use artfolio_core::PageConfig;
use gloo::events::EventListener;

use crate::config;

thread_local! {
    static PAGE_CONFIG: RefCell<Option<PageConfig>> = RefCell::new(None);
    static LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
    static NOTIFY_HOOK: RefCell<Option<Rc<dyn Fn(&str)>>> = RefCell::new(None);
}

pub fn set_page_config(config: PageConfig) {
    PAGE_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

pub fn page_config() -> PageConfig {
    PAGE_CONFIG
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(config::load_page_config)
}

/// Keeps widget listeners attached for the lifetime of the page.
pub fn keep(listeners: Vec<EventListener>) {
    if listeners.is_empty() {
        return;
    }
    LISTENERS.with(|slot| {
        slot.borrow_mut().extend(listeners);
    });
}

pub fn listener_count() -> usize {
    LISTENERS.with(|slot| slot.borrow().len())
}

pub fn set_notify_hook(hook: Option<Rc<dyn Fn(&str)>>) {
    NOTIFY_HOOK.with(|slot| {
        *slot.borrow_mut() = hook;
    });
}

/// Shows a blocking message to the user. Falls back to `window.alert`.
pub fn notify(message: &str) {
    let hook = NOTIFY_HOOK.with(|slot| slot.borrow().clone());
    if let Some(hook) = hook {
        hook(message);
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.alert_with_message(message);
}
