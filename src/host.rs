use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::HostError;

/// Below this window width (CSS px) the header uses the narrow layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 600.0;

/// Page-level side effects of the navigation header.
pub trait Host {
    /// Pushes a history entry for `#id` without navigating.
    fn push_fragment(&self, id: &str) -> Result<(), HostError>;

    /// Smoothly scrolls the element tagged `data-section="id"` into view.
    /// `Ok(false)` when the page has no such section.
    fn scroll_section_into_view(&self, id: &str) -> Result<bool, HostError>;
}

impl<H: Host + ?Sized> Host for Rc<H> {
    fn push_fragment(&self, id: &str) -> Result<(), HostError> {
        (**self).push_fragment(id)
    }

    fn scroll_section_into_view(&self, id: &str) -> Result<bool, HostError> {
        (**self).scroll_section_into_view(id)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn push_fragment(&self, id: &str) -> Result<(), HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let history = window.history().map_err(js_message).map_err(HostError::History)?;
        history
            .push_state_with_url(&JsValue::NULL, "", Some(&fragment_for(id)))
            .map_err(js_message)
            .map_err(HostError::History)
    }

    fn scroll_section_into_view(&self, id: &str) -> Result<bool, HostError> {
        let document = web_sys::window()
            .ok_or(HostError::NoWindow)?
            .document()
            .ok_or(HostError::NoDocument)?;
        let section = document
            .query_selector(&section_selector(id))
            .map_err(js_message)
            .map_err(HostError::Selector)?;

        match section {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub fn fragment_for(id: &str) -> String {
    format!("#{id}")
}

/// Attribute selector for a section id, with quotes and backslashes escaped.
pub fn section_selector(id: &str) -> String {
    let mut escaped = String::with_capacity(id.len());
    for c in id.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("[data-section=\"{escaped}\"]")
}

/// Section id named by a `location.hash` value, if any.
pub fn section_from_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

pub fn current_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

pub fn is_narrow(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

pub fn viewport_is_narrow() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(is_narrow)
        .unwrap_or(false)
}

pub fn focus_element(element: &HtmlElement) {
    if let Err(err) = element.focus() {
        log::debug!("focus rejected: {}", js_message(err));
    }
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
