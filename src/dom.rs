//! Thin browser helpers shared by the widget mount functions.
//!
//! Queries return `Option`/`Vec` because absent markup is an expected state.
//! Listener closures live for the whole page view, so they are leaked with
//! `Closure::forget` once attached.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::{FxError, FxResult};

pub fn window() -> FxResult<Window> {
    web_sys::window().ok_or(FxError::MissingWindow)
}

pub fn document() -> FxResult<Document> {
    window()?.document().ok_or(FxError::MissingDocument)
}

/// Inner viewport size in CSS pixels; 0 for anything the browser refuses.
pub fn viewport(window: &Window) -> (f64, f64) {
    let width = window.inner_width().map_or(0.0, |v| v.as_f64().unwrap_or_default());
    let height = window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or_default());
    (width, height)
}

/// First element matching `selector` under `root`, as an `HtmlElement`.
pub fn query(root: &Document, selector: &str) -> Option<HtmlElement> {
    match root.query_selector(selector) {
        Ok(Some(el)) => el.dyn_ref::<HtmlElement>().cloned(),
        Ok(None) => None,
        Err(err) => {
            log::warn!("query {selector} failed: {:?}", err);
            None
        }
    }
}

/// First descendant of `parent` matching `selector`.
pub fn query_in(parent: &Element, selector: &str) -> Option<HtmlElement> {
    match parent.query_selector(selector) {
        Ok(Some(el)) => el.dyn_ref::<HtmlElement>().cloned(),
        Ok(None) => None,
        Err(err) => {
            log::warn!("query {selector} failed: {:?}", err);
            None
        }
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("query_all {selector} failed: {:?}", err);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

pub fn by_id(root: &Document, id: &str) -> Option<HtmlElement> {
    root.get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

/// Attach a long-lived listener. The closure is leaked on success.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> FxResult<()>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> FxResult<()> {
    el.style().set_property(property, value)?;
    Ok(())
}

pub fn remove_style(el: &HtmlElement, property: &str) -> FxResult<()> {
    el.style().remove_property(property)?;
    Ok(())
}

pub fn style_value(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap_or_default()
}

/// Add or remove `class` depending on `on`.
pub fn set_class(el: &Element, class: &str, on: bool) -> FxResult<()> {
    if on {
        el.class_list().add_1(class)?;
    } else {
        el.class_list().remove_1(class)?;
    }
    Ok(())
}

/// Log a failed handler step; handlers never abort the page.
pub fn report(context: &str, result: FxResult<()>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
