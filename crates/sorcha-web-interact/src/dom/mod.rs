//! DOM wiring for the page behaviors.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, IntersectionObserver, NodeList, Window};

mod anchors;
mod copy_button;
mod fade;
mod links;
mod menu;
mod navbar;
mod spy;
mod stats;

#[cfg(test)]
mod testing;

/// Install every behavior on the current document.
pub fn install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    menu::install(&document)?;
    anchors::install(&window, &document)?;
    spy::install(&document)?;
    fade::install(&window, &document)?;
    copy_button::install(&window, &document)?;
    navbar::install(&window, &document)?;
    stats::install(&window, &document)?;
    links::install(&window, &document)?;

    banner();
    Ok(())
}

/// Every element in the document matching `selector`.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(document.query_selector_all(selector)?))
}

/// Every descendant of `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` once after `delay_ms`.
pub(crate) fn set_timeout(
    window: &Window,
    delay_ms: i32,
    callback: impl FnOnce() + 'static,
) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(callback);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    )
}

/// Build an intersection observer whose callback receives each intersecting
/// element together with the observer.
pub(crate) fn on_intersect(
    options: &web_sys::IntersectionObserverInit,
    mut handler: impl FnMut(Element, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    handler(entry.target(), &observer);
                }
            }
        },
    );

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    callback.forget();
    Ok(observer)
}

/// Set an inline style property, ignoring elements without a style object.
pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

fn banner() {
    web_sys::console::log_2(
        &"%cSorcha.dev".into(),
        &"font-size: 24px; font-weight: bold; color: #6366f1;".into(),
    );
    web_sys::console::log_2(
        &"%cSecure Data Flow Orchestration Platform".into(),
        &"font-size: 14px; color: #6b7280;".into(),
    );
    web_sys::console::log_2(
        &"%cVisit https://github.com/StuartF303/Sorcha to contribute!".into(),
        &"font-size: 12px; color: #14b8a6;".into(),
    );
}
