//! Smooth scrolling for same-page links.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{listen, query_all};
use crate::scroll::{anchor_offset, classify_anchor, AnchorClick};
use crate::selectors::{NAVBAR, SAME_PAGE_ANCHORS};

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    for anchor in query_all(document, SAME_PAGE_ANCHORS)? {
        let (window, document, link) = (window.clone(), document.clone(), anchor.clone());

        listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };

            match classify_anchor(&href) {
                Some(AnchorClick::Bare) => event.prevent_default(),
                Some(AnchorClick::Fragment(selector)) => {
                    // An invalid selector behaves like a missing target
                    let Ok(Some(target)) = document.query_selector(selector) else {
                        return;
                    };
                    event.prevent_default();

                    let options = ScrollToOptions::new();
                    options.set_top(anchor_offset(offset_top(&target), navbar_height(&document)));
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
                None => {}
            }
        })?;
    }

    Ok(())
}

fn offset_top(element: &web_sys::Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| el.offset_top() as f64)
        .unwrap_or(0.0)
}

fn navbar_height(document: &Document) -> f64 {
    document
        .query_selector(NAVBAR)
        .ok()
        .flatten()
        .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
        .map(|navbar| navbar.offset_height() as f64)
        .unwrap_or(0.0)
}
