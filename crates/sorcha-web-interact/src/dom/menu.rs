//! Mobile menu toggle.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use super::{listen, query_all_in};
use crate::selectors::{ACTIVE, MOBILE_MENU_TOGGLE, NAV_MENU, NAV_WRAPPER};

pub fn install(document: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (
        document.query_selector(MOBILE_MENU_TOGGLE)?,
        document.query_selector(NAV_MENU)?,
    ) else {
        return Ok(());
    };

    {
        let (t, m) = (toggle.clone(), menu.clone());
        listen(&toggle, "click", move |_| {
            let _ = m.class_list().toggle(ACTIVE);
            let _ = t.class_list().toggle(ACTIVE);
        })?;
    }

    // Close when clicking outside the nav
    {
        let (t, m) = (toggle.clone(), menu.clone());
        listen(document, "click", move |event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(NAV_WRAPPER).ok().flatten())
                .is_some();
            if !inside {
                close(&t, &m);
            }
        })?;
    }

    for link in query_all_in(&menu, "a")? {
        let (t, m) = (toggle.clone(), menu.clone());
        listen(&link, "click", move |_| close(&t, &m))?;
    }

    listen(document, "keydown", move |event| {
        let escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if escape && menu.class_list().contains(ACTIVE) {
            close(&toggle, &menu);
        }
    })?;

    Ok(())
}

fn close(toggle: &Element, menu: &Element) {
    let _ = menu.class_list().remove_1(ACTIVE);
    let _ = toggle.class_list().remove_1(ACTIVE);
}
