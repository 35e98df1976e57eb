//! Scroll-spy highlighting for the docs navigation.

use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserverInit};

use super::{on_intersect, query_all};
use crate::scroll::{spy_link_matches, SPY_ROOT_MARGIN};
use crate::selectors::{ACTIVE, SPY_LINKS, SPY_SECTIONS};

pub fn install(document: &Document) -> Result<(), JsValue> {
    let sections = query_all(document, SPY_SECTIONS)?;
    let links = query_all(document, SPY_LINKS)?;

    if sections.is_empty() || links.is_empty() {
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_root_margin(SPY_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(0.0));

    let observer = on_intersect(&options, move |section, _| {
        let id = section.id();
        for link in &links {
            let _ = link.class_list().remove_1(ACTIVE);
            let matches = link
                .get_attribute("href")
                .is_some_and(|href| spy_link_matches(&href, &id));
            if matches {
                let _ = link.class_list().add_1(ACTIVE);
            }
        }
    })?;

    for section in &sections {
        observer.observe(section);
    }

    Ok(())
}
