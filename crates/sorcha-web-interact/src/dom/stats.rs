//! Count-up animation for the hero stats.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserverInit, Window};

use super::{on_intersect, query_all};
use crate::counter::{StatTarget, TICK_MS};
use crate::selectors::{STATS_SECTION, STAT_NUMBER};

const THRESHOLD: f64 = 0.5;

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(section) = document.query_selector(STATS_SECTION)? else {
        return Ok(());
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));

    let (window, doc) = (window.clone(), document.clone());
    let observer = on_intersect(&options, move |section, observer| {
        observer.unobserve(&section);

        match query_all(&doc, STAT_NUMBER) {
            Ok(stats) => {
                for stat in stats {
                    if let Err(e) = animate(&window, stat) {
                        web_sys::console::error_1(&e);
                    }
                }
            }
            Err(e) => web_sys::console::error_1(&e),
        }
    })?;

    observer.observe(&section);
    Ok(())
}

/// Count `stat` up to the number it displays. Non-numeric stats are left as is.
fn animate(window: &Window, stat: Element) -> Result<(), JsValue> {
    let Some(target) = StatTarget::parse(&stat.text_content().unwrap_or_default()) else {
        return Ok(());
    };

    let mut frames = target.frames();
    let handle = Rc::new(Cell::new(None::<i32>));

    let tick = {
        let (window, handle) = (window.clone(), Rc::clone(&handle));
        Closure::<dyn FnMut()>::new(move || {
            if let Some(text) = frames.next() {
                stat.set_text_content(Some(&text));
            }
            if frames.is_done() {
                if let Some(id) = handle.take() {
                    window.clear_interval_with_handle(id);
                }
            }
        })
    };

    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TICK_MS,
    )?;
    handle.set(Some(id));
    tick.forget();

    Ok(())
}
