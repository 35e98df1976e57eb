//! One-shot fade-in for cards as they scroll into view.

use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserverInit, Window};

use super::{on_intersect, query_all, set_style, set_timeout};
use crate::selectors::FADE_TARGETS;

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";
const DELAY_MS: i32 = 100;
const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let targets = query_all(document, FADE_TARGETS)?;
    if targets.is_empty() {
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let window = window.clone();
    let observer = on_intersect(&options, move |element, observer| {
        set_style(&element, "opacity", "0");
        set_style(&element, "transform", "translateY(20px)");

        observer.unobserve(&element);

        let _ = set_timeout(&window, DELAY_MS, move || {
            set_style(&element, "transition", TRANSITION);
            set_style(&element, "opacity", "1");
            set_style(&element, "transform", "translateY(0)");
        });
    })?;

    for target in &targets {
        observer.observe(target);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::install;
    use crate::dom::testing::{sleep, Page};

    const CARDS: &str = r#"
        <div id="visible" class="feature-card" style="height: 50px">Flows</div>
        <div style="height: 4000px"></div>
        <div id="below" class="benefit-item" style="height: 50px">Audit</div>
        <div style="height: 1000px"></div>
    "#;

    #[wasm_bindgen_test]
    async fn fades_in_cards_in_view_only() {
        let page = Page::mount(CARDS);
        install(&page.window, &page.document).unwrap();
        sleep(400).await;

        assert_eq!(page.style("#visible", "opacity"), "1");
        assert_eq!(page.style("#visible", "transform"), "translateY(0)");
        assert!(page.style("#visible", "transition").contains("0.6s"));
        assert_eq!(page.style("#below", "opacity"), "");
    }

    #[wasm_bindgen_test]
    async fn fades_in_only_once() {
        let page = Page::mount(CARDS);
        install(&page.window, &page.document).unwrap();
        sleep(400).await;

        page.html("#visible")
            .style()
            .set_property("opacity", "0.5")
            .unwrap();
        page.scroll_to(3000.0);
        sleep(200).await;
        page.scroll_to(0.0);
        sleep(400).await;

        assert_eq!(page.style("#visible", "opacity"), "0.5");
    }
}
