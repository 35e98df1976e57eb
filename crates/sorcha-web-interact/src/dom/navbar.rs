//! Navbar show/hide on scroll direction.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use super::listen;
use crate::scroll::ScrollTracker;
use crate::selectors::{NAVBAR, SCROLL_DOWN};

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(navbar) = document.query_selector(NAVBAR)? else {
        return Ok(());
    };

    let mut tracker = ScrollTracker::default();
    let win = window.clone();

    listen(window, "scroll", move |_| {
        let current = win.scroll_y().unwrap_or(0.0);
        let classes = navbar.class_list();

        let update = tracker.update(current, classes.contains(SCROLL_DOWN));
        for class in update.remove() {
            let _ = classes.remove_1(class);
        }
        for class in update.add() {
            let _ = classes.add_1(class);
        }
    })
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::install;
    use crate::dom::testing::{sleep, Page};
    use crate::selectors::{SCROLL_DOWN, SCROLL_UP};

    #[wasm_bindgen_test]
    async fn follows_scroll_direction() {
        let page = Page::mount(
            r#"<nav id="bar" class="navbar">Sorcha</nav><div style="height: 5000px"></div>"#,
        );
        install(&page.window, &page.document).unwrap();

        page.scroll_to(400.0);
        sleep(100).await;
        assert!(page.has_class("#bar", SCROLL_DOWN));
        assert!(!page.has_class("#bar", SCROLL_UP));

        page.scroll_to(200.0);
        sleep(100).await;
        assert!(!page.has_class("#bar", SCROLL_DOWN));
        assert!(page.has_class("#bar", SCROLL_UP));

        page.scroll_to(0.0);
        sleep(100).await;
        assert!(!page.has_class("#bar", SCROLL_UP));
    }
}
