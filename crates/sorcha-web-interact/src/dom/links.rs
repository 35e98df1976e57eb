//! Loading cue for links that open a new tab.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use super::{listen, query_all, set_style, set_timeout};
use crate::selectors::EXTERNAL_LINKS;

const DIM_MS: i32 = 300;

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    for link in query_all(document, EXTERNAL_LINKS)? {
        let (window, target) = (window.clone(), link.clone());

        listen(&link, "click", move |_| {
            set_style(&target, "opacity", "0.7");

            let target = target.clone();
            let _ = set_timeout(&window, DIM_MS, move || set_style(&target, "opacity", "1"));
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::{install, DIM_MS};
    use crate::dom::listen;
    use crate::dom::testing::{sleep, Page};

    #[wasm_bindgen_test]
    async fn dims_external_link_briefly() {
        let page = Page::mount(
            r#"<a id="github" href="https://github.com/StuartF303/Sorcha" target="_blank">GitHub</a>"#,
        );
        install(&page.window, &page.document).unwrap();
        listen(&page.root, "click", |event| event.prevent_default()).unwrap();

        page.html("#github").click();
        assert_eq!(page.style("#github", "opacity"), "0.7");

        sleep(DIM_MS + 200).await;
        assert_eq!(page.style("#github", "opacity"), "1");
    }
}
