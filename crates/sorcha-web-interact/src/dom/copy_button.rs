//! Copy-to-clipboard buttons on code blocks.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Document, Element, HtmlElement, Node, Window};

use super::{listen, query_all, set_timeout};
use crate::copy::{
    feedback_steps, CopyFeedback, FeedbackStep, ARIA_LABEL, BUTTON_CLASS, BUTTON_STYLE,
    HOVER_BACKGROUND,
};
use crate::selectors::CODE_BLOCK;

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    for block in query_all(document, CODE_BLOCK)? {
        let button = create_button(document)?;

        {
            let b = button.clone();
            listen(&button, "mouseenter", move |_| {
                let _ = b.style().set_property("background-color", HOVER_BACKGROUND);
            })?;
        }
        {
            let b = button.clone();
            listen(&button, "mouseleave", move |_| {
                if let Some(colors) = CopyFeedback::Idle.colors() {
                    let _ = b.style().set_property("background-color", colors.background);
                }
            })?;
        }
        {
            let (window, b, block) = (window.clone(), button.clone(), block.clone());
            listen(&button, "click", move |_| {
                let Ok(Some(code)) = block.query_selector("code") else {
                    return;
                };
                let text = code.text_content().unwrap_or_default();
                let (window, button) = (window.clone(), b.clone());

                wasm_bindgen_futures::spawn_local(async move {
                    let result = write_clipboard(&window, &text).await;
                    if let Err(e) = &result {
                        web_sys::console::error_2(&"Failed to copy code:".into(), e);
                    }

                    for step in feedback_steps(&result) {
                        if step.delay_ms == 0 {
                            apply(&button, &step);
                        } else {
                            let button = button.clone();
                            let _ = set_timeout(&window, step.delay_ms, move || {
                                apply(&button, &step)
                            });
                        }
                    }
                });
            })?;
        }

        if let Some(block) = block.dyn_ref::<HtmlElement>() {
            let _ = block.style().set_property("position", "relative");
        }

        if let Some(pre) = block.query_selector("pre")? {
            let pre: &Node = pre.as_ref();
            block.insert_before(&button, Some(pre))?;
        }
    }

    Ok(())
}

fn create_button(document: &Document) -> Result<HtmlElement, JsValue> {
    let button: HtmlElement = document.create_element("button")?.dyn_into()?;
    button.set_class_name(BUTTON_CLASS);
    button.set_text_content(Some(CopyFeedback::Idle.label()));
    button.set_attribute("aria-label", ARIA_LABEL)?;
    button.style().set_css_text(BUTTON_STYLE);
    Ok(button)
}

async fn write_clipboard(window: &Window, text: &str) -> Result<(), JsValue> {
    // Missing outside secure contexts
    let clipboard: Clipboard =
        js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?.dyn_into()?;
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn apply(button: &Element, step: &FeedbackStep) {
    button.set_text_content(Some(step.label));
    if let Some(colors) = step.colors {
        super::set_style(button, "background-color", colors.background);
        super::set_style(button, "border-color", colors.border);
    }
}
