//! Browser fixtures shared by the behavior tests.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, Window};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Markup mounted at the top of the page body, removed again on drop.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub root: Element,
}

impl Page {
    pub fn mount(html: &str) -> Self {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let body = document.body().unwrap();

        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        body.insert_before(&root, body.first_child().as_ref()).unwrap();
        window.scroll_to_with_x_and_y(0.0, 0.0);

        Self {
            window,
            document,
            root,
        }
    }

    pub fn get(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {selector}"))
    }

    pub fn html(&self, selector: &str) -> HtmlElement {
        self.get(selector).dyn_into().unwrap()
    }

    pub fn text(&self, selector: &str) -> String {
        self.get(selector).text_content().unwrap_or_default()
    }

    pub fn style(&self, selector: &str, property: &str) -> String {
        self.html(selector)
            .style()
            .get_property_value(property)
            .unwrap()
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.get(selector).class_list().contains(class)
    }

    pub fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Dispatch a bubbling, cancelable click. Returns whether a listener
/// prevented the default action.
pub fn click_prevented(element: &Element) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    !element.dispatch_event(&event).unwrap()
}

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}
