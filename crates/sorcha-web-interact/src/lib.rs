//! Client-side page interactions for the Sorcha.dev site.
//!
//! This crate compiles to a WASM module (via `wasm-pack --target web`) that
//! enhances the statically built pages once loaded:
//!
//! ```js
//! import init from './pkg/sorcha_web_interact.js';
//!
//! await init();
//! ```
//!
//! Each behavior is installed once and does nothing when the elements it needs
//! are missing from the page. The DOM wiring lives in a `wasm32`-only module;
//! the logic behind it (counter frames, anchor handling, scroll direction,
//! copy feedback) is plain Rust and is tested natively.

pub mod copy;
pub mod counter;
pub mod scroll;
pub mod selectors;

#[cfg(target_arch = "wasm32")]
mod dom;

/// Entry point run by the generated JS glue when the module is initialized.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    dom::install()
}
