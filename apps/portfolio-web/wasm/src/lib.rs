//! WASM bindings for the portfolio page
//!
//! Rendering and section tracking live in Rust; JavaScript only loads the
//! module and calls `mount`.
//!
//! ## Architecture
//!
//! - Page markup and content come from `portfolio-core`
//! - `IntersectionObserver` batches feed `portfolio_core::ScrollSpy`
//! - Nav clicks are delegated from the root element to `ScrollSpy::jump_to`
//! - `tracing` events from the core are printed to the browser console
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { mount } from './pkg/portfolio_wasm.js';
//!
//! await init();
//!
//! const app = mount("root");
//! console.log(app.activeSection); // "home"
//! app.jumpTo("projects");
//!
//! // On teardown
//! app.dispose();
//! ```

pub mod app;
pub mod console_log;
pub mod dom_source;

use portfolio_core::{content, ObserverConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

// Re-export main types for JavaScript
pub use app::PortfolioApp;
pub use dom_source::{DomScroller, DomVisibilitySource};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::install();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Look up the document and the mount element
fn find_root(root_id: &str) -> Result<(Document, Element), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document object available"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", root_id)))?;
    Ok((document, root))
}

/// Render the portfolio into the element with id `root_id` and start
/// tracking the visible section
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<PortfolioApp, JsValue> {
    let (document, root) = find_root(root_id)?;
    PortfolioApp::mount_with_config(&document, root, &ObserverConfig::default())
}

/// Mount with observer settings given as TOML
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(root_id: &str, config_toml: &str) -> Result<PortfolioApp, JsValue> {
    let config = ObserverConfig::from_toml_str(config_toml)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (document, root) = find_root(root_id)?;
    PortfolioApp::mount_with_config(&document, root, &config)
}

/// All page content as a plain JS object
#[wasm_bindgen]
pub fn get_content() -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&get_content_json()?)
}

/// All page content as a JSON string
#[wasm_bindgen(js_name = getContentJson)]
pub fn get_content_json() -> Result<String, JsValue> {
    content::to_json().map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Root margin used by the default observer configuration
#[wasm_bindgen]
pub fn default_root_margin() -> String {
    ObserverConfig::default().root_margin()
}

/// Thresholds used by the default observer configuration
#[wasm_bindgen]
pub fn default_thresholds() -> Vec<f64> {
    ObserverConfig::default().thresholds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_content_json_matches_core_export() {
        let json = get_content_json().unwrap();
        assert_eq!(json, content::to_json().unwrap());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["initials"], content::PROFILE.initials);
        assert_eq!(
            value["experiences"].as_array().unwrap().len(),
            content::EXPERIENCES.len()
        );
    }

    #[test]
    fn test_default_observer_settings() {
        assert_eq!(default_root_margin(), "-80px 0px -10% 0px");
        assert_eq!(default_thresholds(), vec![0.0, 0.1, 0.2, 0.35, 0.5, 0.65]);
    }
}
