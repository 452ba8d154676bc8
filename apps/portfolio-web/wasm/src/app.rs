//! Mounted portfolio page
//!
//! `PortfolioApp` renders the page into a root element, attaches the scroll
//! spy to the DOM, and keeps the navigation highlight in sync.

use crate::dom_source::{DomScroller, DomVisibilitySource};
use portfolio_core::markup::{self, nav_button_class, NAV_ID, SECTION_ATTR};
use portfolio_core::{ObserverConfig, Region, ScrollSpy};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

type ClickHandler = Closure<dyn FnMut(Event)>;

/// Restyle the nav buttons under `root` so only `active` is highlighted
pub(crate) fn highlight_nav(root: &Element, active: Region) {
    let Ok(Some(nav)) = root.query_selector(&format!("#{}", NAV_ID)) else {
        return;
    };
    for region in Region::ALL {
        let selector = format!(r#"[{}="{}"]"#, SECTION_ATTR, region.id());
        if let Ok(Some(button)) = nav.query_selector(&selector) {
            button.set_class_name(&nav_button_class(region == active));
        }
    }
}

/// Region named by the nearest `data-section` ancestor of the click target
fn clicked_region(event: &Event) -> Option<Region> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let selector = format!("[{}]", SECTION_ATTR);
    let trigger = target.closest(&selector).ok()??;
    trigger.get_attribute(SECTION_ATTR)?.parse().ok()
}

/// Rendered page with a live scroll spy
#[wasm_bindgen]
pub struct PortfolioApp {
    spy: Rc<RefCell<ScrollSpy>>,
    root: Element,
    click_handler: Option<ClickHandler>,
}

impl PortfolioApp {
    /// Render into `root` and start tracking with `config`
    pub fn mount_with_config(
        document: &Document,
        root: Element,
        config: &ObserverConfig,
    ) -> Result<Self, JsValue> {
        let style = document.create_element("style")?;
        style.set_text_content(Some(markup::PAGE_STYLES));
        root.set_inner_html(&markup::render_page(Region::default()));
        root.prepend_with_node_1(&style)?;

        let mut source = DomVisibilitySource::new(document.clone());
        let scroller = DomScroller::new(document.clone());
        let spy = ScrollSpy::attach(&mut source, Box::new(scroller), config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let nav_root = root.clone();
        spy.on_change(move |region| highlight_nav(&nav_root, region));

        let spy = Rc::new(RefCell::new(spy));
        let click_handler = Self::listen_for_clicks(&root, Rc::downgrade(&spy))?;

        web_sys::console::log_1(&"Portfolio mounted".into());

        Ok(Self {
            spy,
            root,
            click_handler: Some(click_handler),
        })
    }

    fn listen_for_clicks(
        root: &Element,
        spy: Weak<RefCell<ScrollSpy>>,
    ) -> Result<ClickHandler, JsValue> {
        let handler: ClickHandler = Closure::wrap(Box::new(move |event: Event| {
            let Some(region) = clicked_region(&event) else {
                return;
            };
            if let Some(spy) = spy.upgrade() {
                let _ = spy.borrow().jump_to(region);
            }
        }) as Box<dyn FnMut(Event)>);

        root.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        Ok(handler)
    }

    /// Current active region
    pub fn active(&self) -> Region {
        self.spy.borrow().active()
    }
}

#[wasm_bindgen]
impl PortfolioApp {
    /// Id of the section currently highlighted in the nav bar
    #[wasm_bindgen(getter, js_name = activeSection)]
    pub fn active_section(&self) -> String {
        self.active().id().to_string()
    }

    /// Scroll to a section by id and highlight it immediately
    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&self, section_id: &str) -> Result<(), JsValue> {
        let region: Region = section_id
            .parse()
            .map_err(|e: portfolio_core::PortfolioError| JsValue::from_str(&e.to_string()))?;
        self.spy
            .borrow()
            .jump_to(region)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Visibility score per section id
    pub fn scores(&self) -> Result<JsValue, JsValue> {
        let scores: BTreeMap<&'static str, f64> = self
            .spy
            .borrow()
            .scores()
            .iter()
            .map(|(region, score)| (region.id(), score))
            .collect();
        scores
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(getter, js_name = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.spy.borrow().is_disposed()
    }

    /// Stop observing sections and detach the click handler
    pub fn dispose(&mut self) {
        if let Some(handler) = self.click_handler.take() {
            let _ = self
                .root
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
        self.spy.borrow_mut().dispose();
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.dispose();
    }
}
