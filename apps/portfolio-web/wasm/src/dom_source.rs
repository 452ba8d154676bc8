//! DOM-backed visibility source and scroll target
//!
//! Wraps `IntersectionObserver` and `Element.scrollIntoView` behind the
//! `portfolio_core::source` traits.

use js_sys::Array;
use portfolio_core::{
    BatchHandler, ObserverConfig, PortfolioError, Region, ScrollTarget, Subscription,
    VisibilityEntry, VisibilitySource,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observes page sections with an `IntersectionObserver`
pub struct DomVisibilitySource {
    document: Document,
}

impl DomVisibilitySource {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

/// Convert observer entries into visibility entries.
///
/// Entries whose target id is not a known region are dropped.
fn to_visibility_entries(entries: &Array) -> Vec<VisibilityEntry> {
    entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            let region: Region = entry.target().id().parse().ok()?;
            Some(VisibilityEntry::new(
                region,
                entry.is_intersecting(),
                entry.intersection_ratio(),
            ))
        })
        .collect()
}

fn observer_init(config: &ObserverConfig) -> IntersectionObserverInit {
    let init = IntersectionObserverInit::new();
    init.set_root_margin(&config.root_margin());
    let thresholds: Array = config
        .thresholds
        .iter()
        .map(|&t| JsValue::from_f64(t))
        .collect();
    init.set_threshold(&thresholds);
    init
}

impl VisibilitySource for DomVisibilitySource {
    fn subscribe(
        &mut self,
        regions: &[Region],
        config: &ObserverConfig,
        mut on_batch: BatchHandler,
    ) -> Result<Box<dyn Subscription>, PortfolioError> {
        config.validate()?;

        let callback: ObserverCallback =
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let batch = to_visibility_entries(&entries);
                if !batch.is_empty() {
                    on_batch(&batch);
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &observer_init(config),
        )
        .map_err(|e| {
            PortfolioError::InvalidConfig(
                e.as_string()
                    .unwrap_or_else(|| "IntersectionObserver rejected options".to_string()),
            )
        })?;

        let mut observed = 0;
        for &region in regions {
            match self.document.get_element_by_id(region.id()) {
                Some(element) => {
                    observer.observe(&element);
                    observed += 1;
                }
                None => {
                    web_sys::console::warn_1(
                        &format!("Section #{} not found, not observed", region.id()).into(),
                    );
                }
            }
        }
        web_sys::console::log_1(&format!("Observing {} sections", observed).into());

        Ok(Box::new(DomSubscription {
            observer,
            callback: Some(callback),
        }))
    }
}

struct DomSubscription {
    observer: IntersectionObserver,
    callback: Option<ObserverCallback>,
}

impl Subscription for DomSubscription {
    fn unsubscribe(&mut self) {
        // The closure must outlive the observer, so disconnect before dropping it.
        if let Some(callback) = self.callback.take() {
            self.observer.disconnect();
            drop(callback);
        }
    }
}

impl Drop for DomSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Smooth-scrolls section elements into view
pub struct DomScroller {
    document: Document,
}

impl DomScroller {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ScrollTarget for DomScroller {
    fn scroll_to(&self, region: Region) -> bool {
        let Some(element) = self.document.get_element_by_id(region.id()) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_observer_init_accepts_default_config() {
        let init = observer_init(&ObserverConfig::default());
        let observer = IntersectionObserver::new_with_options(
            &js_sys::Function::new_no_args(""),
            &init,
        )
        .unwrap();
        assert_eq!(observer.root_margin(), "-80px 0px -10% 0px");
        assert_eq!(observer.thresholds().length(), 6);
        observer.disconnect();
    }

    #[wasm_bindgen_test]
    fn test_missing_sections_are_skipped() {
        let mut source = DomVisibilitySource::new(document());
        let seen = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&seen);
        let handler: BatchHandler = Box::new(move |batch: &[VisibilityEntry]| {
            *sink.borrow_mut() += batch.len();
        });

        let mut sub = source
            .subscribe(&[Region::Leadership], &ObserverConfig::default(), handler)
            .unwrap();
        sub.unsubscribe();
        sub.unsubscribe();
        assert_eq!(*seen.borrow(), 0);
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_missing_section() {
        let scroller = DomScroller::new(document());
        assert!(!scroller.scroll_to(Region::Education));
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_existing_section() {
        let document = document();
        let section = document.create_element("section").unwrap();
        section.set_id("skills");
        document.body().unwrap().append_child(&section).unwrap();

        let scroller = DomScroller::new(document.clone());
        assert!(scroller.scroll_to(Region::Skills));

        section.remove();
    }
}
