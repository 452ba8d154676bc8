//! Seams between the scroll spy and its host environment
//!
//! In the browser these are backed by `IntersectionObserver` and
//! `Element.scrollIntoView`. [`ManualSource`] and [`ManualScroller`] are
//! in-memory stand-ins that let the tracker run with synthetic batches.

use crate::error::PortfolioError;
use crate::observer::ObserverConfig;
use crate::region::Region;
use crate::score::VisibilityEntry;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

/// Callback invoked with each batch of visibility entries
pub type BatchHandler = Box<dyn FnMut(&[VisibilityEntry])>;

/// Handle returned by [`VisibilitySource::subscribe`]
pub trait Subscription {
    /// Stop delivering batches. Calling it more than once is a no-op.
    fn unsubscribe(&mut self);
}

/// Something that reports region visibility changes
pub trait VisibilitySource {
    /// Start observing `regions`.
    ///
    /// Regions the host cannot find are skipped; they are never reported.
    fn subscribe(
        &mut self,
        regions: &[Region],
        config: &ObserverConfig,
        on_batch: BatchHandler,
    ) -> Result<Box<dyn Subscription>, PortfolioError>;
}

/// Something that can bring a region into view
pub trait ScrollTarget {
    /// Scroll to the region. Returns `false` if it has no element.
    fn scroll_to(&self, region: Region) -> bool;
}

struct ManualSubscriber {
    id: u64,
    regions: BTreeSet<Region>,
    handler: Rc<RefCell<BatchHandler>>,
}

#[derive(Default)]
struct ManualInner {
    next_id: u64,
    missing: BTreeSet<Region>,
    subscribers: Vec<ManualSubscriber>,
    unsubscribe_calls: usize,
    last_config: Option<ObserverConfig>,
}

/// In-memory visibility source driven by [`ManualSource::emit`]
#[derive(Clone, Default)]
pub struct ManualSource {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source whose page lacks elements for `missing`
    pub fn with_missing(missing: &[Region]) -> Self {
        let source = Self::new();
        source.inner.borrow_mut().missing = missing.iter().copied().collect();
        source
    }

    /// Deliver a batch to every live subscriber.
    ///
    /// Entries for regions a subscriber is not observing are dropped.
    pub fn emit(&self, entries: &[VisibilityEntry]) {
        // Handlers run without the source borrowed so they may unsubscribe.
        let targets: Vec<(BTreeSet<Region>, Rc<RefCell<BatchHandler>>)> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|s| (s.regions.clone(), Rc::clone(&s.handler)))
            .collect();

        for (regions, handler) in targets {
            let batch: Vec<VisibilityEntry> = entries
                .iter()
                .filter(|e| regions.contains(&e.region))
                .copied()
                .collect();
            if batch.is_empty() {
                continue;
            }
            (&mut *handler.borrow_mut())(&batch);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Number of subscriptions that have been released
    pub fn unsubscribe_calls(&self) -> usize {
        self.inner.borrow().unsubscribe_calls
    }

    /// Regions observed by live subscribers
    pub fn observed_regions(&self) -> BTreeSet<Region> {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .flat_map(|s| s.regions.iter().copied())
            .collect()
    }

    /// Configuration passed to the most recent `subscribe`
    pub fn last_config(&self) -> Option<ObserverConfig> {
        self.inner.borrow().last_config.clone()
    }
}

impl VisibilitySource for ManualSource {
    fn subscribe(
        &mut self,
        regions: &[Region],
        config: &ObserverConfig,
        on_batch: BatchHandler,
    ) -> Result<Box<dyn Subscription>, PortfolioError> {
        config.validate()?;

        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;

        let observed: BTreeSet<Region> = regions
            .iter()
            .copied()
            .filter(|r| !inner.missing.contains(r))
            .collect();

        inner.subscribers.push(ManualSubscriber {
            id,
            regions: observed,
            handler: Rc::new(RefCell::new(on_batch)),
        });
        inner.last_config = Some(config.clone());

        Ok(Box::new(ManualSubscription {
            id,
            source: Rc::downgrade(&self.inner),
            released: false,
        }))
    }
}

struct ManualSubscription {
    id: u64,
    source: Weak<RefCell<ManualInner>>,
    released: bool,
}

impl Subscription for ManualSubscription {
    fn unsubscribe(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(inner) = self.source.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.subscribers.retain(|s| s.id != self.id);
            inner.unsubscribe_calls += 1;
        }
    }
}

/// Scroll target that records requests instead of scrolling
#[derive(Clone, Default)]
pub struct ManualScroller {
    missing: BTreeSet<Region>,
    requests: Rc<RefCell<Vec<Region>>>,
    scrolled: Rc<Cell<usize>>,
}

impl ManualScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroller whose page lacks elements for `missing`
    pub fn with_missing(missing: &[Region]) -> Self {
        Self {
            missing: missing.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Every region passed to `scroll_to`, in call order
    pub fn requests(&self) -> Vec<Region> {
        self.requests.borrow().clone()
    }

    /// Number of requests that found a target
    pub fn scrolled(&self) -> usize {
        self.scrolled.get()
    }
}

impl ScrollTarget for ManualScroller {
    fn scroll_to(&self, region: Region) -> bool {
        self.requests.borrow_mut().push(region);
        if self.missing.contains(&region) {
            return false;
        }
        self.scrolled.set(self.scrolled.get() + 1);
        true
    }
}
