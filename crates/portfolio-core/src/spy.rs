//! Scroll spy: tracker wired to a visibility source and a scroll target
//!
//! All state sits behind `Rc<RefCell<_>>`. Batches and clicks arrive one at a
//! time on the UI event loop, so each call sees and mutates the tracker
//! without interleaving.

use crate::error::PortfolioError;
use crate::observer::ObserverConfig;
use crate::region::Region;
use crate::score::{ScoreTable, VisibilityEntry};
use crate::source::{BatchHandler, ScrollTarget, Subscription, VisibilitySource};
use crate::tracker::SectionTracker;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

type ChangeListener = Rc<RefCell<Box<dyn FnMut(Region)>>>;

struct SpyState {
    tracker: SectionTracker,
    listeners: Vec<ChangeListener>,
    disposed: bool,
    /// Set while listeners run; changes made by a listener queue in `pending`
    notifying: bool,
    pending: VecDeque<Region>,
}

impl SpyState {
    fn on_batch(state: &Rc<RefCell<SpyState>>, entries: &[VisibilityEntry]) {
        let changed = {
            let mut state = state.borrow_mut();
            if state.disposed {
                return;
            }
            state.tracker.apply_batch(entries)
        };
        if let Some(region) = changed {
            SpyState::notify(state, region);
        }
    }

    // Listeners run with the state released so they can read the spy or
    // jump elsewhere. A change raised from inside a listener is delivered
    // after the current round finishes, never re-entrantly.
    fn notify(state: &Rc<RefCell<SpyState>>, region: Region) {
        {
            let mut state = state.borrow_mut();
            if state.notifying {
                state.pending.push_back(region);
                return;
            }
            state.notifying = true;
        }

        let mut next = Some(region);
        while let Some(region) = next {
            let listeners: Vec<ChangeListener> = state.borrow().listeners.clone();
            for listener in listeners {
                (&mut *listener.borrow_mut())(region);
            }
            let mut state = state.borrow_mut();
            next = if state.disposed {
                None
            } else {
                state.pending.pop_front()
            };
        }

        let mut state = state.borrow_mut();
        state.notifying = false;
        state.pending.clear();
    }
}

/// Tracks the most visible page region and publishes changes
pub struct ScrollSpy {
    state: Rc<RefCell<SpyState>>,
    subscription: Option<Box<dyn Subscription>>,
    scroller: Box<dyn ScrollTarget>,
}

impl ScrollSpy {
    /// Subscribe to every region on `source` and start tracking.
    ///
    /// The active section starts at [`Region::Home`].
    pub fn attach<S>(
        source: &mut S,
        scroller: Box<dyn ScrollTarget>,
        config: &ObserverConfig,
    ) -> Result<Self, PortfolioError>
    where
        S: VisibilitySource + ?Sized,
    {
        let state = Rc::new(RefCell::new(SpyState {
            tracker: SectionTracker::default(),
            listeners: Vec::new(),
            disposed: false,
            notifying: false,
            pending: VecDeque::new(),
        }));

        let weak: Weak<RefCell<SpyState>> = Rc::downgrade(&state);
        let handler: BatchHandler = Box::new(move |entries: &[VisibilityEntry]| {
            if let Some(state) = weak.upgrade() {
                SpyState::on_batch(&state, entries);
            }
        });

        let subscription = source.subscribe(&Region::ALL, config, handler)?;
        info!(root_margin = %config.root_margin(), "scroll spy attached");

        Ok(Self {
            state,
            subscription: Some(subscription),
            scroller,
        })
    }

    /// Currently highlighted region
    pub fn active(&self) -> Region {
        self.state.borrow().tracker.active()
    }

    /// Snapshot of the current visibility scores
    pub fn scores(&self) -> ScoreTable {
        *self.state.borrow().tracker.scores()
    }

    pub fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    /// Call `listener` with the new region whenever the active section changes
    pub fn on_change<F>(&self, listener: F)
    where
        F: FnMut(Region) + 'static,
    {
        let listener: Box<dyn FnMut(Region)> = Box::new(listener);
        self.state
            .borrow_mut()
            .listeners
            .push(Rc::new(RefCell::new(listener)));
    }

    /// Scroll to `region` and make it active right away.
    ///
    /// The region becomes active even when it has no element to scroll to.
    /// The next visibility batch recomputes the active section as usual.
    pub fn jump_to(&self, region: Region) -> Result<(), PortfolioError> {
        if self.is_disposed() {
            return Err(PortfolioError::Disposed);
        }

        if !self.scroller.scroll_to(region) {
            debug!(region = %region, "no scroll target");
        }

        let changed = self.state.borrow_mut().tracker.force_active(region);
        if let Some(region) = changed {
            SpyState::notify(&self.state, region);
        }
        Ok(())
    }

    /// Release the subscription. Later batches and jumps have no effect.
    pub fn dispose(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
            info!("scroll spy disposed");
        }
        let mut state = self.state.borrow_mut();
        state.disposed = true;
        state.listeners.clear();
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        self.dispose();
    }
}
