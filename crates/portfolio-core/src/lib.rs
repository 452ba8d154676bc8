//! Portfolio page core: scroll spy, content, and markup
//!
//! This crate holds everything that does not need a browser:
//! - `tracker` / `score`: pick the most visible page region from observer batches
//! - `source` / `spy`: wire the tracker to a visibility source and a scroll target
//! - `observer`: intersection observer margins and thresholds
//! - `content` / `markup`: static page data and its HTML rendering
//!
//! The wasm app in `apps/portfolio-web/wasm` supplies DOM-backed
//! implementations of the `source` traits.

pub mod content;
pub mod error;
pub mod markup;
pub mod observer;
pub mod region;
pub mod score;
pub mod source;
pub mod spy;
pub mod tracker;

pub use error::PortfolioError;
pub use observer::ObserverConfig;
pub use region::Region;
pub use score::{ScoreTable, VisibilityEntry};
pub use source::{BatchHandler, ScrollTarget, Subscription, VisibilitySource};
pub use spy::ScrollSpy;
pub use tracker::SectionTracker;
