//! Scroll-direction detection for the dashboard navbar.
//!
//! This crate holds the platform-independent part of the shrinking navbar:
//! the [`ScrollState`] transition, the [`ScrollSource`] seam a host plugs a
//! viewport into, and the [`ScrollShrinkDetector`] that ties the two
//! together for the lifetime of a mounted view.

mod detector;
mod error;
mod source;
mod state;

pub use detector::ScrollShrinkDetector;
pub use error::ScrollError;
pub use source::{ManualScrollSource, ManualSubscription, ScrollListener, ScrollSource};
pub use state::ScrollState;
