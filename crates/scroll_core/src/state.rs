//! Scroll state tracked for a single host view.

use serde::{Deserialize, Serialize};

/// Last observed scroll position plus the derived shrink signal.
///
/// `is_shrunk` only reflects the most recent notification: it is true when
/// the page moved down since the previous one and false for upward movement
/// or no movement at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Most recent vertical offset in pixels, never below zero.
    pub last_offset: u32,
    /// Whether the navbar should render in its compact form.
    pub is_shrunk: bool,
}

impl ScrollState {
    /// Create the state a freshly mounted view starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one scroll notification carrying the raw vertical offset.
    ///
    /// The comparison runs against the raw value; only the stored offset is
    /// clamped. Overscroll past the top (negative offsets) therefore never
    /// counts as scrolling down.
    pub fn observe(self, raw_offset: i32) -> Self {
        Self {
            is_shrunk: i64::from(raw_offset) > i64::from(self.last_offset),
            last_offset: u32::try_from(raw_offset).unwrap_or(0),
        }
    }
}
