//! Custom hooks.

use scroll_core::{ScrollShrinkDetector, ScrollState};
use yew::prelude::*;

use crate::scroll::WindowScrollSource;

/// Track the window scroll direction for the lifetime of the calling component.
///
/// The detector attaches when the component mounts and is dropped, releasing
/// its `scroll` listener, when the component unmounts.
#[hook]
pub fn use_scroll_shrink() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let mut detector =
                ScrollShrinkDetector::with_callback(WindowScrollSource, move |next| {
                    state.set(next);
                });

            if let Err(e) = detector.attach() {
                log::warn!("Navbar scroll tracking disabled: {}", e);
            }

            move || drop(detector)
        });
    }

    *state
}
