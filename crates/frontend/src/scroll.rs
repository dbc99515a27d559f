//! Browser viewport as a scroll source.

use gloo_events::EventListener;
use scroll_core::{ScrollError, ScrollListener, ScrollSource};
use web_sys::Window;

/// Scroll notifications from the global `window`.
///
/// Each subscription is a passive `scroll` listener; dropping the returned
/// [`EventListener`] removes it from the DOM.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowScrollSource;

impl ScrollSource for WindowScrollSource {
    type Subscription = EventListener;

    fn subscribe(&self, mut listener: ScrollListener) -> Result<EventListener, ScrollError> {
        let window = web_sys::window()
            .ok_or_else(|| ScrollError::SourceUnavailable("no global `window`".to_string()))?;

        let viewport = window.clone();
        Ok(EventListener::new(&window, "scroll", move |_event| {
            listener(vertical_offset(&viewport));
        }))
    }

    fn unsubscribe(&self, subscription: EventListener) {
        drop(subscription);
    }
}

/// Current vertical scroll offset in whole pixels.
///
/// Prefers `pageYOffset`, falling back to the root element's `scrollTop`
/// for browsers that report zero there.
fn vertical_offset(window: &Window) -> i32 {
    let page_offset = window.page_y_offset().unwrap_or_default();
    let offset = if page_offset != 0.0 {
        page_offset
    } else {
        window
            .document()
            .and_then(|doc| doc.document_element())
            .map(|root| f64::from(root.scroll_top()))
            .unwrap_or_default()
    };

    offset.round() as i32
}
