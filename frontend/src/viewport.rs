//! Access to the browser viewport.
//!
//! Navigation code only needs two things from the page: where the user is
//! scrolled to, and a way to smooth-scroll to a section anchor. Both sit
//! behind [`Viewport`] so the navigation controller can be driven by a fake
//! outside the browser.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions, Window};

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Vertical offset past which the navigation bar switches to its solid look.
pub const SCROLLED_THRESHOLD: f64 = 100.0;

/// Snapshot of the page's vertical scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn at_offset(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Strictly greater than the threshold: sitting exactly on it is not scrolled.
    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    /// Fraction of the scrollable height already scrolled, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if !scrollable.is_finite() || scrollable <= 0.0 {
            return 0.0;
        }
        let progress = self.offset / scrollable;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }
}

pub trait Viewport {
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Smooth-scrolls the element with `id` into view.
    /// Returns `false` when the document has no such element.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// The real browser window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_metrics(&self) -> ScrollMetrics {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let offset = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);

        ScrollMetrics {
            offset,
            document_height,
            viewport_height,
        }
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// Listener on `window` that is removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// `None` outside a browser or if the listener could not be attached.
    pub fn add(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
