//! Window scroll helpers shared by the header and the parallax wrapper.
//!
//! Everything here is browser-only; native builds get no-op stubs so the
//! crate still compiles and its tests run off-wasm.

use content::Section;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Current vertical scroll position of the page, in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_scroll_y() -> f64 {
    0.0
}

/// Live `scroll` listener on the window. Dropping the subscription removes
/// the listener, so holders tie listener lifetime to component lifetime.
#[cfg(target_arch = "wasm32")]
pub struct ScrollSubscription {
    callback: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollSubscription {
    /// Attaches `handler` to window scroll events. The handler is invoked
    /// once immediately with the current position so subscribers start in
    /// sync even when the page loads mid-scroll.
    pub fn attach(mut handler: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        handler(window_scroll_y());
        let callback = Closure::<dyn FnMut()>::new(move || handler(window_scroll_y()));
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct ScrollSubscription;

#[cfg(not(target_arch = "wasm32"))]
impl ScrollSubscription {
    pub fn attach(_handler: impl FnMut(f64) + 'static) -> Option<Self> {
        None
    }
}

/// Smooth-scrolls the viewport to a section's anchor element. No-op when the
/// element is not in the document yet.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_section(section: Section) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(section.id()) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_section(_section: Section) {}
