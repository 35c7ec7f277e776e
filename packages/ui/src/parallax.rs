//! Scroll-driven parallax wrapper.
//!
//! [`ParallaxTracker`] holds the offset math: it records the wrapped block's
//! document position once as a baseline, then maps every scroll position `p`
//! to `(p - baseline) * speed`. Replaying a position always yields the same
//! offset. The [`Parallax`] component wires the tracker to a window scroll
//! subscription and writes the result back as an inline transform.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::scroll::{window_scroll_y, ScrollSubscription};

const PARALLAX_CSS: Asset = asset!("/assets/styling/parallax.css");

/// Direction the wrapped block is translated along as the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallaxAxis {
    #[default]
    Vertical,
    Horizontal,
}

/// Pure offset math behind [`Parallax`].
///
/// Unmeasured trackers produce no offset at all, so scroll notifications that
/// arrive before the block is in the document are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxTracker {
    speed: f64,
    axis: ParallaxAxis,
    baseline: Option<f64>,
}

impl ParallaxTracker {
    pub fn new(speed: f64, axis: ParallaxAxis) -> Self {
        Self {
            speed,
            axis,
            baseline: None,
        }
    }

    /// Records the block's document position. Only the first call counts;
    /// later calls keep the original zero-reference.
    pub fn measure(&mut self, document_position: f64) {
        if self.baseline.is_none() {
            self.baseline = Some(document_position);
        }
    }

    pub fn is_measured(&self) -> bool {
        self.baseline.is_some()
    }

    /// Translation distance for a scroll position, or `None` before the
    /// baseline is known. Zero exactly when `scroll_position` equals the
    /// baseline.
    pub fn offset(&self, scroll_position: f64) -> Option<f64> {
        self.baseline
            .map(|baseline| (scroll_position - baseline) * self.speed)
    }

    /// CSS transform value for a scroll position, along the configured axis.
    pub fn transform(&self, scroll_position: f64) -> Option<String> {
        self.offset(scroll_position).map(|offset| match self.axis {
            ParallaxAxis::Vertical => format!("translateY({offset}px)"),
            ParallaxAxis::Horizontal => format!("translateX({offset}px)"),
        })
    }
}

/// Wraps content in a block that drifts against the page scroll.
///
/// The block measures its own document position once on mount. Until that
/// measurement lands, scroll notifications leave it untouched.
#[component]
pub fn Parallax(
    #[props(default = 0.1)] speed: f64,
    #[props(default)] axis: ParallaxAxis,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let mut inline_style = use_signal(String::new);
    let tracker = use_hook(|| Rc::new(RefCell::new(ParallaxTracker::new(speed, axis))));
    let subscription = use_hook(|| Rc::new(RefCell::new(Option::<ScrollSubscription>::None)));

    use_effect({
        let tracker = tracker.clone();
        let subscription = subscription.clone();
        move || {
            let tracker = tracker.clone();
            let handler = move |position: f64| {
                if let Some(transform) = tracker.borrow().transform(position) {
                    let next = format!("transform: {transform}");
                    if *inline_style.peek() != next {
                        inline_style.set(next);
                    }
                }
            };
            *subscription.borrow_mut() = ScrollSubscription::attach(handler);
        }
    });

    // Listener removal rides on the subscription drop.
    use_drop({
        let subscription = subscription.clone();
        move || {
            subscription.borrow_mut().take();
        }
    });

    let onmounted = {
        let tracker = tracker.clone();
        move |evt: Event<MountedData>| {
            let tracker = tracker.clone();
            async move {
                if let Ok(rect) = evt.data().get_client_rect().await {
                    let position = window_scroll_y();
                    let transform = {
                        let mut tracker = tracker.borrow_mut();
                        tracker.measure(rect.origin.y + position);
                        tracker.transform(position)
                    };
                    // Apply the resting offset without waiting for a scroll.
                    if let Some(transform) = transform {
                        inline_style.set(format!("transform: {transform}"));
                    }
                }
            }
        }
    };

    rsx! {
        document::Stylesheet { href: PARALLAX_CSS }
        div {
            class: "parallax {class}",
            style: "{inline_style}",
            onmounted: onmounted,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_linear_in_scroll_position() {
        let mut tracker = ParallaxTracker::new(0.25, ParallaxAxis::Vertical);
        tracker.measure(800.0);

        let (p1, p2) = (400.0, 1200.0);
        let o1 = tracker.offset(p1).unwrap();
        let o2 = tracker.offset(p2).unwrap();
        assert_eq!(o2 - o1, (p2 - p1) * 0.25);
    }

    #[test]
    fn test_offset_at_baseline_is_zero_for_any_speed() {
        for speed in [0.25, 0.5, -0.5, 2.0] {
            let mut tracker = ParallaxTracker::new(speed, ParallaxAxis::Vertical);
            tracker.measure(640.0);
            assert_eq!(tracker.offset(640.0), Some(0.0));
        }
    }

    #[test]
    fn test_negative_speed_reverses_direction() {
        let mut tracker = ParallaxTracker::new(-0.5, ParallaxAxis::Vertical);
        tracker.measure(0.0);
        assert_eq!(tracker.offset(100.0), Some(-50.0));
    }

    #[test]
    fn test_unmeasured_tracker_yields_nothing() {
        let tracker = ParallaxTracker::new(0.5, ParallaxAxis::Vertical);
        assert!(!tracker.is_measured());
        assert_eq!(tracker.offset(300.0), None);
        assert_eq!(tracker.transform(300.0), None);
    }

    #[test]
    fn test_first_measurement_wins() {
        let mut tracker = ParallaxTracker::new(0.5, ParallaxAxis::Vertical);
        tracker.measure(200.0);
        tracker.measure(900.0);
        assert_eq!(tracker.offset(200.0), Some(0.0));
    }

    #[test]
    fn test_transform_follows_axis() {
        let mut vertical = ParallaxTracker::new(0.5, ParallaxAxis::Vertical);
        vertical.measure(0.0);
        assert_eq!(
            vertical.transform(100.0).as_deref(),
            Some("translateY(50px)")
        );

        let mut horizontal = ParallaxTracker::new(0.5, ParallaxAxis::Horizontal);
        horizontal.measure(0.0);
        assert_eq!(
            horizontal.transform(100.0).as_deref(),
            Some("translateX(50px)")
        );
    }

    #[test]
    fn test_replaying_a_position_is_idempotent() {
        let mut tracker = ParallaxTracker::new(0.5, ParallaxAxis::Vertical);
        tracker.measure(400.0);
        assert_eq!(tracker.offset(1000.0), tracker.offset(1000.0));
    }
}
