// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger predicates and configuration shared by every strategy.
//!
//! All functions here are pure. Positions follow the inverted scroll
//! convention: a normalized position of `1.0` means scrolled to the top and
//! `0.0` means scrolled to the bottom. World-space rectangles are y-up, so a
//! [`Rect`]'s `y0` is its bottom edge and `y1` its top edge.

use kurbo::Rect;

/// Smallest accepted margin fraction.
pub const MIN_MARGIN: f64 = -0.5;
/// Largest accepted margin fraction.
pub const MAX_MARGIN: f64 = 0.5;

/// Engine configuration.
///
/// ```rust
/// use understory_infinite_scroll::ScrollConfig;
///
/// let config = ScrollConfig::default().with_margin(0.9).with_fill_per_tick(4);
/// assert_eq!(config.margin(), 0.5);
/// assert_eq!(config.fill_per_tick(), 4);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    margin: f64,
    fill_per_tick: usize,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            margin: 0.1,
            fill_per_tick: 1,
        }
    }
}

impl ScrollConfig {
    /// Sets the margin fraction.
    ///
    /// Positive values extend the trigger zones past the viewport edges,
    /// negative values pull them inward. The value is clamped into
    /// `[MIN_MARGIN, MAX_MARGIN]`; NaN becomes `0.0`.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = clamp_margin(margin);
        self
    }

    /// Sets how many elements one tick may generate while filling (at least 1).
    #[must_use]
    pub fn with_fill_per_tick(mut self, count: usize) -> Self {
        self.fill_per_tick = count.max(1);
        self
    }

    /// The margin fraction.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// The per-tick generation limit during the eager fill.
    #[must_use]
    pub fn fill_per_tick(&self) -> usize {
        self.fill_per_tick
    }
}

fn clamp_margin(margin: f64) -> f64 {
    if margin.is_nan() {
        tracing::warn!("margin is NaN, using 0.0");
        return 0.0;
    }
    let clamped = margin.clamp(MIN_MARGIN, MAX_MARGIN);
    if clamped != margin {
        tracing::warn!(margin, clamped, "margin outside [-0.5, 0.5], clamping");
    }
    clamped
}

/// `true` while the content is shorter than the viewport plus both margins.
#[must_use]
pub fn should_generate(content_height: f64, viewport_height: f64, margin: f64) -> bool {
    content_height < viewport_height * (1.0 + margin * 2.0)
}

/// `true` when the normalized position is inside the top trigger zone.
#[must_use]
pub fn within_range_top(position: f64, margin: f64) -> bool {
    position > 1.0 - margin
}

/// `true` when the normalized position is inside the bottom trigger zone.
#[must_use]
pub fn within_range_bottom(position: f64, margin: f64) -> bool {
    position < margin
}

/// One-axis overlap between an element and the viewport.
///
/// Touching edges do not count as overlap.
#[must_use]
pub fn overlaps_vertically(element: Rect, viewport: Rect) -> bool {
    element.y1 > viewport.y0 && element.y0 < viewport.y1
}

/// World-space bands in which scrolling triggers generation or recycling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarginZones {
    /// Band along the viewport's top edge.
    pub top: Rect,
    /// Band along the viewport's bottom edge.
    pub bottom: Rect,
}

impl MarginZones {
    /// Computes the bands for a viewport.
    ///
    /// Each band is `viewport.height() * margin` tall. Positive margins place
    /// the bands outside the viewport, negative margins inside it.
    #[must_use]
    pub fn new(viewport: Rect, margin: f64) -> Self {
        let delta = viewport.height() * margin;
        Self {
            top: Rect::new(viewport.x0, viewport.y1, viewport.x1, viewport.y1 + delta).abs(),
            bottom: Rect::new(viewport.x0, viewport.y0 - delta, viewport.x1, viewport.y0).abs(),
        }
    }
}
