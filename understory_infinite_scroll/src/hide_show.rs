// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Over-allocate and toggle: every generated element stays alive and is shown
//! or hidden depending on whether it overlaps the viewport.
//!
//! Memory grows with scroll distance because nothing is ever released. The
//! [`RecyclePoolStrategy`](crate::RecyclePoolStrategy) trades that for a
//! fixed pool at the cost of per-item height bookkeeping.

use kurbo::Rect;

use crate::geometry::overlaps_vertically;
use crate::{EagerFill, ScrollCore, ScrollError, ScrollHost, ScrollStrategy, ViewId, Visibility};

/// Strategy that appends at the bottom and toggles visibility of every element.
#[derive(Clone, Debug, Default)]
pub struct HideShowStrategy {
    /// Every generated element, in generation order.
    elements: Vec<ViewId>,
    /// Viewport rectangle captured once, on start.
    viewport: Option<Rect>,
}

impl HideShowStrategy {
    /// Creates an empty strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All elements generated so far.
    #[must_use]
    pub fn elements(&self) -> &[ViewId] {
        &self.elements
    }

    /// The cached viewport rectangle, once captured.
    #[must_use]
    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// Applies [`Visibility`] to every element from its overlap with the
    /// cached viewport.
    ///
    /// Returns the number of visible elements.
    pub fn update_visibility<H: ScrollHost>(&mut self, core: &mut ScrollCore<H>) -> usize {
        let viewport = *self
            .viewport
            .get_or_insert_with(|| core.host().viewport_world_rect());
        let host = core.host_mut();
        let mut visible = 0;
        for &id in &self.elements {
            let overlaps = overlaps_vertically(host.child_world_rect(id), viewport);
            host.set_visibility(id, Visibility::from_overlap(overlaps));
            visible += usize::from(overlaps);
        }
        visible
    }
}

impl<H: ScrollHost> ScrollStrategy<H> for HideShowStrategy {
    fn start(&mut self, core: &mut ScrollCore<H>) {
        self.viewport = Some(core.host().viewport_world_rect());
    }

    fn tick(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError> {
        let elements = &mut self.elements;
        EagerFill::from_config(core.config()).run(core, |_, generated| {
            elements.push(generated.view);
        })?;
        Ok(())
    }

    fn evaluate(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError> {
        // Still filling; the tick owns generation until the content is tall enough.
        if core.should_generate_element() {
            return Ok(());
        }
        if core.within_range_bottom() {
            let generated = core.generate_new_element()?;
            self.elements.push(generated.view);
        }
        let visible = self.update_visibility(core);
        tracing::trace!(visible, total = self.elements.len(), "updated visibility");
        Ok(())
    }
}
