// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed pool of views sliding over an unbounded, append-only data log.
//!
//! Three sequences share one index space:
//!
//! - `pool`: the views, in on-screen order, top to bottom.
//! - `data_log`: every payload seen so far. Index `i` is the `i`-th item of
//!   the infinite list. It only grows.
//! - `height_log`: parallel to `data_log`. Slot `i` records the rendered
//!   height of item `i` the last time it left the window through the top.
//!
//! Between evaluations, `pool[k]` is bound to `data_log[top_index + k]`.
//!
//! When the bottom zone is reached, the top view's height is recorded, the
//! view moves to the end of the pool and is rebound to the next item, and the
//! content shifts down by the recorded height so nothing visibly jumps. The
//! top zone reverses this, reading back the recorded height. An item can only
//! re-enter from the top after having left through the top, so a read always
//! follows a write; [`ScrollError::UnrecordedHeight`] reports a broken host
//! that violates this.

use understory_element_source::ElementData;

use crate::{
    EagerFill, GeneratedElement, ScrollCore, ScrollError, ScrollHost, ScrollStrategy, ViewId,
};

/// Strategy that recycles a fixed pool of views.
#[derive(Clone, Debug, Default)]
pub struct RecyclePoolStrategy {
    pool: Vec<ViewId>,
    data_log: Vec<ElementData>,
    height_log: Vec<Option<f64>>,
    top_index: usize,
}

impl RecyclePoolStrategy {
    /// Creates an empty strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The views, in on-screen order.
    #[must_use]
    pub fn pool(&self) -> &[ViewId] {
        &self.pool
    }

    /// Every payload discovered so far.
    #[must_use]
    pub fn data_log(&self) -> &[ElementData] {
        &self.data_log
    }

    /// Recorded heights, parallel to [`data_log`](Self::data_log).
    #[must_use]
    pub fn height_log(&self) -> &[Option<f64>] {
        &self.height_log
    }

    /// Data log index bound to `pool[0]`.
    #[must_use]
    pub fn top_index(&self) -> usize {
        self.top_index
    }

    /// The payload currently bound to `pool[slot]`.
    #[must_use]
    pub fn bound_data(&self, slot: usize) -> Option<&ElementData> {
        if slot >= self.pool.len() {
            return None;
        }
        self.data_log.get(self.top_index + slot)
    }

    /// Slides the window up by one item, if there is an item above it.
    ///
    /// Returns `Ok(false)` when already at the first item.
    ///
    /// # Errors
    ///
    /// [`ScrollError::EmptyPool`] or [`ScrollError::UnrecordedHeight`]; the
    /// strategy is left unchanged.
    pub fn recycle_to_top<H: ScrollHost>(
        &mut self,
        core: &mut ScrollCore<H>,
    ) -> Result<bool, ScrollError> {
        if self.top_index == 0 {
            return Ok(false);
        }
        if self.pool.is_empty() {
            return Err(ScrollError::EmptyPool);
        }
        let index = self.top_index - 1;
        let height = self.height_log[index].ok_or(ScrollError::UnrecordedHeight { index })?;

        let view = self.move_element(core, self.pool.len() - 1, 0);
        self.top_index = index;
        core.host_mut().bind_view(view, &self.data_log[index]);
        core.host_mut().shift_content(height);
        tracing::trace!(view = view.0, index, height, "recycled view to top");
        Ok(true)
    }

    /// Slides the window down by one item, generating it if it is new.
    ///
    /// # Errors
    ///
    /// [`ScrollError::EmptyPool`] before anything changes, or
    /// [`ScrollError::Data`] if a new item could not be generated (the window
    /// is left in place).
    pub fn recycle_to_bottom<H: ScrollHost>(
        &mut self,
        core: &mut ScrollCore<H>,
    ) -> Result<(), ScrollError> {
        if self.pool.is_empty() {
            return Err(ScrollError::EmptyPool);
        }
        let bottom_index = self.top_index + self.pool.len();
        if bottom_index >= self.data_log.len() {
            let data = core.next_data()?;
            self.data_log.push(data);
            self.height_log.push(None);
        }

        let view = self.pool[0];
        // Measure before moving: the height is only known while laid out in place.
        let height = core.host().child_height(view);
        self.move_element(core, 0, self.pool.len());
        self.height_log[self.top_index] = Some(height);
        self.top_index += 1;
        core.host_mut().bind_view(view, &self.data_log[bottom_index]);
        core.host_mut().shift_content(-height);
        tracing::trace!(view = view.0, index = bottom_index, height, "recycled view to bottom");
        Ok(())
    }

    /// Moves the view at `from` so that it lands before the element currently
    /// at `to` (`to == pool.len()` means the end), mirroring the move in the
    /// host's sibling order. Returns the moved view.
    fn move_element<H: ScrollHost>(
        &mut self,
        core: &mut ScrollCore<H>,
        from: usize,
        to: usize,
    ) -> ViewId {
        let to = if to > from { to - 1 } else { to };
        let view = self.pool.remove(from);
        self.pool.insert(to, view);
        core.host_mut().set_sibling_index(view, to);
        view
    }

    fn track<H: ScrollHost>(&mut self, core: &mut ScrollCore<H>, generated: GeneratedElement) {
        let slot = self.top_index + self.pool.len();
        self.pool.push(generated.view);
        if slot < self.data_log.len() {
            // The viewport grew after scrolling down: the new last view must
            // show the item that already follows the window.
            core.host_mut().bind_view(generated.view, &self.data_log[slot]);
            tracing::debug!(slot, "refill bound to logged item");
        } else {
            self.data_log.push(generated.data);
            self.height_log.push(None);
        }
    }
}

impl<H: ScrollHost> ScrollStrategy<H> for RecyclePoolStrategy {
    fn tick(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError> {
        EagerFill::from_config(core.config())
            .run(core, |core, generated| self.track(core, generated))?;
        Ok(())
    }

    fn evaluate(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError> {
        if core.should_generate_element() {
            return Ok(());
        }
        // Both zones are re-read after each move, since a move shifts the content.
        // At margin 0.5 the zones meet, so a top move can land in the bottom
        // zone and be undone within the same evaluation.
        if core.within_range_top() {
            self.recycle_to_top(core)?;
        }
        if core.within_range_bottom() {
            self.recycle_to_bottom(core)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use understory_element_source::DataSource;

    use super::*;
    use crate::{HeadlessHost, ScrollConfig};

    fn filled() -> (ScrollCore<HeadlessHost>, RecyclePoolStrategy) {
        let source = DataSource::new()
            .with_asset("a\nb\nc\nd\ne\nf\ng\nh")
            .with_seed(4);
        let mut core = ScrollCore::new(HeadlessHost::new(300.0), source, ScrollConfig::default());
        let mut strategy = RecyclePoolStrategy::new();
        while core.should_generate_element() {
            strategy.tick(&mut core).unwrap();
        }
        (core, strategy)
    }

    #[test]
    fn fill_builds_parallel_logs() {
        let (core, strategy) = filled();
        // 300 * 1.2 = 360 needs eight 50-tall rows.
        assert_eq!(strategy.pool().len(), 8);
        assert_eq!(strategy.data_log().len(), 8);
        assert!(strategy.height_log().iter().all(Option::is_none));
        assert_eq!(core.host().sibling_order(), strategy.pool());
    }

    #[test]
    fn move_element_accounts_for_removal_shift() {
        let (mut core, mut strategy) = filled();
        let before = strategy.pool().to_vec();

        let moved = strategy.move_element(&mut core, 0, before.len());
        assert_eq!(moved, before[0]);
        assert_eq!(strategy.pool().last(), Some(&before[0]));
        assert_eq!(strategy.pool()[0], before[1]);

        let moved = strategy.move_element(&mut core, before.len() - 1, 0);
        assert_eq!(moved, before[0]);
        assert_eq!(strategy.pool(), &before[..]);
        assert_eq!(core.host().sibling_order(), &before[..]);
    }

    #[test]
    fn top_at_first_item_is_a_no_op() {
        let (mut core, mut strategy) = filled();
        let offset = core.host().offset();
        assert!(!strategy.recycle_to_top(&mut core).unwrap());
        assert_eq!(strategy.top_index(), 0);
        assert_eq!(core.host().offset(), offset);
    }

    #[test]
    fn unrecorded_height_is_reported_without_mutation() {
        let (mut core, mut strategy) = filled();
        strategy.recycle_to_bottom(&mut core).unwrap();
        // Simulate a host that lost the write.
        strategy.height_log[0] = None;
        let pool = strategy.pool().to_vec();

        assert_eq!(
            strategy.recycle_to_top(&mut core),
            Err(ScrollError::UnrecordedHeight { index: 0 })
        );
        assert_eq!(strategy.top_index(), 1);
        assert_eq!(strategy.pool(), &pool[..]);
    }

    #[test]
    fn empty_pool_is_rejected() {
        let source = DataSource::new().with_asset("x");
        let mut core = ScrollCore::new(HeadlessHost::new(300.0), source, ScrollConfig::default());
        let mut strategy = RecyclePoolStrategy::new();
        assert_eq!(strategy.recycle_to_bottom(&mut core), Err(ScrollError::EmptyPool));
        strategy.top_index = 1;
        assert_eq!(strategy.recycle_to_top(&mut core), Err(ScrollError::EmptyPool));
        assert!(strategy.data_log().is_empty());
    }

    #[test]
    fn refill_after_scrolling_keeps_the_window_contiguous() {
        let (mut core, mut strategy) = filled();
        core.host_mut().scroll_to_bottom();
        strategy.recycle_to_bottom(&mut core).unwrap();
        strategy.recycle_to_bottom(&mut core).unwrap();
        strategy.recycle_to_top(&mut core).unwrap();
        // top_index = 1, window covers 1..9, log holds 0..10.
        assert_eq!(strategy.data_log().len(), 10);

        core.host_mut().set_viewport_height(400.0);
        while core.should_generate_element() {
            strategy.tick(&mut core).unwrap();
        }
        assert!(strategy.pool().len() > 8);
        for slot in 0..strategy.pool().len() {
            let view = core.host().view(strategy.pool()[slot]);
            assert_eq!(view.text, strategy.bound_data(slot).unwrap().text());
        }
    }
}
