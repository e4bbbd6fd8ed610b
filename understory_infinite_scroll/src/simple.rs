// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{ScrollCore, ScrollError, ScrollHost, ScrollStrategy};

/// Baseline strategy: append one element whenever the bottom zone is reached.
///
/// Elements are never hidden, recycled, or removed.
#[derive(Copy, Clone, Debug, Default)]
pub struct SimpleGrowStrategy;

impl<H: ScrollHost> ScrollStrategy<H> for SimpleGrowStrategy {
    fn evaluate(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError> {
        if core.within_range_bottom() {
            core.generate_new_element()?;
        }
        Ok(())
    }
}
