// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_element_source::DataError;

use crate::{GeneratedElement, ScrollConfig, ScrollCore, ScrollHost};

/// The fill phase shared by every strategy.
///
/// While [`ScrollCore::should_generate_element`] holds, each call to
/// [`run`](Self::run) generates up to `per_tick` elements. With the default of
/// one element per tick, the cost of filling is spread over as many frames as
/// it takes; larger values fill faster at the price of longer frames.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EagerFill {
    per_tick: usize,
}

impl Default for EagerFill {
    fn default() -> Self {
        Self { per_tick: 1 }
    }
}

impl EagerFill {
    /// Creates a fill that generates at most `per_tick` elements per call (at least 1).
    #[must_use]
    pub fn new(per_tick: usize) -> Self {
        Self {
            per_tick: per_tick.max(1),
        }
    }

    /// Uses [`ScrollConfig::fill_per_tick`].
    #[must_use]
    pub fn from_config(config: &ScrollConfig) -> Self {
        Self::new(config.fill_per_tick())
    }

    /// Generates elements while the content is short, handing each one to
    /// `on_generated`. Returns how many were generated.
    ///
    /// The predicate is re-checked before every generation, so a host that
    /// lays out synchronously stops the loop as soon as the content is tall
    /// enough.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first [`DataError`]; elements generated before
    /// it have already been handed to `on_generated`.
    pub fn run<H, F>(
        &self,
        core: &mut ScrollCore<H>,
        mut on_generated: F,
    ) -> Result<usize, DataError>
    where
        H: ScrollHost,
        F: FnMut(&mut ScrollCore<H>, GeneratedElement),
    {
        let mut generated = 0;
        while generated < self.per_tick && core.should_generate_element() {
            let element = core.generate_new_element()?;
            on_generated(core, element);
            generated += 1;
        }
        Ok(generated)
    }
}
