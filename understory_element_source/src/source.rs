// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random payload generation over a lazily split text asset.

use std::sync::Arc;

use peniko::Color;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{DataError, ElementData, ImageHandle};

/// Generates [`ElementData`] on demand.
///
/// The text asset is split on the configured separator the first time
/// [`get`](Self::get) is called; empty pieces are discarded. Each call then
/// picks, independently and uniformly with replacement:
///
/// - one fragment (trimmed of surrounding whitespace),
/// - one color, if any were configured (opaque white otherwise),
/// - one shape, fill, and graphic handle, each absent when its pool is empty.
///
/// Every instance owns its own cache and RNG, so independent sources never
/// share state.
#[derive(Clone, Debug)]
pub struct DataSource {
    asset: Option<Arc<str>>,
    separator: char,
    colors: Vec<Color>,
    shapes: Vec<ImageHandle>,
    fills: Vec<ImageHandle>,
    graphics: Vec<ImageHandle>,
    /// `None` until the first load attempt succeeds in finding an asset.
    fragments: Option<Vec<Box<str>>>,
    rng: StdRng,
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource {
    /// Creates an unconfigured source seeded from OS entropy.
    ///
    /// Without an asset, [`get`](Self::get) fails with
    /// [`DataError::Configuration`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            asset: None,
            separator: '\n',
            colors: Vec::new(),
            shapes: Vec::new(),
            fills: Vec::new(),
            graphics: Vec::new(),
            fragments: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Sets the raw text asset.
    #[must_use]
    pub fn with_asset(mut self, asset: impl Into<Arc<str>>) -> Self {
        self.set_asset(Some(asset.into()));
        self
    }

    /// Sets the fragment separator (defaults to `'\n'`).
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self.fragments = None;
        self
    }

    /// Sets the pool of primary colors.
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Sets the pool of shape images.
    #[must_use]
    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = ImageHandle>) -> Self {
        self.shapes = shapes.into_iter().collect();
        self
    }

    /// Sets the pool of fill images.
    #[must_use]
    pub fn with_fills(mut self, fills: impl IntoIterator<Item = ImageHandle>) -> Self {
        self.fills = fills.into_iter().collect();
        self
    }

    /// Sets the pool of graphic images.
    #[must_use]
    pub fn with_graphics(mut self, graphics: impl IntoIterator<Item = ImageHandle>) -> Self {
        self.graphics = graphics.into_iter().collect();
        self
    }

    /// Reseeds the RNG so the sequence of generated payloads is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replaces (or removes) the text asset and discards any loaded fragments.
    ///
    /// The next [`get`](Self::get) reloads from the new asset. This is the
    /// only way to recover from a [`DataError`].
    pub fn set_asset(&mut self, asset: Option<Arc<str>>) {
        self.asset = asset;
        self.fragments = None;
    }

    /// Returns `true` once the fragment cache has been populated.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.fragments.is_some()
    }

    /// Number of loaded fragments, or `None` before the first load.
    #[must_use]
    pub fn fragment_count(&self) -> Option<usize> {
        self.fragments.as_ref().map(Vec::len)
    }

    /// Loaded fragments (untrimmed), or `None` before the first load.
    #[must_use]
    pub fn fragments(&self) -> Option<&[Box<str>]> {
        self.fragments.as_deref()
    }

    /// Generates a fresh payload.
    ///
    /// # Errors
    ///
    /// - [`DataError::Configuration`] if no asset is configured.
    /// - [`DataError::EmptyData`] if the asset holds no fragments. Once an
    ///   asset has been found empty it stays empty until [`set_asset`](Self::set_asset).
    pub fn get(&mut self) -> Result<ElementData, DataError> {
        let fragments = match &mut self.fragments {
            Some(fragments) => fragments,
            unloaded => unloaded.insert(load(self.asset.as_deref(), self.separator)?),
        };
        let text = fragments
            .choose(&mut self.rng)
            .ok_or(DataError::EmptyData)?
            .trim();

        let primary = self
            .colors
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Color::WHITE);
        let shape = self.shapes.choose(&mut self.rng).copied();
        let fill = self.fills.choose(&mut self.rng).copied();
        let graphic = self.graphics.choose(&mut self.rng).copied();

        Ok(ElementData::new(text, primary, shape, fill, graphic))
    }
}

/// Splits `asset` into its non-empty fragments.
fn load(asset: Option<&str>, separator: char) -> Result<Vec<Box<str>>, DataError> {
    let Some(asset) = asset else {
        return Err(DataError::Configuration {
            missing: "text asset",
        });
    };
    let fragments: Vec<Box<str>> = asset
        .split(separator)
        .filter(|fragment| !fragment.is_empty())
        .map(Box::from)
        .collect();
    if fragments.is_empty() {
        tracing::warn!(len = asset.len(), "text asset produced no fragments");
    } else {
        tracing::debug!(count = fragments.len(), "loaded text fragments");
    }
    Ok(fragments)
}
