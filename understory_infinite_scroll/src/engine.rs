// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared engine plumbing: geometry predicates, generation, and lifecycle.

use understory_element_source::{DataError, DataSource, ElementData};

use crate::geometry::{self, MarginZones};
use crate::{EagerFill, ScrollConfig, ScrollError, ScrollHost, SubscriptionId, ViewId};

/// A freshly instantiated view and the data it was bound to.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedElement {
    /// The new child of the content container.
    pub view: ViewId,
    /// The payload bound onto it.
    pub data: ElementData,
}

/// Host, data source, and configuration shared by every strategy.
///
/// The predicates read live host geometry on every call and have no side
/// effects.
#[derive(Debug)]
pub struct ScrollCore<H> {
    host: H,
    source: DataSource,
    config: ScrollConfig,
}

impl<H: ScrollHost> ScrollCore<H> {
    /// Bundles a host with its data source and configuration.
    #[must_use]
    pub fn new(host: H, source: DataSource, config: ScrollConfig) -> Self {
        Self {
            host,
            source,
            config,
        }
    }

    /// The host surface.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host surface.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The data source.
    #[must_use]
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Mutable access to the data source, e.g. to reconfigure its asset.
    pub fn source_mut(&mut self) -> &mut DataSource {
        &mut self.source
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// `true` while the content is shorter than the viewport plus both margins.
    #[must_use]
    pub fn should_generate_element(&self) -> bool {
        geometry::should_generate(
            self.host.content_height(),
            self.host.viewport_height(),
            self.config.margin(),
        )
    }

    /// `true` when scrolled into the top trigger zone.
    #[must_use]
    pub fn within_range_top(&self) -> bool {
        geometry::within_range_top(self.host.normalized_position(), self.config.margin())
    }

    /// `true` when scrolled into the bottom trigger zone.
    #[must_use]
    pub fn within_range_bottom(&self) -> bool {
        geometry::within_range_bottom(self.host.normalized_position(), self.config.margin())
    }

    /// The trigger bands around the current viewport, for debug overlays.
    #[must_use]
    pub fn margin_zones(&self) -> MarginZones {
        MarginZones::new(self.host.viewport_world_rect(), self.config.margin())
    }

    /// Draws the next payload from the data source without creating a view.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`DataError`].
    pub fn next_data(&mut self) -> Result<ElementData, DataError> {
        self.source.get()
    }

    /// Appends a new view to the content container and binds fresh data to it.
    ///
    /// The data is drawn before the view is created, so a failing source
    /// leaves the container untouched.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`DataError`].
    pub fn generate_new_element(&mut self) -> Result<GeneratedElement, DataError> {
        let data = self.source.get()?;
        let view = self.host.insert_child();
        self.host.bind_view(view, &data);
        tracing::trace!(view = view.0, text_len = data.text().len(), "generated element");
        Ok(GeneratedElement { view, data })
    }
}

/// A policy for keeping the visible window populated.
///
/// The engine calls [`tick`](Self::tick) once per frame and
/// [`evaluate`](Self::evaluate) once per delivered scroll event.
pub trait ScrollStrategy<H: ScrollHost> {
    /// One-time setup, run on the first activation.
    fn start(&mut self, _core: &mut ScrollCore<H>) {}

    /// Per-frame work. By default, one round of the eager fill.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollError::Data`] if generation fails.
    fn tick(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError> {
        EagerFill::from_config(core.config()).run(core, |_, _| {})?;
        Ok(())
    }

    /// Reacts to one scroll-position change.
    ///
    /// # Errors
    ///
    /// Returns a [`ScrollError`] if generation fails or a precondition of the
    /// strategy is broken.
    fn evaluate(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError>;
}

impl<H: ScrollHost, S: ScrollStrategy<H> + ?Sized> ScrollStrategy<H> for Box<S> {
    fn start(&mut self, core: &mut ScrollCore<H>) {
        (**self).start(core);
    }

    fn tick(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError> {
        (**self).tick(core)
    }

    fn evaluate(&mut self, core: &mut ScrollCore<H>) -> Result<(), ScrollError> {
        (**self).evaluate(core)
    }
}

/// An infinite list: a host surface driven by one strategy.
///
/// While active the list holds exactly one scroll listener registration on
/// the host. Dropping the list releases it.
///
/// ```rust
/// use understory_element_source::DataSource;
/// use understory_infinite_scroll::{
///     HeadlessHost, InfiniteScroll, ScrollConfig, ScrollHost, SimpleGrowStrategy,
/// };
///
/// let host = HeadlessHost::new(300.0);
/// let source = DataSource::new().with_asset("alpha\nbeta\ngamma").with_seed(1);
/// let mut list = InfiniteScroll::new(host, source, ScrollConfig::default(), SimpleGrowStrategy);
///
/// list.activate();
/// while list.core().should_generate_element() {
///     list.tick().unwrap();
/// }
/// assert!(list.host().content_height() >= 300.0 * 1.2);
/// ```
#[derive(Debug)]
pub struct InfiniteScroll<H: ScrollHost, S: ScrollStrategy<H>> {
    core: ScrollCore<H>,
    strategy: S,
    subscription: Option<SubscriptionId>,
    started: bool,
}

impl<H: ScrollHost, S: ScrollStrategy<H>> InfiniteScroll<H, S> {
    /// Creates an inactive list.
    #[must_use]
    pub fn new(host: H, source: DataSource, config: ScrollConfig, strategy: S) -> Self {
        Self {
            core: ScrollCore::new(host, source, config),
            strategy,
            subscription: None,
            started: false,
        }
    }

    /// Subscribes to scroll changes. Repeated calls keep the single subscription.
    pub fn activate(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let id = self.core.host.subscribe();
        tracing::debug!(subscription = id.0, "infinite scroll activated");
        self.subscription = Some(id);
        if !self.started {
            self.started = true;
            self.strategy.start(&mut self.core);
        }
    }

    /// Releases the scroll subscription. Safe to call when already inactive.
    pub fn deactivate(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.core.host.unsubscribe(id);
            tracing::debug!(subscription = id.0, "infinite scroll deactivated");
        }
    }

    /// `true` between [`activate`](Self::activate) and [`deactivate`](Self::deactivate).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Per-frame update. Does nothing while inactive.
    ///
    /// # Errors
    ///
    /// See [`ScrollStrategy::tick`].
    pub fn tick(&mut self) -> Result<(), ScrollError> {
        if !self.is_active() {
            return Ok(());
        }
        self.strategy.tick(&mut self.core)
    }

    /// Delivers one scroll-position change. Ignored while inactive.
    ///
    /// # Errors
    ///
    /// See [`ScrollStrategy::evaluate`].
    pub fn scroll_moved(&mut self) -> Result<(), ScrollError> {
        if !self.is_active() {
            tracing::trace!("scroll event ignored while inactive");
            return Ok(());
        }
        self.strategy.evaluate(&mut self.core)
    }

    /// Shared engine state.
    #[must_use]
    pub fn core(&self) -> &ScrollCore<H> {
        &self.core
    }

    /// Mutable shared engine state.
    pub fn core_mut(&mut self) -> &mut ScrollCore<H> {
        &mut self.core
    }

    /// The host surface.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.core.host
    }

    /// Mutable access to the host surface.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.core.host
    }

    /// The active strategy.
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<H: ScrollHost, S: ScrollStrategy<H>> Drop for InfiniteScroll<H, S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
