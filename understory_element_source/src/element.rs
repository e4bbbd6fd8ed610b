// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-item payload.

use peniko::Color;

/// Opaque handle to an image resource owned by the host.
///
/// The source never dereferences these; it only selects among the handles it
/// was configured with and hands them to the views.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ImageHandle(pub u32);

impl ImageHandle {
    /// Creates a handle from a host-side identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the host-side identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Returns the componentwise inverse of `color`, keeping its alpha.
///
/// Computed in 8-bit sRGB so that pure primaries map exactly onto their
/// complements (red becomes cyan, white becomes black).
#[must_use]
pub fn complementary(color: Color) -> Color {
    let rgba = color.to_rgba8();
    Color::from_rgba8(255 - rgba.r, 255 - rgba.g, 255 - rgba.b, rgba.a)
}

/// Immutable payload for a single list item.
///
/// The secondary color is derived from the primary one at construction time,
/// so `secondary_color() == complementary(primary_color())` always holds.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementData {
    text: String,
    primary_color: Color,
    secondary_color: Color,
    shape: Option<ImageHandle>,
    fill: Option<ImageHandle>,
    graphic: Option<ImageHandle>,
}

impl ElementData {
    /// Creates a payload; the secondary color is the complement of `primary_color`.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        primary_color: Color,
        shape: Option<ImageHandle>,
        fill: Option<ImageHandle>,
        graphic: Option<ImageHandle>,
    ) -> Self {
        Self {
            text: text.into(),
            primary_color,
            secondary_color: complementary(primary_color),
            shape,
            fill,
            graphic,
        }
    }

    /// Creates a text-only payload with an opaque white tint and no images.
    #[must_use]
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, Color::WHITE, None, None, None)
    }

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Primary tint.
    #[must_use]
    pub fn primary_color(&self) -> Color {
        self.primary_color
    }

    /// Secondary tint, the complement of the primary one.
    #[must_use]
    pub fn secondary_color(&self) -> Color {
        self.secondary_color
    }

    /// Shape image, if any were configured.
    #[must_use]
    pub fn shape(&self) -> Option<ImageHandle> {
        self.shape
    }

    /// Fill image, if any were configured.
    #[must_use]
    pub fn fill(&self) -> Option<ImageHandle> {
        self.fill
    }

    /// Graphic image, if any were configured.
    #[must_use]
    pub fn graphic(&self) -> Option<ImageHandle> {
        self.graphic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_keeps_alpha() {
        let c = complementary(Color::from_rgba8(10, 20, 30, 40)).to_rgba8();
        assert_eq!((c.r, c.g, c.b, c.a), (245, 235, 225, 40));
    }

    #[test]
    fn secondary_is_derived_from_primary() {
        let data = ElementData::new(
            "sigil",
            Color::from_rgba8(255, 0, 0, 255),
            Some(ImageHandle::new(1)),
            None,
            Some(ImageHandle::new(3)),
        );
        let secondary = data.secondary_color().to_rgba8();
        assert_eq!((secondary.r, secondary.g, secondary.b), (0, 255, 255));
        assert_eq!(data.shape(), Some(ImageHandle(1)));
        assert_eq!(data.fill(), None);
        assert_eq!(data.graphic().map(ImageHandle::id), Some(3));
    }

    #[test]
    fn text_only_is_white_on_black() {
        let data = ElementData::text_only("plain");
        assert_eq!(data.text(), "plain");
        assert_eq!(data.secondary_color().to_rgba8().r, 0);
        assert_eq!(data.primary_color().to_rgba8().r, 255);
    }
}
