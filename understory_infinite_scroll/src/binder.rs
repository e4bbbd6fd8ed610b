// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use understory_element_source::{ElementData, ImageHandle};

/// Writes an [`ElementData`] into a view's display slots.
pub trait ViewBinder {
    /// Overwrites every slot from `data`. Absent images clear their slot.
    fn setup(&mut self, data: &ElementData);
}

/// A tinted image slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageSlot {
    /// Image to draw, or nothing.
    pub image: Option<ImageHandle>,
    /// Tint multiplied into the image.
    pub tint: Color,
}

impl Default for ImageSlot {
    fn default() -> Self {
        Self {
            image: None,
            tint: Color::WHITE,
        }
    }
}

/// Plain-data view for one list item: a paragraph and a three-layer sigil.
///
/// The shape takes the primary tint and the graphic the secondary tint; the
/// fill keeps whatever tint it was given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementView {
    /// Paragraph text.
    pub text: String,
    /// Outer sigil shape.
    pub shape: ImageSlot,
    /// Sigil fill.
    pub fill: ImageSlot,
    /// Sigil graphic.
    pub graphic: ImageSlot,
}

impl ViewBinder for ElementView {
    fn setup(&mut self, data: &ElementData) {
        self.text.clear();
        self.text.push_str(data.text());
        self.shape.image = data.shape();
        self.shape.tint = data.primary_color();
        self.fill.image = data.fill();
        self.graphic.image = data.graphic();
        self.graphic.tint = data.secondary_color();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_overwrites_previous_binding() {
        let mut view = ElementView::default();
        let first = ElementData::new(
            "first",
            Color::from_rgba8(255, 0, 0, 255),
            Some(ImageHandle::new(1)),
            Some(ImageHandle::new(2)),
            Some(ImageHandle::new(3)),
        );
        view.setup(&first);
        assert_eq!(view.text, "first");
        assert_eq!(view.shape.image, Some(ImageHandle::new(1)));
        assert_eq!(view.graphic.tint.to_rgba8(), first.secondary_color().to_rgba8());

        view.setup(&ElementData::text_only("second"));
        assert_eq!(view.text, "second");
        assert_eq!(view.shape.image, None);
        assert_eq!(view.fill.image, None);
        assert_eq!(view.graphic.image, None);
        assert_eq!(view.fill.tint.to_rgba8(), Color::WHITE.to_rgba8());
    }
}
