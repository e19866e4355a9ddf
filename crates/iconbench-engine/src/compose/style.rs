use crate::coords::Rgba8;

/// Colors, label text and marker geometry used by [`IconCompositor`].
///
/// [`IconCompositor`]: super::IconCompositor
#[derive(Debug, Clone, PartialEq)]
pub struct CompositorStyle {
    /// Color/alpha modulation applied to the icon texture.
    pub icon_tint: Rgba8,
    /// Color the label is rasterized in.
    pub label_color: Rgba8,
    /// Low-opacity frame drawn one pixel outside the icon.
    pub frame_color: Rgba8,
    /// Selection rings.
    pub selection_color: Rgba8,
    /// Fill of the selection marker left of the icon.
    pub accent_color: Rgba8,
    pub label: String,
    /// Width of the selection marker in pixels.
    pub marker_width: i32,
}

impl Default for CompositorStyle {
    fn default() -> Self {
        Self {
            icon_tint: Rgba8::rgb(0xADD8E6),
            label_color: Rgba8::new(0xAF, 0xAF, 0xAF, 0xAF),
            frame_color: Rgba8::rgb(0xCDCDCD).with_alpha(0x3F),
            selection_color: Rgba8::rgb(0xDCDCDC),
            accent_color: Rgba8::rgb(0xADD8E6),
            label: "A".to_string(),
            marker_width: 4,
        }
    }
}

impl CompositorStyle {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_marker_width(mut self, width: i32) -> Self {
        self.marker_width = width;
        self
    }
}
