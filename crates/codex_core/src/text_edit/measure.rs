//! Text measurement seam supplied by the host UI layer.

/// Returns the rendered pixel width of a string at a font size.
///
/// Implementations must be deterministic for fixed inputs within a frame.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: u32) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, u32) -> f32,
{
    fn measure(&self, text: &str, font_size: u32) -> f32 {
        self(text, font_size)
    }
}

/// Fixed-advance measurer: every char is `char_width` pixels wide.
///
/// Used by headless hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub char_width: f32,
}

impl MonospaceMeasurer {
    pub fn new(char_width: f32) -> Self {
        Self { char_width }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, _font_size: u32) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}
