use glyph_brush::rusttype::Scale;
use glyph_brush::BuiltInLineBreaker;
use glyph_brush::HorizontalAlign;
use glyph_brush::Layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl Default for TextAlign {
    fn default() -> Self {
        TextAlign::Left
    }
}

impl From<TextAlign> for HorizontalAlign {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Left => HorizontalAlign::Left,
            TextAlign::Center => HorizontalAlign::Center,
            TextAlign::Right => HorizontalAlign::Right,
        }
    }
}

/// Styling for a text node. Widgets never look inside a style, they hand it to
/// the text node as is. Unset options fall back to the renderer's defaults.
///
/// # Examples
///
/// ```
/// use sprite_button::menu::TextAlign;
/// use sprite_button::menu::TextStyle;
///
/// let style = TextStyle::new()
///     .with_font("hack")
///     .with_size(24.0)
///     .with_align(TextAlign::Center);
///
/// assert_eq!(24.0, style.font_size());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font: Option<String>,
    pub size: Option<f32>,
    pub color: Option<[f32; 4]>,
    pub align: Option<TextAlign>,
}

impl TextStyle {
    pub const DEFAULT_SIZE: f32 = 16.0;
    pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub fn new() -> Self {
        TextStyle::default()
    }

    pub fn with_font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn font_size(&self) -> f32 {
        self.size.unwrap_or(Self::DEFAULT_SIZE)
    }

    pub fn font_color(&self) -> [f32; 4] {
        self.color.unwrap_or(Self::DEFAULT_COLOR)
    }

    /// Single line layout with the style's alignment
    pub fn layout(&self) -> Layout<BuiltInLineBreaker> {
        Layout::default_single_line().h_align(self.align.unwrap_or_default().into())
    }

    /// Glyph scale for the given dpi factor
    pub fn scale(&self, dpi: f32) -> Scale {
        let size = self.font_size();
        debug_assert!(size > 0.0, "Font size can't be less than zero");
        Scale::uniform((size * dpi).round())
    }
}
