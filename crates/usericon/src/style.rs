//! Label styling options for generated icons.

use usericon_core::Color;
use usericon_render::SvgElement;

/// How the initials label is positioned on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextPlacement {
    /// Percentage anchoring: `x="50%" y="60%" text-anchor="middle"`.
    #[default]
    Centered,
    /// Fixed pixel coordinates keyed on label length: `x="20"` for one
    /// character, `x="15"` for two, `y="28"`.
    Offset,
}

impl TextPlacement {
    /// Write the position attributes for a label of `label_len` characters.
    pub fn apply(self, text: &mut SvgElement, label_len: usize) {
        match self {
            TextPlacement::Centered => {
                text.set_attribute("x", "50%");
                text.set_attribute("y", "60%");
                text.set_attribute("text-anchor", "middle");
            }
            TextPlacement::Offset => {
                let x = if label_len >= 2 { "15" } else { "20" };
                text.set_attribute("x", x);
                text.set_attribute("y", "28");
            }
        }
    }
}

/// Styling for the initials label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStyle {
    /// Label positioning.
    pub placement: TextPlacement,
    /// Label fill color.
    pub text_color: Color,
    /// CSS font family list.
    pub font_family: String,
    /// CSS font weight.
    pub font_weight: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            placement: TextPlacement::Centered,
            text_color: Color::WHITE,
            font_family: "Helvetica, sans-serif".to_string(),
            font_weight: "bold".to_string(),
        }
    }
}

impl IconStyle {
    /// Set the label placement.
    pub fn with_placement(mut self, placement: TextPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the label color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the font family list.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font weight.
    pub fn with_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = weight.into();
        self
    }

    /// The inline CSS written to the label's `style` attribute.
    pub fn css(&self) -> String {
        format!(
            "font-weight: {}; font-family: {};",
            self.font_weight, self.font_family
        )
    }
}
