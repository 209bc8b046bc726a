//! Indicator theme.
//!
//! The theme supplies every style default the indicator falls back to: when
//! no style was set, when a resource fails to parse, or when a parsed size is
//! unusable (non-positive or a percentage).

use swiper_indicator_core::{Color, Dimension};

use crate::parameters::FontWeight;

/// Text style used by the digit indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitTextStyle {
    /// Font size of the page numbers.
    pub font_size: Dimension,
    /// Font weight of the page numbers.
    pub font_weight: FontWeight,
    /// Text color of the total/unselected part.
    pub text_color: Color,
}

/// Style defaults for dot and digit indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct SwiperIndicatorTheme {
    /// Unselected dot color.
    pub color: Color,
    /// Selected dot color.
    pub selected_color: Color,
    /// Default dot size (width and height, selected and unselected).
    pub size: Dimension,
    /// Default gap between dots.
    pub dot_item_space: Dimension,
    /// Digit indicator text style.
    pub digit_text_style: DigitTextStyle,
    /// Digit indicator color of the current page number.
    pub digit_selected_text_color: Color,
}

impl Default for SwiperIndicatorTheme {
    fn default() -> Self {
        Self {
            color: Color::from_argb(0x19182431),
            selected_color: Color::from_argb(0xFF007DFF),
            size: Dimension::vp(6.0),
            dot_item_space: Dimension::vp(8.0),
            digit_text_style: DigitTextStyle {
                font_size: Dimension::fp(14.0),
                font_weight: FontWeight::Normal,
                text_color: Color::from_argb(0xFF182431),
            },
            digit_selected_text_color: Color::from_argb(0xFF182431),
        }
    }
}

impl SwiperIndicatorTheme {
    /// Set the unselected dot color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the selected dot color.
    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    /// Set the default dot size.
    pub fn with_size(mut self, size: Dimension) -> Self {
        self.size = size;
        self
    }

    /// Set the default digit font size.
    pub fn with_digit_font_size(mut self, size: Dimension) -> Self {
        self.digit_text_style.font_size = size;
        self
    }

    /// Set the default digit text colors.
    pub fn with_digit_colors(mut self, text: Color, selected: Color) -> Self {
        self.digit_text_style.text_color = text;
        self.digit_selected_text_color = selected;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let theme = SwiperIndicatorTheme::default()
            .with_size(Dimension::vp(10.0))
            .with_color(Color::RED);
        assert_eq!(theme.size, Dimension::vp(10.0));
        assert_eq!(theme.color, Color::RED);
        assert_eq!(theme.dot_item_space, Dimension::vp(8.0));
    }
}
