//! Resolved paint styles stored on an indicator node.

use swiper_indicator_core::{Color, Dimension, RuntimeConfig};

use crate::parameters::{FontWeight, SwiperDigitalParameters, SwiperParameters};

fn to_px(dim: Dimension, config: &RuntimeConfig) -> f32 {
    dim.to_px(config.density, config.font_scale, 0.0)
}

/// Dot style resolved to pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct DotPaintStyle {
    pub item_width: f32,
    pub item_height: f32,
    pub selected_item_width: f32,
    pub selected_item_height: f32,
    pub space: f32,
    pub color: Color,
    pub selected_color: Color,
    pub mask: bool,
    pub max_display_count: Option<i32>,
}

impl DotPaintStyle {
    pub fn resolve(params: &SwiperParameters, config: &RuntimeConfig) -> Self {
        Self {
            item_width: to_px(params.item_width, config),
            item_height: to_px(params.item_height, config),
            selected_item_width: to_px(params.selected_item_width, config),
            selected_item_height: to_px(params.selected_item_height, config),
            space: to_px(params.dim_space, config),
            color: params.color,
            selected_color: params.selected_color,
            mask: params.mask,
            max_display_count: params.max_display_count,
        }
    }
}

/// Digit style resolved to pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitPaintStyle {
    pub font_size: f32,
    pub selected_font_size: f32,
    pub font_color: Color,
    pub selected_font_color: Color,
    pub font_weight: FontWeight,
    pub selected_font_weight: FontWeight,
}

impl DigitPaintStyle {
    pub fn resolve(params: &SwiperDigitalParameters, config: &RuntimeConfig) -> Self {
        Self {
            font_size: to_px(params.font_size, config),
            selected_font_size: to_px(params.selected_font_size, config),
            font_color: params.font_color,
            selected_font_color: params.selected_font_color,
            font_weight: params.font_weight,
            selected_font_weight: params.selected_font_weight,
        }
    }
}

/// Paint properties of an indicator node. Exactly one style is present
/// after a modify-done pass, matching the configured indicator type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorPaintProperty {
    dot: Option<DotPaintStyle>,
    digit: Option<DigitPaintStyle>,
}

impl IndicatorPaintProperty {
    pub fn dot(&self) -> Option<&DotPaintStyle> {
        self.dot.as_ref()
    }

    pub fn digit(&self) -> Option<&DigitPaintStyle> {
        self.digit.as_ref()
    }

    /// Store a dot style, dropping any digit style.
    pub fn save_dot(&mut self, style: DotPaintStyle) {
        self.dot = Some(style);
        self.digit = None;
    }

    /// Store a digit style, dropping any dot style.
    pub fn save_digit(&mut self, style: DigitPaintStyle) {
        self.digit = Some(style);
        self.dot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SwiperIndicatorTheme;

    #[test]
    fn test_dot_resolves_with_density() {
        let config = RuntimeConfig {
            density: 2.0,
            ..RuntimeConfig::default()
        };
        let params = SwiperParameters::from_theme(&SwiperIndicatorTheme::default());
        let style = DotPaintStyle::resolve(&params, &config);
        assert_eq!(style.item_width, 12.0);
        assert_eq!(style.space, 16.0);
    }

    #[test]
    fn test_saving_one_style_drops_the_other() {
        let theme = SwiperIndicatorTheme::default();
        let config = RuntimeConfig::default();
        let mut prop = IndicatorPaintProperty::default();
        prop.save_dot(DotPaintStyle::resolve(&SwiperParameters::from_theme(&theme), &config));
        prop.save_digit(DigitPaintStyle::resolve(
            &SwiperDigitalParameters::from_theme(&theme),
            &config,
        ));
        assert!(prop.dot().is_none());
        assert_eq!(prop.digit().map(|d| d.font_size), Some(14.0));
    }
}
