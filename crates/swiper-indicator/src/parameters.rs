//! Dot and digit style parameters.
//!
//! [`SwiperParameters`] styles a dot indicator and [`SwiperDigitalParameters`]
//! styles a digit indicator. Both start from theme defaults and are then
//! overridden field by field, either by the builder API or by resource
//! reload bindings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use swiper_indicator_core::{Color, Dimension};

use crate::theme::SwiperIndicatorTheme;

/// Visual style of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorType {
    /// A row of dots.
    #[default]
    Dot,
    /// "current/total" page numbers.
    Digit,
}

impl IndicatorType {
    /// Name reported to the inspector.
    pub fn inspector_name(self) -> &'static str {
        match self {
            IndicatorType::Dot => "DotIndicator",
            IndicatorType::Digit => "DigitIndicator",
        }
    }
}

/// Font weight of digit indicator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    Lighter,
    #[default]
    Normal,
    Regular,
    Medium,
    Bold,
    Bolder,
}

impl FontWeight {
    /// Parse a weight name or CSS-style numeric weight, falling back to `default`.
    pub fn parse_or(text: &str, default: FontWeight) -> FontWeight {
        match text.trim().to_ascii_lowercase().as_str() {
            "lighter" | "100" | "200" | "300" => FontWeight::Lighter,
            "normal" | "400" => FontWeight::Normal,
            "regular" => FontWeight::Regular,
            "medium" | "500" => FontWeight::Medium,
            "bold" | "600" | "700" => FontWeight::Bold,
            "bolder" | "800" | "900" => FontWeight::Bolder,
            _ => default,
        }
    }
}

/// Parse an item size, falling back to `default` when the text is not a
/// positive, non-percent length.
pub fn parse_item_size(text: &str, default: Dimension) -> Dimension {
    match Dimension::parse(text) {
        Some(dim) if dim.is_positive() && !dim.is_percent() => dim,
        _ => default,
    }
}

/// Parse a dot spacing, falling back to `default` when the text is not a
/// non-negative, non-percent length.
pub fn parse_item_space(text: &str, default: Dimension) -> Dimension {
    match Dimension::parse(text) {
        Some(dim) if dim.value >= 0.0 && !dim.is_percent() => dim,
        _ => default,
    }
}

/// Parse an offset such as `left`/`top`. Negative offsets become zero.
pub fn parse_position(text: &str) -> Option<Dimension> {
    let dim = Dimension::parse(text)?;
    if dim.value < 0.0 {
        Some(Dimension::new(0.0, dim.unit))
    } else {
        Some(dim)
    }
}

/// Parse a color resource value (`#RRGGBB`, `#RRGGBBAA` or `0xAARRGGBB`).
pub fn parse_color(text: &str) -> Option<Color> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok().map(Color::from_argb);
    }
    Color::from_hex(text)
}

/// Style parameters of a dot indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperParameters {
    pub dim_left: Option<Dimension>,
    pub dim_top: Option<Dimension>,
    pub dim_right: Option<Dimension>,
    pub dim_bottom: Option<Dimension>,
    pub item_width: Dimension,
    pub item_height: Dimension,
    pub selected_item_width: Dimension,
    pub selected_item_height: Dimension,
    /// Gap between adjacent dots.
    pub dim_space: Dimension,
    /// Whether a background mask is drawn behind the dots.
    pub mask: bool,
    pub color: Color,
    pub selected_color: Color,
    /// Upper bound on visible dots; `None` shows one dot per page.
    pub max_display_count: Option<i32>,
    pub ignore_size: bool,
    /// Names of fields the user set explicitly.
    pub parameters_by_user: BTreeSet<String>,
}

impl SwiperParameters {
    /// Parameters populated from theme defaults.
    pub fn from_theme(theme: &SwiperIndicatorTheme) -> Self {
        Self {
            dim_left: None,
            dim_top: None,
            dim_right: None,
            dim_bottom: None,
            item_width: theme.size,
            item_height: theme.size,
            selected_item_width: theme.size,
            selected_item_height: theme.size,
            dim_space: theme.dot_item_space,
            mask: false,
            color: theme.color,
            selected_color: theme.selected_color,
            max_display_count: None,
            ignore_size: false,
            parameters_by_user: BTreeSet::new(),
        }
    }

    /// Set the four dot sizes, marking them user-provided.
    pub fn with_item_size(mut self, width: Dimension, height: Dimension) -> Self {
        self.item_width = width;
        self.item_height = height;
        self.parameters_by_user.insert("itemWidth".into());
        self.parameters_by_user.insert("itemHeight".into());
        self
    }

    /// Set the selected dot size, marking it user-provided.
    pub fn with_selected_item_size(mut self, width: Dimension, height: Dimension) -> Self {
        self.selected_item_width = width;
        self.selected_item_height = height;
        self.parameters_by_user.insert("selectedItemWidth".into());
        self.parameters_by_user.insert("selectedItemHeight".into());
        self
    }

    /// Set the dot colors, marking them user-provided.
    pub fn with_colors(mut self, color: Color, selected: Color) -> Self {
        self.color = color;
        self.selected_color = selected;
        self.parameters_by_user.insert("color".into());
        self.parameters_by_user.insert("selectedColor".into());
        self
    }

    /// Set the dot spacing.
    pub fn with_space(mut self, space: Dimension) -> Self {
        self.dim_space = space;
        self
    }

    /// Limit the number of visible dots.
    pub fn with_max_display_count(mut self, count: i32) -> Self {
        self.max_display_count = Some(count);
        self
    }

    /// Whether any dot size differs from the theme default.
    pub fn is_custom_size(&self) -> bool {
        ["itemWidth", "itemHeight", "selectedItemWidth", "selectedItemHeight"]
            .iter()
            .any(|field| self.parameters_by_user.contains(*field))
    }

    /// Write a size field by its binding name. Returns `false` for unknown names.
    pub fn set_size_field(&mut self, field: &str, value: Dimension) -> bool {
        match field {
            "itemWidth" => self.item_width = value,
            "itemHeight" => self.item_height = value,
            "selectedItemWidth" => self.selected_item_width = value,
            "selectedItemHeight" => self.selected_item_height = value,
            _ => return false,
        }
        true
    }

    /// Write a color field by its binding name. Returns `false` for unknown names.
    pub fn set_color_field(&mut self, field: &str, value: Color) -> bool {
        match field {
            "color" => self.color = value,
            "selectedColor" => self.selected_color = value,
            _ => return false,
        }
        true
    }
}

/// Style parameters of a digit indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperDigitalParameters {
    pub dim_left: Option<Dimension>,
    pub dim_top: Option<Dimension>,
    pub dim_right: Option<Dimension>,
    pub dim_bottom: Option<Dimension>,
    pub font_color: Color,
    pub selected_font_color: Color,
    pub font_size: Dimension,
    pub selected_font_size: Dimension,
    pub font_weight: FontWeight,
    pub selected_font_weight: FontWeight,
    pub ignore_size: bool,
    pub parameters_by_user: BTreeSet<String>,
}

impl SwiperDigitalParameters {
    /// Parameters populated from theme defaults.
    pub fn from_theme(theme: &SwiperIndicatorTheme) -> Self {
        let text = &theme.digit_text_style;
        Self {
            dim_left: None,
            dim_top: None,
            dim_right: None,
            dim_bottom: None,
            font_color: text.text_color,
            selected_font_color: theme.digit_selected_text_color,
            font_size: text.font_size,
            selected_font_size: text.font_size,
            font_weight: text.font_weight,
            selected_font_weight: text.font_weight,
            ignore_size: false,
            parameters_by_user: BTreeSet::new(),
        }
    }

    /// Set both font sizes.
    pub fn with_font_sizes(mut self, size: Dimension, selected: Dimension) -> Self {
        self.font_size = size;
        self.selected_font_size = selected;
        self
    }

    /// Set both font colors, marking them user-provided.
    pub fn with_font_colors(mut self, color: Color, selected: Color) -> Self {
        self.font_color = color;
        self.selected_font_color = selected;
        self.parameters_by_user.insert("fontColor".into());
        self.parameters_by_user.insert("selectedFontColor".into());
        self
    }

    /// Set both font weights.
    pub fn with_font_weights(mut self, weight: FontWeight, selected: FontWeight) -> Self {
        self.font_weight = weight;
        self.selected_font_weight = selected;
        self
    }

    /// Write a font size field by its binding name.
    pub fn set_font_size_field(&mut self, field: &str, value: Dimension) -> bool {
        match field {
            "fontSize" => self.font_size = value,
            "selectedFontSize" => self.selected_font_size = value,
            _ => return false,
        }
        true
    }

    /// Write a color field by its binding name.
    pub fn set_color_field(&mut self, field: &str, value: Color) -> bool {
        match field {
            "fontColor" => self.font_color = value,
            "selectedFontColor" => self.selected_font_color = value,
            _ => return false,
        }
        true
    }
}

/// Lazily created style parameters of one indicator.
///
/// Each struct is built from the theme on first access and then kept, so
/// later style mutations accumulate onto the same instance.
#[derive(Debug, Clone, Default)]
pub struct IndicatorStyles {
    dot: Option<SwiperParameters>,
    digit: Option<SwiperDigitalParameters>,
}

impl IndicatorStyles {
    /// Dot parameters, created from `theme` if absent.
    pub fn dot_mut(&mut self, theme: &SwiperIndicatorTheme) -> &mut SwiperParameters {
        self.dot
            .get_or_insert_with(|| SwiperParameters::from_theme(theme))
    }

    /// Digit parameters, created from `theme` if absent.
    pub fn digit_mut(&mut self, theme: &SwiperIndicatorTheme) -> &mut SwiperDigitalParameters {
        self.digit
            .get_or_insert_with(|| SwiperDigitalParameters::from_theme(theme))
    }

    /// Dot parameters if they were created.
    pub fn dot(&self) -> Option<&SwiperParameters> {
        self.dot.as_ref()
    }

    /// Digit parameters if they were created.
    pub fn digit(&self) -> Option<&SwiperDigitalParameters> {
        self.digit.as_ref()
    }

    /// Replace the dot parameters.
    pub fn set_dot(&mut self, params: SwiperParameters) {
        self.dot = Some(params);
    }

    /// Replace the digit parameters.
    pub fn set_digit(&mut self, params: SwiperDigitalParameters) {
        self.digit = Some(params);
    }
}
