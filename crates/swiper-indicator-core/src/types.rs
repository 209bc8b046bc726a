//! Basic geometry, color and dimension types.
//!
//! These are the value types shared by the node arena, the indicator
//! pattern and its paint parameters.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Component along the given axis.
    #[inline]
    pub fn main_axis(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Zero rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if the rectangle contains a point (right/bottom edges exclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.height
    }
}

/// An RGBA color (components in 0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from a 32-bit ARGB value (0xAARRGGBB), the layout
    /// used by theme resources.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        Self::from_rgba8(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            ((argb >> 24) & 0xFF) as u8,
        )
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
}

/// Unit of a [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DimensionUnit {
    /// Physical pixels.
    Px,
    /// Density-independent pixels.
    #[default]
    Vp,
    /// Font-scaled pixels.
    Fp,
    /// Percentage of the parent size.
    Percent,
}

/// A length with a unit, resolved to pixels at layout time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub value: f64,
    pub unit: DimensionUnit,
}

impl Dimension {
    #[inline]
    pub const fn new(value: f64, unit: DimensionUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub const fn vp(value: f64) -> Self {
        Self::new(value, DimensionUnit::Vp)
    }

    #[inline]
    pub const fn px(value: f64) -> Self {
        Self::new(value, DimensionUnit::Px)
    }

    #[inline]
    pub const fn fp(value: f64) -> Self {
        Self::new(value, DimensionUnit::Fp)
    }

    /// Parse strings such as `"12vp"`, `"3px"`, `"14fp"`, `"50%"` or a bare
    /// number (interpreted as vp).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let (number, unit) = if let Some(n) = text.strip_suffix('%') {
            (n, DimensionUnit::Percent)
        } else if let Some(n) = text.strip_suffix("px") {
            (n, DimensionUnit::Px)
        } else if let Some(n) = text.strip_suffix("vp") {
            (n, DimensionUnit::Vp)
        } else if let Some(n) = text.strip_suffix("fp") {
            (n, DimensionUnit::Fp)
        } else {
            (text, DimensionUnit::Vp)
        };
        let value: f64 = number.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let value = if unit == DimensionUnit::Percent {
            value / 100.0
        } else {
            value
        };
        Some(Self::new(value, unit))
    }

    /// Resolve to pixels. Percent values resolve against `percent_base`.
    pub fn to_px(self, density: f32, font_scale: f32, percent_base: f32) -> f32 {
        let value = self.value as f32;
        match self.unit {
            DimensionUnit::Px => value,
            DimensionUnit::Vp => value * density,
            DimensionUnit::Fp => value * density * font_scale,
            DimensionUnit::Percent => value * percent_base,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.value > 0.0
    }

    #[inline]
    pub fn is_percent(self) -> bool {
        self.unit == DimensionUnit::Percent
    }
}

/// Main axis of a paging widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Layout direction of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parse_units() {
        assert_eq!(Dimension::parse("12vp"), Some(Dimension::vp(12.0)));
        assert_eq!(Dimension::parse("3px"), Some(Dimension::px(3.0)));
        assert_eq!(Dimension::parse("14fp"), Some(Dimension::fp(14.0)));
        assert_eq!(Dimension::parse(" 8 "), Some(Dimension::vp(8.0)));
        let percent = Dimension::parse("50%").unwrap();
        assert!(percent.is_percent());
        assert_eq!(percent.value, 0.5);
    }

    #[test]
    fn test_dimension_parse_rejects_garbage() {
        assert_eq!(Dimension::parse(""), None);
        assert_eq!(Dimension::parse("abc"), None);
        assert_eq!(Dimension::parse("vp"), None);
    }

    #[test]
    fn test_dimension_to_px() {
        assert_eq!(Dimension::vp(10.0).to_px(2.0, 1.0, 0.0), 20.0);
        assert_eq!(Dimension::fp(10.0).to_px(2.0, 1.5, 0.0), 30.0);
        assert_eq!(Dimension::px(7.0).to_px(3.0, 1.0, 0.0), 7.0);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        let c = Color::from_hex("00000000").unwrap();
        assert_eq!(c.a, 0.0);
        assert_eq!(Color::from_hex("#12"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
    }

    #[test]
    fn test_color_from_argb() {
        assert_eq!(Color::from_argb(0xFFFF0000), Color::RED);
        assert_eq!(Color::from_argb(0x00000000).a, 0.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
    }
}
