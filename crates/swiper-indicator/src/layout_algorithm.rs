//! Indicator measurement and dot geometry.

use std::cmp::Ordering;

use swiper_indicator_core::{Axis, Point, Rect, Size};

use crate::paint_property::{DigitPaintStyle, DotPaintStyle};
use crate::parameters::IndicatorType;

/// Padding around dots, in vp.
pub const DOT_PADDING_VP: f32 = 12.0;
/// Padding around digits, in vp.
pub const DIGIT_PADDING_VP: f32 = 8.0;
/// Estimated advance of one digit glyph relative to the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Computes the content size of an indicator from its resolved style.
#[derive(Debug, Clone)]
pub struct IndicatorLayoutAlgorithm {
    pub indicator_type: IndicatorType,
    pub axis: Axis,
    pub total_count: i32,
    pub current_index: i32,
    pub dot: Option<DotPaintStyle>,
    pub digit: Option<DigitPaintStyle>,
    /// Pixels per vp.
    pub density: f32,
}

impl IndicatorLayoutAlgorithm {
    /// Content size including padding.
    pub fn measure(&self) -> Size {
        match self.indicator_type {
            IndicatorType::Dot => self.measure_dot(),
            IndicatorType::Digit => self.measure_digit(),
        }
    }

    /// Number of dots actually drawn.
    pub fn display_count(&self) -> i32 {
        let total = self.total_count.max(0);
        match self.dot.as_ref().and_then(|d| d.max_display_count) {
            Some(max) if max > 0 => total.min(max),
            _ => total,
        }
    }

    fn dot_padding(&self) -> f32 {
        DOT_PADDING_VP * self.density
    }

    fn measure_dot(&self) -> Size {
        let Some(dot) = &self.dot else {
            return Size::ZERO;
        };
        let padding = self.dot_padding();
        let n = self.display_count();
        let dots = if n > 0 {
            (n - 1) as f32 * (dot.item_width + dot.space) + dot.selected_item_width
        } else {
            0.0
        };
        let main = dots + 2.0 * padding;
        let cross = dot.item_height.max(dot.selected_item_height) + 2.0 * padding;
        self.orient(main, cross)
    }

    fn measure_digit(&self) -> Size {
        let Some(digit) = &self.digit else {
            return Size::ZERO;
        };
        let padding = DIGIT_PADDING_VP * self.density;
        let selected_text = (self.current_index + 1).to_string();
        let rest_text = format!("/{}", self.total_count);
        let width = GLYPH_WIDTH_RATIO
            * (selected_text.len() as f32 * digit.selected_font_size
                + rest_text.len() as f32 * digit.font_size);
        let height = digit.font_size.max(digit.selected_font_size);
        Size::new(width + 2.0 * padding, height + 2.0 * padding)
    }

    fn orient(&self, main: f32, cross: f32) -> Size {
        match self.axis {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Rectangle of the dot at `index` in node-local coordinates, or `None`
    /// when that dot is not drawn.
    pub fn dot_rect(&self, index: i32) -> Option<Rect> {
        let dot = self.dot.as_ref()?;
        let n = self.display_count();
        if !(0..n).contains(&index) {
            return None;
        }
        let padding = self.dot_padding();
        let pitch = dot.item_width + dot.space;
        let selected = self.current_index.clamp(0, n - 1);
        let (start, w, h) = match index.cmp(&selected) {
            Ordering::Less => (index as f32 * pitch, dot.item_width, dot.item_height),
            Ordering::Equal => (
                selected as f32 * pitch,
                dot.selected_item_width,
                dot.selected_item_height,
            ),
            Ordering::Greater => (
                selected as f32 * pitch
                    + dot.selected_item_width
                    + dot.space
                    + (index - selected - 1) as f32 * pitch,
                dot.item_width,
                dot.item_height,
            ),
        };
        let start = padding + start;
        let cross_extent = dot.item_height.max(dot.selected_item_height);
        let cross_start = padding + (cross_extent - h) / 2.0;
        Some(match self.axis {
            Axis::Horizontal => Rect::new(start, cross_start, w, h),
            Axis::Vertical => Rect::new(cross_start, start, h, w),
        })
    }

    /// Map a click at `point` to a dot index.
    ///
    /// Only the main-axis position matters. With `mirrored`, indices run
    /// from the far end of the main axis. Runs in constant time whatever the
    /// dot count.
    pub fn hit_test_dot(&self, point: Point, mirrored: bool) -> Option<i32> {
        let dot = self.dot.as_ref()?;
        let n = self.display_count();
        if n <= 0 {
            return None;
        }
        let mut pos = point.main_axis(self.axis);
        if mirrored {
            let extent = self.measure_dot();
            pos = match self.axis {
                Axis::Horizontal => extent.width,
                Axis::Vertical => extent.height,
            } - pos;
        }
        let pos = pos - self.dot_padding();
        if pos < 0.0 {
            return None;
        }

        let pitch = dot.item_width + dot.space;
        let selected = self.current_index.clamp(0, n - 1);
        let selected_start = selected as f32 * pitch;
        let selected_end = selected_start + dot.selected_item_width;
        let (index, offset) = if pos < selected_start {
            let slot = (pos / pitch).floor();
            (slot as i64, pos - slot * pitch)
        } else if pos < selected_end {
            return Some(selected);
        } else {
            let rest = pos - selected_end - dot.space;
            if rest < 0.0 || pitch <= 0.0 {
                return None;
            }
            let slot = (rest / pitch).floor();
            (i64::from(selected) + 1 + slot as i64, rest - slot * pitch)
        };
        (index < i64::from(n) && offset < dot.item_width).then_some(index as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiper_indicator_core::Color;

    fn dot_style() -> DotPaintStyle {
        DotPaintStyle {
            item_width: 6.0,
            item_height: 6.0,
            selected_item_width: 12.0,
            selected_item_height: 6.0,
            space: 8.0,
            color: Color::BLACK,
            selected_color: Color::WHITE,
            mask: false,
            max_display_count: None,
        }
    }

    fn dot_algorithm(total: i32, current: i32, axis: Axis) -> IndicatorLayoutAlgorithm {
        IndicatorLayoutAlgorithm {
            indicator_type: IndicatorType::Dot,
            axis,
            total_count: total,
            current_index: current,
            dot: Some(dot_style()),
            digit: None,
            density: 1.0,
        }
    }

    #[test]
    fn test_measure_dot_horizontal() {
        let size = dot_algorithm(4, 0, Axis::Horizontal).measure();
        // 3 * (6 + 8) + 12 + 24
        assert_eq!(size, Size::new(78.0, 30.0));
    }

    #[test]
    fn test_measure_dot_vertical_swaps() {
        let size = dot_algorithm(4, 0, Axis::Vertical).measure();
        assert_eq!(size, Size::new(30.0, 78.0));
    }

    #[test]
    fn test_max_display_count_limits_dots() {
        let mut algorithm = dot_algorithm(10, 0, Axis::Horizontal);
        if let Some(dot) = algorithm.dot.as_mut() {
            dot.max_display_count = Some(3);
        }
        assert_eq!(algorithm.display_count(), 3);
        assert!(algorithm.dot_rect(2).is_some());
        assert_eq!(algorithm.dot_rect(3), None);
    }

    #[test]
    fn test_measure_digit() {
        let algorithm = IndicatorLayoutAlgorithm {
            indicator_type: IndicatorType::Digit,
            axis: Axis::Horizontal,
            total_count: 12,
            current_index: 0,
            dot: None,
            digit: Some(DigitPaintStyle {
                font_size: 10.0,
                selected_font_size: 20.0,
                font_color: Color::BLACK,
                selected_font_color: Color::BLACK,
                font_weight: Default::default(),
                selected_font_weight: Default::default(),
            }),
            density: 1.0,
        };
        // "1" at 20px + "/12" at 10px
        let size = algorithm.measure();
        assert!((size.width - (0.6 * (20.0 + 30.0) + 16.0)).abs() < 1e-4);
        assert_eq!(size.height, 36.0);
    }

    #[test]
    fn test_hit_test_dot() {
        let algorithm = dot_algorithm(4, 0, Axis::Horizontal);
        // Dots start at x = 12 (selected, 12 wide), then 32, 46, 60.
        assert_eq!(algorithm.hit_test_dot(Point::new(13.0, 15.0), false), Some(0));
        assert_eq!(algorithm.hit_test_dot(Point::new(33.0, 15.0), false), Some(1));
        assert_eq!(algorithm.hit_test_dot(Point::new(27.0, 15.0), false), None);
        assert_eq!(algorithm.hit_test_dot(Point::new(2.0, 15.0), false), None);
    }

    #[test]
    fn test_hit_test_dot_mirrored() {
        let algorithm = dot_algorithm(4, 0, Axis::Horizontal);
        // Width 78: x = 78 - 61 = 17 lands on dot 0.
        assert_eq!(algorithm.hit_test_dot(Point::new(61.0, 15.0), true), Some(0));
    }

    #[test]
    fn test_dot_rect_positions() {
        let algorithm = dot_algorithm(4, 1, Axis::Horizontal);
        assert_eq!(algorithm.dot_rect(0), Some(Rect::new(12.0, 12.0, 6.0, 6.0)));
        assert_eq!(algorithm.dot_rect(1), Some(Rect::new(26.0, 12.0, 12.0, 6.0)));
        assert_eq!(algorithm.dot_rect(2), Some(Rect::new(46.0, 12.0, 6.0, 6.0)));
        assert_eq!(algorithm.dot_rect(-1), None);
        assert_eq!(algorithm.dot_rect(4), None);
    }

    #[test]
    fn test_hit_test_agrees_with_dot_rects() {
        for current in 0..4 {
            let algorithm = dot_algorithm(4, current, Axis::Vertical);
            for index in 0..4 {
                let rect = algorithm.dot_rect(index).unwrap();
                let center = Point::new(
                    rect.origin.x + rect.width() / 2.0,
                    rect.origin.y + rect.height() / 2.0,
                );
                assert_eq!(algorithm.hit_test_dot(center, false), Some(index));
            }
        }
    }

    #[test]
    fn test_hit_test_huge_count() {
        let algorithm = dot_algorithm(1_000_000_000, 0, Axis::Horizontal);
        assert_eq!(algorithm.hit_test_dot(Point::new(33.0, 15.0), false), Some(1));
        assert_eq!(algorithm.hit_test_dot(Point::new(27.0, 15.0), false), None);
    }
}
