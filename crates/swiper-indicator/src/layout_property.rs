//! Standalone-mode configuration of an indicator.

use serde_json::{json, Map, Value};
use swiper_indicator_core::{Axis, Dimension, Property};

use crate::parameters::IndicatorType;

/// Page count used when no count was configured.
pub const DEFAULT_COUNT: i32 = 2;

/// Layout properties of an indicator node.
///
/// In bound mode these are ignored in favor of the swiper's own state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorLayoutProperty {
    count: Property<i32>,
    is_loop: Property<bool>,
    direction: Property<Axis>,
    initial_index: Property<i32>,
    indicator_type: Property<IndicatorType>,
    left: Property<Dimension>,
    top: Property<Dimension>,
    right: Property<Dimension>,
    bottom: Property<Dimension>,
}

impl IndicatorLayoutProperty {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configured page count, or [`DEFAULT_COUNT`] when unset.
    pub fn count_from_property(&self) -> i32 {
        self.count.get_or(DEFAULT_COUNT)
    }

    /// Raw count slot.
    pub fn count(&self) -> Option<i32> {
        self.count.get()
    }

    /// Set the page count. A negative count clears the property so the
    /// default applies. Returns `true` if the stored value changed.
    pub fn update_count(&mut self, count: i32) -> bool {
        if count < 0 {
            return self.count.reset().is_some();
        }
        self.count.update(count)
    }

    /// Whether paging wraps around, `true` when unset.
    pub fn is_loop(&self) -> bool {
        self.is_loop.get_or(true)
    }

    pub fn update_loop(&mut self, is_loop: bool) -> bool {
        self.is_loop.update(is_loop)
    }

    /// Paging axis, horizontal when unset.
    pub fn direction(&self) -> Axis {
        self.direction.get_or(Axis::Horizontal)
    }

    pub fn update_direction(&mut self, direction: Axis) -> bool {
        self.direction.update(direction)
    }

    /// Configured initial index, 0 when unset.
    pub fn initial_index(&self) -> i32 {
        self.initial_index.get_or(0)
    }

    pub fn update_initial_index(&mut self, index: i32) -> bool {
        self.initial_index.update(index)
    }

    /// Visual style, dot when unset.
    pub fn indicator_type(&self) -> IndicatorType {
        self.indicator_type.get_or(IndicatorType::Dot)
    }

    pub fn update_indicator_type(&mut self, indicator_type: IndicatorType) -> bool {
        self.indicator_type.update(indicator_type)
    }

    /// Positional offsets `(left, top, right, bottom)`.
    pub fn position(&self) -> [Option<Dimension>; 4] {
        [
            self.left.get(),
            self.top.get(),
            self.right.get(),
            self.bottom.get(),
        ]
    }

    /// Set or clear the positional offsets.
    pub fn update_position(
        &mut self,
        left: Option<Dimension>,
        top: Option<Dimension>,
        right: Option<Dimension>,
        bottom: Option<Dimension>,
    ) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut self.left, left),
            (&mut self.top, top),
            (&mut self.right, right),
            (&mut self.bottom, bottom),
        ] {
            changed |= match value {
                Some(v) => slot.update(v),
                None => slot.reset().is_some(),
            };
        }
        changed
    }

    /// Inspector representation.
    pub fn to_json_value(&self) -> Value {
        let mut value = json!({
            "count": self.count_from_property(),
            "loop": self.is_loop(),
            "vertical": self.direction() == Axis::Vertical,
            "initialIndex": self.initial_index(),
            "indicatorType": self.indicator_type().inspector_name(),
        });
        if let Value::Object(map) = &mut value {
            let offsets = [
                ("left", &self.left),
                ("top", &self.top),
                ("right", &self.right),
                ("bottom", &self.bottom),
            ];
            for (key, slot) in offsets {
                if let Some(dim) = slot.as_ref() {
                    map.insert(key.to_string(), dimension_json(*dim));
                }
            }
        }
        value
    }
}

fn dimension_json(dim: Dimension) -> Value {
    let mut map = Map::new();
    map.insert("value".into(), json!(dim.value));
    map.insert("unit".into(), json!(format!("{:?}", dim.unit).to_lowercase()));
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prop = IndicatorLayoutProperty::new();
        assert_eq!(prop.count_from_property(), DEFAULT_COUNT);
        assert!(prop.is_loop());
        assert_eq!(prop.direction(), Axis::Horizontal);
        assert_eq!(prop.initial_index(), 0);
        assert_eq!(prop.indicator_type(), IndicatorType::Dot);
    }

    #[test]
    fn test_count_round_trip() {
        let mut prop = IndicatorLayoutProperty::new();
        for n in [0, 1, 4, 100] {
            prop.update_count(n);
            assert_eq!(prop.count_from_property(), n);
        }
    }

    #[test]
    fn test_negative_count_restores_default() {
        let mut prop = IndicatorLayoutProperty::new();
        prop.update_count(7);
        assert!(prop.update_count(-1));
        assert_eq!(prop.count(), None);
        assert_eq!(prop.count_from_property(), DEFAULT_COUNT);
        assert!(!prop.update_count(-1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut prop = IndicatorLayoutProperty::new();
        prop.update_count(3);
        let mut copy = prop.clone();
        copy.update_count(9);
        assert_eq!(prop.count_from_property(), 3);
        assert_eq!(copy.count_from_property(), 9);
    }

    #[test]
    fn test_to_json_value() {
        let mut prop = IndicatorLayoutProperty::new();
        prop.update_count(5);
        prop.update_loop(false);
        prop.update_direction(Axis::Vertical);
        prop.update_indicator_type(IndicatorType::Digit);
        prop.update_position(Some(Dimension::vp(4.0)), None, None, None);

        let json = prop.to_json_value();
        assert_eq!(json["count"], 5);
        assert_eq!(json["loop"], false);
        assert_eq!(json["vertical"], true);
        assert_eq!(json["initialIndex"], 0);
        assert_eq!(json["indicatorType"], "DigitIndicator");
        assert_eq!(json["left"]["value"], 4.0);
        assert_eq!(json["left"]["unit"], "vp");
        assert!(json.get("top").is_none());
    }
}
