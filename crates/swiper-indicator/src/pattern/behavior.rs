//! Bound and standalone navigation behaviors.
//!
//! Each pattern entry point resolves its behavior once, from whether the
//! controller's swiper handle still resolves in the tree, and then talks to
//! that behavior only.

use std::cmp::Ordering;

use swiper_indicator_core::logging::targets;
use swiper_indicator_core::{Axis, NodeId};

use super::paint::{GestureState, TouchBottomTypeLoop};
use super::IndicatorPattern;
use crate::swiper::loop_index;
use crate::tree::PatternHost;

/// Drag-end velocity beyond which a bound swiper turns the page, in px/s.
pub const DRAG_END_VELOCITY_THRESHOLD: f32 = 1200.0;

/// Navigation state and commands, independent of who owns the index.
pub(crate) trait IndicatorBehavior {
    fn current_index(&self, pattern: &IndicatorPattern, host: &PatternHost<'_>) -> i32;
    fn total_count(&self, host: &PatternHost<'_>) -> i32;
    fn is_loop(&self, host: &PatternHost<'_>) -> bool;
    fn direction(&self, host: &PatternHost<'_>) -> Axis;
    /// Whether the paging content runs right-to-left.
    fn is_rtl(&self, host: &PatternHost<'_>) -> bool;

    fn turn_page_rate(&self, pattern: &IndicatorPattern, host: &PatternHost<'_>) -> f32;
    fn set_turn_page_rate(&self, pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>, rate: f32);

    fn show_next(&self, pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>);
    fn show_previous(&self, pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>);
    fn change_index(
        &self,
        pattern: &mut IndicatorPattern,
        host: &mut PatternHost<'_>,
        index: i32,
        use_animation: bool,
    );
    fn swipe_to(&self, pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>, index: i32);
    /// Settle the page after a drag released with `velocity` px/s.
    fn settle_drag(&self, host: &mut PatternHost<'_>, velocity: f32);

    /// Horizontal layout with right-to-left content.
    fn is_horizontal_rtl(&self, host: &PatternHost<'_>) -> bool {
        self.direction(host) == Axis::Horizontal && self.is_rtl(host)
    }
}

/// Delegates everything to the bound swiper.
pub(crate) struct BoundIndicatorBehavior {
    swiper: NodeId,
}

impl IndicatorBehavior for BoundIndicatorBehavior {
    fn current_index(&self, _pattern: &IndicatorPattern, host: &PatternHost<'_>) -> i32 {
        host.swiper(self.swiper).map_or(0, |s| s.current_index())
    }

    fn total_count(&self, host: &PatternHost<'_>) -> i32 {
        host.swiper(self.swiper).map_or(0, |s| s.real_total_count())
    }

    fn is_loop(&self, host: &PatternHost<'_>) -> bool {
        host.swiper(self.swiper).is_some_and(|s| s.is_loop())
    }

    fn direction(&self, host: &PatternHost<'_>) -> Axis {
        host.swiper(self.swiper)
            .map_or(Axis::Horizontal, |s| s.direction())
    }

    fn is_rtl(&self, host: &PatternHost<'_>) -> bool {
        host.swiper(self.swiper)
            .is_some_and(|s| s.layout_direction().is_rtl())
    }

    fn turn_page_rate(&self, _pattern: &IndicatorPattern, host: &PatternHost<'_>) -> f32 {
        host.swiper(self.swiper).map_or(0.0, |s| s.turn_page_rate())
    }

    fn set_turn_page_rate(&self, _pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>, rate: f32) {
        if let Some(swiper) = host.swiper_mut(self.swiper) {
            swiper.set_turn_page_rate(rate);
        }
    }

    fn show_next(&self, _pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>) {
        if let Some(swiper) = host.swiper_mut(self.swiper) {
            swiper.show_next();
        }
    }

    fn show_previous(&self, _pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>) {
        if let Some(swiper) = host.swiper_mut(self.swiper) {
            swiper.show_previous();
        }
    }

    fn change_index(
        &self,
        _pattern: &mut IndicatorPattern,
        host: &mut PatternHost<'_>,
        index: i32,
        use_animation: bool,
    ) {
        if let Some(swiper) = host.swiper_mut(self.swiper) {
            swiper.change_index(index, use_animation);
        }
    }

    fn swipe_to(&self, _pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>, index: i32) {
        if let Some(swiper) = host.swiper_mut(self.swiper) {
            swiper.swipe_to(index);
        }
    }

    fn settle_drag(&self, host: &mut PatternHost<'_>, velocity: f32) {
        let Some(swiper) = host.swiper_mut(self.swiper) else {
            return;
        };
        if velocity > DRAG_END_VELOCITY_THRESHOLD {
            swiper.show_next();
        } else if velocity < -DRAG_END_VELOCITY_THRESHOLD {
            swiper.show_previous();
        }
    }
}

/// Owns the index locally, configured by the layout property.
pub(crate) struct StandaloneIndicatorBehavior;

impl StandaloneIndicatorBehavior {
    fn step(&self, pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>, forward: bool) {
        let total = self.total_count(host);
        let current = pattern.current_index_in_single_mode;
        let release = match (forward, self.is_horizontal_rtl(host)) {
            (true, false) | (false, true) => GestureState::ReleaseRight,
            (true, true) | (false, false) => GestureState::ReleaseLeft,
        };
        pattern.paint_hint.set_gesture_state(release);

        if self.is_loop(host) {
            if forward && current >= total - 1 {
                pattern
                    .paint_hint
                    .set_touch_bottom_type_loop(TouchBottomTypeLoop::LoopRight);
            } else if !forward && current <= 0 {
                pattern
                    .paint_hint
                    .set_touch_bottom_type_loop(TouchBottomTypeLoop::LoopLeft);
            }
        }

        if let Some(modifier) = &pattern.dot_modifier {
            if !modifier.is_touch_bottom_animation_finished() {
                modifier.finish_animation_to_target_immediately();
            }
        }

        pattern.last_index = current;
        let target = if forward { current + 1 } else { current - 1 };
        pattern.on_index_change_in_single_mode(host, target);
    }
}

impl IndicatorBehavior for StandaloneIndicatorBehavior {
    fn current_index(&self, pattern: &IndicatorPattern, _host: &PatternHost<'_>) -> i32 {
        pattern.current_index_in_single_mode
    }

    fn total_count(&self, host: &PatternHost<'_>) -> i32 {
        host.layout_property.count_from_property()
    }

    fn is_loop(&self, host: &PatternHost<'_>) -> bool {
        host.layout_property.is_loop()
    }

    fn direction(&self, host: &PatternHost<'_>) -> Axis {
        host.layout_property.direction()
    }

    fn is_rtl(&self, host: &PatternHost<'_>) -> bool {
        host.layout_direction().is_rtl()
    }

    fn turn_page_rate(&self, pattern: &IndicatorPattern, _host: &PatternHost<'_>) -> f32 {
        pattern.turn_page_rate
    }

    fn set_turn_page_rate(&self, pattern: &mut IndicatorPattern, _host: &mut PatternHost<'_>, rate: f32) {
        pattern.turn_page_rate = rate;
    }

    fn show_next(&self, pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>) {
        self.step(pattern, host, true);
    }

    fn show_previous(&self, pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>) {
        self.step(pattern, host, false);
    }

    fn change_index(
        &self,
        pattern: &mut IndicatorPattern,
        host: &mut PatternHost<'_>,
        index: i32,
        use_animation: bool,
    ) {
        let total = self.total_count(host);
        let index = if index < 0 || index >= total { 0 } else { index };

        if use_animation {
            let current = loop_index(pattern.current_index_in_single_mode, total);
            let target = loop_index(index, total);
            let hint = match current.cmp(&target) {
                Ordering::Greater => GestureState::ReleaseLeft,
                Ordering::Less => GestureState::ReleaseRight,
                Ordering::Equal => GestureState::None,
            };
            pattern.paint_hint.set_gesture_state(hint);
        } else {
            pattern.paint_hint.set_gesture_state(GestureState::None);
        }

        if let Some(modifier) = &pattern.dot_modifier {
            modifier.stop_animation();
        }
        pattern.on_index_change_in_single_mode(host, index);
    }

    fn swipe_to(&self, pattern: &mut IndicatorPattern, host: &mut PatternHost<'_>, index: i32) {
        pattern.last_index = pattern.current_index_in_single_mode;
        pattern.on_index_change_in_single_mode(host, index);
    }

    fn settle_drag(&self, _host: &mut PatternHost<'_>, velocity: f32) {
        tracing::trace!(target: targets::PATTERN, velocity, "standalone drag end, pages already turned");
    }
}

/// The behavior chosen for one entry point.
pub(crate) enum ResolvedBehavior {
    Bound(BoundIndicatorBehavior),
    Standalone(StandaloneIndicatorBehavior),
}

impl ResolvedBehavior {
    pub(crate) fn resolve(pattern: &IndicatorPattern, host: &PatternHost<'_>) -> Self {
        match pattern.get_bind_swiper_node(host) {
            Some(swiper) => ResolvedBehavior::Bound(BoundIndicatorBehavior { swiper }),
            None => ResolvedBehavior::Standalone(StandaloneIndicatorBehavior),
        }
    }

    pub(crate) fn get(&self) -> &dyn IndicatorBehavior {
        match self {
            ResolvedBehavior::Bound(bound) => bound,
            ResolvedBehavior::Standalone(standalone) => standalone,
        }
    }

    pub(crate) fn bound_swiper(&self) -> Option<NodeId> {
        match self {
            ResolvedBehavior::Bound(bound) => Some(bound.swiper),
            ResolvedBehavior::Standalone(_) => None,
        }
    }
}
