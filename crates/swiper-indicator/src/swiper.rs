//! Swiper collaborator used by bound indicators.
//!
//! A bound indicator owns no navigation state: every query and command goes
//! to the swiper behind [`SwiperCapability`]. [`SwiperPattern`] is the
//! implementation shipped with this crate.

use std::any::Any;
use std::sync::Arc;

use swiper_indicator_core::logging::targets;
use swiper_indicator_core::{Axis, NodeId, Signal, TextDirection};

/// Callback a bound indicator registers to stop its running animation.
pub type StopIndicatorAnimation = Arc<dyn Fn() + Send + Sync>;

/// Wrap `index` into `[0, total)`. With no pages the index is returned as is.
pub fn loop_index(index: i32, total: i32) -> i32 {
    if total <= 0 {
        return index;
    }
    index.rem_euclid(total)
}

/// What an indicator needs from the swiper it decorates.
pub trait SwiperCapability: Send + Sync {
    /// Effective number of pages.
    fn real_total_count(&self) -> i32;
    fn is_loop(&self) -> bool;
    fn direction(&self) -> Axis;
    fn current_index(&self) -> i32;
    fn layout_direction(&self) -> TextDirection;

    fn show_next(&mut self);
    fn show_previous(&mut self);
    fn change_index(&mut self, index: i32, use_animation: bool);
    fn swipe_to(&mut self, index: i32);

    /// Indicator node currently decorating this swiper.
    fn indicator_node(&self) -> Option<NodeId>;
    fn set_indicator_node(&mut self, node: Option<NodeId>);
    fn set_bind_indicator(&mut self, bind: bool);
    fn is_bind_indicator(&self) -> bool;
    fn set_stop_indicator_animation(&mut self, callback: Option<StopIndicatorAnimation>);
    /// Run the registered stop-animation callback, if any.
    fn stop_indicator_animation(&self);

    /// Progress of an in-flight drag toward the next page.
    fn turn_page_rate(&self) -> f32;
    fn set_turn_page_rate(&mut self, rate: f32);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A paging container.
///
/// # Signals
///
/// - `change_event(i32)`: Emitted with the new index after every move
pub struct SwiperPattern {
    total_count: i32,
    is_loop: bool,
    direction: Axis,
    layout_direction: TextDirection,
    current_index: i32,
    indicator_node: Option<NodeId>,
    bind_indicator: bool,
    stop_indicator_animation: Option<StopIndicatorAnimation>,
    turn_page_rate: f32,
    last_use_animation: bool,

    /// Signal emitted when the current page changes.
    pub change_event: Signal<i32>,
}

impl SwiperPattern {
    /// Create a looping horizontal swiper with `total_count` pages.
    pub fn new(total_count: i32) -> Self {
        Self {
            total_count: total_count.max(0),
            is_loop: true,
            direction: Axis::Horizontal,
            layout_direction: TextDirection::Ltr,
            current_index: 0,
            indicator_node: None,
            bind_indicator: false,
            stop_indicator_animation: None,
            turn_page_rate: 0.0,
            last_use_animation: false,
            change_event: Signal::new(),
        }
    }

    pub fn with_loop(mut self, is_loop: bool) -> Self {
        self.is_loop = is_loop;
        self
    }

    pub fn with_direction(mut self, direction: Axis) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_layout_direction(mut self, direction: TextDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Start at `index`, clamped into range.
    pub fn with_index(mut self, index: i32) -> Self {
        self.current_index = index.clamp(0, (self.total_count - 1).max(0));
        self
    }

    pub fn set_total_count(&mut self, total: i32) {
        self.total_count = total.max(0);
        if self.current_index >= self.total_count {
            self.current_index = 0;
        }
    }

    /// Whether the most recent `change_index` asked for animation.
    pub fn last_use_animation(&self) -> bool {
        self.last_use_animation
    }

    fn move_to(&mut self, index: i32) {
        self.current_index = index;
        tracing::debug!(target: targets::SWIPER, index, "swiper index changed");
        self.change_event.emit(index);
    }
}

impl SwiperCapability for SwiperPattern {
    fn real_total_count(&self) -> i32 {
        self.total_count
    }

    fn is_loop(&self) -> bool {
        self.is_loop
    }

    fn direction(&self) -> Axis {
        self.direction
    }

    fn current_index(&self) -> i32 {
        self.current_index
    }

    fn layout_direction(&self) -> TextDirection {
        self.layout_direction
    }

    fn show_next(&mut self) {
        let total = self.total_count;
        if total <= 0 || (!self.is_loop && self.current_index >= total - 1) {
            return;
        }
        self.stop_indicator_animation();
        self.move_to(loop_index(self.current_index + 1, total));
    }

    fn show_previous(&mut self) {
        let total = self.total_count;
        if total <= 0 || (!self.is_loop && self.current_index <= 0) {
            return;
        }
        self.stop_indicator_animation();
        self.move_to(loop_index(self.current_index - 1, total));
    }

    fn change_index(&mut self, index: i32, use_animation: bool) {
        let index = if index < 0 || index >= self.total_count {
            0
        } else {
            index
        };
        self.last_use_animation = use_animation;
        self.move_to(index);
    }

    fn swipe_to(&mut self, index: i32) {
        let total = self.total_count;
        if total <= 0 {
            return;
        }
        let target = if self.is_loop {
            loop_index(index, total)
        } else {
            index.clamp(0, total - 1)
        };
        if target != self.current_index {
            self.move_to(target);
        }
    }

    fn indicator_node(&self) -> Option<NodeId> {
        self.indicator_node
    }

    fn set_indicator_node(&mut self, node: Option<NodeId>) {
        self.indicator_node = node;
    }

    fn set_bind_indicator(&mut self, bind: bool) {
        self.bind_indicator = bind;
    }

    fn is_bind_indicator(&self) -> bool {
        self.bind_indicator
    }

    fn set_stop_indicator_animation(&mut self, callback: Option<StopIndicatorAnimation>) {
        self.stop_indicator_animation = callback;
    }

    fn stop_indicator_animation(&self) {
        if let Some(callback) = &self.stop_indicator_animation {
            callback();
        }
    }

    fn turn_page_rate(&self) -> f32 {
        self.turn_page_rate
    }

    fn set_turn_page_rate(&mut self, rate: f32) {
        self.turn_page_rate = rate;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl std::fmt::Debug for SwiperPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwiperPattern")
            .field("total_count", &self.total_count)
            .field("is_loop", &self.is_loop)
            .field("direction", &self.direction)
            .field("current_index", &self.current_index)
            .field("indicator_node", &self.indicator_node)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SwiperPattern: Send, Sync);
