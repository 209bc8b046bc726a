//! Paint-side state of an indicator: one-shot hints, paint parameters and
//! the dot animation modifier.

use parking_lot::Mutex;
use swiper_indicator_core::Axis;

use crate::parameters::IndicatorType;

/// Direction hint of the last gesture, used to pick the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    None,
    ReleaseLeft,
    ReleaseRight,
}

/// Boundary a drag is pressing against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchBottomType {
    #[default]
    None,
    Start,
    End,
}

/// Loop boundary crossed by the last page step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchBottomTypeLoop {
    #[default]
    None,
    LoopLeft,
    LoopRight,
}

/// Hints produced by input handling and consumed by the next paint.
///
/// [`take`](Self::take) returns the pending hints and resets them, so each
/// hint is observed by exactly one paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingPaintHint {
    pub gesture_state: GestureState,
    pub touch_bottom_type_loop: TouchBottomTypeLoop,
}

impl PendingPaintHint {
    pub fn set_gesture_state(&mut self, state: GestureState) {
        self.gesture_state = state;
    }

    pub fn set_touch_bottom_type_loop(&mut self, loop_type: TouchBottomTypeLoop) {
        self.touch_bottom_type_loop = loop_type;
    }

    /// Consume the pending hints.
    pub fn take(&mut self) -> PendingPaintHint {
        std::mem::take(self)
    }
}

/// Everything the paint method needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPaintParams {
    pub current_index: i32,
    pub total_count: i32,
    pub is_loop: bool,
    pub axis: Axis,
    pub is_rtl: bool,
    pub last_index: i32,
    pub gesture_state: GestureState,
    pub touch_bottom_type_loop: TouchBottomTypeLoop,
    pub touch_bottom_type: TouchBottomType,
    pub touch_bottom_rate: f32,
    pub turn_page_rate: f32,
    pub indicator_type: IndicatorType,
    pub is_custom_size: bool,
    pub is_hover: bool,
    pub is_pressed: bool,
}

#[derive(Debug, Default)]
struct ModifierState {
    displayed_index: Option<i32>,
    target_index: i32,
    index_animating: bool,
    touch_bottom_animating: bool,
}

/// Animation state of a dot indicator.
///
/// Shared between the pattern and the swiper's stop-animation callback.
#[derive(Debug, Default)]
pub struct DotIndicatorModifier {
    state: Mutex<ModifierState>,
}

impl DotIndicatorModifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the animations implied by a new set of paint parameters.
    pub fn apply_paint_params(&self, params: &IndicatorPaintParams) {
        let mut state = self.state.lock();
        if params.touch_bottom_type_loop != TouchBottomTypeLoop::None {
            state.touch_bottom_animating = true;
        }
        match state.displayed_index {
            Some(shown) if shown != params.current_index => state.index_animating = true,
            Some(_) => {}
            None => state.displayed_index = Some(params.current_index),
        }
        state.target_index = params.current_index;
    }

    /// Jump every running animation to its end state.
    pub fn finish_animation_to_target_immediately(&self) {
        let mut state = self.state.lock();
        state.displayed_index = Some(state.target_index);
        state.index_animating = false;
        state.touch_bottom_animating = false;
    }

    /// Halt every running animation where it is.
    pub fn stop_animation(&self) {
        let mut state = self.state.lock();
        state.index_animating = false;
        state.touch_bottom_animating = false;
    }

    pub fn is_touch_bottom_animation_finished(&self) -> bool {
        !self.state.lock().touch_bottom_animating
    }

    pub fn is_index_animating(&self) -> bool {
        self.state.lock().index_animating
    }

    /// Index currently drawn as selected, if anything was drawn yet.
    pub fn displayed_index(&self) -> Option<i32> {
        self.state.lock().displayed_index
    }
}

static_assertions::assert_impl_all!(DotIndicatorModifier: Send, Sync);
