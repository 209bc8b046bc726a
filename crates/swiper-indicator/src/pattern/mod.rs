//! Indicator pattern: the navigation state machine of an indicator.
//!
//! An indicator runs in one of two modes, decided afresh at every entry
//! point:
//!
//! - **Bound**: the controller's swiper handle resolves to a live swiper.
//!   Every query and command goes to that swiper.
//! - **Standalone**: the pattern owns the current index and reads count,
//!   loop and direction from its [`IndicatorLayoutProperty`].
//!
//! Input handling (keys, drags, clicks) and paint-parameter construction are
//! shared by both modes and go through the resolved behavior.
//!
//! [`IndicatorLayoutProperty`]: crate::IndicatorLayoutProperty

mod behavior;
pub mod paint;

use std::sync::Arc;

use swiper_indicator_core::logging::targets;
use swiper_indicator_core::{
    Axis, Dimension, NodeId, Point, PropertyChangeFlag, ResourceBindings, ResourceObject,
};

use crate::controller::IndicatorController;
use crate::events::{Key, KeyAction, KeyEvent, TouchEvent, TouchType};
use crate::layout_algorithm::IndicatorLayoutAlgorithm;
use crate::paint_property::{DigitPaintStyle, DotPaintStyle};
use crate::parameters::{
    parse_color, parse_item_size, IndicatorStyles, IndicatorType, SwiperDigitalParameters,
    SwiperParameters,
};
use crate::swiper::{loop_index, StopIndicatorAnimation};
use crate::theme::SwiperIndicatorTheme;
use crate::tree::{FrameTree, PatternHost};

use behavior::{IndicatorBehavior, ResolvedBehavior};
pub use behavior::DRAG_END_VELOCITY_THRESHOLD;
pub use paint::{
    DotIndicatorModifier, GestureState, IndicatorPaintParams, PendingPaintHint, TouchBottomType,
    TouchBottomTypeLoop,
};

/// Border radius applied when none was set explicitly, in vp.
pub const DEFAULT_BORDER_RADIUS_VP: f64 = 16.0;
/// Drag distance at which the touch-bottom rate saturates, in vp.
pub const TOUCH_BOTTOM_MAX_DISTANCE_VP: f32 = 80.0;
/// Drag movements shorter than this are ignored, in vp.
pub const LONG_DRAG_MIN_DISTANCE_VP: f32 = 4.0;
/// Drag distance that turns one page, in vp.
pub const LONG_DRAG_MAX_DISTANCE_VP: f32 = 18.0;
/// Prefix of resource binding keys.
pub const RESOURCE_KEY_PREFIX: &str = "swiper.";

type StyleBindings = ResourceBindings<IndicatorStyles, SwiperIndicatorTheme>;

/// State machine behind an indicator node.
pub struct IndicatorPattern {
    controller: Arc<IndicatorController>,
    current_index_in_single_mode: i32,
    has_set_initial_index: bool,
    last_index: i32,
    styles: IndicatorStyles,
    resource_bindings: StyleBindings,
    paint_hint: PendingPaintHint,
    is_custom_size: bool,
    touch_bottom_type: TouchBottomType,
    touch_bottom_rate: f32,
    turn_page_rate: f32,
    drag_start_point: Point,
    is_hover: bool,
    is_pressed: bool,
    dot_modifier: Option<Arc<DotIndicatorModifier>>,
}

impl IndicatorPattern {
    pub fn new(controller: Arc<IndicatorController>) -> Self {
        Self {
            controller,
            current_index_in_single_mode: 0,
            has_set_initial_index: false,
            last_index: 0,
            styles: IndicatorStyles::default(),
            resource_bindings: StyleBindings::new(),
            paint_hint: PendingPaintHint::default(),
            is_custom_size: false,
            touch_bottom_type: TouchBottomType::None,
            touch_bottom_rate: 0.0,
            turn_page_rate: 0.0,
            drag_start_point: Point::ZERO,
            is_hover: false,
            is_pressed: false,
            dot_modifier: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn controller(&self) -> &Arc<IndicatorController> {
        &self.controller
    }

    /// Index owned by the pattern in standalone mode.
    pub fn current_index_in_single_mode(&self) -> i32 {
        self.current_index_in_single_mode
    }

    /// Index before the most recent page step.
    pub fn last_index(&self) -> i32 {
        self.last_index
    }

    pub fn touch_bottom_rate(&self) -> f32 {
        self.touch_bottom_rate
    }

    pub fn touch_bottom_type(&self) -> TouchBottomType {
        self.touch_bottom_type
    }

    /// Hints waiting for the next paint, without consuming them.
    pub fn pending_paint_hint(&self) -> PendingPaintHint {
        self.paint_hint
    }

    pub fn is_custom_size(&self) -> bool {
        self.is_custom_size
    }

    pub fn set_is_custom_size(&mut self, custom: bool) {
        self.is_custom_size = custom;
    }

    pub fn is_hover(&self) -> bool {
        self.is_hover
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn dot_modifier(&self) -> Option<&Arc<DotIndicatorModifier>> {
        self.dot_modifier.as_ref()
    }

    /// Live bound swiper, if the controller's handle still resolves.
    pub fn get_bind_swiper_node(&self, host: &PatternHost<'_>) -> Option<NodeId> {
        self.controller
            .get_swiper_node()
            .filter(|&swiper| host.swiper(swiper).is_some())
    }

    /// Forget the bound swiper.
    pub fn reset_swiper_node(&self) {
        self.controller.reset_swiper_node();
    }

    // =========================================================================
    // Mode-dependent queries
    // =========================================================================

    pub fn get_current_index(&self, host: &PatternHost<'_>) -> i32 {
        ResolvedBehavior::resolve(self, host)
            .get()
            .current_index(self, host)
    }

    pub fn real_total_count(&self, host: &PatternHost<'_>) -> i32 {
        ResolvedBehavior::resolve(self, host).get().total_count(host)
    }

    pub fn is_loop(&self, host: &PatternHost<'_>) -> bool {
        ResolvedBehavior::resolve(self, host).get().is_loop(host)
    }

    pub fn get_direction(&self, host: &PatternHost<'_>) -> Axis {
        ResolvedBehavior::resolve(self, host).get().direction(host)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[tracing::instrument(skip_all, target = "swiper_indicator::pattern", level = "trace")]
    pub fn show_next(&mut self, host: &mut PatternHost<'_>) {
        let resolved = ResolvedBehavior::resolve(self, host);
        resolved.get().show_next(self, host);
    }

    #[tracing::instrument(skip_all, target = "swiper_indicator::pattern", level = "trace")]
    pub fn show_previous(&mut self, host: &mut PatternHost<'_>) {
        let resolved = ResolvedBehavior::resolve(self, host);
        resolved.get().show_previous(self, host);
    }

    #[tracing::instrument(skip(self, host), target = "swiper_indicator::pattern", level = "trace")]
    pub fn change_index(&mut self, host: &mut PatternHost<'_>, index: i32, use_animation: bool) {
        let resolved = ResolvedBehavior::resolve(self, host);
        resolved.get().change_index(self, host, index, use_animation);
    }

    pub fn swipe_to(&mut self, host: &mut PatternHost<'_>, index: i32) {
        let resolved = ResolvedBehavior::resolve(self, host);
        resolved.get().swipe_to(self, host, index);
    }

    /// Apply a requested index in standalone mode.
    ///
    /// Without looping, or while hovered or pressed, out-of-range requests
    /// clamp to the nearest end and fire nothing. Otherwise the index wraps,
    /// is stored, and the change event fires.
    pub fn on_index_change_in_single_mode(&mut self, host: &mut PatternHost<'_>, index: i32) {
        let total = host.layout_property.count_from_property();
        if !host.layout_property.is_loop() || self.is_hover || self.is_pressed {
            self.paint_hint
                .set_touch_bottom_type_loop(TouchBottomTypeLoop::None);
            if index >= total {
                self.current_index_in_single_mode = total - 1;
                tracing::trace!(target: targets::PATTERN, index, total, "clamped to last index");
                return;
            }
            if index < 0 {
                self.current_index_in_single_mode = 0;
                tracing::trace!(target: targets::PATTERN, index, "clamped to first index");
                return;
            }
        }

        self.current_index_in_single_mode = loop_index(index, total);
        host.event_hub
            .fire_change_event(self.current_index_in_single_mode);
        self.on_index_changed(host);
    }

    fn on_index_changed(&mut self, host: &mut PatternHost<'_>) {
        tracing::debug!(target: targets::PATTERN, node = ?host.node(), index = self.current_index_in_single_mode, "indicator index changed");
        host.mark_dirty(PropertyChangeFlag::RENDER);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a key press. Returns `true` if the key turned a page.
    pub fn on_key_event(&mut self, host: &mut PatternHost<'_>, event: KeyEvent) -> bool {
        if event.action != KeyAction::Down {
            return false;
        }
        let resolved = ResolvedBehavior::resolve(self, host);
        let behavior = resolved.get();
        let (previous, next) = match behavior.direction(host) {
            Axis::Horizontal if behavior.is_rtl(host) => (Key::ArrowRight, Key::ArrowLeft),
            Axis::Horizontal => (Key::ArrowLeft, Key::ArrowRight),
            Axis::Vertical => (Key::ArrowUp, Key::ArrowDown),
        };
        if event.key == previous {
            behavior.show_previous(self, host);
            true
        } else if event.key == next {
            behavior.show_next(self, host);
            true
        } else {
            false
        }
    }

    pub fn handle_hover(&mut self, host: &mut PatternHost<'_>, is_hover: bool) {
        if self.is_hover != is_hover {
            self.is_hover = is_hover;
            host.mark_dirty(PropertyChangeFlag::RENDER);
        }
    }

    pub fn handle_pressed(&mut self, host: &mut PatternHost<'_>, is_pressed: bool) {
        if self.is_pressed != is_pressed {
            self.is_pressed = is_pressed;
            host.mark_dirty(PropertyChangeFlag::RENDER);
        }
    }

    /// Track press state from raw touches.
    pub fn handle_touch_event(&mut self, host: &mut PatternHost<'_>, event: TouchEvent) {
        match event.touch_type {
            TouchType::Down => self.handle_pressed(host, true),
            TouchType::Up | TouchType::Cancel => self.handle_pressed(host, false),
            TouchType::Move => {}
        }
    }

    pub fn handle_drag_start(&mut self, host: &mut PatternHost<'_>, location: Point) {
        self.drag_start_point = location;
        self.touch_bottom_type = TouchBottomType::None;
        self.touch_bottom_rate = 0.0;
        let resolved = ResolvedBehavior::resolve(self, host);
        resolved.get().set_turn_page_rate(self, host, 0.0);
    }

    /// Detect a drag pressing against a non-looping boundary.
    ///
    /// Updates the touch-bottom type and rate and returns `true` if the
    /// drag is at a boundary.
    pub fn check_is_touch_bottom(&mut self, host: &mut PatternHost<'_>, location: Point) -> bool {
        let resolved = ResolvedBehavior::resolve(self, host);
        self.check_touch_bottom_with(resolved.get(), host, location)
    }

    fn check_touch_bottom_with(
        &mut self,
        behavior: &dyn IndicatorBehavior,
        host: &PatternHost<'_>,
        location: Point,
    ) -> bool {
        let axis = behavior.direction(host);
        let offset = (location - self.drag_start_point).main_axis(axis);
        let max = host.vp_to_px(TOUCH_BOTTOM_MAX_DISTANCE_VP);
        self.touch_bottom_rate = if max > 0.0 {
            (offset.abs() / max).min(1.0)
        } else {
            1.0
        };

        let effective = if behavior.is_horizontal_rtl(host) {
            -offset
        } else {
            offset
        };
        let current = behavior.current_index(self, host);
        let total = behavior.total_count(host);
        let mut touch_bottom = TouchBottomType::None;
        if !behavior.is_loop(host) {
            if current == 0 && effective < 0.0 {
                touch_bottom = TouchBottomType::Start;
            } else if current == total - 1 && effective > 0.0 {
                touch_bottom = TouchBottomType::End;
            }
        }
        self.touch_bottom_type = touch_bottom;
        touch_bottom != TouchBottomType::None
    }

    /// Turn pages while a long drag moves along the indicator.
    pub fn handle_long_drag_update(&mut self, host: &mut PatternHost<'_>, location: Point) {
        let resolved = ResolvedBehavior::resolve(self, host);
        let behavior = resolved.get();
        if self.check_touch_bottom_with(behavior, host, location) {
            return;
        }

        let axis = behavior.direction(host);
        let mut offset = (location - self.drag_start_point).main_axis(axis);
        if offset.abs() < host.vp_to_px(LONG_DRAG_MIN_DISTANCE_VP) {
            return;
        }
        if behavior.is_horizontal_rtl(host) {
            offset = -offset;
        }

        let rate = -offset / host.vp_to_px(LONG_DRAG_MAX_DISTANCE_VP);
        behavior.set_turn_page_rate(self, host, rate);
        if rate.abs() >= 1.0 {
            if offset > 0.0 {
                behavior.show_next(self, host);
            } else {
                behavior.show_previous(self, host);
            }
            self.drag_start_point = location;
            behavior.set_turn_page_rate(self, host, 0.0);
        }
    }

    /// Finish a drag released with `velocity` px/s along the main axis.
    pub fn handle_drag_end(&mut self, host: &mut PatternHost<'_>, velocity: f32) {
        let resolved = ResolvedBehavior::resolve(self, host);
        let behavior = resolved.get();
        behavior.settle_drag(host, velocity);

        match self.touch_bottom_type {
            TouchBottomType::Start => self.paint_hint.set_gesture_state(GestureState::ReleaseLeft),
            TouchBottomType::End => self.paint_hint.set_gesture_state(GestureState::ReleaseRight),
            TouchBottomType::None => {}
        }
        self.touch_bottom_type = TouchBottomType::None;
        self.touch_bottom_rate = 0.0;
        behavior.set_turn_page_rate(self, host, 0.0);
        host.mark_dirty(PropertyChangeFlag::RENDER);
    }

    /// Select the dot under a click at `location` (node-local).
    pub fn handle_click(&mut self, host: &mut PatternHost<'_>, location: Point) {
        if host.layout_property.indicator_type() != IndicatorType::Dot {
            return;
        }
        let resolved = ResolvedBehavior::resolve(self, host);
        let behavior = resolved.get();
        let algorithm = self.layout_algorithm_with(behavior, host);
        let mirrored = behavior.is_horizontal_rtl(host);
        let Some(index) = algorithm.hit_test_dot(location, mirrored) else {
            tracing::trace!(target: targets::PATTERN, ?location, "click outside dots");
            return;
        };
        behavior.change_index(self, host, index, true);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Apply configuration changes to the node.
    pub fn on_modify_done(&mut self, host: &mut PatternHost<'_>) {
        let total = host.layout_property.count_from_property();
        if !self.has_set_initial_index {
            self.has_set_initial_index = true;
            let initial = host.layout_property.initial_index();
            self.current_index_in_single_mode = if initial < 0 || initial >= total {
                0
            } else {
                initial
            };
        }
        if self.current_index_in_single_mode < 0 || self.current_index_in_single_mode >= total {
            self.current_index_in_single_mode = 0;
        }

        self.update_paint_property(host);

        if let Some(data) = host.node_data_mut() {
            data.border_radius = Some(
                data.user_border_radius
                    .unwrap_or(Dimension::vp(DEFAULT_BORDER_RADIUS_VP)),
            );
            if let Some(focus) = data.focus_hub.as_mut() {
                focus.key_event_enabled = true;
            }
        }

        self.base_on_modify_done(host);
    }

    /// Mode-agnostic part of modify-done. Runs in both modes.
    fn base_on_modify_done(&mut self, host: &mut PatternHost<'_>) {
        let indicator_type = host.layout_property.indicator_type();
        if indicator_type == IndicatorType::Dot && self.dot_modifier.is_none() {
            self.dot_modifier = Some(Arc::new(DotIndicatorModifier::new()));
        }

        if let Some(gesture) = host.node_data_mut().and_then(|d| d.gesture_hub.as_mut()) {
            gesture.touch_enabled = true;
            gesture.click_enabled = indicator_type == IndicatorType::Dot;
        }

        if let Some(swiper_id) = ResolvedBehavior::resolve(self, host).bound_swiper() {
            let stop = self.stop_animation_callback();
            if let Some(swiper) = host.swiper_mut(swiper_id) {
                swiper.set_bind_indicator(true);
                swiper.set_stop_indicator_animation(stop);
            }
        }

        host.mark_dirty(PropertyChangeFlag::MEASURE_SELF | PropertyChangeFlag::RENDER);
    }

    /// Callback a bound swiper runs to halt this indicator's dot animation.
    pub(crate) fn stop_animation_callback(&self) -> Option<StopIndicatorAnimation> {
        self.dot_modifier.clone().map(|modifier| {
            Arc::new(move || modifier.stop_animation()) as StopIndicatorAnimation
        })
    }

    /// Resolve the configured style into the node's paint property.
    pub fn update_paint_property(&mut self, host: &mut PatternHost<'_>) {
        let theme = host.theme;
        let config = host.config;
        match host.layout_property.indicator_type() {
            IndicatorType::Dot => {
                let style = DotPaintStyle::resolve(self.styles.dot_mut(theme), config);
                host.paint_property.save_dot(style);
            }
            IndicatorType::Digit => {
                let style = DigitPaintStyle::resolve(self.styles.digit_mut(theme), config);
                host.paint_property.save_digit(style);
            }
        }
    }

    /// Queue a re-evaluation of the layout direction for the new language.
    pub fn on_language_configuration_update(&mut self, host: &mut PatternHost<'_>) {
        let node = host.node;
        host.tasks
            .post("indicator.language_update", move |tree: &mut FrameTree| {
                tree.apply_language_direction(node);
            });
    }

    // =========================================================================
    // Paint
    // =========================================================================

    /// Build the parameters for the next paint.
    ///
    /// Consumes the pending gesture and loop hints.
    pub fn create_paint_params(&mut self, host: &mut PatternHost<'_>) -> IndicatorPaintParams {
        let resolved = ResolvedBehavior::resolve(self, host);
        let behavior = resolved.get();
        let hint = self.paint_hint.take();
        let params = IndicatorPaintParams {
            current_index: behavior.current_index(self, host),
            total_count: behavior.total_count(host),
            is_loop: behavior.is_loop(host),
            axis: behavior.direction(host),
            is_rtl: behavior.is_rtl(host),
            last_index: self.last_index,
            gesture_state: hint.gesture_state,
            touch_bottom_type_loop: hint.touch_bottom_type_loop,
            touch_bottom_type: self.touch_bottom_type,
            touch_bottom_rate: self.touch_bottom_rate,
            turn_page_rate: behavior.turn_page_rate(self, host),
            indicator_type: host.layout_property.indicator_type(),
            is_custom_size: self.is_custom_size,
            is_hover: self.is_hover,
            is_pressed: self.is_pressed,
        };
        if let Some(modifier) = &self.dot_modifier {
            modifier.apply_paint_params(&params);
        }
        params
    }

    /// Layout algorithm for the current state and style.
    pub fn create_layout_algorithm(&mut self, host: &PatternHost<'_>) -> IndicatorLayoutAlgorithm {
        let resolved = ResolvedBehavior::resolve(self, host);
        self.layout_algorithm_with(resolved.get(), host)
    }

    fn layout_algorithm_with(
        &mut self,
        behavior: &dyn IndicatorBehavior,
        host: &PatternHost<'_>,
    ) -> IndicatorLayoutAlgorithm {
        let indicator_type = host.layout_property.indicator_type();
        let (dot, digit) = match indicator_type {
            IndicatorType::Dot => (
                Some(DotPaintStyle::resolve(self.styles.dot_mut(host.theme), host.config)),
                None,
            ),
            IndicatorType::Digit => (
                None,
                Some(DigitPaintStyle::resolve(
                    self.styles.digit_mut(host.theme),
                    host.config,
                )),
            ),
        };
        IndicatorLayoutAlgorithm {
            indicator_type,
            axis: behavior.direction(host),
            total_count: behavior.total_count(host),
            current_index: behavior.current_index(self, host),
            dot,
            digit,
            density: host.config.density,
        }
    }

    // =========================================================================
    // Style parameters
    // =========================================================================

    /// Dot parameters, created from the theme on first access.
    pub fn get_swiper_parameters(&mut self, theme: &SwiperIndicatorTheme) -> &mut SwiperParameters {
        self.styles.dot_mut(theme)
    }

    /// Digit parameters, created from the theme on first access.
    pub fn get_swiper_digital_parameters(
        &mut self,
        theme: &SwiperIndicatorTheme,
    ) -> &mut SwiperDigitalParameters {
        self.styles.digit_mut(theme)
    }

    pub fn set_swiper_parameters(&mut self, params: SwiperParameters) {
        self.styles.set_dot(params);
    }

    pub fn set_swiper_digital_parameters(&mut self, params: SwiperDigitalParameters) {
        self.styles.set_digit(params);
    }

    /// Keys of the registered resource bindings.
    pub fn resource_keys(&self) -> Vec<String> {
        self.resource_bindings.keys().map(str::to_owned).collect()
    }

    fn bind_resource<F>(&mut self, field: &str, resource: Option<Arc<ResourceObject>>, update: F)
    where
        F: Fn(&ResourceObject, &mut IndicatorStyles, &SwiperIndicatorTheme) + Send + Sync + 'static,
    {
        let key = format!("{RESOURCE_KEY_PREFIX}{field}");
        match resource {
            Some(resource) => self.resource_bindings.add_res_obj(key, resource, Box::new(update)),
            None => {
                self.resource_bindings.remove_res_obj(&key);
            }
        }
    }

    /// Bind a dot size field (`itemWidth`, `itemHeight`, `selectedItemWidth`,
    /// `selectedItemHeight`) to a resource, or unbind it with `None`.
    pub fn process_dot_size_with_resource_obj(
        &mut self,
        field: &str,
        resource: Option<Arc<ResourceObject>>,
    ) {
        let name = field.to_owned();
        self.bind_resource(field, resource, move |res, styles, theme| {
            let size = parse_item_size(&res.value(), theme.size);
            styles.dot_mut(theme).set_size_field(&name, size);
        });
    }

    /// Bind a dot color field (`color`, `selectedColor`) to a resource.
    pub fn process_dot_color_with_resource_obj(
        &mut self,
        field: &str,
        resource: Option<Arc<ResourceObject>>,
    ) {
        let name = field.to_owned();
        self.bind_resource(field, resource, move |res, styles, theme| {
            let fallback = if name == "selectedColor" {
                theme.selected_color
            } else {
                theme.color
            };
            let color = parse_color(&res.value()).unwrap_or(fallback);
            styles.dot_mut(theme).set_color_field(&name, color);
        });
    }

    /// Bind a digit font size field (`fontSize`, `selectedFontSize`) to a resource.
    pub fn process_digital_font_size_with_resource_obj(
        &mut self,
        field: &str,
        resource: Option<Arc<ResourceObject>>,
    ) {
        let name = field.to_owned();
        self.bind_resource(field, resource, move |res, styles, theme| {
            let size = parse_item_size(&res.value(), theme.digit_text_style.font_size);
            styles.digit_mut(theme).set_font_size_field(&name, size);
        });
    }

    /// Bind a digit color field (`fontColor`, `selectedFontColor`) to a resource.
    pub fn process_digital_color_with_resource_obj(
        &mut self,
        field: &str,
        resource: Option<Arc<ResourceObject>>,
    ) {
        let name = field.to_owned();
        self.bind_resource(field, resource, move |res, styles, theme| {
            let fallback = if name == "selectedFontColor" {
                theme.digit_selected_text_color
            } else {
                theme.digit_text_style.text_color
            };
            let color = parse_color(&res.value()).unwrap_or(fallback);
            styles.digit_mut(theme).set_color_field(&name, color);
        });
    }

    /// Re-run every resource binding and refresh the paint property.
    pub fn reload_resources(&mut self, host: &mut PatternHost<'_>) {
        self.resource_bindings.reload(&mut self.styles, host.theme);
        self.update_paint_property(host);
        host.mark_dirty(PropertyChangeFlag::MEASURE_SELF | PropertyChangeFlag::RENDER);
    }
}

impl std::fmt::Debug for IndicatorPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorPattern")
            .field("current_index_in_single_mode", &self.current_index_in_single_mode)
            .field("last_index", &self.last_index)
            .field("swiper_node", &self.controller.get_swiper_node())
            .field("resource_bindings", &self.resource_bindings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
