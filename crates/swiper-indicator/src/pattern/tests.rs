//! Tests for the indicator pattern.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use swiper_indicator_core::{Dimension, NodeId, Point, ResourceObject, TextDirection};

use super::*;
use crate::event_hub::ChangeEvent;
use crate::swiper::SwiperPattern;

fn setup(count: i32, is_loop: bool) -> (FrameTree, NodeId) {
    let mut tree = FrameTree::new();
    let (node, _) = tree.create_indicator();
    tree.with_indicator_layout(node, |prop| {
        let a = prop.update_count(count);
        let b = prop.update_loop(is_loop);
        a || b
    });
    tree.modify_done(node);
    (tree, node)
}

fn count_changes(tree: &FrameTree, node: NodeId) -> Arc<AtomicI32> {
    let calls = Arc::new(AtomicI32::new(0));
    let counter = calls.clone();
    let event: ChangeEvent = Arc::new(move |_index: &i32| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    tree.indicator(node).unwrap().event_hub().add_on_change_event(event);
    calls
}

fn pattern(tree: &FrameTree, node: NodeId) -> &IndicatorPattern {
    tree.indicator(node).unwrap().pattern()
}

#[test]
fn test_show_next_clamps_without_loop() {
    let (mut tree, node) = setup(4, false);
    tree.with_pattern(node, |p, host| p.change_index(host, 1, false));
    let calls = count_changes(&tree, node);

    for _ in 0..3 {
        tree.with_pattern(node, |p, host| p.show_next(host));
    }
    assert_eq!(tree.current_index(node), Some(3));
    // 1 -> 2 -> 3 fire, the clamped step does not.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_show_next_wraps_with_loop() {
    let (mut tree, node) = setup(4, true);
    tree.with_pattern(node, |p, host| p.change_index(host, 3, false));
    tree.with_pattern(node, |p, host| p.show_next(host));

    assert_eq!(tree.current_index(node), Some(0));
    let p = pattern(&tree, node);
    assert_eq!(p.last_index(), 3);
    let hint = p.pending_paint_hint();
    assert_eq!(hint.gesture_state, GestureState::ReleaseRight);
    assert_eq!(hint.touch_bottom_type_loop, TouchBottomTypeLoop::LoopRight);
}

#[test]
fn test_show_previous_wraps_with_loop() {
    let (mut tree, node) = setup(4, true);
    tree.with_pattern(node, |p, host| p.show_previous(host));

    assert_eq!(tree.current_index(node), Some(3));
    let hint = pattern(&tree, node).pending_paint_hint();
    assert_eq!(hint.gesture_state, GestureState::ReleaseLeft);
    assert_eq!(hint.touch_bottom_type_loop, TouchBottomTypeLoop::LoopLeft);
}

#[test]
fn test_hover_disables_wrapping() {
    let (mut tree, node) = setup(4, true);
    tree.with_pattern(node, |p, host| {
        p.change_index(host, 3, false);
        p.handle_hover(host, true);
    });
    let calls = count_changes(&tree, node);

    tree.with_pattern(node, |p, host| p.show_next(host));
    assert_eq!(tree.current_index(node), Some(3));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let hint = pattern(&tree, node).pending_paint_hint();
    assert_eq!(hint.touch_bottom_type_loop, TouchBottomTypeLoop::None);
}

#[test]
fn test_pressed_touch_disables_wrapping() {
    let (mut tree, node) = setup(3, true);
    tree.with_pattern(node, |p, host| {
        p.handle_touch_event(host, TouchEvent::new(TouchType::Down, (5.0, 5.0)));
        p.show_previous(host);
    });
    assert_eq!(tree.current_index(node), Some(0));
    assert!(pattern(&tree, node).is_pressed());

    tree.with_pattern(node, |p, host| {
        p.handle_touch_event(host, TouchEvent::new(TouchType::Up, (5.0, 5.0)));
        p.show_previous(host);
    });
    assert_eq!(tree.current_index(node), Some(2));
}

#[test]
fn test_change_index_normalizes_out_of_range() {
    let (mut tree, node) = setup(4, true);
    tree.with_pattern(node, |p, host| p.change_index(host, 2, false));
    tree.with_pattern(node, |p, host| p.change_index(host, 7, true));
    assert_eq!(tree.current_index(node), Some(0));

    tree.with_pattern(node, |p, host| p.change_index(host, -1, true));
    assert_eq!(tree.current_index(node), Some(0));
}

#[test]
fn test_change_index_animation_hint() {
    let (mut tree, node) = setup(4, false);
    tree.with_pattern(node, |p, host| p.change_index(host, 2, true));
    assert_eq!(
        pattern(&tree, node).pending_paint_hint().gesture_state,
        GestureState::ReleaseRight
    );

    tree.with_pattern(node, |p, host| p.change_index(host, 1, true));
    assert_eq!(
        pattern(&tree, node).pending_paint_hint().gesture_state,
        GestureState::ReleaseLeft
    );

    tree.with_pattern(node, |p, host| p.change_index(host, 3, false));
    assert_eq!(
        pattern(&tree, node).pending_paint_hint().gesture_state,
        GestureState::None
    );
}

#[test]
fn test_paint_params_consume_hints() {
    let (mut tree, node) = setup(4, true);
    tree.with_pattern(node, |p, host| p.show_previous(host));

    let first = tree
        .with_pattern(node, |p, host| p.create_paint_params(host))
        .unwrap();
    assert_eq!(first.current_index, 3);
    assert_eq!(first.gesture_state, GestureState::ReleaseLeft);
    assert_eq!(first.touch_bottom_type_loop, TouchBottomTypeLoop::LoopLeft);

    let second = tree
        .with_pattern(node, |p, host| p.create_paint_params(host))
        .unwrap();
    assert_eq!(second.gesture_state, GestureState::None);
    assert_eq!(second.touch_bottom_type_loop, TouchBottomTypeLoop::None);
}

#[test]
fn test_initial_index_applied_once() {
    let mut tree = FrameTree::new();
    let (node, _) = tree.create_indicator();
    tree.with_indicator_layout(node, |prop| {
        let a = prop.update_count(5);
        let b = prop.update_initial_index(2);
        a || b
    });
    tree.modify_done(node);
    assert_eq!(tree.current_index(node), Some(2));

    tree.with_pattern(node, |p, host| p.show_next(host));
    tree.modify_done(node);
    assert_eq!(tree.current_index(node), Some(3));
}

#[test]
fn test_initial_index_out_of_range_falls_back_to_zero() {
    let mut tree = FrameTree::new();
    let (node, _) = tree.create_indicator();
    tree.with_indicator_layout(node, |prop| {
        let a = prop.update_count(4);
        let b = prop.update_initial_index(9);
        a || b
    });
    tree.modify_done(node);
    assert_eq!(tree.current_index(node), Some(0));
}

#[test]
fn test_shrinking_count_resets_index() {
    let (mut tree, node) = setup(5, false);
    tree.with_pattern(node, |p, host| p.change_index(host, 4, false));
    tree.with_indicator_layout(node, |prop| prop.update_count(2));
    tree.modify_done(node);
    assert_eq!(tree.current_index(node), Some(0));
}

#[test]
fn test_modify_done_sets_border_radius_and_focus() {
    let (tree, node) = setup(3, true);
    let data = tree.registry().get(node).unwrap();
    assert_eq!(data.border_radius, Some(Dimension::vp(DEFAULT_BORDER_RADIUS_VP)));
    assert!(data.focus_hub.is_some_and(|hub| hub.key_event_enabled));
    assert!(pattern(&tree, node).dot_modifier().is_some());
}

#[test]
fn test_modify_done_keeps_user_border_radius() {
    let mut tree = FrameTree::new();
    let (node, _) = tree.create_indicator();
    if let Some(data) = tree.registry_mut().get_mut(node) {
        data.user_border_radius = Some(Dimension::vp(4.0));
    }
    tree.modify_done(node);
    let radius = tree.registry().get(node).and_then(|d| d.border_radius);
    assert_eq!(radius, Some(Dimension::vp(4.0)));
}

#[test]
fn test_standalone_modify_done_leaves_swipers_alone() {
    let mut tree = FrameTree::new();
    let swiper = tree.create_swiper(SwiperPattern::new(3));
    let (node, _) = tree.create_indicator();
    tree.modify_done(node);

    let swiper = tree.swiper(swiper).unwrap();
    assert!(!swiper.is_bind_indicator());
    assert_eq!(swiper.indicator_node(), None);
}

#[test]
fn test_bound_mode_delegates_to_swiper() {
    let (mut tree, node) = setup(4, false);
    let controller = tree.controller_of(node).unwrap();
    let swiper = tree.create_swiper(SwiperPattern::new(6).with_index(2));
    controller.set_swiper_node(&mut tree, swiper);
    tree.modify_done(node);

    assert!(tree.swiper(swiper).unwrap().is_bind_indicator());
    assert_eq!(tree.current_index(node), Some(2));
    let total = tree.with_pattern(node, |p, host| p.real_total_count(host));
    assert_eq!(total, Some(6));

    tree.with_pattern(node, |p, host| p.show_next(host));
    assert_eq!(tree.swiper(swiper).unwrap().current_index(), 3);
    assert_eq!(pattern(&tree, node).current_index_in_single_mode(), 0);
}

#[test]
fn test_destroyed_swiper_falls_back_to_standalone() {
    let (mut tree, node) = setup(4, false);
    let controller = tree.controller_of(node).unwrap();
    let swiper = tree.create_swiper(SwiperPattern::new(6).with_index(5));
    controller.set_swiper_node(&mut tree, swiper);
    assert_eq!(tree.current_index(node), Some(5));

    tree.remove_node(swiper).unwrap();
    assert_eq!(tree.current_index(node), Some(0));
    tree.with_pattern(node, |p, host| p.show_next(host));
    assert_eq!(tree.current_index(node), Some(1));
}

#[test]
fn test_key_mapping_follows_direction() {
    let (mut tree, node) = setup(4, false);
    assert!(tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowRight)));
    assert_eq!(tree.current_index(node), Some(1));
    assert!(!tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowDown)));
    assert!(!tree.dispatch_key_event(node, KeyEvent::up(Key::ArrowRight)));
    assert_eq!(tree.current_index(node), Some(1));

    tree.set_layout_direction(node, TextDirection::Rtl);
    assert!(tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowLeft)));
    assert_eq!(tree.current_index(node), Some(2));
    assert!(tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowRight)));
    assert_eq!(tree.current_index(node), Some(1));
}

#[test]
fn test_key_mapping_vertical() {
    let (mut tree, node) = setup(4, false);
    tree.with_indicator_layout(node, |prop| prop.update_direction(Axis::Vertical));
    assert!(tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowDown)));
    assert_eq!(tree.current_index(node), Some(1));
    assert!(tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowUp)));
    assert_eq!(tree.current_index(node), Some(0));
    assert!(!tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowLeft)));
}

#[test]
fn test_long_drag_turns_pages() {
    let (mut tree, node) = setup(4, false);
    tree.with_pattern(node, |p, host| {
        p.handle_drag_start(host, Point::ZERO);
        p.handle_long_drag_update(host, Point::new(2.0, 0.0));
    });
    assert_eq!(tree.current_index(node), Some(0));

    tree.with_pattern(node, |p, host| p.handle_long_drag_update(host, Point::new(10.0, 0.0)));
    assert_eq!(tree.current_index(node), Some(0));
    let params = tree
        .with_pattern(node, |p, host| p.create_paint_params(host))
        .unwrap();
    assert!((params.turn_page_rate + 10.0 / LONG_DRAG_MAX_DISTANCE_VP).abs() < 1e-4);

    tree.with_pattern(node, |p, host| p.handle_long_drag_update(host, Point::new(20.0, 0.0)));
    assert_eq!(tree.current_index(node), Some(1));
}

#[test]
fn test_drag_against_start_reports_touch_bottom() {
    let (mut tree, node) = setup(4, false);
    let at_bottom = tree
        .with_pattern(node, |p, host| {
            p.handle_drag_start(host, Point::ZERO);
            p.check_is_touch_bottom(host, Point::new(-40.0, 0.0))
        })
        .unwrap();
    assert!(at_bottom);
    let p = pattern(&tree, node);
    assert_eq!(p.touch_bottom_type(), TouchBottomType::Start);
    assert!((p.touch_bottom_rate() - 0.5).abs() < 1e-4);

    tree.with_pattern(node, |p, host| p.handle_drag_end(host, 0.0));
    let p = pattern(&tree, node);
    assert_eq!(p.touch_bottom_type(), TouchBottomType::None);
    assert_eq!(p.pending_paint_hint().gesture_state, GestureState::ReleaseLeft);
}

#[test]
fn test_rtl_drag_flips_touch_bottom_side() {
    let (mut tree, node) = setup(4, false);
    tree.set_layout_direction(node, TextDirection::Rtl);
    let at_bottom = tree
        .with_pattern(node, |p, host| {
            p.handle_drag_start(host, Point::ZERO);
            p.check_is_touch_bottom(host, Point::new(40.0, 0.0))
        })
        .unwrap();
    assert!(at_bottom);
    assert_eq!(pattern(&tree, node).touch_bottom_type(), TouchBottomType::Start);

    let at_bottom = tree
        .with_pattern(node, |p, host| p.check_is_touch_bottom(host, Point::new(-40.0, 0.0)))
        .unwrap();
    assert!(!at_bottom);
    assert_eq!(pattern(&tree, node).touch_bottom_type(), TouchBottomType::None);
}

#[test]
fn test_rtl_long_drag_turns_pages_the_other_way() {
    let (mut tree, node) = setup(4, false);
    tree.set_layout_direction(node, TextDirection::Rtl);
    tree.with_pattern(node, |p, host| {
        p.handle_drag_start(host, Point::ZERO);
        p.handle_long_drag_update(host, Point::new(20.0, 0.0));
    });
    assert_eq!(tree.current_index(node), Some(0));

    tree.with_pattern(node, |p, host| {
        p.handle_drag_start(host, Point::ZERO);
        p.handle_long_drag_update(host, Point::new(-20.0, 0.0));
    });
    assert_eq!(tree.current_index(node), Some(1));
}

#[test]
fn test_rtl_swaps_release_hint() {
    let (mut tree, node) = setup(4, false);
    tree.with_pattern(node, |p, host| p.show_next(host));
    assert_eq!(pattern(&tree, node).pending_paint_hint().gesture_state, GestureState::ReleaseRight);

    tree.set_layout_direction(node, TextDirection::Rtl);
    tree.with_pattern(node, |p, host| p.show_next(host));
    assert_eq!(pattern(&tree, node).pending_paint_hint().gesture_state, GestureState::ReleaseLeft);
    tree.with_pattern(node, |p, host| p.show_previous(host));
    assert_eq!(pattern(&tree, node).pending_paint_hint().gesture_state, GestureState::ReleaseRight);
}

#[test]
fn test_drag_with_loop_never_touches_bottom() {
    let (mut tree, node) = setup(4, true);
    let at_bottom = tree
        .with_pattern(node, |p, host| {
            p.handle_drag_start(host, Point::ZERO);
            p.check_is_touch_bottom(host, Point::new(-200.0, 0.0))
        })
        .unwrap();
    assert!(!at_bottom);
    assert!((pattern(&tree, node).touch_bottom_rate() - 1.0).abs() < 1e-4);
}

#[test]
fn test_bound_drag_end_uses_velocity() {
    let (mut tree, node) = setup(4, false);
    let controller = tree.controller_of(node).unwrap();
    let swiper = tree.create_swiper(SwiperPattern::new(5).with_index(2));
    controller.set_swiper_node(&mut tree, swiper);

    tree.with_pattern(node, |p, host| p.handle_drag_end(host, 500.0));
    assert_eq!(tree.current_index(node), Some(2));
    tree.with_pattern(node, |p, host| p.handle_drag_end(host, 1500.0));
    assert_eq!(tree.current_index(node), Some(3));
    tree.with_pattern(node, |p, host| p.handle_drag_end(host, -1500.0));
    assert_eq!(tree.current_index(node), Some(2));
}

#[test]
fn test_click_selects_dot() {
    let (mut tree, node) = setup(4, false);
    let target = tree
        .with_pattern(node, |p, host| p.create_layout_algorithm(host).dot_rect(2))
        .flatten()
        .unwrap();
    let center = Point::new(
        target.origin.x + target.width() / 2.0,
        target.origin.y + target.height() / 2.0,
    );

    tree.with_pattern(node, |p, host| p.handle_click(host, center));
    assert_eq!(tree.current_index(node), Some(2));
}

#[test]
fn test_rtl_click_is_mirrored() {
    let (mut tree, node) = setup(4, false);
    tree.set_layout_direction(node, TextDirection::Rtl);
    let algorithm = tree
        .with_pattern(node, |p, host| p.create_layout_algorithm(host))
        .unwrap();
    let target = algorithm.dot_rect(2).unwrap();
    let center_x = target.origin.x + target.width() / 2.0;
    let center_y = target.origin.y + target.height() / 2.0;
    let mirrored = Point::new(algorithm.measure().width - center_x, center_y);

    tree.with_pattern(node, |p, host| p.handle_click(host, mirrored));
    assert_eq!(tree.current_index(node), Some(2));
}

#[test]
fn test_click_ignored_for_digit() {
    let (mut tree, node) = setup(4, false);
    tree.with_indicator_layout(node, |prop| prop.update_indicator_type(IndicatorType::Digit));
    tree.modify_done(node);
    tree.with_pattern(node, |p, host| p.handle_click(host, Point::new(40.0, 15.0)));
    assert_eq!(tree.current_index(node), Some(0));
}

#[test]
fn test_dot_color_resource_binding() {
    let (mut tree, node) = setup(3, true);
    let resource = Arc::new(ResourceObject::new("#FF00FF00"));
    tree.with_pattern(node, |p, _| {
        p.process_dot_color_with_resource_obj("color", Some(resource.clone()))
    });
    assert_eq!(pattern(&tree, node).resource_keys(), vec!["swiper.color".to_owned()]);

    assert!(tree.on_resource_reload(node));
    let color = tree
        .indicator(node)
        .and_then(|n| n.paint_property().dot())
        .map(|d| d.color);
    assert_eq!(color, parse_color("#FF00FF00"));

    resource.set_value("not a color");
    tree.on_resource_reload(node);
    let color = tree
        .indicator(node)
        .and_then(|n| n.paint_property().dot())
        .map(|d| d.color);
    assert_eq!(color, Some(tree.theme().color));
}

#[test]
fn test_rebinding_same_key_replaces_binding() {
    let (mut tree, node) = setup(3, true);
    let first = Arc::new(ResourceObject::new("10vp"));
    let second = Arc::new(ResourceObject::new("20vp"));
    tree.with_pattern(node, |p, _| {
        p.process_dot_size_with_resource_obj("itemWidth", Some(first));
        p.process_dot_size_with_resource_obj("itemWidth", Some(second));
    });
    assert_eq!(pattern(&tree, node).resource_keys().len(), 1);

    tree.on_resource_reload(node);
    let width = tree
        .indicator(node)
        .and_then(|n| n.paint_property().dot())
        .map(|d| d.item_width);
    assert_eq!(width, Some(20.0));

    tree.with_pattern(node, |p, _| p.process_dot_size_with_resource_obj("itemWidth", None));
    assert!(pattern(&tree, node).resource_keys().is_empty());
}

#[test]
fn test_digit_font_size_resource_binding() {
    let (mut tree, node) = setup(3, true);
    tree.with_indicator_layout(node, |prop| prop.update_indicator_type(IndicatorType::Digit));
    tree.modify_done(node);
    let resource = Arc::new(ResourceObject::new("20fp"));
    tree.with_pattern(node, |p, _| {
        p.process_digital_font_size_with_resource_obj("selectedFontSize", Some(resource))
    });

    tree.reload_all_resources();
    let size = tree
        .indicator(node)
        .and_then(|n| n.paint_property().digit())
        .map(|d| d.selected_font_size);
    assert_eq!(size, Some(20.0));
}

#[test]
fn test_language_update_is_deferred() {
    let (mut tree, node) = setup(3, true);
    tree.config_mut().language = "ar".to_owned();
    tree.with_pattern(node, |p, host| p.on_language_configuration_update(host));

    let direction = |tree: &FrameTree| tree.registry().get(node).map(|d| d.layout_direction);
    assert_eq!(direction(&tree), Some(TextDirection::Ltr));
    assert_eq!(tree.flush_tasks(), 1);
    assert_eq!(direction(&tree), Some(TextDirection::Rtl));
}

#[test]
fn test_language_task_after_destroy_is_noop() {
    let (mut tree, node) = setup(3, true);
    tree.with_pattern(node, |p, host| p.on_language_configuration_update(host));
    tree.remove_node(node).unwrap();
    assert_eq!(tree.flush_tasks(), 1);
    assert!(!tree.contains(node));
}
