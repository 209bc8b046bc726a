//! End-to-end indicator scenarios across the model, controller, pattern
//! and swiper.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use swiper_indicator::{
    Axis, FrameTree, IndicatorController, IndicatorModel, NodeId, ResourceObject, RuntimeConfig,
    StyleResources, SwiperParameters, SwiperPattern, TextDirection,
    DEFAULT_COUNT,
};
use swiper_indicator::events::{Key, KeyEvent};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build(tree: &mut FrameTree, count: i32, initial: i32, is_loop: bool) -> (NodeId, Arc<IndicatorController>) {
    let controller = IndicatorModel::create(tree);
    IndicatorModel::set_count(tree, count);
    IndicatorModel::set_initial_index(tree, initial);
    IndicatorModel::set_loop(tree, is_loop);
    let node = IndicatorModel::finish(tree).unwrap();
    (node, controller)
}

fn record_changes(tree: &mut FrameTree, node: NodeId) -> Arc<Mutex<Vec<i32>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    IndicatorModel::set_on_change_by_node(
        tree,
        node,
        Arc::new(move |index: &i32| sink.lock().push(*index)),
    );
    seen
}

fn request_index(tree: &mut FrameTree, node: NodeId, index: i32) -> i32 {
    tree.with_pattern(node, |pattern, host| {
        pattern.swipe_to(host, index);
        pattern.current_index_in_single_mode()
    })
    .unwrap()
}

#[test]
fn test_non_loop_requests_stay_in_range() {
    init_logging();
    for count in 1..=6 {
        let mut tree = FrameTree::new();
        let (node, _) = build(&mut tree, count, 0, false);
        for requested in -8..=12 {
            let index = request_index(&mut tree, node, requested);
            assert!((0..count).contains(&index), "count {count}, requested {requested}");
            if requested >= count {
                assert_eq!(index, count - 1);
            } else if requested < 0 {
                assert_eq!(index, 0);
            } else {
                assert_eq!(index, requested);
            }
        }
    }
}

#[test]
fn test_loop_requests_wrap() {
    for count in 1..=6 {
        let mut tree = FrameTree::new();
        let (node, _) = build(&mut tree, count, 0, true);
        for requested in -15..=15 {
            let index = request_index(&mut tree, node, requested);
            assert_eq!(index, ((requested % count) + count) % count);
        }
    }
}

#[test]
fn test_change_index_fires_every_time() {
    let mut tree = FrameTree::new();
    let (node, controller) = build(&mut tree, 5, 0, false);
    let seen = record_changes(&mut tree, node);

    controller.change_index(&mut tree, 3, false);
    controller.change_index(&mut tree, 3, false);
    assert_eq!(tree.current_index(node), Some(3));
    assert_eq!(*seen.lock(), vec![3, 3]);
}

#[test]
fn test_show_next_clamps_at_last_page() {
    init_logging();
    let mut tree = FrameTree::new();
    let (node, controller) = build(&mut tree, 4, 1, false);
    let seen = record_changes(&mut tree, node);

    controller.show_next(&mut tree);
    assert_eq!(tree.current_index(node), Some(2));
    controller.show_next(&mut tree);
    assert_eq!(tree.current_index(node), Some(3));
    controller.show_next(&mut tree);
    assert_eq!(tree.current_index(node), Some(3));
    assert_eq!(*seen.lock(), vec![2, 3]);
}

#[test]
fn test_show_next_wraps_with_loop() {
    let mut tree = FrameTree::new();
    let (node, controller) = build(&mut tree, 4, 3, true);
    controller.show_next(&mut tree);
    assert_eq!(tree.current_index(node), Some(0));
}

#[test]
fn test_rtl_flips_keys_not_index_steps() {
    let mut tree = FrameTree::new();
    let (node, controller) = build(&mut tree, 4, 1, false);
    tree.set_layout_direction(node, TextDirection::Rtl);

    controller.show_next(&mut tree);
    assert_eq!(tree.current_index(node), Some(2));

    assert!(tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowLeft)));
    assert_eq!(tree.current_index(node), Some(3));
    assert!(tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowRight)));
    assert_eq!(tree.current_index(node), Some(2));
}

#[test]
fn test_bound_show_next_leaves_standalone_state() {
    let mut tree = FrameTree::new();
    let (node, controller) = build(&mut tree, 4, 2, false);
    let seen = record_changes(&mut tree, node);
    let swiper = tree.create_swiper(SwiperPattern::new(8).with_index(5));
    controller.set_swiper_node(&mut tree, swiper);

    let bound = tree.with_pattern(node, |pattern, host| pattern.get_bind_swiper_node(host));
    assert_eq!(bound, Some(Some(swiper)));

    controller.show_next(&mut tree);
    assert_eq!(tree.swiper(swiper).map(|s| s.current_index()), Some(6));
    assert_eq!(tree.current_index(node), Some(6));

    let pattern = tree.indicator(node).unwrap().pattern();
    assert_eq!(pattern.current_index_in_single_mode(), 2);
    assert!(seen.lock().is_empty());
}

#[test]
fn test_bound_swiper_signal_reports_changes() {
    let mut tree = FrameTree::new();
    let (_node, controller) = build(&mut tree, 4, 0, false);
    let swiper = tree.create_swiper(SwiperPattern::new(3).with_loop(false));
    let last = Arc::new(AtomicI32::new(-1));
    let sink = last.clone();
    tree.swiper_as::<SwiperPattern>(swiper)
        .unwrap()
        .change_event
        .connect(move |index: &i32| sink.store(*index, Ordering::SeqCst));
    controller.set_swiper_node(&mut tree, swiper);

    controller.change_index(&mut tree, 2, true);
    assert_eq!(last.load(Ordering::SeqCst), 2);
    assert!(tree.swiper_as::<SwiperPattern>(swiper).unwrap().last_use_animation());

    controller.show_next(&mut tree);
    assert_eq!(tree.swiper(swiper).map(|s| s.current_index()), Some(2));
}

#[test]
fn test_second_indicator_displaces_first() {
    let mut tree = FrameTree::new();
    let (first, first_controller) = build(&mut tree, 4, 0, false);
    let (second, second_controller) = build(&mut tree, 4, 0, false);
    let swiper = tree.create_swiper(SwiperPattern::new(5));

    first_controller.set_swiper_node(&mut tree, swiper);
    assert_eq!(first_controller.get_swiper_node(), Some(swiper));

    second_controller.set_swiper_node(&mut tree, swiper);
    assert_eq!(first_controller.get_swiper_node(), None);
    assert_eq!(second_controller.get_swiper_node(), Some(swiper));
    assert_eq!(tree.swiper(swiper).and_then(|s| s.indicator_node()), Some(second));

    // The displaced indicator is standalone again.
    first_controller.show_next(&mut tree);
    assert_eq!(tree.current_index(first), Some(1));
    assert_eq!(tree.swiper(swiper).map(|s| s.current_index()), Some(0));
}

fn start_loop_animation(tree: &mut FrameTree, node: NodeId) {
    tree.with_pattern(node, |pattern, host| {
        pattern.show_next(host);
        pattern.create_paint_params(host);
    });
}

fn touch_bottom_finished(tree: &FrameTree, node: NodeId) -> bool {
    tree.indicator(node)
        .and_then(|n| n.pattern().dot_modifier())
        .is_some_and(|m| m.is_touch_bottom_animation_finished())
}

#[test]
fn test_displacing_indicator_takes_over_stop_callback() {
    let mut tree = FrameTree::new();
    let (first, first_controller) = build(&mut tree, 4, 3, true);
    let (second, second_controller) = build(&mut tree, 4, 3, true);
    start_loop_animation(&mut tree, first);
    start_loop_animation(&mut tree, second);
    assert!(!touch_bottom_finished(&tree, first));
    assert!(!touch_bottom_finished(&tree, second));

    let swiper = tree.create_swiper(SwiperPattern::new(5));
    first_controller.set_swiper_node(&mut tree, swiper);
    tree.modify_done(first);
    second_controller.set_swiper_node(&mut tree, swiper);
    assert!(tree.swiper(swiper).unwrap().is_bind_indicator());

    // Swiper navigation halts the animation of the indicator it now shows.
    second_controller.show_next(&mut tree);
    assert!(touch_bottom_finished(&tree, second));
    assert!(!touch_bottom_finished(&tree, first));
}

#[test]
fn test_bind_without_modify_done_marks_swiper() {
    let mut tree = FrameTree::new();
    let (_node, controller) = build(&mut tree, 4, 0, false);
    let swiper = tree.create_swiper(SwiperPattern::new(5));
    controller.set_swiper_node(&mut tree, swiper);
    assert!(tree.swiper(swiper).unwrap().is_bind_indicator());
}

#[test]
fn test_count_round_trip() {
    let mut tree = FrameTree::new();
    let controller = IndicatorModel::create(&mut tree);
    let node = IndicatorModel::finish(&mut tree).unwrap();
    let count = |tree: &FrameTree| {
        tree.indicator(node)
            .map(|n| n.layout_property().count_from_property())
    };
    assert_eq!(count(&tree), Some(DEFAULT_COUNT));

    for n in [0, 1, 7, 120] {
        IndicatorModel::set_count_by_node(&mut tree, node, n);
        assert_eq!(count(&tree), Some(n));
    }
    drop(controller);
}

#[test]
fn test_standalone_modify_done_does_not_bind() {
    let mut tree = FrameTree::new();
    let swiper = tree.create_swiper(SwiperPattern::new(4));
    let (node, _) = build(&mut tree, 4, 0, true);
    tree.modify_done(node);

    let swiper = tree.swiper(swiper).unwrap();
    assert!(!swiper.is_bind_indicator());
    assert_eq!(swiper.indicator_node(), None);
}

#[test]
fn test_destroyed_indicator_ignores_controller() {
    let mut tree = FrameTree::new();
    let (node, controller) = build(&mut tree, 4, 0, false);
    tree.remove_node(node).unwrap();

    controller.show_next(&mut tree);
    controller.show_previous(&mut tree);
    controller.change_index(&mut tree, 2, false);
    assert_eq!(tree.current_index(node), None);
}

#[test]
fn test_language_change_is_queued() {
    let mut tree = FrameTree::new().with_config(RuntimeConfig {
        language: "he-IL".to_owned(),
        ..RuntimeConfig::default()
    });
    let (node, controller) = build(&mut tree, 4, 0, false);
    tree.with_pattern(node, |pattern, host| pattern.on_language_configuration_update(host));
    assert_eq!(tree.pending_task_count(), 1);

    tree.flush_tasks();
    assert_eq!(
        tree.registry().get(node).map(|d| d.layout_direction),
        Some(TextDirection::Rtl)
    );
    assert!(tree.dispatch_key_event(node, KeyEvent::down(Key::ArrowLeft)));
    assert_eq!(tree.current_index(node), Some(1));
    drop(controller);
}

#[test]
fn test_theme_change_reloads_bound_resources() {
    let mut tree = FrameTree::new().with_config(RuntimeConfig {
        config_change_perform: true,
        ..RuntimeConfig::default()
    });
    IndicatorModel::create(&mut tree);
    let color = Arc::new(ResourceObject::new("#FF00FF00"));
    let mut resources = StyleResources::new();
    resources.insert("color".into(), color.clone());
    let params = SwiperParameters::from_theme(tree.theme());
    IndicatorModel::set_dot_indicator_style(&mut tree, params, &resources);
    let node = IndicatorModel::finish(&mut tree).unwrap();

    color.set_value("not a color");
    let theme = tree
        .theme()
        .as_ref()
        .clone()
        .with_color(swiper_indicator::Color::RED);
    tree.set_theme(Arc::new(theme));

    let painted = tree
        .indicator(node)
        .and_then(|n| n.paint_property().dot())
        .map(|d| d.color);
    assert_eq!(painted, Some(swiper_indicator::Color::RED));
}

#[test]
fn test_vertical_measure_swaps_axes() {
    let mut tree = FrameTree::new();
    let (node, _) = build(&mut tree, 4, 0, false);
    let horizontal = tree.measure_indicator(node).unwrap();

    IndicatorModel::set_direction_by_node(&mut tree, node, Axis::Vertical);
    tree.modify_done(node);
    let vertical = tree.measure_indicator(node).unwrap();
    assert_eq!(horizontal.width, vertical.height);
    assert_eq!(horizontal.height, vertical.width);
    assert_eq!(
        tree.registry().get(node).map(|d| d.geometry.size),
        Some(vertical)
    );
}
