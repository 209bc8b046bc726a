//! Builder API for indicator nodes.
//!
//! Every setter comes in two forms. The instance form acts on the node
//! currently being built, between [`IndicatorModel::create`] and
//! [`IndicatorModel::finish`]. The `*_by_node` form acts on an explicit
//! node and is meant for changes after construction. Both are no-ops when
//! the target node does not resolve.

use std::collections::BTreeMap;
use std::sync::Arc;

use swiper_indicator_core::logging::targets;
use swiper_indicator_core::{Axis, Dimension, NodeId, PropertyChangeFlag, ResourceObject};

use crate::controller::IndicatorController;
use crate::event_hub::ChangeEvent;
use crate::layout_property::IndicatorLayoutProperty;
use crate::parameters::{IndicatorType, SwiperDigitalParameters, SwiperParameters};
use crate::tree::FrameTree;

/// Resource handles for style fields, keyed by field name.
pub type StyleResources = BTreeMap<String, Arc<ResourceObject>>;

const DOT_SIZE_FIELDS: [&str; 4] = [
    "itemWidth",
    "itemHeight",
    "selectedItemWidth",
    "selectedItemHeight",
];
const DOT_COLOR_FIELDS: [&str; 2] = ["color", "selectedColor"];
const DIGIT_FONT_SIZE_FIELDS: [&str; 2] = ["fontSize", "selectedFontSize"];
const DIGIT_COLOR_FIELDS: [&str; 2] = ["fontColor", "selectedFontColor"];

/// Factory and configuration surface for indicator nodes.
pub struct IndicatorModel;

impl IndicatorModel {
    /// Create an indicator node and make it the node being built.
    pub fn create(tree: &mut FrameTree) -> Arc<IndicatorController> {
        let (node, controller) = tree.create_indicator();
        tree.push_build(node);
        controller.reset_external_controller();
        tracing::debug!(target: targets::MODEL, ?node, "indicator created");
        controller
    }

    /// Finish the node being built and apply its configuration.
    pub fn finish(tree: &mut FrameTree) -> Option<NodeId> {
        let node = tree.pop_build()?;
        tree.modify_done(node);
        Some(node)
    }

    /// Controller of the indicator at `node`.
    pub fn controller_of(tree: &FrameTree, node: NodeId) -> Option<Arc<IndicatorController>> {
        tree.controller_of(node)
    }

    fn current(tree: &FrameTree) -> Option<NodeId> {
        let node = tree.current_build_node();
        if node.is_none() {
            tracing::trace!(target: targets::MODEL, "no indicator under construction");
        }
        node
    }

    fn update_layout(
        tree: &mut FrameTree,
        node: NodeId,
        f: impl FnOnce(&mut IndicatorLayoutProperty) -> bool,
    ) {
        if !tree.with_indicator_layout(node, f) {
            tracing::trace!(target: targets::MODEL, ?node, "layout property unchanged");
        }
    }

    // =========================================================================
    // Layout properties
    // =========================================================================

    pub fn set_count(tree: &mut FrameTree, count: i32) {
        if let Some(node) = Self::current(tree) {
            Self::set_count_by_node(tree, node, count);
        }
    }

    /// Set the page count. A negative count restores the default.
    pub fn set_count_by_node(tree: &mut FrameTree, node: NodeId, count: i32) {
        Self::update_layout(tree, node, |prop| prop.update_count(count));
    }

    pub fn set_loop(tree: &mut FrameTree, is_loop: bool) {
        if let Some(node) = Self::current(tree) {
            Self::set_loop_by_node(tree, node, is_loop);
        }
    }

    pub fn set_loop_by_node(tree: &mut FrameTree, node: NodeId, is_loop: bool) {
        Self::update_layout(tree, node, |prop| prop.update_loop(is_loop));
    }

    pub fn set_direction(tree: &mut FrameTree, direction: Axis) {
        if let Some(node) = Self::current(tree) {
            Self::set_direction_by_node(tree, node, direction);
        }
    }

    pub fn set_direction_by_node(tree: &mut FrameTree, node: NodeId, direction: Axis) {
        Self::update_layout(tree, node, |prop| prop.update_direction(direction));
    }

    pub fn set_initial_index(tree: &mut FrameTree, index: i32) {
        if let Some(node) = Self::current(tree) {
            Self::set_initial_index_by_node(tree, node, index);
        }
    }

    /// Set the index selected on the first modify-done.
    pub fn set_initial_index_by_node(tree: &mut FrameTree, node: NodeId, index: i32) {
        Self::update_layout(tree, node, |prop| prop.update_initial_index(index));
    }

    pub fn set_indicator_type(tree: &mut FrameTree, indicator_type: IndicatorType) {
        if let Some(node) = Self::current(tree) {
            Self::set_indicator_type_by_node(tree, node, indicator_type);
        }
    }

    pub fn set_indicator_type_by_node(
        tree: &mut FrameTree,
        node: NodeId,
        indicator_type: IndicatorType,
    ) {
        Self::update_layout(tree, node, |prop| prop.update_indicator_type(indicator_type));
    }

    pub fn set_position(
        tree: &mut FrameTree,
        left: Option<Dimension>,
        top: Option<Dimension>,
        right: Option<Dimension>,
        bottom: Option<Dimension>,
    ) {
        if let Some(node) = Self::current(tree) {
            Self::set_position_by_node(tree, node, left, top, right, bottom);
        }
    }

    /// Set the offsets of the indicator inside its parent. `None` clears one.
    pub fn set_position_by_node(
        tree: &mut FrameTree,
        node: NodeId,
        left: Option<Dimension>,
        top: Option<Dimension>,
        right: Option<Dimension>,
        bottom: Option<Dimension>,
    ) {
        Self::update_layout(tree, node, |prop| {
            prop.update_position(left, top, right, bottom)
        });
    }

    // =========================================================================
    // Pattern state
    // =========================================================================

    pub fn set_is_indicator_custom_size(tree: &mut FrameTree, custom: bool) {
        if let Some(node) = Self::current(tree) {
            Self::set_is_indicator_custom_size_by_node(tree, node, custom);
        }
    }

    pub fn set_is_indicator_custom_size_by_node(tree: &mut FrameTree, node: NodeId, custom: bool) {
        tree.with_pattern(node, |pattern, _| pattern.set_is_custom_size(custom));
    }

    pub fn set_on_change(tree: &mut FrameTree, event: ChangeEvent) {
        if let Some(node) = Self::current(tree) {
            Self::set_on_change_by_node(tree, node, event);
        }
    }

    /// Register a listener for index changes in standalone mode.
    pub fn set_on_change_by_node(tree: &mut FrameTree, node: NodeId, event: ChangeEvent) {
        if let Some(indicator) = tree.indicator(node) {
            indicator.event_hub().add_on_change_event(event);
        }
    }

    // =========================================================================
    // Styles
    // =========================================================================

    pub fn set_dot_indicator_style(
        tree: &mut FrameTree,
        params: SwiperParameters,
        resources: &StyleResources,
    ) {
        if let Some(node) = Self::current(tree) {
            Self::set_dot_indicator_style_by_node(tree, node, params, resources);
        }
    }

    /// Store dot style parameters.
    ///
    /// With live reload enabled in the runtime configuration, each size and
    /// color field is also bound to its entry in `resources`, and fields
    /// without an entry lose any earlier binding.
    pub fn set_dot_indicator_style_by_node(
        tree: &mut FrameTree,
        node: NodeId,
        params: SwiperParameters,
        resources: &StyleResources,
    ) {
        tree.with_pattern(node, |pattern, host| {
            pattern.set_swiper_parameters(params);
            if host.config.config_change_perform {
                for field in DOT_SIZE_FIELDS {
                    pattern.process_dot_size_with_resource_obj(field, resources.get(field).cloned());
                }
                for field in DOT_COLOR_FIELDS {
                    pattern.process_dot_color_with_resource_obj(field, resources.get(field).cloned());
                }
            }
            host.mark_dirty(PropertyChangeFlag::MEASURE | PropertyChangeFlag::RENDER);
        });
    }

    pub fn set_digit_indicator_style(
        tree: &mut FrameTree,
        params: SwiperDigitalParameters,
        resources: &StyleResources,
    ) {
        if let Some(node) = Self::current(tree) {
            Self::set_digit_indicator_style_by_node(tree, node, params, resources);
        }
    }

    /// Store digit style parameters, binding resources like
    /// [`set_dot_indicator_style_by_node`](Self::set_dot_indicator_style_by_node).
    pub fn set_digit_indicator_style_by_node(
        tree: &mut FrameTree,
        node: NodeId,
        params: SwiperDigitalParameters,
        resources: &StyleResources,
    ) {
        tree.with_pattern(node, |pattern, host| {
            pattern.set_swiper_digital_parameters(params);
            if host.config.config_change_perform {
                for field in DIGIT_FONT_SIZE_FIELDS {
                    pattern.process_digital_font_size_with_resource_obj(
                        field,
                        resources.get(field).cloned(),
                    );
                }
                for field in DIGIT_COLOR_FIELDS {
                    pattern
                        .process_digital_color_with_resource_obj(field, resources.get(field).cloned());
                }
            }
            host.mark_dirty(PropertyChangeFlag::MEASURE | PropertyChangeFlag::RENDER);
        });
    }

    // =========================================================================
    // Resource bindings
    // =========================================================================

    pub fn process_dot_size_with_resource_obj(
        tree: &mut FrameTree,
        node: NodeId,
        field: &str,
        resource: Option<Arc<ResourceObject>>,
    ) {
        tree.with_pattern(node, |pattern, _| {
            pattern.process_dot_size_with_resource_obj(field, resource)
        });
    }

    pub fn process_dot_color_with_resource_obj(
        tree: &mut FrameTree,
        node: NodeId,
        field: &str,
        resource: Option<Arc<ResourceObject>>,
    ) {
        tree.with_pattern(node, |pattern, _| {
            pattern.process_dot_color_with_resource_obj(field, resource)
        });
    }

    pub fn process_digital_font_size_with_resource_obj(
        tree: &mut FrameTree,
        node: NodeId,
        field: &str,
        resource: Option<Arc<ResourceObject>>,
    ) {
        tree.with_pattern(node, |pattern, _| {
            pattern.process_digital_font_size_with_resource_obj(field, resource)
        });
    }

    pub fn process_digital_color_with_resource_obj(
        tree: &mut FrameTree,
        node: NodeId,
        field: &str,
        resource: Option<Arc<ResourceObject>>,
    ) {
        tree.with_pattern(node, |pattern, _| {
            pattern.process_digital_color_with_resource_obj(field, resource)
        });
    }
}
