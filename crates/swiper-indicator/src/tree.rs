//! The frame tree: explicit UI context for indicator operations.
//!
//! [`FrameTree`] owns the node arena, the per-node widget state, the active
//! theme, the runtime configuration and the UI task queue. Every operation
//! that needs any of these receives the tree by `&mut` instead of reaching
//! for a process-global pipeline.
//!
//! Widget state lives in side tables keyed by [`NodeId`]: one for indicator
//! nodes and one for swiper nodes. An indicator pattern is always run
//! through [`FrameTree::with_pattern`], which lends it a [`PatternHost`]
//! view of everything else in the tree.

use std::sync::Arc;

use slotmap::SecondaryMap;
use swiper_indicator_core::logging::targets;
use swiper_indicator_core::{
    NodeData, NodeId, NodeRegistry, PropertyChangeFlag, Result, RuntimeConfig, Size,
    TaskQueue, TextDirection,
};

use crate::controller::IndicatorController;
use crate::event_hub::IndicatorEventHub;
use crate::events::KeyEvent;
use crate::layout_property::IndicatorLayoutProperty;
use crate::paint_property::IndicatorPaintProperty;
use crate::pattern::IndicatorPattern;
use crate::swiper::SwiperCapability;
use crate::theme::SwiperIndicatorTheme;

/// Tag of indicator nodes.
pub const INDICATOR_TAG: &str = "SwiperIndicator";
/// Tag of swiper nodes.
pub const SWIPER_TAG: &str = "Swiper";

/// Widget state of one indicator node.
#[derive(Debug)]
pub struct IndicatorNode {
    pattern: IndicatorPattern,
    layout_property: IndicatorLayoutProperty,
    event_hub: IndicatorEventHub,
    paint_property: IndicatorPaintProperty,
}

impl IndicatorNode {
    fn new(controller: Arc<IndicatorController>) -> Self {
        Self {
            pattern: IndicatorPattern::new(controller),
            layout_property: IndicatorLayoutProperty::new(),
            event_hub: IndicatorEventHub::new(),
            paint_property: IndicatorPaintProperty::default(),
        }
    }

    pub fn pattern(&self) -> &IndicatorPattern {
        &self.pattern
    }

    pub fn layout_property(&self) -> &IndicatorLayoutProperty {
        &self.layout_property
    }

    pub fn event_hub(&self) -> &IndicatorEventHub {
        &self.event_hub
    }

    pub fn paint_property(&self) -> &IndicatorPaintProperty {
        &self.paint_property
    }
}

/// What an indicator pattern can reach while it runs.
///
/// Borrowed from the [`FrameTree`] for the duration of one pattern call.
pub struct PatternHost<'a> {
    pub(crate) node: NodeId,
    pub(crate) registry: &'a mut NodeRegistry,
    pub(crate) swipers: &'a mut SecondaryMap<NodeId, Box<dyn SwiperCapability>>,
    pub(crate) theme: &'a SwiperIndicatorTheme,
    pub(crate) config: &'a RuntimeConfig,
    pub(crate) tasks: &'a mut TaskQueue<FrameTree>,
    pub(crate) layout_property: &'a mut IndicatorLayoutProperty,
    pub(crate) event_hub: &'a IndicatorEventHub,
    pub(crate) paint_property: &'a mut IndicatorPaintProperty,
}

impl PatternHost<'_> {
    /// The node the pattern belongs to.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn node_data(&self) -> Option<&NodeData> {
        self.registry.get(self.node)
    }

    pub fn node_data_mut(&mut self) -> Option<&mut NodeData> {
        self.registry.get_mut(self.node)
    }

    pub fn layout_property(&self) -> &IndicatorLayoutProperty {
        self.layout_property
    }

    pub fn layout_property_mut(&mut self) -> &mut IndicatorLayoutProperty {
        self.layout_property
    }

    pub fn event_hub(&self) -> &IndicatorEventHub {
        self.event_hub
    }

    pub fn paint_property(&self) -> &IndicatorPaintProperty {
        self.paint_property
    }

    pub fn theme(&self) -> &SwiperIndicatorTheme {
        self.theme
    }

    pub fn config(&self) -> &RuntimeConfig {
        self.config
    }

    /// Layout direction of the pattern's node.
    pub fn layout_direction(&self) -> TextDirection {
        self.node_data()
            .map(|data| data.layout_direction)
            .unwrap_or_default()
    }

    /// Resolve a swiper handle.
    pub fn swiper(&self, id: NodeId) -> Option<&dyn SwiperCapability> {
        self.swipers.get(id).map(|swiper| swiper.as_ref())
    }

    /// Resolve a swiper handle mutably.
    pub fn swiper_mut(&mut self, id: NodeId) -> Option<&mut (dyn SwiperCapability + 'static)> {
        self.swipers.get_mut(id).map(|swiper| swiper.as_mut())
    }

    /// Mark the pattern's node dirty.
    pub fn mark_dirty(&mut self, flag: PropertyChangeFlag) {
        self.registry.mark_dirty(self.node, flag);
    }

    /// Convert vp to px with the configured density.
    pub fn vp_to_px(&self, vp: f32) -> f32 {
        vp * self.config.density
    }
}

/// The UI context shared by every node.
pub struct FrameTree {
    registry: NodeRegistry,
    indicators: SecondaryMap<NodeId, IndicatorNode>,
    swipers: SecondaryMap<NodeId, Box<dyn SwiperCapability>>,
    theme: Arc<SwiperIndicatorTheme>,
    config: RuntimeConfig,
    tasks: TaskQueue<FrameTree>,
    build_stack: Vec<NodeId>,
}

impl FrameTree {
    /// Create an empty tree with the default theme and configuration.
    pub fn new() -> Self {
        Self {
            registry: NodeRegistry::new(),
            indicators: SecondaryMap::new(),
            swipers: SecondaryMap::new(),
            theme: Arc::new(SwiperIndicatorTheme::default()),
            config: RuntimeConfig::default(),
            tasks: TaskQueue::new(),
            build_stack: Vec::new(),
        }
    }

    /// Use the given runtime configuration.
    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the given theme.
    pub fn with_theme(mut self, theme: SwiperIndicatorTheme) -> Self {
        self.theme = Arc::new(theme);
        self
    }

    // =========================================================================
    // Context
    // =========================================================================

    pub fn theme(&self) -> &Arc<SwiperIndicatorTheme> {
        &self.theme
    }

    /// Replace the theme and re-run every resource binding against it.
    pub fn set_theme(&mut self, theme: Arc<SwiperIndicatorTheme>) {
        self.theme = theme;
        self.reload_all_resources();
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut NodeRegistry {
        &mut self.registry
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    /// Create an indicator node and the controller attached to it.
    pub fn create_indicator(&mut self) -> (NodeId, Arc<IndicatorController>) {
        let node = self.registry.register(INDICATOR_TAG);
        let controller = Arc::new(IndicatorController::new());
        controller.set_indicator_pattern(node);
        self.indicators
            .insert(node, IndicatorNode::new(controller.clone()));
        tracing::debug!(target: targets::TREE, ?node, "created indicator node");
        (node, controller)
    }

    /// Create a swiper node backed by `swiper`.
    pub fn create_swiper<S>(&mut self, swiper: S) -> NodeId
    where
        S: SwiperCapability + 'static,
    {
        let node = self.registry.register(SWIPER_TAG);
        self.swipers.insert(node, Box::new(swiper));
        tracing::debug!(target: targets::TREE, ?node, "created swiper node");
        node
    }

    /// Attach `child` under `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.registry.set_parent(child, Some(parent))
    }

    /// Destroy a node and its descendants. Every handle to them stops resolving.
    pub fn remove_node(&mut self, node: NodeId) -> Result<()> {
        let removed = self.registry.destroy(node)?;
        for id in &removed {
            self.indicators.remove(*id);
            self.swipers.remove(*id);
        }
        self.build_stack.retain(|id| !removed.contains(id));
        tracing::debug!(target: targets::TREE, ?node, removed = removed.len(), "removed node");
        Ok(())
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.registry.contains(node)
    }

    pub fn indicator(&self, node: NodeId) -> Option<&IndicatorNode> {
        self.indicators.get(node)
    }

    pub fn swiper(&self, node: NodeId) -> Option<&dyn SwiperCapability> {
        self.swipers.get(node).map(|swiper| swiper.as_ref())
    }

    pub fn swiper_mut(&mut self, node: NodeId) -> Option<&mut (dyn SwiperCapability + 'static)> {
        self.swipers.get_mut(node).map(|swiper| swiper.as_mut())
    }

    /// Downcast a swiper node to its concrete pattern.
    pub fn swiper_as<T: 'static>(&self, node: NodeId) -> Option<&T> {
        self.swiper(node)?.as_any().downcast_ref::<T>()
    }

    /// Downcast a swiper node to its concrete pattern, mutably.
    pub fn swiper_as_mut<T: 'static>(&mut self, node: NodeId) -> Option<&mut T> {
        self.swiper_mut(node)?.as_any_mut().downcast_mut::<T>()
    }

    /// Controller of the indicator at `node`.
    pub fn controller_of(&self, node: NodeId) -> Option<Arc<IndicatorController>> {
        self.indicator(node).map(|n| n.pattern.controller().clone())
    }

    /// Set the layout direction of a node.
    pub fn set_layout_direction(&mut self, node: NodeId, direction: TextDirection) {
        if let Some(data) = self.registry.get_mut(node) {
            data.layout_direction = direction;
            self.registry
                .mark_dirty(node, PropertyChangeFlag::MEASURE_SELF | PropertyChangeFlag::RENDER);
        }
    }

    // =========================================================================
    // Pattern access
    // =========================================================================

    /// Run `f` against the pattern of the indicator at `node`.
    ///
    /// Returns `None` without calling `f` if the node is gone.
    pub fn with_pattern<R>(
        &mut self,
        node: NodeId,
        f: impl FnOnce(&mut IndicatorPattern, &mut PatternHost<'_>) -> R,
    ) -> Option<R> {
        if !self.registry.contains(node) {
            return None;
        }
        let FrameTree {
            registry,
            indicators,
            swipers,
            theme,
            config,
            tasks,
            ..
        } = self;
        let IndicatorNode {
            pattern,
            layout_property,
            event_hub,
            paint_property,
        } = indicators.get_mut(node)?;
        let mut host = PatternHost {
            node,
            registry,
            swipers,
            theme: &**theme,
            config,
            tasks,
            layout_property,
            event_hub,
            paint_property,
        };
        Some(f(pattern, &mut host))
    }

    /// Mutate the layout property of an indicator, marking it for measure
    /// when the closure reports a change.
    pub fn with_indicator_layout(
        &mut self,
        node: NodeId,
        f: impl FnOnce(&mut IndicatorLayoutProperty) -> bool,
    ) -> bool {
        let Some(entry) = self.indicators.get_mut(node) else {
            return false;
        };
        let changed = f(&mut entry.layout_property);
        if changed {
            self.registry.mark_dirty(node, PropertyChangeFlag::MEASURE);
        }
        changed
    }

    /// Apply pending property changes to the indicator at `node`.
    pub fn modify_done(&mut self, node: NodeId) {
        self.with_pattern(node, |pattern, host| pattern.on_modify_done(host));
    }

    /// Current index of the indicator at `node`, in whichever mode it runs.
    pub fn current_index(&mut self, node: NodeId) -> Option<i32> {
        self.with_pattern(node, |pattern, host| pattern.get_current_index(host))
    }

    /// Route a key event to the indicator at `node`.
    ///
    /// Returns `true` if the indicator consumed it.
    pub fn dispatch_key_event(&mut self, node: NodeId, event: KeyEvent) -> bool {
        let enabled = self
            .registry
            .get(node)
            .and_then(|data| data.focus_hub)
            .is_some_and(|hub| hub.key_event_enabled);
        if !enabled {
            return false;
        }
        self.with_pattern(node, |pattern, host| pattern.on_key_event(host, event))
            .unwrap_or(false)
    }

    /// Measure the indicator at `node` and store the size in its geometry.
    pub fn measure_indicator(&mut self, node: NodeId) -> Option<Size> {
        let size = self.with_pattern(node, |pattern, host| {
            pattern.create_layout_algorithm(host).measure()
        })?;
        if let Some(data) = self.registry.get_mut(node) {
            data.geometry.size = size;
        }
        Some(size)
    }

    // =========================================================================
    // Language and resources
    // =========================================================================

    /// Re-derive the layout direction of `node` from the configured language.
    pub fn apply_language_direction(&mut self, node: NodeId) {
        let direction = self.config.text_direction();
        tracing::debug!(target: targets::TREE, ?node, ?direction, language = %self.config.language, "applying language direction");
        self.set_layout_direction(node, direction);
    }

    /// Re-run the resource bindings of the indicator at `node`.
    ///
    /// Returns `false` if the node is gone.
    pub fn on_resource_reload(&mut self, node: NodeId) -> bool {
        self.with_pattern(node, |pattern, host| pattern.reload_resources(host))
            .is_some()
    }

    /// Re-run the resource bindings of every indicator.
    pub fn reload_all_resources(&mut self) -> usize {
        let nodes: Vec<NodeId> = self.indicators.keys().collect();
        nodes
            .into_iter()
            .filter(|&node| self.on_resource_reload(node))
            .count()
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// Queue work for the UI thread.
    pub fn post_task<F>(&mut self, name: &'static str, task: F)
    where
        F: FnOnce(&mut FrameTree) + Send + 'static,
    {
        self.tasks.post(name, task);
    }

    pub fn pending_task_count(&self) -> usize {
        self.tasks.pending_count()
    }

    /// Run queued tasks in FIFO order, including tasks they post.
    pub fn flush_tasks(&mut self) -> usize {
        let mut count = 0;
        while let Some(task) = self.tasks.pop() {
            task(self);
            count += 1;
        }
        count
    }

    // =========================================================================
    // Builder stack
    // =========================================================================

    pub(crate) fn push_build(&mut self, node: NodeId) {
        self.build_stack.push(node);
    }

    pub(crate) fn pop_build(&mut self) -> Option<NodeId> {
        self.build_stack.pop()
    }

    /// The node currently being built, if any.
    pub fn current_build_node(&self) -> Option<NodeId> {
        self.build_stack.last().copied()
    }
}

impl Default for FrameTree {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(FrameTree: Send);
