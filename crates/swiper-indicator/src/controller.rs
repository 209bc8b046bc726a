//! Application-facing indicator handle.
//!
//! An [`IndicatorController`] is what application code holds to drive an
//! indicator. It never owns the pattern: it keeps the indicator's [`NodeId`]
//! and resolves it against the [`FrameTree`] on every call, so commands that
//! arrive after the indicator was destroyed are silently dropped.
//!
//! # Example
//!
//! ```
//! use swiper_indicator::{FrameTree, IndicatorModel};
//!
//! let mut tree = FrameTree::new();
//! let controller = IndicatorModel::create(&mut tree);
//! IndicatorModel::set_count(&mut tree, 3);
//! IndicatorModel::set_loop(&mut tree, false);
//! let node = IndicatorModel::finish(&mut tree).unwrap();
//!
//! controller.show_next(&mut tree);
//! assert_eq!(tree.current_index(node), Some(1));
//! ```

use parking_lot::Mutex;
use swiper_indicator_core::logging::targets;
use swiper_indicator_core::{NodeId, PropertyChangeFlag};

use crate::tree::FrameTree;

type ResetFunc = Box<dyn FnOnce() + Send>;

/// Handle forwarding navigation commands to an indicator.
pub struct IndicatorController {
    indicator_node: Mutex<Option<NodeId>>,
    swiper_node: Mutex<Option<NodeId>>,
    reset_func: Mutex<Option<ResetFunc>>,
}

impl IndicatorController {
    pub fn new() -> Self {
        Self {
            indicator_node: Mutex::new(None),
            swiper_node: Mutex::new(None),
            reset_func: Mutex::new(None),
        }
    }

    /// Attach the controller to the indicator pattern living at `node`.
    pub fn set_indicator_pattern(&self, node: NodeId) {
        *self.indicator_node.lock() = Some(node);
    }

    /// The indicator node this controller drives, if attached.
    pub fn indicator_node(&self) -> Option<NodeId> {
        *self.indicator_node.lock()
    }

    fn live_indicator(&self, tree: &FrameTree) -> Option<NodeId> {
        let node = self.indicator_node()?;
        if tree.indicator(node).is_some() {
            Some(node)
        } else {
            tracing::trace!(target: targets::CONTROLLER, ?node, "indicator pattern gone, dropping command");
            None
        }
    }

    /// Move to the previous page.
    pub fn show_previous(&self, tree: &mut FrameTree) {
        if let Some(node) = self.live_indicator(tree) {
            tree.with_pattern(node, |pattern, host| pattern.show_previous(host));
        }
    }

    /// Move to the next page.
    pub fn show_next(&self, tree: &mut FrameTree) {
        if let Some(node) = self.live_indicator(tree) {
            tree.with_pattern(node, |pattern, host| pattern.show_next(host));
        }
    }

    /// Jump to `index`. Out-of-range indices are normalized by the pattern.
    pub fn change_index(&self, tree: &mut FrameTree, index: i32, use_animation: bool) {
        if let Some(node) = self.live_indicator(tree) {
            tree.with_pattern(node, |pattern, host| {
                pattern.change_index(host, index, use_animation)
            });
        }
    }

    /// Bind the indicator to the swiper at `swiper`.
    ///
    /// The swiper records this indicator as its visual indicator and takes
    /// over its animation stop callback. An indicator previously registered with that swiper forgets its binding,
    /// and a previously bound swiper stops pointing at this indicator.
    pub fn set_swiper_node(&self, tree: &mut FrameTree, swiper: NodeId) {
        let previous = self.swiper_node.lock().replace(swiper);
        let Some(indicator) = self.indicator_node() else {
            return;
        };

        if let Some(old_swiper) = previous.filter(|&s| s != swiper) {
            if let Some(old) = tree.swiper_mut(old_swiper) {
                if old.indicator_node() == Some(indicator) {
                    old.set_indicator_node(None);
                    old.set_bind_indicator(false);
                    old.set_stop_indicator_animation(None);
                }
            }
        }

        let stop = tree
            .indicator(indicator)
            .and_then(|node| node.pattern().stop_animation_callback());
        let Some(target) = tree.swiper_mut(swiper) else {
            tracing::debug!(target: targets::CONTROLLER, ?swiper, "bound swiper is not alive");
            return;
        };
        let displaced = target.indicator_node().filter(|&n| n != indicator);
        target.set_indicator_node(Some(indicator));
        target.set_bind_indicator(true);
        target.set_stop_indicator_animation(stop);

        if let Some(displaced) = displaced {
            tracing::debug!(target: targets::CONTROLLER, ?displaced, ?indicator, "indicator replaced on swiper");
            if let Some(node) = tree.indicator(displaced) {
                node.pattern().reset_swiper_node();
            }
            tree.registry_mut()
                .mark_dirty(displaced, PropertyChangeFlag::MEASURE_SELF | PropertyChangeFlag::RENDER);
        }
        tree.registry_mut()
            .mark_dirty(indicator, PropertyChangeFlag::MEASURE_SELF | PropertyChangeFlag::RENDER);
    }

    /// The bound swiper handle, which may no longer resolve.
    pub fn get_swiper_node(&self) -> Option<NodeId> {
        *self.swiper_node.lock()
    }

    /// Forget the bound swiper.
    pub fn reset_swiper_node(&self) {
        *self.swiper_node.lock() = None;
    }

    /// Store the callback that detaches a higher-level controller handle.
    pub fn set_external_controller_reset<F>(&self, reset: F)
    where
        F: FnOnce() + Send + 'static,
    {
        *self.reset_func.lock() = Some(Box::new(reset));
    }

    /// Run the stored detach callback once and clear it.
    pub fn reset_external_controller(&self) {
        let reset = self.reset_func.lock().take();
        if let Some(reset) = reset {
            reset();
        }
    }
}

impl Default for IndicatorController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IndicatorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorController")
            .field("indicator_node", &self.indicator_node())
            .field("swiper_node", &self.get_swiper_node())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(IndicatorController: Send, Sync);
