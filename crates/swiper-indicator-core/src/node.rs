//! Node arena for the frame tree.
//!
//! Provides the node system with:
//! - Generational node identifiers via arena-based storage
//! - Parent-child ownership with cascade removal
//! - Per-node host capabilities (geometry, dirty marking, focus, gestures)
//!
//! A [`NodeId`] is the non-owning handle used everywhere a widget refers to
//! another widget: the controller's link to its pattern, an indicator's link
//! to a bound swiper and the swiper's link back. Resolving a handle is the
//! "upgrade" step; once a node is destroyed its slot generation changes and
//! every outstanding id stops resolving, even if the slot is reused.

use slotmap::{new_key_type, SlotMap};

use crate::error::{CoreError, Result};
use crate::logging::targets;
use crate::types::{Dimension, Rect, TextDirection};

new_key_type! {
    /// A unique identifier for a node in the registry.
    ///
    /// `NodeId`s stay valid while the node lives and never resolve again
    /// after it is destroyed.
    pub struct NodeId;
}

bitflags::bitflags! {
    /// Granularity of a dirty mark.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PropertyChangeFlag: u8 {
        /// Measure this node and its ancestors.
        const MEASURE = 1 << 0;
        /// Measure this node only.
        const MEASURE_SELF = 1 << 1;
        /// Re-run layout without re-measuring.
        const LAYOUT = 1 << 2;
        /// Repaint only.
        const RENDER = 1 << 3;
    }
}

/// Focus capability of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusHub {
    /// Whether the node can take keyboard focus.
    pub focusable: bool,
    /// Whether key events are routed to the node's pattern.
    pub key_event_enabled: bool,
}

/// Gesture capability of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureHub {
    /// Whether touch/drag input reaches the node's pattern.
    pub touch_enabled: bool,
    /// Whether clicks reach the node's pattern.
    pub click_enabled: bool,
}

/// Data stored in the registry for each node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The pattern tag, e.g. `"SwiperIndicator"`.
    tag: &'static str,
    /// Parent node (if any).
    parent: Option<NodeId>,
    /// Child nodes (owned).
    children: Vec<NodeId>,
    /// Geometry relative to the parent.
    pub geometry: Rect,
    /// Layout direction used for RTL mirroring.
    pub layout_direction: TextDirection,
    /// Pending dirty marks.
    dirty: PropertyChangeFlag,
    /// Focus capability, when the node is focusable.
    pub focus_hub: Option<FocusHub>,
    /// Gesture capability, when the node accepts input.
    pub gesture_hub: Option<GestureHub>,
    /// Border radius set explicitly through common attributes.
    pub user_border_radius: Option<Dimension>,
    /// Border radius applied to the render context.
    pub border_radius: Option<Dimension>,
}

impl NodeData {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            parent: None,
            children: Vec::new(),
            geometry: Rect::ZERO,
            layout_direction: TextDirection::Ltr,
            dirty: PropertyChangeFlag::empty(),
            focus_hub: Some(FocusHub {
                focusable: true,
                key_event_enabled: false,
            }),
            gesture_hub: Some(GestureHub {
                touch_enabled: true,
                click_enabled: true,
            }),
            user_border_radius: None,
            border_radius: None,
        }
    }

    /// The node's tag.
    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Pending dirty marks.
    #[inline]
    pub fn dirty(&self) -> PropertyChangeFlag {
        self.dirty
    }
}

/// The arena that owns all node data and their relationships.
///
/// Uses SlotMap storage for stable, generation-checked node IDs.
pub struct NodeRegistry {
    nodes: SlotMap<NodeId, NodeData>,
}

impl NodeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Register a new node and return its ID.
    pub fn register(&mut self, tag: &'static str) -> NodeId {
        let id = self.nodes.insert(NodeData::new(tag));
        tracing::trace!(target: targets::TREE, ?id, tag, "registered node");
        id
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns every removed ID (descendants first, then the node itself) so
    /// owners of side tables can drop their entries.
    #[tracing::instrument(skip(self), target = "swiper_indicator::tree", level = "trace")]
    pub fn destroy(&mut self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut removed = self.collect_descendants(id)?;
        tracing::trace!(target: targets::TREE, ?id, descendant_count = removed.len(), "destroying node tree");

        if let Some(parent_id) = self.nodes.get(id).and_then(|d| d.parent) {
            if let Some(parent_data) = self.nodes.get_mut(parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        for &child_id in &removed {
            self.nodes.remove(child_id);
        }
        self.nodes.remove(id);
        removed.push(id);

        Ok(removed)
    }

    /// Collect all descendant IDs in depth-first order (children before parents).
    fn collect_descendants(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(&self, id: NodeId, result: &mut Vec<NodeId>) -> Result<()> {
        let data = self.nodes.get(id).ok_or(CoreError::InvalidNodeId)?;
        for &child_id in &data.children {
            self.collect_descendants_recursive(child_id, result)?;
            result.push(child_id);
        }
        Ok(())
    }

    /// Check if a node is alive.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Access a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutably access a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// Get the tag of a node.
    pub fn tag(&self, id: NodeId) -> Result<&'static str> {
        self.nodes
            .get(id)
            .map(|d| d.tag)
            .ok_or(CoreError::InvalidNodeId)
    }

    /// Set the parent of a node.
    ///
    /// This handles removing from the old parent and adding to the new parent.
    /// Passing `None` makes the node a root.
    pub fn set_parent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> Result<()> {
        if !self.nodes.contains_key(id) {
            return Err(CoreError::InvalidNodeId);
        }

        if let Some(parent_id) = new_parent {
            if !self.nodes.contains_key(parent_id) {
                return Err(CoreError::InvalidNodeId);
            }
            if self.is_ancestor_of(id, parent_id) {
                return Err(CoreError::CircularParentage);
            }
        }

        if let Some(old_parent_id) = self.nodes.get(id).and_then(|d| d.parent) {
            if let Some(parent_data) = self.nodes.get_mut(old_parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        if let Some(data) = self.nodes.get_mut(id) {
            data.parent = new_parent;
        }

        if let Some(parent_id) = new_parent {
            if let Some(parent_data) = self.nodes.get_mut(parent_id) {
                parent_data.children.push(id);
            }
        }

        Ok(())
    }

    /// Check if `potential_ancestor` is `id` or one of its ancestors.
    fn is_ancestor_of(&self, potential_ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.nodes.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.nodes
            .get(id)
            .map(|d| d.parent)
            .ok_or(CoreError::InvalidNodeId)
    }

    /// Get the children of a node.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        self.nodes
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(CoreError::InvalidNodeId)
    }

    // =========================================================================
    // Dirty Marking
    // =========================================================================

    /// Mark a node dirty with the given granularity.
    ///
    /// `MEASURE` propagates `LAYOUT` to every ancestor.
    pub fn mark_dirty(&mut self, id: NodeId, flag: PropertyChangeFlag) {
        let Some(data) = self.nodes.get_mut(id) else {
            return;
        };
        data.dirty |= flag;
        let mut parent = data.parent;
        if flag.contains(PropertyChangeFlag::MEASURE) {
            while let Some(parent_id) = parent {
                let Some(parent_data) = self.nodes.get_mut(parent_id) else {
                    break;
                };
                parent_data.dirty |= PropertyChangeFlag::LAYOUT;
                parent = parent_data.parent;
            }
        }
    }

    /// Take and clear the dirty marks of a node.
    pub fn take_dirty(&mut self, id: NodeId) -> PropertyChangeFlag {
        self.nodes
            .get_mut(id)
            .map(|d| std::mem::take(&mut d.dirty))
            .unwrap_or_default()
    }

    /// Get the number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_destroy() {
        let mut registry = NodeRegistry::new();
        let id = registry.register("Test");
        assert!(registry.contains(id));
        assert_eq!(registry.tag(id), Ok("Test"));

        let removed = registry.destroy(id).unwrap();
        assert_eq!(removed, vec![id]);
        assert!(!registry.contains(id));
        assert_eq!(registry.tag(id), Err(CoreError::InvalidNodeId));
    }

    #[test]
    fn test_destroy_cascades_to_children() {
        let mut registry = NodeRegistry::new();
        let parent = registry.register("Parent");
        let child = registry.register("Child");
        let grandchild = registry.register("Grandchild");
        registry.set_parent(child, Some(parent)).unwrap();
        registry.set_parent(grandchild, Some(child)).unwrap();

        let removed = registry.destroy(parent).unwrap();
        assert_eq!(removed, vec![grandchild, child, parent]);
        assert_eq!(registry.node_count(), 0);
    }

    #[test]
    fn test_stale_id_does_not_resolve_after_reuse() {
        let mut registry = NodeRegistry::new();
        let old = registry.register("Old");
        registry.destroy(old).unwrap();
        let new = registry.register("New");
        assert_ne!(old, new);
        assert!(!registry.contains(old));
        assert!(registry.contains(new));
    }

    #[test]
    fn test_circular_parentage_rejected() {
        let mut registry = NodeRegistry::new();
        let a = registry.register("A");
        let b = registry.register("B");
        registry.set_parent(b, Some(a)).unwrap();
        assert_eq!(registry.set_parent(a, Some(b)), Err(CoreError::CircularParentage));
        assert_eq!(registry.set_parent(a, Some(a)), Err(CoreError::CircularParentage));
    }

    #[test]
    fn test_mark_dirty_propagates_layout_to_ancestors() {
        let mut registry = NodeRegistry::new();
        let parent = registry.register("Parent");
        let child = registry.register("Child");
        registry.set_parent(child, Some(parent)).unwrap();

        registry.mark_dirty(child, PropertyChangeFlag::MEASURE);
        assert_eq!(registry.take_dirty(child), PropertyChangeFlag::MEASURE);
        assert_eq!(registry.take_dirty(parent), PropertyChangeFlag::LAYOUT);
        assert!(registry.take_dirty(child).is_empty());
    }

    #[test]
    fn test_render_dirty_does_not_propagate() {
        let mut registry = NodeRegistry::new();
        let parent = registry.register("Parent");
        let child = registry.register("Child");
        registry.set_parent(child, Some(parent)).unwrap();

        registry.mark_dirty(child, PropertyChangeFlag::RENDER);
        assert!(registry.take_dirty(parent).is_empty());
    }
}
