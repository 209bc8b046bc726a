//! Signal/slot primitive used by widget event hubs.
//!
//! Signals are emitted by a pattern when its state changes, and connected
//! slots (callbacks) are invoked synchronously, in the order they were
//! connected.
//!
//! # Example
//!
//! ```
//! use swiper_indicator_core::Signal;
//!
//! let index_changed = Signal::<i32>::new();
//! let id = index_changed.connect(|index| println!("now at {index}"));
//! index_changed.emit(2);
//! index_changed.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Connection storage: the arena gives stable IDs, the order vector keeps
/// registration order for emission.
struct Connections<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// `Signal<Args>` is `Send + Sync`. Slots are cloned out of the connection
/// table before they run, so a slot may connect or disconnect on the same
/// signal without deadlocking.
pub struct Signal<Args> {
    connections: Mutex<Connections<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(Connections {
                slots: SlotMap::with_key(),
                order: Vec::new(),
            }),
        }
    }

    /// Connect a slot (closure) to this signal.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connect_shared(Arc::new(slot))
    }

    /// Connect an already shared slot.
    pub fn connect_shared(&self, slot: Arc<dyn Fn(&Args) + Send + Sync>) -> ConnectionId {
        let mut connections = self.connections.lock();
        let id = connections.slots.insert(slot);
        connections.order.push(id);
        id
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut connections = self.connections.lock();
        if connections.slots.remove(id).is_some() {
            connections.order.retain(|&c| c != id);
            true
        } else {
            false
        }
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        let mut connections = self.connections.lock();
        connections.slots.clear();
        connections.order.clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().slots.len()
    }

    /// Emit the signal, invoking all connected slots in connection order.
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = {
            let connections = self.connections.lock();
            connections
                .order
                .iter()
                .filter_map(|id| connections.slots.get(*id).cloned())
                .collect()
        };
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<i32>: Send, Sync);
