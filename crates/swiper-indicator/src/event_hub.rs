//! Page change notification for indicators.

use std::sync::Arc;

use swiper_indicator_core::{ConnectionId, Signal};

/// Shared change listener.
pub type ChangeEvent = Arc<dyn Fn(&i32) + Send + Sync>;

/// Dispatches the index change of a standalone indicator.
///
/// Listeners run synchronously in registration order, once per fire, with
/// no deduplication of repeated indices.
#[derive(Default)]
pub struct IndicatorEventHub {
    on_change: Signal<i32>,
}

impl IndicatorEventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener.
    pub fn add_on_change_event(&self, event: ChangeEvent) -> ConnectionId {
        self.on_change.connect_shared(event)
    }

    /// Remove a change listener.
    pub fn remove_on_change_event(&self, id: ConnectionId) -> bool {
        self.on_change.disconnect(id)
    }

    /// Notify every listener of `index`.
    pub fn fire_change_event(&self, index: i32) {
        self.on_change.emit(index);
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.on_change.connection_count()
    }
}

impl std::fmt::Debug for IndicatorEventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorEventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
