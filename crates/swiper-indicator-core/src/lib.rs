//! Core systems for the swiper indicator.
//!
//! This crate provides the framework pieces the indicator widget is built on:
//!
//! - **Node Arena**: Generational node handles with parent-child ownership
//! - **Signal/Slot System**: Ordered, re-entrant change notification
//! - **Properties**: Optional-valued layout property slots
//! - **Task Queue**: FIFO deferred work for the UI thread
//! - **Resources**: Live reload bindings for theme/locale dependent values
//! - **Configuration**: Runtime settings loaded from TOML
//!
//! # Weak Handle Example
//!
//! ```
//! use swiper_indicator_core::NodeRegistry;
//!
//! let mut registry = NodeRegistry::new();
//! let swiper = registry.register("Swiper");
//!
//! // Handles are plain copies; resolving one is the liveness check.
//! let handle = swiper;
//! assert!(registry.contains(handle));
//!
//! registry.destroy(swiper).unwrap();
//! assert!(!registry.contains(handle));
//! ```

pub mod config;
mod error;
pub mod logging;
pub mod node;
pub mod property;
pub mod resource;
pub mod signal;
pub mod task;
pub mod types;

pub use config::RuntimeConfig;
pub use error::{CoreError, Result};
pub use node::{FocusHub, GestureHub, NodeData, NodeId, NodeRegistry, PropertyChangeFlag};
pub use property::Property;
pub use resource::{ResourceBindings, ResourceObject, ResourceUpdateFn};
pub use signal::{ConnectionId, Signal};
pub use task::TaskQueue;
pub use types::{Axis, Color, Dimension, DimensionUnit, Point, Rect, Size, TextDirection};
