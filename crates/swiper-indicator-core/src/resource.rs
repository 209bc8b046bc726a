//! Resource objects and live reload bindings.
//!
//! A [`ResourceObject`] is a platform resource (a color, a size) whose
//! resolved value may change after a widget was built, for example when the
//! system theme or locale changes. Widgets register update closures in a
//! [`ResourceBindings`] table under a namespaced key; when the platform
//! reloads resources, the table re-runs every closure so the widget's cached
//! style values follow the new resource values.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use swiper_indicator_core::{ResourceBindings, ResourceObject};
//!
//! let color = Arc::new(ResourceObject::new("#FF0000"));
//! let mut bindings = ResourceBindings::<String, ()>::new();
//! bindings.add_res_obj("swiper.color", color.clone(), Box::new(|res, target, _| {
//!     *target = res.value();
//! }));
//!
//! let mut cached = String::new();
//! color.set_value("#00FF00");
//! bindings.reload(&mut cached, &());
//! assert_eq!(cached, "#00FF00");
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::targets;

/// A platform resource with a reloadable textual value.
pub struct ResourceObject {
    value: RwLock<String>,
}

impl ResourceObject {
    /// Create a resource holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(value.into()),
        }
    }

    /// Current resolved value.
    pub fn value(&self) -> String {
        self.value.read().clone()
    }

    /// Replace the resolved value. Takes effect on the next reload.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.write() = value.into();
    }
}

impl fmt::Debug for ResourceObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceObject")
            .field("value", &*self.value.read())
            .finish()
    }
}

/// Update closure run on reload: resource, target to update, environment.
pub type ResourceUpdateFn<T, E> = Box<dyn Fn(&ResourceObject, &mut T, &E) + Send + Sync>;

struct Binding<T, E> {
    key: String,
    resource: Arc<ResourceObject>,
    update: ResourceUpdateFn<T, E>,
}

/// Keyed reload bindings for one widget.
///
/// `T` is the state the closures write into, `E` is read-only environment
/// (typically the active theme) passed through on reload. Re-registering a
/// key replaces the previous binding in place; reloads run in registration
/// order.
pub struct ResourceBindings<T, E> {
    bindings: Vec<Binding<T, E>>,
}

impl<T, E> ResourceBindings<T, E> {
    /// Create an empty binding table.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Register (or replace) the binding for `key`.
    pub fn add_res_obj(
        &mut self,
        key: impl Into<String>,
        resource: Arc<ResourceObject>,
        update: ResourceUpdateFn<T, E>,
    ) {
        let key = key.into();
        tracing::trace!(target: targets::RESOURCE, key = %key, "registering resource binding");
        if let Some(existing) = self.bindings.iter_mut().find(|b| b.key == key) {
            existing.resource = resource;
            existing.update = update;
        } else {
            self.bindings.push(Binding {
                key,
                resource,
                update,
            });
        }
    }

    /// Remove the binding for `key`, returning `true` if one existed.
    pub fn remove_res_obj(&mut self, key: &str) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.key != key);
        let removed = self.bindings.len() != before;
        if removed {
            tracing::trace!(target: targets::RESOURCE, key, "removed resource binding");
        }
        removed
    }

    /// Whether a binding exists for `key`.
    pub fn has(&self, key: &str) -> bool {
        self.bindings.iter().any(|b| b.key == key)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.key.as_str())
    }

    /// Re-run every binding against `target`.
    pub fn reload(&self, target: &mut T, env: &E) {
        tracing::debug!(target: targets::RESOURCE, binding_count = self.bindings.len(), "reloading resources");
        for binding in &self.bindings {
            (binding.update)(&binding.resource, target, env);
        }
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

impl<T, E> Default for ResourceBindings<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for ResourceBindings<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

static_assertions::assert_impl_all!(ResourceObject: Send, Sync);
static_assertions::assert_impl_all!(ResourceBindings<String, ()>: Send, Sync);
