//! Optional-valued layout property slots.
//!
//! A layout property is either unset (the consumer falls back to a default)
//! or holds a value. Updates report whether the stored value actually
//! changed so the owner can decide how dirty to mark its node.
//!
//! # Example
//!
//! ```
//! use swiper_indicator_core::Property;
//!
//! let mut count = Property::<i32>::unset();
//! assert_eq!(count.get_or(2), 2);
//!
//! assert!(count.update(5));
//! assert!(!count.update(5));
//! assert_eq!(count.get(), Some(5));
//! ```

use std::fmt;

/// A layout property that may be unset.
#[derive(Clone, PartialEq)]
pub struct Property<T> {
    value: Option<T>,
}

impl<T> Property<T> {
    /// Create an unset property.
    pub const fn unset() -> Self {
        Self { value: None }
    }

    /// Create a property holding a value.
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Whether a value has been set.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the stored value.
    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Clear the value, returning the previous one.
    pub fn reset(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T: Clone> Property<T> {
    /// Get a copy of the stored value.
    pub fn get(&self) -> Option<T> {
        self.value.clone()
    }

    /// Get the stored value or the given default.
    pub fn get_or(&self, default: T) -> T {
        self.value.clone().unwrap_or(default)
    }
}

impl<T: PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn update(&mut self, value: T) -> bool {
        if self.value.as_ref() == Some(&value) {
            false
        } else {
            self.value = Some(value);
            true
        }
    }
}

impl<T> Default for Property<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "Property({v:?})"),
            None => write!(f, "Property(unset)"),
        }
    }
}
