//! Error types for the indicator core.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the node arena and configuration loading.
///
/// The widget-facing API absorbs these (a dangling node is routine in a UI
/// tree), so they mostly surface to framework code and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The node ID is invalid or the node has been destroyed.
    #[error("Invalid or destroyed node ID")]
    InvalidNodeId,

    /// Attempted to set a node as its own parent or ancestor.
    #[error("Cannot set a node as its own parent or ancestor")]
    CircularParentage,

    /// Runtime configuration could not be parsed.
    #[error("Invalid runtime configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
