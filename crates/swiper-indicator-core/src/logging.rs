//! Logging facilities for the swiper indicator.
//!
//! The crates use `tracing` for instrumentation and never install a
//! subscriber themselves. To see logs, install one in the application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("swiper_indicator=debug")
//!     .init();
//! ```
//!
//! Dangling handles, absent themes and clamped indices are routine in a UI
//! tree, so they are logged at `trace`/`debug` and never as errors.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Root target.
    pub const ROOT: &str = "swiper_indicator";
    /// Indicator pattern state machine.
    pub const PATTERN: &str = "swiper_indicator::pattern";
    /// Indicator controller handle.
    pub const CONTROLLER: &str = "swiper_indicator::controller";
    /// Builder API.
    pub const MODEL: &str = "swiper_indicator::model";
    /// Resource reload bindings.
    pub const RESOURCE: &str = "swiper_indicator::resource";
    /// Node arena and frame tree.
    pub const TREE: &str = "swiper_indicator::tree";
    /// UI task queue.
    pub const TASK: &str = "swiper_indicator::task";
    /// Signal emission.
    pub const SIGNAL: &str = "swiper_indicator::signal";
    /// Bound swiper collaborator.
    pub const SWIPER: &str = "swiper_indicator::swiper";
}

/// Install a compact test subscriber honoring `RUST_LOG`.
///
/// Safe to call repeatedly; only the first call installs anything.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
