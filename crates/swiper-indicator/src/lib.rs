//! Swiper page indicator.
//!
//! An indicator shows the position of a paged view as a row of dots or as
//! "current/total" text. It runs in one of two modes:
//!
//! - **standalone**, where it owns its index and is configured through its
//!   [`IndicatorLayoutProperty`] (count, loop, direction, initial index);
//! - **bound**, where an [`IndicatorController`] ties it to a swiper node and
//!   every query and command is forwarded to that swiper.
//!
//! All state lives in a [`FrameTree`], which is passed explicitly to every
//! operation. Handles such as [`NodeId`] are generational, so commands that
//! arrive after a node was destroyed are dropped.
//!
//! # Example
//!
//! ```
//! use swiper_indicator::{FrameTree, IndicatorModel, SwiperPattern};
//!
//! let mut tree = FrameTree::new();
//! let controller = IndicatorModel::create(&mut tree);
//! let node = IndicatorModel::finish(&mut tree).unwrap();
//!
//! let swiper = tree.create_swiper(SwiperPattern::new(5));
//! controller.set_swiper_node(&mut tree, swiper);
//! controller.show_next(&mut tree);
//!
//! assert_eq!(tree.swiper(swiper).map(|s| s.current_index()), Some(1));
//! assert_eq!(tree.current_index(node), Some(1));
//! ```

mod controller;
mod event_hub;
pub mod events;
mod layout_algorithm;
mod layout_property;
mod model;
mod paint_property;
pub mod parameters;
pub mod pattern;
mod swiper;
mod theme;
mod tree;

pub use controller::IndicatorController;
pub use event_hub::{ChangeEvent, IndicatorEventHub};
pub use layout_algorithm::{IndicatorLayoutAlgorithm, DIGIT_PADDING_VP, DOT_PADDING_VP};
pub use layout_property::{IndicatorLayoutProperty, DEFAULT_COUNT};
pub use model::{IndicatorModel, StyleResources};
pub use paint_property::{DigitPaintStyle, DotPaintStyle, IndicatorPaintProperty};
pub use parameters::{FontWeight, IndicatorStyles, IndicatorType, SwiperDigitalParameters, SwiperParameters};
pub use pattern::IndicatorPattern;
pub use swiper::{loop_index, StopIndicatorAnimation, SwiperCapability, SwiperPattern};
pub use theme::{DigitTextStyle, SwiperIndicatorTheme};
pub use tree::{FrameTree, IndicatorNode, PatternHost, INDICATOR_TAG, SWIPER_TAG};

pub use swiper_indicator_core::{
    Axis, Color, Dimension, NodeId, Point, ResourceObject, RuntimeConfig, TextDirection,
};
