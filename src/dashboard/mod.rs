//! The engine-facing half of the slider dashboard.
//!
//! Rendering the page itself belongs to the presentation layer; this module
//! covers what that layer needs from the library: configuration of the
//! sliders, parsing of raw inputs, the per-change snapshot of prices and
//! curves, and a static SVG chart of a curve.

pub mod config;
pub mod input;
pub mod plot;
pub mod snapshot;

pub use config::*;
pub use input::*;
pub use plot::*;
pub use snapshot::*;
