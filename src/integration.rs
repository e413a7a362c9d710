//! Integration layer
//!
//! Wires the Elm core to the outside world:
//! - `Runtime` owns the state and the command executor
//! - `AppRunner` feeds it terminal events and draws frames
//! - `Renderer` and `Coalescer` decide what and when to draw

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
