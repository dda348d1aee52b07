//! Interactive controller for progressive, cancellable fractal rendering.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `RenderParameters` describing the view to render
//! - **Output**: `InteractiveControllerPresenterPort` receiving each published pass
//! - **Core**: Uses domain actions from `core/` for actual computation

mod controller;
pub mod data;
pub mod errors;
pub mod ports;
pub mod request_channel;
pub mod viewport;

pub use controller::FractalRenderer;
