//! Port definitions for the interactive controller.
//!
//! Contains the trait the controller publishes rendered frames through.

pub mod presenter;
