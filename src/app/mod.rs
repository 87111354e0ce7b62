//! Application orchestration layer
//!
//! This module coordinates between input, domain, and preference layers.
//! It owns the engine states and routes events into them.

pub mod controller;
pub mod state;

pub use controller::AppController;
pub use state::{AppEvent, DemoPanel};
