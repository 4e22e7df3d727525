//! Pointer input: drag samples turned into a decaying rotation impulse.
//!
//! # Invariants
//! - Pointer events and frame ticks are applied from one thread, in order.
//! - A move is always visible to the next tick that consumes it.
//! - With the ceiling policy the acceleration level never exceeds `max_level`.

pub mod config;
pub mod controller;
pub mod event;

pub use config::{AccelerationPolicy, ConfigError, InertiaConfig};
pub use controller::{DragRotation, EULER_ORDER};
pub use event::{PointerEvent, PointerSample};

pub fn crate_info() -> &'static str {
    concat!("dragspin-input v", env!("CARGO_PKG_VERSION"))
}
