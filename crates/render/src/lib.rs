//! Rendering Adapter: renderer-agnostic interface and the frame loop.
//!
//! # Invariants
//! - Renderers read the scene; they never mutate it.
//! - Each frame applies pending pointer input, then ticks the drag
//!   controller, then draws. Input is never applied mid-draw.
//! - The loop runs until its stop handle fires or the scheduler runs dry.

mod frame;
mod renderer;

pub use frame::{FixedScheduler, FrameLoop, FrameScheduler, StopHandle};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    concat!("dragspin-render v", env!("CARGO_PKG_VERSION"))
}
