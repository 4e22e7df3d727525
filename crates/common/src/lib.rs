//! Shared types used across the dragspin workspace.

pub mod types;

pub use types::{Rgb, Transform};
