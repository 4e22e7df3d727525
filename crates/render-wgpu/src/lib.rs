//! wgpu render backend.
//!
//! Draws the scene's cube with Blinn-Phong shading from its point light.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - The depth texture always matches the surface size.

mod gpu;
mod shaders;

pub use gpu::{SurfaceFrame, WgpuRenderer};
