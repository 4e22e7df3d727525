//! Scene: the single cube, its point light and the camera looking at it.
//!
//! # Invariants
//! - The cube's rotation is the only state that changes per frame.
//! - The camera is fixed; only its aspect follows the surface size.

pub mod camera;
pub mod scene;

pub use camera::PerspectiveCamera;
pub use scene::{Cube, PhongMaterial, PointLight, Scene};

/// Default surface size, in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
