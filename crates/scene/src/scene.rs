use crate::camera::PerspectiveCamera;
use dragspin_common::{Rgb, Transform};
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Phong surface parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhongMaterial {
    pub color: Rgb,
    pub specular: Rgb,
    pub shininess: f32,
}

impl PhongMaterial {
    /// Diffuse `color` with the usual dim specular highlight.
    pub fn with_color(color: Rgb) -> Self {
        Self {
            color,
            specular: Rgb::from_hex(0x111111),
            shininess: 30.0,
        }
    }
}

/// An axis-aligned box of equal edges, before rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub transform: Transform,
    pub edge: f32,
    pub material: PhongMaterial,
}

impl Cube {
    /// Model matrix for a unit cube mesh centred on the origin.
    pub fn model_matrix(&self) -> Mat4 {
        let t = &self.transform;
        Mat4::from_scale_rotation_translation(t.scale * self.edge, t.rotation, t.position)
    }
}

/// Omnidirectional light without falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

/// Everything that gets drawn each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub cube: Cube,
    pub light: PointLight,
    pub camera: PerspectiveCamera,
    pub background: Rgb,
}

impl Default for Scene {
    fn default() -> Self {
        Self::demo()
    }
}

impl Scene {
    /// Dark red 2x2x2 cube at the origin, white light and camera both at z = 5.
    pub fn demo() -> Self {
        Self {
            cube: Cube {
                transform: Transform::default(),
                edge: 2.0,
                material: PhongMaterial::with_color(Rgb::from_hex(0x880000)),
            },
            light: PointLight {
                position: Vec3::new(0.0, 0.0, 5.0),
                color: Rgb::WHITE,
                intensity: 1.0,
            },
            camera: PerspectiveCamera::default(),
            background: Rgb::BLACK,
        }
    }

    /// Follow a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        tracing::debug!(width, height, aspect = self.camera.aspect, "scene resized");
    }

    pub fn orientation(&self) -> Quat {
        self.cube.transform.rotation
    }

    /// The rotation the drag controller drives.
    pub fn orientation_mut(&mut self) -> &mut Quat {
        &mut self.cube.transform.rotation
    }
}
