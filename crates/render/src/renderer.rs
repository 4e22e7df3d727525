use dragspin_scene::Scene;
use glam::EulerRot;
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// Called once per frame after the orientation update. Failures belong to
/// the implementation; the frame loop does not inspect the output.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Draw one frame of the scene.
    fn render(&mut self, scene: &Scene) -> Self::Output;
}

/// Text renderer for headless runs.
///
/// Produces one line per frame with the cube orientation, and with
/// `verbose` set, the camera and light as well.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    pub verbose: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene) -> String {
        let q = scene.orientation();
        let (ex, ey, ez) = q.to_euler(EulerRot::XYZ);
        let mut out = format!(
            "rot=({:.6}, {:.6}, {:.6}, {:.6}) euler_xyz=({:.3}, {:.3}, {:.3})deg",
            q.x,
            q.y,
            q.z,
            q.w,
            ex.to_degrees(),
            ey.to_degrees(),
            ez.to_degrees()
        );

        if self.verbose {
            let c = &scene.camera;
            let l = &scene.light;
            // Writing into a String cannot fail.
            let _ = write!(
                out,
                "\n  camera: pos=({:.1}, {:.1}, {:.1}) fov={:.0} aspect={:.3}\n  light: pos=({:.1}, {:.1}, {:.1}) intensity={:.2}",
                c.position.x,
                c.position.y,
                c.position.z,
                c.fov_degrees,
                c.aspect,
                l.position.x,
                l.position.y,
                l.position.z,
                l.intensity
            );
        }

        out
    }
}
