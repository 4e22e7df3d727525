use glam::Vec2;

/// Pointer position in surface-local logical coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for PointerSample {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// A pointer event as seen by the rotation controller.
///
/// Host input layers (winit, a script, a test) translate their native events
/// into these and feed them to [`DragRotation::handle`](crate::DragRotation::handle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button went down on the interactive surface.
    DragStart,
    /// The button was released.
    DragEnd,
    /// The pointer moved to a new position.
    Move(PointerSample),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_converts_from_vec2() {
        let s = PointerSample::from(Vec2::new(3.0, -4.0));
        assert_eq!(s, PointerSample::new(3.0, -4.0));
        assert_eq!(s.as_vec2(), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn default_sample_is_origin() {
        assert_eq!(PointerSample::default(), PointerSample::new(0.0, 0.0));
    }
}
