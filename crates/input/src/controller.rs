use crate::config::InertiaConfig;
use crate::event::{PointerEvent, PointerSample};
use glam::{EulerRot, Quat, Vec2};

/// Axis order used to build each per-frame rotation step.
pub const EULER_ORDER: EulerRot = EulerRot::XYZ;

/// Turns pointer drags into a decaying rotation applied once per frame.
///
/// Each drag move records the pointer delta and raises the acceleration
/// level according to the configured [`AccelerationPolicy`](crate::AccelerationPolicy).
/// Every [`tick`](Self::tick) spends one level and rotates the target by an
/// amount proportional to the remaining level and the last delta, so the
/// target keeps spinning for a few frames after the drag ends.
///
/// The last delta is kept when the drag ends; only the level decays.
#[derive(Debug, Clone)]
pub struct DragRotation {
    config: InertiaConfig,
    previous: PointerSample,
    delta: Vec2,
    level: u32,
    dragging: bool,
}

impl Default for DragRotation {
    fn default() -> Self {
        Self::new(InertiaConfig::default())
    }
}

impl DragRotation {
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config,
            previous: PointerSample::default(),
            delta: Vec2::ZERO,
            level: 0,
            dragging: false,
        }
    }

    pub fn config(&self) -> &InertiaConfig {
        &self.config
    }

    /// Remaining acceleration level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Delta of the last drag move.
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last pointer position seen, dragging or not.
    pub fn previous_sample(&self) -> PointerSample {
        self.previous
    }

    /// Dispatch one pointer event.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::DragStart => self.on_drag_start(),
            PointerEvent::DragEnd => self.on_drag_end(),
            PointerEvent::Move(position) => self.on_pointer_move(position),
        }
    }

    pub fn on_drag_start(&mut self) {
        self.dragging = true;
        tracing::debug!(level = self.level, "drag started");
    }

    pub fn on_drag_end(&mut self) {
        self.dragging = false;
        tracing::debug!(level = self.level, "drag ended");
    }

    pub fn on_pointer_move(&mut self, position: PointerSample) {
        if self.dragging {
            self.delta = position.as_vec2() - self.previous.as_vec2();
            self.level = self
                .config
                .policy
                .raise(self.level, self.config.step, self.config.max_level);
            tracing::trace!(delta = ?self.delta, level = self.level, "drag move");
        }
        self.previous = position;
    }

    /// Rotation for the current level and delta.
    ///
    /// Pitch follows vertical drag, yaw follows horizontal drag, no roll.
    pub fn step_rotation(&self) -> Quat {
        let k = self.level as f32 * self.config.scale;
        let pitch = (self.delta.y * k).to_radians();
        let yaw = (self.delta.x * k).to_radians();
        Quat::from_euler(EULER_ORDER, pitch, yaw, 0.0)
    }

    /// Advance one frame: spend one level and pre-multiply `orientation` by
    /// the resulting step, so the step turns about world axes.
    pub fn tick(&mut self, orientation: &mut Quat) {
        if self.level > 0 {
            self.level -= 1;
            let step = self.step_rotation();
            *orientation = (step * *orientation).normalize();
            tracing::trace!(level = self.level, "inertia step");
        } else {
            self.level = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccelerationPolicy;

    const EPS: f32 = 1e-6;

    fn yaw_deg(deg: f32) -> Quat {
        Quat::from_rotation_y(deg.to_radians())
    }

    /// Pointer parked at (100, 100), then a drag to (110, 100).
    fn dragged_right(policy: AccelerationPolicy) -> DragRotation {
        let mut c = DragRotation::new(InertiaConfig::default().with_policy(policy));
        c.on_pointer_move(PointerSample::new(100.0, 100.0));
        c.on_drag_start();
        c.on_pointer_move(PointerSample::new(110.0, 100.0));
        c
    }

    #[test]
    fn starts_at_rest() {
        let c = DragRotation::default();
        assert_eq!(c.level(), 0);
        assert_eq!(c.delta(), Vec2::ZERO);
        assert!(!c.is_dragging());
        assert_eq!(c.previous_sample(), PointerSample::default());
    }

    #[test]
    fn moves_without_drag_only_track_position() {
        let mut c = DragRotation::default();
        for i in 0..5 {
            c.on_pointer_move(PointerSample::new(i as f32 * 7.0, 3.0));
        }
        assert_eq!(c.level(), 0);
        assert_eq!(c.delta(), Vec2::ZERO);
        assert_eq!(c.previous_sample(), PointerSample::new(28.0, 3.0));
    }

    #[test]
    fn drag_move_records_delta_and_raises_level() {
        let c = dragged_right(AccelerationPolicy::Ceiling);
        assert_eq!(c.delta(), Vec2::new(10.0, 0.0));
        assert_eq!(c.level(), 3);
        assert_eq!(c.previous_sample(), PointerSample::new(110.0, 100.0));
    }

    #[test]
    fn ceiling_policy_never_exceeds_max() {
        let mut c = dragged_right(AccelerationPolicy::Ceiling);
        let mut levels = vec![c.level()];
        for i in 0..6 {
            c.on_pointer_move(PointerSample::new(111.0 + i as f32, 100.0));
            levels.push(c.level());
        }
        assert_eq!(levels, vec![3, 6, 9, 10, 10, 10, 10]);
    }

    #[test]
    fn floor_policy_reproduces_unbounded_growth() {
        let mut c = dragged_right(AccelerationPolicy::Floor);
        assert_eq!(c.level(), 10);
        c.on_pointer_move(PointerSample::new(120.0, 100.0));
        assert_eq!(c.level(), 13);
        c.on_pointer_move(PointerSample::new(130.0, 100.0));
        assert_eq!(c.level(), 16);
    }

    #[test]
    fn drag_end_keeps_level_and_delta() {
        let mut c = dragged_right(AccelerationPolicy::Ceiling);
        c.on_drag_end();
        assert!(!c.is_dragging());
        assert_eq!(c.level(), 3);
        assert_eq!(c.delta(), Vec2::new(10.0, 0.0));

        c.on_pointer_move(PointerSample::new(500.0, 500.0));
        assert_eq!(c.delta(), Vec2::new(10.0, 0.0));
        assert_eq!(c.level(), 3);
    }

    #[test]
    fn tick_at_rest_is_noop() {
        let mut c = DragRotation::default();
        let mut q = Quat::from_rotation_z(0.3);
        let before = q;
        c.tick(&mut q);
        assert_eq!(q, before);
        assert_eq!(c.level(), 0);
    }

    #[test]
    fn tick_spends_one_level_and_applies_one_step() {
        let mut c = dragged_right(AccelerationPolicy::Ceiling);
        let mut q = Quat::IDENTITY;
        c.tick(&mut q);
        assert_eq!(c.level(), 2);
        // 10 px * level 2 * 0.015 = 0.3 degrees of yaw
        assert!(q.abs_diff_eq(yaw_deg(0.3), EPS));
    }

    #[test]
    fn vertical_drag_pitches_about_x() {
        let mut c = DragRotation::default();
        c.on_drag_start();
        c.on_pointer_move(PointerSample::new(0.0, 20.0));
        let mut q = Quat::IDENTITY;
        c.tick(&mut q);
        // 20 px * level 2 * 0.015 = 0.6 degrees of pitch
        assert!(q.abs_diff_eq(Quat::from_rotation_x(0.6_f32.to_radians()), EPS));
    }

    #[test]
    fn diagonal_drag_composes_pitch_before_yaw() {
        let mut c = DragRotation::default();
        c.on_drag_start();
        c.on_pointer_move(PointerSample::new(10.0, 20.0));
        let mut q = Quat::IDENTITY;
        c.tick(&mut q);

        // level 2: pitch 20 * 2 * 0.015 = 0.6, yaw 10 * 2 * 0.015 = 0.3 degrees
        let pitch = Quat::from_rotation_x(0.6_f32.to_radians());
        let yaw = yaw_deg(0.3);
        assert!(q.abs_diff_eq(pitch * yaw, EPS));
        assert!(!q.abs_diff_eq(yaw * pitch, EPS));
    }

    #[test]
    fn large_step_uses_xyz_axis_order() {
        let mut c = DragRotation::default();
        c.on_drag_start();
        c.on_pointer_move(PointerSample::new(400.0, 300.0));
        c.tick(&mut Quat::IDENTITY);
        assert_eq!(c.level(), 2);

        // level 2: pitch 300 * 0.03 = 9, yaw 400 * 0.03 = 12 degrees
        let pitch = Quat::from_rotation_x(9.0_f32.to_radians());
        let yaw = yaw_deg(12.0);
        let step = c.step_rotation();
        assert!(step.abs_diff_eq(pitch * yaw, EPS));
        assert!(!step.abs_diff_eq(yaw * pitch, 1e-4));
        assert!(step.z > 0.0);
    }

    #[test]
    fn step_premultiplies_existing_orientation() {
        let mut c = dragged_right(AccelerationPolicy::Ceiling);
        let start = Quat::from_rotation_x(0.5);
        let mut q = start;
        c.tick(&mut q);
        let expected = yaw_deg(0.3) * start;
        assert!(q.abs_diff_eq(expected, EPS));
        assert!(!q.abs_diff_eq(start * yaw_deg(0.3), 1e-4));
    }

    #[test]
    fn ticks_are_idempotent_once_level_is_spent() {
        let mut c = dragged_right(AccelerationPolicy::Ceiling);
        let mut q = Quat::IDENTITY;
        for _ in 0..3 {
            c.tick(&mut q);
        }
        assert_eq!(c.level(), 0);
        let settled = q;
        for _ in 0..20 {
            c.tick(&mut q);
        }
        assert_eq!(q, settled);
        assert_eq!(c.level(), 0);
    }

    #[test]
    fn ceiling_drag_settles_after_three_diminishing_steps() {
        let mut c = dragged_right(AccelerationPolicy::Ceiling);
        let mut q = Quat::IDENTITY;
        for _ in 0..10 {
            c.tick(&mut q);
        }
        assert_eq!(c.level(), 0);
        // levels 2, 1, 0 -> 10 * 0.015 * 3 = 0.45 degrees
        assert!(q.abs_diff_eq(yaw_deg(0.45), EPS));
        assert!(q.x.abs() < EPS && q.z.abs() < EPS);

        let settled = q;
        c.tick(&mut q);
        assert_eq!(q, settled);
    }

    #[test]
    fn floor_drag_settles_after_ten_diminishing_steps() {
        let mut c = dragged_right(AccelerationPolicy::Floor);
        let mut q = Quat::IDENTITY;
        for _ in 0..10 {
            c.tick(&mut q);
        }
        assert_eq!(c.level(), 0);
        // levels 9..=0 sum to 45 -> 10 * 0.015 * 45 = 6.75 degrees
        assert!(q.abs_diff_eq(yaw_deg(6.75), 1e-5));
        assert!(q.x.abs() < EPS && q.z.abs() < EPS);

        let settled = q;
        c.tick(&mut q);
        assert_eq!(q, settled);
    }

    #[test]
    fn handle_dispatches_events() {
        let mut c = DragRotation::default();
        c.handle(PointerEvent::Move(PointerSample::new(5.0, 5.0)));
        c.handle(PointerEvent::DragStart);
        assert!(c.is_dragging());
        c.handle(PointerEvent::Move(PointerSample::new(8.0, 1.0)));
        assert_eq!(c.delta(), Vec2::new(3.0, -4.0));
        c.handle(PointerEvent::DragEnd);
        assert!(!c.is_dragging());
    }

    #[test]
    fn orientation_stays_unit_length() {
        let mut c = DragRotation::new(
            InertiaConfig::default().with_policy(AccelerationPolicy::Floor),
        );
        c.on_drag_start();
        let mut q = Quat::IDENTITY;
        for i in 0..200 {
            c.on_pointer_move(PointerSample::new((i * 13 % 41) as f32, (i * 7 % 29) as f32));
            c.tick(&mut q);
        }
        assert!((q.length() - 1.0).abs() < 1e-5);
    }
}
