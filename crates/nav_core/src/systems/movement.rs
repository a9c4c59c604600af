//! Movement integration: wish direction from held axes and the current
//! frame's look basis, exponentially damped velocity, position step.

use crate::input::MoveButtons;
use crate::systems::look::Basis;
use glam::Vec3;

/// Movement tuning.
#[derive(Clone, Copy, Debug)]
pub struct MoveTuning {
    /// Input acceleration scale (units/s).
    pub move_speed: f32,
    /// Per-frame multiplicative velocity decay constant, `0 <= damping < 1`.
    pub damping: f32,
}

impl Default for MoveTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            damping: 0.9,
        }
    }
}

/// Sum the active axis directions: forward/back and right/left come from the
/// look basis, up/down are world-vertical. Unit length when any axis is held.
#[must_use]
pub fn wish_dir(basis: &Basis, buttons: MoveButtons) -> Vec3 {
    let mut dir = Vec3::ZERO;
    if buttons.forward {
        dir += basis.forward;
    }
    if buttons.backward {
        dir -= basis.forward;
    }
    if buttons.right {
        dir += basis.right;
    }
    if buttons.left {
        dir -= basis.right;
    }
    if buttons.up {
        dir += Vec3::Y;
    }
    if buttons.down {
        dir -= Vec3::Y;
    }
    dir.normalize_or_zero()
}

/// Advance velocity and position by one frame.
///
/// Damping applies before the frame's acceleration: held input converges to
/// `move_speed * dt / (1 - damping)` per frame, released input decays
/// geometrically by `damping` each frame.
pub fn step(
    tuning: MoveTuning,
    basis: &Basis,
    buttons: MoveButtons,
    velocity: &mut Vec3,
    position: &mut Vec3,
    dt: f32,
) {
    let wish = wish_dir(basis, buttons);
    *velocity = *velocity * tuning.damping + wish * tuning.move_speed * dt;
    *position += *velocity;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wish_dir_is_unit_or_zero() {
        let basis = Basis::default();
        assert_eq!(wish_dir(&basis, MoveButtons::default()), Vec3::ZERO);
        let b = MoveButtons {
            forward: true,
            right: true,
            up: true,
            ..Default::default()
        };
        let d = wish_dir(&basis, b);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposed_axes_cancel() {
        let basis = Basis::default();
        let b = MoveButtons {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(wish_dir(&basis, b), Vec3::ZERO);
    }

    #[test]
    fn forward_follows_pitched_basis() {
        // Looking 45 degrees up, forward motion gains height.
        let basis = Basis::from_yaw_pitch(0.0, std::f32::consts::FRAC_PI_4);
        let b = MoveButtons {
            forward: true,
            ..Default::default()
        };
        let d = wish_dir(&basis, b);
        assert!(d.y > 0.5);
    }

    #[test]
    fn zero_input_decays_geometrically() {
        let tuning = MoveTuning::default();
        let basis = Basis::default();
        let mut vel = Vec3::new(1.0, 0.0, 0.5);
        let mut pos = Vec3::ZERO;
        let v0 = vel.length();
        for _ in 0..30 {
            step(tuning, &basis, MoveButtons::default(), &mut vel, &mut pos, 1.0 / 60.0);
        }
        let expect = v0 * tuning.damping.powi(30);
        assert!((vel.length() - expect).abs() / expect < 1e-4);
    }

    #[test]
    fn held_input_converges_to_fixed_point() {
        let tuning = MoveTuning::default();
        let basis = Basis::default();
        let b = MoveButtons {
            forward: true,
            ..Default::default()
        };
        let mut vel = Vec3::ZERO;
        let mut pos = Vec3::ZERO;
        let dt = 1.0 / 60.0;
        for _ in 0..60 {
            step(tuning, &basis, b, &mut vel, &mut pos, dt);
        }
        let steady = tuning.move_speed * dt / (1.0 - tuning.damping);
        assert!((vel.length() - steady).abs() / steady < 0.01);
    }
}
