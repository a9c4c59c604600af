//! Orientation controller: accumulated yaw/pitch with spike clamping,
//! optional smoothing, and a fresh two-rotation basis every frame.
//!
//! Yaw and pitch are stored as two absolute scalars and the basis is rebuilt
//! from them each update — never by multiplying incremental rotations — so
//! repeated updates cannot drift into a flipped or skewed frame.

use glam::{Vec2, Vec3};

/// Look tuning. Angles in radians; sensitivity in degrees per pointer count.
#[derive(Clone, Copy, Debug)]
pub struct LookTuning {
    pub sensitivity_deg_per_count: f32,
    pub invert_y: bool,
    pub min_pitch: f32,
    pub max_pitch: f32,
    /// Hard yaw range; `None` leaves yaw unconstrained (wrapping is cosmetic
    /// and never applied here).
    pub yaw_limits: Option<(f32, f32)>,
    /// Cap on a single frame's angle step after sensitivity scaling, per
    /// axis. Absorbs spiked events before they reach the accumulator.
    pub max_step: f32,
    /// Exponential approach rate toward the target angles (1/s); `0` snaps.
    pub smoothing_rate: f32,
}

impl Default for LookTuning {
    fn default() -> Self {
        Self {
            sensitivity_deg_per_count: 0.15,
            invert_y: false,
            min_pitch: -80.0_f32.to_radians(),
            max_pitch: 80.0_f32.to_radians(),
            yaw_limits: None,
            max_step: 0.35,
            smoothing_rate: 0.0,
        }
    }
}

/// Orthonormal look basis derived from absolute yaw/pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// Compose yaw about world up, then pitch about the resulting local
    /// right axis. `right` stays horizontal; `up.y == cos(pitch)`, which is
    /// positive for any pitch inside `(-pi/2, pi/2)`.
    #[must_use]
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let forward = Vec3::new(cp * sy, sp, cp * cy);
        let right = Vec3::new(cy, 0.0, -sy);
        let up = forward.cross(right);
        Self { forward, right, up }
    }

    /// Drift guard used by the controller; always true for a basis built by
    /// [`Basis::from_yaw_pitch`].
    #[must_use]
    pub fn is_orthonormal(&self) -> bool {
        const EPS: f32 = 1e-3;
        (self.forward.length_squared() - 1.0).abs() < EPS
            && (self.right.length_squared() - 1.0).abs() < EPS
            && (self.up.length_squared() - 1.0).abs() < EPS
            && self.forward.dot(self.right).abs() < EPS
            && self.forward.dot(self.up).abs() < EPS
            && self.right.dot(self.up).abs() < EPS
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::from_yaw_pitch(0.0, 0.0)
    }
}

/// Owns accumulated look state as (target, current) yaw/pitch pairs.
///
/// Smoothing decouples raw input responsiveness from the visible rotation
/// rate; the published basis always comes from the smoothed angles.
#[derive(Clone, Copy, Debug)]
pub struct LookController {
    tuning: LookTuning,
    /// (yaw, pitch) the input has accumulated to.
    target: Vec2,
    /// (yaw, pitch) the basis is built from.
    current: Vec2,
}

impl LookController {
    #[must_use]
    pub fn new(tuning: LookTuning) -> Self {
        Self {
            tuning,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
        }
    }

    /// Accumulate one frame of raw pointer delta and rebuild the basis.
    ///
    /// The delta is sensitivity-scaled, then hard-clamped per axis to
    /// `max_step` before accumulation; pitch is clamped to its limits on
    /// every accumulation, yaw only when limits are configured.
    pub fn update(&mut self, delta: Vec2, dt: f32) -> Basis {
        let d = if delta.is_finite() {
            delta
        } else {
            log::debug!(target: "nav", "discarding non-finite look delta");
            Vec2::ZERO
        };
        let to_rad = self.tuning.sensitivity_deg_per_count.to_radians();
        let cap = self.tuning.max_step;
        let step_yaw = (d.x * to_rad).clamp(-cap, cap);
        let dy = if self.tuning.invert_y { d.y } else { -d.y };
        let step_pitch = (dy * to_rad).clamp(-cap, cap);

        self.target.x += step_yaw;
        if let Some((lo, hi)) = self.tuning.yaw_limits {
            self.target.x = self.target.x.clamp(lo, hi);
        }
        self.target.y =
            (self.target.y + step_pitch).clamp(self.tuning.min_pitch, self.tuning.max_pitch);

        // Exponential approach; both endpoints are in range, so the
        // interpolant is too.
        let t = if self.tuning.smoothing_rate > 0.0 {
            (dt * self.tuning.smoothing_rate).min(1.0)
        } else {
            1.0
        };
        self.current += (self.target - self.current) * t;
        self.rebuild()
    }

    /// Snap target and current angles to neutral and rebuild immediately.
    /// Valid in any capture state; never fails.
    pub fn reset(&mut self) -> Basis {
        self.target = Vec2::ZERO;
        self.current = Vec2::ZERO;
        Basis::from_yaw_pitch(0.0, 0.0)
    }

    fn rebuild(&mut self) -> Basis {
        let basis = Basis::from_yaw_pitch(self.current.x, self.current.y);
        if basis.is_orthonormal() {
            basis
        } else {
            log::warn!(target: "nav", "look basis off-orthonormal; resetting");
            self.reset()
        }
    }

    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.current.x
    }

    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.current.y
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn snap_tuning() -> LookTuning {
        LookTuning {
            // 1 rad per count, no smoothing: steps map straight to angles.
            sensitivity_deg_per_count: 1.0_f32.to_degrees(),
            max_step: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn pitch_is_clamped_on_accumulation() {
        let mut c = LookController::new(snap_tuning());
        c.update(Vec2::new(0.0, 10_000.0), 1.0 / 60.0);
        assert!(c.pitch() >= -80.0_f32.to_radians() - 1e-6);
        c.update(Vec2::new(0.0, -10_000.0), 1.0 / 60.0);
        assert!(c.pitch() <= 80.0_f32.to_radians() + 1e-6);
    }

    #[test]
    fn yaw_unbounded_by_default() {
        let mut c = LookController::new(snap_tuning());
        for _ in 0..100 {
            c.update(Vec2::new(1.0, 0.0), 1.0 / 60.0);
        }
        assert!(c.yaw() > std::f32::consts::TAU);
    }

    #[test]
    fn yaw_limits_clamp_when_configured() {
        let mut c = LookController::new(LookTuning {
            yaw_limits: Some((-1.0, 1.0)),
            ..snap_tuning()
        });
        for _ in 0..100 {
            c.update(Vec2::new(1.0, 0.0), 1.0 / 60.0);
        }
        assert!((c.yaw() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn invert_y_flips_pitch_sign() {
        let mut a = LookController::new(snap_tuning());
        let mut b = LookController::new(LookTuning {
            invert_y: true,
            ..snap_tuning()
        });
        a.update(Vec2::new(0.0, 0.2), 1.0 / 60.0);
        b.update(Vec2::new(0.0, 0.2), 1.0 / 60.0);
        assert!((a.pitch() + b.pitch()).abs() < 1e-6);
        assert!(a.pitch() < 0.0);
    }

    #[test]
    fn smoothing_approaches_target_without_overshoot() {
        let mut c = LookController::new(LookTuning {
            smoothing_rate: 10.0,
            ..snap_tuning()
        });
        c.update(Vec2::new(1.0, 0.0), 1.0 / 60.0);
        let after_one = c.yaw();
        assert!(after_one > 0.0 && after_one < 1.0);
        for _ in 0..600 {
            c.update(Vec2::ZERO, 1.0 / 60.0);
        }
        assert!((c.yaw() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn basis_is_orthonormal_everywhere() {
        for yaw_step in -20..=20 {
            for pitch_step in -15..=15 {
                #[allow(clippy::cast_precision_loss)]
                let b = Basis::from_yaw_pitch(yaw_step as f32 * 0.33, pitch_step as f32 * 0.1);
                assert!(b.is_orthonormal(), "yaw_step={yaw_step} pitch_step={pitch_step}");
            }
        }
    }

    #[test]
    fn reset_returns_neutral_basis() {
        let mut c = LookController::new(snap_tuning());
        c.update(Vec2::new(3.0, 0.7), 1.0 / 60.0);
        let b = c.reset();
        assert_eq!(c.yaw(), 0.0);
        assert_eq!(c.pitch(), 0.0);
        assert!((b.forward - Vec3::Z).length() < 1e-6);
    }
}
