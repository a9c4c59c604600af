//! Property-style checks on the orientation controller.

use glam::Vec2;
use nav_core::systems::look::{Basis, LookController, LookTuning};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn rad_per_count() -> f32 {
    // sensitivity such that one pointer count equals one radian
    1.0_f32.to_degrees()
}

#[test]
fn pitch_stays_in_limits_for_any_delta_sequence() {
    let tuning = LookTuning {
        smoothing_rate: 8.0,
        ..Default::default()
    };
    let mut c = LookController::new(tuning);
    let mut rng = ChaCha8Rng::seed_from_u64(0xCAFE);
    for _ in 0..2_000 {
        let d = Vec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
        c.update(d, 1.0 / 60.0);
        assert!(c.pitch() >= tuning.min_pitch - 1e-6);
        assert!(c.pitch() <= tuning.max_pitch + 1e-6);
    }
}

#[test]
fn up_vector_never_inverts_below_vertical_limit() {
    let tuning = LookTuning::default(); // max pitch 80 degrees < pi/2
    let mut c = LookController::new(tuning);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..2_000 {
        let d = Vec2::new(rng.gen_range(-300.0..300.0), rng.gen_range(-300.0..300.0));
        let basis = c.update(d, 1.0 / 60.0);
        assert!(basis.up.y > 0.0, "up inverted at pitch {}", c.pitch());
    }
}

#[test]
fn spike_delta_is_clamped_to_max_step() {
    let mut c = LookController::new(LookTuning {
        sensitivity_deg_per_count: rad_per_count(),
        max_step: 0.025,
        ..Default::default()
    });
    // Raw scaled delta of ~0.2 rad must land as exactly one max step.
    c.update(Vec2::new(0.2, 0.0), 1.0 / 60.0);
    assert!((c.yaw() - 0.025).abs() < 1e-7);
}

#[test]
fn pitch_saturates_exactly_at_limit() {
    let mut c = LookController::new(LookTuning {
        sensitivity_deg_per_count: rad_per_count(),
        min_pitch: -std::f32::consts::FRAC_PI_2,
        max_pitch: std::f32::consts::FRAC_PI_2,
        max_step: 10.0,
        ..Default::default()
    });
    // Downward deltas accumulating to -3*pi of target pitch.
    for _ in 0..3 {
        c.update(Vec2::new(0.0, std::f32::consts::PI), 1.0 / 60.0);
    }
    #[allow(clippy::float_cmp)]
    {
        assert_eq!(c.pitch(), -std::f32::consts::FRAC_PI_2);
    }
}

#[test]
fn repeated_updates_keep_basis_orthonormal() {
    let mut c = LookController::new(LookTuning {
        smoothing_rate: 12.0,
        ..Default::default()
    });
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut last = Basis::default();
    for _ in 0..5_000 {
        let d = Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        last = c.update(d, 1.0 / 120.0);
    }
    assert!(last.is_orthonormal());
}
