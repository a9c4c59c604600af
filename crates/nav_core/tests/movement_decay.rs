//! Velocity decay and steady-state convergence through the session.

use glam::Vec3;
use nav_core::input::MoveAxis;
use nav_core::session::{NavConfig, NavSession};
use nav_core::systems::interaction::EventBuf;

const DT: f32 = 1.0 / 60.0;

#[test]
fn held_forward_converges_to_steady_state() {
    let cfg = NavConfig::default(); // move_speed 8, damping 0.9
    let mut s = NavSession::new(cfg).expect("session");
    let mut events = EventBuf::new();
    s.on_movement_key(MoveAxis::Forward, true);
    for _ in 0..60 {
        s.tick(DT, &[], &mut events);
    }
    let steady = cfg.movement.move_speed * DT / (1.0 - cfg.movement.damping);
    let speed = s.state().velocity.length();
    assert!(
        (speed - steady).abs() / steady < 0.01,
        "speed {speed} not within 1% of {steady}"
    );
}

#[test]
fn released_input_decays_geometrically() {
    let cfg = NavConfig {
        // Generous bounds so the decay run never rides a wall.
        bounds: nav_core::systems::bounds::CaveBounds {
            half_extent_x: 10_000.0,
            half_extent_z: 10_000.0,
            floor_y: -10_000.0,
            ceiling_y: 10_000.0,
        },
        ..Default::default()
    };
    let mut s = NavSession::new(cfg).expect("session");
    let mut events = EventBuf::new();
    s.on_movement_key(MoveAxis::Forward, true);
    for _ in 0..60 {
        s.tick(DT, &[], &mut events);
    }
    s.on_movement_key(MoveAxis::Forward, false);
    s.tick(DT, &[], &mut events);
    let v0 = s.state().velocity.length();
    let n = 25;
    for _ in 0..n {
        s.tick(DT, &[], &mut events);
    }
    let expect = v0 * cfg.movement.damping.powi(n);
    let got = s.state().velocity.length();
    assert!(
        (got - expect).abs() / expect < 1e-3,
        "decay off: got {got}, expected {expect}"
    );
}

#[test]
fn movement_is_relative_to_this_frames_orientation() {
    // Turn 90 degrees and move forward in the same frame: displacement must
    // follow the freshly rotated basis, not last frame's.
    let cfg = NavConfig {
        look: nav_core::systems::look::LookTuning {
            sensitivity_deg_per_count: 1.0_f32.to_degrees(), // 1 rad/count
            max_step: 10.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut s = NavSession::new(cfg).expect("session");
    let mut events = EventBuf::new();
    s.on_capture_changed(true);
    s.on_pointer_delta(std::f32::consts::FRAC_PI_2, 0.0);
    s.on_movement_key(MoveAxis::Forward, true);
    s.tick(DT, &[], &mut events);
    let p = s.state().position - Vec3::new(0.0, 2.0, 0.0);
    assert!(p.x > 0.1, "expected +x displacement, got {p:?}");
    assert!(p.z.abs() < 1e-3, "expected no +z displacement, got {p:?}");
}
