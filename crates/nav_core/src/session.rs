//! Session: owns the player record, validates configuration fail-fast, and
//! runs the fixed per-frame sequence.
//!
//! Order within one frame is sample, orientation, movement, clamp,
//! interaction; movement always reads the same frame's orientation and
//! proximity checks always use the clamped position.

use anyhow::{Result, ensure};
use glam::Vec3;
use world_core::components::{InteractableTarget, PlayerPose};

use crate::input::{InputEvent, MoveAxis, Sampler};
use crate::systems::bounds::CaveBounds;
use crate::systems::interaction::{EventBuf, InteractionTuning, ProximityTrigger};
use crate::systems::look::{Basis, LookController, LookTuning};
use crate::systems::movement::{self, MoveTuning};

/// Defensive ceiling on a single frame's `dt` (seconds), against host
/// stalls delivering one huge step.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Session configuration. Supplied at construction, immutable thereafter.
#[derive(Clone, Copy, Debug)]
pub struct NavConfig {
    pub look: LookTuning,
    pub movement: MoveTuning,
    pub bounds: CaveBounds,
    pub interaction: InteractionTuning,
    /// Initial player position; clamped into bounds at construction.
    pub spawn: Vec3,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            look: LookTuning::default(),
            movement: MoveTuning::default(),
            bounds: CaveBounds::default(),
            interaction: InteractionTuning::default(),
            spawn: Vec3::new(0.0, 2.0, 0.0),
        }
    }
}

impl NavConfig {
    /// Fail-fast validation; any violation is fatal to session construction.
    pub fn validate(&self) -> Result<()> {
        let l = &self.look;
        ensure!(
            l.sensitivity_deg_per_count.is_finite() && l.sensitivity_deg_per_count > 0.0,
            "look sensitivity must be positive"
        );
        ensure!(
            l.min_pitch <= l.max_pitch,
            "min_pitch {} exceeds max_pitch {}",
            l.min_pitch,
            l.max_pitch
        );
        ensure!(
            l.min_pitch >= -std::f32::consts::FRAC_PI_2
                && l.max_pitch <= std::f32::consts::FRAC_PI_2,
            "pitch limits must stay within +/- pi/2"
        );
        if let Some((lo, hi)) = l.yaw_limits {
            ensure!(lo <= hi, "yaw_min {lo} exceeds yaw_max {hi}");
        }
        ensure!(
            l.max_step.is_finite() && l.max_step > 0.0,
            "max look step must be positive"
        );
        ensure!(
            l.smoothing_rate.is_finite() && l.smoothing_rate >= 0.0,
            "smoothing rate must be non-negative"
        );
        ensure!(
            self.movement.move_speed.is_finite() && self.movement.move_speed >= 0.0,
            "move speed must be non-negative"
        );
        ensure!(
            (0.0..1.0).contains(&self.movement.damping),
            "damping must be in [0, 1), got {}",
            self.movement.damping
        );
        self.bounds.validate()?;
        self.interaction.validate()?;
        ensure!(self.spawn.is_finite(), "spawn position must be finite");
        Ok(())
    }
}

/// Mutable player record, exclusively owned by the session. Collaborators
/// only ever see [`PlayerPose`] snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// First-person navigation session.
///
/// Single-threaded and non-blocking: the host calls the event entry points
/// as input arrives and [`NavSession::tick`] once per display frame.
#[derive(Debug, Clone)]
pub struct NavSession {
    config: NavConfig,
    sampler: Sampler,
    look: LookController,
    trigger: ProximityTrigger,
    state: PlayerState,
    pose: PlayerPose,
}

impl NavSession {
    /// Validate `config` and construct the session at the (clamped) spawn
    /// position, looking along the neutral orientation.
    pub fn new(config: NavConfig) -> Result<Self> {
        config.validate()?;
        let position = config.bounds.clamp(config.spawn);
        let mut look = LookController::new(config.look);
        let basis = look.reset();
        let state = PlayerState {
            position,
            velocity: Vec3::ZERO,
        };
        let pose = Self::publish(&state, &basis, &look);
        Ok(Self {
            config,
            sampler: Sampler::default(),
            look,
            trigger: ProximityTrigger::default(),
            state,
            pose,
        })
    }

    /// Movement key pressed or released on one of the six logical axes.
    pub fn on_movement_key(&mut self, axis: MoveAxis, pressed: bool) {
        self.sampler.push(InputEvent::MoveKey { axis, pressed });
    }

    /// Raw pointer delta; delivered by the host only while look capture is
    /// engaged, and gated here again regardless.
    pub fn on_pointer_delta(&mut self, dx: f32, dy: f32) {
        self.sampler.push(InputEvent::PointerDelta { dx, dy });
    }

    /// Look capture acquired or released.
    pub fn on_capture_changed(&mut self, active: bool) {
        self.sampler.push(InputEvent::CaptureChanged(active));
    }

    /// Manual reset command; consumed at the next frame.
    pub fn on_reset_requested(&mut self) {
        self.sampler.push(InputEvent::ResetRequested);
    }

    /// Immediate look reset, callable between frames (the recover-camera
    /// path). Does not touch capture state, position, or velocity.
    pub fn reset_look(&mut self) {
        let basis = self.look.reset();
        self.pose = Self::publish(&self.state, &basis, &self.look);
    }

    /// Run one frame and publish the resulting pose.
    ///
    /// `targets` is the world collaborator's current list, read-only here;
    /// emitted events are appended to `events`.
    pub fn tick(
        &mut self,
        dt: f32,
        targets: &[InteractableTarget],
        events: &mut EventBuf,
    ) -> PlayerPose {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let sample = self.sampler.sample();
        let basis = if sample.reset {
            self.look.reset()
        } else {
            self.look.update(sample.look_delta, dt)
        };
        movement::step(
            self.config.movement,
            &basis,
            sample.buttons,
            &mut self.state.velocity,
            &mut self.state.position,
            dt,
        );
        self.state.position = self.config.bounds.clamp(self.state.position);
        self.trigger
            .check(self.config.interaction, self.state.position, targets, events);
        self.pose = Self::publish(&self.state, &basis, &self.look);
        self.pose
    }

    /// Last published pose.
    #[must_use]
    pub fn pose(&self) -> PlayerPose {
        self.pose
    }

    /// Current player record (copy).
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> NavConfig {
        self.config
    }

    fn publish(state: &PlayerState, basis: &Basis, look: &LookController) -> PlayerPose {
        PlayerPose {
            eye: state.position,
            look_dir: basis.forward,
            right: basis.right,
            up: basis.up,
            yaw: look.yaw(),
            pitch: look.pitch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_bad_config() {
        let cfg = NavConfig {
            look: LookTuning {
                min_pitch: 1.0,
                max_pitch: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(NavSession::new(cfg).is_err());

        let cfg = NavConfig {
            movement: MoveTuning {
                damping: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(NavSession::new(cfg).is_err());

        let cfg = NavConfig {
            interaction: InteractionTuning {
                radius: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(NavSession::new(cfg).is_err());

        assert!(NavSession::new(NavConfig::default()).is_ok());
    }

    #[test]
    fn spawn_is_clamped_into_bounds() {
        let cfg = NavConfig {
            spawn: Vec3::new(500.0, -50.0, 0.0),
            ..Default::default()
        };
        let s = NavSession::new(cfg).expect("session");
        assert_eq!(s.state().position, Vec3::new(50.0, 0.0, 0.0));
        assert_eq!(s.pose().eye, s.state().position);
    }
}
