//! Proximity interaction: distance checks against the world's target list,
//! emitting discovery/activation events for external collaborators.

use anyhow::{Result, ensure};
use glam::Vec3;
use smallvec::SmallVec;
use std::collections::HashSet;
use world_core::components::{ActivatePolicy, InteractableTarget, InteractionEvent, TargetId};

/// Per-frame event buffer sized for the common no-alloc case.
pub type EventBuf = SmallVec<[InteractionEvent; 8]>;

/// Interaction tuning.
#[derive(Clone, Copy, Debug)]
pub struct InteractionTuning {
    /// Trigger distance; a target is in range when strictly closer than this.
    pub radius: f32,
    pub policy: ActivatePolicy,
}

impl Default for InteractionTuning {
    fn default() -> Self {
        Self {
            radius: 3.0,
            policy: ActivatePolicy::OnEnter,
        }
    }
}

impl InteractionTuning {
    pub fn validate(self) -> Result<()> {
        ensure!(
            self.radius.is_finite() && self.radius > 0.0,
            "interaction radius must be positive"
        );
        Ok(())
    }
}

/// Distance trigger with per-target in-range memory for edge-triggered
/// activation. The core never mutates `discovered`; the world collaborator
/// applies emitted `Discover` events itself.
#[derive(Debug, Clone, Default)]
pub struct ProximityTrigger {
    in_range: HashSet<TargetId>,
}

impl ProximityTrigger {
    /// Evaluate every target against the clamped player position.
    ///
    /// Undiscovered targets in range emit `Discover` (at most once per target
    /// per frame); discovered targets emit `Activate` per the policy.
    /// Targets that left the list are pruned from the in-range memory.
    pub fn check(
        &mut self,
        tuning: InteractionTuning,
        position: Vec3,
        targets: &[InteractableTarget],
        out: &mut EventBuf,
    ) {
        let r2 = tuning.radius * tuning.radius;
        let mut now = HashSet::with_capacity(self.in_range.len());
        for t in targets {
            if position.distance_squared(t.position) >= r2 {
                continue;
            }
            if t.discovered {
                let entered = !self.in_range.contains(&t.id);
                match tuning.policy {
                    ActivatePolicy::WhileInRange => out.push(InteractionEvent::Activate(t.id)),
                    ActivatePolicy::OnEnter => {
                        if entered {
                            out.push(InteractionEvent::Activate(t.id));
                        }
                    }
                }
            } else {
                out.push(InteractionEvent::Discover(t.id));
            }
            now.insert(t.id);
        }
        self.in_range = now;
    }
}
