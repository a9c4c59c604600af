//! Component definitions shared between the navigation core and host crates.

use glam::Vec3;

/// Opaque identifier for an interactable target (storage-assigned). Stable
/// for the lifetime of the world list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "replication", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetId(pub u64);

/// A discoverable object placed in the cave.
///
/// Owned by the world/storage collaborator. The navigation core reads
/// `position` and `discovered` once per frame and requests state changes via
/// [`InteractionEvent`]; it never flips `discovered` itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "replication", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractableTarget {
    pub id: TargetId,
    pub position: Vec3,
    pub discovered: bool,
}

/// Proximity events emitted by the navigation core.
///
/// The collaborator owning targets applies `Discover`; the audio binding
/// consumes `Activate`. Delivery is fire-and-forget from the core's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    Discover(TargetId),
    Activate(TargetId),
}

impl InteractionEvent {
    /// Target the event refers to.
    #[must_use]
    pub fn target(self) -> TargetId {
        match self {
            Self::Discover(id) | Self::Activate(id) => id,
        }
    }
}

/// How `Activate` fires for an already-discovered target in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "replication", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivatePolicy {
    /// Once per approach (on the out-of-range to in-range transition).
    #[default]
    OnEnter,
    /// Every evaluated frame while in range; the consumer handles toggling.
    WhileInRange,
}

/// Read-only first-person pose published to renderer/audio each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub eye: Vec3,
    pub look_dir: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for PlayerPose {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            look_dir: Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}
