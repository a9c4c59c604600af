//! Axis-aligned cave bounds and the per-axis position clamp.

use anyhow::{Result, ensure};
use glam::Vec3;

/// Navigable volume: horizontal half-extents around the origin plus explicit
/// floor and ceiling heights. Immutable for a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaveBounds {
    pub half_extent_x: f32,
    pub half_extent_z: f32,
    pub floor_y: f32,
    pub ceiling_y: f32,
}

impl Default for CaveBounds {
    fn default() -> Self {
        Self {
            half_extent_x: 50.0,
            half_extent_z: 50.0,
            floor_y: 0.0,
            ceiling_y: 40.0,
        }
    }
}

impl CaveBounds {
    /// Fail-fast shape validation at session construction.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.half_extent_x.is_finite()
                && self.half_extent_z.is_finite()
                && self.floor_y.is_finite()
                && self.ceiling_y.is_finite(),
            "cave bounds must be finite"
        );
        ensure!(
            self.half_extent_x > 0.0 && self.half_extent_z > 0.0,
            "cave half-extents must be positive"
        );
        ensure!(
            self.floor_y < self.ceiling_y,
            "cave floor {} must sit below ceiling {}",
            self.floor_y,
            self.ceiling_y
        );
        Ok(())
    }

    /// Saturate a position to the volume, per axis. Silent and idempotent;
    /// in-bounds input is returned unchanged.
    #[must_use]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(-self.half_extent_x, self.half_extent_x),
            p.y.clamp(self.floor_y, self.ceiling_y),
            p.z.clamp(-self.half_extent_z, self.half_extent_z),
        )
    }

    /// True when `p` is already inside the volume.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        self.clamp(p) == p
    }
}
