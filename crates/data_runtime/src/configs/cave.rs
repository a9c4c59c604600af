//! Cave volume, movement, and interaction configuration loaded from
//! data/config/cave.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct CaveCfg {
    pub half_extent_x: Option<f32>,
    pub half_extent_z: Option<f32>,
    pub floor_y: Option<f32>,
    pub ceiling_y: Option<f32>,
    pub spawn: Option<[f32; 3]>,
    pub move_speed: Option<f32>,
    pub damping: Option<f32>,
    pub interact_radius: Option<f32>,
    /// "on_enter" (once per approach) or "while_in_range" (every frame).
    pub activate_policy: Option<String>,
}

impl Default for CaveCfg {
    fn default() -> Self {
        Self {
            half_extent_x: Some(50.0),
            half_extent_z: Some(50.0),
            floor_y: Some(0.0),
            ceiling_y: Some(40.0),
            spawn: Some([0.0, 2.0, 0.0]),
            move_speed: Some(8.0),
            damping: Some(0.9),
            interact_radius: Some(3.0),
            activate_policy: Some("on_enter".to_string()),
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

pub fn load_default() -> Result<CaveCfg> {
    let path = data_root().join("config/cave.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<CaveCfg>(&txt).context("parse cave TOML")?
    } else {
        CaveCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(v) = std::env::var("CAVE_HALF_X") {
        cfg.half_extent_x = v.parse().ok();
    }
    if let Ok(v) = std::env::var("CAVE_HALF_Z") {
        cfg.half_extent_z = v.parse().ok();
    }
    if let Ok(v) = std::env::var("CAVE_FLOOR_Y") {
        cfg.floor_y = v.parse().ok();
    }
    if let Ok(v) = std::env::var("CAVE_CEILING_Y") {
        cfg.ceiling_y = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MOVE_SPEED") {
        cfg.move_speed = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MOVE_DAMPING") {
        cfg.damping = v.parse().ok();
    }
    if let Ok(v) = std::env::var("INTERACT_RADIUS") {
        cfg.interact_radius = v.parse().ok();
    }
    if let Ok(v) = std::env::var("ACTIVATE_POLICY") {
        cfg.activate_policy = Some(v);
    }
    Ok(cfg)
}
