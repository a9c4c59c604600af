//! Look controller configuration loaded from data/config/nav_camera.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct NavCameraCfg {
    pub sensitivity_deg_per_count: Option<f32>,
    pub invert_y: Option<bool>,
    pub min_pitch_deg: Option<f32>,
    pub max_pitch_deg: Option<f32>,
    /// Optional hard yaw range (degrees). Both must be present to apply.
    pub min_yaw_deg: Option<f32>,
    pub max_yaw_deg: Option<f32>,
    /// Per-frame look step cap after sensitivity scaling (degrees).
    pub max_step_deg: Option<f32>,
    /// Exponential look smoothing rate (1/s); 0 disables smoothing.
    pub smoothing_rate: Option<f32>,
}

impl Default for NavCameraCfg {
    fn default() -> Self {
        Self {
            sensitivity_deg_per_count: Some(0.15),
            invert_y: Some(false),
            min_pitch_deg: Some(-80.0),
            max_pitch_deg: Some(80.0),
            min_yaw_deg: None,
            max_yaw_deg: None,
            max_step_deg: Some(20.0),
            smoothing_rate: Some(0.0),
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

pub fn load_default() -> Result<NavCameraCfg> {
    let path = data_root().join("config/nav_camera.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<NavCameraCfg>(&txt).context("parse nav_camera TOML")?
    } else {
        NavCameraCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(s) = std::env::var("MOUSE_SENS_DEG") {
        cfg.sensitivity_deg_per_count = s.parse().ok();
    }
    if let Ok(v) = std::env::var("INVERT_Y") {
        cfg.invert_y = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MIN_PITCH_DEG") {
        cfg.min_pitch_deg = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MAX_PITCH_DEG") {
        cfg.max_pitch_deg = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MAX_LOOK_STEP") {
        cfg.max_step_deg = v.parse().ok();
    }
    if let Ok(v) = std::env::var("SMOOTHING_RATE") {
        cfg.smoothing_rate = v.parse().ok();
    }
    Ok(cfg)
}
