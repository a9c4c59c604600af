//! data_runtime: config schemas and loaders for the navigation session.
//!
//! Extracted from the app shell so core and platform crates can depend on a
//! stable config API. Files live under `data/config/`; every field can be
//! overridden from the environment for quick tuning.

pub mod configs {
    pub mod cave;
    pub mod nav_camera;
}
