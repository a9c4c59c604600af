// Root app shell and re-exports for workspace crates used by bins.
pub use data_runtime;
pub use nav_core as nav;
pub use platform_winit;
pub use world_core as world;
