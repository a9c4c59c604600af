//! nav_core: first-person cave navigation.
//!
//! Input sampling, orientation control, movement integration, boundary
//! clamping and proximity interaction, behind a single [`session::NavSession`]
//! that the host drives once per display frame. Pure and synchronous; the
//! renderer, audio, and storage collaborators only see read-only snapshots
//! and emitted events.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools
)]

pub mod input;
pub mod session;
pub mod systems;
