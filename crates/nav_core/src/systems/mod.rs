//! Navigation systems: pure, testable logic sequenced by the session.

pub mod bounds;
pub mod interaction;
pub mod look;
pub mod movement;
