//! Feed wire types and the validated event record.

mod boundary;
mod event;
mod quake;

pub use boundary::*;
pub use event::*;
pub use quake::*;
