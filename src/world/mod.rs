//! World module - the test arena the player moves around in.

mod arena;
mod plugin;

pub use arena::ArenaGeometry;
pub use plugin::WorldPlugin;
