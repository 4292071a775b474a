//! Core game module - states and fundamental flow systems.

mod plugin;
mod states;

pub use plugin::CorePlugin;
pub use states::*;
