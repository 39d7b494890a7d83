pub mod arena;
pub mod bot;
pub mod game;
pub mod plugin;
pub mod web;

pub use arena::*;
pub use bot::*;
pub use game::*;
pub use plugin::*;
