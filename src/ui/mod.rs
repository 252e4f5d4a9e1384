pub mod app;
pub mod keymap;
pub mod renderer;
pub mod terminal;

pub use app::{App, Mode};
pub use renderer::render;
pub use terminal::{init, restore, Tui};
