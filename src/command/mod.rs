pub mod command;
pub mod menu;
pub mod queue;

pub use command::Command;
pub use menu::{command_for, Key, Menu, MenuItem, Shortcut, MENUS, TOOLBAR};
pub use queue::CommandQueue;
