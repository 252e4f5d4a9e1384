//! Incremental forward search over a [`TextBuffer`](crate::editor::TextBuffer)

pub mod matcher;
pub mod navigator;

pub use matcher::{find_forward, FindOptions};
pub use navigator::{FindNavigator, FindResult};
