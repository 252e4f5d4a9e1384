pub mod editor;
pub mod selection;
pub mod text_buffer;

pub use editor::{Editor, Motion};
pub use selection::Selection;
pub use text_buffer::TextBuffer;
