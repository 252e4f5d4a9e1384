pub mod args;
pub mod buffer;
pub mod command;
pub mod config;
pub mod editor;
pub mod gui;
pub mod io;
pub mod logging;
pub mod search;
pub mod session;
pub mod tools;
pub mod ui;
pub mod window;

// Re-export commonly used types
pub use buffer::{Buffer, Offset, Point};
pub use command::{Command, CommandQueue};
pub use config::Config;
pub use editor::{Editor, Motion, Selection, TextBuffer};
pub use gui::GuiApp;
pub use io::{read_file, write_file};
pub use search::{FindNavigator, FindOptions, FindResult};
pub use session::{
    AnsweredPrompt, DocumentSession, FilePrompt, OpenOutcome, SaveOutcome, SessionError,
};
pub use ui::{render, App};
pub use window::{EditAction, EditorWindow, Outcome, PromptReply, PromptRequest, Workspace};
