use std::path::PathBuf;

/// Input the frontend has to collect before a command can finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    /// File to open
    OpenPath,
    /// Destination for a first save
    SavePath,
    /// Destination for "save as"
    SaveAsPath,
    /// Text to find, pre-filled with `initial`
    FindText { initial: String },
}

impl PromptRequest {
    pub fn label(&self) -> &'static str {
        match self {
            PromptRequest::OpenPath => "Open file: ",
            PromptRequest::SavePath | PromptRequest::SaveAsPath => "Save as: ",
            PromptRequest::FindText { .. } => "Enter text to find: ",
        }
    }

    pub fn initial(&self) -> &str {
        match self {
            PromptRequest::FindText { initial } => initial,
            _ => "",
        }
    }
}

/// The frontend's answer; `None` means cancelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Path(Option<PathBuf>),
    Text(Option<String>),
}

/// What the frontend should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    Status(String),
    Message { title: String, body: String },
    Prompt(PromptRequest),
    NewWindow,
    CloseWindow,
    NextWindow,
    Quit,
    /// An operation failed; the reason is also on the status line
    Failed(String),
}

/// Typing-level edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Insert(String),
    Newline,
    Backspace,
    Delete,
}
