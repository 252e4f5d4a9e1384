use std::path::PathBuf;

/// "Choose a file" dialogs
///
/// `None` means the user cancelled. An empty path is treated the same way;
/// no other validation happens.
pub trait FilePrompt {
    fn choose_open(&mut self) -> Option<PathBuf>;
    fn choose_save(&mut self) -> Option<PathBuf>;
}

/// Filter out the empty path some dialogs hand back on cancel
pub(crate) fn chosen(choice: Option<PathBuf>) -> Option<PathBuf> {
    choice.filter(|path| !path.as_os_str().is_empty())
}

/// A prompt whose answer was already collected elsewhere (for example the
/// terminal prompt line). Every question gets the same answer, once.
#[derive(Debug, Clone, Default)]
pub struct AnsweredPrompt {
    answer: Option<PathBuf>,
}

impl AnsweredPrompt {
    pub fn new(answer: Option<PathBuf>) -> Self {
        Self { answer }
    }

    /// A prompt that always reports cancellation
    pub fn cancelled() -> Self {
        Self { answer: None }
    }
}

impl FilePrompt for AnsweredPrompt {
    fn choose_open(&mut self) -> Option<PathBuf> {
        self.answer.take()
    }

    fn choose_save(&mut self) -> Option<PathBuf> {
        self.answer.take()
    }
}

/// Native file dialogs
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePrompt;

impl NativePrompt {
    pub fn new() -> Self {
        Self
    }

    fn dialog(&self, title: &str) -> rfd::FileDialog {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Text Files", &["txt", "md", "log"])
            .add_filter("All Files", &["*"])
    }
}

impl FilePrompt for NativePrompt {
    fn choose_open(&mut self) -> Option<PathBuf> {
        self.dialog("Open file").pick_file()
    }

    fn choose_save(&mut self) -> Option<PathBuf> {
        self.dialog("Save file").save_file()
    }
}
