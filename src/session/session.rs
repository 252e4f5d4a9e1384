use super::error::SessionError;
use super::prompt::{chosen, FilePrompt};
use crate::editor::TextBuffer;
use crate::io::{read_file, write_file};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened { path: PathBuf, bytes: usize },
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { path: PathBuf, bytes: usize },
    Cancelled,
}

/// Which file a window is editing, and the title that goes with it
///
/// `path` and `title` only change after the matching read or write has
/// completed, so a failed operation leaves the session as it was.
#[derive(Debug, Clone)]
pub struct DocumentSession {
    app_name: String,
    path: Option<PathBuf>,
    title: String,
    modified: bool,
}

impl DocumentSession {
    /// Untitled, unmodified document
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        Self {
            title: app_name.clone(),
            app_name,
            path: None,
            modified: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Record an edit to the buffer
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Window title for `app_name` given the current path
    pub fn title_for(&self, app_name: &str) -> String {
        match self.file_name() {
            Some(name) => format!("{} - {}", app_name, name),
            None => app_name.to_string(),
        }
    }

    /// Base name of the current path
    pub fn file_name(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Some(name)
    }

    /// Ask for a file to open and load it
    pub fn open<B>(
        &mut self,
        prompt: &mut dyn FilePrompt,
        buffer: &mut B,
    ) -> Result<OpenOutcome, SessionError>
    where
        B: TextBuffer + ?Sized,
    {
        let choice = prompt.choose_open();
        self.open_from(choice, buffer)
    }

    /// Load the file picked by an open prompt, replacing the buffer content
    pub fn open_from<B>(
        &mut self,
        choice: Option<PathBuf>,
        buffer: &mut B,
    ) -> Result<OpenOutcome, SessionError>
    where
        B: TextBuffer + ?Sized,
    {
        let Some(path) = chosen(choice) else {
            tracing::debug!("open cancelled");
            return Ok(OpenOutcome::Cancelled);
        };

        let contents = read_file(&path).map_err(|source| SessionError::Read {
            path: path.clone(),
            source,
        })?;

        buffer.set_text(&contents);
        self.set_path(path.clone());
        self.modified = false;
        tracing::info!(path = %path.display(), bytes = contents.len(), "opened");

        Ok(OpenOutcome::Opened {
            path,
            bytes: contents.len(),
        })
    }

    /// Write the buffer to the current file, prompting for one first if
    /// the document has never been saved
    pub fn save<B>(
        &mut self,
        prompt: &mut dyn FilePrompt,
        buffer: &B,
    ) -> Result<SaveOutcome, SessionError>
    where
        B: TextBuffer + ?Sized,
    {
        let destination = match &self.path {
            Some(path) => path.clone(),
            None => match chosen(prompt.choose_save()) {
                Some(path) => path,
                None => {
                    tracing::debug!("save cancelled");
                    return Ok(SaveOutcome::Cancelled);
                }
            },
        };
        self.write_to(destination, buffer)
    }

    /// Always ask for a destination, then write there
    pub fn save_as<B>(
        &mut self,
        prompt: &mut dyn FilePrompt,
        buffer: &B,
    ) -> Result<SaveOutcome, SessionError>
    where
        B: TextBuffer + ?Sized,
    {
        let Some(destination) = chosen(prompt.choose_save()) else {
            tracing::debug!("save as cancelled");
            return Ok(SaveOutcome::Cancelled);
        };
        self.write_to(destination, buffer)
    }

    fn write_to<B>(
        &mut self,
        destination: PathBuf,
        buffer: &B,
    ) -> Result<SaveOutcome, SessionError>
    where
        B: TextBuffer + ?Sized,
    {
        let bytes =
            write_file(&destination, &buffer.text()).map_err(|source| SessionError::Write {
                path: destination.clone(),
                source,
            })?;

        if self.path.as_ref() != Some(&destination) {
            self.set_path(destination.clone());
        }
        self.modified = false;
        tracing::info!(path = %destination.display(), bytes, "saved");

        Ok(SaveOutcome::Saved {
            path: destination,
            bytes,
        })
    }

    fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.title = self.title_for(&self.app_name);
    }
}
