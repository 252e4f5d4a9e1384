use super::chrome::Chrome;
use super::outcome::{EditAction, Outcome, PromptReply, PromptRequest};
use crate::command::Command;
use crate::config::Config;
use crate::editor::{Editor, Motion, TextBuffer};
use crate::search::{FindNavigator, FindResult};
use crate::session::{AnsweredPrompt, DocumentSession, OpenOutcome, SaveOutcome, SessionError};
use crate::tools;

const UNSAVED_WARNING: &str = "File has unsaved changes. Press Ctrl+Q one more time to quit.";
const UNSAVED_CLOSE_WARNING: &str = "File has unsaved changes. Press Ctrl+W one more time to close.";

/// One editor window: a buffer, the file it belongs to, and its search
/// state. Windows share nothing with each other.
#[derive(Debug, Clone)]
pub struct EditorWindow {
    editor: Editor,
    session: DocumentSession,
    navigator: FindNavigator,
    chrome: Chrome,
    status: Option<String>,
    /// Command that was refused once because of unsaved changes
    armed: Option<Command>,
    date_format: String,
}

impl EditorWindow {
    pub fn new(config: &Config) -> Self {
        Self {
            editor: Editor::new(),
            session: DocumentSession::new(config.app_name.clone()),
            navigator: FindNavigator::new(config.find),
            chrome: Chrome::from(config.view),
            status: None,
            armed: None,
            date_format: config.date_format.clone(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    pub fn navigator(&self) -> &FindNavigator {
        &self.navigator
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn title(&self) -> &str {
        self.session.title()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Apply a typing-level edit
    pub fn edit(&mut self, action: EditAction) {
        self.armed = None;
        self.track_changes(|editor| match action {
            EditAction::Insert(text) => editor.insert(&text),
            EditAction::Newline => editor.insert("\n"),
            EditAction::Backspace => editor.backspace(),
            EditAction::Delete => editor.delete(),
        });
    }

    pub fn move_cursor(&mut self, motion: Motion, extend: bool) {
        self.editor.move_cursor(motion, extend);
    }

    /// Put the cursor at a buffer position (mouse clicks)
    pub fn set_cursor(&mut self, point: crate::buffer::Point) {
        self.editor.set_cursor(point);
    }

    /// Whether `command` was refused once already and will go through now
    pub fn is_armed(&self, command: Command) -> bool {
        self.armed == Some(command)
    }

    /// Let the next `command` through without the unsaved-changes warning
    pub(crate) fn arm(&mut self, command: Command) {
        self.armed = Some(command);
    }

    /// Refuse a quit on behalf of the workspace, so the next one goes through
    pub(crate) fn warn_unsaved(&mut self) {
        self.arm(Command::Quit);
        self.set_status(UNSAVED_WARNING);
    }

    /// Run a command. Commands that need input return
    /// [`Outcome::Prompt`]; the answer goes to [`EditorWindow::resolve`].
    pub fn execute(&mut self, command: Command) -> Outcome {
        let armed = self.armed.take();
        match command {
            Command::NewWindow => Outcome::NewWindow,
            Command::NextWindow => Outcome::NextWindow,
            Command::Open => Outcome::Prompt(PromptRequest::OpenPath),
            Command::Save => {
                if self.session.path().is_some() {
                    self.save(AnsweredPrompt::cancelled(), false)
                } else {
                    Outcome::Prompt(PromptRequest::SavePath)
                }
            }
            Command::SaveAs => Outcome::Prompt(PromptRequest::SaveAsPath),
            Command::CloseWindow => {
                if self.session.is_modified() && armed != Some(command) {
                    self.armed = Some(command);
                    self.report(UNSAVED_CLOSE_WARNING)
                } else {
                    Outcome::CloseWindow
                }
            }
            Command::Quit => {
                if self.session.is_modified() && armed != Some(command) {
                    self.armed = Some(command);
                    self.report(UNSAVED_WARNING)
                } else {
                    Outcome::Quit
                }
            }
            Command::DeleteSelection => {
                self.track_changes(|editor| {
                    editor.delete_selection();
                });
                Outcome::Handled
            }
            Command::SelectAll => {
                self.editor.select_all();
                Outcome::Handled
            }
            Command::Find => {
                let initial = match self.editor.selected_text() {
                    selected if !selected.is_empty() => selected,
                    _ => self.navigator.last_query().unwrap_or_default().to_string(),
                };
                Outcome::Prompt(PromptRequest::FindText { initial })
            }
            Command::FindNext => {
                if !self.editor.has_selection() {
                    return Outcome::Handled;
                }
                let query = self.editor.selected_text();
                let result = self
                    .navigator
                    .find_next_occurrence_of_selection(&mut self.editor);
                self.report_find(&query, result)
            }
            Command::FindAgain => {
                let Some(query) = self.navigator.last_query().map(str::to_string) else {
                    return self.report("Nothing to find yet.");
                };
                let result = self.navigator.find_again(&mut self.editor);
                self.report_find(&query, result)
            }
            Command::InsertDate => {
                let stamp = tools::timestamp(&self.date_format);
                self.track_changes(|editor| editor.insert(&stamp));
                Outcome::Handled
            }
            Command::CharCount => Outcome::Message {
                title: "Character count".to_string(),
                body: format!(
                    "Total characters in document: {}",
                    tools::char_count(self.editor.buffer().as_str())
                ),
            },
            Command::WordCount => Outcome::Message {
                title: "Word count".to_string(),
                body: format!(
                    "Total words in document: {}",
                    tools::word_count(self.editor.buffer().as_str())
                ),
            },
            Command::ToggleMenuBar | Command::ToggleToolBar | Command::ToggleStatusBar => {
                self.chrome.toggle(command);
                Outcome::Handled
            }
            Command::About => Outcome::Message {
                title: self.session.app_name().to_string(),
                body: format!(
                    "{} {}\nA minimal plain-text editor.",
                    self.session.app_name(),
                    env!("CARGO_PKG_VERSION")
                ),
            },
        }
    }

    /// Finish a command that asked for input
    pub fn resolve(&mut self, request: PromptRequest, reply: PromptReply) -> Outcome {
        match (request, reply) {
            (PromptRequest::OpenPath, PromptReply::Path(choice)) => {
                match self.session.open_from(choice, &mut self.editor) {
                    Ok(OpenOutcome::Opened { path, bytes }) => {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        self.report(format!("Opened {} ({} bytes)", name, bytes))
                    }
                    Ok(OpenOutcome::Cancelled) => self.report("Open aborted."),
                    Err(err) => self.fail(err),
                }
            }
            (PromptRequest::SavePath, PromptReply::Path(choice)) => {
                self.save(AnsweredPrompt::new(choice), false)
            }
            (PromptRequest::SaveAsPath, PromptReply::Path(choice)) => {
                self.save(AnsweredPrompt::new(choice), true)
            }
            (PromptRequest::FindText { .. }, PromptReply::Text(Some(query))) => {
                let result = self.navigator.find_next(&query, &mut self.editor);
                self.report_find(&query, result)
            }
            (PromptRequest::FindText { .. }, PromptReply::Text(None)) => Outcome::Handled,
            (request, reply) => {
                tracing::warn!(?request, ?reply, "prompt reply does not match request");
                Outcome::Handled
            }
        }
    }

    fn save(&mut self, mut prompt: AnsweredPrompt, save_as: bool) -> Outcome {
        let result = if save_as {
            self.session.save_as(&mut prompt, &self.editor)
        } else {
            self.session.save(&mut prompt, &self.editor)
        };
        match result {
            Ok(SaveOutcome::Saved { bytes, .. }) => {
                self.report(format!("{} bytes written to disk", bytes))
            }
            Ok(SaveOutcome::Cancelled) => self.report("Save aborted."),
            Err(err) => self.fail(err),
        }
    }

    fn report_find(&mut self, query: &str, result: FindResult) -> Outcome {
        match result {
            FindResult::Match(_) => {
                self.clear_status();
                Outcome::Handled
            }
            FindResult::NoMatch => self.report(format!("Not found: {}", query)),
        }
    }

    fn report(&mut self, message: impl Into<String>) -> Outcome {
        let message = message.into();
        self.status = Some(message.clone());
        Outcome::Status(message)
    }

    fn fail(&mut self, err: SessionError) -> Outcome {
        tracing::error!(path = %err.path().display(), error = %err, "document I/O failed");
        let message = err.to_string();
        self.status = Some(message.clone());
        Outcome::Failed(message)
    }

    /// Run an editor mutation and mark the document modified if the
    /// content actually changed
    fn track_changes(&mut self, edit: impl FnOnce(&mut Editor)) {
        let before = self.editor.version();
        edit(&mut self.editor);
        if self.editor.version() != before {
            self.session.mark_modified();
        }
    }
}
