use super::outcome::{Outcome, PromptReply, PromptRequest};
use super::window::EditorWindow;
use crate::command::{Command, CommandQueue};
use crate::config::Config;
use std::path::PathBuf;

/// All open windows of the application
///
/// Exactly one window is active; commands always go to it.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: Config,
    windows: Vec<EditorWindow>,
    active: usize,
}

impl Workspace {
    /// Workspace with a single empty window
    pub fn new(config: Config) -> Self {
        let windows = vec![EditorWindow::new(&config)];
        Self {
            config,
            windows,
            active: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn windows(&self) -> &[EditorWindow] {
        &self.windows
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &EditorWindow {
        &self.windows[self.active]
    }

    pub fn active_mut(&mut self) -> &mut EditorWindow {
        &mut self.windows[self.active]
    }

    /// Open a fresh window and make it active. Returns its index.
    pub fn open_window(&mut self) -> usize {
        self.windows.push(EditorWindow::new(&self.config));
        self.active = self.windows.len() - 1;
        tracing::debug!(windows = self.windows.len(), "window opened");
        self.active
    }

    /// Close the active window. Returns false when it was the last one.
    pub fn close_active(&mut self) -> bool {
        if self.windows.len() == 1 {
            return false;
        }
        self.windows.remove(self.active);
        if self.active >= self.windows.len() {
            self.active = self.windows.len() - 1;
        }
        tracing::debug!(windows = self.windows.len(), "window closed");
        true
    }

    /// Make window `index` active. Returns false if there is no such window.
    pub fn activate(&mut self, index: usize) -> bool {
        if index < self.windows.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn next_window(&mut self) {
        self.active = (self.active + 1) % self.windows.len();
    }

    /// Load `path` into the active window, as if picked in the open prompt
    pub fn open_path(&mut self, path: PathBuf) -> Outcome {
        self.resolve(PromptRequest::OpenPath, PromptReply::Path(Some(path)))
    }

    /// Run queued commands until one needs the frontend (a prompt, a
    /// message or quitting) and return that outcome. Commands after it stay
    /// queued.
    pub fn dispatch(&mut self, queue: &mut CommandQueue) -> Option<Outcome> {
        while let Some(command) = queue.pop() {
            let outcome = self.active_mut().execute(command);
            if let Some(outcome) = self.apply(command, outcome) {
                return Some(outcome);
            }
        }
        None
    }

    /// Execute a single command
    pub fn execute(&mut self, command: Command) -> Option<Outcome> {
        let outcome = self.active_mut().execute(command);
        self.apply(command, outcome)
    }

    /// Hand a prompt answer to the active window
    pub fn resolve(&mut self, request: PromptRequest, reply: PromptReply) -> Outcome {
        self.active_mut().resolve(request, reply)
    }

    /// Handle window-level outcomes; pass the rest through
    fn apply(&mut self, command: Command, outcome: Outcome) -> Option<Outcome> {
        match outcome {
            Outcome::NewWindow => {
                self.open_window();
                None
            }
            Outcome::NextWindow => {
                self.next_window();
                None
            }
            Outcome::CloseWindow => {
                if self.close_active() {
                    None
                } else {
                    Some(Outcome::Quit)
                }
            }
            Outcome::Quit => self.confirm_quit(),
            outcome @ (Outcome::Prompt(_) | Outcome::Message { .. }) => Some(outcome),
            Outcome::Handled | Outcome::Status(_) | Outcome::Failed(_) => {
                tracing::trace!(?command, "handled");
                None
            }
        }
    }

    /// Before quitting, stop once at every other window with unsaved
    /// changes
    fn confirm_quit(&mut self) -> Option<Outcome> {
        let active = self.active;
        self.windows[active].arm(Command::Quit);
        let pending = self.windows.iter().enumerate().position(|(i, w)| {
            i != active && w.session().is_modified() && !w.is_armed(Command::Quit)
        });
        match pending {
            Some(index) => {
                self.active = index;
                self.windows[index].warn_unsaved();
                None
            }
            None => Some(Outcome::Quit),
        }
    }
}
