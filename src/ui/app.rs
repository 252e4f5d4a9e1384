use super::keymap::{self, Input};
use crate::command::{Command, CommandQueue, MENUS};
use crate::window::{Outcome, PromptReply, PromptRequest, Workspace};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::path::PathBuf;

/// What the keyboard currently drives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Editing,
    /// One-line input at the bottom of the screen
    Prompt {
        request: PromptRequest,
        input: String,
    },
    /// A dropdown of the menu bar is open
    Menu { menu: usize, item: usize },
    /// Modal message box; any key dismisses it
    Message { title: String, body: String },
}

/// Application state
pub struct App {
    pub workspace: Workspace,
    pub queue: CommandQueue,
    pub mode: Mode,
    pub should_quit: bool,
    /// First visible row and render column of the editor area
    pub(crate) row_offset: usize,
    pub(crate) col_offset: usize,
}

impl App {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            queue: CommandQueue::new(),
            mode: Mode::Editing,
            should_quit: false,
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match self.mode {
            Mode::Editing => self.edit_key(key),
            Mode::Prompt { .. } => self.prompt_key(key),
            Mode::Menu { .. } => self.menu_key(key),
            Mode::Message { .. } => {
                self.mode = Mode::Editing;
                self.pump();
            }
        }
    }

    /// Queue a command and run the queue
    pub fn run_command(&mut self, command: Command) {
        self.queue.push(command);
        self.pump();
    }

    /// Status tip of the highlighted menu entry
    pub fn menu_tip(&self) -> Option<&'static str> {
        match self.mode {
            Mode::Menu { menu, item } => MENUS
                .get(menu)
                .and_then(|m| m.items.get(item))
                .map(|item| item.tip),
            _ => None,
        }
    }

    fn edit_key(&mut self, key: KeyEvent) {
        match keymap::translate(key) {
            Input::Command(command) => self.run_command(command),
            Input::Edit(action) => {
                let window = self.workspace.active_mut();
                window.clear_status();
                window.edit(action);
            }
            Input::Move { motion, extend } => {
                self.workspace.active_mut().move_cursor(motion, extend);
            }
            Input::OpenMenu(menu) => self.mode = Mode::Menu { menu, item: 0 },
            Input::Ignored => {}
        }
    }

    fn prompt_key(&mut self, key: KeyEvent) {
        let Mode::Prompt { request, input } = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.answer(None),
            KeyCode::Enter => {
                let input = std::mem::take(input);
                self.answer(Some(input));
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.push(c);
            }
            _ => {
                tracing::trace!(?request, code = ?key.code, "key ignored in prompt");
            }
        }
    }

    /// Close the prompt and hand `answer` to the active window
    fn answer(&mut self, answer: Option<String>) {
        let Mode::Prompt { request, .. } = std::mem::replace(&mut self.mode, Mode::Editing) else {
            return;
        };
        let reply = match request {
            PromptRequest::FindText { .. } => PromptReply::Text(answer),
            PromptRequest::OpenPath | PromptRequest::SavePath | PromptRequest::SaveAsPath => {
                PromptReply::Path(answer.map(PathBuf::from))
            }
        };
        let outcome = self.workspace.resolve(request, reply);
        self.show(outcome);
        self.pump();
    }

    fn menu_key(&mut self, key: KeyEvent) {
        let Mode::Menu { menu, item } = self.mode else {
            return;
        };
        let count = MENUS[menu].items.len();
        match key.code {
            KeyCode::Left => {
                self.mode = Mode::Menu {
                    menu: (menu + MENUS.len() - 1) % MENUS.len(),
                    item: 0,
                }
            }
            KeyCode::Right => {
                self.mode = Mode::Menu {
                    menu: (menu + 1) % MENUS.len(),
                    item: 0,
                }
            }
            KeyCode::Up => {
                self.mode = Mode::Menu {
                    menu,
                    item: (item + count - 1) % count,
                }
            }
            KeyCode::Down => {
                self.mode = Mode::Menu {
                    menu,
                    item: (item + 1) % count,
                }
            }
            KeyCode::Enter => {
                self.mode = Mode::Editing;
                self.run_command(MENUS[menu].items[item].command);
            }
            KeyCode::Esc | KeyCode::F(10) => self.mode = Mode::Editing,
            _ => {}
        }
    }

    /// Run queued commands until one needs the user
    fn pump(&mut self) {
        if let Some(outcome) = self.workspace.dispatch(&mut self.queue) {
            self.show(outcome);
        }
    }

    fn show(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Prompt(request) => {
                let input = request.initial().to_string();
                self.mode = Mode::Prompt { request, input };
            }
            Outcome::Message { title, body } => self.mode = Mode::Message { title, body },
            Outcome::Quit => {
                tracing::info!("quitting");
                self.should_quit = true;
            }
            // Already on the window's status line
            Outcome::Status(_) | Outcome::Failed(_) => {}
            Outcome::Handled | Outcome::NewWindow | Outcome::CloseWindow | Outcome::NextWindow => {}
        }
    }
}
