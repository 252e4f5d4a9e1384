use super::theme;
use super::viewport_renderer::ViewportRenderer;
use crate::command::{command_for, Command, CommandQueue, Key, Shortcut, MENUS, TOOLBAR};
use crate::editor::Motion;
use crate::session::{FilePrompt, NativePrompt};
use crate::window::{Chrome, EditAction, Outcome, PromptReply, PromptRequest, Workspace};
use std::time::Instant;

/// Open "Find text" dialog
#[derive(Clone, Debug)]
struct FindDialog {
    request: PromptRequest,
    input: String,
}

pub struct GuiApp {
    workspace: Workspace,
    queue: CommandQueue,
    prompt: Box<dyn FilePrompt>,
    find: Option<FindDialog>,
    message: Option<(String, String)>,
    renderer: ViewportRenderer,
    cursor_blink: bool,
    last_blink: Instant,
    auto_scroll: bool,
    /// Title last sent to the viewport
    shown_title: String,
    /// Set once quitting has been confirmed
    quitting: bool,
}

impl GuiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, workspace: Workspace) -> Self {
        Self::with_prompt(workspace, Box::new(NativePrompt::new()))
    }

    /// App with its own file dialogs
    pub fn with_prompt(workspace: Workspace, prompt: Box<dyn FilePrompt>) -> Self {
        let tab_width = workspace.config().tab_width;
        Self {
            workspace,
            queue: CommandQueue::new(),
            prompt,
            find: None,
            message: None,
            renderer: ViewportRenderer::new(tab_width),
            cursor_blink: true,
            last_blink: Instant::now(),
            auto_scroll: true,
            shown_title: String::new(),
            quitting: false,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Queue a command and run the queue
    pub fn run_command(&mut self, command: Command) {
        self.queue.push(command);
        self.pump();
        self.auto_scroll = true;
    }

    /// Run queued commands. File prompts are answered on the spot with the
    /// native dialogs; the find dialog and message boxes stop the queue
    /// until they are closed.
    fn pump(&mut self) {
        while let Some(outcome) = self.workspace.dispatch(&mut self.queue) {
            match outcome {
                Outcome::Prompt(request @ PromptRequest::OpenPath) => {
                    let choice = self.prompt.choose_open();
                    self.workspace.resolve(request, PromptReply::Path(choice));
                }
                Outcome::Prompt(
                    request @ (PromptRequest::SavePath | PromptRequest::SaveAsPath),
                ) => {
                    let choice = self.prompt.choose_save();
                    self.workspace.resolve(request, PromptReply::Path(choice));
                }
                Outcome::Prompt(request @ PromptRequest::FindText { .. }) => {
                    let input = request.initial().to_string();
                    self.find = Some(FindDialog { request, input });
                    return;
                }
                Outcome::Message { title, body } => {
                    self.message = Some((title, body));
                    return;
                }
                Outcome::Quit => {
                    tracing::info!("quitting");
                    self.quitting = true;
                    return;
                }
                outcome => tracing::trace!(?outcome, "outcome needs no frontend"),
            }
        }
    }

    fn answer_find(&mut self, answer: Option<String>) {
        if let Some(dialog) = self.find.take() {
            self.workspace.resolve(dialog.request, PromptReply::Text(answer));
            self.auto_scroll = true;
            self.pump();
        }
    }

    fn dismiss_message(&mut self) {
        self.message = None;
        self.pump();
    }

    fn handle_text_input(&mut self, text: &str) {
        let window = self.workspace.active_mut();
        window.clear_status();
        window.edit(EditAction::Insert(text.to_string()));
        self.auto_scroll = true;
    }

    fn handle_key(&mut self, key: egui::Key, modifiers: egui::Modifiers) {
        if let Some(command) = shortcut(key, modifiers).and_then(command_for) {
            self.run_command(command);
            return;
        }

        let edit = match key {
            egui::Key::Enter => Some(EditAction::Newline),
            egui::Key::Tab => Some(EditAction::Insert("\t".to_string())),
            egui::Key::Backspace => Some(EditAction::Backspace),
            egui::Key::Delete => Some(EditAction::Delete),
            _ => None,
        };
        if let Some(action) = edit {
            let window = self.workspace.active_mut();
            window.clear_status();
            window.edit(action);
            self.auto_scroll = true;
            return;
        }

        let motion = match key {
            egui::Key::ArrowLeft => Motion::Left,
            egui::Key::ArrowRight => Motion::Right,
            egui::Key::ArrowUp => Motion::Up,
            egui::Key::ArrowDown => Motion::Down,
            egui::Key::Home if modifiers.command => Motion::DocumentStart,
            egui::Key::End if modifiers.command => Motion::DocumentEnd,
            egui::Key::Home => Motion::LineStart,
            egui::Key::End => Motion::LineEnd,
            egui::Key::PageUp => Motion::DocumentStart,
            egui::Key::PageDown => Motion::DocumentEnd,
            _ => return,
        };
        self.workspace
            .active_mut()
            .move_cursor(motion, modifiers.shift);
        self.auto_scroll = true;
    }

    fn window_title(&self) -> String {
        let count = self.workspace.windows().len();
        let title = self.workspace.active().title();
        if count > 1 {
            format!("{} [{}/{}]", title, self.workspace.active_index() + 1, count)
        } else {
            title.to_string()
        }
    }

    fn menu_bar(&self, ctx: &egui::Context, chrome: Chrome) -> Option<Command> {
        let mut clicked = None;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                for menu in MENUS {
                    ui.menu_button(menu.title, |ui| {
                        for item in menu.items {
                            let mut button = egui::Button::new(item.display_label(&chrome));
                            if let Some(shortcut) = item.shortcut {
                                button = button.shortcut_text(shortcut.to_string());
                            }
                            if ui.add(button).on_hover_text(item.tip).clicked() {
                                clicked = Some(item.command);
                                ui.close_menu();
                            }
                        }
                    });
                }
            });
        });
        clicked
    }

    fn tool_bar(&mut self, ctx: &egui::Context) -> Option<Command> {
        let mut clicked = None;
        let titles: Vec<String> = self
            .workspace
            .windows()
            .iter()
            .map(|w| w.title().to_string())
            .collect();
        let active = self.workspace.active_index();
        let mut activate = None;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for item in TOOLBAR {
                    if ui.button(item.label).on_hover_text(item.tip).clicked() {
                        clicked = Some(item.command);
                    }
                }
                if titles.len() > 1 {
                    ui.separator();
                    for (i, title) in titles.iter().enumerate() {
                        if ui.selectable_label(i == active, title).clicked() {
                            activate = Some(i);
                        }
                    }
                }
            });
        });

        if let Some(index) = activate {
            self.workspace.activate(index);
            self.auto_scroll = true;
        }
        clicked
    }

    fn status_bar(&self, ctx: &egui::Context) {
        let window = self.workspace.active();
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match window.status() {
                    Some(status) => {
                        ui.label(status);
                    }
                    None => {
                        let cursor = window.editor().cursor();
                        ui.label(format!(
                            "Line {}, Col {} | {} lines",
                            cursor.row + 1,
                            cursor.column + 1,
                            window.editor().line_count()
                        ));
                    }
                }
                if window.session().is_modified() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(theme::WARNING_COLOR, "modified");
                    });
                }
            });
        });
    }

    fn find_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.find.as_mut() else {
            return;
        };
        let mut answer = None;
        egui::Window::new("Find text")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(dialog.request.label());
                let response = ui.text_edit_singleline(&mut dialog.input);
                response.request_focus();
                let entered = ui.input(|i| i.key_pressed(egui::Key::Enter));
                let escaped = ui.input(|i| i.key_pressed(egui::Key::Escape));
                ui.horizontal(|ui| {
                    if ui.button("Find").clicked() || entered {
                        answer = Some(Some(dialog.input.clone()));
                    }
                    if ui.button("Cancel").clicked() || escaped {
                        answer = Some(None);
                    }
                });
            });
        if let Some(answer) = answer {
            self.answer_find(answer);
        }
    }

    fn message_box(&mut self, ctx: &egui::Context) {
        let Some((title, body)) = &self.message else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(body.as_str());
                let entered = ui.input(|i| {
                    i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)
                });
                if ui.button("OK").clicked() || entered {
                    dismissed = true;
                }
            });
        if dismissed {
            self.dismiss_message();
        }
    }
}

/// Shortcut for a key press, if it can be one
fn shortcut(key: egui::Key, modifiers: egui::Modifiers) -> Option<Shortcut> {
    let key = match function_key(key) {
        Some(n) => Key::F(n),
        None if modifiers.command => {
            let name = key.name();
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Key::Char(c.to_ascii_lowercase()),
                _ => return None,
            }
        }
        None => return None,
    };
    Some(Shortcut {
        ctrl: modifiers.command,
        shift: modifiers.shift,
        key,
    })
}

fn function_key(key: egui::Key) -> Option<u8> {
    use egui::Key::*;
    Some(match key {
        F1 => 1,
        F2 => 2,
        F3 => 3,
        F4 => 4,
        F5 => 5,
        F6 => 6,
        F7 => 7,
        F8 => 8,
        F9 => 9,
        F10 => 10,
        F11 => 11,
        F12 => 12,
        _ => return None,
    })
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Cursor blink
        if self.last_blink.elapsed().as_millis() > 500 {
            self.cursor_blink = !self.cursor_blink;
            self.last_blink = Instant::now();
        }
        ctx.request_repaint_after(std::time::Duration::from_millis(500));

        // Closing the native window goes through the unsaved-changes check
        if ctx.input(|i| i.viewport().close_requested()) && !self.quitting {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.run_command(Command::Quit);
        }

        // Input handling, unless a dialog has the keyboard
        if self.find.is_none() && self.message.is_none() {
            let events = ctx.input(|i| i.events.clone());
            for event in events {
                match event {
                    egui::Event::Text(text) => self.handle_text_input(&text),
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => self.handle_key(key, modifiers),
                    _ => {}
                }
            }
        }

        let chrome = *self.workspace.active().chrome();
        let mut clicked = None;
        if chrome.menu_bar {
            clicked = self.menu_bar(ctx, chrome);
        }
        if chrome.tool_bar {
            clicked = self.tool_bar(ctx).or(clicked);
        }
        if chrome.status_bar {
            self.status_bar(ctx);
        }

        // Editor
        let auto_scroll = std::mem::take(&mut self.auto_scroll);
        let click = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.renderer.render(
                    ui,
                    self.workspace.active().editor(),
                    self.cursor_blink,
                    auto_scroll,
                )
            })
            .inner;
        if let Some(point) = click {
            self.workspace.active_mut().set_cursor(point);
        }

        self.find_dialog(ctx);
        self.message_box(ctx);

        if let Some(command) = clicked {
            self.run_command(command);
        }

        let title = self.window_title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
        if self.quitting {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
