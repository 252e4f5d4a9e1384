use super::Command;
use crate::window::Chrome;

/// Key part of a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Lowercase letter
    Char(char),
    F(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub ctrl: bool,
    pub shift: bool,
    pub key: Key,
}

impl Shortcut {
    pub const fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            shift: false,
            key: Key::Char(c),
        }
    }

    pub const fn ctrl_shift(c: char) -> Self {
        Self {
            ctrl: true,
            shift: true,
            key: Key::Char(c),
        }
    }

    pub const fn function(n: u8) -> Self {
        Self {
            ctrl: false,
            shift: false,
            key: Key::F(n),
        }
    }

    pub const fn shift_function(n: u8) -> Self {
        Self {
            ctrl: false,
            shift: true,
            key: Key::F(n),
        }
    }
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::F(n) => write!(f, "F{}", n),
        }
    }
}

/// A menu entry bound to a command
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
    /// Status tip
    pub tip: &'static str,
    pub command: Command,
}

impl MenuItem {
    const fn new(label: &'static str, tip: &'static str, command: Command) -> Self {
        Self {
            label,
            shortcut: None,
            tip,
            command,
        }
    }

    const fn key(self, shortcut: Shortcut) -> Self {
        Self {
            shortcut: Some(shortcut),
            ..self
        }
    }

    /// Label as shown right now; the View toggles read "Hide ..." or
    /// "Show ..." depending on what is visible.
    pub fn display_label(&self, chrome: &Chrome) -> String {
        let (visible, bar) = match self.command {
            Command::ToggleMenuBar => (chrome.menu_bar, "menu bar"),
            Command::ToggleToolBar => (chrome.tool_bar, "tool bar"),
            Command::ToggleStatusBar => (chrome.status_bar, "status bar"),
            _ => return self.label.to_string(),
        };
        format!("{} {}", if visible { "Hide" } else { "Show" }, bar)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

pub static MENUS: &[Menu] = &[
    Menu {
        title: "File",
        items: &[
            MenuItem::new("New window", "Create a new document.", Command::NewWindow)
                .key(Shortcut::ctrl('n')),
            MenuItem::new("Open file", "Open an existing document.", Command::Open)
                .key(Shortcut::ctrl('o')),
            MenuItem::new("Save file", "Save the current document.", Command::Save)
                .key(Shortcut::ctrl('s')),
            MenuItem::new(
                "Save as",
                "Save the current document under a new name.",
                Command::SaveAs,
            )
            .key(Shortcut::ctrl_shift('s')),
            MenuItem::new("Close window", "Close the current window.", Command::CloseWindow)
                .key(Shortcut::ctrl('w')),
            MenuItem::new("Quit", "Quit application.", Command::Quit).key(Shortcut::ctrl('q')),
        ],
    },
    Menu {
        title: "Edit",
        items: &[
            MenuItem::new("Delete", "Delete selected text.", Command::DeleteSelection),
            MenuItem::new("Select all", "Select all text.", Command::SelectAll)
                .key(Shortcut::ctrl('a')),
        ],
    },
    Menu {
        title: "Tools",
        items: &[
            MenuItem::new("Find text", "Find text within the document.", Command::Find)
                .key(Shortcut::ctrl('f')),
            MenuItem::new(
                "Find next",
                "Find the next occurrence of the selected text.",
                Command::FindNext,
            )
            .key(Shortcut::function(3)),
            MenuItem::new(
                "Find again",
                "Repeat the last search.",
                Command::FindAgain,
            )
            .key(Shortcut::shift_function(3)),
            MenuItem::new(
                "Insert date/time",
                "Add a date and time to the document.",
                Command::InsertDate,
            )
            .key(Shortcut::function(5)),
            MenuItem::new(
                "Character count",
                "View the number of characters in the document.",
                Command::CharCount,
            ),
            MenuItem::new(
                "Word count",
                "View the number of words in the document.",
                Command::WordCount,
            ),
        ],
    },
    Menu {
        title: "View",
        items: &[
            MenuItem::new("Hide menu bar", "Hide the menu bar.", Command::ToggleMenuBar),
            MenuItem::new("Hide tool bar", "Hide the tool bar.", Command::ToggleToolBar),
            MenuItem::new("Hide status bar", "Hide the status bar.", Command::ToggleStatusBar),
            MenuItem::new("Next window", "Switch to the next window.", Command::NextWindow)
                .key(Shortcut::function(6)),
        ],
    },
    Menu {
        title: "Help",
        items: &[MenuItem::new("About", "About application.", Command::About)],
    },
];

/// Toolbar buttons, left to right
pub static TOOLBAR: &[MenuItem] = &[
    MenuItem::new("New", "New window", Command::NewWindow),
    MenuItem::new("Open", "Open document", Command::Open),
    MenuItem::new("Save", "Save document", Command::Save),
    MenuItem::new("Select all", "Select all", Command::SelectAll),
    MenuItem::new("Find", "Find text", Command::Find),
];

/// Command bound to `shortcut` in the menus
pub fn command_for(shortcut: Shortcut) -> Option<Command> {
    MENUS
        .iter()
        .flat_map(|menu| menu.items.iter())
        .find(|item| item.shortcut == Some(shortcut))
        .map(|item| item.command)
}
