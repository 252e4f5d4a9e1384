use crate::command::Command;
use crate::config::ViewConfig;

/// Visibility of the bars around the text area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub menu_bar: bool,
    pub tool_bar: bool,
    pub status_bar: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Self::from(ViewConfig::default())
    }
}

impl From<ViewConfig> for Chrome {
    fn from(view: ViewConfig) -> Self {
        Self {
            menu_bar: view.menu_bar,
            tool_bar: view.tool_bar,
            status_bar: view.status_bar,
        }
    }
}

impl Chrome {
    /// Flip the bar behind a View toggle. Returns false for other commands.
    pub fn toggle(&mut self, command: Command) -> bool {
        let flag = match command {
            Command::ToggleMenuBar => &mut self.menu_bar,
            Command::ToggleToolBar => &mut self.tool_bar,
            Command::ToggleStatusBar => &mut self.status_bar,
            _ => return false,
        };
        *flag = !*flag;
        true
    }
}
