use crate::command::{command_for, Command, Key, Shortcut, MENUS};
use crate::editor::Motion;
use crate::window::EditAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means while editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Edit(EditAction),
    Move { motion: Motion, extend: bool },
    /// Open the menu bar at the given menu
    OpenMenu(usize),
    Ignored,
}

/// Translate a terminal key press
pub fn translate(key: KeyEvent) -> Input {
    if key.kind == KeyEventKind::Release {
        return Input::Ignored;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if let Some(shortcut) = shortcut(key.code, ctrl, shift) {
        if let Some(command) = command_for(shortcut) {
            return Input::Command(command);
        }
    }

    match key.code {
        KeyCode::F(10) => Input::OpenMenu(0),
        KeyCode::Char(c) if alt => menu_with_initial(c).map_or(Input::Ignored, Input::OpenMenu),
        KeyCode::Char(_) if ctrl => Input::Ignored,
        KeyCode::Char(c) => Input::Edit(EditAction::Insert(c.to_string())),
        KeyCode::Tab => Input::Edit(EditAction::Insert("\t".to_string())),
        KeyCode::Enter => Input::Edit(EditAction::Newline),
        KeyCode::Backspace => Input::Edit(EditAction::Backspace),
        KeyCode::Delete => Input::Edit(EditAction::Delete),
        code => match motion(code, ctrl) {
            Some(motion) => Input::Move {
                motion,
                extend: shift,
            },
            None => Input::Ignored,
        },
    }
}

fn shortcut(code: KeyCode, ctrl: bool, shift: bool) -> Option<Shortcut> {
    let key = match code {
        KeyCode::Char(c) if ctrl => Key::Char(c.to_ascii_lowercase()),
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(Shortcut { ctrl, shift, key })
}

/// Alt+letter opens the menu whose title starts with that letter
fn menu_with_initial(c: char) -> Option<usize> {
    MENUS.iter().position(|menu| {
        menu.title
            .chars()
            .next()
            .is_some_and(|initial| initial.eq_ignore_ascii_case(&c))
    })
}

fn motion(code: KeyCode, ctrl: bool) -> Option<Motion> {
    Some(match code {
        KeyCode::Left => Motion::Left,
        KeyCode::Right => Motion::Right,
        KeyCode::Up => Motion::Up,
        KeyCode::Down => Motion::Down,
        KeyCode::Home if ctrl => Motion::DocumentStart,
        KeyCode::End if ctrl => Motion::DocumentEnd,
        KeyCode::Home => Motion::LineStart,
        KeyCode::End => Motion::LineEnd,
        KeyCode::PageUp => Motion::DocumentStart,
        KeyCode::PageDown => Motion::DocumentEnd,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Input {
        translate(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_letters_map_to_menu_commands() {
        assert_eq!(
            press(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Input::Command(Command::Save)
        );
        assert_eq!(
            press(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            Input::Command(Command::SaveAs)
        );
        assert_eq!(press(KeyCode::Char('z'), KeyModifiers::CONTROL), Input::Ignored);
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(
            press(KeyCode::F(3), KeyModifiers::NONE),
            Input::Command(Command::FindNext)
        );
        assert_eq!(
            press(KeyCode::F(3), KeyModifiers::SHIFT),
            Input::Command(Command::FindAgain)
        );
        assert_eq!(press(KeyCode::F(10), KeyModifiers::NONE), Input::OpenMenu(0));
    }

    #[test]
    fn test_typing_and_motion() {
        assert_eq!(
            press(KeyCode::Char('A'), KeyModifiers::SHIFT),
            Input::Edit(EditAction::Insert("A".to_string()))
        );
        assert_eq!(
            press(KeyCode::Right, KeyModifiers::SHIFT),
            Input::Move {
                motion: Motion::Right,
                extend: true
            }
        );
        assert_eq!(press(KeyCode::Char('v'), KeyModifiers::ALT), Input::OpenMenu(3));
    }
}
