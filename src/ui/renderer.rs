use crate::buffer::Point;
use crate::command::{MENUS, TOOLBAR};
use crate::ui::app::{App, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const BAR: Style = Style::new().bg(Color::DarkGray).fg(Color::White);
const SELECTED: Style = Style::new().bg(Color::Blue).fg(Color::White);

pub fn render(app: &mut App, frame: &mut Frame) {
    let chrome = *app.workspace.active().chrome();
    let menu_open = matches!(app.mode, Mode::Menu { .. });
    let show_menu = chrome.menu_bar || menu_open;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                // Title bar
            Constraint::Length(u16::from(show_menu)),             // Menu bar
            Constraint::Length(u16::from(chrome.tool_bar)),       // Tool bar
            Constraint::Min(0),                                   // Editor area
            Constraint::Length(u16::from(chrome.status_bar)),     // Status bar
            Constraint::Length(1),                                // Message line
        ])
        .split(frame.area());

    render_title_bar(app, frame, chunks[0]);
    if show_menu {
        render_menu_bar(app, frame, chunks[1]);
    }
    if chrome.tool_bar {
        render_tool_bar(frame, chunks[2]);
    }
    render_editor(app, frame, chunks[3]);
    if chrome.status_bar {
        render_status_bar(app, frame, chunks[4]);
    }
    render_message_line(app, frame, chunks[5]);

    match &app.mode {
        Mode::Menu { menu, item } => render_dropdown(app, frame, chunks[1], *menu, *item),
        Mode::Message { title, body } => render_message_box(frame, title, body),
        Mode::Editing | Mode::Prompt { .. } => {}
    }
}

/// Columns `line[..column]` takes on screen
pub(crate) fn render_column(line: &str, column: usize, tab_width: usize) -> usize {
    line.chars().take(column).fold(0, |x, c| advance(x, c, tab_width))
}

/// Character column under screen column `x`
pub(crate) fn column_at(line: &str, x: usize, tab_width: usize) -> usize {
    let mut screen = 0;
    for (column, c) in line.chars().enumerate() {
        let next = advance(screen, c, tab_width);
        if x < next {
            return column;
        }
        screen = next;
    }
    line.chars().count()
}

fn advance(x: usize, c: char, tab_width: usize) -> usize {
    if c == '\t' && tab_width > 0 {
        x + tab_width - x % tab_width
    } else {
        x + 1
    }
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let workspace = &app.workspace;
    let mut spans = vec![Span::styled(
        format!(" {}", workspace.active().title()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if workspace.windows().len() > 1 {
        spans.push(Span::raw(format!(
            "  [{}/{}]",
            workspace.active_index() + 1,
            workspace.windows().len()
        )));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(BAR), area);
}

fn render_menu_bar(app: &App, frame: &mut Frame, area: Rect) {
    let open = match app.mode {
        Mode::Menu { menu, .. } => Some(menu),
        _ => None,
    };
    let spans: Vec<Span> = MENUS
        .iter()
        .enumerate()
        .map(|(i, menu)| {
            let style = if open == Some(i) { SELECTED } else { Style::default() };
            Span::styled(format!(" {} ", menu.title), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tool_bar(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = TOOLBAR
        .iter()
        .flat_map(|item| [Span::styled(format!("[{}]", item.label), BAR), Span::raw(" ")])
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_editor(app: &mut App, frame: &mut Frame, area: Rect) {
    let tab_width = app.workspace.config().tab_width;
    let (cursor, cursor_x) = {
        let editor = app.workspace.active().editor();
        let cursor = editor.cursor();
        let line = editor.buffer().line(cursor.row).unwrap_or_default();
        (cursor, render_column(&line, cursor.column, tab_width))
    };
    let height = usize::from(area.height);
    let width = usize::from(area.width);

    // Keep the cursor on screen
    if cursor.row < app.row_offset {
        app.row_offset = cursor.row;
    }
    if height > 0 && cursor.row >= app.row_offset + height {
        app.row_offset = cursor.row + 1 - height;
    }
    if cursor_x < app.col_offset {
        app.col_offset = cursor_x;
    }
    if width > 0 && cursor_x >= app.col_offset + width {
        app.col_offset = cursor_x + 1 - width;
    }
    let (row_offset, col_offset) = (app.row_offset, app.col_offset);

    let editor = app.workspace.active().editor();
    let buffer = editor.buffer();
    let (start, end) = editor.selection().range();

    let lines: Vec<Line> = (row_offset..buffer.line_count().min(row_offset + height))
        .map(|row| {
            let text = buffer.line(row).unwrap_or_default();
            let mut spans = Vec::new();
            let mut x = 0;
            for (column, c) in text.chars().enumerate() {
                let next = advance(x, c, tab_width);
                let point = Point::new(row, column);
                let style = if start <= point && point < end {
                    SELECTED
                } else {
                    Style::default()
                };
                let cell: String = if c == '\t' { " ".repeat(next - x) } else { c.to_string() };
                if x >= col_offset {
                    spans.push(Span::styled(cell, style));
                }
                x = next;
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);

    if matches!(app.mode, Mode::Editing) && height > 0 && width > 0 {
        let x = area.x + (cursor_x - col_offset) as u16;
        let y = area.y + (cursor.row - row_offset) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let window = app.workspace.active();
    let session = window.session();
    let editor = window.editor();
    let lines = editor.line_count();

    let left = format!(
        " {} - {} lines{}",
        session.file_name().unwrap_or_else(|| "[No Name]".to_string()),
        lines,
        if session.is_modified() { " (modified)" } else { "" }
    );
    let right = format!("{}/{} ", editor.cursor().row + 1, lines);
    let padding = usize::from(area.width).saturating_sub(left.chars().count() + right.len());
    let text = format!("{}{}{}", left, " ".repeat(padding), right);

    frame.render_widget(
        Paragraph::new(text).style(BAR.add_modifier(Modifier::REVERSED)),
        area,
    );
}

fn render_message_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = match &app.mode {
        Mode::Prompt { request, input } => {
            let x = area.x + (request.label().chars().count() + input.chars().count()) as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
            Line::from(vec![
                Span::styled(request.label(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(input.as_str()),
            ])
        }
        Mode::Menu { .. } => Line::from(app.menu_tip().unwrap_or_default()),
        Mode::Editing | Mode::Message { .. } => {
            Line::from(app.workspace.active().status().unwrap_or_default())
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_dropdown(app: &App, frame: &mut Frame, bar: Rect, menu: usize, item: usize) {
    let chrome = app.workspace.active().chrome();
    let x = MENUS[..menu]
        .iter()
        .map(|m| m.title.chars().count() as u16 + 2)
        .sum::<u16>();
    let entries = MENUS[menu].items;

    let rows: Vec<(String, String)> = entries
        .iter()
        .map(|entry| {
            let shortcut = entry.shortcut.map(|s| s.to_string()).unwrap_or_default();
            (entry.display_label(chrome), shortcut)
        })
        .collect();
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let shortcut_width = rows.iter().map(|(_, s)| s.len()).max().unwrap_or(0);

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .map(|(i, (label, shortcut))| {
            let text = format!(" {:<label_width$}  {:>shortcut_width$} ", label, shortcut);
            let style = if i == item { SELECTED } else { Style::default() };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let area = frame.area();
    let popup = Rect {
        x: (bar.x + x).min(area.width.saturating_sub(1)),
        y: bar.y + 1,
        width: (label_width + shortcut_width + 6) as u16,
        height: lines.len() as u16 + 2,
    }
    .intersection(area);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        popup,
    );
}

fn render_message_box(frame: &mut Frame, title: &str, body: &str) {
    let area = frame.area();
    let width = area.width.clamp(20, 50).min(area.width);
    let height = (body.lines().count() as u16 + 4).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let mut lines: Vec<Line> = body.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title)),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_column_expands_tabs() {
        assert_eq!(render_column("abc", 2, 8), 2);
        assert_eq!(render_column("\tx", 1, 8), 8);
        assert_eq!(render_column("ab\tx", 3, 4), 4);
        assert_eq!(render_column("ab\tx", 4, 4), 5);
    }

    #[test]
    fn test_column_at_inverts_render_column() {
        assert_eq!(column_at("ab\tx", 1, 4), 1);
        assert_eq!(column_at("ab\tx", 3, 4), 2);
        assert_eq!(column_at("ab\tx", 4, 4), 3);
        assert_eq!(column_at("ab\tx", 40, 4), 4);
    }
}
