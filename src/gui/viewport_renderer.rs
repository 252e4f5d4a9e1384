use super::theme;
use crate::buffer::Point;
use crate::ui::renderer::{column_at, render_column};
use crate::Editor;
use egui::{FontId, Pos2, Rect, Vec2};

/// Paints the visible part of a buffer with its selection and cursor
pub struct ViewportRenderer {
    font_id: FontId,
    tab_width: usize,
}

impl ViewportRenderer {
    pub fn new(tab_width: usize) -> Self {
        Self {
            font_id: FontId::monospace(14.0),
            tab_width,
        }
    }

    /// Render the viewport. Returns the buffer position that was clicked,
    /// if any.
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        editor: &Editor,
        cursor_blink: bool,
        should_auto_scroll: bool,
    ) -> Option<Point> {
        let font_id = &self.font_id;
        let line_height = ui.fonts(|f| f.row_height(font_id)) + 4.0;
        let char_width = ui.fonts(|f| f.glyph_width(font_id, ' '));
        let cursor = editor.cursor();
        let (sel_start, sel_end) = editor.selection().range();
        let buffer = editor.buffer();
        let mut clicked = None;

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show_viewport(ui, |ui, viewport| {
                let total_lines = buffer.line_count();
                let content_height = total_lines as f32 * line_height;

                let visible_start = (viewport.min.y / line_height).floor().max(0.0) as usize;
                let visible_end =
                    ((viewport.max.y / line_height).ceil() as usize + 1).min(total_lines);

                let (response, painter) = ui.allocate_painter(
                    Vec2::new(ui.available_width(), content_height),
                    egui::Sense::click(),
                );
                painter.rect_filled(response.rect, 0.0, theme::BACKGROUND);

                let line_number_width = 60.0;
                let text_start_x = response.rect.min.x + line_number_width;
                let x_of = |line: &str, column: usize| {
                    text_start_x + render_column(line, column, self.tab_width) as f32 * char_width
                };

                for row in visible_start..visible_end {
                    let y = response.rect.min.y + row as f32 * line_height;
                    let line = buffer.line(row).unwrap_or_default();
                    let length = line.chars().count();

                    painter.text(
                        Pos2::new(response.rect.min.x + 10.0, y),
                        egui::Align2::LEFT_TOP,
                        format!("{:4}", row + 1),
                        font_id.clone(),
                        theme::LINE_NUMBER_FG,
                    );

                    // Selected columns of this row; a selected line break shows
                    // as one extra cell
                    let row_start = Point::new(row, 0);
                    let row_end = Point::new(row, length);
                    if sel_start < sel_end && sel_start <= row_end && sel_end > row_start {
                        let from = if sel_start.row == row { sel_start.column } else { 0 };
                        let (to, tail) = if sel_end.row == row {
                            (sel_end.column, 0.0)
                        } else {
                            (length, char_width)
                        };
                        let rect = Rect::from_min_max(
                            Pos2::new(x_of(&line, from), y),
                            Pos2::new(x_of(&line, to) + tail, y + line_height),
                        );
                        painter.rect_filled(rect, 0.0, theme::SELECTION_COLOR);
                    }

                    if !line.is_empty() {
                        painter.text(
                            Pos2::new(text_start_x, y),
                            egui::Align2::LEFT_TOP,
                            expand_tabs(&line, self.tab_width),
                            font_id.clone(),
                            theme::TEXT_COLOR,
                        );
                    }

                    if row == cursor.row && cursor_blink {
                        painter.rect_filled(
                            Rect::from_min_size(
                                Pos2::new(x_of(&line, cursor.column), y),
                                Vec2::new(2.0, line_height),
                            ),
                            0.0,
                            theme::CURSOR_COLOR,
                        );
                    }
                }

                if let Some(pos) = response.interact_pointer_pos().filter(|_| response.clicked())
                {
                    let row = ((pos.y - response.rect.min.y) / line_height).floor().max(0.0)
                        as usize;
                    let row = row.min(total_lines.saturating_sub(1));
                    let line = buffer.line(row).unwrap_or_default();
                    let x = ((pos.x - text_start_x) / char_width).round().max(0.0) as usize;
                    clicked = Some(Point::new(row, column_at(&line, x, self.tab_width)));
                }

                if should_auto_scroll {
                    let scroll_margin = line_height;
                    let cursor_y = cursor.row as f32 * line_height;
                    let cursor_rect = Rect::from_min_size(
                        Pos2::new(
                            response.rect.min.x,
                            response.rect.min.y + cursor_y - scroll_margin,
                        ),
                        Vec2::new(response.rect.width(), line_height + (scroll_margin * 2.0)),
                    );
                    ui.scroll_to_rect(cursor_rect, None);
                }
            });

        clicked
    }
}

fn expand_tabs(line: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut x = 0;
    for c in line.chars() {
        if c == '\t' && tab_width > 0 {
            let pad = tab_width - x % tab_width;
            out.extend(std::iter::repeat(' ').take(pad));
            x += pad;
        } else {
            out.push(c);
            x += 1;
        }
    }
    out
}
