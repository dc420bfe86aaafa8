// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Rendering for forms.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::form::{FieldKind, Form},
    theme::Theme,
};

impl Form {
    /// Draws the form, one line per field. When `focused`, the active field is
    /// highlighted and the cursor placed in it.
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_style = if focused {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border_colour)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);

        let label_width = self.fields.iter().map(|f| f.label.len()).max().unwrap_or(0) + 2;
        // One column is kept free for the cursor at the end of the text.
        let value_width = (inner.width as usize).saturating_sub(label_width + 1).max(1);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let is_active = focused && i == self.active;

                let (value, value_style) = match &field.kind {
                    FieldKind::Text(text) => {
                        let scroll = text.input.visual_scroll(value_width);
                        let visible = text.input.value().chars().skip(scroll).collect();
                        (visible, Style::default().fg(theme.text_fg))
                    }
                    FieldKind::Select(selector) => match selector.selected_label() {
                        Some(label) => (format!("< {} >", label), Style::default().fg(theme.text_fg)),
                        None => (format!("< {} >", selector.placeholder), Style::default().fg(theme.muted_fg)),
                    },
                };

                let label_style = if is_active {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.muted_fg)
                };

                Line::from(vec![
                    Span::styled(format!("{:<width$}", format!("{}:", field.label), width = label_width), label_style),
                    Span::styled(value, value_style),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);

        if focused {
            if let Some(field) = self.fields.get(self.active) {
                if let FieldKind::Text(text) = &field.kind {
                    let scroll = text.input.visual_scroll(value_width);
                    let x = inner.x + (label_width + text.input.visual_cursor() - scroll) as u16;
                    let y = inner.y + self.active as u16;
                    if x < inner.right() && y < inner.bottom() {
                        f.set_cursor_position((x, y));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        components::form::{Field, Form},
        test_utils::{buffer_text, setup_test_terminal},
        theme::Theme,
    };
    use pretty_assertions::assert_eq;
    use ratatui::layout::{Position, Rect};

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let mut form = Form::new("form-test", "Test", vec![Field::text("name", "Name")]);
        form.set_value("name", "0123456789abcdefghijklmnopqrstuvwxyzABCD");

        let mut terminal = setup_test_terminal(30, 4);
        terminal
            .draw(|f| form.draw(f, Rect::new(0, 0, 30, 4), &Theme::default(), true))
            .unwrap();

        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Name: lmnopqrstuvwxyzABCD"));
        assert!(!screen.contains("0123"));
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(27, 1));
    }

    #[test]
    fn test_short_text_is_not_scrolled() {
        let mut form = Form::new("form-test", "Test", vec![Field::text("name", "Name")]);
        form.set_value("name", "Ana");

        let mut terminal = setup_test_terminal(30, 4);
        terminal
            .draw(|f| form.draw(f, Rect::new(0, 0, 30, 4), &Theme::default(), true))
            .unwrap();

        assert!(buffer_text(terminal.backend().buffer()).contains("Name: Ana"));
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(11, 1));
    }
}
