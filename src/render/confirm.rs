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

//! Render the confirmation prompt.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{confirm::Confirm, render::centered_rect, theme::Theme};

pub(crate) fn draw_confirm(f: &mut Frame, area: Rect, confirm: &Confirm, theme: &Theme) {
    let popup = centered_rect(64, 7, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.warning_colour).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::styled(confirm.message.as_str(), Style::default().fg(theme.text_fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(theme.accent_colour)),
            Span::raw(" Delete   "),
            Span::styled("[n]", Style::default().fg(theme.accent_colour)),
            Span::raw(" Cancel"),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}
