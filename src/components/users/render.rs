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

//! UI rendering logic for the users view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::{
    components::{Pane, UsersView, draw_placeholder, list_block, users::NO_USERS},
    render::icons::{ICON_CALENDAR, ICON_MAIL, ICON_USER},
    theme::Theme,
    util::format::format_date,
};

impl UsersView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let form_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(chunks[0])[0];

        self.form.draw(f, form_area, theme, self.pane == Pane::Form);

        let block = list_block(format!(" Users ({}) ", self.users.len()), theme, self.pane == Pane::List);

        if self.users.is_empty() {
            draw_placeholder(f, chunks[1], block, NO_USERS, theme);
            return;
        }

        let items: Vec<ListItem> = self
            .users
            .iter()
            .map(|user| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", ICON_USER)),
                        Span::styled(
                            user.name.as_str(),
                            Style::default().fg(theme.title_fg).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::styled(
                        format!("  {} {}", ICON_MAIL, user.email),
                        Style::default().fg(theme.muted_fg),
                    ),
                    Line::styled(
                        format!("  {} {}", ICON_CALENDAR, format_date(&user.registered_at)),
                        Style::default().fg(theme.muted_fg),
                    ),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
