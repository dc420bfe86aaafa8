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

//! Render the header bar.
//!
//! Shows the view tabs, the record totals (`total-usuarios`,
//! `total-canciones`, `total-favoritos`) and the health of the API.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App, MainView, ServiceStatus,
    render::icons::{ICON_HEART, ICON_OFFLINE, ICON_ONLINE, ICON_SONG, ICON_USER},
};

const TABS: [(MainView, &str); 3] = [
    (MainView::Users, "1 Users"),
    (MainView::Songs, "2 Songs"),
    (MainView::Favourites, "3 Favourites"),
];

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(50), Constraint::Length(24)])
        .split(inner);

    let tabs: Vec<Span> = TABS
        .iter()
        .flat_map(|(view, label)| {
            let style = if *view == app.main_view {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted_fg)
            };
            [Span::styled(format!("[{}]", label), style), Span::raw(" ")]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

    let count = Style::default().fg(theme.count_fg).add_modifier(Modifier::BOLD);
    let favourites_total = app
        .favourites_total
        .map_or_else(|| "-".to_string(), |total| total.to_string());

    let totals = Line::from(vec![
        Span::raw(format!("{} Users: ", ICON_USER)),
        Span::styled(app.users_view.users.len().to_string(), count),
        Span::raw(format!("  {} Songs: ", ICON_SONG)),
        Span::styled(app.songs_view.songs.len().to_string(), count),
        Span::raw(format!("  {} Favourites: ", ICON_HEART)),
        Span::styled(favourites_total, count),
    ]);
    f.render_widget(Paragraph::new(totals).alignment(Alignment::Center), chunks[1]);

    let status = match &app.status {
        ServiceStatus::Unknown => Span::styled("checking...", Style::default().fg(theme.muted_fg)),
        ServiceStatus::Online(health) => {
            let text = match &health.version {
                Some(version) => format!("{} {} v{}", ICON_ONLINE, health.status, version),
                None => format!("{} {}", ICON_ONLINE, health.status),
            };
            Span::styled(text, Style::default().fg(theme.success_colour))
        }
        ServiceStatus::Offline => {
            Span::styled(format!("{} offline", ICON_OFFLINE), Style::default().fg(theme.danger_colour))
        }
    };
    f.render_widget(Paragraph::new(Line::from(status)).alignment(Alignment::Right), chunks[2]);
}
