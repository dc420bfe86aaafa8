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

//! UI rendering logic for the favourites view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::{
    components::{
        FavouritesView, Pane, draw_placeholder,
        favourites::{LOAD_FAILED, LOADING, NO_FAVOURITES, NO_USER_SELECTED},
        list_block,
    },
    render::icons::{ICON_CALENDAR, ICON_CLOCK, ICON_GENRE, ICON_HEART},
    theme::Theme,
    util::format::{format_date, format_duration},
};

impl FavouritesView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(chunks[0]);

        self.form.draw(f, left[0], theme, self.pane == Pane::Form);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(chunks[1]);

        self.draw_viewer(f, right[0], theme);
        self.draw_list(f, right[1], theme);
    }

    fn draw_viewer(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = list_block(" Show favourites of (h/l) ".to_string(), theme, false);
        let line = match self.viewer.selected_label() {
            Some(label) => Line::styled(format!("< {} >", label), Style::default().fg(theme.text_fg)),
            None => Line::styled(
                format!("< {} >", self.viewer.placeholder),
                Style::default().fg(theme.muted_fg),
            ),
        };
        f.render_widget(Paragraph::new(line).block(block), area);
    }

    fn draw_list(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.pane == Pane::List;

        let Some(favourites) = self.favourites.as_ref() else {
            let block = list_block(" Favourites ".to_string(), theme, focused);
            let text = match self.viewing() {
                None => NO_USER_SELECTED,
                Some(_) if self.load_failed => LOAD_FAILED,
                Some(_) => LOADING,
            };
            draw_placeholder(f, area, block, text, theme);
            return;
        };

        let block = list_block(format!(" Favourites ({}) ", favourites.len()), theme, focused);

        if favourites.is_empty() {
            draw_placeholder(f, area, block, NO_FAVOURITES, theme);
            return;
        }

        let badge = Style::default().fg(theme.badge_fg);

        let items: Vec<ListItem> = favourites
            .iter()
            .map(|favourite| {
                let song = &favourite.song;
                let mut badges = vec![Span::styled(
                    format!("  {} {}", ICON_CLOCK, format_duration(song.duration)),
                    badge,
                )];
                if let Some(genre) = &song.genre {
                    badges.push(Span::styled(format!("  {} {}", ICON_GENRE, genre), badge));
                }
                badges.push(Span::styled(
                    format!("  {} {}", ICON_CALENDAR, format_date(&favourite.added_at)),
                    badge,
                ));

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", ICON_HEART), Style::default().fg(theme.heart_fg)),
                        Span::styled(
                            song.title.as_str(),
                            Style::default().fg(theme.title_fg).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::styled(format!("  {}", song.artist), Style::default().fg(theme.artist_fg)),
                    Line::from(badges),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
