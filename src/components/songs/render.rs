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

//! UI rendering logic for the songs view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::{
    components::{Pane, SongsView, draw_placeholder, list_block, songs::{NO_MATCHES, NO_SONGS}},
    model::Song,
    render::icons::{ICON_CALENDAR, ICON_CLOCK, ICON_GENRE, ICON_SONG},
    theme::Theme,
    util::format::format_duration,
};

/// Duration, year and genre shown after the artist line.
fn song_badges<'a>(song: &'a Song, theme: &Theme) -> Vec<Span<'a>> {
    let style = Style::default().fg(theme.badge_fg);
    let mut badges = vec![Span::styled(
        format!("  {} {}", ICON_CLOCK, format_duration(song.duration)),
        style,
    )];
    if let Some(year) = song.year {
        badges.push(Span::styled(format!("  {} {}", ICON_CALENDAR, year), style));
    }
    if let Some(genre) = &song.genre {
        badges.push(Span::styled(format!("  {} {}", ICON_GENRE, genre), style));
    }
    badges
}

impl SongsView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(chunks[0]);

        self.form.draw(f, left[0], theme, self.pane == Pane::Form);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(chunks[1]);

        self.draw_filter(f, right[0], theme);
        self.draw_list(f, right[1], theme);
    }

    fn draw_filter(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.pane == Pane::Filter;
        let block = list_block(" Filter (/) ".to_string(), theme, focused);
        let inner = block.inner(area);
        let width = (inner.width as usize).saturating_sub(1).max(1);
        let scroll = self.filter.visual_scroll(width);

        let paragraph = Paragraph::new(self.filter.value())
            .style(Style::default().fg(theme.text_fg))
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(paragraph, area);

        if focused {
            let x = self.filter.visual_cursor().max(scroll) - scroll;
            f.set_cursor_position((inner.x + x as u16, inner.y));
        }
    }

    fn draw_list(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        // The count covers the whole catalog, not just the filtered songs.
        let block = list_block(format!(" Songs ({}) ", self.songs.len()), theme, self.pane == Pane::List);

        let filter = self.filter.value();
        let visible: Vec<&Song> = self.songs.iter().filter(|song| song.matches_filter(filter)).collect();
        if visible.is_empty() {
            let text = if self.songs.is_empty() { NO_SONGS } else { NO_MATCHES };
            draw_placeholder(f, area, block, text, theme);
            return;
        }

        let items: Vec<ListItem> = visible
            .into_iter()
            .map(|song| {
                let mut lines = vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", ICON_SONG)),
                        Span::styled(
                            song.title.as_str(),
                            Style::default().fg(theme.title_fg).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::styled(format!("  {}", song.artist), Style::default().fg(theme.artist_fg)),
                ];
                if let Some(album) = &song.album {
                    lines.push(Line::styled(
                        format!("  {}", album),
                        Style::default().fg(theme.album_fg).add_modifier(Modifier::ITALIC),
                    ));
                }
                lines.push(Line::from(song_badges(song, theme)));
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
