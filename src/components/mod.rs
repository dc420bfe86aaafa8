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

//! Views for the three slices of the client.
//!
//! Each view owns the last snapshot fetched for its slice, the list selection,
//! and its data entry form. Views never talk to the API themselves: key input
//! is turned into a [`ViewRequest`], which the event loop forwards to the task
//! worker or turns into a confirmation prompt.

pub(crate) mod form;

mod favourites;
mod songs;
mod users;

pub(crate) use favourites::FavouritesView;
pub(crate) use songs::SongsView;
pub(crate) use users::UsersView;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, ListState, Padding, Paragraph, Wrap},
};

use crate::{confirm::Confirm, tasks::AppTask, theme::Theme};

/// The part of a view that receives key input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Pane {
    #[default]
    List,
    Form,
    Filter,
}

/// Something a view wants done in response to a key.
#[derive(Debug)]
pub(crate) enum ViewRequest {
    Task(AppTask),
    Confirm(Confirm),
}

pub(crate) fn next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) => if i >= len - 1 { 0 } else { i + 1 },
        None => 0,
    };
    state.select(Some(i));
}

pub(crate) fn previous(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) => if i == 0 { len - 1 } else { i - 1 },
        None => 0,
    };
    state.select(Some(i));
}

/// Keeps the selection within a list that may have shrunk or grown.
pub(crate) fn clamp(state: &mut ListState, len: usize) {
    let selected = match state.selected() {
        _ if len == 0 => None,
        Some(i) => Some(i.min(len - 1)),
        None => Some(0),
    };
    state.select(selected);
}

pub(crate) fn list_block(title: String, theme: &Theme, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Draws the message shown in place of an empty list.
pub(crate) fn draw_placeholder(f: &mut Frame, area: Rect, block: Block, text: &str, theme: &Theme) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.muted_fg))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block.padding(Padding::vertical(1)));

    f.render_widget(paragraph, area);
}
