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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event. Overlays (notifications and the confirmation
//! prompt) are drawn last so they sit above the active view.

mod alerts;
mod commander;
mod confirm;
mod header;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App, MainView,
    render::{alerts::draw_alerts, commander::draw_commander, confirm::draw_confirm, header::draw_header},
};

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the header, the active view and
///   the command line.
/// * **State Mapping**: Converting the last fetched snapshots into lists,
///   forms and counts.
/// * **Overlays**: Notifications and the pending confirmation, if any.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    match app.main_view {
        MainView::Users => app.users_view.draw(f, outer[1], &app.theme),
        MainView::Songs => app.songs_view.draw(f, outer[1], &app.theme),
        MainView::Favourites => app.favourites_view.draw(f, outer[1], &app.theme),
    };

    draw_commander(f, outer[2], app);

    draw_alerts(f, outer[1], app);

    if let Some(confirm) = &app.confirm {
        draw_confirm(f, area, confirm, &app.theme);
    }
}

/// A rectangle centred within `area`, used for popups.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
