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

//! Keyboard input routing.
//!
//! Keys go, in order of precedence, to a pending confirmation prompt, the
//! command line, a focused form or filter, the global bindings, and finally
//! the list of the current view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use log::info;

use crate::{
    App, MainView,
    components::{Pane, ViewRequest},
    confirm::{Answer, Confirm},
    events::AppEvent,
};

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if let Some(confirm) = app.confirm.take() {
        match Confirm::answer(key) {
            Answer::Yes => {
                info!("Confirmed: {}", confirm.message);
                app.task_tx.send(confirm.task)?;
            }
            Answer::No => {}
            Answer::Pending => app.confirm = Some(confirm),
        }
        return Ok(());
    }

    if app.commander.active() {
        app.commander.handle_event(key, &app.event_tx)?;
        return Ok(());
    }

    if current_pane(app) == Pane::List {
        if app.commander.handle_event(key, &app.event_tx)? {
            return Ok(());
        }
        if process_global_key_event(app, key)? {
            return Ok(());
        }
    }

    let request = match app.main_view {
        MainView::Users => app.users_view.process_key(key),
        MainView::Songs => app.songs_view.process_key(key, app.favourites_view.viewing()),
        MainView::Favourites => app.favourites_view.process_key(key),
    };

    match request {
        Some(ViewRequest::Task(task)) => app.task_tx.send(task)?,
        Some(ViewRequest::Confirm(confirm)) => app.confirm = Some(confirm),
        None => {}
    }

    Ok(())
}

fn current_pane(app: &App) -> Pane {
    match app.main_view {
        MainView::Users => app.users_view.pane,
        MainView::Songs => app.songs_view.pane,
        MainView::Favourites => app.favourites_view.pane,
    }
}

/// Handles keys that mean the same in every view. Returns whether the key was
/// consumed.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('1') => app.main_view = MainView::Users,
        KeyCode::Char('2') => app.main_view = MainView::Songs,
        KeyCode::Char('3') => app.main_view = MainView::Favourites,
        KeyCode::Esc => app.alerts.clear(),
        _ => return Ok(false),
    }

    Ok(true)
}
