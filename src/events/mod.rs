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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), results from the API
//! worker, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: [`apply_event`] updates the [`App`] state and submits
//!    tasks to the API worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    alerts::Alert,
    commander::Command,
    model::{Favourite, FavouriteDetail, Health, Song, User, UserId},
    render::draw,
};

/// Forms that the worker can ask to be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormId {
    User,
    Song,
    Favourite,
}

#[derive(Debug, PartialEq)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    RunCommand(Command),
    Alert(Alert),
    HealthChecked(Option<Health>),

    UsersLoaded(Vec<User>),
    SongsLoaded(Vec<Song>),
    FavouritesLoaded(Vec<Favourite>),
    UserFavouritesLoaded(UserId, Vec<FavouriteDetail>),
    UserFavouritesFailed(UserId),

    ResetForm(FormId),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        apply_event(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn apply_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::Tick => handle_tick(app),
        AppEvent::RunCommand(command) => handle_command(app, command)?,
        AppEvent::Alert(alert) => handle_alert(app, alert),
        AppEvent::HealthChecked(health) => handle_health_checked(app, health),
        AppEvent::UsersLoaded(users) => handle_users_loaded(app, users),
        AppEvent::SongsLoaded(songs) => handle_songs_loaded(app, songs),
        AppEvent::FavouritesLoaded(favourites) => handle_favourites_loaded(app, favourites),
        AppEvent::UserFavouritesLoaded(user_id, favourites) => {
            handle_user_favourites_loaded(app, user_id, favourites)
        }
        AppEvent::UserFavouritesFailed(user_id) => handle_user_favourites_failed(app, user_id),
        AppEvent::ResetForm(form) => handle_reset_form(app, form),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
