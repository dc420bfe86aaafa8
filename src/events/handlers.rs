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

use std::time::Instant;

use anyhow::Result;
use log::debug;

use crate::{
    App, MainView, ServiceStatus,
    alerts::Alert,
    commander::Command,
    events::{AppEvent, FormId},
    model::{Favourite, FavouriteDetail, Health, Song, User, UserId},
    tasks::AppTask,
};

pub(super) fn handle_tick(app: &mut App) {
    app.alerts.expire(Instant::now());
}

pub(super) fn handle_alert(app: &mut App, alert: Alert) {
    app.alerts.push(alert, Instant::now());
}

pub(super) fn handle_health_checked(app: &mut App, health: Option<Health>) {
    app.status = match health {
        Some(health) => ServiceStatus::Online(health),
        None => ServiceStatus::Offline,
    };
}

/// Replaces the user list and repopulates every user selector.
pub(super) fn handle_users_loaded(app: &mut App, users: Vec<User>) {
    app.favourites_view.set_user_options(&users);
    app.users_view.set_users(users);
}

/// Replaces the song list and repopulates the song selector.
pub(super) fn handle_songs_loaded(app: &mut App, songs: Vec<Song>) {
    app.favourites_view.set_song_options(&songs);
    app.songs_view.set_songs(songs);
}

pub(super) fn handle_favourites_loaded(app: &mut App, favourites: Vec<Favourite>) {
    app.favourites_total = Some(favourites.len());
}

pub(super) fn handle_user_favourites_loaded(app: &mut App, user_id: UserId, favourites: Vec<FavouriteDetail>) {
    if !app.favourites_view.set_favourites(user_id, favourites) {
        debug!("Discarded favourites of user {}, no longer viewed", user_id);
    }
}

pub(super) fn handle_user_favourites_failed(app: &mut App, user_id: UserId) {
    app.favourites_view.set_load_failed(user_id);
}

pub(super) fn handle_reset_form(app: &mut App, form: FormId) {
    match form {
        FormId::User => app.users_view.form.reset(),
        FormId::Song => app.songs_view.form.reset(),
        FormId::Favourite => app.favourites_view.form.reset(),
    }
}

pub(super) fn handle_command(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::Quit => app.event_tx.send(AppEvent::ExitApplication)?,
        Command::ShowView(view) => app.main_view = view,
        Command::Reload => {
            app.task_tx.send(AppTask::LoadAll)?;
            if let Some(user_id) = app.favourites_view.viewing() {
                app.task_tx.send(AppTask::LoadUserFavourites(user_id))?;
            }
        }
        Command::Filter(text) => {
            app.songs_view.set_filter(&text);
            app.main_view = MainView::Songs;
        }
        Command::Health => app.task_tx.send(AppTask::CheckHealth)?,
    }

    Ok(())
}
