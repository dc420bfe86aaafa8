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

use anyhow::Result;
use log::{info, warn};

use crate::{
    alerts::Alert,
    api::Transport,
    events::{AppEvent, FormId},
    model::{FavouriteId, NewFavourite, NewSong, NewUser, SongId, UserId},
    tasks::TaskContext,
};

pub(super) const USER_CREATED: &str = "User registered successfully";
pub(super) const USER_DELETED: &str = "User deleted";
pub(super) const SONG_CREATED: &str = "Song added successfully";
pub(super) const SONG_DELETED: &str = "Song deleted";
pub(super) const FAVOURITE_ADDED: &str = "Song added to favourites";
pub(super) const FAVOURITE_REMOVED: &str = "Favourite removed";
pub(super) const SELECT_USER_AND_SONG: &str = "Select both a user and a song";

/// Loads every slice independently, so one failing endpoint does not keep
/// the others from rendering.
pub(super) fn load_all<T: Transport>(ctx: &TaskContext<T>) -> Result<()> {
    check_health(ctx)?;

    if let Err(e) = load_users(ctx) {
        warn!("Initial user load failed: {:#}", e);
    }
    if let Err(e) = load_songs(ctx) {
        warn!("Initial song load failed: {:#}", e);
    }
    if let Err(e) = load_favourites(ctx) {
        warn!("Initial favourite load failed: {:#}", e);
    }

    Ok(())
}

/// Reports the service status. A failure is shown in the header rather than
/// as an alert.
pub(super) fn check_health<T: Transport>(ctx: &TaskContext<T>) -> Result<()> {
    let health = match ctx.api.health() {
        Ok(health) => Some(health),
        Err(e) => {
            warn!("Health check failed: {}", e);
            None
        }
    };

    ctx.send(AppEvent::HealthChecked(health))
}

pub(super) fn load_users<T: Transport>(ctx: &TaskContext<T>) -> Result<()> {
    let users = ctx.call(|api| api.list_users())?;
    info!("Loaded {} users", users.len());
    ctx.send(AppEvent::UsersLoaded(users))
}

pub(super) fn create_user<T: Transport>(ctx: &TaskContext<T>, user: NewUser) -> Result<()> {
    ctx.call(|api| api.create_user(&user))?;
    info!("Registered user {}", user.email);

    ctx.notify(Alert::success(USER_CREATED))?;
    ctx.send(AppEvent::ResetForm(FormId::User))?;
    load_users(ctx)
}

/// Deleting a user also removes their favourites server-side, so the
/// favourite count is reloaded too.
pub(super) fn delete_user<T: Transport>(ctx: &TaskContext<T>, id: UserId) -> Result<()> {
    ctx.call(|api| api.delete_user(id))?;
    info!("Deleted user {}", id);

    ctx.notify(Alert::info(USER_DELETED))?;
    load_users(ctx)?;
    load_favourites(ctx)
}

pub(super) fn load_songs<T: Transport>(ctx: &TaskContext<T>) -> Result<()> {
    let songs = ctx.call(|api| api.list_songs())?;
    info!("Loaded {} songs", songs.len());
    ctx.send(AppEvent::SongsLoaded(songs))
}

pub(super) fn create_song<T: Transport>(ctx: &TaskContext<T>, song: NewSong) -> Result<()> {
    ctx.call(|api| api.create_song(&song))?;
    info!("Added song {} by {}", song.title, song.artist);

    ctx.notify(Alert::success(SONG_CREATED))?;
    ctx.send(AppEvent::ResetForm(FormId::Song))?;
    load_songs(ctx)
}

/// Favourites of the song go with it, so the count and the favourites on
/// screen are reloaded.
pub(super) fn delete_song<T: Transport>(ctx: &TaskContext<T>, id: SongId, viewing: Option<UserId>) -> Result<()> {
    ctx.call(|api| api.delete_song(id))?;
    info!("Deleted song {}", id);

    ctx.notify(Alert::info(SONG_DELETED))?;
    load_songs(ctx)?;
    load_favourites(ctx)?;

    if let Some(user_id) = viewing {
        load_user_favourites(ctx, user_id)?;
    }

    Ok(())
}

pub(super) fn load_favourites<T: Transport>(ctx: &TaskContext<T>) -> Result<()> {
    let favourites = ctx.call(|api| api.list_favourites())?;
    ctx.send(AppEvent::FavouritesLoaded(favourites))
}

pub(super) fn load_user_favourites<T: Transport>(ctx: &TaskContext<T>, user_id: UserId) -> Result<()> {
    match ctx.call(|api| api.list_user_favourites(user_id)) {
        Ok(favourites) => ctx.send(AppEvent::UserFavouritesLoaded(user_id, favourites)),
        Err(e) => {
            ctx.send(AppEvent::UserFavouritesFailed(user_id))?;
            Err(e)
        }
    }
}

pub(super) fn add_favourite<T: Transport>(
    ctx: &TaskContext<T>,
    user_id: Option<UserId>,
    song_id: Option<SongId>,
    viewing: Option<UserId>,
) -> Result<()> {
    let (Some(user_id), Some(song_id)) = (user_id, song_id) else {
        return ctx.notify(Alert::warning(SELECT_USER_AND_SONG));
    };

    ctx.call(|api| api.add_favourite(&NewFavourite { user_id, song_id }))?;
    info!("Added song {} to favourites of user {}", song_id, user_id);

    ctx.notify(Alert::success(FAVOURITE_ADDED))?;
    ctx.send(AppEvent::ResetForm(FormId::Favourite))?;
    load_favourites(ctx)?;

    if viewing == Some(user_id) {
        load_user_favourites(ctx, user_id)?;
    }

    Ok(())
}

pub(super) fn delete_favourite<T: Transport>(
    ctx: &TaskContext<T>,
    id: FavouriteId,
    viewing: Option<UserId>,
) -> Result<()> {
    ctx.call(|api| api.delete_favourite(id))?;
    info!("Removed favourite {}", id);

    ctx.notify(Alert::info(FAVOURITE_REMOVED))?;
    load_favourites(ctx)?;

    if let Some(user_id) = viewing {
        load_user_favourites(ctx, user_id)?;
    }

    Ok(())
}
