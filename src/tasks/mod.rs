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

//! Background API task processing.
//!
//! This module implements the command pattern used to keep network calls off
//! the UI thread. A dedicated worker owns the [`ApiClient`] and executes
//! [`AppTask`]s one at a time, in the order they were submitted, broadcasting
//! the results back to the application via [`AppEvent`]s.
//!
//! Every API call made by a handler goes through [`TaskContext::call`], which
//! logs and surfaces a failure as a danger alert before returning it. A
//! handler that hits an error therefore stops where it is: a failed create
//! neither resets its form nor reloads its list.

mod handlers;
use handlers::*;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use log::{debug, error};

use crate::{
    alerts::Alert,
    api::{ApiClient, ApiError, Transport},
    events::AppEvent,
    model::{FavouriteId, NewSong, NewUser, SongId, UserId},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppTask {
    /// Initial load of every slice plus the health check.
    LoadAll,
    CheckHealth,

    LoadUsers,
    CreateUser(NewUser),
    DeleteUser(UserId),

    LoadSongs,
    CreateSong(NewSong),
    /// `viewing` is refreshed as well, since the song leaves every
    /// favourite list.
    DeleteSong {
        id: SongId,
        viewing: Option<UserId>,
    },

    LoadFavourites,
    LoadUserFavourites(UserId),
    /// Selections are passed through unchecked; the handler rejects missing
    /// ones. `viewing` is the user whose favourites are on screen, if any.
    AddFavourite {
        user_id: Option<UserId>,
        song_id: Option<SongId>,
        viewing: Option<UserId>,
    },
    DeleteFavourite {
        id: FavouriteId,
        viewing: Option<UserId>,
    },
}

/// Spawns a background thread to process API tasks.
///
/// The worker exits when the task channel is closed.
///
/// # Arguments
///
/// * `api` - The client used for every request.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker<T: Transport + 'static>(
    api: ApiClient<T>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let ctx = TaskContext::new(&api, &event_tx);

        while let Ok(task) = task_rx.recv() {
            debug!("Running task {:?}", task);
            if let Err(e) = handle_task(task, &ctx) {
                error!("Task failed: {:#}", e);
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a, T> {
    api: &'a ApiClient<T>,
    event_tx: &'a Sender<AppEvent>,
}

impl<'a, T: Transport> TaskContext<'a, T> {
    pub(crate) fn new(api: &'a ApiClient<T>, event_tx: &'a Sender<AppEvent>) -> Self {
        Self { api, event_tx }
    }

    /// Runs one API call, surfacing a failure as a danger alert before
    /// returning it.
    fn call<R>(&self, request: impl FnOnce(&ApiClient<T>) -> Result<R, ApiError>) -> Result<R> {
        match request(self.api) {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("Request failed: {} (status {:?})", e, e.status);
                self.notify(Alert::danger(e.message.clone()))?;
                Err(e.into())
            }
        }
    }

    fn notify(&self, alert: Alert) -> Result<()> {
        self.send(AppEvent::Alert(alert))
    }

    fn send(&self, event: AppEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }
}

/// Orchestrates the execution of a single task.
pub(crate) fn handle_task<T: Transport>(task: AppTask, ctx: &TaskContext<T>) -> Result<()> {
    match task {
        AppTask::LoadAll => load_all(ctx),
        AppTask::CheckHealth => check_health(ctx),

        AppTask::LoadUsers => load_users(ctx),
        AppTask::CreateUser(user) => create_user(ctx, user),
        AppTask::DeleteUser(id) => delete_user(ctx, id),

        AppTask::LoadSongs => load_songs(ctx),
        AppTask::CreateSong(song) => create_song(ctx, song),
        AppTask::DeleteSong { id, viewing } => delete_song(ctx, id, viewing),

        AppTask::LoadFavourites => load_favourites(ctx),
        AppTask::LoadUserFavourites(user_id) => load_user_favourites(ctx, user_id),
        AppTask::AddFavourite {
            user_id,
            song_id,
            viewing,
        } => add_favourite(ctx, user_id, song_id, viewing),
        AppTask::DeleteFavourite { id, viewing } => delete_favourite(ctx, id, viewing),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::{
        alerts::Severity,
        api::testing::{FakeTransport, ORIGIN},
        events::FormId,
    };

    /// Runs a task against the fake server, returning the events it produced.
    fn run(transport: &FakeTransport, task: AppTask) -> (Result<()>, Vec<AppEvent>) {
        let api = ApiClient::new(transport.clone(), ORIGIN, "/api");
        let (event_tx, event_rx) = mpsc::channel();
        let result = handle_task(task, &TaskContext::new(&api, &event_tx));
        (result, event_rx.try_iter().collect())
    }

    fn user_json(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "nombre": name,
            "correo": format!("{}@example.com", name.to_lowercase()),
            "fecha_registro": "2024-05-01T10:00:00"
        })
    }

    fn song_json(id: i64, title: &str) -> serde_json::Value {
        json!({"id": id, "titulo": title, "artista": "Queen", "duracion": 200})
    }

    fn favourite_json(id: i64, user_id: i64, song_id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "usuario_id": user_id,
            "cancion_id": song_id,
            "fecha_agregado": "2024-05-02T10:00:00"
        })
    }

    fn favourite_detail_json(id: i64, user_id: i64, song_id: i64) -> serde_json::Value {
        let mut favourite = favourite_json(id, user_id, song_id);
        favourite["cancion"] = song_json(song_id, "Bohemian Rhapsody");
        favourite
    }

    fn alerts(events: &[AppEvent]) -> Vec<Alert> {
        events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Alert(alert) => Some(alert.clone()),
                _ => None,
            })
            .collect()
    }

    fn new_user() -> NewUser {
        NewUser {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    #[test]
    fn test_create_user_resets_form_and_reloads() {
        let transport = FakeTransport::new()
            .route_json(Method::POST, "/usuarios/", 201, user_json(1, "Ana"))
            .route_json(Method::GET, "/usuarios/", 200, json!([user_json(1, "Ana")]));

        let (result, events) = run(&transport, AppTask::CreateUser(new_user()));

        assert!(result.is_ok());
        assert_eq!(transport.call_lines(), vec!["POST /usuarios/", "GET /usuarios/"]);
        assert_eq!(
            transport.calls()[0].body,
            Some(json!({"nombre": "Ana", "correo": "ana@example.com"}))
        );
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], AppEvent::Alert(Alert::success(USER_CREATED)));
        assert_eq!(events[1], AppEvent::ResetForm(FormId::User));
        assert!(matches!(&events[2], AppEvent::UsersLoaded(users) if users.len() == 1));
    }

    #[test]
    fn test_failed_create_keeps_form_and_skips_reload() {
        let transport = FakeTransport::new()
            .route_json(Method::POST, "/usuarios/", 400, json!({"detail": "El correo ya está registrado"}))
            .route_json(Method::GET, "/usuarios/", 200, json!([]));

        let (result, events) = run(&transport, AppTask::CreateUser(new_user()));

        assert!(result.is_err());
        assert_eq!(transport.call_lines(), vec!["POST /usuarios/"]);
        assert_eq!(events, vec![AppEvent::Alert(Alert::danger("El correo ya está registrado"))]);
    }

    #[test]
    fn test_failed_load_shows_alert() {
        let transport = FakeTransport::new().route(Method::GET, "/canciones/", 500, "oops");

        let (result, events) = run(&transport, AppTask::LoadSongs);

        assert!(result.is_err());
        assert_eq!(events, vec![AppEvent::Alert(Alert::danger(crate::api::FALLBACK_MESSAGE))]);
    }

    #[test]
    fn test_create_song_reloads_songs() {
        let song = NewSong {
            title: "Imagine".to_string(),
            artist: "John Lennon".to_string(),
            album: None,
            duration: Some(183),
            year: Some(1971),
            genre: None,
        };
        let transport = FakeTransport::new()
            .route_json(Method::POST, "/canciones/", 201, song_json(5, "Imagine"))
            .route_json(Method::GET, "/canciones/", 200, json!([song_json(5, "Imagine")]));

        let (result, events) = run(&transport, AppTask::CreateSong(song));

        assert!(result.is_ok());
        assert_eq!(transport.call_lines(), vec!["POST /canciones/", "GET /canciones/"]);
        assert_eq!(alerts(&events), vec![Alert::success(SONG_CREATED)]);
        assert!(events.contains(&AppEvent::ResetForm(FormId::Song)));
    }

    #[test]
    fn test_add_favourite_without_selection_makes_no_request() {
        for (user_id, song_id) in [(None, Some(2)), (Some(1), None), (None, None)] {
            let transport = FakeTransport::new();

            let (result, events) = run(
                &transport,
                AppTask::AddFavourite {
                    user_id,
                    song_id,
                    viewing: None,
                },
            );

            assert!(result.is_ok());
            assert!(transport.calls().is_empty());
            assert_eq!(events, vec![AppEvent::Alert(Alert::warning(SELECT_USER_AND_SONG))]);
        }
    }

    #[test]
    fn test_add_favourite_refreshes_viewed_user() {
        let transport = FakeTransport::new()
            .route_json(Method::POST, "/favoritos/", 201, favourite_json(10, 1, 2))
            .route_json(Method::GET, "/favoritos/", 200, json!([favourite_json(10, 1, 2)]))
            .route_json(Method::GET, "/favoritos/usuario/1", 200, json!([favourite_detail_json(10, 1, 2)]));

        let (result, events) = run(
            &transport,
            AppTask::AddFavourite {
                user_id: Some(1),
                song_id: Some(2),
                viewing: Some(1),
            },
        );

        assert!(result.is_ok());
        assert_eq!(
            transport.call_lines(),
            vec!["POST /favoritos/", "GET /favoritos/", "GET /favoritos/usuario/1"]
        );
        assert_eq!(transport.calls()[0].body, Some(json!({"usuario_id": 1, "cancion_id": 2})));
        assert!(events.contains(&AppEvent::ResetForm(FormId::Favourite)));
        assert!(matches!(events.last(), Some(AppEvent::UserFavouritesLoaded(1, favs)) if favs.len() == 1));
    }

    #[test]
    fn test_add_favourite_for_other_user_skips_viewer_refresh() {
        let transport = FakeTransport::new()
            .route_json(Method::POST, "/favoritos/", 201, favourite_json(10, 1, 2))
            .route_json(Method::GET, "/favoritos/", 200, json!([favourite_json(10, 1, 2)]));

        let (result, _) = run(
            &transport,
            AppTask::AddFavourite {
                user_id: Some(1),
                song_id: Some(2),
                viewing: Some(4),
            },
        );

        assert!(result.is_ok());
        assert_eq!(transport.call_lines(), vec!["POST /favoritos/", "GET /favoritos/"]);
    }

    #[test]
    fn test_delete_favourite_refreshes_count_and_viewer() {
        let transport = FakeTransport::new()
            .route(Method::DELETE, "/favoritos/10", 204, "")
            .route_json(Method::GET, "/favoritos/", 200, json!([]))
            .route_json(Method::GET, "/favoritos/usuario/1", 200, json!([]));

        let (result, events) = run(&transport, AppTask::DeleteFavourite { id: 10, viewing: Some(1) });

        assert!(result.is_ok());
        assert_eq!(
            transport.call_lines(),
            vec!["DELETE /favoritos/10", "GET /favoritos/", "GET /favoritos/usuario/1"]
        );
        assert_eq!(alerts(&events)[0].severity, Severity::Info);
        assert!(events.contains(&AppEvent::FavouritesLoaded(vec![])));
        assert!(events.contains(&AppEvent::UserFavouritesLoaded(1, vec![])));
    }

    #[test]
    fn test_failed_delete_reloads_nothing() {
        let transport = FakeTransport::new()
            .route_json(Method::DELETE, "/usuarios/3", 404, json!({"detail": "Usuario no encontrado"}));

        let (result, events) = run(&transport, AppTask::DeleteUser(3));

        assert!(result.is_err());
        assert_eq!(transport.call_lines(), vec!["DELETE /usuarios/3"]);
        assert_eq!(events, vec![AppEvent::Alert(Alert::danger("Usuario no encontrado"))]);
    }

    #[test]
    fn test_delete_song_reloads_songs_and_favourite_count() {
        let transport = FakeTransport::new()
            .route(Method::DELETE, "/canciones/2", 204, "")
            .route_json(Method::GET, "/canciones/", 200, json!([]))
            .route_json(Method::GET, "/favoritos/", 200, json!([]));

        let (result, events) = run(&transport, AppTask::DeleteSong { id: 2, viewing: None });

        assert!(result.is_ok());
        assert_eq!(
            transport.call_lines(),
            vec!["DELETE /canciones/2", "GET /canciones/", "GET /favoritos/"]
        );
        assert_eq!(alerts(&events), vec![Alert::info(SONG_DELETED)]);
    }

    #[test]
    fn test_delete_song_refreshes_viewed_favourites() {
        let transport = FakeTransport::new()
            .route(Method::DELETE, "/canciones/2", 204, "")
            .route_json(Method::GET, "/canciones/", 200, json!([]))
            .route_json(Method::GET, "/favoritos/", 200, json!([]))
            .route_json(Method::GET, "/favoritos/usuario/4", 200, json!([]));

        let (result, events) = run(
            &transport,
            AppTask::DeleteSong {
                id: 2,
                viewing: Some(4),
            },
        );

        assert!(result.is_ok());
        assert_eq!(
            transport.call_lines(),
            vec![
                "DELETE /canciones/2",
                "GET /canciones/",
                "GET /favoritos/",
                "GET /favoritos/usuario/4"
            ]
        );
        assert!(events.contains(&AppEvent::UserFavouritesLoaded(4, vec![])));
    }

    #[test]
    fn test_failed_user_favourites_load_is_reported() {
        let transport = FakeTransport::new().route(Method::GET, "/favoritos/usuario/4", 500, "");

        let (result, events) = run(&transport, AppTask::LoadUserFavourites(4));

        assert!(result.is_err());
        assert_eq!(
            events,
            vec![
                AppEvent::Alert(Alert::danger(crate::api::FALLBACK_MESSAGE)),
                AppEvent::UserFavouritesFailed(4)
            ]
        );
    }

    #[test]
    fn test_load_all_continues_after_failure() {
        let transport = FakeTransport::new()
            .route(Method::GET, "/usuarios/", 500, "")
            .route_json(Method::GET, "/canciones/", 200, json!([song_json(1, "Imagine")]))
            .route_json(Method::GET, "/favoritos/", 200, json!([]));

        let (result, events) = run(&transport, AppTask::LoadAll);

        assert!(result.is_ok());
        assert_eq!(
            transport.call_lines(),
            vec!["GET http://api.test/health", "GET /usuarios/", "GET /canciones/", "GET /favoritos/"]
        );
        assert_eq!(events[0], AppEvent::HealthChecked(None));
        assert_eq!(alerts(&events).len(), 1);
        assert!(events.iter().any(|e| matches!(e, AppEvent::SongsLoaded(songs) if songs.len() == 1)));
    }
}
