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

//! Favourites slice: linking users to songs and browsing one user's
//! favourites.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::{
        Pane, clamp,
        form::{Field, Form, Selector},
    },
    model::{FavouriteDetail, Song, User, UserId},
};

pub(crate) const FAVOURITE_FORM: &str = "form-favorito";
pub(crate) const FAVOURITE_USER: &str = "favorito-usuario";
pub(crate) const FAVOURITE_SONG: &str = "favorito-cancion";
pub(crate) const FAVOURITE_VIEWER: &str = "ver-favoritos-usuario";

pub(crate) const SELECT_USER: &str = "Select a user...";
pub(crate) const SELECT_SONG: &str = "Select a song...";

pub(crate) const NO_USER_SELECTED: &str = "Select a user to see their favourite songs";
pub(crate) const NO_FAVOURITES: &str = "This user has no favourite songs yet";
pub(crate) const LOADING: &str = "Loading...";
pub(crate) const LOAD_FAILED: &str = "Could not load favourites, press r to retry";

pub(crate) struct FavouritesView {
    pub(crate) form: Form,
    /// Whose favourites are listed.
    pub(crate) viewer: Selector,
    /// `None` until the list for the viewed user has arrived.
    pub(crate) favourites: Option<Vec<FavouriteDetail>>,
    /// The last load for the viewed user failed.
    pub(crate) load_failed: bool,
    pub(crate) list_state: ListState,
    pub(crate) pane: Pane,
}

fn user_options(users: &[User]) -> Vec<(i64, String)> {
    users
        .iter()
        .map(|user| (user.id, format!("{} ({})", user.name, user.email)))
        .collect()
}

fn song_options(songs: &[Song]) -> Vec<(i64, String)> {
    songs
        .iter()
        .map(|song| (song.id, format!("{} - {}", song.title, song.artist)))
        .collect()
}

impl FavouritesView {
    pub(crate) fn new() -> Self {
        Self {
            form: Form::new(
                FAVOURITE_FORM,
                "Add favourite",
                vec![
                    Field::select(FAVOURITE_USER, "User", SELECT_USER),
                    Field::select(FAVOURITE_SONG, "Song", SELECT_SONG),
                ],
            ),
            viewer: Selector::new(SELECT_USER),
            favourites: None,
            load_failed: false,
            list_state: ListState::default(),
            pane: Pane::List,
        }
    }

    pub(crate) fn viewing(&self) -> Option<UserId> {
        self.viewer.selected
    }

    /// Repopulates both user selectors. Losing the viewed user clears the
    /// favourites list.
    pub(crate) fn set_user_options(&mut self, users: &[User]) {
        let options = user_options(users);
        if let Some(selector) = self.form.selector_mut(FAVOURITE_USER) {
            selector.set_options(options.clone());
        }
        self.viewer.set_options(options);
        if self.viewer.selected.is_none() {
            self.clear_favourites();
        }
    }

    pub(crate) fn set_song_options(&mut self, songs: &[Song]) {
        if let Some(selector) = self.form.selector_mut(FAVOURITE_SONG) {
            selector.set_options(song_options(songs));
        }
    }

    /// Stores the favourites of `user_id` if that user is still the one being
    /// viewed. Returns `false` when the list arrived too late and was dropped.
    pub(crate) fn set_favourites(&mut self, user_id: UserId, favourites: Vec<FavouriteDetail>) -> bool {
        if self.viewing() != Some(user_id) {
            return false;
        }
        clamp(&mut self.list_state, favourites.len());
        self.favourites = Some(favourites);
        self.load_failed = false;
        true
    }

    /// Records that loading the favourites of `user_id` failed. Whatever was
    /// listed is dropped, as it may no longer match the server.
    pub(crate) fn set_load_failed(&mut self, user_id: UserId) {
        if self.viewing() == Some(user_id) {
            self.clear_favourites();
            self.load_failed = true;
        }
    }

    pub(crate) fn clear_favourites(&mut self) {
        self.favourites = None;
        self.load_failed = false;
        self.list_state.select(None);
    }

    pub(crate) fn selected_favourite(&self) -> Option<&FavouriteDetail> {
        self.favourites.as_ref()?.get(self.list_state.selected()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use pretty_assertions::assert_eq;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name),
            registered_at: NaiveDateTime::default(),
        }
    }

    fn song(id: i64) -> Song {
        Song {
            id,
            title: "Heroes".to_string(),
            artist: "David Bowie".to_string(),
            album: None,
            duration: 371,
            year: Some(1977),
            genre: None,
            created_at: None,
        }
    }

    fn favourite(id: i64, user_id: i64) -> FavouriteDetail {
        FavouriteDetail {
            id,
            user_id,
            added_at: NaiveDateTime::default(),
            song: song(id),
        }
    }

    #[test]
    fn test_option_labels() {
        let mut view = FavouritesView::new();
        view.set_user_options(&[user(1, "ana")]);
        view.set_song_options(&[song(3)]);

        let users = view.form.selector_mut(FAVOURITE_USER).unwrap().options.clone();
        let songs = view.form.selector_mut(FAVOURITE_SONG).unwrap().options.clone();

        assert_eq!(users, vec![(1, "ana (ana@example.com)".to_string())]);
        assert_eq!(songs, vec![(3, "Heroes - David Bowie".to_string())]);
        assert_eq!(view.viewer.options, users);
    }

    #[test]
    fn test_losing_viewed_user_clears_favourites() {
        let mut view = FavouritesView::new();
        view.set_user_options(&[user(1, "ana"), user(2, "luis")]);
        view.viewer.selected = Some(2);
        assert!(view.set_favourites(2, vec![favourite(10, 2)]));

        view.set_user_options(&[user(1, "ana"), user(2, "luis")]);
        assert_eq!(view.favourites.as_ref().map(Vec::len), Some(1));

        view.set_user_options(&[user(1, "ana")]);
        assert_eq!(view.viewing(), None);
        assert_eq!(view.favourites, None);
    }

    #[test]
    fn test_stale_favourites_are_dropped() {
        let mut view = FavouritesView::new();
        view.set_user_options(&[user(1, "ana"), user(2, "luis")]);
        view.viewer.selected = Some(1);

        assert!(!view.set_favourites(2, vec![favourite(10, 2)]));
        assert_eq!(view.favourites, None);
    }

    #[test]
    fn test_failed_load_replaces_listed_favourites() {
        let mut view = FavouritesView::new();
        view.set_user_options(&[user(1, "ana"), user(2, "luis")]);
        view.viewer.selected = Some(1);
        view.set_favourites(1, vec![favourite(10, 1)]);

        view.set_load_failed(2);
        assert!(!view.load_failed);
        assert!(view.favourites.is_some());

        view.set_load_failed(1);
        assert!(view.load_failed);
        assert_eq!(view.favourites, None);

        view.set_favourites(1, vec![]);
        assert!(!view.load_failed);
    }
}
