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

//! Songs slice: the catalog, its filter, and the form used to add songs.

mod event;
mod render;

use ratatui::widgets::ListState;
use tui_input::Input;

use crate::{
    components::{
        Pane, clamp,
        form::{Field, Form},
    },
    model::{NewSong, Song},
};

pub(crate) const SONG_FORM: &str = "form-cancion";
pub(crate) const SONG_TITLE: &str = "cancion-titulo";
pub(crate) const SONG_ARTIST: &str = "cancion-artista";
pub(crate) const SONG_ALBUM: &str = "cancion-album";
pub(crate) const SONG_DURATION: &str = "cancion-duracion";
pub(crate) const SONG_YEAR: &str = "cancion-año";
pub(crate) const SONG_GENRE: &str = "cancion-genero";

pub(crate) const NO_SONGS: &str = "No songs in the catalog";
pub(crate) const NO_MATCHES: &str = "No songs match the filter";

pub(crate) struct SongsView {
    pub(crate) songs: Vec<Song>,
    pub(crate) list_state: ListState,
    pub(crate) form: Form,
    /// The `filtro-canciones` input.
    pub(crate) filter: Input,
    pub(crate) pane: Pane,
}

impl SongsView {
    pub(crate) fn new() -> Self {
        Self {
            songs: vec![],
            list_state: ListState::default(),
            form: Form::new(
                SONG_FORM,
                "Add song",
                vec![
                    Field::text(SONG_TITLE, "Title"),
                    Field::text(SONG_ARTIST, "Artist"),
                    Field::text(SONG_ALBUM, "Album"),
                    Field::number(SONG_DURATION, "Duration (s)"),
                    Field::number(SONG_YEAR, "Year"),
                    Field::text(SONG_GENRE, "Genre"),
                ],
            ),
            filter: Input::default(),
            pane: Pane::List,
        }
    }

    pub(crate) fn set_songs(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        self.clamp_selection();
    }

    pub(crate) fn set_filter(&mut self, text: &str) {
        self.filter = Input::new(text.to_string());
        self.clamp_selection();
    }

    pub(crate) fn clamp_selection(&mut self) {
        let len = self.visible_songs().len();
        clamp(&mut self.list_state, len);
    }

    /// Songs left after applying the filter, in catalog order.
    pub(crate) fn visible_songs(&self) -> Vec<&Song> {
        let filter = self.filter.value();
        self.songs.iter().filter(|song| song.matches_filter(filter)).collect()
    }

    pub(crate) fn selected_song(&self) -> Option<&Song> {
        let index = self.list_state.selected()?;
        self.visible_songs().get(index).copied()
    }

    /// Reads the song form.
    ///
    /// Title and artist are sent as typed, blank optional fields as `null`.
    /// A duration that does not parse is sent as `null` for the server to
    /// reject.
    pub(crate) fn submission(&self) -> NewSong {
        NewSong {
            title: self.form.value(SONG_TITLE).to_string(),
            artist: self.form.value(SONG_ARTIST).to_string(),
            album: self.form.optional_value(SONG_ALBUM),
            duration: self.form.value(SONG_DURATION).trim().parse().ok(),
            year: self
                .form
                .optional_value(SONG_YEAR)
                .and_then(|year| year.parse().ok()),
            genre: self.form.optional_value(SONG_GENRE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn song(id: i64, title: &str, artist: &str) -> Song {
        Song {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: None,
            duration: 200,
            year: None,
            genre: None,
            created_at: None,
        }
    }

    #[test]
    fn test_filter_hides_songs_and_keeps_selection_in_range() {
        let mut view = SongsView::new();
        view.set_songs(vec![
            song(1, "Yesterday", "The Beatles"),
            song(2, "Bohemian Rhapsody", "Queen"),
            song(3, "Let It Be", "The Beatles"),
        ]);
        view.list_state.select(Some(2));

        view.set_filter("queen");

        assert_eq!(view.visible_songs().len(), 1);
        assert_eq!(view.selected_song().map(|s| s.id), Some(2));

        view.set_filter("");
        assert_eq!(view.visible_songs().len(), 3);
    }

    #[test]
    fn test_submission_maps_blank_fields_to_none() {
        let mut view = SongsView::new();
        view.form.set_value(SONG_TITLE, "Imagine");
        view.form.set_value(SONG_ARTIST, "John Lennon");
        view.form.set_value(SONG_DURATION, "183");
        view.form.set_value(SONG_GENRE, "  ");

        assert_eq!(
            view.submission(),
            NewSong {
                title: "Imagine".to_string(),
                artist: "John Lennon".to_string(),
                album: None,
                duration: Some(183),
                year: None,
                genre: None,
            }
        );
    }

    #[test]
    fn test_submission_sends_unparsed_duration_as_none() {
        let mut view = SongsView::new();
        view.form.set_value(SONG_TITLE, "Imagine");
        view.form.set_value(SONG_YEAR, "1971");

        let submission = view.submission();

        assert_eq!(submission.duration, None);
        assert_eq!(submission.year, Some(1971));
    }

    #[test]
    fn test_out_of_range_year_still_reaches_server() {
        let mut view = SongsView::new();
        view.form.set_value(SONG_TITLE, "Imagine");
        view.form.set_value(SONG_DURATION, "183");
        view.form.set_value(SONG_YEAR, "99999999999");

        let body = serde_json::to_value(view.submission()).unwrap();

        assert_eq!(body["año"], serde_json::json!(99999999999_i64));
    }
}
