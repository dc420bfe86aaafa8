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

//! Domain models for the music API.
//!
//! These types mirror the JSON payloads served by the API. The wire format
//! uses Spanish field names, which are mapped onto the Rust names with serde
//! renames. Records are snapshots: they are fetched, rendered once, and then
//! replaced wholesale on the next fetch.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub(crate) type UserId = i64;
pub(crate) type SongId = i64;
pub(crate) type FavouriteId = i64;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct User {
    pub(crate) id: UserId,
    #[serde(rename = "nombre")]
    pub(crate) name: String,
    #[serde(rename = "correo")]
    pub(crate) email: String,
    #[serde(rename = "fecha_registro")]
    pub(crate) registered_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    #[serde(rename = "titulo")]
    pub(crate) title: String,
    #[serde(rename = "artista")]
    pub(crate) artist: String,
    #[serde(default)]
    pub(crate) album: Option<String>,
    /// Length of the song in seconds.
    #[serde(rename = "duracion")]
    pub(crate) duration: u32,
    #[serde(rename = "año", default)]
    pub(crate) year: Option<i32>,
    #[serde(rename = "genero", default)]
    pub(crate) genre: Option<String>,
    #[serde(rename = "fecha_creacion", default)]
    pub(crate) created_at: Option<NaiveDateTime>,
}

impl Song {
    /// Whether the song should stay visible under the given filter text.
    ///
    /// Matches case-insensitively against the title or the artist. An empty
    /// filter matches everything.
    pub(crate) fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        filter.is_empty()
            || self.title.to_lowercase().contains(&filter)
            || self.artist.to_lowercase().contains(&filter)
    }
}

/// A favourite as returned by the aggregate listing, without song details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Favourite {
    pub(crate) id: FavouriteId,
    #[serde(rename = "usuario_id")]
    pub(crate) user_id: UserId,
    #[serde(rename = "cancion_id")]
    pub(crate) song_id: SongId,
    #[serde(rename = "fecha_agregado")]
    pub(crate) added_at: NaiveDateTime,
}

/// A favourite with the referenced song embedded, as returned by the per-user
/// listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct FavouriteDetail {
    pub(crate) id: FavouriteId,
    #[serde(rename = "usuario_id")]
    pub(crate) user_id: UserId,
    #[serde(rename = "fecha_agregado")]
    pub(crate) added_at: NaiveDateTime,
    #[serde(rename = "cancion")]
    pub(crate) song: Song,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct NewUser {
    #[serde(rename = "nombre")]
    pub(crate) name: String,
    #[serde(rename = "correo")]
    pub(crate) email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct NewSong {
    #[serde(rename = "titulo")]
    pub(crate) title: String,
    #[serde(rename = "artista")]
    pub(crate) artist: String,
    pub(crate) album: Option<String>,
    /// `None` when the input did not parse; the server rejects it.
    #[serde(rename = "duracion")]
    pub(crate) duration: Option<u32>,
    /// Sent as typed, out of range years included.
    #[serde(rename = "año")]
    pub(crate) year: Option<i64>,
    #[serde(rename = "genero")]
    pub(crate) genre: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct NewFavourite {
    #[serde(rename = "usuario_id")]
    pub(crate) user_id: UserId,
    #[serde(rename = "cancion_id")]
    pub(crate) song_id: SongId,
}

/// Service status as reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Health {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_user_from_api_payload() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "nombre": "Ana",
            "correo": "ana@example.com",
            "fecha_registro": "2024-05-01T10:20:30.123456"
        }))
        .unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.registered_at.format("%d/%m/%Y").to_string(), "01/05/2024");
    }

    #[test]
    fn test_favourite_detail_embeds_song() {
        let favourite: FavouriteDetail = serde_json::from_value(json!({
            "id": 9,
            "usuario_id": 3,
            "cancion_id": 4,
            "fecha_agregado": "2024-05-02T08:00:00",
            "cancion": {
                "id": 4,
                "titulo": "Bohemian Rhapsody",
                "artista": "Queen",
                "album": null,
                "duracion": 354,
                "año": 1975,
                "genero": "Rock",
                "fecha_creacion": "2024-05-01T00:00:00"
            }
        }))
        .unwrap();

        assert_eq!(favourite.song.title, "Bohemian Rhapsody");
        assert_eq!(favourite.song.year, Some(1975));
        assert_eq!(favourite.song.album, None);
    }

    #[test]
    fn test_new_song_serializes_empty_optionals_as_null() {
        let song = NewSong {
            title: "Imagine".to_string(),
            artist: "John Lennon".to_string(),
            album: None,
            duration: Some(183),
            year: None,
            genre: None,
        };

        assert_eq!(
            serde_json::to_value(&song).unwrap(),
            json!({
                "titulo": "Imagine",
                "artista": "John Lennon",
                "album": null,
                "duracion": 183,
                "año": null,
                "genero": null
            })
        );
    }

    #[rstest]
    #[case("", true)]
    #[case("queen", true)]
    #[case("RHAP", true)]
    #[case("beatles", false)]
    fn test_song_filter(#[case] filter: &str, #[case] expected: bool) {
        let song = Song {
            id: 1,
            title: "Bohemian Rhapsody".to_string(),
            artist: "Queen".to_string(),
            album: None,
            duration: 354,
            year: None,
            genre: None,
            created_at: None,
        };

        assert_eq!(song.matches_filter(filter), expected);
    }
}
