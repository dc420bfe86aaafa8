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

//! Client for the music REST API.
//!
//! Every call goes through [`ApiClient::request`], which implements the one
//! contract shared by all endpoints:
//!
//! * a non-success status becomes an [`ApiError`] carrying the server's
//!   `detail` message, or a fallback;
//! * a successful `DELETE` yields [`ApiResponse::Deleted`] without touching
//!   the body;
//! * any other success is parsed as JSON.
//!
//! Surfacing failures to the user is left to the caller, see
//! [`crate::tasks`].

mod error;
mod transport;

pub(crate) use error::{ApiError, FALLBACK_MESSAGE};
pub(crate) use transport::{HttpTransport, RawResponse, Transport};

use log::debug;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::model::{
    Favourite, FavouriteDetail, FavouriteId, Health, NewFavourite, NewSong, NewUser, Song, SongId,
    User, UserId,
};

pub(crate) const USERS: &str = "/usuarios/";
pub(crate) const SONGS: &str = "/canciones/";
pub(crate) const FAVOURITES: &str = "/favoritos/";

/// Outcome of a successful request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiResponse {
    /// Marker for a completed `DELETE`; such responses have no content.
    Deleted,
    Json(Value),
}

pub(crate) struct ApiClient<T = HttpTransport> {
    transport: T,
    origin: String,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client for the API served at `origin` under `prefix`, for
    /// example `http://localhost:8000` and `/api`.
    pub(crate) fn new(transport: T, origin: &str, prefix: &str) -> Self {
        let origin = origin.trim_end_matches('/').to_string();
        let base_url = format!("{}/{}", origin, prefix.trim_matches('/'));

        Self {
            transport,
            origin,
            base_url,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request to `endpoint`, relative to the API base URL.
    pub(crate) fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.execute(&url, method, body)
    }

    fn execute(&self, url: &str, method: Method, body: Option<&Value>) -> Result<ApiResponse, ApiError> {
        debug!("{} {}", method, url);

        let response = self.transport.send(method.clone(), url, body)?;

        if !response.is_success() {
            return Err(ApiError::from_response(response.status, &response.body));
        }

        if method == Method::DELETE {
            return Ok(ApiResponse::Deleted);
        }

        Ok(ApiResponse::Json(serde_json::from_slice(&response.body)?))
    }

    fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        let response = self.request(endpoint, Method::GET, None)?;
        decode(response)
    }

    fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body)?;
        match self.request(endpoint, Method::POST, Some(&body))? {
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::Deleted => Ok(Value::Null),
        }
    }

    fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.request(endpoint, Method::DELETE, None).map(|_| ())
    }

    pub(crate) fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get(USERS)
    }

    pub(crate) fn create_user(&self, user: &NewUser) -> Result<Value, ApiError> {
        self.post(USERS, user)
    }

    pub(crate) fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.delete(&format!("{}{}", USERS, id))
    }

    pub(crate) fn list_songs(&self) -> Result<Vec<Song>, ApiError> {
        self.get(SONGS)
    }

    pub(crate) fn create_song(&self, song: &NewSong) -> Result<Value, ApiError> {
        self.post(SONGS, song)
    }

    pub(crate) fn delete_song(&self, id: SongId) -> Result<(), ApiError> {
        self.delete(&format!("{}{}", SONGS, id))
    }

    pub(crate) fn list_favourites(&self) -> Result<Vec<Favourite>, ApiError> {
        self.get(FAVOURITES)
    }

    pub(crate) fn list_user_favourites(&self, user_id: UserId) -> Result<Vec<FavouriteDetail>, ApiError> {
        self.get(&format!("{}usuario/{}", FAVOURITES, user_id))
    }

    pub(crate) fn add_favourite(&self, favourite: &NewFavourite) -> Result<Value, ApiError> {
        self.post(FAVOURITES, favourite)
    }

    pub(crate) fn delete_favourite(&self, id: FavouriteId) -> Result<(), ApiError> {
        self.delete(&format!("{}{}", FAVOURITES, id))
    }

    /// Queries the service health endpoint, which lives at the origin rather
    /// than under the API prefix.
    pub(crate) fn health(&self) -> Result<Health, ApiError> {
        let url = format!("{}/health", self.origin);
        decode(self.execute(&url, Method::GET, None)?)
    }
}

fn decode<R: DeserializeOwned>(response: ApiResponse) -> Result<R, ApiError> {
    match response {
        ApiResponse::Json(value) => Ok(serde_json::from_value(value)?),
        ApiResponse::Deleted => Err(ApiError::new("Unexpected empty response")),
    }
}
