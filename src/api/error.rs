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

//! The single error kind produced by the API client.

use serde::Deserialize;
use thiserror::Error;

/// Message used when a failed response carries no usable `detail`.
pub(crate) const FALLBACK_MESSAGE: &str = "Request failed";

/// A failed API request.
///
/// Carries a human-readable message taken from the server's `detail` field
/// when one is available, and the HTTP status when a response was received at
/// all. Connection failures and undecodable bodies have no status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub(crate) status: Option<u16>,
    pub(crate) message: String,
}

impl ApiError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Builds the error for a non-success response from its raw body.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        Self {
            status: Some(status),
            message: detail_message(body).unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::new(format!("Invalid response: {}", e))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Detail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Validation(Vec<ValidationIssue>),
    Other(serde_json::Value),
}

#[derive(Deserialize)]
struct ValidationIssue {
    msg: String,
}

/// Extracts the `detail` message from an error body, if there is a usable one.
///
/// Validation failures report a list of issues, which are joined into one
/// line.
fn detail_message(body: &[u8]) -> Option<String> {
    let detail = serde_json::from_slice::<ErrorBody>(body).ok()?.detail?;

    let message = match detail {
        Detail::Message(message) => message,
        Detail::Validation(issues) => issues
            .into_iter()
            .map(|issue| issue.msg)
            .collect::<Vec<_>>()
            .join("; "),
        Detail::Other(_) => return None,
    };

    (!message.is_empty()).then_some(message)
}
