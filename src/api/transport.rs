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

//! HTTP transport used by the API client.
//!
//! The client only needs a status code and the raw body back from a request,
//! so the network layer is kept behind the small [`Transport`] trait. The
//! production implementation wraps a blocking `reqwest` client.

use reqwest::{Method, blocking::Client, header::CONTENT_TYPE};
use serde_json::Value;

use crate::api::ApiError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub(crate) status: u16,
    pub(crate) body: Vec<u8>,
}

impl RawResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) trait Transport: Send {
    /// Sends a request to an absolute URL, with an optional JSON body.
    ///
    /// Implementations only fail when no response was received.
    fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<RawResponse, ApiError>;
}

pub(crate) struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub(crate) fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<RawResponse, ApiError> {
        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = if reads_body(&method, status) {
            response.bytes()?.to_vec()
        } else {
            vec![]
        };

        Ok(RawResponse { status, body })
    }
}

/// A successful `DELETE` has no content worth reading. Error bodies are
/// always read for their `detail`.
fn reads_body(method: &Method, status: u16) -> bool {
    *method != Method::DELETE || !(200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::get(Method::GET, 200, true)]
    #[case::post(Method::POST, 201, true)]
    #[case::deleted(Method::DELETE, 204, false)]
    #[case::deleted_with_status_ok(Method::DELETE, 200, false)]
    #[case::delete_failed(Method::DELETE, 404, true)]
    fn test_reads_body(#[case] method: Method, #[case] status: u16, #[case] expected: bool) {
        assert_eq!(reads_body(&method, status), expected);
    }
}
