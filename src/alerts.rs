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

//! Transient notifications.
//!
//! Alerts are pushed by task handlers and the UI, shown stacked at the top of
//! the screen, and dropped once their lifetime has passed. Expiry is checked
//! on every tick.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alert {
    pub(crate) severity: Severity,
    pub(crate) message: String,
}

impl Alert {
    pub(crate) fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub(crate) fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub(crate) fn danger(message: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message)
    }
}

pub(crate) struct Alerts {
    lifetime: Duration,
    active: Vec<(Alert, Instant)>,
}

impl Alerts {
    pub(crate) fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            active: vec![],
        }
    }

    pub(crate) fn push(&mut self, alert: Alert, now: Instant) {
        self.active.push((alert, now + self.lifetime));
    }

    /// Drops every alert whose deadline is at or before `now`.
    pub(crate) fn expire(&mut self, now: Instant) {
        self.active.retain(|(_, deadline)| *deadline > now);
    }

    pub(crate) fn clear(&mut self) {
        self.active.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Alerts currently shown, oldest first.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.active.iter().map(|(alert, _)| alert)
    }
}
