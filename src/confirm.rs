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

//! Confirmation prompt for destructive actions.
//!
//! A pending [`Confirm`] holds the task to run once the user agrees. While it
//! is shown it captures every key.

use crossterm::event::{KeyCode, KeyEvent};

use crate::tasks::AppTask;

#[derive(Debug)]
pub(crate) struct Confirm {
    pub(crate) message: String,
    pub(crate) task: AppTask,
}

/// The user's answer to a prompt.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Answer {
    Yes,
    No,
    Pending,
}

impl Confirm {
    pub(crate) fn new(message: impl Into<String>, task: AppTask) -> Self {
        Self {
            message: message.into(),
            task,
        }
    }

    pub(crate) fn answer(key: KeyEvent) -> Answer {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Answer::Yes,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Answer::No,
            _ => Answer::Pending,
        }
    }
}
