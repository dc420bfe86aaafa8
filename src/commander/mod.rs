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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching a corresponding
//! application event when typing is finished and a command is submitted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, alerts::Alert, events::AppEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    ShowView(MainView),
    /// Fetch every slice again.
    Reload,
    /// Song filter text, empty to clear.
    Filter(String),
    Health,
}

impl Command {
    /// Parses a command line. Returns a message for unknown commands.
    pub(crate) fn parse(buffer: &str) -> Result<Self, String> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] | ["quit"] => Ok(Command::Quit),

            ["1"] | ["users"] => Ok(Command::ShowView(MainView::Users)),
            ["2"] | ["songs"] => Ok(Command::ShowView(MainView::Songs)),
            ["3"] | ["favourites"] => Ok(Command::ShowView(MainView::Favourites)),

            ["reload"] | ["r"] => Ok(Command::Reload),
            ["health"] => Ok(Command::Health),

            ["filter", filter_parts @ ..] => Ok(Command::Filter(filter_parts.join(" "))),

            [cmd, ..] => Err(format!("Unknown command: {}", cmd)),

            [] => Err("Empty command".to_string()),
        }
    }
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Feeds a key to the command line. Returns whether the key was consumed.
    ///
    /// `:` opens the command line; while open it takes every key. `Enter`
    /// runs the command and closes it, `Esc` closes it without running.
    pub(crate) fn handle_event(&mut self, key: KeyEvent, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.active {
            if key.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.active = false;
                self.input.reset();

                if !buffer.is_empty() {
                    let event = match Command::parse(&buffer) {
                        Ok(command) => AppEvent::RunCommand(command),
                        Err(message) => AppEvent::Alert(Alert::warning(message)),
                    };
                    event_tx.send(event)?;
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(&Event::Key(key));
            }
        }

        Ok(true)
    }
}
