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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette, including the colors
//! used for each notification severity.

use ratatui::style::Color;

use crate::alerts::Severity;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) highlight_bg: Color,

    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) count_fg: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,

    pub(crate) title_fg: Color,
    pub(crate) artist_fg: Color,
    pub(crate) album_fg: Color,
    pub(crate) badge_fg: Color,
    pub(crate) heart_fg: Color,

    pub(crate) success_colour: Color,
    pub(crate) info_colour: Color,
    pub(crate) warning_colour: Color,
    pub(crate) danger_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            highlight_bg: Color::Rgb(60, 40, 90),

            text_fg: Color::Rgb(255, 255, 255),
            muted_fg: Color::Rgb(162, 161, 166),
            count_fg: Color::Rgb(250, 189, 47),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(50, 30, 60),

            title_fg: Color::Rgb(255, 255, 255),
            artist_fg: Color::Rgb(255, 215, 0),
            album_fg: Color::Rgb(179, 157, 219),
            badge_fg: Color::Rgb(162, 161, 166),
            heart_fg: Color::Rgb(220, 53, 69),

            success_colour: Color::Rgb(25, 135, 84),
            info_colour: Color::Rgb(13, 202, 240),
            warning_colour: Color::Rgb(255, 193, 7),
            danger_colour: Color::Rgb(220, 53, 69),
        }
    }

    pub(crate) fn severity_colour(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success_colour,
            Severity::Info => self.info_colour,
            Severity::Warning => self.warning_colour,
            Severity::Danger => self.danger_colour,
        }
    }
}
