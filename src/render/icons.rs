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

//! Unicode symbols for the TUI.
//!
//! Text-style variants (using Variation Selector-15 [\u{FE0E}]) force
//! terminals to render the icons as monochrome text rather than colorful
//! emojis, so they respect the TUI's color styling.

pub(crate) const ICON_USER: &str = "\u{263A}\u{FE0E}";
pub(crate) const ICON_SONG: &str = "\u{266B}";
pub(crate) const ICON_HEART: &str = "\u{2764}\u{FE0E}";
pub(crate) const ICON_CLOCK: &str = "\u{23F1}\u{FE0E}";
pub(crate) const ICON_CALENDAR: &str = "\u{1F4C5}\u{FE0E}";
pub(crate) const ICON_MAIL: &str = "\u{2709}\u{FE0E}";
pub(crate) const ICON_GENRE: &str = "\u{266A}";

pub(crate) const ICON_ONLINE: &str = "\u{25CF}";
pub(crate) const ICON_OFFLINE: &str = "\u{25CB}";
