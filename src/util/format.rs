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

use chrono::NaiveDateTime;

/// Formats a duration in seconds into a `M:SS` string.
///
/// Minutes are not padded, seconds always use two digits.
///
/// # Examples
///
/// ```
/// assert_eq!(format_duration(65), "1:05");
/// assert_eq!(format_duration(600), "10:00");
/// ```
pub(crate) fn format_duration(total_seconds: u32) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Formats a timestamp as a `dd/mm/yyyy` date.
pub(crate) fn format_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%d/%m/%Y").to_string()
}
