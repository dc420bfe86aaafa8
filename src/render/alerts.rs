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

//! Render the notification stack.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::App;

const ALERT_WIDTH: u16 = 60;
const ALERT_HEIGHT: u16 = 3;

/// Stacks the active alerts at the top centre of `area`, oldest first.
pub(crate) fn draw_alerts(f: &mut Frame, area: Rect, app: &App) {
    let width = ALERT_WIDTH.min(area.width);
    let x = area.x + (area.width - width) / 2;

    for (i, alert) in app.alerts.iter().enumerate() {
        let y = area.y + i as u16 * ALERT_HEIGHT;
        if y + ALERT_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, ALERT_HEIGHT);
        let colour = app.theme.severity_colour(alert.severity);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colour));

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(alert.message.as_str())
                .style(Style::default().fg(colour))
                .block(block),
            rect,
        );
    }
}
