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

//! Input handling for forms.
//!
//! Maps key events to focus changes, selector choices and text edits, and
//! reports when the user submits or leaves the form.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::components::form::{FieldKind, Form, FormAction, MAX_DIGITS};

impl Form {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Esc => return FormAction::Leave,
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                return FormAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                return FormAction::None;
            }
            _ => {}
        }

        let Some(field) = self.fields.get_mut(self.active) else {
            return FormAction::None;
        };

        match &mut field.kind {
            FieldKind::Select(selector) => match key.code {
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => selector.next(),
                KeyCode::Left | KeyCode::Char('h') => selector.previous(),
                _ => {}
            },
            FieldKind::Text(text) => {
                let accepted = match key.code {
                    KeyCode::Char(c) => {
                        !text.numeric || (c.is_ascii_digit() && text.input.value().len() < MAX_DIGITS)
                    }
                    _ => true,
                };
                if accepted {
                    text.input.handle_event(&Event::Key(key));
                }
            }
        }

        FormAction::None
    }
}

#[cfg(test)]
mod tests {
    use crate::components::form::{Field, Form, FormAction};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.process_key(key(KeyCode::Char(c)));
        }
    }

    fn song_form() -> Form {
        let mut form = Form::new(
            "form-test",
            "Test",
            vec![
                Field::text("title", "Title"),
                Field::number("duration", "Duration"),
                Field::select("user", "User", "Select a user..."),
            ],
        );
        form.selector_mut("user")
            .unwrap()
            .set_options(vec![(1, "Ana".to_string()), (2, "Luis".to_string())]);
        form
    }

    #[test]
    fn test_typing_goes_to_active_field() {
        let mut form = song_form();

        type_text(&mut form, "Yesterday");
        form.process_key(key(KeyCode::Tab));
        type_text(&mut form, "1a2x5");

        assert_eq!(form.value("title"), "Yesterday");
        assert_eq!(form.value("duration"), "125");
    }

    #[test]
    fn test_numeric_field_stops_at_max_digits() {
        let mut form = song_form();
        form.process_key(key(KeyCode::Tab));

        type_text(&mut form, "99999999999");

        assert_eq!(form.value("duration"), "999999999");
        assert_eq!(form.value("duration").parse::<u32>(), Ok(999_999_999));
    }

    #[test]
    fn test_backspace_edits_text() {
        let mut form = song_form();

        type_text(&mut form, "Yesterdayy");
        form.process_key(key(KeyCode::Backspace));

        assert_eq!(form.value("title"), "Yesterday");
    }

    #[test]
    fn test_selector_keys_change_choice() {
        let mut form = song_form();
        form.process_key(key(KeyCode::BackTab));

        form.process_key(key(KeyCode::Right));
        assert_eq!(form.selection("user"), Some(1));
        form.process_key(key(KeyCode::Right));
        assert_eq!(form.selection("user"), Some(2));
        form.process_key(key(KeyCode::Left));
        assert_eq!(form.selection("user"), Some(1));
    }

    #[test]
    fn test_enter_and_escape_are_reported() {
        let mut form = song_form();

        assert_eq!(form.process_key(key(KeyCode::Enter)), FormAction::Submit);
        assert_eq!(form.process_key(key(KeyCode::Esc)), FormAction::Leave);
        assert_eq!(form.process_key(key(KeyCode::Char('x'))), FormAction::None);
    }
}
