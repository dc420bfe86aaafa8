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

//! Data entry forms.
//!
//! A [`Form`] is an ordered list of named fields, either free text or a
//! selector over record identifiers. Fields are addressed by their region
//! identifier (`usuario-nombre`, `favorito-cancion` and so on), so the slices
//! read their submissions the same way regardless of layout.

mod event;
mod render;

use tui_input::Input;

/// Result of feeding a key to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    Submit,
    Leave,
    None,
}

/// Longest input a numeric field accepts, so that every value typed into one
/// parses as a number.
pub(crate) const MAX_DIGITS: usize = 9;

pub(crate) struct TextField {
    pub(crate) input: Input,
    /// Only accepts up to [`MAX_DIGITS`] ASCII digits when set.
    pub(crate) numeric: bool,
}

/// A drop-down style choice over record identifiers.
///
/// The empty choice is represented by `selected == None` and shown as the
/// placeholder text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Selector {
    pub(crate) placeholder: &'static str,
    pub(crate) options: Vec<(i64, String)>,
    pub(crate) selected: Option<i64>,
}

impl Selector {
    pub(crate) fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            options: vec![],
            selected: None,
        }
    }

    /// Replaces the options, keeping the current selection if its identifier
    /// is still offered.
    pub(crate) fn set_options(&mut self, options: Vec<(i64, String)>) {
        self.options = options;
        if let Some(id) = self.selected {
            if !self.options.iter().any(|(option_id, _)| *option_id == id) {
                self.selected = None;
            }
        }
    }

    pub(crate) fn selected_label(&self) -> Option<&str> {
        let id = self.selected?;
        self.options
            .iter()
            .find(|(option_id, _)| *option_id == id)
            .map(|(_, label)| label.as_str())
    }

    /// Moves to the next choice, wrapping through the placeholder.
    pub(crate) fn next(&mut self) {
        self.selected = match self.position() {
            None => self.options.first().map(|(id, _)| *id),
            Some(i) => self.options.get(i + 1).map(|(id, _)| *id),
        };
    }

    /// Moves to the previous choice, wrapping through the placeholder.
    pub(crate) fn previous(&mut self) {
        self.selected = match self.position() {
            None => self.options.last().map(|(id, _)| *id),
            Some(0) => None,
            Some(i) => self.options.get(i - 1).map(|(id, _)| *id),
        };
    }

    fn position(&self) -> Option<usize> {
        let id = self.selected?;
        self.options.iter().position(|(option_id, _)| *option_id == id)
    }
}

pub(crate) enum FieldKind {
    Text(TextField),
    Select(Selector),
}

pub(crate) struct Field {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) kind: FieldKind,
}

impl Field {
    pub(crate) fn text(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Text(TextField {
                input: Input::default(),
                numeric: false,
            }),
        }
    }

    pub(crate) fn number(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Text(TextField {
                input: Input::default(),
                numeric: true,
            }),
        }
    }

    pub(crate) fn select(id: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Select(Selector::new(placeholder)),
        }
    }
}

pub(crate) struct Form {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) fields: Vec<Field>,
    pub(crate) active: usize,
}

impl Form {
    pub(crate) fn new(id: &'static str, title: &'static str, fields: Vec<Field>) -> Self {
        Self {
            id,
            title,
            fields,
            active: 0,
        }
    }

    fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Current text of a text field, empty for unknown or selector fields.
    pub(crate) fn value(&self, id: &str) -> &str {
        match self.field(id).map(|f| &f.kind) {
            Some(FieldKind::Text(text)) => text.input.value(),
            _ => "",
        }
    }

    /// Trimmed text of a text field, `None` when blank.
    pub(crate) fn optional_value(&self, id: &str) -> Option<String> {
        let value = self.value(id).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub(crate) fn set_value(&mut self, id: &str, value: &str) {
        if let Some(FieldKind::Text(text)) = self.fields.iter_mut().find(|f| f.id == id).map(|f| &mut f.kind) {
            text.input = Input::new(value.to_string());
        }
    }

    pub(crate) fn selection(&self, id: &str) -> Option<i64> {
        match self.field(id).map(|f| &f.kind) {
            Some(FieldKind::Select(selector)) => selector.selected,
            _ => None,
        }
    }

    pub(crate) fn selector_mut(&mut self, id: &str) -> Option<&mut Selector> {
        match self.fields.iter_mut().find(|f| f.id == id).map(|f| &mut f.kind) {
            Some(FieldKind::Select(selector)) => Some(selector),
            _ => None,
        }
    }

    /// Clears every field and moves focus back to the first one.
    ///
    /// Selector options are kept, only the choice is cleared.
    pub(crate) fn reset(&mut self) {
        for field in &mut self.fields {
            match &mut field.kind {
                FieldKind::Text(text) => text.input.reset(),
                FieldKind::Select(selector) => selector.selected = None,
            }
        }
        self.active = 0;
    }

    pub(crate) fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    pub(crate) fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + self.fields.len() - 1) % self.fields.len();
        }
    }
}
