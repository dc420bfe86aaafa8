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

use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    components::{Pane, UsersView, ViewRequest, form::FormAction, next, previous},
    confirm::Confirm,
    tasks::AppTask,
};

impl UsersView {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<ViewRequest> {
        if self.pane == Pane::Form {
            return match self.form.process_key(key) {
                FormAction::Submit => Some(ViewRequest::Task(AppTask::CreateUser(self.submission()))),
                FormAction::Leave => {
                    self.pane = Pane::List;
                    None
                }
                FormAction::None => None,
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => next(&mut self.list_state, self.users.len()),
            KeyCode::Char('k') | KeyCode::Up => previous(&mut self.list_state, self.users.len()),
            KeyCode::Char('g') => self.list_state.select_first(),
            KeyCode::Char('G') => self.list_state.select(self.users.len().checked_sub(1)),

            KeyCode::Tab | KeyCode::Char('a') => self.pane = Pane::Form,
            KeyCode::Char('r') => return Some(ViewRequest::Task(AppTask::LoadUsers)),

            KeyCode::Char('d') | KeyCode::Delete => {
                let user = self.selected_user()?;
                return Some(ViewRequest::Confirm(Confirm::new(
                    format!("Delete user {}? Their favourites will be deleted too.", user.name),
                    AppTask::DeleteUser(user.id),
                )));
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        components::{Pane, UsersView, ViewRequest},
        model::User,
        tasks::AppTask,
    };
    use chrono::NaiveDateTime;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name),
            registered_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_delete_asks_for_confirmation_of_selected_user() {
        let mut view = UsersView::new();
        view.set_users(vec![user(1, "ana"), user(2, "luis")]);
        view.process_key(key(KeyCode::Down));

        let Some(ViewRequest::Confirm(confirm)) = view.process_key(key(KeyCode::Char('d'))) else {
            panic!("expected a confirmation");
        };

        assert_eq!(confirm.task, AppTask::DeleteUser(2));
        assert!(confirm.message.contains("luis"));
    }

    #[test]
    fn test_delete_on_empty_list_does_nothing() {
        let mut view = UsersView::new();

        assert!(view.process_key(key(KeyCode::Char('d'))).is_none());
    }

    #[test]
    fn test_submitting_form_creates_user_without_resetting() {
        let mut view = UsersView::new();
        view.process_key(key(KeyCode::Tab));
        assert_eq!(view.pane, Pane::Form);

        for c in "Ana".chars() {
            view.process_key(key(KeyCode::Char(c)));
        }
        view.process_key(key(KeyCode::Tab));
        for c in "ana@example.com".chars() {
            view.process_key(key(KeyCode::Char(c)));
        }

        let Some(ViewRequest::Task(AppTask::CreateUser(new_user))) = view.process_key(key(KeyCode::Enter)) else {
            panic!("expected a create task");
        };

        assert_eq!(new_user.name, "Ana");
        assert_eq!(new_user.email, "ana@example.com");
        // The form only clears once the worker reports success.
        assert_eq!(view.submission(), new_user);
    }
}
