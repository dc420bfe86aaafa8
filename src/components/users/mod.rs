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

//! Users slice: the registered users and the registration form.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::{
        Pane, clamp,
        form::{Field, Form},
    },
    model::{NewUser, User},
};

pub(crate) const USER_FORM: &str = "form-usuario";
pub(crate) const USER_NAME: &str = "usuario-nombre";
pub(crate) const USER_EMAIL: &str = "usuario-correo";

pub(crate) const NO_USERS: &str = "No users registered";

pub(crate) struct UsersView {
    pub(crate) users: Vec<User>,
    pub(crate) list_state: ListState,
    pub(crate) form: Form,
    pub(crate) pane: Pane,
}

impl UsersView {
    pub(crate) fn new() -> Self {
        Self {
            users: vec![],
            list_state: ListState::default(),
            form: Form::new(
                USER_FORM,
                "Register user",
                vec![Field::text(USER_NAME, "Name"), Field::text(USER_EMAIL, "Email")],
            ),
            pane: Pane::List,
        }
    }

    pub(crate) fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        clamp(&mut self.list_state, self.users.len());
    }

    pub(crate) fn selected_user(&self) -> Option<&User> {
        self.users.get(self.list_state.selected()?)
    }

    /// Reads the registration form. Values are sent as typed.
    pub(crate) fn submission(&self) -> NewUser {
        NewUser {
            name: self.form.value(USER_NAME).to_string(),
            email: self.form.value(USER_EMAIL).to_string(),
        }
    }
}
