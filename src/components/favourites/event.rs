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
    components::{
        FavouritesView, Pane, ViewRequest,
        favourites::{FAVOURITE_SONG, FAVOURITE_USER},
        form::FormAction,
        next, previous,
    },
    confirm::Confirm,
    tasks::AppTask,
};

impl FavouritesView {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<ViewRequest> {
        if self.pane == Pane::Form {
            return match self.form.process_key(key) {
                FormAction::Submit => Some(ViewRequest::Task(AppTask::AddFavourite {
                    user_id: self.form.selection(FAVOURITE_USER),
                    song_id: self.form.selection(FAVOURITE_SONG),
                    viewing: self.viewing(),
                })),
                FormAction::Leave => {
                    self.pane = Pane::List;
                    None
                }
                FormAction::None => None,
            };
        }

        let len = self.favourites.as_ref().map_or(0, Vec::len);

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => next(&mut self.list_state, len),
            KeyCode::Char('k') | KeyCode::Up => previous(&mut self.list_state, len),

            KeyCode::Char('l') | KeyCode::Right => {
                self.viewer.next();
                return self.view_changed();
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.viewer.previous();
                return self.view_changed();
            }

            KeyCode::Tab | KeyCode::Char('a') => self.pane = Pane::Form,
            KeyCode::Char('r') => {
                self.load_failed = false;
                return self
                    .viewing()
                    .map(|user_id| ViewRequest::Task(AppTask::LoadUserFavourites(user_id)));
            }

            KeyCode::Char('d') | KeyCode::Delete => {
                let favourite = self.selected_favourite()?;
                return Some(ViewRequest::Confirm(Confirm::new(
                    format!("Remove {} from favourites?", favourite.song.title),
                    AppTask::DeleteFavourite {
                        id: favourite.id,
                        viewing: self.viewing(),
                    },
                )));
            }

            _ => {}
        }

        None
    }

    fn view_changed(&mut self) -> Option<ViewRequest> {
        self.clear_favourites();
        let user_id = self.viewing()?;
        Some(ViewRequest::Task(AppTask::LoadUserFavourites(user_id)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        components::{FavouritesView, Pane, ViewRequest},
        model::User,
        tasks::AppTask,
    };
    use chrono::NaiveDateTime;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn users() -> Vec<User> {
        [(1, "ana"), (2, "luis")]
            .into_iter()
            .map(|(id, name)| User {
                id,
                name: name.to_string(),
                email: format!("{}@example.com", name),
                registered_at: NaiveDateTime::default(),
            })
            .collect()
    }

    #[test]
    fn test_changing_viewer_loads_favourites() {
        let mut view = FavouritesView::new();
        view.set_user_options(&users());

        let request = view.process_key(key(KeyCode::Right));
        assert!(matches!(request, Some(ViewRequest::Task(AppTask::LoadUserFavourites(1)))));

        let request = view.process_key(key(KeyCode::Left));
        assert!(request.is_none());
        assert_eq!(view.viewing(), None);
    }

    #[test]
    fn test_submit_carries_selection_and_viewer() {
        let mut view = FavouritesView::new();
        view.set_user_options(&users());
        view.process_key(key(KeyCode::Right));

        view.process_key(key(KeyCode::Tab));
        assert_eq!(view.pane, Pane::Form);
        view.process_key(key(KeyCode::Right));
        view.process_key(key(KeyCode::Right));

        let Some(ViewRequest::Task(task)) = view.process_key(key(KeyCode::Enter)) else {
            panic!("expected a task");
        };

        assert_eq!(
            task,
            AppTask::AddFavourite {
                user_id: Some(2),
                song_id: None,
                viewing: Some(1),
            }
        );
    }
}
