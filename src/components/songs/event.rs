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

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{Pane, SongsView, ViewRequest, form::FormAction, next, previous},
    confirm::Confirm,
    model::UserId,
    tasks::AppTask,
};

impl SongsView {
    /// `viewing` is the user whose favourites are on screen, refreshed after
    /// a song is deleted.
    pub(crate) fn process_key(&mut self, key: KeyEvent, viewing: Option<UserId>) -> Option<ViewRequest> {
        match self.pane {
            Pane::Form => {
                return match self.form.process_key(key) {
                    FormAction::Submit => Some(ViewRequest::Task(AppTask::CreateSong(self.submission()))),
                    FormAction::Leave => {
                        self.pane = Pane::List;
                        None
                    }
                    FormAction::None => None,
                };
            }
            Pane::Filter => {
                match key.code {
                    KeyCode::Enter | KeyCode::Esc => self.pane = Pane::List,
                    _ => {
                        self.filter.handle_event(&Event::Key(key));
                        self.clamp_selection();
                    }
                }
                return None;
            }
            Pane::List => {}
        }

        let len = self.visible_songs().len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => next(&mut self.list_state, len),
            KeyCode::Char('k') | KeyCode::Up => previous(&mut self.list_state, len),
            KeyCode::Char('g') => self.list_state.select_first(),
            KeyCode::Char('G') => self.list_state.select(len.checked_sub(1)),

            KeyCode::Tab | KeyCode::Char('a') => self.pane = Pane::Form,
            KeyCode::Char('/') => self.pane = Pane::Filter,
            KeyCode::Char('r') => return Some(ViewRequest::Task(AppTask::LoadSongs)),

            KeyCode::Char('d') | KeyCode::Delete => {
                let song = self.selected_song()?;
                return Some(ViewRequest::Confirm(Confirm::new(
                    format!("Delete song {}? It will be removed from favourites too.", song.title),
                    AppTask::DeleteSong { id: song.id, viewing },
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
        components::{Pane, SongsView, ViewRequest},
        model::Song,
        tasks::AppTask,
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn song(id: i64, title: &str, artist: &str) -> Song {
        Song {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: None,
            duration: 200,
            year: None,
            genre: None,
            created_at: None,
        }
    }

    fn view() -> SongsView {
        let mut view = SongsView::new();
        view.set_songs(vec![song(1, "Yesterday", "The Beatles"), song(2, "Heroes", "David Bowie")]);
        view
    }

    #[test]
    fn test_typing_in_filter_pane_updates_filter() {
        let mut view = view();

        view.process_key(key(KeyCode::Char('/')), None);
        assert_eq!(view.pane, Pane::Filter);

        for c in "bowie".chars() {
            view.process_key(key(KeyCode::Char(c)), None);
        }
        view.process_key(key(KeyCode::Enter), None);

        assert_eq!(view.pane, Pane::List);
        assert_eq!(view.filter.value(), "bowie");
        assert_eq!(view.visible_songs().len(), 1);
    }

    #[test]
    fn test_delete_targets_song_under_filter() {
        let mut view = view();
        view.set_filter("heroes");

        let Some(ViewRequest::Confirm(confirm)) = view.process_key(key(KeyCode::Char('d')), Some(7)) else {
            panic!("expected a confirmation");
        };

        assert_eq!(confirm.task, AppTask::DeleteSong { id: 2, viewing: Some(7) });
    }

    #[test]
    fn test_leaving_form_keeps_values() {
        let mut view = view();
        view.process_key(key(KeyCode::Char('a')), None);
        view.process_key(key(KeyCode::Char('X')), None);
        view.process_key(key(KeyCode::Esc), None);

        assert_eq!(view.pane, Pane::List);
        assert_eq!(view.submission().title, "X");
    }
}
