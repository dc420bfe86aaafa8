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

//! # Music API TUI.
//!
//! A terminal client for a music REST API that manages users, songs and
//! favourites.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background API worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all view state
//!   and renders the UI.
//! * A **Background Worker** performs API requests one at a time via task
//!   processing, reporting results back as events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.
//! The client keeps no cache: after every mutation the affected slice is
//! fetched again and its view rebuilt from the fresh snapshot.

mod alerts;
mod api;
mod commander;
mod components;
mod config;
mod confirm;
mod events;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    alerts::Alerts,
    api::{ApiClient, HttpTransport},
    commander::Commander,
    components::{FavouritesView, SongsView, UsersView},
    config::AppConfig,
    confirm::Confirm,
    events::{AppEvent, process_events},
    model::Health,
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Users,
    Songs,
    Favourites,
}

/// Result of the last health check.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ServiceStatus {
    Unknown,
    Online(Health),
    Offline,
}

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,

    pub(crate) theme: Theme,
    pub(crate) main_view: MainView,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_tx: Sender<AppTask>,

    pub(crate) commander: Commander,
    pub(crate) alerts: Alerts,
    pub(crate) confirm: Option<Confirm>,
    pub(crate) status: ServiceStatus,

    pub(crate) users_view: UsersView,
    pub(crate) songs_view: SongsView,
    pub(crate) favourites_view: FavouritesView,

    /// Size of the aggregate favourite listing, once loaded.
    pub(crate) favourites_total: Option<usize>,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let alert_lifetime = Duration::from_secs(config.alert_seconds);

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Users,
            event_tx,
            event_rx,
            task_tx,
            commander: Commander::new(),
            alerts: Alerts::new(alert_lifetime),
            confirm: None,
            status: ServiceStatus::Unknown,
            users_view: UsersView::new(),
            songs_view: SongsView::new(),
            favourites_view: FavouritesView::new(),
            favourites_total: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, sets up the communication
/// channels, manages the terminal lifecycle, and returns an error if any part
/// of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    util::logger::init_logger(&config.log_path())?;
    info!("Starting, API at {}{}", config.api_origin, config.api_prefix);

    let transport = HttpTransport::new().context("Failed to create HTTP client")?;
    let api = ApiClient::new(transport, &config.api_origin, &config.api_prefix);

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, api, task_rx);
    restore_terminal(&mut terminal);

    info!("Exiting");
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// Enables raw mode to capture all keyboard input and switches the terminal to
/// the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It also ensures the
/// cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s against the API.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to expire notifications and refresh the UI.
///
/// After spawning the workers, it queues the initial load and hands control
/// to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: ApiClient<HttpTransport>,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(api, task_rx, app.event_tx.clone());

    // Translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });

    // Periodic tick, the minimum "frame rate" and the clock for alert expiry.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.task_tx
        .send(AppTask::LoadAll)
        .context("Task worker is not running")?;

    process_events(terminal, app)
}
