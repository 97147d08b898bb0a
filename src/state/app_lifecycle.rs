//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Initial data fetching and session reloads

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::client::{ClusterClient, HttpConfig};
use crate::constants::TICK_RATE;
use crate::domain::GraphData;
use crate::tui::Tui;
use crate::ui;

use super::platform::clipboard::ClipboardManager;
use super::{App, AppConfig, AppMessage, DataState, StartupOptions, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance from the loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(startup: StartupOptions, mut config: AppConfig) -> Result<Self> {
        if let Some(server) = &startup.server {
            config.server_url.clone_from(server);
        }
        let client = ClusterClient::new(
            config.server_url.as_str(),
            HttpConfig::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::with_client(client, config, startup))
    }

    /// Creates an App around an existing client.
    #[must_use]
    pub fn with_client(client: ClusterClient, config: AppConfig, startup: StartupOptions) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let mut data = DataState::new();
        data.user_address.clone_from(&startup.address);

        Self {
            data,
            ui: UiState::new(),
            config,
            logged_in: false,
            exit: false,
            animation_tick: 0,
            session: 0,
            message_tx,
            message_rx,
            client,
            startup,
            clipboard: ClipboardManager::new(),
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        info!(server = self.client.base_url(), "session started");
        self.initial_data_fetch();

        let tick_rate = TICK_RATE;
        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        info!("session ended");
        Ok(())
    }

    // ========================================================================
    // Initial Data
    // ========================================================================

    /// Loads the cluster the session was started for: a local graph file
    /// wins over an address lookup.
    pub(crate) fn initial_data_fetch(&mut self) {
        let message_tx = self.message_tx.clone();

        if let Some(path) = self.startup.graph_file.clone() {
            debug!(path = %path.display(), "loading graph file");
            tokio::spawn(async move {
                let result = match tokio::fs::read_to_string(&path).await {
                    Ok(content) => GraphData::from_json_str(&content),
                    Err(e) => Err(e.into()),
                };
                // Receiver may be dropped during shutdown - safe to ignore
                let _ = message_tx.send(AppMessage::GraphFileLoaded(result));
            });
        } else if let Some(address) = self.startup.address.clone() {
            debug!(%address, "requesting cluster");
            let client = self.client.clone();
            let session = self.session;
            tokio::spawn(async move {
                let result = client.search_cluster(&address).await;
                let _ = message_tx.send(AppMessage::ClusterLoaded { session, result });
            });
        }
    }

    /// Full session reload: data and UI are reset, the client (and its
    /// cookie jar), the server status counters and the configuration are
    /// kept, and the initial fetch runs again.
    pub(crate) fn reload(&mut self) {
        info!(logged_in = self.logged_in, "reloading session");
        self.session = self.session.wrapping_add(1);
        let menu = std::mem::take(&mut self.data.menu);
        self.data = DataState::new();
        self.data.menu = menu;
        self.data.user_address.clone_from(&self.startup.address);
        self.ui = UiState::new();
        self.initial_data_fetch();
    }
}
