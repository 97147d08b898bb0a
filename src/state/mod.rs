//! State management module for the ethcluster TUI application.
//!
//! This module provides a decomposed state architecture, separating concerns into:
//!
//! - [`DataState`] - Application data (cluster graph, selection, cached tables)
//! - [`UiState`] - UI presentation concerns (focus, modals, forms, toasts)
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                       App                        │
//! ├────────────────────────┬─────────────────────────┤
//! │       DataState        │         UiState         │
//! │  - graph + series      │  - focus                │
//! │  - selection + labels  │  - modal document       │
//! │  - table views         │  - forms, toasts        │
//! └────────────────────────┴─────────────────────────┘
//! ```
//!
//! Requests run as spawned tasks and report back through [`AppMessage`];
//! state is only mutated on the UI loop.

use tokio::sync::mpsc;

use crate::client::ClusterClient;
use crate::domain::{
    ClusterError, ClusterResponse, ExchangeEntry, ExchangeOp, GraphData, OperationResult,
    RefreshResponse,
};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod config;
pub mod data;
pub mod forms;
pub mod modal;
pub mod platform;
pub mod selection;
pub mod table;
pub mod ui_state;


// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::{ClientStatus, DataState, MenuStats};
pub use forms::FormKind;
pub use table::TableView;
pub use ui_state::{Focus, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from spawned request tasks back to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// Cluster lookup finished. Stale sessions are ignored.
    ClusterLoaded {
        session: u64,
        result: Result<ClusterResponse, ClusterError>,
    },
    /// Graph file read from disk.
    GraphFileLoaded(Result<GraphData, ClusterError>),
    /// `/refreshDB` finished.
    RefreshCompleted(Result<RefreshResponse, ClusterError>),
    /// `/exchList` finished. `just_update` keeps the modal state as it is.
    ExchangeListLoaded {
        result: Result<Vec<ExchangeEntry>, ClusterError>,
        just_update: bool,
    },
    /// An add/edit/delete finished.
    ExchangeOpCompleted {
        op: ExchangeOp,
        result: Result<OperationResult, ClusterError>,
    },
    LoginCompleted(Result<OperationResult, ClusterError>),
    LogoutCompleted(Result<(), ClusterError>),
    UploadCompleted(Result<OperationResult, ClusterError>),
    /// The search debounce timer fired.
    SearchDebounceElapsed,
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Server base URL; overrides the configured one.
    pub server: Option<String>,
    /// Address whose cluster is requested on start-up.
    pub address: Option<String>,
    /// Local graph file (`{nodes, edges}`) to show instead of a lookup.
    pub graph_file: Option<std::path::PathBuf>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states (decomposed concerns)
    // ========================================================================
    /// Data state - graph, selection, tables, server status.
    pub data: DataState,

    /// UI state - focus, modals, forms, toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    pub config: AppConfig,

    /// Whether the server session is authenticated.
    pub logged_in: bool,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for the loading spinner.
    pub animation_tick: u64,

    /// Incremented on every session reload.
    pub(crate) session: u64,

    // ========================================================================
    // Async communication
    // ========================================================================
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Network
    // ========================================================================
    pub(crate) client: ClusterClient,

    /// Options the session was started with; replayed on reload.
    pub(crate) startup: StartupOptions,

    pub(crate) clipboard: platform::clipboard::ClipboardManager,
}
