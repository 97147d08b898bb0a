//! Application actions for ethcluster.
//!
//! This module handles high-level actions: backend requests, exports,
//! clipboard operations, browser links and the debounced table search.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::forms::{ExchangeForm, LoginForm, RefreshForm, UploadForm};
use super::modal::{
    ABOUT_MODAL, ADD_EXCH_MODAL, EDIT_EXCH_MODAL, EXCH_LIST_MODAL, LOGIN_MODAL, QUIT_MODAL,
    REFRESH_MODAL, TX_MODAL, UPLOAD_MODAL,
};
use super::table::SearchEvent;
use super::{App, AppMessage, Focus};
use crate::constants::{COPY_TOAST_TICKS, DONATE_ADDRESS, STATUS_TOAST_TICKS, address_url};
use crate::domain::export::write_export;
use crate::domain::{ExchangeOp, ExportFormat, RefreshRequest, hash_password};

impl App {
    // ========================================================================
    // Focused Node
    // ========================================================================

    /// Address under the cursor of the focused panel.
    #[must_use]
    pub(crate) fn focused_address(&self) -> Option<String> {
        match self.ui.focus {
            Focus::Results => self
                .data
                .results_table
                .as_ref()?
                .selected_row()
                .map(|row| row.key.clone()),
            Focus::Graph => self
                .data
                .graph
                .nodes()
                .get(self.ui.graph_cursor)
                .map(|node| node.id.clone()),
        }
    }

    pub(crate) fn toggle_focused_node(&mut self) {
        if let Some(id) = self.focused_address() {
            self.data.toggle_node(&id);
        }
    }

    pub(crate) fn toggle_results(&mut self) {
        let visible = self.ui.toggle_results();
        if visible
            && let Some(address) = self.data.user_address.clone()
            && self.data.selection.contains(&address)
        {
            self.data.set_highlight(&address, true);
        }
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    pub(crate) fn open_refresh(&mut self) {
        if !self.data.menu.refresh_enabled() {
            self.ui
                .show_toast("Blockchain client unavailable", STATUS_TOAST_TICKS);
            return;
        }
        self.ui.forms.refresh = RefreshForm::new(self.logged_in);
        self.ui.document.show(REFRESH_MODAL);
    }

    /// Validates the refresh form and starts `/refreshDB`. Invalid input
    /// never reaches the server.
    pub(crate) fn submit_refresh(&mut self) {
        let form = &self.ui.forms.refresh;
        let password_hash = form
            .with_password
            .then(|| hash_password(form.password.value()));
        let request = match RefreshRequest::from_input(
            form.min_height.value(),
            form.max_height.value(),
            form.scope,
            password_hash,
        ) {
            Ok(request) => request,
            Err(e) => {
                self.ui.show_info(e.to_string());
                return;
            }
        };

        self.ui.loading = true;
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.refresh_db(&request).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::RefreshCompleted(result));
        });
    }

    // ========================================================================
    // Exchange List
    // ========================================================================

    /// Fetches the exchange list. With `just_update` the cached table is
    /// refreshed without opening the modal.
    pub(crate) fn show_exchange_list(&mut self, just_update: bool) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.exch_list().await;
            let _ = message_tx.send(AppMessage::ExchangeListLoaded {
                result,
                just_update,
            });
        });
    }

    pub(crate) fn open_add_exchange(&mut self) {
        if !self.logged_in {
            return;
        }
        self.ui.forms.exchange = ExchangeForm::default();
        self.ui.document.show(ADD_EXCH_MODAL);
    }

    pub(crate) fn open_edit_exchange(&mut self) {
        let Some((address, name)) = self.selected_exchange() else {
            return;
        };
        self.ui.forms.exchange = ExchangeForm::edit(&address, &name);
        self.ui.document.show(EDIT_EXCH_MODAL);
    }

    /// Row under the cursor of the exchange table, when row actions are on.
    fn selected_exchange(&self) -> Option<(String, String)> {
        let table = self.data.exchange_table.as_ref()?;
        if !table.has_row_actions() {
            return None;
        }
        let row = table.selected_row()?;
        Some((
            row.key.clone(),
            row.cells.get(1).cloned().unwrap_or_default(),
        ))
    }

    /// Sends the exchange form as an add or an edit.
    pub(crate) fn submit_exchange_form(&mut self) {
        let form = self.ui.forms.exchange.clone();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let address = form.address.value();
            let name = form.name.value();
            let (op, result) = match form.original.as_deref() {
                Some(target) => (
                    ExchangeOp::Edit,
                    client.edit_address(target, address, name).await,
                ),
                None => (ExchangeOp::Add, client.add_address(address, name).await),
            };
            let _ = message_tx.send(AppMessage::ExchangeOpCompleted { op, result });
        });
    }

    pub(crate) fn delete_selected_exchange(&mut self) {
        let Some((address, _)) = self.selected_exchange() else {
            return;
        };
        debug!(%address, "deleting exchange address");
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.delete_address(&address).await;
            let _ = message_tx.send(AppMessage::ExchangeOpCompleted {
                op: ExchangeOp::Delete,
                result,
            });
        });
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub(crate) fn open_login(&mut self) {
        if self.logged_in {
            return;
        }
        self.ui.forms.login = LoginForm::default();
        self.ui.document.show(LOGIN_MODAL);
    }

    pub(crate) fn submit_login(&mut self) {
        let password = self.ui.forms.login.password.value().to_string();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.log_in(&password).await;
            let _ = message_tx.send(AppMessage::LoginCompleted(result));
        });
    }

    pub(crate) fn logout(&mut self) {
        if !self.logged_in {
            return;
        }
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.log_out().await;
            let _ = message_tx.send(AppMessage::LogoutCompleted(result));
        });
    }

    // ========================================================================
    // Upload
    // ========================================================================

    pub(crate) fn open_upload(&mut self) {
        if !self.logged_in {
            return;
        }
        self.ui.forms.upload = UploadForm::default();
        self.ui.document.show(UPLOAD_MODAL);
    }

    /// Reads the chosen file and sends it to `/uploadJSON`.
    pub(crate) fn submit_upload(&mut self) {
        let path = PathBuf::from(self.ui.forms.upload.path.value().trim());
        let option = self.ui.forms.upload.option;
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let file_name = path
                .file_name()
                .map_or_else(|| "upload.json".to_string(), |n| n.to_string_lossy().into_owned());
            let result = match tokio::fs::read(&path).await {
                Ok(content) => client.upload_json(file_name, content, option).await,
                Err(e) => Err(e.into()),
            };
            let _ = message_tx.send(AppMessage::UploadCompleted(result));
        });
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Writes the selected nodes (all nodes when nothing is selected).
    pub(crate) fn export(&mut self, format: ExportFormat) {
        let nodes = self.data.export_nodes();
        if nodes.is_empty() {
            self.ui.show_toast("Nothing to export", STATUS_TOAST_TICKS);
            return;
        }
        match write_export(&self.config.export_dir(), &nodes, format) {
            Ok(path) => {
                info!(path = %path.display(), count = nodes.len(), "exported nodes");
                self.ui
                    .show_toast(format!("Exported to {}", path.display()), STATUS_TOAST_TICKS);
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                self.ui.show_info(format!("Export failed: {e}"));
            }
        }
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    pub(crate) fn show_transactions(&mut self) {
        let Some(id) = self.focused_address() else {
            return;
        };
        let count = self.data.load_transactions(&id);
        debug!(%id, count, "showing transactions");
        self.ui.document.show(TX_MODAL);
    }

    // ========================================================================
    // Clipboard & Browser
    // ========================================================================

    /// Copies `text`; failure is not fatal and only logged.
    fn copy_text(&mut self, text: &str, label: &str) {
        match self.clipboard.copy_text(text) {
            Ok(()) => self
                .ui
                .show_toast(format!("✅ {label} copied"), COPY_TOAST_TICKS),
            Err(e) => warn!(error = %e, "copy to clipboard failed"),
        }
    }

    /// Copies the address (or tx hash) under the cursor of the top table,
    /// or of the focused panel when no table modal is open.
    pub(crate) fn copy_focused(&mut self) {
        let text = match self.ui.document.top_id() {
            Some(TX_MODAL) => self.data.tx_table.as_ref().and_then(|t| t.selected_row()),
            Some(EXCH_LIST_MODAL) => self
                .data
                .exchange_table
                .as_ref()
                .and_then(|t| t.selected_row()),
            _ => None,
        }
        .map(|row| row.key.clone())
        .or_else(|| self.focused_address());

        if let Some(text) = text {
            self.copy_text(&text, "Address");
        }
    }

    pub(crate) fn copy_donate_address(&mut self) {
        self.copy_text(DONATE_ADDRESS, "Donation address");
    }

    /// Opens the explorer link of the top table row, or of the focused node.
    pub(crate) fn open_link(&mut self) {
        let url = match self.ui.document.top_id() {
            Some(TX_MODAL) => self.data.tx_table.as_ref().and_then(|t| t.link_for_selected()),
            Some(EXCH_LIST_MODAL) => self
                .data
                .exchange_table
                .as_ref()
                .and_then(|t| t.link_for_selected()),
            _ => self.focused_address().map(|a| address_url(&a)),
        };

        match url {
            Some(url) => {
                if let Err(e) = open::that(&url) {
                    warn!(%url, error = %e, "failed to open browser");
                    self.ui
                        .show_toast(format!("[x] Failed to open browser: {e}"), STATUS_TOAST_TICKS);
                }
            }
            None => self
                .ui
                .show_toast("[x] Explorer link unavailable", STATUS_TOAST_TICKS),
        }
    }

    // ========================================================================
    // Modals
    // ========================================================================

    pub(crate) fn open_about(&mut self) {
        self.ui.document.show(ABOUT_MODAL);
    }

    pub(crate) fn request_quit(&mut self) {
        self.ui.document.show(QUIT_MODAL);
    }

    // ========================================================================
    // Debounced Search
    // ========================================================================

    /// Arms the debounce timer for a results search. Earlier timers are not
    /// cancelled; each one re-reads the current query when it fires.
    pub(crate) fn schedule_search(&self, event: SearchEvent) {
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(event.debounce).await;
            let _ = message_tx.send(AppMessage::SearchDebounceElapsed);
        });
    }
}
