//! Message processing for the ethcluster application.
//!
//! Completions of spawned requests arrive here and are turned into state
//! updates and info modal texts.

use tracing::{debug, info, warn};

use super::modal::{ADD_EXCH_MODAL, EDIT_EXCH_MODAL, LOGIN_MODAL, REFRESH_MODAL, UPLOAD_MODAL};
use super::{App, AppMessage};
use crate::domain::{ClusterError, ClusterGraph, ClusterResponse, GraphData, RefreshResponse};

pub(crate) const REFRESH_OK_TEXT: &str = "Clustering process finished successfully";
pub(crate) const REFRESH_UNAUTHORIZED_TEXT: &str = "Invalid password provided, try again please...";
pub(crate) const REFRESH_FAILED_TEXT: &str = "Error happened during the clustering process";

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ClusterLoaded { session, result } => {
                if session == self.session {
                    self.handle_cluster_loaded(result);
                } else {
                    debug!(session, current = self.session, "dropping stale cluster");
                }
            }
            AppMessage::GraphFileLoaded(result) => self.handle_graph_file(result),
            AppMessage::RefreshCompleted(result) => self.handle_refresh_completed(result),
            AppMessage::ExchangeListLoaded {
                result: Ok(entries),
                just_update,
            } => {
                self.data.set_exchange_list(&entries, self.logged_in);
                if !just_update {
                    self.ui.document.show(super::modal::EXCH_LIST_MODAL);
                }
            }
            AppMessage::ExchangeListLoaded { result: Err(e), .. } => {
                warn!(error = %e, "exchange list request failed");
                self.ui
                    .show_info(format!("Exchange list could not be loaded: {e}"));
            }
            AppMessage::ExchangeOpCompleted { op, result } => {
                let outcome = match result {
                    Ok(op_result) => {
                        if op_result.is_success() {
                            self.ui.document.hide(ADD_EXCH_MODAL);
                            self.ui.document.hide(EDIT_EXCH_MODAL);
                        }
                        op_result.result
                    }
                    Err(e) => e.to_string(),
                };
                // The list is re-fetched whatever the outcome.
                self.show_exchange_list(true);
                self.ui
                    .show_info(format!("{}: {outcome}", op.result_label()));
            }
            AppMessage::LoginCompleted(Ok(result)) if result.is_success() => {
                info!("logged in");
                self.logged_in = true;
                self.reload();
            }
            AppMessage::LoginCompleted(result) => {
                let reason = match result {
                    Ok(op_result) => op_result.result,
                    Err(e) => e.to_string(),
                };
                self.ui.document.hide(LOGIN_MODAL);
                self.ui.show_info(format!("LogIn failed: {reason}"));
            }
            AppMessage::LogoutCompleted(Ok(())) => {
                info!("logged out");
                self.logged_in = false;
                self.reload();
            }
            AppMessage::LogoutCompleted(Err(e)) => {
                self.ui.show_info(format!("LogOut failed: {e}"));
            }
            AppMessage::UploadCompleted(result) => {
                let outcome = match result {
                    Ok(op_result) => {
                        if op_result.is_success() {
                            self.ui.document.hide(UPLOAD_MODAL);
                            self.show_exchange_list(true);
                        }
                        op_result.result
                    }
                    Err(e) => e.to_string(),
                };
                self.ui.show_info(format!("Upload result: {outcome}"));
            }
            AppMessage::SearchDebounceElapsed => {
                let query = self
                    .data
                    .results_table
                    .as_ref()
                    .map(|table| table.query().to_string())
                    .unwrap_or_default();
                self.data.apply_search_query(&query);
            }
        }
    }

    fn handle_cluster_loaded(&mut self, result: Result<ClusterResponse, ClusterError>) {
        match result {
            Ok(response) => {
                if let Some(status) = response.status() {
                    self.data.menu.apply(&status);
                }
                let graph = ClusterGraph::from_data(response.results_graph);
                info!(nodes = graph.len(), edges = graph.edges().len(), "cluster loaded");
                self.data.load_graph(graph);
            }
            Err(e) => {
                warn!(error = %e, "cluster lookup failed");
                self.ui.show_info(format!("Cluster lookup failed: {e}"));
            }
        }
    }

    fn handle_graph_file(&mut self, result: Result<GraphData, ClusterError>) {
        match result {
            Ok(data) => {
                let graph = ClusterGraph::from_data(data);
                info!(nodes = graph.len(), "graph file loaded");
                self.data.load_graph(graph);
            }
            Err(e) => {
                warn!(error = %e, "graph file could not be loaded");
                self.ui
                    .show_info(format!("Graph file could not be loaded: {e}"));
            }
        }
    }

    fn handle_refresh_completed(&mut self, result: Result<RefreshResponse, ClusterError>) {
        self.ui.loading = false;
        self.ui.document.hide(REFRESH_MODAL);
        let text = match result {
            Ok(response) => {
                self.data.menu.apply(&response);
                REFRESH_OK_TEXT
            }
            Err(e) if e.is_unauthorized() => REFRESH_UNAUTHORIZED_TEXT,
            Err(e) => {
                warn!(error = %e, "refresh failed");
                REFRESH_FAILED_TEXT
            }
        };
        self.ui.show_info(text);
    }
}
