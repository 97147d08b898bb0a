//! UI state management for the ethcluster TUI.
//!
//! This module manages UI presentation concerns including:
//! - Panel focus and the results column toggle
//! - The modal document and the forms hosted in it
//! - Toast notifications and the loading indicator
//!
//! # Design
//!
//! The UI state is separate from data state, focusing purely on
//! presentation layer concerns.

use crate::constants::DONATE_ADDRESS;

use super::forms::{FormKind, Forms};
use super::modal::{
    ABOUT_MODAL, ABOUT_TEXT, ADD_EXCH_MODAL, EDIT_EXCH_MODAL, EXCH_FORM_BODY, EXCH_LIST_BODY,
    EXCH_LIST_MODAL, INFO_MODAL, INFO_TEXT, LOGIN_FORM_BODY, LOGIN_MODAL, ModalConfig,
    ModalDocument, QUIT_MODAL, REFRESH_FORM_BODY, REFRESH_MODAL, TX_BODY, TX_MODAL,
    UPLOAD_FORM_BODY, UPLOAD_MODAL,
};

// ============================================================================
// Focus
// ============================================================================

/// Represents which UI panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The results table has focus.
    #[default]
    Results,
    /// The cluster graph has focus.
    Graph,
}

impl Focus {
    /// Cycles to the next focus target. The results table is skipped while
    /// its column is hidden.
    #[must_use]
    pub const fn next(self, results_visible: bool) -> Self {
        match self {
            Self::Results => Self::Graph,
            Self::Graph if results_visible => Self::Results,
            Self::Graph => Self::Graph,
        }
    }
}

// ============================================================================
// About Text
// ============================================================================

fn about_text() -> String {
    format!(
        "ethcluster groups Ethereum addresses into clusters that most likely \
         belong to the same entity, using exchange deposit addresses as the \
         linking heuristic.\n\n\
         Search an address to see its cluster, select nodes in the table or \
         the graph to inspect the Ether they moved, and export the result \
         as JSON or CSV.\n\n\
         Donate: {DONATE_ADDRESS}\n\
         Press c to copy the donation address."
    )
}

// ============================================================================
// UI State
// ============================================================================

#[derive(Debug)]
pub struct UiState {
    // === Focus ===
    pub focus: Focus,
    /// Whether the results column is shown next to the graph.
    pub results_visible: bool,
    /// Index of the graph node under the cursor.
    pub graph_cursor: usize,

    // === Modals ===
    pub document: ModalDocument,
    pub forms: Forms,

    // === Indicators ===
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,
    /// A clustering refresh is running.
    pub loading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Creates a new `UiState` with every modal of the application installed.
    #[must_use]
    pub fn new() -> Self {
        let mut document = ModalDocument::new();
        install_modals(&mut document);
        Self {
            focus: Focus::default(),
            results_visible: true,
            graph_cursor: 0,
            document,
            forms: Forms::default(),
            toast: None,
            loading: false,
        }
    }

    // ========================================================================
    // Focus Management
    // ========================================================================

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next(self.results_visible);
    }

    /// Shows or hides the results column. Returns the new visibility.
    pub fn toggle_results(&mut self) -> bool {
        self.results_visible = !self.results_visible;
        if !self.results_visible {
            self.focus = Focus::Graph;
        }
        self.results_visible
    }

    // ========================================================================
    // Modals
    // ========================================================================

    #[must_use]
    pub fn has_active_modal(&self) -> bool {
        self.document.top().is_some()
    }

    /// Puts `text` into the shared info modal and opens it.
    pub fn show_info(&mut self, text: impl Into<String>) {
        self.document.set_body_text(INFO_TEXT, text);
        self.document.show(INFO_MODAL);
    }

    #[must_use]
    pub fn info_text(&self) -> &str {
        self.document
            .get(INFO_MODAL)
            .map_or("", |modal| modal.body_text())
    }

    pub fn dismiss_modal(&mut self) {
        self.document.hide_top();
    }

    /// Form hosted by the topmost modal, if any.
    #[must_use]
    pub fn active_form(&self) -> Option<FormKind> {
        match self.document.top()?.body_id()? {
            LOGIN_FORM_BODY => Some(FormKind::Login),
            REFRESH_FORM_BODY => Some(FormKind::Refresh),
            EXCH_FORM_BODY => Some(FormKind::Exchange),
            UPLOAD_FORM_BODY => Some(FormKind::Upload),
            _ => None,
        }
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }
}

fn modal(id: &str, header: &str, body_id: &str, style: &str) -> ModalConfig {
    ModalConfig {
        style: Some(style.to_string()),
        id: Some(id.to_string()),
        header: Some(header.to_string()),
        body: None,
        body_id: Some(body_id.to_string()),
        footer: None,
    }
}

/// Creates every dialog the application uses.
fn install_modals(document: &mut ModalDocument) {
    document.create_modal(ModalConfig {
        footer: Some("Enter close".to_string()),
        ..modal(INFO_MODAL, "Info", INFO_TEXT, "width: 50%")
    });
    document.create_modal(ModalConfig {
        footer: Some("/ search  ←→ page  o explorer  a add  e edit  d delete  Esc close".to_string()),
        ..modal(EXCH_LIST_MODAL, "Exchange addresses", EXCH_LIST_BODY, "max-width: 90%; height: 80%")
    });
    document.create_modal(ModalConfig {
        footer: Some("Tab next field  Enter save  Esc cancel".to_string()),
        ..modal(ADD_EXCH_MODAL, "Add exchange address", EXCH_FORM_BODY, "width: 60%")
    });
    document.create_modal(ModalConfig {
        footer: Some("Tab next field  Enter save  Esc cancel".to_string()),
        ..modal(EDIT_EXCH_MODAL, "Edit exchange address", EXCH_FORM_BODY, "width: 60%")
    });
    document.create_modal(ModalConfig {
        footer: Some("Enter log in  Esc cancel".to_string()),
        ..modal(LOGIN_MODAL, "Log in", LOGIN_FORM_BODY, "width: 40%")
    });
    document.create_modal(ModalConfig {
        footer: Some("Tab next field  ←→ scope  Enter run  Esc cancel".to_string()),
        ..modal(REFRESH_MODAL, "Refresh clustering database", REFRESH_FORM_BODY, "width: 60%")
    });
    document.create_modal(ModalConfig {
        footer: Some("Tab next field  Space toggle  Enter upload  Esc cancel".to_string()),
        ..modal(UPLOAD_MODAL, "Upload exchange list", UPLOAD_FORM_BODY, "width: 60%")
    });
    document.create_modal(ModalConfig {
        footer: Some("/ search  ←→ page  o explorer  y copy  Esc close".to_string()),
        ..modal(TX_MODAL, "Transactions", TX_BODY, "max-width: 90%; height: 80%")
    });
    document.create_modal(ModalConfig {
        body: Some(about_text()),
        footer: Some("c copy donation address  Esc close".to_string()),
        ..modal(ABOUT_MODAL, "About", ABOUT_TEXT, "width: 60%")
    });
    document.create_modal(ModalConfig {
        body: Some("Quit ethcluster?".to_string()),
        footer: Some("y / Enter quit  n / Esc cancel".to_string()),
        ..modal(QUIT_MODAL, "Confirm", "confirmQuitText", "width: 30%")
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_behavior() {
        let mut ui = UiState::new();
        assert_eq!(ui.focus, Focus::Results);
        ui.cycle_focus();
        assert_eq!(ui.focus, Focus::Graph);
        ui.cycle_focus();
        assert_eq!(ui.focus, Focus::Results);

        ui.toggle_results();
        assert_eq!(ui.focus, Focus::Graph);
        ui.cycle_focus();
        assert_eq!(ui.focus, Focus::Graph);
    }

    #[test]
    fn test_every_modal_is_installed() {
        let ui = UiState::new();
        for id in [
            INFO_MODAL,
            EXCH_LIST_MODAL,
            ADD_EXCH_MODAL,
            EDIT_EXCH_MODAL,
            LOGIN_MODAL,
            REFRESH_MODAL,
            UPLOAD_MODAL,
            TX_MODAL,
            ABOUT_MODAL,
            QUIT_MODAL,
        ] {
            assert!(ui.document.get(id).is_some(), "{id} should be installed");
        }
        assert!(!ui.has_active_modal());
    }

    #[test]
    fn test_show_info_sets_text_and_opens() {
        let mut ui = UiState::new();
        ui.show_info("Clustering process finished successfully");
        assert!(ui.document.is_open(INFO_MODAL));
        assert_eq!(ui.info_text(), "Clustering process finished successfully");
        ui.dismiss_modal();
        assert!(!ui.has_active_modal());
    }

    #[test]
    fn test_active_form_follows_top_modal() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_form(), None);
        ui.document.show(LOGIN_MODAL);
        assert_eq!(ui.active_form(), Some(FormKind::Login));
        ui.document.show(EDIT_EXCH_MODAL);
        assert_eq!(ui.active_form(), Some(FormKind::Exchange));
        ui.show_info("x");
        assert_eq!(ui.active_form(), None);
    }

    #[test]
    fn test_ui_state_toast_lifecycle() {
        let mut ui = UiState::new();
        ui.show_toast("✅", 2);
        assert!(!ui.tick_toast());
        assert!(ui.tick_toast());
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_about_mentions_donate_address() {
        let ui = UiState::new();
        assert!(
            ui.document
                .get(ABOUT_MODAL)
                .unwrap()
                .body_text()
                .contains(DONATE_ADDRESS)
        );
    }
}
