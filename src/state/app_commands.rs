//! Command execution and input handling for the ethcluster application.
//!
//! This module maps key events to commands in the current input context
//! and executes those commands to update application state.

use crossterm::event::KeyEvent;

use super::forms::{FormInput, FormKind};
use super::modal::{ABOUT_MODAL, EXCH_LIST_MODAL, INFO_MODAL, QUIT_MODAL, TX_MODAL};
use super::table::TableView;
use super::{App, Focus};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::domain::ExportFormat;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context from the topmost modal and the
    /// search bar focus.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match self.ui.document.top_id() {
            Some(QUIT_MODAL) => InputContext::ConfirmQuit,
            Some(INFO_MODAL) => InputContext::MessageModal,
            Some(ABOUT_MODAL) => InputContext::About,
            Some(EXCH_LIST_MODAL) => {
                if search_focused(self.data.exchange_table.as_ref()) {
                    InputContext::ModalSearch
                } else {
                    InputContext::ExchangeList
                }
            }
            Some(TX_MODAL) => {
                if search_focused(self.data.tx_table.as_ref()) {
                    InputContext::ModalSearch
                } else {
                    InputContext::TxTable
                }
            }
            Some(_) if self.ui.active_form().is_some() => InputContext::FormInput,
            Some(_) => InputContext::MessageModal,
            None => {
                if search_focused(self.data.results_table.as_ref()) {
                    InputContext::ResultsSearch
                } else {
                    InputContext::Main
                }
            }
        }
    }

    /// Table receiving navigation and search keys: the one in the top modal,
    /// else the results table.
    fn active_table_mut(&mut self) -> Option<&mut TableView> {
        match self.ui.document.top_id() {
            Some(TX_MODAL) => self.data.tx_table.as_mut(),
            Some(EXCH_LIST_MODAL) => self.data.exchange_table.as_mut(),
            Some(_) => None,
            None => self.data.results_table.as_mut(),
        }
    }

    /// Whether navigation keys drive the graph cursor.
    fn graph_navigation(&self) -> bool {
        self.ui.focus == Focus::Graph && !self.ui.has_active_modal()
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::RequestQuit => self.request_quit(),
            AppCommand::ConfirmQuit => self.exit = true,
            AppCommand::Dismiss => self.ui.dismiss_modal(),

            // === Navigation ===
            AppCommand::CycleFocus => self.ui.cycle_focus(),
            AppCommand::MoveUp => {
                if self.graph_navigation() {
                    self.ui.graph_cursor = self.ui.graph_cursor.saturating_sub(1);
                } else if let Some(table) = self.active_table_mut() {
                    table.move_up();
                }
            }
            AppCommand::MoveDown => {
                if self.graph_navigation() {
                    let last = self.data.graph.len().saturating_sub(1);
                    self.ui.graph_cursor = (self.ui.graph_cursor + 1).min(last);
                } else if let Some(table) = self.active_table_mut() {
                    table.move_down();
                }
            }
            AppCommand::PreviousPage => {
                if let Some(table) = self.active_table_mut() {
                    table.prev_page();
                }
            }
            AppCommand::NextPage => {
                if let Some(table) = self.active_table_mut() {
                    table.next_page();
                }
            }
            AppCommand::ToggleSelect => self.toggle_focused_node(),
            AppCommand::ClearSelection => self.data.clear_selection(),
            AppCommand::ToggleResults => self.toggle_results(),

            // === Search ===
            AppCommand::FocusSearch => {
                if !self.ui.has_active_modal() {
                    if !self.ui.results_visible {
                        self.toggle_results();
                    }
                    self.ui.focus = Focus::Results;
                }
                if let Some(table) = self.active_table_mut() {
                    table.focus_search();
                }
            }
            AppCommand::SubmitSearch => {
                if let Some(table) = self.active_table_mut() {
                    table.unfocus_search();
                }
            }
            AppCommand::TypeChar(c) => {
                if let Some(kind) = self.ui.active_form() {
                    self.ui.forms.get_mut(kind).type_char(c);
                } else if let Some(event) =
                    self.active_table_mut().and_then(|t| t.search_type_char(c))
                {
                    self.schedule_search(event);
                }
            }
            AppCommand::Backspace => {
                if let Some(kind) = self.ui.active_form() {
                    self.ui.forms.get_mut(kind).backspace();
                } else if let Some(event) =
                    self.active_table_mut().and_then(TableView::search_backspace)
                {
                    self.schedule_search(event);
                }
            }

            // === Menu ===
            AppCommand::OpenExchangeList => self.show_exchange_list(false),
            AppCommand::OpenRefresh => self.open_refresh(),
            AppCommand::OpenLogin => self.open_login(),
            AppCommand::LogOut => self.logout(),
            AppCommand::OpenUpload => self.open_upload(),
            AppCommand::ExportJson => self.export(ExportFormat::Json),
            AppCommand::ExportCsv => self.export(ExportFormat::Csv),
            AppCommand::ShowTransactions => self.show_transactions(),
            AppCommand::OpenInExplorer => self.open_link(),
            AppCommand::CopyAddress => self.copy_focused(),
            AppCommand::OpenAbout => self.open_about(),
            AppCommand::CopyDonateAddress => self.copy_donate_address(),

            // === Exchange List ===
            AppCommand::AddExchange => self.open_add_exchange(),
            AppCommand::EditExchange => self.open_edit_exchange(),
            AppCommand::DeleteExchange => self.delete_selected_exchange(),

            // === Forms ===
            AppCommand::NextField => self.with_form(|form| form.next_field()),
            AppCommand::PreviousField => self.with_form(|form| form.prev_field()),
            AppCommand::AdjustLeft => self.with_form(|form| form.adjust(false)),
            AppCommand::AdjustRight => self.with_form(|form| form.adjust(true)),
            AppCommand::SubmitForm => self.submit_form(),

            AppCommand::Noop => {}
        }
    }

    fn with_form(&mut self, f: impl FnOnce(&mut dyn FormInput)) {
        if let Some(kind) = self.ui.active_form() {
            f(self.ui.forms.get_mut(kind));
        }
    }

    /// Submits the form on top. Nothing happens while proceed is disabled.
    fn submit_form(&mut self) {
        let Some(kind) = self.ui.active_form() else {
            return;
        };
        if !self.ui.forms.get(kind).can_submit() {
            return;
        }
        match kind {
            FormKind::Login => self.submit_login(),
            FormKind::Refresh => self.submit_refresh(),
            FormKind::Exchange => self.submit_exchange_form(),
            FormKind::Upload => self.submit_upload(),
        }
    }
}

fn search_focused(table: Option<&TableView>) -> bool {
    table.is_some_and(TableView::is_search_focused)
}
