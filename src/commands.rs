//! Command pattern for key event handling in the TUI application.
//!
//! This module provides a clean separation between key input and application actions,
//! making it easy to:
//! - Test key mappings in isolation
//! - Add new keybindings
//! - Keep the command executor free of key codes
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
///
/// The input context determines which keybindings are active and how
/// key events should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the results table and the graph.
    Main,
    /// Typing into the results table search bar.
    ResultsSearch,
    /// Exchange address list modal is on top.
    ExchangeList,
    /// Transactions modal is on top.
    TxTable,
    /// Typing into the search bar of a modal table.
    ModalSearch,
    /// A form modal (login, refresh, exchange address, upload) is on top.
    FormInput,
    /// The info modal is on top.
    MessageModal,
    /// The about modal is on top.
    About,
    /// Quit confirmation is on top.
    ConfirmQuit,
}

impl InputContext {
    /// Returns `true` if this context represents a modal state.
    #[must_use]
    pub const fn is_modal(&self) -> bool {
        !matches!(self, Self::Main | Self::ResultsSearch)
    }

    /// Returns `true` if this context accepts text input.
    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(
            self,
            Self::ResultsSearch | Self::ModalSearch | Self::FormInput
        )
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
///
/// Commands are the result of mapping key events to application actions.
/// This enum represents the "what" of user intent, decoupled from the "how"
/// of key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Ask for quit confirmation.
    RequestQuit,
    /// Exit the application.
    ConfirmQuit,
    /// Close the topmost modal.
    Dismiss,

    // === Navigation ===
    /// Switch focus between the results table and the graph.
    CycleFocus,
    MoveUp,
    MoveDown,
    PreviousPage,
    NextPage,
    /// Toggle selection of the focused node.
    ToggleSelect,
    ClearSelection,
    /// Hide or show the results column.
    ToggleResults,

    // === Search ===
    FocusSearch,
    TypeChar(char),
    Backspace,
    /// Leave the search bar, keeping the query.
    SubmitSearch,

    // === Menu ===
    OpenExchangeList,
    OpenRefresh,
    OpenLogin,
    LogOut,
    OpenUpload,
    ExportJson,
    ExportCsv,
    /// Open the transactions of the focused node.
    ShowTransactions,
    OpenInExplorer,
    CopyAddress,
    OpenAbout,
    CopyDonateAddress,

    // === Exchange List ===
    AddExchange,
    EditExchange,
    DeleteExchange,

    // === Forms ===
    NextField,
    PreviousField,
    AdjustLeft,
    AdjustRight,
    SubmitForm,

    /// No operation - key not mapped in current context.
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command moves a cursor or focus.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CycleFocus | Self::MoveUp | Self::MoveDown | Self::PreviousPage | Self::NextPage
        )
    }

    /// Returns `true` if this command starts a backend request.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        matches!(
            self,
            Self::OpenExchangeList
                | Self::LogOut
                | Self::DeleteExchange
                | Self::SubmitForm
        )
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// This is a pure function with no side effects - it simply translates
    /// input events to semantic commands.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::ResultsSearch | InputContext::ModalSearch => Self::map_search_keys(key),
            InputContext::ExchangeList => Self::map_exchange_list_keys(key),
            InputContext::TxTable => Self::map_tx_table_keys(key),
            InputContext::FormInput => Self::map_form_keys(key),
            InputContext::MessageModal => Self::map_message_keys(key),
            InputContext::About => Self::map_about_keys(key),
            InputContext::ConfirmQuit => Self::map_confirm_quit_keys(key),
        }
    }

    /// Maps keys in the main browsing context.
    fn map_main_keys(key: KeyEvent) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::RequestQuit;
        }
        match key.code {
            KeyCode::Char('q') => AppCommand::RequestQuit,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Left | KeyCode::PageUp => AppCommand::PreviousPage,
            KeyCode::Right | KeyCode::PageDown => AppCommand::NextPage,
            KeyCode::Enter | KeyCode::Char(' ') => AppCommand::ToggleSelect,
            KeyCode::Esc => AppCommand::ClearSelection,
            KeyCode::Char('/') => AppCommand::FocusSearch,
            KeyCode::Char('b') => AppCommand::ToggleResults,
            KeyCode::Char('e') => AppCommand::OpenExchangeList,
            KeyCode::Char('r') => AppCommand::OpenRefresh,
            KeyCode::Char('l') => AppCommand::OpenLogin,
            KeyCode::Char('L') => AppCommand::LogOut,
            KeyCode::Char('u') => AppCommand::OpenUpload,
            KeyCode::Char('x') => AppCommand::ExportJson,
            KeyCode::Char('X') => AppCommand::ExportCsv,
            KeyCode::Char('t') => AppCommand::ShowTransactions,
            KeyCode::Char('o') => AppCommand::OpenInExplorer,
            KeyCode::Char('y') => AppCommand::CopyAddress,
            KeyCode::Char('i' | '?') => AppCommand::OpenAbout,
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys while a search bar has focus.
    fn map_search_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => AppCommand::SubmitSearch,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => {
                if c == 'c' && key.modifiers.contains(KeyModifiers::CONTROL) {
                    AppCommand::SubmitSearch
                } else {
                    AppCommand::TypeChar(c)
                }
            }
            _ => AppCommand::Noop,
        }
    }

    /// Navigation shared by the modal tables.
    fn map_modal_table_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => AppCommand::Dismiss,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Left | KeyCode::PageUp => AppCommand::PreviousPage,
            KeyCode::Right | KeyCode::PageDown => AppCommand::NextPage,
            KeyCode::Char('/') => AppCommand::FocusSearch,
            KeyCode::Char('o') => AppCommand::OpenInExplorer,
            KeyCode::Char('y') => AppCommand::CopyAddress,
            _ => AppCommand::Noop,
        }
    }

    fn map_exchange_list_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('a') => AppCommand::AddExchange,
            KeyCode::Char('e') | KeyCode::Enter => AppCommand::EditExchange,
            KeyCode::Char('d') | KeyCode::Delete => AppCommand::DeleteExchange,
            _ => Self::map_modal_table_keys(key),
        }
    }

    fn map_tx_table_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter => AppCommand::OpenInExplorer,
            _ => Self::map_modal_table_keys(key),
        }
    }

    /// Maps keys in a form modal.
    fn map_form_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitForm,
            KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => AppCommand::PreviousField,
            KeyCode::Left => AppCommand::AdjustLeft,
            KeyCode::Right => AppCommand::AdjustRight,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the info modal.
    fn map_message_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ' | 'q') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_about_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('c') => AppCommand::CopyDonateAddress,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the quit confirmation modal.
    fn map_confirm_quit_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('y' | 'Y' | 'q') | KeyCode::Enter => AppCommand::ConfirmQuit,
            KeyCode::Char('n' | 'N') | KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    /// Helper to create a key event for testing.
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    /// Helper to create a key event with modifiers.
    fn key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    mod input_context_tests {
        use super::*;

        #[test]
        fn test_main_contexts_are_not_modal() {
            assert!(!InputContext::Main.is_modal());
            assert!(!InputContext::ResultsSearch.is_modal());
            assert!(InputContext::ExchangeList.is_modal());
            assert!(InputContext::ConfirmQuit.is_modal());
        }

        #[test]
        fn test_text_input_contexts() {
            assert!(InputContext::ResultsSearch.accepts_text_input());
            assert!(InputContext::ModalSearch.accepts_text_input());
            assert!(InputContext::FormInput.accepts_text_input());
            assert!(!InputContext::Main.accepts_text_input());
            assert!(!InputContext::TxTable.accepts_text_input());
        }
    }

    mod app_command_tests {
        use super::*;

        #[test]
        fn test_navigation_commands() {
            assert!(AppCommand::MoveUp.is_navigation());
            assert!(AppCommand::NextPage.is_navigation());
            assert!(AppCommand::CycleFocus.is_navigation());
            assert!(!AppCommand::ToggleSelect.is_navigation());
            assert!(!AppCommand::Noop.is_navigation());
        }

        #[test]
        fn test_request_commands() {
            assert!(AppCommand::SubmitForm.is_request());
            assert!(AppCommand::LogOut.is_request());
            assert!(!AppCommand::ExportJson.is_request());
        }
    }

    mod main_context_tests {
        use super::*;

        fn map(code: KeyCode) -> AppCommand {
            KeyMapper::map_key(key_event(code), &InputContext::Main)
        }

        #[test]
        fn test_menu_keys() {
            assert_eq!(map(KeyCode::Char('e')), AppCommand::OpenExchangeList);
            assert_eq!(map(KeyCode::Char('r')), AppCommand::OpenRefresh);
            assert_eq!(map(KeyCode::Char('l')), AppCommand::OpenLogin);
            assert_eq!(map(KeyCode::Char('L')), AppCommand::LogOut);
            assert_eq!(map(KeyCode::Char('u')), AppCommand::OpenUpload);
            assert_eq!(map(KeyCode::Char('i')), AppCommand::OpenAbout);
        }

        #[test]
        fn test_export_keys() {
            assert_eq!(map(KeyCode::Char('x')), AppCommand::ExportJson);
            assert_eq!(map(KeyCode::Char('X')), AppCommand::ExportCsv);
        }

        #[test]
        fn test_selection_keys() {
            assert_eq!(map(KeyCode::Enter), AppCommand::ToggleSelect);
            assert_eq!(map(KeyCode::Char(' ')), AppCommand::ToggleSelect);
            assert_eq!(map(KeyCode::Esc), AppCommand::ClearSelection);
            assert_eq!(map(KeyCode::Char('/')), AppCommand::FocusSearch);
        }

        #[test]
        fn test_quit_keys() {
            assert_eq!(map(KeyCode::Char('q')), AppCommand::RequestQuit);
            let ctrl_c = key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(
                KeyMapper::map_key(ctrl_c, &InputContext::Main),
                AppCommand::RequestQuit
            );
        }

        #[test]
        fn test_unmapped_key_is_noop() {
            assert_eq!(map(KeyCode::F(5)), AppCommand::Noop);
        }
    }

    mod search_context_tests {
        use super::*;

        #[test]
        fn test_letters_are_typed_not_commands() {
            for context in [InputContext::ResultsSearch, InputContext::ModalSearch] {
                assert_eq!(
                    KeyMapper::map_key(key_event(KeyCode::Char('q')), &context),
                    AppCommand::TypeChar('q')
                );
                assert_eq!(
                    KeyMapper::map_key(key_event(KeyCode::Esc), &context),
                    AppCommand::SubmitSearch
                );
            }
        }

        #[test]
        fn test_ctrl_c_leaves_search() {
            let ctrl_c = key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(
                KeyMapper::map_key(ctrl_c, &InputContext::ResultsSearch),
                AppCommand::SubmitSearch
            );
        }
    }

    mod modal_context_tests {
        use super::*;

        #[test]
        fn test_exchange_list_actions() {
            let ctx = InputContext::ExchangeList;
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Char('a')), &ctx),
                AppCommand::AddExchange
            );
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Char('d')), &ctx),
                AppCommand::DeleteExchange
            );
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Right), &ctx),
                AppCommand::NextPage
            );
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Esc), &ctx),
                AppCommand::Dismiss
            );
        }

        #[test]
        fn test_tx_table_enter_opens_explorer() {
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Enter), &InputContext::TxTable),
                AppCommand::OpenInExplorer
            );
        }

        #[test]
        fn test_form_keys() {
            let ctx = InputContext::FormInput;
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Char('e')), &ctx),
                AppCommand::TypeChar('e')
            );
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Tab), &ctx),
                AppCommand::NextField
            );
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::BackTab), &ctx),
                AppCommand::PreviousField
            );
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Left), &ctx),
                AppCommand::AdjustLeft
            );
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Enter), &ctx),
                AppCommand::SubmitForm
            );
        }

        #[test]
        fn test_about_copies_donate_address() {
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Char('c')), &InputContext::About),
                AppCommand::CopyDonateAddress
            );
        }

        #[test]
        fn test_confirm_quit() {
            let ctx = InputContext::ConfirmQuit;
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Char('y')), &ctx),
                AppCommand::ConfirmQuit
            );
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Char('n')), &ctx),
                AppCommand::Dismiss
            );
        }

        #[test]
        fn test_message_modal_dismisses() {
            for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char(' ')] {
                assert_eq!(
                    KeyMapper::map_key(key_event(code), &InputContext::MessageModal),
                    AppCommand::Dismiss
                );
            }
        }
    }
}
