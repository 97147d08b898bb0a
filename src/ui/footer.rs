//! Footer rendering module for the ethcluster TUI.
//!
//! Shows the keyboard shortcuts of the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Shortcut hints for an input context.
#[must_use]
pub const fn hints(context: InputContext, logged_in: bool) -> &'static str {
    match context {
        InputContext::Main if logged_in => {
            "q:Quit Tab:Focus /:Search Space:Select e:Exchanges r:Refresh u:Upload L:Logout x/X:Export t:Txs o:Open y:Copy b:Results ?:About"
        }
        InputContext::Main => {
            "q:Quit Tab:Focus /:Search Space:Select e:Exchanges r:Refresh l:Login x/X:Export t:Txs o:Open y:Copy b:Results ?:About"
        }
        InputContext::ResultsSearch | InputContext::ModalSearch => {
            "Type to search  Backspace:Delete  Enter/Esc:Done"
        }
        InputContext::ExchangeList => {
            "↑↓:Move ←→:Page /:Search o:Open y:Copy a:Add e:Edit d:Delete Esc:Close"
        }
        InputContext::TxTable => "↑↓:Move ←→:Page /:Search Enter/o:Open y:Copy Esc:Close",
        InputContext::FormInput => "Tab:Next field ←→:Adjust Enter:Submit Esc:Cancel",
        InputContext::MessageModal => "Enter/Esc:Close",
        InputContext::About => "c:Copy donation address  Esc:Close",
        InputContext::ConfirmQuit => "y:Quit  n/Esc:Cancel",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.get_input_context(), app.logged_in))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{AppMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_footer(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_footer_follows_input_context() {
        let mut app = AppMother::loaded();
        let text = render_footer(&app, 160);
        assert!(text.contains("q:Quit"));
        assert!(text.contains("l:Login"));

        app.execute_command(AppCommand::FocusSearch);
        assert!(render_footer(&app, 160).contains("Type to search"));

        app.execute_command(AppCommand::SubmitSearch);
        app.execute_command(AppCommand::RequestQuit);
        assert!(render_footer(&app, 160).contains("y:Quit"));
    }

    #[test]
    fn test_login_hint_switches_to_logout() {
        assert!(hints(InputContext::Main, true).contains("L:Logout"));
        assert!(!hints(InputContext::Main, true).contains("l:Login"));
    }

    #[test]
    fn test_footer_is_centered() {
        let text = render_footer(&AppMother::empty(), 200);
        let line = text.trim_end_matches('\n');
        let leading = line.len() - line.trim_start().len();
        let trailing = line.len() - line.trim_end().len();
        assert!(leading.abs_diff(trailing) <= 1);
    }
}
