//! Modal dialogs drawn over the main screen.
//!
//! Every open modal of the [`ModalDocument`](crate::state::modal::ModalDocument)
//! is drawn bottom first, so the topmost one ends up on top. The body is
//! picked by its body id: the exchange and transaction lists are tables,
//! form bodies come from [`forms`], anything else is plain text.

pub mod forms;
pub mod message;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
};

use crate::state::App;
use crate::state::forms::FormKind;
use crate::state::modal::{
    EXCH_FORM_BODY, EXCH_LIST_BODY, LOGIN_FORM_BODY, Modal, REFRESH_FORM_BODY, TX_BODY,
    UPLOAD_FORM_BODY,
};
use crate::state::table::TableView;
use crate::theme::MUTED_COLOR;
use crate::ui::components::render_table;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::modal_area;
use crate::widgets::helpers::truncate_address;

/// Rows a table body asks for when the modal has no fixed height.
const TABLE_ROWS: u16 = 12;

enum Body<'a> {
    Text(&'a str),
    Form(Vec<Line<'static>>),
    Table {
        table: Option<&'a TableView>,
        subtitle: Option<String>,
    },
}

fn form_kind(body_id: &str) -> Option<FormKind> {
    match body_id {
        LOGIN_FORM_BODY => Some(FormKind::Login),
        REFRESH_FORM_BODY => Some(FormKind::Refresh),
        EXCH_FORM_BODY => Some(FormKind::Exchange),
        UPLOAD_FORM_BODY => Some(FormKind::Upload),
        _ => None,
    }
}

fn body_of<'a>(app: &'a App, modal: &'a Modal) -> Body<'a> {
    match modal.body_id() {
        Some(EXCH_LIST_BODY) => Body::Table {
            table: app.data.exchange_table.as_ref(),
            subtitle: None,
        },
        Some(TX_BODY) => Body::Table {
            table: app.data.tx_table.as_ref(),
            subtitle: app
                .data
                .tx_node
                .as_deref()
                .map(|node| format!("Transactions of {}", truncate_address(node, 23))),
        },
        Some(id) => match form_kind(id) {
            Some(kind) => Body::Form(forms::form_lines(app, kind)),
            None => Body::Text(modal.body_text()),
        },
        None => Body::Text(modal.body_text()),
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Renders every open modal, bottom first.
pub fn render_modals(app: &App, frame: &mut Frame, area: Rect) {
    let top = app.ui.document.top();
    for modal in app.ui.document.open_modals() {
        let is_top = top.is_some_and(|t| std::ptr::eq(t, modal));
        render_modal(app, frame, area, modal, is_top);
    }
}

fn render_modal(app: &App, frame: &mut Frame, area: Rect, modal: &Modal, is_top: bool) {
    let body = body_of(app, modal);
    let inner_width = (area.width * modal.width_percent / 100)
        .max(30)
        .saturating_sub(2);
    let content_rows = match &body {
        Body::Text(text) => message::text_rows(text, inner_width),
        Body::Form(lines) => u16::try_from(lines.len()).unwrap_or(u16::MAX),
        Body::Table { .. } => TABLE_ROWS,
    };

    let popup_area = modal_area(area, modal.width_percent, modal.height_percent, content_rows);
    let block = create_popup_block(&modal.header);
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let footer_rows = if modal.footer.is_some() { 2 } else { 0 };
    let [content_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(footer_rows)])
        .areas(inner);

    match body {
        Body::Text(text) => message::render(frame, content_area, text),
        Body::Form(lines) => frame.render_widget(Paragraph::new(lines), content_area),
        Body::Table { table, subtitle } => {
            let mut table_area = content_area;
            if let Some(subtitle) = subtitle {
                let [subtitle_area, rest] = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(1)])
                    .areas(content_area);
                frame.render_widget(
                    Paragraph::new(subtitle).style(Style::default().fg(MUTED_COLOR)),
                    subtitle_area,
                );
                table_area = rest;
            }
            match table {
                Some(table) => render_table(frame, table_area, table, is_top),
                None => frame.render_widget(
                    Paragraph::new("Loading…")
                        .style(Style::default().fg(MUTED_COLOR))
                        .alignment(Alignment::Center),
                    table_area,
                ),
            }
        }
    }

    if let Some(footer) = &modal.footer {
        let [separator_area, hint_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .areas(footer_area);
        let separator = "─".repeat(usize::from(separator_area.width));
        frame.render_widget(
            Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
            separator_area,
        );
        frame.render_widget(
            Paragraph::new(footer.as_str())
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center),
            hint_area,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{AppMother, GraphMother, ServerMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render_modals(app, frame, frame.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_info_modal_shows_text_and_footer() {
        let mut app = AppMother::empty();
        app.ui.show_info("Refresh result: OK");
        let text = draw(&app);
        assert!(text.contains(" Info "));
        assert!(text.contains("Refresh result: OK"));
        assert!(text.contains("Enter close"));
    }

    #[test]
    fn test_nothing_drawn_without_open_modals() {
        let app = AppMother::empty();
        assert!(draw(&app).trim().is_empty());
    }

    #[test]
    fn test_stacked_modals_draw_top_last() {
        let mut app = AppMother::empty();
        app.data
            .set_exchange_list(&ServerMother::exchange_entries(), false);
        app.ui.document.show(crate::state::modal::EXCH_LIST_MODAL);
        app.ui.show_info("Delete exchange address result: failure");
        let text = draw(&app);
        assert!(text.contains("Exchange addresses"));
        assert!(text.contains("Delete exchange address result: failure"));
    }

    #[test]
    fn test_login_form_modal() {
        let mut app = AppMother::empty();
        app.execute_command(AppCommand::OpenLogin);
        let text = draw(&app);
        assert!(text.contains(" Log in "));
        assert!(text.contains("Password"));
        assert!(text.contains("[ Log in ]"));
    }

    #[test]
    fn test_transactions_modal_names_node() {
        let mut app = AppMother::loaded();
        app.data.load_transactions(GraphMother::ADDR_B);
        app.ui.document.show(crate::state::modal::TX_MODAL);
        let text = draw(&app);
        assert!(text.contains("Transactions of 0xBBB"));
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = AppMother::empty();
        app.execute_command(AppCommand::RequestQuit);
        let text = draw(&app);
        assert!(text.contains("Quit ethcluster?"));
    }
}
