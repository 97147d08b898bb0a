//! Header rendering for the ethcluster TUI.
//!
//! Two rows inside a border: the logo with the session indicator, then the
//! address counters and the blockchain client status reported by the server.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, ClientStatus, MenuStats};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let top = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
    render_split(
        frame,
        top,
        create_logo(),
        session_line(app.logged_in, app.ui.loading, app.animation_tick),
    );

    if inner.height < 2 {
        return;
    }

    let bottom = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1);
    render_split(
        frame,
        bottom,
        counters_line(&app.data.menu),
        client_line(&app.data.menu.client),
    );
}

/// Left line at the start of the row, right line flush with its end.
fn render_split(frame: &mut Frame, area: Rect, left: Line<'static>, right: Line<'static>) {
    let right_width = (right.width() as u16).min(area.width);
    let right_area = Rect::new(
        area.right() - right_width,
        area.y,
        right_width,
        area.height,
    );
    let left_area = Rect::new(
        area.x,
        area.y,
        area.width.saturating_sub(right_width + 1),
        area.height,
    );
    frame.render_widget(Paragraph::new(left), left_area);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        right_area,
    );
}

fn create_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "eth".cyan().bold(),
        "cluster".magenta().bold(),
        "]".into(),
    ])
}

/// Spinner while a refresh runs, then the login indicator.
fn session_line(logged_in: bool, loading: bool, tick: u64) -> Line<'static> {
    let mut spans = Vec::new();
    if loading {
        let frame = SPINNER[(tick % SPINNER.len() as u64) as usize];
        spans.push(Span::styled(
            format!("{frame} Clustering…  "),
            Style::default().fg(WARNING_COLOR),
        ));
    }
    spans.push(if logged_in {
        Span::styled(
            "● Logged in",
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("○ Guest", Style::default().fg(MUTED_COLOR))
    });
    Line::from(spans)
}

fn counters_line(menu: &MenuStats) -> Line<'static> {
    let label = Style::default().fg(MUTED_COLOR);
    let value = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("Exchanges: ", label),
        Span::styled(menu.exchanges.to_string(), value),
        Span::styled("  Deposits: ", label),
        Span::styled(menu.deposits.to_string(), value),
        Span::styled("  Leafs: ", label),
        Span::styled(menu.leafs.to_string(), value),
    ])
}

fn client_line(status: &ClientStatus) -> Line<'static> {
    match status {
        ClientStatus::Unknown => Line::from(Span::styled(
            "Client status unknown",
            Style::default().fg(Color::DarkGray),
        )),
        ClientStatus::Up(data) => Line::from(vec![
            Span::styled("Block ", Style::default().fg(MUTED_COLOR)),
            Span::styled(
                data.max_block_display(),
                Style::default().fg(SUCCESS_COLOR),
            ),
            Span::styled("  synced ", Style::default().fg(MUTED_COLOR)),
            Span::raw(data.sync_time_display()),
        ]),
        ClientStatus::Down => Line::from(Span::styled(
            "Blockchain client unavailable",
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RefreshResponse;
    use crate::test_utils::{AppMother, ServerMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_header(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 4)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_header_before_any_status() {
        let text = render_header(&AppMother::empty());
        assert!(text.contains("[ethcluster]"));
        assert!(text.contains("○ Guest"));
        assert!(text.contains("Exchanges: 0"));
        assert!(text.contains("Client status unknown"));
    }

    #[test]
    fn test_header_shows_counters_and_client() {
        let mut app = AppMother::empty();
        let response: RefreshResponse =
            serde_json::from_value(ServerMother::refresh_client_down()).unwrap();
        app.data.menu.apply(&response);
        app.logged_in = true;
        app.ui.loading = true;

        let text = render_header(&app);
        assert!(text.contains("Exchanges: 41"));
        assert!(text.contains("Deposits: 125"));
        assert!(text.contains("Leafs: 0"));
        assert!(text.contains("Blockchain client unavailable"));
        assert!(text.contains("● Logged in"));
        assert!(text.contains("Clustering…"));
    }

    #[test]
    fn test_spinner_advances_with_tick() {
        let first = session_line(false, true, 0);
        let second = session_line(false, true, 1);
        assert_ne!(first.spans[0].content, second.spans[0].content);
        assert_eq!(session_line(false, false, 0).spans.len(), 1);
    }
}
