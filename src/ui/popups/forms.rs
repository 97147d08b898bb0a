//! Form bodies of the login, refresh, exchange and upload dialogs.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::domain::refresh::scope_exchange_count;
use crate::state::App;
use crate::state::forms::{
    ExchangeField, FormInput, FormKind, RefreshField, TextField, UploadField,
};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

const LABEL_WIDTH: usize = 14;

fn label_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR)
    }
}

fn field_line(label: &str, value: String, active: bool) -> Line<'static> {
    let marker = if active { "› " } else { "  " };
    let cursor = if active { "▏" } else { "" };
    Line::from(vec![
        Span::styled(
            format!("{marker}{label:<LABEL_WIDTH$}"),
            label_style(active),
        ),
        Span::raw(format!("{value}{cursor}")),
    ])
}

fn text_line(label: &str, field: &TextField, active: bool) -> Line<'static> {
    field_line(label, field.display(), active)
}

/// Proceed button, dimmed while the form cannot be submitted.
fn submit_line(action: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default()
            .fg(SUCCESS_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(MUTED_COLOR)
            .add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled(format!("[ {action} ]"), style))
}

/// Lines of the form hosted by a dialog.
#[must_use]
pub fn form_lines(app: &App, kind: FormKind) -> Vec<Line<'static>> {
    let forms = &app.ui.forms;
    let mut lines = match kind {
        FormKind::Login => vec![text_line("Password", &forms.login.password, true)],
        FormKind::Refresh => {
            let form = &forms.refresh;
            let covered = scope_exchange_count(app.data.menu.exch_len, form.scope);
            let mut lines = vec![
                text_line(
                    "Min. height",
                    &form.min_height,
                    form.field == RefreshField::MinHeight,
                ),
                text_line(
                    "Max. height",
                    &form.max_height,
                    form.field == RefreshField::MaxHeight,
                ),
                field_line(
                    "Scope",
                    format!("◀ {} % ▶  ({covered} exchanges)", form.scope),
                    form.field == RefreshField::Scope,
                ),
            ];
            if form.with_password {
                lines.push(text_line(
                    "Password",
                    &form.password,
                    form.field == RefreshField::Password,
                ));
            }
            lines
        }
        FormKind::Exchange => {
            let form = &forms.exchange;
            let mut lines = Vec::new();
            if let Some(original) = &form.original {
                lines.push(Line::from(Span::styled(
                    format!("Editing {original}"),
                    Style::default().fg(MUTED_COLOR),
                )));
            }
            lines.push(text_line(
                "Address",
                &form.address,
                form.field == ExchangeField::Address,
            ));
            lines.push(text_line(
                "Name",
                &form.name,
                form.field == ExchangeField::Name,
            ));
            lines
        }
        FormKind::Upload => {
            let form = &forms.upload;
            vec![
                text_line("JSON file", &form.path, form.field == UploadField::Path),
                field_line(
                    "Option",
                    format!("◀ {} ▶", form.option.as_str()),
                    form.field == UploadField::Option,
                ),
            ]
        }
    };

    let action = match kind {
        FormKind::Login => "Log in",
        FormKind::Refresh => "Run clustering",
        FormKind::Exchange => "Save",
        FormKind::Upload => "Upload",
    };
    lines.push(Line::default());
    lines.push(submit_line(action, forms.get(kind).can_submit()));
    lines
}
