//! Input forms hosted inside modal dialogs.
//!
//! Each form implements [`FormInput`] so the command layer can route
//! keystrokes to whichever form is on top without knowing its fields.

use crate::constants::{DEFAULT_REFRESH_SCOPE, SCOPE_STEP};
use crate::domain::UploadOption;

// ============================================================================
// Text Field
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    masked: bool,
}

impl TextField {
    #[must_use]
    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            masked: false,
        }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Text as shown on screen; masked fields show one bullet per char.
    #[must_use]
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

// ============================================================================
// Form Trait
// ============================================================================

/// Keyboard-driven form behavior.
pub trait FormInput {
    fn type_char(&mut self, c: char);
    fn backspace(&mut self);
    fn next_field(&mut self);
    fn prev_field(&mut self);
    /// Left/right on non-text fields (sliders, toggles).
    fn adjust(&mut self, _forward: bool) {}
    /// Whether the proceed action is currently enabled.
    fn can_submit(&self) -> bool {
        true
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub password: TextField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            password: TextField::masked(),
        }
    }
}

impl FormInput for LoginForm {
    fn type_char(&mut self, c: char) {
        self.password.push(c);
    }

    fn backspace(&mut self) {
        self.password.pop();
    }

    fn next_field(&mut self) {}

    fn prev_field(&mut self) {}

    fn can_submit(&self) -> bool {
        !self.password.is_empty()
    }
}

// ============================================================================
// Refresh
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshField {
    #[default]
    MinHeight,
    MaxHeight,
    Scope,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshForm {
    pub min_height: TextField,
    pub max_height: TextField,
    /// Scope percentage, 0..=100.
    pub scope: u8,
    pub password: TextField,
    pub field: RefreshField,
    /// The password field only exists while logged out.
    pub with_password: bool,
}

impl Default for RefreshForm {
    fn default() -> Self {
        Self {
            min_height: TextField::default(),
            max_height: TextField::default(),
            scope: DEFAULT_REFRESH_SCOPE,
            password: TextField::masked(),
            field: RefreshField::default(),
            with_password: true,
        }
    }
}

impl RefreshForm {
    #[must_use]
    pub fn new(logged_in: bool) -> Self {
        Self {
            with_password: !logged_in,
            ..Self::default()
        }
    }

    fn fields(&self) -> &'static [RefreshField] {
        if self.with_password {
            &[
                RefreshField::MinHeight,
                RefreshField::MaxHeight,
                RefreshField::Scope,
                RefreshField::Password,
            ]
        } else {
            &[
                RefreshField::MinHeight,
                RefreshField::MaxHeight,
                RefreshField::Scope,
            ]
        }
    }

    fn step(&mut self, forward: bool) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        let next = if forward {
            (pos + 1) % fields.len()
        } else {
            (pos + fields.len() - 1) % fields.len()
        };
        self.field = fields[next];
    }

    fn active_text(&mut self) -> Option<&mut TextField> {
        match self.field {
            RefreshField::MinHeight => Some(&mut self.min_height),
            RefreshField::MaxHeight => Some(&mut self.max_height),
            RefreshField::Password => Some(&mut self.password),
            RefreshField::Scope => None,
        }
    }
}

impl FormInput for RefreshForm {
    fn type_char(&mut self, c: char) {
        if let Some(field) = self.active_text() {
            field.push(c);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.active_text() {
            field.pop();
        }
    }

    fn next_field(&mut self) {
        self.step(true);
    }

    fn prev_field(&mut self) {
        self.step(false);
    }

    fn adjust(&mut self, forward: bool) {
        if self.field == RefreshField::Scope {
            self.scope = if forward {
                self.scope.saturating_add(SCOPE_STEP).min(100)
            } else {
                self.scope.saturating_sub(SCOPE_STEP)
            };
        }
    }
}

// ============================================================================
// Exchange Address
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeField {
    #[default]
    Address,
    Name,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeForm {
    pub address: TextField,
    pub name: TextField,
    /// Address being edited; `None` when adding.
    pub original: Option<String>,
    pub field: ExchangeField,
}

impl ExchangeForm {
    /// Form prefilled with an existing entry. The original address stays
    /// the edit target even if the address field is changed.
    #[must_use]
    pub fn edit(address: &str, name: &str) -> Self {
        Self {
            address: TextField::with_value(address),
            name: TextField::with_value(name),
            original: Some(address.to_string()),
            field: ExchangeField::Address,
        }
    }

    fn active(&mut self) -> &mut TextField {
        match self.field {
            ExchangeField::Address => &mut self.address,
            ExchangeField::Name => &mut self.name,
        }
    }
}

impl FormInput for ExchangeForm {
    fn type_char(&mut self, c: char) {
        self.active().push(c);
    }

    fn backspace(&mut self) {
        self.active().pop();
    }

    fn next_field(&mut self) {
        self.field = match self.field {
            ExchangeField::Address => ExchangeField::Name,
            ExchangeField::Name => ExchangeField::Address,
        };
    }

    fn prev_field(&mut self) {
        self.next_field();
    }

    fn can_submit(&self) -> bool {
        !self.address.is_empty()
    }
}

// ============================================================================
// Upload
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadField {
    #[default]
    Path,
    Option,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub path: TextField,
    pub option: UploadOption,
    pub field: UploadField,
}

impl FormInput for UploadForm {
    fn type_char(&mut self, c: char) {
        match self.field {
            UploadField::Path => self.path.push(c),
            UploadField::Option if c == ' ' => self.option = self.option.toggle(),
            UploadField::Option => {}
        }
    }

    fn backspace(&mut self) {
        if self.field == UploadField::Path {
            self.path.pop();
        }
    }

    fn next_field(&mut self) {
        self.field = match self.field {
            UploadField::Path => UploadField::Option,
            UploadField::Option => UploadField::Path,
        };
    }

    fn prev_field(&mut self) {
        self.next_field();
    }

    fn adjust(&mut self, _forward: bool) {
        if self.field == UploadField::Option {
            self.option = self.option.toggle();
        }
    }

    fn can_submit(&self) -> bool {
        !self.path.value().trim().is_empty()
    }
}

// ============================================================================
// Form Set
// ============================================================================

/// Which form a modal body hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Refresh,
    Exchange,
    Upload,
}

#[derive(Debug, Clone, Default)]
pub struct Forms {
    pub login: LoginForm,
    pub refresh: RefreshForm,
    pub exchange: ExchangeForm,
    pub upload: UploadForm,
}

impl Forms {
    pub fn get_mut(&mut self, kind: FormKind) -> &mut dyn FormInput {
        match kind {
            FormKind::Login => &mut self.login,
            FormKind::Refresh => &mut self.refresh,
            FormKind::Exchange => &mut self.exchange,
            FormKind::Upload => &mut self.upload,
        }
    }

    #[must_use]
    pub fn get(&self, kind: FormKind) -> &dyn FormInput {
        match kind {
            FormKind::Login => &self.login,
            FormKind::Refresh => &self.refresh,
            FormKind::Exchange => &self.exchange,
            FormKind::Upload => &self.upload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_proceed_disabled_while_empty() {
        let mut form = LoginForm::default();
        assert!(!form.can_submit());
        form.type_char('x');
        assert!(form.can_submit());
        assert_eq!(form.password.display(), "•");
        form.backspace();
        assert!(!form.can_submit());
    }

    #[test]
    fn test_refresh_form_skips_password_when_logged_in() {
        let mut form = RefreshForm::new(true);
        form.next_field();
        form.next_field();
        assert_eq!(form.field, RefreshField::Scope);
        form.next_field();
        assert_eq!(form.field, RefreshField::MinHeight);

        let mut form = RefreshForm::new(false);
        form.prev_field();
        assert_eq!(form.field, RefreshField::Password);
    }

    #[test]
    fn test_refresh_scope_slider_is_bounded() {
        let mut form = RefreshForm::new(true);
        form.field = RefreshField::Scope;
        for _ in 0..30 {
            form.adjust(true);
        }
        assert_eq!(form.scope, 100);
        for _ in 0..30 {
            form.adjust(false);
        }
        assert_eq!(form.scope, 0);
        form.type_char('7');
        assert!(form.min_height.is_empty());
    }

    #[test]
    fn test_edit_form_keeps_original_target() {
        let mut form = ExchangeForm::edit("0xold", "Kraken");
        form.backspace();
        form.type_char('X');
        assert_eq!(form.address.value(), "0xolX");
        assert_eq!(form.original.as_deref(), Some("0xold"));
    }

    #[test]
    fn test_upload_option_toggles_on_option_field() {
        let mut form = UploadForm::default();
        form.adjust(true);
        assert_eq!(form.option, UploadOption::Append);
        form.next_field();
        form.adjust(true);
        assert_eq!(form.option, UploadOption::Override);
        assert!(!form.can_submit());
    }
}
