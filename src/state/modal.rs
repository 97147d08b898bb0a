//! Modal dialogs and the document that holds them.
//!
//! Dialogs are created from a loose [`ModalConfig`] and appended to a
//! [`ModalDocument`]. Nothing is validated: duplicates are allowed and id
//! lookups return the first match. All text is rendered as plain text, so
//! server-provided strings placed in a body cannot inject markup.

// ============================================================================
// Well-known Ids
// ============================================================================

pub const INFO_MODAL: &str = "infoModal";
pub const INFO_TEXT: &str = "infoText";
pub const EXCH_LIST_MODAL: &str = "exchsListModal";
pub const EXCH_LIST_BODY: &str = "exchsListModalBody";
pub const ADD_EXCH_MODAL: &str = "addExchAddrModal";
pub const EDIT_EXCH_MODAL: &str = "editExchAddrModal";
pub const EXCH_FORM_BODY: &str = "exchAddrForm";
pub const LOGIN_MODAL: &str = "loginModal";
pub const LOGIN_FORM_BODY: &str = "loginForm";
pub const REFRESH_MODAL: &str = "refreshModal";
pub const REFRESH_FORM_BODY: &str = "refreshForm";
pub const UPLOAD_MODAL: &str = "uploadModal";
pub const UPLOAD_FORM_BODY: &str = "uploadForm";
pub const TX_MODAL: &str = "txModal";
pub const TX_BODY: &str = "txModalBody";
pub const ABOUT_MODAL: &str = "aboutModal";
pub const ABOUT_TEXT: &str = "aboutText";
pub const QUIT_MODAL: &str = "confirmQuitModal";

// ============================================================================
// Config
// ============================================================================

/// Loose description of a modal. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalConfig {
    /// CSS-like declarations: `width: 80%; height: 60%`.
    pub style: Option<String>,
    pub id: Option<String>,
    pub header: Option<String>,
    pub body: Option<String>,
    pub body_id: Option<String>,
    pub footer: Option<String>,
}

// ============================================================================
// Modal
// ============================================================================

const DEFAULT_WIDTH_PERCENT: u16 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalBody {
    pub id: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub id: Option<String>,
    pub header: String,
    pub body: Option<ModalBody>,
    pub footer: Option<String>,
    pub width_percent: u16,
    /// Fixed height in percent; sized to content when `None`.
    pub height_percent: Option<u16>,
}

impl Modal {
    fn from_config(config: ModalConfig) -> Self {
        let (width_percent, height_percent) = config
            .style
            .as_deref()
            .map(parse_style)
            .unwrap_or((DEFAULT_WIDTH_PERCENT, None));

        let body = if config.body.is_some() || config.body_id.is_some() {
            Some(ModalBody {
                id: config.body_id,
                text: config.body.unwrap_or_default(),
            })
        } else {
            None
        };

        Self {
            id: config.id,
            header: config.header.unwrap_or_default(),
            body,
            footer: config.footer,
            width_percent,
            height_percent,
        }
    }

    #[must_use]
    pub fn body_id(&self) -> Option<&str> {
        self.body.as_ref().and_then(|b| b.id.as_deref())
    }

    #[must_use]
    pub fn body_text(&self) -> &str {
        self.body.as_ref().map_or("", |b| b.text.as_str())
    }

    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Reads `width`/`max-width`/`height` percentages; ignores anything else.
fn parse_style(style: &str) -> (u16, Option<u16>) {
    let mut width = DEFAULT_WIDTH_PERCENT;
    let mut height = None;
    for decl in style.split(';') {
        let Some((key, value)) = decl.split_once(':') else {
            continue;
        };
        let Some(percent) = value
            .trim()
            .strip_suffix('%')
            .and_then(|v| v.trim().parse::<u16>().ok())
        else {
            continue;
        };
        let percent = percent.clamp(10, 100);
        match key.trim() {
            "width" | "max-width" => width = percent,
            "height" | "max-height" => height = Some(percent),
            _ => {}
        }
    }
    (width, height)
}

// ============================================================================
// Document
// ============================================================================

/// All created modals plus the stack of currently open ones.
#[derive(Debug, Clone, Default)]
pub struct ModalDocument {
    modals: Vec<Modal>,
    /// Indices into `modals`, topmost last.
    open: Vec<usize>,
}

impl ModalDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a modal from `config` and appends it to the document.
    pub fn create_modal(&mut self, config: ModalConfig) {
        self.modals.push(Modal::from_config(config));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.modals.iter().position(|m| m.has_id(id))
    }

    /// First modal with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Modal> {
        self.position(id).map(|i| &self.modals[i])
    }

    /// Opens the modal (or raises it if already open).
    pub fn show(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.open.retain(|&i| i != index);
        self.open.push(index);
        true
    }

    pub fn hide(&mut self, id: &str) {
        if let Some(index) = self.position(id) {
            self.open.retain(|&i| i != index);
        }
    }

    /// Closes the topmost modal.
    pub fn hide_top(&mut self) -> Option<&Modal> {
        self.open.pop().map(|i| &self.modals[i])
    }

    pub fn hide_all(&mut self) {
        self.open.clear();
    }

    #[must_use]
    pub fn top(&self) -> Option<&Modal> {
        self.open.last().map(|&i| &self.modals[i])
    }

    #[must_use]
    pub fn top_id(&self) -> Option<&str> {
        self.top().and_then(|m| m.id.as_deref())
    }

    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.position(id).is_some_and(|index| self.open.contains(&index))
    }

    /// Open modals, bottom first.
    pub fn open_modals(&self) -> impl Iterator<Item = &Modal> {
        self.open.iter().map(|&i| &self.modals[i])
    }

    /// Replaces the text of the first body with the given id.
    pub fn set_body_text(&mut self, body_id: &str, text: impl Into<String>) -> bool {
        let body = self
            .modals
            .iter_mut()
            .filter_map(|m| m.body.as_mut())
            .find(|b| b.id.as_deref() == Some(body_id));
        match body {
            Some(body) => {
                body.text = text.into();
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
