//! Reusable UI components for the ethcluster TUI.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages
//! - [`table`] - Paginated table view with search bar and row formatters

pub mod table;
pub mod toast;

pub use table::render_table;
pub use toast::render_toast;
