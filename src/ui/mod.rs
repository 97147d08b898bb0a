//! UI rendering module for the ethcluster TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of all UI components including panels, modals, and overlays.
//!
//! # Module Structure
//!
//! - `panels` - Main content panels (results table, cluster graph, summary)
//! - `popups` - Modal dialogs (info, exchange list, forms, transactions)
//! - `components` - Reusable UI components (tables, toast notifications)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::state::App;

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draw order:
/// 1. Header, results column (if shown), graph, summary and footer
/// 2. Open modals, bottom first
/// 3. Toast notifications as a non-blocking overlay
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size, app.ui.results_visible);

    header::render(frame, layout.header, app);
    if let Some(results) = layout.results {
        panels::render_results(app, frame, results);
    }
    panels::render_graph(app, frame, layout.graph);
    panels::render_summary(app, frame, layout.summary);
    footer::render(frame, layout.footer, app);

    popups::render_modals(app, frame, size);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Tests
// ============================================================================
