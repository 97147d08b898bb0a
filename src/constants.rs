//! Application constants for the ethcluster TUI.
//!
//! Timing values, UI dimensions and the external URLs the interface links
//! to live here so they stay consistent across modules.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Main loop tick. Toast durations are expressed in ticks of this length.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Delay between the last search keystroke and re-evaluating the selection.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(65);

/// Toast duration for clipboard confirmations (one second).
pub const COPY_TOAST_TICKS: u8 = 10;

/// Toast duration for export and status notices.
pub const STATUS_TOAST_TICKS: u8 = 25;

// ============================================================================
// Tables
// ============================================================================

/// Rows per table page.
pub const PAGE_SIZE: usize = 20;

/// Default scope percentage offered by the refresh form.
pub const DEFAULT_REFRESH_SCOPE: u8 = 50;

/// Step applied by the left/right keys on the scope slider.
pub const SCOPE_STEP: u8 = 5;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the cluster summary strip (in rows).
pub const SUMMARY_HEIGHT: u16 = 3;

/// Width of the results column when visible (percent).
pub const RESULTS_WIDTH_PERCENT: u16 = 30;

// ============================================================================
// External Links
// ============================================================================

/// Block explorer base for transactions.
pub const ETHERSCAN_TX_URL: &str = "https://etherscan.io/tx/";

/// Block explorer base for addresses.
pub const ETHERSCAN_ADDRESS_URL: &str = "https://etherscan.io/address/";

/// Donation address shown in the about dialog.
pub const DONATE_ADDRESS: &str = "0x81E11145Fc60Da6ebD43eee7c19e18Ce9e21Bfd5";

/// Default clustering server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Explorer URL of a transaction.
#[must_use]
pub fn tx_url(hash: &str) -> String {
    format!("{ETHERSCAN_TX_URL}{hash}")
}

/// Explorer URL of an address. Etherscan expects lowercase hex.
#[must_use]
pub fn address_url(address: &str) -> String {
    format!("{ETHERSCAN_ADDRESS_URL}{}", address.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_urls() {
        assert_eq!(tx_url("0xAb"), "https://etherscan.io/tx/0xAb");
        assert_eq!(
            address_url("0xAbCd"),
            "https://etherscan.io/address/0xabcd"
        );
    }
}
