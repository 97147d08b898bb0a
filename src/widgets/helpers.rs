//! Helper functions for formatting addresses and Ether amounts.

// ============================================================================
// Address Formatting
// ============================================================================

/// Truncate an address to fit in the given width.
///
/// If the address is longer than `max_len`, it is shortened with an ellipsis
/// in the middle (e.g. `0xAAA...00001`).
///
/// # Examples
///
/// ```ignore
/// let short = truncate_address("0xAAA0000000000000000000000000000000000001", 13);
/// assert_eq!(short, "0xAAA...00001");
/// ```
#[must_use]
pub fn truncate_address(addr: &str, max_len: usize) -> String {
    let len = addr.chars().count();
    if len <= max_len {
        return addr.to_string();
    }

    if max_len < 7 {
        return addr.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = addr.chars().take(prefix_len).collect();
    let suffix: String = addr.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Formats an Ether amount with three decimals, as the summary labels do.
#[must_use]
pub fn format_ether(amount: f64) -> String {
    format!("{amount:.3} ETH")
}

// ============================================================================
// Tests
// ============================================================================
