//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting SS58 wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`abbreviate_address`] - `format_address` with the 3/3 split used in greetings
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::abbreviate_address;
//!
//! let address = "5F3sa2TJAWMqDhXG6jhV4N8ko9SxwGy8TpaNS1repo5EYjQX";
//! assert_eq!(abbreviate_address(address), "5F3...jQX");
//! ```

/// Number of leading characters kept by [`abbreviate_address`]
pub const ABBREVIATED_PREFIX_LEN: usize = 3;
/// Number of trailing characters kept by [`abbreviate_address`]
pub const ABBREVIATED_SUFFIX_LEN: usize = 3;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
/// Slicing counts characters, not bytes.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
/// assert_eq!(format_address(addr, 4, 4), "5Grw...utQY");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Abbreviate an address to its first 3 and last 3 characters.
pub fn abbreviate_address(address: &str) -> String {
    format_address(address, ABBREVIATED_PREFIX_LEN, ABBREVIATED_SUFFIX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
        assert_eq!(format_address(addr, 4, 4), "5Grw...utQY");
        assert_eq!(format_address(addr, 6, 6), "5Grwva...GKutQY");
        assert_eq!(format_address(addr, 2, 2), "5G...QY");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abcdef", 3, 3), "abcdef");
        assert_eq!(format_address("abcdefg", 3, 3), "abc...efg");
    }

    #[test]
    fn test_format_address_counts_chars() {
        assert_eq!(format_address("ääääääää", 2, 2), "ää...ää");
    }

    #[test]
    fn test_abbreviate_address() {
        let addr = "5F3sa2TJAWMqDhXG6jhV4N8ko9SxwGy8TpaNS1repo5EYjQX";
        assert_eq!(abbreviate_address(addr), "5F3...jQX");
    }
}
