//! # Shared Types Library
//!
//! Plain Rust types and helpers used by the connect helper, kept free of web
//! dependencies so they can be tested natively.
//!
//! ## Structure
//!
//! - **[`dto`]**: Objects handed over by injected wallet extensions
//!   - **[`dto::account`]**: Accounts and enabled extension descriptors
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::abbreviate_address`]**: 3/3 abbreviation used by the greeting
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::InjectedAccount;
//! use shared::utils::abbreviate_address;
//!
//! let account: InjectedAccount = serde_json::from_str(
//!     r#"{ "address": "5F3sa2TJAWMqDhXG6jhV4N8ko9SxwGy8TpaNS1repo5EYjQX",
//!          "meta": { "source": "polkadot-js" } }"#,
//! ).unwrap();
//!
//! assert_eq!(abbreviate_address(&account.address), "5F3...jQX");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
