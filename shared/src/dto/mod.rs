//! # Data Transfer Objects (DTOs)
//!
//! Structures handed to the page by injected wallet extensions.
//!
//! ## Module Organization
//!
//! - [`account`] - Accounts and extension descriptors from `window.injectedWeb3`
//!
//! ## Serialization Format
//!
//! Extensions speak JavaScript objects, so field names are **camelCase** on the
//! wire (`genesisHash`) and snake_case in Rust. Optional fields are omitted when
//! `None`.
//!
//! ```text
//! {
//!   "address": "5F3sa2TJAWMqDhXG6jhV4N8ko9SxwGy8TpaNS1repo5EYjQX",
//!   "meta": { "name": "alice", "source": "polkadot-js", "genesisHash": null },
//!   "type": "sr25519"
//! }
//! ```

pub mod account;

pub use account::*;
