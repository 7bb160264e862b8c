//! External services

pub mod extension;

pub use extension::{ExtensionBridge, PolkadotJsBridge};
