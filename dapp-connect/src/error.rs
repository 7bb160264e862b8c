//! # Connect Errors
//!
//! Every failure of the connect flow ends up as a [`ConnectError`] stored in the
//! page's [`ConnectionState`](crate::state::connection::ConnectionState).
//!
//! - `NO_INJECTED_EXTENSIONS` / `NO_ACCOUNTS` are rendered as the code itself
//! - [`Extension`](ConnectError::Extension) (`EXTENSION_ERROR`) shows the
//!   extension's message verbatim
//! - [`Decode`](ConnectError::Decode) (`DECODE_ERROR`) shows the decoder's message

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, ConnectError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// No compatible extension is installed, or none accepted the enable request.
    #[error("NO_INJECTED_EXTENSIONS")]
    NoInjectedExtensions,

    /// An extension is present but has not authorized any account for this dapp.
    #[error("NO_ACCOUNTS")]
    NoAccounts,

    /// Any other rejection from the extension (user denied access, extension
    /// locked, network failure...).
    #[error("{0}")]
    Extension(String),

    /// The extension returned something that is not shaped like an account list.
    #[error("{0}")]
    Decode(String),
}

impl ConnectError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ConnectError::NoInjectedExtensions => "NO_INJECTED_EXTENSIONS",
            ConnectError::NoAccounts => "NO_ACCOUNTS",
            ConnectError::Extension(_) => "EXTENSION_ERROR",
            ConnectError::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Text shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Convert a rejected JS promise value into an error, keeping `Error.message`
    /// when the value is an `Error` object.
    pub fn from_js(value: JsValue) -> Self {
        if let Some(text) = value.as_string() {
            return ConnectError::Extension(text);
        }
        let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string());
        match message {
            Some(text) => ConnectError::Extension(text),
            None => ConnectError::Extension(format!("Extension error: {:?}", value)),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for ConnectError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ConnectError::Decode(format!("Unexpected extension response: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_codes() {
        assert_eq!(ConnectError::NoInjectedExtensions.code(), "NO_INJECTED_EXTENSIONS");
        assert_eq!(ConnectError::NoAccounts.code(), "NO_ACCOUNTS");
        assert_eq!(ConnectError::Extension("x".into()).code(), "EXTENSION_ERROR");
        assert_eq!(ConnectError::Decode("x".into()).code(), "DECODE_ERROR");
    }

    #[test]
    fn test_messages() {
        assert_eq!(ConnectError::NoInjectedExtensions.message(), "NO_INJECTED_EXTENSIONS");
        assert_eq!(ConnectError::NoAccounts.message(), "NO_ACCOUNTS");
        assert_eq!(
            ConnectError::Extension("Rejected by user".into()).message(),
            "Rejected by user"
        );
    }
}
