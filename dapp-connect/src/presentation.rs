//! What the connect page shows for a given [`ConnectionState`]

use shared::utils::abbreviate_address;

use crate::state::connection::ConnectionState;

pub const CONNECT_LABEL: &str = "Connect";
pub const CONNECTING_LABEL: &str = "Connecting...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectView {
    /// Error text replaces the whole page body
    Error(String),
    Greeting { address: String, abbreviated: String },
    Button { label: &'static str, disabled: bool },
}

impl ConnectView {
    pub fn from_state(state: &ConnectionState) -> Self {
        if let Some(error) = &state.error {
            return ConnectView::Error(error.message());
        }
        if let Some(data) = &state.data {
            let address = data.default_account.address.clone();
            return ConnectView::Greeting {
                abbreviated: abbreviate_address(&address),
                address,
            };
        }
        if state.loading {
            ConnectView::Button { label: CONNECTING_LABEL, disabled: true }
        } else {
            ConnectView::Button { label: CONNECT_LABEL, disabled: false }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectError;
    use crate::state::connection::ConnectionData;
    use shared::dto::{AccountMeta, InjectedAccount};

    #[test]
    fn test_idle_shows_enabled_button() {
        assert_eq!(
            ConnectView::from_state(&ConnectionState::default()),
            ConnectView::Button { label: "Connect", disabled: false }
        );
    }

    #[test]
    fn test_loading_shows_disabled_button() {
        assert_eq!(
            ConnectView::from_state(&ConnectionState::connecting()),
            ConnectView::Button { label: "Connecting...", disabled: true }
        );
    }

    #[test]
    fn test_error_replaces_body() {
        let state = ConnectionState::failed(ConnectError::Extension("Rejected".into()));
        assert_eq!(ConnectView::from_state(&state), ConnectView::Error("Rejected".into()));
    }

    #[test]
    fn test_greeting_abbreviates() {
        let account = InjectedAccount {
            address: "5F3sa2TJAWMqDhXG6jhV4N8ko9SxwGy8TpaNS1repo5EYjQX".to_string(),
            meta: AccountMeta::default(),
            account_type: None,
        };
        let data = ConnectionData::from_accounts(vec![account]).unwrap();
        let state = ConnectionState::connected(data);
        match ConnectView::from_state(&state) {
            ConnectView::Greeting { abbreviated, .. } => assert_eq!(abbreviated, "5F3...jQX"),
            other => panic!("unexpected view {:?}", other),
        }
    }
}
