//! Connection state of the connect page
//!
//! The state is replaced wholesale on every transition, never patched field by field.

use shared::dto::InjectedAccount;

use crate::error::ConnectError;

/// Accounts obtained by a successful connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionData {
    pub accounts: Vec<InjectedAccount>,
    /// First account returned by the extension
    pub default_account: InjectedAccount,
}

impl ConnectionData {
    /// `None` when the extension returned no account
    pub fn from_accounts(accounts: Vec<InjectedAccount>) -> Option<Self> {
        let default_account = accounts.first()?.clone();
        Some(Self {
            accounts,
            default_account,
        })
    }
}

/// Where the connect flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectPhase {
    Idle,
    Connecting,
    Connected,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub data: Option<ConnectionData>,
    pub loading: bool,
    pub error: Option<ConnectError>,
}

impl ConnectionState {
    /// Attempt in flight; previous data and error are dropped
    pub fn connecting() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn connected(data: ConnectionData) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: ConnectError) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error),
        }
    }

    pub fn phase(&self) -> ConnectPhase {
        match (self.loading, &self.data, &self.error) {
            (true, _, _) => ConnectPhase::Connecting,
            (false, _, Some(_)) => ConnectPhase::Failed,
            (false, Some(_), None) => ConnectPhase::Connected,
            (false, None, None) => ConnectPhase::Idle,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.phase() == ConnectPhase::Connected
    }

    /// Address of the default account once connected
    pub fn address(&self) -> Option<&str> {
        self.data
            .as_ref()
            .map(|data| data.default_account.address.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::AccountMeta;

    fn account(address: &str) -> InjectedAccount {
        InjectedAccount {
            address: address.to_string(),
            meta: AccountMeta {
                name: None,
                source: "polkadot-js".to_string(),
                genesis_hash: None,
            },
            account_type: Some("sr25519".to_string()),
        }
    }

    #[test]
    fn test_default_is_idle() {
        let state = ConnectionState::default();
        assert_eq!(state.phase(), ConnectPhase::Idle);
        assert!(!state.loading);
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_connecting_clears_everything() {
        let state = ConnectionState::connecting();
        assert_eq!(state.phase(), ConnectPhase::Connecting);
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_connected_exposes_default_address() {
        let data = ConnectionData::from_accounts(vec![account("5Alice"), account("5Bob")]).unwrap();
        assert_eq!(data.default_account.address, "5Alice");

        let state = ConnectionState::connected(data);
        assert!(state.is_connected());
        assert_eq!(state.address(), Some("5Alice"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_has_error_only() {
        let state = ConnectionState::failed(ConnectError::NoAccounts);
        assert_eq!(state.phase(), ConnectPhase::Failed);
        assert_eq!(state.data, None);
        assert_eq!(state.address(), None);
    }

    #[test]
    fn test_from_empty_accounts() {
        assert_eq!(ConnectionData::from_accounts(vec![]), None);
    }
}
