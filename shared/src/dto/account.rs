use serde::{Deserialize, Serialize};

/// Metadata an extension attaches to each account it exposes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name of the extension the account came from (e.g. "polkadot-js", "talisman")
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_hash: Option<String>,
}

/// Account as returned by an injected extension's `accounts.get()`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InjectedAccount {
    /// SS58-encoded address
    pub address: String,
    #[serde(default)]
    pub meta: AccountMeta,
    /// Key type ("sr25519", "ed25519", "ecdsa", "ethereum")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

/// An extension that accepted the dapp's `enable` request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InjectedExtensionInfo {
    pub name: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_extension_account() {
        let json = r#"{
            "address": "5F3sa2TJAWMqDhXG6jhV4N8ko9SxwGy8TpaNS1repo5EYjQX",
            "meta": { "name": "alice", "source": "polkadot-js", "genesisHash": "0x91b1" },
            "type": "sr25519"
        }"#;
        let account: InjectedAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.address, "5F3sa2TJAWMqDhXG6jhV4N8ko9SxwGy8TpaNS1repo5EYjQX");
        assert_eq!(account.meta.source, "polkadot-js");
        assert_eq!(account.meta.genesis_hash.as_deref(), Some("0x91b1"));
        assert_eq!(account.account_type.as_deref(), Some("sr25519"));
        assert_eq!(account.meta.name.as_deref(), Some("alice"));
    }

    #[test]
    fn test_decode_minimal_account() {
        let json = r#"{ "address": "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY" }"#;
        let account: InjectedAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.meta, AccountMeta::default());
        assert_eq!(account.account_type, None);
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let account = InjectedAccount {
            address: "5Grw".to_string(),
            meta: AccountMeta {
                name: None,
                source: "talisman".to_string(),
                genesis_hash: None,
            },
            account_type: None,
        };
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "address": "5Grw", "meta": { "source": "talisman" } })
        );
    }
}
