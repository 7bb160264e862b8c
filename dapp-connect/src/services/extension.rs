//! Polkadot Extension Integration via wasm-bindgen
//!
//! Injected extensions (polkadot-js, Talisman, SubWallet, ...) register themselves
//! under `window.injectedWeb3[name]`. A dapp calls `enable(appName)` on each one,
//! which prompts the user to authorize it, and then reads the authorized accounts.

use async_trait::async_trait;
use shared::dto::{InjectedAccount, InjectedExtensionInfo};
use wasm_bindgen::prelude::*;

use crate::error::{ConnectError, Result};

/// The two extension operations the connect flow consumes.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait ExtensionBridge {
    /// Ask every injected extension to authorize `app_name`.
    ///
    /// Returns the extensions that accepted; an empty list means none is
    /// installed or all of them declined.
    async fn enable(&self, app_name: &str) -> Result<Vec<InjectedExtensionInfo>>;

    /// Accounts authorized by the enabled extensions, in extension order.
    async fn accounts(&self) -> Result<Vec<InjectedAccount>>;
}

// ============================================================================
// INJECTED WEB3 (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
let enabledExtensions = [];

export function hasInjectedWeb3() {
    return typeof window !== 'undefined'
        && !!window.injectedWeb3
        && Object.keys(window.injectedWeb3).length > 0;
}

export async function enableExtensions(appName) {
    const injected = (typeof window !== 'undefined' && window.injectedWeb3) || {};
    const entries = Object.entries(injected);

    const rejections = [];
    const results = await Promise.all(entries.map(async ([name, ext]) => {
        if (!ext || typeof ext.enable !== 'function') {
            return null;
        }
        try {
            const api = await ext.enable(appName);
            return { name, version: String(ext.version || ''), api };
        } catch (error) {
            console.warn('Extension ' + name + ' declined: ' + (error && error.message ? error.message : error));
            rejections.push(error);
            return null;
        }
    }));

    enabledExtensions = results.filter((r) => r !== null);

    // Nothing enabled but something refused: that refusal is the answer.
    if (enabledExtensions.length === 0 && rejections.length > 0) {
        throw rejections[0];
    }

    return enabledExtensions.map(({ name, version }) => ({ name, version }));
}

export async function listAccounts() {
    if (enabledExtensions.length === 0) {
        throw new Error('No extension enabled: call enableExtensions first');
    }

    const lists = await Promise.all(enabledExtensions.map(async ({ name, api }) => {
        const accounts = await api.accounts.get();
        return accounts.map((account) => ({
            address: account.address,
            meta: {
                name: account.name,
                source: name,
                genesisHash: account.genesisHash || undefined,
            },
            type: account.type,
        }));
    }));

    return lists.flat();
}
")]
extern "C" {
    /// Whether any extension has registered itself on the page
    #[wasm_bindgen(js_name = hasInjectedWeb3)]
    fn has_injected_web3() -> bool;

    #[wasm_bindgen(js_name = enableExtensions, catch)]
    async fn enable_extensions(app_name: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = listAccounts, catch)]
    async fn list_accounts() -> std::result::Result<JsValue, JsValue>;
}

// ============================================================================
// BRIDGE
// ============================================================================

/// [`ExtensionBridge`] backed by `window.injectedWeb3`
#[derive(Clone, Copy, Debug, Default)]
pub struct PolkadotJsBridge;

impl PolkadotJsBridge {
    pub fn new() -> Self {
        Self
    }

    /// Whether an extension is present before anything is enabled
    pub fn is_available(&self) -> bool {
        has_injected_web3()
    }
}

#[async_trait(?Send)]
impl ExtensionBridge for PolkadotJsBridge {
    async fn enable(&self, app_name: &str) -> Result<Vec<InjectedExtensionInfo>> {
        let value = enable_extensions(app_name).await.map_err(ConnectError::from_js)?;
        let extensions: Vec<InjectedExtensionInfo> = serde_wasm_bindgen::from_value(value)?;
        log::debug!(
            "Enabled extensions: {:?}",
            extensions.iter().map(|e| e.name.as_str()).collect::<Vec<_>>()
        );
        Ok(extensions)
    }

    async fn accounts(&self) -> Result<Vec<InjectedAccount>> {
        let value = list_accounts().await.map_err(ConnectError::from_js)?;
        let accounts: Vec<InjectedAccount> = serde_wasm_bindgen::from_value(value)?;
        Ok(accounts)
    }
}
