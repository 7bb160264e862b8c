//! # Connect Flow
//!
//! `Idle → Connecting → {Connected | Failed}`
//!
//! One activation runs exactly one enable-then-fetch sequence against the
//! [`ExtensionBridge`]. The result is applied by a single synchronous completion
//! handler: on success it stores the connected state, publishes the default
//! address and navigates home, with no await point between those writes; on
//! failure it stores the error and touches nothing else.
//!
//! Collaborators are injected through [`ConnectHooks`] and a [`StateSlot`], so
//! the flow runs the same against Leptos signals and against plain cells.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use shared::utils::abbreviate_address;

use crate::config::ConnectConfig;
use crate::error::{ConnectError, Result};
use crate::services::extension::ExtensionBridge;
use crate::state::app::Alert;
use crate::state::connection::{ConnectPhase, ConnectionData, ConnectionState};

/// Holder of the page's [`ConnectionState`].
///
/// The holder can go away while an attempt is pending (the page unmounts): `current`
/// then returns `None` and `replace` returns `false`.
pub trait StateSlot {
    fn current(&self) -> Option<ConnectionState>;
    fn replace(&self, state: ConnectionState) -> bool;
}

impl StateSlot for RwSignal<ConnectionState> {
    fn current(&self) -> Option<ConnectionState> {
        self.try_get_untracked()
    }

    fn replace(&self, state: ConnectionState) -> bool {
        self.try_set(state).is_none()
    }
}

/// [`StateSlot`] outside the reactive runtime
#[derive(Clone, Debug, Default)]
pub struct LocalSlot(Rc<RefCell<ConnectionState>>);

impl LocalSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> ConnectionState {
        self.0.borrow().clone()
    }
}

impl StateSlot for LocalSlot {
    fn current(&self) -> Option<ConnectionState> {
        Some(self.get())
    }

    fn replace(&self, state: ConnectionState) -> bool {
        *self.0.borrow_mut() = state;
        true
    }
}

/// Side effects a successful or failed connection triggers outside the page
#[derive(Clone)]
pub struct ConnectHooks {
    pub set_wallet_address: Rc<dyn Fn(String)>,
    pub navigate: Rc<dyn Fn(&str)>,
    pub show_alert: Rc<dyn Fn(Alert)>,
}

impl ConnectHooks {
    pub fn new(
        set_wallet_address: impl Fn(String) + 'static,
        navigate: impl Fn(&str) + 'static,
    ) -> Self {
        Self {
            set_wallet_address: Rc::new(set_wallet_address),
            navigate: Rc::new(navigate),
            show_alert: Rc::new(|_| {}),
        }
    }

    pub fn with_alerts(mut self, show_alert: impl Fn(Alert) + 'static) -> Self {
        self.show_alert = Rc::new(show_alert);
        self
    }
}

/// What [`Connector::activate`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// An attempt was already in flight
    Ignored,
    /// The attempt ran to the given terminal phase
    Completed(ConnectPhase),
    /// The state holder was gone when the outcome arrived; nothing was applied
    Abandoned,
}

pub struct Connector<B, S> {
    bridge: B,
    slot: S,
    hooks: ConnectHooks,
    config: ConnectConfig,
}

impl<B, S> Connector<B, S>
where
    B: ExtensionBridge,
    S: StateSlot,
{
    pub fn new(bridge: B, slot: S, hooks: ConnectHooks, config: ConnectConfig) -> Self {
        Self {
            bridge,
            slot,
            hooks,
            config,
        }
    }

    /// Current state, `None` once the holder is gone
    pub fn state(&self) -> Option<ConnectionState> {
        self.slot.current()
    }

    pub async fn activate(&self) -> Activation {
        match self.slot.current() {
            None => {
                log::debug!("Connect page is gone, ignoring activation");
                return Activation::Abandoned;
            }
            Some(state) if state.loading => {
                log::debug!("Connect already in progress, ignoring activation");
                return Activation::Ignored;
            }
            Some(_) => {}
        }

        if !self.slot.replace(ConnectionState::connecting()) {
            return Activation::Abandoned;
        }
        log::info!("Connecting to injected extensions as '{}'", self.config.app_name);

        let outcome = fetch_accounts(&self.bridge, &self.config.app_name).await;
        self.complete(outcome)
    }

    fn complete(&self, outcome: Result<ConnectionData>) -> Activation {
        match outcome {
            Ok(data) => {
                let address = data.default_account.address.clone();
                let short = abbreviate_address(&address);
                let count = data.accounts.len();

                if !self.slot.replace(ConnectionState::connected(data)) {
                    log::warn!(
                        "Connect page unmounted before {} was applied, dropping it",
                        short
                    );
                    return Activation::Abandoned;
                }
                log::info!("Connected {} account(s), default {}", count, short);

                (self.hooks.set_wallet_address)(address);
                (self.hooks.navigate)(&self.config.home_route);
                (self.hooks.show_alert)(Alert::success(format!("Connected as {}", short)));
                Activation::Completed(ConnectPhase::Connected)
            }
            Err(err) => {
                log::warn!("Connect failed [{}]: {}", err.code(), err);
                let message = err.message();
                if !self.slot.replace(ConnectionState::failed(err)) {
                    return Activation::Abandoned;
                }
                (self.hooks.show_alert)(Alert::failure(message));
                Activation::Completed(ConnectPhase::Failed)
            }
        }
    }
}

/// Enable extensions for `app_name`, then read their accounts.
pub async fn fetch_accounts<B>(bridge: &B, app_name: &str) -> Result<ConnectionData>
where
    B: ExtensionBridge + ?Sized,
{
    let extensions = bridge.enable(app_name).await?;
    log::debug!("{} extension(s) enabled", extensions.len());
    if extensions.is_empty() {
        return Err(ConnectError::NoInjectedExtensions);
    }

    let accounts = bridge.accounts().await?;
    log::debug!("{} account(s) returned", accounts.len());
    ConnectionData::from_accounts(accounts).ok_or(ConnectError::NoAccounts)
}
