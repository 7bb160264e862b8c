//! Application-wide state shared between pages

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::config::ALERT_DISMISS_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertStatus {
    Success,
    Failure,
}

impl AlertStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertStatus::Success => "success",
            AlertStatus::Failure => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub status: AlertStatus,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self { status: AlertStatus::Success, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { status: AlertStatus::Failure, message: message.into() }
    }
}

/// Global application context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Address of the account the user connected with
    pub wallet_address: RwSignal<Option<String>>,
    pub alert: RwSignal<Option<Alert>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            wallet_address: RwSignal::new(None),
            alert: RwSignal::new(None),
        }
    }

    pub fn wallet_address(&self) -> Option<String> {
        self.wallet_address.get()
    }

    pub fn set_wallet_address(&self, address: String) {
        self.wallet_address.set(Some(address));
    }

    pub fn clear_wallet_address(&self) {
        self.wallet_address.set(None);
    }

    /// Show `alert`, replacing any visible one, and hide it after [`ALERT_DISMISS_MS`]
    /// unless it has been replaced in the meantime.
    pub fn show_alert(&self, alert: Alert) {
        self.alert.set(Some(alert.clone()));

        let slot = self.alert;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(ALERT_DISMISS_MS).await;
            let still_shown = slot.with_untracked(|current| current.as_ref() == Some(&alert));
            if still_shown {
                slot.set(None);
            }
        });
    }

    pub fn dismiss_alert(&self) {
        self.alert.set(None);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_app_context() -> AppContext {
    let context = AppContext::new();
    provide_context(context);
    context
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_constructors() {
        let alert = Alert::failure("NO_ACCOUNTS");
        assert_eq!(alert.status, AlertStatus::Failure);
        assert_eq!(alert.message, "NO_ACCOUNTS");
        assert_eq!(Alert::success("ok").status.css_class(), "success");
        assert_eq!(AlertStatus::Failure.css_class(), "error");
    }
}
