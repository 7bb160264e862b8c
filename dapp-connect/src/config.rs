//! Application constants and connect configuration

use crate::utils::url::get_query_param;

/// Name the dapp announces to extensions in `enable(appName)`
pub const APP_NAME: &str = "Ava Gods";

// Routes
pub const HOME_ROUTE: &str = "/";
pub const CONNECT_ROUTE: &str = "/connect";

/// Query parameter that overrides [`APP_NAME`] when the helper is embedded elsewhere
pub const APP_NAME_QUERY_PARAM: &str = "app";

// UI constants
pub const ALERT_DISMISS_MS: u32 = 10_000;

/// Settings the connect flow runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectConfig {
    pub app_name: String,
    pub home_route: String,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            home_route: HOME_ROUTE.to_string(),
        }
    }
}

impl ConnectConfig {
    /// Defaults, with the app name taken from `?app=` when present and non-empty
    pub fn from_query() -> Self {
        Self::default().with_app_name(get_query_param(APP_NAME_QUERY_PARAM))
    }

    fn with_app_name(mut self, app_name: Option<String>) -> Self {
        if let Some(name) = app_name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
            self.app_name = name;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConnectConfig::default();
        assert_eq!(config.app_name, APP_NAME);
        assert_eq!(config.home_route, "/");
    }

    #[test]
    fn test_app_name_override() {
        let config = ConnectConfig::default().with_app_name(Some("Other Dapp".into()));
        assert_eq!(config.app_name, "Other Dapp");

        let config = ConnectConfig::default().with_app_name(Some("   ".into()));
        assert_eq!(config.app_name, APP_NAME);

        let config = ConnectConfig::default().with_app_name(None);
        assert_eq!(config.app_name, APP_NAME);
    }
}
