//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL (`window.location.search`)
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    parse_query_param(&search, key)
}

/// Look up `key` in a raw query string, with or without the leading `?`.
///
/// A key without `=` yields an empty string. Values are percent-decoded; a
/// value that fails to decode is returned raw.
pub fn parse_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    for pair in query_string.split('&') {
        let (param_key, param_value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if param_key == key {
            return Some(
                urlencoding::decode(param_value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| param_value.to_string()),
            );
        }
    }

    None
}
