//! Pathname-based routing for the drive explorer.
//!
//! The displayed folder is mirrored into the browser location as
//! `/drive/<path>`, one history entry per navigated path. Back/forward
//! notifications are decoded back into a route by the explorer.

use crate::config::ROUTE_PREFIX;

/// A drive location, identified by its relative path ("" is the root).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriveRoute {
    path: String,
}

impl DriveRoute {
    /// Build a route for the given relative path, trimming stray separators.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.trim_matches('/').to_string(),
        }
    }

    /// The relative drive path this route points at.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parse a location pathname into a route.
    ///
    /// `/drive`, `/drive/` and anything outside the prefix map to the root.
    pub fn from_pathname(pathname: &str) -> Self {
        let rest = pathname
            .strip_prefix(ROUTE_PREFIX)
            .unwrap_or("")
            .trim_matches('/');
        Self {
            path: rest.to_string(),
        }
    }

    /// Encode this route as a location pathname.
    pub fn to_pathname(&self) -> String {
        if self.path.is_empty() {
            ROUTE_PREFIX.to_string()
        } else {
            format!("{}/{}", ROUTE_PREFIX, self.path)
        }
    }

    /// Read the current route from the browser location.
    pub fn current() -> Self {
        let pathname = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let decoded = js_sys::decode_uri_component(&pathname)
            .map(|s| String::from(s))
            .unwrap_or(pathname);
        Self::from_pathname(&decoded)
    }

    /// Record this route as a new history entry without reloading the page.
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let encoded = String::from(js_sys::encode_uri(&self.to_pathname()));
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&encoded));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(DriveRoute::from_pathname("/drive").path(), "");
        assert_eq!(DriveRoute::from_pathname("/drive/").path(), "");
        assert_eq!(DriveRoute::from_pathname("/drive/docs").path(), "docs");
        assert_eq!(
            DriveRoute::from_pathname("/drive/docs/sub/").path(),
            "docs/sub"
        );
        // Locations outside the drive prefix fall back to the root.
        assert_eq!(DriveRoute::from_pathname("/").path(), "");
        assert_eq!(DriveRoute::from_pathname("/other").path(), "");
    }

    #[test]
    fn test_route_to_pathname() {
        assert_eq!(DriveRoute::new("").to_pathname(), "/drive");
        assert_eq!(DriveRoute::new("a").to_pathname(), "/drive/a");
        assert_eq!(DriveRoute::new("docs/sub").to_pathname(), "/drive/docs/sub");
        // Stray separators are trimmed on construction.
        assert_eq!(DriveRoute::new("/docs/").to_pathname(), "/drive/docs");
    }

    #[test]
    fn test_route_round_trip() {
        for path in ["", "a", "docs/sub", "music/2024"] {
            let route = DriveRoute::new(path);
            assert_eq!(DriveRoute::from_pathname(&route.to_pathname()), route);
        }
    }
}
