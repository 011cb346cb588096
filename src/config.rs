//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the explorer header.
pub const APP_NAME: &str = "Drive";

// =============================================================================
// Remote Drive API
// =============================================================================

/// Drive API endpoints, relative to the page origin.
pub mod api {
    /// Directory listing endpoint (`?path=<relative path>`).
    pub const LIST: &str = "/api/drive/list";

    /// Preview metadata probe endpoint (`?file=<relative path>`).
    pub const PREVIEW: &str = "/api/drive/preview";

    /// File content/download endpoint (`?file=<relative path>`).
    pub const DOWNLOAD: &str = "/api/drive/download";
}

/// Pathname prefix under which the explorer is served.
///
/// History entries are written as `/drive/<path>` and decoded back from it
/// on back/forward navigation.
pub const ROUTE_PREFIX: &str = "/drive";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Display Configuration
// =============================================================================

/// Maximum entry-name length shown in the grids before truncation.
pub const NAME_DISPLAY_LEN: usize = 20;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
