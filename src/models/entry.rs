//! Wire types for the remote drive API.

use serde::{Deserialize, Serialize};

/// A named item (folder or file) inside a directory listing.
///
/// `path` is relative to the drive root; for a direct child it is
/// `parent_path + "/" + name`, or just `name` when the parent is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// Display name of the item.
    pub name: String,
    /// Path of the item relative to the drive root.
    pub path: String,
}

impl Entry {
    #[cfg(test)]
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

/// Response body of the listing endpoint.
///
/// Absent or `null` arrays deserialize as empty listings, not as errors.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DirectoryListing {
    /// Sub-folders directly contained in the requested path.
    #[serde(default)]
    pub folders: Vec<Entry>,
    /// Files directly contained in the requested path.
    #[serde(default)]
    pub files: Vec<Entry>,
}

/// Response body of the preview metadata probe.
#[derive(Clone, Debug, Deserialize)]
pub struct PreviewProbe {
    /// Detected MIME type of the probed file.
    pub mime: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_missing_arrays_are_empty() {
        let listing: DirectoryListing = serde_json::from_str("{}").expect("parse");
        assert!(listing.folders.is_empty());
        assert!(listing.files.is_empty());

        let listing: DirectoryListing =
            serde_json::from_str(r#"{"files":[{"name":"a.txt","path":"a.txt"}]}"#).expect("parse");
        assert!(listing.folders.is_empty());
        assert_eq!(listing.files, vec![Entry::new("a.txt", "a.txt")]);
    }
}
