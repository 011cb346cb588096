//! Directory listing state for the drive explorer.
//!
//! [`DirectoryStore`] owns the currently displayed folder: its path and the
//! sorted folder/file entries. It never talks to the network itself; the
//! controller issues a listing fetch, tags it with the [`NavTicket`] returned
//! by [`DirectoryStore::begin`], and feeds the outcome back through
//! [`DirectoryStore::complete`] or [`DirectoryStore::fail`].
//!
//! Every `begin` invalidates all tickets issued before it, so when
//! navigations overlap only the most recently requested path can become
//! visible. A late response for a superseded request is dropped without
//! touching state.

use std::cmp::Ordering;

use crate::core::error::FetchError;
use crate::models::{DirectoryListing, Entry};

/// Proof that a listing request was issued, carrying its sequence stamp.
///
/// Tickets are consumed by `complete`/`fail`; a ticket older than the most
/// recently issued one is stale and its outcome is ignored.
#[derive(Debug)]
pub struct NavTicket {
    seq: u64,
    path: String,
}

impl NavTicket {
    /// The path this listing request was issued for.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Holds the current folder's contents and the navigation path.
#[derive(Clone, Debug, Default)]
pub struct DirectoryStore {
    current_path: String,
    folders: Vec<Entry>,
    files: Vec<Entry>,
    latest_seq: u64,
    loading: bool,
    error: Option<FetchError>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the currently displayed folder ("" is the root).
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Sub-folders of the current folder, sorted by name.
    pub fn folders(&self) -> &[Entry] {
        &self.folders
    }

    /// Files of the current folder, sorted by name.
    pub fn files(&self) -> &[Entry] {
        &self.files
    }

    /// File entry at `index` in the sorted file list.
    pub fn file_at(&self, index: usize) -> Option<&Entry> {
        self.files.get(index)
    }

    /// Whether a listing request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error of the most recent failed navigation, until the next attempt.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Issue a navigation towards `path`.
    ///
    /// Marks the store as loading and supersedes any in-flight request.
    pub fn begin(&mut self, path: &str) -> NavTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        NavTicket {
            seq: self.latest_seq,
            path: path.to_string(),
        }
    }

    /// Apply a completed listing for `ticket`.
    ///
    /// Returns `false` without touching state when the ticket has been
    /// superseded by a newer `begin`. On success the whole directory state
    /// is replaced, with folders and files each sorted by name.
    pub fn complete(&mut self, ticket: &NavTicket, listing: DirectoryListing) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }
        let DirectoryListing { mut folders, mut files } = listing;
        sort_entries(&mut folders);
        sort_entries(&mut files);
        self.current_path = ticket.path.clone();
        self.folders = folders;
        self.files = files;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a failed listing fetch for `ticket`.
    ///
    /// The previous directory state is retained; only the error surface and
    /// the loading flag change. Stale tickets are ignored.
    pub fn fail(&mut self, ticket: &NavTicket, err: FetchError) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }
        self.loading = false;
        self.error = Some(err);
        true
    }
}

/// Sort entries ascending by name, independent of server order.
///
/// Case-insensitive per-character comparison, with the raw name as a
/// deterministic tie-break for names differing only in case.
fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}

fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(folders: &[(&str, &str)], files: &[(&str, &str)]) -> DirectoryListing {
        DirectoryListing {
            folders: folders.iter().map(|(n, p)| Entry::new(n, p)).collect(),
            files: files.iter().map(|(n, p)| Entry::new(n, p)).collect(),
        }
    }

    #[test]
    fn test_complete_sorts_independently_of_server_order() {
        let mut store = DirectoryStore::new();
        let ticket = store.begin("");
        assert!(store.is_loading());

        let ok = store.complete(
            &ticket,
            listing(&[("b", "b"), ("a", "a")], &[("z.txt", "z.txt"), ("M.txt", "M.txt")]),
        );
        assert!(ok);
        assert!(!store.is_loading());
        assert_eq!(store.current_path(), "");

        let folder_names: Vec<_> = store.folders().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(folder_names, vec!["a", "b"]);
        // Case-insensitive: "M.txt" sorts before "z.txt".
        let file_names: Vec<_> = store.files().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(file_names, vec!["M.txt", "z.txt"]);
    }

    #[test]
    fn test_last_request_wins() {
        let mut store = DirectoryStore::new();
        let a = store.begin("a");
        let b = store.begin("b");

        // B's response arrives first and is applied.
        assert!(store.complete(&b, listing(&[("inner", "b/inner")], &[])));
        assert_eq!(store.current_path(), "b");

        // A's response arrives late and is dropped.
        assert!(!store.complete(&a, listing(&[], &[("late.txt", "a/late.txt")])));
        assert_eq!(store.current_path(), "b");
        assert!(store.files().is_empty());
    }

    #[test]
    fn test_stale_completion_keeps_loading_for_newer_request() {
        let mut store = DirectoryStore::new();
        let a = store.begin("a");
        let _b = store.begin("b");

        // A settles while B is still in flight: state must stay loading.
        assert!(!store.complete(&a, listing(&[], &[])));
        assert!(store.is_loading());
        assert!(!store.fail(&a, FetchError::Timeout));
        assert!(store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_failure_retains_previous_listing() {
        let mut store = DirectoryStore::new();
        let first = store.begin("docs");
        assert!(store.complete(&first, listing(&[("sub", "docs/sub")], &[("a.txt", "docs/a.txt")])));

        let second = store.begin("docs/missing");
        assert!(store.fail(&second, FetchError::HttpError(404)));
        assert!(!store.is_loading());
        assert_eq!(store.error(), Some(&FetchError::HttpError(404)));
        // Stale-but-consistent: the old listing is still visible.
        assert_eq!(store.current_path(), "docs");
        assert_eq!(store.folders().len(), 1);
        assert_eq!(store.files().len(), 1);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut store = DirectoryStore::new();
        let t = store.begin("x");
        assert!(store.fail(&t, FetchError::Timeout));
        assert!(store.error().is_some());

        let _ = store.begin("y");
        assert!(store.error().is_none());
        assert!(store.is_loading());
    }
}
