//! Relative path helpers for the drive tree.
//!
//! Drive paths are slash-separated and rooted at an implicit home; the empty
//! string denotes the root. Paths never begin or end with a separator.

/// Return the path with its last segment removed.
///
/// Top-level children and the root itself map to the root ("").
pub fn parent_of(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, _)) => parent.to_string(),
        None => String::new(),
    }
}

/// Join a parent path and a child name into the child's path.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Split a path into its segments; the root has none.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of(""), "");
        assert_eq!(parent_of("docs"), "");
        assert_eq!(parent_of("docs/sub"), "docs");
        assert_eq!(parent_of("a/b/c"), "a/b");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "docs"), "docs");
        assert_eq!(join("docs", "sub"), "docs/sub");
    }

    #[test]
    fn test_join_parent_round_trip() {
        for (parent, name) in [("", "a"), ("a", "b"), ("a/b", "c")] {
            assert_eq!(parent_of(&join(parent, name)), parent);
        }
    }

    #[test]
    fn test_segments() {
        assert!(segments("").is_empty());
        assert_eq!(segments("docs"), vec!["docs"]);
        assert_eq!(segments("a/b/c"), vec!["a", "b", "c"]);
    }
}
