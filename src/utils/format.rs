//! Formatting utilities for display values.

/// Truncate a display name to `max` characters, appending an ellipsis.
///
/// Character-based rather than byte-based so multi-byte names never split
/// mid-codepoint. Names at or under the limit come back unchanged.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = name.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("short.txt", 20), "short.txt");
        assert_eq!(
            truncate_name("a-very-long-file-name.tar.gz", 20),
            "a-very-long-file-...",
        );
        assert_eq!(truncate_name("exactly-twenty-char!", 20), "exactly-twenty-char!");
    }

    #[test]
    fn test_truncate_name_multibyte() {
        let name = "日本語のとても長いファイル名です.txt";
        let truncated = truncate_name(name, 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with("..."));
    }
}
