//! Semantic file classification by extension.

/// Semantic file classes used for icons and preview hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Image,
    Text,
    Video,
    Audio,
    Pdf,
    Html,
    Code,
    Data,
    Archive,
    /// Anything unrecognized, including names without an extension.
    Binary,
}

impl FileType {
    /// Detect the file type from a file name.
    ///
    /// Total and case-insensitive on the extension; names without an
    /// extension classify as [`FileType::Binary`].
    pub fn from_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
            _ => return Self::Binary,
        };

        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" | "ico" | "avif" => Self::Image,
            "txt" | "md" | "log" | "cfg" | "conf" | "ini" => Self::Text,
            "mp4" | "webm" | "mkv" | "mov" | "avi" | "m4v" => Self::Video,
            "mp3" | "wav" | "ogg" | "flac" | "m4a" | "aac" => Self::Audio,
            "pdf" => Self::Pdf,
            "html" | "htm" | "xhtml" => Self::Html,
            "rs" | "go" | "py" | "js" | "ts" | "c" | "h" | "cpp" | "hpp" | "java" | "rb" | "sh"
            | "css" | "sql" => Self::Code,
            "json" | "yaml" | "yml" | "toml" | "xml" | "csv" => Self::Data,
            "zip" | "tar" | "gz" | "tgz" | "bz2" | "xz" | "7z" | "rar" => Self::Archive,
            _ => Self::Binary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_name("photo.png"), FileType::Image);
        assert_eq!(FileType::from_name("photo.JPG"), FileType::Image);
        assert_eq!(FileType::from_name("notes.txt"), FileType::Text);
        assert_eq!(FileType::from_name("clip.mp4"), FileType::Video);
        assert_eq!(FileType::from_name("song.flac"), FileType::Audio);
        assert_eq!(FileType::from_name("paper.pdf"), FileType::Pdf);
        assert_eq!(FileType::from_name("index.html"), FileType::Html);
        assert_eq!(FileType::from_name("main.rs"), FileType::Code);
        assert_eq!(FileType::from_name("data.json"), FileType::Data);
        assert_eq!(FileType::from_name("backup.tar"), FileType::Archive);
        assert_eq!(FileType::from_name("blob.xyz"), FileType::Binary);
    }

    #[test]
    fn test_no_extension_is_binary() {
        assert_eq!(FileType::from_name("Makefile"), FileType::Binary);
        assert_eq!(FileType::from_name(""), FileType::Binary);
        // Dotfiles have no extension in the classification sense.
        assert_eq!(FileType::from_name(".profile"), FileType::Binary);
        assert_eq!(FileType::from_name("name."), FileType::Binary);
    }
}
