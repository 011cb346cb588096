//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::FileType;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuDownload as Download, LuFile as File, LuFileArchive as FileArchive,
        LuFileCode as FileCode, LuFileJson as FileData, LuFileText as FileText,
        LuFolder as Folder, LuFolderOpen as FolderOpen, LuGlobe as FileHtml, LuHouse as Home,
        LuImage as FileImage, LuMusic as FileAudio, LuVideo as FileVideo, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsDownload as Download,
        BsFileEarmark as File, BsFileEarmarkCode as FileCode, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkRichtext as FileHtml,
        BsFileEarmarkSpreadsheet as FileData, BsFileEarmarkText as FileText,
        BsFileEarmarkZip as FileArchive, BsFolder2Open as FolderOpen, BsFolderFill as Folder,
        BsHouseFill as Home, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_HTML, FileHtml);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_DATA, FileData);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);

/// Display icon for a semantic file class.
pub fn file_icon(file_type: FileType) -> Icon {
    match file_type {
        FileType::Image => FILE_IMAGE,
        FileType::Text => FILE_TEXT,
        FileType::Video => FILE_VIDEO,
        FileType::Audio => FILE_AUDIO,
        FileType::Pdf => FILE_PDF,
        FileType::Html => FILE_HTML,
        FileType::Code => FILE_CODE,
        FileType::Data => FILE_DATA,
        FileType::Archive => FILE_ARCHIVE,
        // Unrecognized types get the generic file icon.
        FileType::Binary => FILE,
    }
}
