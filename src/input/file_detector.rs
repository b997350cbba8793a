//! File type detection from extensions and declared MIME types

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "txt" => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    /// Map a declared MIME type to a file type. Only the three types the
    /// parser recognizes are accepted; everything else is `Unknown`.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => FileType::Pdf,
            DOCX_MIME => FileType::Docx,
            "text/plain" => FileType::Text,
            _ => FileType::Unknown,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Pdf => write!(f, "PDF"),
            FileType::Docx => write!(f, "DOCX"),
            FileType::Text => write!(f, "plain text"),
            FileType::Unknown => write!(f, "unknown"),
        }
    }
}
