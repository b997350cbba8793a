//! Text extraction from the supported document formats
//!
//! Extractors operate on in-memory bytes; file IO belongs to the
//! [`InputManager`](crate::input::manager::InputManager).

use crate::error::{Result, ResumeScanError};
use crate::input::file_detector::FileType;

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeScanError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

/// Stub extractor for DOCX input.
///
/// Real DOCX parsing is not implemented: the raw bytes are decoded as text,
/// which only produces readable output for files that are already plain text
/// under a .docx name. Kept as documented stub behavior rather than silently
/// pretending to understand the format.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Extract text from document bytes according to the declared file type.
///
/// Fails with `UnsupportedFormat` for anything other than the three
/// recognized types; no partial result is produced.
pub fn extract_text(bytes: &[u8], file_type: &FileType) -> Result<String> {
    match file_type {
        FileType::Text => PlainTextExtractor.extract(bytes),
        FileType::Pdf => PdfExtractor.extract(bytes),
        FileType::Docx => DocxExtractor.extract(bytes),
        FileType::Unknown => Err(ResumeScanError::UnsupportedFormat(
            "expected plain text, PDF or DOCX".to_string(),
        )),
    }
}
