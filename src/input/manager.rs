//! Input manager: reads document files and routes them to the extractors

use crate::error::{Result, ResumeScanError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::extract_text;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Reads documents from disk, detects their type by extension and memoizes
/// extracted text per path.
pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a document file and return its plain-text content.
    pub async fn extract_from_path(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeScanError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = detect_file_type(path)?;
        info!("Extracting {} content from: {}", file_type, path.display());

        // Documents are read fully into memory before processing begins.
        let bytes = fs::read(path).await?;
        let text = extract_text(&bytes, &file_type).map_err(|e| match e {
            ResumeScanError::UnsupportedFormat(_) => ResumeScanError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )),
            other => other,
        })?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn detect_file_type(path: &Path) -> Result<FileType> {
    let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
        ResumeScanError::InvalidInput(format!("File has no extension: {}", path.display()))
    })?;

    Ok(FileType::from_extension(extension))
}
