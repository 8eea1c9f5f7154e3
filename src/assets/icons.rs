//! Resolve `<dir>/<token lowercase>.png` icon files.

use crate::utils::config::{ICON_EXTENSION, ICON_MIME_TYPE};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, warn};
use std::path::PathBuf;

/// Looks up icon files for token symbols
#[derive(Debug, Clone)]
pub struct IconResolver {
    dir: PathBuf,
}

impl IconResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where the icon for `token` would live
    pub fn icon_path(&self, token: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", token.to_lowercase(), ICON_EXTENSION))
    }

    /// Path of the icon for `token`, if the file exists
    pub fn resolve(&self, token: &str) -> Option<PathBuf> {
        let path = self.icon_path(token);
        if path.is_file() {
            Some(path)
        } else {
            debug!("No icon for {} at {}", token, path.display());
            None
        }
    }

    /// Icon for `token` as a `data:` URI
    ///
    /// The image bytes are embedded, so the URI stays valid wherever the
    /// SVG that references it is written. Unreadable files yield `None`.
    pub fn data_uri(&self, token: &str) -> Option<String> {
        let path = self.resolve(token)?;
        match std::fs::read(&path) {
            Ok(bytes) => Some(format!(
                "data:{};base64,{}",
                ICON_MIME_TYPE,
                STANDARD.encode(bytes)
            )),
            Err(e) => {
                warn!("Failed to read icon {}: {}", path.display(), e);
                None
            }
        }
    }
}
