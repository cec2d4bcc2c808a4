//! Asset resolution — maps logical asset ids to loadable references.
//!
//! Resolution never touches the filesystem. A missing file only surfaces as
//! [`AppError::ResourceNotFound`] when the rendering layer calls
//! [`AssetRef::load`].

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

// ── AssetRef ──────────────────────────────────────────────────────────────────

/// Opaque reference to an image resource, as handed back by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    /// Logical identifier, e.g. `"images/sxctclogo1.png"`.
    id: String,
    /// Resolved path or URL the rendering layer loads from.
    location: String,
}

/// Loaded asset contents.
#[derive(Debug, Clone)]
pub struct AssetBytes {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl AssetRef {
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self { id: id.into(), location: location.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Read the referenced file from disk.
    ///
    /// Paths with a `..` component are refused, whether they come from a
    /// resolver or from a reference rebuilt through deserialization.
    pub fn load(&self) -> Result<AssetBytes, AppError> {
        let path = Path::new(&self.location);
        if has_parent_component(Path::new(&self.id)) || has_parent_component(path) {
            debug!(id = %self.id, location = %self.location, "asset path escapes its root");
            return Err(self.not_found());
        }
        if !path.is_file() {
            return Err(self.not_found());
        }

        let body = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => self.not_found(),
            _ => AppError::Io(e),
        })?;
        debug!(id = %self.id, bytes = body.len(), "asset loaded");

        Ok(AssetBytes { content_type: mime_from_extension(path), body })
    }

    fn not_found(&self) -> AppError {
        AppError::ResourceNotFound { id: self.id.clone(), location: self.location.clone() }
    }
}

// ── AssetResolver ─────────────────────────────────────────────────────────────

/// Maps a logical asset id to an [`AssetRef`].
///
/// Implementations must not fail: an unresolvable id still yields a reference,
/// and the failure is reported by whoever loads it.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, id: &str) -> AssetRef;
}

/// Resolves ids against a directory of bundled files.
#[derive(Debug, Clone)]
pub struct BundledAssets {
    root: PathBuf,
}

impl BundledAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetResolver for BundledAssets {
    fn resolve(&self, id: &str) -> AssetRef {
        let location = self.root.join(id.trim_start_matches('/'));
        debug!(id, location = %location.display(), "asset resolved");
        AssetRef::new(id, location.to_string_lossy())
    }
}

fn has_parent_component(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

/// Map a file extension to a MIME content-type string.
pub fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
