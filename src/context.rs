//! Launch context and target directory resolution.
//!
//! A [`LaunchContext`] is built fresh for each trigger from whatever the host
//! knows at that moment and reduced to at most one directory:
//!
//! 1. the explicit resource passed with the trigger (unless untitled)
//! 2. the active editor's document (unless untitled)
//! 3. the first workspace root
//!
//! If none applies there is nothing to open.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

/// URI scheme the host uses for never-saved buffers
pub const UNTITLED_SCHEME: &str = "untitled";

/// A resource locator handed over with the trigger (explorer or editor context menu).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub scheme: String,
    pub path: PathBuf,
}

impl Resource {
    /// A resource on disk
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            scheme: "file".to_string(),
            path: path.into(),
        }
    }

    /// An unsaved buffer
    pub fn untitled(name: impl Into<PathBuf>) -> Self {
        Self {
            scheme: UNTITLED_SCHEME.to_string(),
            path: name.into(),
        }
    }

    /// Parse a locator given on the command line.
    ///
    /// Accepts `file://` URIs (including `localhost` and UNC hosts),
    /// `untitled:<name>`, other `<scheme>:<rest>` URIs, and plain paths. A
    /// single letter before `:` is a drive, not a scheme.
    pub fn parse(locator: &str) -> Self {
        match Url::parse(locator) {
            Ok(url) if url.scheme().len() > 1 => Self::from_url(&url),
            _ => Self::file(locator),
        }
    }

    fn from_url(url: &Url) -> Self {
        if url.scheme() != "file" {
            return Self {
                scheme: url.scheme().to_string(),
                path: PathBuf::from(url.path()),
            };
        }
        let path = file_url_to_path(url).unwrap_or_else(|| PathBuf::from(url.path()));
        Self::file(path)
    }

    /// Whether this resource can stand for a directory on disk.
    ///
    /// Untitled buffers and scheme-less resources have no meaningful parent.
    pub fn is_openable(&self) -> bool {
        !self.scheme.is_empty() && self.scheme != UNTITLED_SCHEME
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.path.display())
    }
}

/// The document in the focused editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub is_untitled: bool,
}

impl Document {
    pub fn saved(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_untitled: false,
        }
    }

    pub fn untitled(name: impl Into<PathBuf>) -> Self {
        Self {
            path: name.into(),
            is_untitled: true,
        }
    }
}

/// Everything the host knows at trigger time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchContext {
    /// Resource passed with the trigger, if invoked from a context menu
    pub resource: Option<Resource>,
    /// Document of the active editor
    pub active_document: Option<Document>,
    /// Open workspace folders, first one is the root
    pub workspace_roots: Vec<PathBuf>,
}

impl LaunchContext {
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn with_active_document(mut self, document: Document) -> Self {
        self.active_document = Some(document);
        self
    }

    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_roots.push(root.into());
        self
    }

    /// Reduce the context to the directory ConEmu should start in.
    pub fn resolve_target(&self) -> Option<PathBuf> {
        if let Some(resource) = self.resource.as_ref().filter(|r| r.is_openable()) {
            debug!("Resolving target from resource {}", resource);
            return Some(parent_directory(&resource.path));
        }

        if let Some(document) = self.active_document.as_ref().filter(|d| !d.is_untitled) {
            debug!("Resolving target from active document {}", document.path.display());
            return Some(parent_directory(&document.path));
        }

        if let Some(root) = self.workspace_roots.first() {
            debug!("Resolving target from workspace root {}", root.display());
            return Some(root.clone());
        }

        None
    }
}

/// Directory part of a path, accepting both `/` and `\` separators.
///
/// Roots stay roots (`C:\`, `/`); a bare file name yields `.`.
pub fn parent_directory(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let is_sep = |c: char| c == '/' || c == '\\';

    let trimmed = raw.trim_end_matches(is_sep);
    if trimmed.is_empty() {
        // Path was nothing but separators
        return PathBuf::from(if raw.is_empty() { "." } else { &raw[..1] });
    }

    match trimmed.rfind(is_sep) {
        None => PathBuf::from("."),
        Some(0) => PathBuf::from(&trimmed[..1]),
        Some(idx) => {
            let head = trimmed[..idx].trim_end_matches(is_sep);
            if head.is_empty() {
                PathBuf::from(&trimmed[..1])
            } else if head.len() == 2 && head.ends_with(':') {
                // Keep the separator after a drive letter
                PathBuf::from(&trimmed[..=idx])
            } else {
                PathBuf::from(head)
            }
        }
    }
}

/// Filesystem path of a `file:` URL.
///
/// `to_file_path` only accepts remote hosts on Windows; elsewhere a UNC host
/// is kept as a `//host/share` prefix.
fn file_url_to_path(url: &Url) -> Option<PathBuf> {
    if let Ok(path) = url.to_file_path() {
        return Some(strip_drive_slash(path));
    }

    let host = url.host_str()?;
    let local = Url::parse(&format!("file://{}", url.path()))
        .ok()?
        .to_file_path()
        .ok()?;
    Some(PathBuf::from(format!("//{}{}", host, local.display())))
}

/// `/C:/dir` -> `C:/dir` (only reachable off Windows)
fn strip_drive_slash(path: PathBuf) -> PathBuf {
    let raw = path.to_string_lossy().into_owned();
    let bytes = raw.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
        PathBuf::from(&raw[1..])
    } else {
        path
    }
}
