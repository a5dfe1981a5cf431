//! Content-type registration data the host enumerates at discovery time.
//!
//! A [`ContentTypeBinding`] names a content type, its base type, and the
//! file extensions routed to it. The [`ContentTypeRegistry`] is the
//! enumerable set of bindings plus the extension lookup the host uses to
//! route a file to the right tooling component. Pure data — no behavior
//! beyond lookup.

use std::collections::HashMap;
use std::path::Path;

/// Content type served by the analyzer bridge.
pub const RUST_CONTENT_TYPE: &str = "rs";

/// Base content type the `rs` content type derives from.
pub const REMOTE_CODE_BASE: &str = "code-remote";

/// A content-type declaration: name, base type, and bound file extensions.
///
/// Immutable once declared. Extensions are stored without a leading dot
/// (`"rs"`, not `".rs"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeBinding {
    content_type: String,
    base: String,
    extensions: Vec<String>,
}

impl ContentTypeBinding {
    #[must_use]
    pub fn new(
        content_type: impl Into<String>,
        base: impl Into<String>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            base: base.into(),
            extensions,
        }
    }

    /// The binding for Rust sources: content type `rs`, base `code-remote`,
    /// extension `rs`.
    #[must_use]
    pub fn rust() -> Self {
        Self::new(
            RUST_CONTENT_TYPE,
            REMOTE_CODE_BASE,
            vec!["rs".to_string()],
        )
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

/// Enumerable set of content-type bindings with extension lookup.
///
/// The first binding that declares an extension owns it; later duplicates
/// are ignored. Misdeclared bindings are a registration-time concern, so
/// construction is infallible.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeRegistry {
    bindings: Vec<ContentTypeBinding>,
    /// Maps file extension (e.g. "rs") → content-type name.
    extension_map: HashMap<String, String>,
}

impl ContentTypeRegistry {
    #[must_use]
    pub fn new(bindings: Vec<ContentTypeBinding>) -> Self {
        let mut extension_map = HashMap::new();
        for binding in &bindings {
            for ext in binding.extensions() {
                extension_map
                    .entry(ext.clone())
                    .or_insert_with(|| binding.content_type().to_string());
            }
        }
        Self {
            bindings,
            extension_map,
        }
    }

    /// The registry this repository declares: exactly the Rust binding.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![ContentTypeBinding::rust()])
    }

    #[must_use]
    pub fn bindings(&self) -> &[ContentTypeBinding] {
        &self.bindings
    }

    /// Resolve a file path to its content type by extension.
    ///
    /// Returns `None` for files with no extension or an unbound one.
    #[must_use]
    pub fn content_type_for(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?;
        self.extension_map.get(ext).map(String::as_str)
    }
}
