//! Collaborator capabilities consumed during assembly.
//!
//! Page discovery and storage live outside this crate; assembly only needs
//! the two lookups defined here.

use crate::error::Result;
use crate::toc::PageKey;

/// A page as returned by the store: metadata plus its rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub title: String,
    /// Rendered HTML body, as authored (ids not yet namespaced).
    pub html: String,
    /// Source path within the store, e.g. `docs/basics/intro`.
    pub path: String,
}

impl PageData {
    /// Namespace for this page's rewritten ids: the last segment of its
    /// source path.
    pub fn page_id(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }
}

/// Looks up rendered pages by normalized key.
pub trait PageStore {
    /// Resolve a page. Unknown keys are `Ok(None)`, never an error; faults
    /// (I/O and the like) surface as `Err` and propagate to the assembly
    /// caller.
    fn page(&self, key: &PageKey) -> Result<Option<PageData>>;
}

/// Provides the raw HTML rendering of the language grammar, used for the
/// generated grammar page.
pub trait GrammarSource {
    fn render_grammar(&self) -> String;
}
