//! Table-of-contents input model and page key normalization.

use std::fmt;

/// One section of the table of contents: a title and the ordered page
/// references it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocSection {
    pub title: String,
    pub items: Vec<PageReference>,
}

impl TocSection {
    pub fn new(title: impl Into<String>, items: Vec<PageReference>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Section anchor id: the title with spaces replaced by underscores.
    pub fn section_id(&self) -> String {
        self.title.replace(' ', "_")
    }
}

/// A reference to a page by its site-relative URL, possibly carrying a
/// leading slash and a `.html` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReference {
    pub url: String,
}

impl PageReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The normalized key this reference resolves through.
    pub fn page_key(&self) -> PageKey {
        PageKey::from_url(&self.url)
    }
}

/// Normalized page identifier: the reference URL with one leading `/` and a
/// trailing `.html` stripped.
///
/// Uniquely identifies a page within the merged document and doubles as the
/// namespace prefix for the page's rewritten element ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey(String);

impl PageKey {
    /// Normalize a site-relative URL into a page key.
    pub fn from_url(url: &str) -> Self {
        let path = url.strip_prefix('/').unwrap_or(url);
        let path = path.strip_suffix(".html").unwrap_or(path);
        PageKey(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
