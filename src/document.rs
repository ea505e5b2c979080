//! Assembled output model.
//!
//! The [`Document`] produced here is the final result of assembly; an
//! external rendering step takes it from there (pagination, styling, and any
//! cover or navigation chrome are not this crate's concern).

/// One page's contribution to the merged document: rewritten, serialized
/// HTML under the page's id namespace.
///
/// Every element id in `html` is prefixed `id + "_"`, and every internal
/// link is an in-document anchor following the same convention.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TransformedFragment {
    pub id: String,
    pub title: String,
    pub html: String,
}

/// A section of the merged document, holding its fragments in TOC order.
///
/// Sections whose references all failed to resolve still appear, with empty
/// `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssembledSection {
    pub id: String,
    pub title: String,
    pub content: Vec<TransformedFragment>,
}

/// The merged document body, sections in input TOC order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    pub sections: Vec<AssembledSection>,
}

impl Document {
    /// Iterate all fragments across sections, in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &TransformedFragment> {
        self.sections.iter().flat_map(|s| s.content.iter())
    }
}
