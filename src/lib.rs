//! # docpress
//!
//! Assemble a single, print-ready document from a site of
//! independently-authored HTML pages, driven by a table of contents.
//!
//! ## Features
//!
//! - Merge pages in TOC order into one linear [`Document`]
//! - Namespace element ids per page, keeping them unique after the merge
//! - Rewrite intra-page and cross-page links into in-document anchors
//! - Shift heading levels so page headings nest under the document structure
//! - Generate the reserved grammar page from a grammar source
//!
//! Pagination, styling, and the actual rendering of the output belong to an
//! external step; this crate is a pure in-memory transformation.
//!
//! ## Quick Start
//!
//! ```
//! use docpress::{
//!     assemble, GrammarSource, PageData, PageKey, PageReference, PageStore, TocSection,
//! };
//!
//! struct Store;
//!
//! impl PageStore for Store {
//!     fn page(&self, key: &PageKey) -> docpress::Result<Option<PageData>> {
//!         if key.as_str() == "docs/basics/intro" {
//!             Ok(Some(PageData {
//!                 title: "Intro".to_string(),
//!                 html: r#"<h1 id="top">Hi</h1>"#.to_string(),
//!                 path: "docs/basics/intro".to_string(),
//!             }))
//!         } else {
//!             Ok(None)
//!         }
//!     }
//! }
//!
//! struct NoGrammar;
//!
//! impl GrammarSource for NoGrammar {
//!     fn render_grammar(&self) -> String {
//!         String::new()
//!     }
//! }
//!
//! let toc = vec![TocSection::new(
//!     "Basics",
//!     vec![PageReference::new("/docs/basics/intro.html")],
//! )];
//! let document = assemble(&toc, &Store, &NoGrammar).unwrap();
//! assert_eq!(
//!     document.sections[0].content[0].html,
//!     r#"<h2 id="intro_top">Hi</h2>"#
//! );
//! ```

pub mod assemble;
pub mod document;
pub mod error;
pub mod grammar;
pub mod html;
pub mod store;
pub mod toc;
pub mod transform;

pub use assemble::assemble;
pub use document::{AssembledSection, Document, TransformedFragment};
pub use error::{Error, Result};
pub use store::{GrammarSource, PageData, PageStore};
pub use toc::{PageKey, PageReference, TocSection};
