//! The generated grammar page.
//!
//! The grammar is not stored in the page store: its raw HTML comes from a
//! [`GrammarSource`] and is scoped to the `grammar`-classed container before
//! merging. A missing container degrades to an empty fragment instead of
//! failing the assembly.

use markup5ever_rcdom::{Handle, RcDom};

use crate::html::{find_element_by_class, parse_html};
use crate::store::GrammarSource;

/// Reserved page key that dispatches to the generated grammar page.
pub const GRAMMAR_PAGE_KEY: &str = "docs/reference/grammar";

/// Id namespace for the generated page.
pub const GRAMMAR_PAGE_ID: &str = "grammar";

/// Title of the generated page.
pub const GRAMMAR_PAGE_TITLE: &str = "Grammar";

/// A generated page, parsed and scoped, ready for the fragment transformer.
pub struct GeneratedPage {
    pub page_id: &'static str,
    pub title: &'static str,
    /// Owns the parsed tree while `root` is in use.
    pub dom: RcDom,
    /// Subtree to merge; `None` when the expected container is missing.
    pub root: Option<Handle>,
}

/// Build the grammar page from the source's raw rendering.
///
/// `<br>` artifacts are normalized to the well-formed empty element before
/// parsing, and the result is scoped to the `grammar`-classed container.
pub fn generate(source: &dyn GrammarSource) -> GeneratedPage {
    let raw = source.render_grammar().replace("<br>", "<br/>");
    let dom = parse_html(&raw);
    let root = find_element_by_class(&dom.document, "grammar");
    GeneratedPage {
        page_id: GRAMMAR_PAGE_ID,
        title: GRAMMAR_PAGE_TITLE,
        dom,
        root,
    }
}
