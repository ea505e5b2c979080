//! TOC walking and document assembly.
//!
//! Walks the ordered table of contents, resolves each page reference through
//! the [`PageStore`] (or the built-in page table), pushes every resolved
//! subtree through the fragment transformer, and collects the results into a
//! [`Document`] in input order.

use tracing::debug;

use crate::document::{AssembledSection, Document, TransformedFragment};
use crate::error::Result;
use crate::grammar::{self, GeneratedPage};
use crate::html::{find_first_element, parse_fragment, serialize_children, serialize_node};
use crate::store::{GrammarSource, PageStore};
use crate::toc::TocSection;
use crate::transform::transform_subtree;

/// Pages generated by the assembler instead of resolved through the store,
/// keyed by normalized page key.
const BUILTIN_PAGES: &[(&str, fn(&dyn GrammarSource) -> GeneratedPage)] =
    &[(grammar::GRAMMAR_PAGE_KEY, grammar::generate)];

/// Assemble the ordered TOC into a single merged document.
///
/// References the store does not know are skipped silently: they contribute
/// nothing to the output and later references still process. Link rewriting
/// is structural, so links into a skipped page remain as dangling anchors in
/// the output; that is accepted behavior, not an error. Store faults
/// propagate to the caller.
pub fn assemble(
    toc: &[TocSection],
    store: &impl PageStore,
    grammar_source: &dyn GrammarSource,
) -> Result<Document> {
    let mut sections = Vec::with_capacity(toc.len());

    for toc_section in toc {
        let mut section = AssembledSection {
            id: toc_section.section_id(),
            title: toc_section.title.clone(),
            content: Vec::new(),
        };

        for reference in &toc_section.items {
            let key = reference.page_key();

            if let Some(generate) = builtin_page(key.as_str()) {
                debug!(key = %key, "generating built-in page");
                section.content.push(generated_fragment(generate(grammar_source)));
                continue;
            }

            let Some(page) = store.page(&key)? else {
                debug!(key = %key, "page not in store, skipping");
                continue;
            };

            let page_id = page.page_id().to_string();
            let dom = parse_fragment(&page.html);
            let Some(body) = find_first_element(&dom.document, "body") else {
                continue;
            };
            let body = transform_subtree(&body, &page_id);

            section.content.push(TransformedFragment {
                id: page_id,
                title: page.title,
                html: serialize_children(&body),
            });
        }

        sections.push(section);
    }

    Ok(Document { sections })
}

fn builtin_page(key: &str) -> Option<fn(&dyn GrammarSource) -> GeneratedPage> {
    BUILTIN_PAGES
        .iter()
        .find(|(builtin_key, _)| *builtin_key == key)
        .map(|(_, generate)| *generate)
}

fn generated_fragment(page: GeneratedPage) -> TransformedFragment {
    let html = match &page.root {
        Some(root) => {
            let root = transform_subtree(root, page.page_id);
            serialize_node(&root)
        }
        None => String::new(),
    };

    TransformedFragment {
        id: page.page_id.to_string(),
        title: page.title.to_string(),
        html,
    }
}
