//! End-to-end document assembly tests.
//!
//! Drive `assemble` with an in-memory page store and check the merged output
//! against the expected rewritten HTML.

use std::collections::HashMap;

use docpress::{
    Error, GrammarSource, PageData, PageKey, PageReference, PageStore, Result, TocSection,
    assemble,
};

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Default)]
struct MemoryStore {
    pages: HashMap<String, PageData>,
}

impl MemoryStore {
    fn with_page(mut self, key: &str, title: &str, html: &str) -> Self {
        self.pages.insert(
            key.to_string(),
            PageData {
                title: title.to_string(),
                html: html.to_string(),
                path: key.to_string(),
            },
        );
        self
    }
}

impl PageStore for MemoryStore {
    fn page(&self, key: &PageKey) -> Result<Option<PageData>> {
        Ok(self.pages.get(key.as_str()).cloned())
    }
}

struct FailingStore;

impl PageStore for FailingStore {
    fn page(&self, _key: &PageKey) -> Result<Option<PageData>> {
        Err(Error::PageStore("store offline".to_string()))
    }
}

struct StaticGrammar(&'static str);

impl GrammarSource for StaticGrammar {
    fn render_grammar(&self) -> String {
        self.0.to_string()
    }
}

const NO_GRAMMAR: StaticGrammar = StaticGrammar("");

fn section(title: &str, urls: &[&str]) -> TocSection {
    TocSection::new(title, urls.iter().map(|url| PageReference::new(*url)).collect())
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_basics_section_with_missing_page() {
    let store = MemoryStore::default().with_page(
        "docs/basics/intro",
        "Intro",
        r##"<h1 id="top">Hi</h1><a href="#top">go</a>"##,
    );
    let toc = vec![section("Basics", &["/docs/basics/intro.html", "/docs/missing.html"])];

    let document = assemble(&toc, &store, &NO_GRAMMAR).unwrap();

    assert_eq!(document.sections.len(), 1);
    let basics = &document.sections[0];
    assert_eq!(basics.id, "Basics");
    assert_eq!(basics.title, "Basics");
    assert_eq!(basics.content.len(), 1);

    let intro = &basics.content[0];
    assert_eq!(intro.id, "intro");
    assert_eq!(intro.title, "Intro");
    assert_eq!(
        intro.html,
        r##"<h2 id="intro_top">Hi</h2><a href="#intro_top">go</a>"##
    );
}

// ============================================================================
// Skipping and ordering
// ============================================================================

#[test]
fn test_missing_page_does_not_interrupt_later_items() {
    let store = MemoryStore::default()
        .with_page("docs/a", "A", "<p>a</p>")
        .with_page("docs/c", "C", "<p>c</p>");
    let toc = vec![section("S", &["/docs/a.html", "/docs/b.html", "/docs/c.html"])];

    let document = assemble(&toc, &store, &NO_GRAMMAR).unwrap();

    let ids: Vec<&str> = document.sections[0]
        .content
        .iter()
        .map(|fragment| fragment.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_section_with_no_resolved_pages_still_appears() {
    let store = MemoryStore::default().with_page("docs/known", "Known", "<p>k</p>");
    let toc = vec![
        section("Empty Section", &["/docs/unknown.html"]),
        section("Full", &["/docs/known.html"]),
    ];

    let document = assemble(&toc, &store, &NO_GRAMMAR).unwrap();

    assert_eq!(document.sections.len(), 2);
    assert_eq!(document.sections[0].id, "Empty_Section");
    assert!(document.sections[0].content.is_empty());
    assert_eq!(document.sections[1].content.len(), 1);
}

#[test]
fn test_output_order_matches_toc_order() {
    let store = MemoryStore::default()
        .with_page("docs/one", "One", "<p>1</p>")
        .with_page("docs/two", "Two", "<p>2</p>")
        .with_page("docs/three", "Three", "<p>3</p>");
    let toc = vec![
        section("First", &["/docs/two.html", "/docs/one.html"]),
        section("Second", &["/docs/three.html"]),
    ];

    let document = assemble(&toc, &store, &NO_GRAMMAR).unwrap();

    let sections: Vec<&str> = document.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(sections, vec!["First", "Second"]);
    let first: Vec<&str> = document.sections[0]
        .content
        .iter()
        .map(|fragment| fragment.id.as_str())
        .collect();
    assert_eq!(first, vec!["two", "one"]);

    let all: Vec<&str> = document.fragments().map(|fragment| fragment.id.as_str()).collect();
    assert_eq!(all, vec!["two", "one", "three"]);
}

#[test]
fn test_ids_from_distinct_pages_stay_disjoint() {
    let store = MemoryStore::default()
        .with_page("docs/alpha", "Alpha", r#"<p id="note">a</p>"#)
        .with_page("docs/beta", "Beta", r#"<p id="note">b</p>"#);
    let toc = vec![section("S", &["/docs/alpha.html", "/docs/beta.html"])];

    let document = assemble(&toc, &store, &NO_GRAMMAR).unwrap();

    let content = &document.sections[0].content;
    assert!(content[0].html.contains(r#"id="alpha_note""#));
    assert!(content[1].html.contains(r#"id="beta_note""#));
}

#[test]
fn test_link_to_skipped_page_stays_as_dangling_anchor() {
    let store = MemoryStore::default().with_page(
        "docs/intro",
        "Intro",
        r#"<a href="/docs/missing.html#gone">see</a>"#,
    );
    let toc = vec![section("S", &["/docs/intro.html", "/docs/missing.html"])];

    let document = assemble(&toc, &store, &NO_GRAMMAR).unwrap();

    // The link is rewritten structurally even though its target was skipped.
    assert_eq!(
        document.sections[0].content[0].html,
        r##"<a href="#docs/missing_gone">see</a>"##
    );
}

// ============================================================================
// Grammar page
// ============================================================================

#[test]
fn test_grammar_page_is_generated_not_resolved() {
    let grammar = StaticGrammar(
        r#"<html><body><div class="grammar"><h1 id="rules">Rules</h1></div></body></html>"#,
    );
    let toc = vec![section("Reference", &["/docs/reference/grammar.html"])];

    let document = assemble(&toc, &MemoryStore::default(), &grammar).unwrap();

    let fragment = &document.sections[0].content[0];
    assert_eq!(fragment.id, "grammar");
    assert_eq!(fragment.title, "Grammar");
    assert_eq!(
        fragment.html,
        r#"<div class="grammar"><h2 id="grammar_rules">Rules</h2></div>"#
    );
}

#[test]
fn test_grammar_without_container_yields_empty_fragment() {
    let grammar = StaticGrammar("<p>rendered, but no container</p>");
    let toc = vec![section("Reference", &["docs/reference/grammar"])];

    let document = assemble(&toc, &MemoryStore::default(), &grammar).unwrap();

    let fragment = &document.sections[0].content[0];
    assert_eq!(fragment.id, "grammar");
    assert_eq!(fragment.title, "Grammar");
    assert_eq!(fragment.html, "");
}

// ============================================================================
// Faults
// ============================================================================

#[test]
fn test_store_fault_propagates() {
    let toc = vec![section("S", &["/docs/anything.html"])];
    let result = assemble(&toc, &FailingStore, &NO_GRAMMAR);
    assert!(matches!(result, Err(Error::PageStore(_))));
}
