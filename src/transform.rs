//! The fragment transformer: rewrites one page's HTML subtree so it can be
//! merged into a single document.
//!
//! Three rewrites are applied to every element, independently:
//!
//! - `id` attributes gain a `page_id + "_"` prefix, keeping ids unique after
//!   pages are merged
//! - anchor `href`s pointing inside the site become in-document `#` anchors
//!   following the same prefix convention
//! - headings move one level down (`h2` becomes `h3`), so page headings nest
//!   under the merged document's own structure
//!
//! Cross-page links are rewritten structurally: the target anchor name is
//! derived from the link path, without checking that the target page is part
//! of the assembled document. A link to a page that was never merged remains
//! a dangling anchor.

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::{LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData};
use url::Url;

use crate::html::{get_attribute, set_attribute};
use crate::toc::PageKey;

/// Rewrite every element in the subtree rooted at `root` for inclusion in
/// the merged document under the `page_id` namespace.
///
/// Visits elements depth-first, root included. Returns the subtree root,
/// which is a replacement node when the root itself was a heading. Nothing
/// outside the subtree is touched.
pub fn transform_subtree(root: &Handle, page_id: &str) -> Handle {
    visit(root, page_id)
}

fn visit(handle: &Handle, page_id: &str) -> Handle {
    let handle = rewrite_element(handle, page_id);
    let children: Vec<Handle> = handle.children.borrow().iter().cloned().collect();
    for child in &children {
        visit(child, page_id);
    }
    handle
}

fn rewrite_element(handle: &Handle, page_id: &str) -> Handle {
    let NodeData::Element { ref name, .. } = handle.data else {
        return handle.clone();
    };

    if let Some(id) = get_attribute(handle, "id") {
        set_attribute(handle, "id", &format!("{}_{}", page_id, id));
    }

    if name.local.as_ref() == "a" {
        if let Some(href) = get_attribute(handle, "href") {
            if let Some(target) = rewrite_href(&href, page_id) {
                set_attribute(handle, "href", &target);
            }
        }
    }

    match bumped_heading(name.local.as_ref()) {
        Some(new_name) => rename_element(handle, &new_name),
        None => handle.clone(),
    }
}

/// Compute the rewritten href for an in-site link, or `None` when the link
/// carries a scheme and stays as-is.
///
/// Hrefs that fail to parse as URLs are treated as opaque relative paths.
fn rewrite_href(href: &str, page_id: &str) -> Option<String> {
    if Url::parse(href).is_ok() {
        // Absolute URL with a scheme: external, leave untouched.
        return None;
    }

    // Fragment within the same page: retarget into this page's namespace.
    if let Some(fragment) = href.strip_prefix('#') {
        return Some(format!("#{}_{}", page_id, fragment));
    }

    // Relative link into another page: derive that page's namespaced anchor
    // from the path, by the same convention every page is transformed with.
    let (path, fragment) = match href.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (href, None),
    };
    let key = PageKey::from_url(path);
    match fragment {
        Some(fragment) if !fragment.is_empty() => Some(format!("#{}_{}", key, fragment)),
        _ => Some(format!("#{}", key)),
    }
}

/// `h1`..`h9` shift one level down; anything else keeps its tag.
fn bumped_heading(tag: &str) -> Option<String> {
    let mut chars = tag.chars();
    if chars.next() != Some('h') {
        return None;
    }
    let digit = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let level = digit.to_digit(10)?;
    if !(1..=9).contains(&level) {
        return None;
    }
    Some(format!("h{}", level + 1))
}

/// Replace an element with a same-attribute, same-children copy under a new
/// tag name. rcdom element names are immutable, so renaming means splicing a
/// replacement node into the parent.
fn rename_element(handle: &Handle, new_name: &str) -> Handle {
    let NodeData::Element {
        ref name, ref attrs, ..
    } = handle.data
    else {
        return handle.clone();
    };

    let replacement = Node::new(NodeData::Element {
        name: QualName::new(None, name.ns.clone(), LocalName::from(new_name)),
        attrs: RefCell::new(attrs.borrow().clone()),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    });

    let children = std::mem::take(&mut *handle.children.borrow_mut());
    for child in &children {
        child.parent.set(Some(Rc::downgrade(&replacement)));
    }
    *replacement.children.borrow_mut() = children;

    if let Some(parent) = handle.parent.take().and_then(|weak| weak.upgrade()) {
        let index = {
            let siblings = parent.children.borrow();
            siblings.iter().position(|sibling| Rc::ptr_eq(sibling, handle))
        };
        if let Some(index) = index {
            parent.children.borrow_mut()[index] = replacement.clone();
        }
        replacement.parent.set(Some(Rc::downgrade(&parent)));
    }

    replacement
}
