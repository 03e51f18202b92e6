// ABOUTME: Content extractor producing a Document summary from a completed Outline.
// ABOUTME: Harvests head metadata and nav-region anchors with breadth-first worklists.

//! Extraction of metadata and navigation links from a classified document.
//!
//! Extraction is deliberately best-effort, in contrast to
//! [`Outline::build`]'s fail-fast contract: unmet structural preconditions
//! yield `None` rather than an error, and missing regions leave the
//! corresponding fields empty.

use std::collections::VecDeque;

use crate::classify::{enqueue_children, Outline};
use crate::document::{Anchor, Document, LinkTarget};
use crate::dom::Node;

impl<'a> Outline<'a> {
    /// Produce a metadata/navigation summary for this outline.
    ///
    /// Returns `None` exactly when any of document, head, body, or main is
    /// absent. Absent nav/sidebar/footer/article regions are tolerated
    /// individually.
    pub fn extract(&self) -> Option<Document> {
        if self.document.is_absent()
            || self.head.is_absent()
            || self.body.is_absent()
            || self.main.is_absent()
        {
            return None;
        }

        let mut document = Document::default();
        extract_head(self.head, &mut document);
        for nav in &self.nav {
            extract_nav(*nav, &mut document);
        }

        tracing::debug!(
            title = document.title.is_some(),
            anchors = document.nav.len(),
            "extracted document summary"
        );

        Some(document)
    }
}

/// Harvest title/description/author from the head's direct children.
fn extract_head(head: Node, document: &mut Document) {
    let mut node = head.first_child();
    while node.is_present() {
        if node.is_element(&["meta"]) {
            let content = node.attr(&["content"]);
            if !content.is_empty() {
                match node.attr(&["name", "http-equiv"]) {
                    "description" => document.description = Some(content.to_string()),
                    "author" => document.author = Some(content.to_string()),
                    _ => {}
                }
            }
        } else if node.is_element(&["title"]) && document.title.is_none() {
            // only the first child's text is read, not the whole child list
            let first = node.first_child();
            if first.is_present() {
                document.title = Some(first.plain_text());
            }
        }
        node = node.next_sibling();
    }
}

/// Harvest anchors from one nav region, breadth-first.
///
/// Anchors are leaves of this traversal: their children are never enqueued,
/// so an anchor nested inside another anchor is unreachable. An anchor whose
/// href fails to parse is dropped without stopping the scan.
fn extract_nav(nav: Node, document: &mut Document) {
    let mut worklist = VecDeque::new();
    enqueue_children(&mut worklist, nav);

    while let Some(node) = worklist.pop_front() {
        if !node.is_element(&["a"]) {
            enqueue_children(&mut worklist, node);
            continue;
        }

        let href = node.attr(&["href"]);
        let url = if href.is_empty() {
            None
        } else {
            match LinkTarget::parse(href) {
                Some(target) => Some(target),
                None => continue,
            }
        };

        document.nav.push(Anchor {
            title: node.attr(&["title"]).to_string(),
            label: node.plain_text(),
            url,
            rel: node.attr(&["rel"]).to_string(),
        });
    }
}
