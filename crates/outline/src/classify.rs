// ABOUTME: Structural classifier partitioning a parsed document into canonical regions.
// ABOUTME: Builds an Outline (head/body/nav/main/sidebar/footer/articles) breadth-first.

//! Structural classification of parsed HTML documents.
//!
//! [`Outline::build`] partitions a document into canonical regions using
//! ordered heuristic predicates over a breadth-first worklist. Regions are
//! mutually exclusive: once a node is claimed for a region, classification
//! never descends into it again at the body level. The one exception is the
//! main region, whose interior is re-scanned for article blocks.
//!
//! The heuristics tolerate arbitrarily malformed markup. Only two outcomes
//! are fatal: a missing head/body, or a duplicated one.

use std::collections::VecDeque;

use crate::dom::Node;
use crate::error::{Section, StructureError};

/// `div` ids recognized as navigation regions.
const NAV_DIV_IDS: &[&str] = &["navigation", "nav", "menu"];

/// `div` ids recognized as the main region.
const MAIN_DIV_IDS: &[&str] = &["main", "content"];

/// Whole `class` attribute values recognized as article blocks.
const ARTICLE_DIV_CLASSES: &[&str] = &["article", "post"];

/// The result of structural classification: references into one parsed
/// document's canonical regions.
///
/// `head` and `body` are always present on a successfully built outline;
/// every other region may be absent or empty, and extraction degrades
/// accordingly. An outline borrows the parse result and holds no resources
/// of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline<'a> {
    pub document: Node<'a>,
    pub head: Node<'a>,
    pub body: Node<'a>,
    /// Navigation regions, in discovery order.
    pub nav: Vec<Node<'a>>,
    pub main: Node<'a>,
    pub sidebar: Node<'a>,
    pub footer: Node<'a>,
    /// Article blocks found inside the main region, in discovery order.
    pub articles: Vec<Node<'a>>,
}

impl<'a> Outline<'a> {
    /// Classify a parsed document starting at its root node.
    ///
    /// Fails only on structural violations (a missing or duplicated
    /// head/body) and returns no partial outline in that case. Absent
    /// nav/main/sidebar/footer regions are not errors.
    pub fn build(root: Node<'a>) -> Result<Outline<'a>, StructureError> {
        let mut outline = Outline {
            document: root,
            head: Node::absent(),
            body: Node::absent(),
            nav: Vec::new(),
            main: Node::absent(),
            sidebar: Node::absent(),
            footer: Node::absent(),
            articles: Vec::new(),
        };

        outline.locate_sections(root)?;
        outline.classify_body();
        if outline.main.is_present() {
            outline.classify_main();
        }

        tracing::debug!(
            nav = outline.nav.len(),
            main = outline.main.is_present(),
            sidebar = outline.sidebar.is_present(),
            footer = outline.footer.is_present(),
            articles = outline.articles.len(),
            "classified document structure"
        );

        Ok(outline)
    }

    /// Breadth-first search for the unique head and body elements.
    ///
    /// The worklist stops as soon as both are found; a duplicate occurring
    /// later in level order is never observed.
    fn locate_sections(&mut self, root: Node<'a>) -> Result<(), StructureError> {
        let mut worklist = VecDeque::new();
        worklist.push_back(root);

        while let Some(node) = worklist.pop_front() {
            if node.is_element(&["head"]) {
                if self.head.is_present() {
                    return Err(StructureError::DuplicateSection(Section::Head));
                }
                self.head = node;
            } else if node.is_element(&["body"]) {
                if self.body.is_present() {
                    return Err(StructureError::DuplicateSection(Section::Body));
                }
                self.body = node;
            } else {
                enqueue_children(&mut worklist, node);
            }

            if self.head.is_present() && self.body.is_present() {
                return Ok(());
            }
        }

        if self.head.is_absent() {
            return Err(StructureError::MissingSection(Section::Head));
        }
        Err(StructureError::MissingSection(Section::Body))
    }

    /// Partition the body subtree into regions.
    ///
    /// Predicates are tested in fixed priority order; the first match claims
    /// the node and its children are never enqueued, so markup nested inside
    /// one region cannot surface as a second region. Nav regions accumulate;
    /// main, sidebar, and footer keep their breadth-first-earliest match and
    /// discard later ones.
    fn classify_body(&mut self) {
        let mut worklist = VecDeque::new();
        enqueue_children(&mut worklist, self.body);

        while let Some(node) = worklist.pop_front() {
            if is_nav(node) {
                tracing::trace!(tag = node.tag(), "claimed nav region");
                self.nav.push(node);
            } else if is_main(node) {
                if self.main.is_absent() {
                    tracing::trace!(tag = node.tag(), "claimed main region");
                    self.main = node;
                }
            } else if is_sidebar(node) {
                if self.sidebar.is_absent() {
                    tracing::trace!(tag = node.tag(), "claimed sidebar region");
                    self.sidebar = node;
                }
            } else if is_footer(node) {
                if self.footer.is_absent() {
                    tracing::trace!(tag = node.tag(), "claimed footer region");
                    self.footer = node;
                }
            } else {
                enqueue_children(&mut worklist, node);
            }
        }
    }

    /// Collect every article block inside the main region, still stopping
    /// descent below each match.
    fn classify_main(&mut self) {
        let mut worklist = VecDeque::new();
        enqueue_children(&mut worklist, self.main);

        while let Some(node) = worklist.pop_front() {
            if is_article(node) {
                self.articles.push(node);
            } else {
                enqueue_children(&mut worklist, node);
            }
        }
    }
}

/// Append a node's children to the back of a worklist. Consuming from the
/// front and refilling at the back is what gives every traversal here its
/// level-order (shallowest-wins) semantics.
pub(crate) fn enqueue_children<'a>(worklist: &mut VecDeque<Node<'a>>, node: Node<'a>) {
    let mut child = node.first_child();
    while child.is_present() {
        worklist.push_back(child);
        child = child.next_sibling();
    }
}

/// Navigation region: a `nav` element, or a `div` with a navigation id.
fn is_nav(node: Node) -> bool {
    node.is_element(&["nav"])
        || (node.is_element(&["div"]) && NAV_DIV_IDS.contains(&node.attr(&["id"])))
}

/// Main region: a `main` or `article` element, a `div` with a content id, or
/// any element declaring `role="main"`.
fn is_main(node: Node) -> bool {
    if node.is_element(&["main", "article"]) {
        return true;
    }
    if node.is_element(&["div"]) && MAIN_DIV_IDS.contains(&node.attr(&["id"])) {
        return true;
    }
    node.attr(&["role"]) == "main"
}

/// Sidebar region: a `div` with id `sidebar`.
fn is_sidebar(node: Node) -> bool {
    node.is_element(&["div"]) && node.attr(&["id"]) == "sidebar"
}

/// Footer region: a `footer` element, or a `div` with id `footer`.
fn is_footer(node: Node) -> bool {
    node.is_element(&["footer"]) || (node.is_element(&["div"]) && node.attr(&["id"]) == "footer")
}

/// Article block: an `article` element, or a `div` whose whole `class`
/// attribute value equals `article` or `post`. The class test is a
/// whole-value comparison, not token-set membership.
fn is_article(node: Node) -> bool {
    node.is_element(&["article"])
        || (node.is_element(&["div"]) && ARTICLE_DIV_CLASSES.contains(&node.attr(&["class"])))
}
