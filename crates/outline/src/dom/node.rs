// ABOUTME: Nil-safe cursor over one position of a parsed scraper/ego-tree document.
// ABOUTME: Attribute lookup, tag/class tests, traversal, and flattened text extraction.

use ego_tree::NodeRef;
use scraper::node::{Element, Node as HtmlNode};
use scraper::Html;

/// A read-only cursor into one position of a parsed HTML tree.
///
/// `Node` is non-owning (the tree belongs to the parse result) and nil-safe:
/// every accessor is a total function, and an accessor invoked on an absent
/// node answers with the zero value of its return type: an absent node, an
/// empty string, `false`. Traversal chains like
/// `node.first_child().next_sibling().attr(&["id"])` therefore never need
/// per-step presence checks.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    repr: Repr<'a>,
}

#[derive(Debug, Clone, Copy)]
enum Repr<'a> {
    /// No underlying tree position.
    Absent,
    /// A position in a parsed tree.
    Tree(NodeRef<'a, HtmlNode>),
    /// A synthetic root fabricated by `fake_parent`. Its sole child is the
    /// wrapped node; it has no attributes, siblings, or parent of its own.
    Synthetic(NodeRef<'a, HtmlNode>),
    /// A tree position viewed through a synthetic root: same node, but its
    /// real siblings are hidden so the synthetic root keeps a single child.
    Scoped(NodeRef<'a, HtmlNode>),
}

impl<'a> Node<'a> {
    /// A cursor positioned at the document root of a parsed tree.
    pub fn document(html: &'a Html) -> Node<'a> {
        Node {
            repr: Repr::Tree(html.tree.root()),
        }
    }

    /// A cursor positioned at an arbitrary node of a parsed tree.
    pub fn from_ref(node: NodeRef<'a, HtmlNode>) -> Node<'a> {
        Node {
            repr: Repr::Tree(node),
        }
    }

    /// The absent cursor.
    pub fn absent() -> Node<'a> {
        Node { repr: Repr::Absent }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self.repr, Repr::Absent)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self.repr, Repr::Absent)
    }

    /// The tree position backing this cursor, if any. A synthetic root has
    /// no position of its own.
    fn backing(&self) -> Option<NodeRef<'a, HtmlNode>> {
        match self.repr {
            Repr::Tree(node) | Repr::Scoped(node) => Some(node),
            Repr::Absent | Repr::Synthetic(_) => None,
        }
    }

    fn element(&self) -> Option<&'a Element> {
        self.backing().and_then(|node| node.value().as_element())
    }

    /// Value of the first attribute whose key matches any of `keys`.
    ///
    /// The node's own attribute list is scanned once, in document order, and
    /// each attribute is tested against every key. Returns `""` for an
    /// absent node, a non-element node, or when no key matches.
    pub fn attr(&self, keys: &[&str]) -> &'a str {
        let element = match self.element() {
            Some(element) => element,
            None => return "",
        };
        for (key, value) in element.attrs() {
            if keys.contains(&key) {
                return value;
            }
        }
        ""
    }

    /// True when the node is an element and, if `names` is non-empty, its
    /// tag equals one of them.
    pub fn is_element(&self, names: &[&str]) -> bool {
        let element = match self.element() {
            Some(element) => element,
            None => return false,
        };
        names.is_empty() || names.contains(&element.name())
    }

    /// The element's tag name, `""` for anything that is not an element.
    pub fn tag(&self) -> &'a str {
        self.element().map_or("", |element| element.name())
    }

    /// True when the node is a text node.
    pub fn is_text(&self) -> bool {
        self.backing().map_or(false, |node| node.value().is_text())
    }

    /// A text node's character data, `""` for anything else.
    pub fn text(&self) -> &'a str {
        self.backing()
            .and_then(|node| node.value().as_text())
            .map_or("", |text| &**text)
    }

    /// The node's first child.
    pub fn first_child(&self) -> Node<'a> {
        match self.repr {
            Repr::Absent => Node::absent(),
            Repr::Tree(node) | Repr::Scoped(node) => {
                node.first_child().map_or(Node::absent(), Node::from_ref)
            }
            Repr::Synthetic(child) => Node {
                repr: Repr::Scoped(child),
            },
        }
    }

    /// The node's next sibling.
    pub fn next_sibling(&self) -> Node<'a> {
        match self.repr {
            Repr::Tree(node) => node.next_sibling().map_or(Node::absent(), Node::from_ref),
            // a synthetic root has no siblings, and its child is kept sole
            Repr::Absent | Repr::Synthetic(_) | Repr::Scoped(_) => Node::absent(),
        }
    }

    /// The node's parent.
    pub fn parent(&self) -> Node<'a> {
        match self.repr {
            Repr::Absent | Repr::Synthetic(_) => Node::absent(),
            Repr::Tree(node) => node.parent().map_or(Node::absent(), Node::from_ref),
            Repr::Scoped(child) => Node {
                repr: Repr::Synthetic(child),
            },
        }
    }

    /// The first child that is an element, skipping text and comment nodes.
    pub fn first_child_element(&self) -> Node<'a> {
        let mut node = self.first_child();
        while node.is_present() && !node.is_element(&[]) {
            node = node.next_sibling();
        }
        node
    }

    /// The next sibling that is an element.
    pub fn next_sibling_element(&self) -> Node<'a> {
        let mut node = self.next_sibling();
        while node.is_present() && !node.is_element(&[]) {
            node = node.next_sibling();
        }
        node
    }

    /// The nearest ancestor that is an element.
    pub fn parent_element(&self) -> Node<'a> {
        let mut node = self.parent();
        while node.is_present() && !node.is_element(&[]) {
            node = node.parent();
        }
        node
    }

    /// A synthetic root whose sole child is this node, letting a detached
    /// subtree be traversed as if rooted. The node seen through the
    /// synthetic root exposes no siblings, so traversals that walk sibling
    /// chains stay inside the subtree.
    pub fn fake_parent(&self) -> Node<'a> {
        match self.repr {
            Repr::Tree(node) | Repr::Scoped(node) => Node {
                repr: Repr::Synthetic(node),
            },
            Repr::Absent | Repr::Synthetic(_) => Node::absent(),
        }
    }

    /// Flattened text of the subtree: every descendant text node
    /// concatenated in document order, with no separators inserted. A text
    /// node yields its own data.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.append_text(&mut out);
        out
    }

    fn append_text(&self, out: &mut String) {
        if self.is_text() {
            out.push_str(self.text());
            return;
        }
        let mut child = self.first_child();
        while child.is_present() {
            child.append_text(out);
            child = child.next_sibling();
        }
    }

    /// Every node in the subtree (self included, pre-order) whose `class`
    /// attribute, tokenized on whitespace, is a superset of the tokens in
    /// `class_spec`. An empty `class_spec` matches every node.
    pub fn classes(&self, class_spec: &str) -> Vec<Node<'a>> {
        let wanted: Vec<&str> = class_spec.split_whitespace().collect();
        let mut matches = Vec::new();
        self.collect_classes(&wanted, &mut matches);
        matches
    }

    fn collect_classes(&self, wanted: &[&str], matches: &mut Vec<Node<'a>>) {
        if self.is_absent() {
            return;
        }
        if wanted.iter().all(|token| self.has_class(token)) {
            matches.push(*self);
        }
        let mut child = self.first_child();
        while child.is_present() {
            child.collect_classes(wanted, matches);
            child = child.next_sibling();
        }
    }

    fn has_class(&self, token: &str) -> bool {
        self.element()
            .map_or(false, |element| element.classes().any(|class| class == token))
    }

    /// Every element in the subtree (self included, pre-order) whose tag is
    /// one of `names`. Unlike region classification, the scan keeps
    /// descending into matched subtrees.
    pub fn elements(&self, names: &[&str]) -> Vec<Node<'a>> {
        let mut matches = Vec::new();
        self.collect_elements(names, &mut matches);
        matches
    }

    fn collect_elements(&self, names: &[&str], matches: &mut Vec<Node<'a>>) {
        if self.is_absent() {
            return;
        }
        if self.is_element(&[]) && names.contains(&self.tag()) {
            matches.push(*self);
        }
        let mut child = self.first_child();
        while child.is_present() {
            child.collect_elements(names, matches);
            child = child.next_sibling();
        }
    }

    /// Depth-first pre-order search for the first node whose `id` attribute
    /// equals `id`.
    pub fn find_by_id(&self, id: &str) -> Node<'a> {
        if self.is_absent() {
            return Node::absent();
        }
        if self.attr(&["id"]) == id {
            return *self;
        }
        let mut child = self.first_child();
        while child.is_present() {
            let found = child.find_by_id(id);
            if found.is_present() {
                return found;
            }
            child = child.next_sibling();
        }
        Node::absent()
    }

    /// The first direct child element whose tag is one of `names`.
    pub fn child_element(&self, names: &[&str]) -> Node<'a> {
        let mut child = self.first_child_element();
        while child.is_present() {
            if names.contains(&child.tag()) {
                return child;
            }
            child = child.next_sibling_element();
        }
        Node::absent()
    }
}

/// Nodes compare by position identity within their tree, not by content.
impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Absent, Repr::Absent) => true,
            (Repr::Tree(a), Repr::Tree(b))
            | (Repr::Synthetic(a), Repr::Synthetic(b))
            | (Repr::Scoped(a), Repr::Scoped(b)) => a.id() == b.id(),
            _ => false,
        }
    }
}

impl Eq for Node<'_> {}
