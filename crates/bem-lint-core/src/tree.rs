//! BEM tree: the classed elements of a document, arranged as in the DOM.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Elements
//! without a `class` attribute get no node; their children attach to the
//! nearest classed ancestor, so ancestor walks only ever see classed
//! elements. The `body` element is always the root.

use std::collections::BTreeSet;
use std::fmt;
use tracing::trace;

use crate::class::BemClass;
use crate::element::SourceElement;
use crate::error::DocumentError;
use crate::types::ElementSpan;

/// Index of a node in a [`BemTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One classed element in the BEM tree.
pub struct BemNode<'a> {
    element: &'a dyn SourceElement,
    classes: Vec<BemClass>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<'a> BemNode<'a> {
    /// The underlying parsed element.
    #[must_use]
    pub fn element(&self) -> &'a dyn SourceElement {
        self.element
    }

    /// Parsed classes in attribute order.
    #[must_use]
    pub fn classes(&self) -> &[BemClass] {
        &self.classes
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Tag name of the underlying element.
    #[must_use]
    pub fn tag_name(&self) -> &'a str {
        self.element.tag_name().unwrap_or_default()
    }

    /// Source span of the underlying element.
    #[must_use]
    pub fn span(&self) -> Option<ElementSpan> {
        self.element.span()
    }

    /// Returns true if any class on this node has the given raw name.
    #[must_use]
    pub fn has_class(&self, raw: &str) -> bool {
        self.classes.iter().any(|c| c.raw == raw)
    }
}

impl fmt::Debug for BemNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BemNode")
            .field("tag", &self.tag_name())
            .field("classes", &self.classes)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish()
    }
}

/// Arena-backed BEM tree built from a document's `body`.
#[derive(Debug)]
pub struct BemTree<'a> {
    nodes: Vec<BemNode<'a>>,
    all_classes: BTreeSet<String>,
}

impl<'a> BemTree<'a> {
    /// Builds the tree from the `body` element.
    ///
    /// Construction is all-or-nothing: the first malformed class token
    /// anywhere aborts the build.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MalformedClass`] naming the element that
    /// carries the malformed token.
    pub fn build(body: &'a dyn SourceElement) -> Result<Self, DocumentError> {
        let mut tree = Self {
            nodes: Vec::new(),
            all_classes: BTreeSet::new(),
        };
        let classes = tree.parse_classes(body)?;
        let root = tree.insert(body, classes, None);
        tree.visit_children(body, root)?;
        Ok(tree)
    }

    fn visit_children(
        &mut self,
        element: &'a dyn SourceElement,
        bem_parent: NodeId,
    ) -> Result<(), DocumentError> {
        for child in element.children() {
            if child.tag_name().is_none() {
                continue;
            }
            let parent = if Self::has_classes(child) {
                let classes = self.parse_classes(child)?;
                self.insert(child, classes, Some(bem_parent))
            } else {
                bem_parent
            };
            self.visit_children(child, parent)?;
        }
        Ok(())
    }

    fn has_classes(element: &dyn SourceElement) -> bool {
        element
            .attribute("class")
            .is_some_and(|v| !v.trim().is_empty())
    }

    fn parse_classes(&mut self, element: &dyn SourceElement) -> Result<Vec<BemClass>, DocumentError> {
        let Some(value) = element.attribute("class") else {
            return Ok(Vec::new());
        };

        let mut classes = Vec::new();
        for token in value.split_whitespace() {
            let class = BemClass::parse(token).map_err(|_| DocumentError::MalformedClass {
                class: token.to_string(),
                tag_name: element.tag_name().unwrap_or_default().to_string(),
                location: element.span(),
            })?;
            self.all_classes.insert(token.to_string());
            classes.push(class);
        }
        Ok(classes)
    }

    fn insert(
        &mut self,
        element: &'a dyn SourceElement,
        classes: Vec<BemClass>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        trace!(tag = element.tag_name(), classes = classes.len(), "bem node");
        self.nodes.push(BemNode {
            element,
            classes,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    /// The root node (the `body` element).
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &BemNode<'a> {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a built tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in depth-first pre-order (document order).
    ///
    /// Nodes are inserted during a pre-order walk, so arena order is
    /// pre-order.
    pub fn preorder(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Every distinct class name seen anywhere in the tree.
    #[must_use]
    pub fn all_classes(&self) -> &BTreeSet<String> {
        &self.all_classes
    }

    /// Walks strictly upward from `id`'s parent and returns the first
    /// ancestor whose classes satisfy `pred`. Never inspects `id` itself.
    pub fn find_ancestor<F>(&self, id: NodeId, pred: F) -> Option<&BemNode<'a>>
    where
        F: Fn(&[BemClass]) -> bool,
    {
        let mut current = self.node(id).parent;
        while let Some(parent_id) = current {
            let parent = self.node(parent_id);
            if pred(&parent.classes) {
                return Some(parent);
            }
            current = parent.parent;
        }
        None
    }

    /// Returns true if some ancestor of `id` satisfies `pred`.
    pub fn any_ancestor<F>(&self, id: NodeId, pred: F) -> bool
    where
        F: Fn(&[BemClass]) -> bool,
    {
        self.find_ancestor(id, pred).is_some()
    }

    /// Depth of `id` below the root (root is 0).
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementNode;

    fn div(class: &str) -> ElementNode {
        ElementNode::element("div").with_class(class)
    }

    #[test]
    fn body_without_class_is_root() {
        let body = ElementNode::element("body");
        let tree = BemTree::build(&body).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.node(tree.root()).classes().is_empty());
        assert_eq!(tree.node(tree.root()).tag_name(), "body");
    }

    #[test]
    fn unclassed_elements_are_transparent() {
        let body = ElementNode::element("body").with_child(
            div("menu").with_child(ElementNode::element("ul").with_child(div("menu__item"))),
        );
        let tree = BemTree::build(&body).unwrap();
        assert_eq!(tree.len(), 3);

        let ids: Vec<_> = tree.preorder().collect();
        let item = tree.node(ids[2]);
        assert_eq!(item.parent(), Some(ids[1]));
        assert_eq!(tree.depth(ids[2]), 2);
    }

    #[test]
    fn blank_class_attribute_creates_no_node() {
        let body = ElementNode::element("body").with_child(div("   ").with_child(div("card")));
        let tree = BemTree::build(&body).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.node(NodeId(1)).parent(), Some(tree.root()));
    }

    #[test]
    fn tagless_children_are_skipped() {
        let body = ElementNode::element("body")
            .with_child(ElementNode::document(vec![div("hidden")]))
            .with_child(div("card"));
        let tree = BemTree::build(&body).unwrap();
        assert_eq!(tree.len(), 2);
        assert!(tree.all_classes().contains("card"));
        assert!(!tree.all_classes().contains("hidden"));
    }

    #[test]
    fn classes_keep_attribute_order() {
        let body = ElementNode::element("body").with_child(div("card__title  card\tbox"));
        let tree = BemTree::build(&body).unwrap();
        let raws: Vec<_> = tree
            .node(NodeId(1))
            .classes()
            .iter()
            .map(|c| c.raw.as_str())
            .collect();
        assert_eq!(raws, ["card__title", "card", "box"]);
    }

    #[test]
    fn children_follow_document_order() {
        let body = ElementNode::element("body")
            .with_child(div("a"))
            .with_child(div("b"))
            .with_child(div("c"));
        let tree = BemTree::build(&body).unwrap();
        let names: Vec<_> = tree
            .node(tree.root())
            .children()
            .iter()
            .map(|id| tree.node(*id).classes()[0].raw.clone())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn malformed_token_aborts_build() {
        let body = ElementNode::element("body").with_child(
            ElementNode::element("section")
                .with_class("ok Card!Title")
                .with_span(ElementSpan::at(7, 3)),
        );
        let err = BemTree::build(&body).unwrap_err();
        assert_eq!(
            err,
            DocumentError::MalformedClass {
                class: "Card!Title".into(),
                tag_name: "section".into(),
                location: Some(ElementSpan::at(7, 3)),
            }
        );
    }

    #[test]
    fn find_ancestor_skips_the_node_itself() {
        let body = ElementNode::element("body").with_child(div("card").with_child(div("card")));
        let tree = BemTree::build(&body).unwrap();
        let outer = NodeId(1);
        let inner = NodeId(2);
        let has_card = |classes: &[BemClass]| classes.iter().any(|c| c.raw == "card");

        assert!(tree.find_ancestor(outer, has_card).is_none());
        let found = tree.find_ancestor(inner, has_card).unwrap();
        assert!(std::ptr::eq(found, tree.node(outer)));
    }

    #[test]
    fn find_ancestor_returns_nearest_match() {
        let body = ElementNode::element("body").with_class("x").with_child(
            div("x").with_child(div("y").with_child(div("z"))),
        );
        let tree = BemTree::build(&body).unwrap();
        let found = tree
            .find_ancestor(NodeId(3), |classes| classes.iter().any(|c| c.raw == "x"))
            .unwrap();
        assert!(std::ptr::eq(found, tree.node(NodeId(1))));
        assert!(tree.any_ancestor(NodeId(3), |classes| classes.iter().any(|c| c.raw == "y")));
        assert!(!tree.any_ancestor(NodeId(3), |classes| classes.iter().any(|c| c.raw == "z")));
    }
}
