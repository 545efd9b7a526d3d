//! The element arena.
//!
//! Elements live in a [`SlotMap`] and refer to each other through
//! [`ElementId`] keys. Each node stores its parent link and an ordered child
//! list; the child order is the paint order. Stale ids are reported as
//! [`Error::ElementNotFound`] instead of panicking.

use slotmap::SlotMap;

use conui_core::{Error, Position, Result, Size};

use crate::element::{Element, ElementKind};

slotmap::new_key_type! {
    /// A key identifying an element in an [`ElementTree`].
    pub struct ElementId;
}

/// An element together with its tree links.
#[derive(Debug)]
struct Node {
    element: Element,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// An arena of elements linked into a forest of trees.
///
/// # Example
///
/// ```
/// use conui_core::Position;
/// use conui_widgets::{Element, ElementTree};
///
/// let mut tree = ElementTree::new();
/// let root = tree.insert(Element::interface().position((5, 2)).build());
/// let child = tree.add_new_child(root, Element::label().position((1, 1)).build()).unwrap();
///
/// assert_eq!(tree.absolute_position(child).unwrap(), Position::new(6, 3));
/// ```
#[derive(Debug, Default)]
pub struct ElementTree {
    nodes: SlotMap<ElementId, Node>,
}

fn not_found(id: ElementId) -> Error {
    Error::ElementNotFound(format!("{id:?}"))
}

impl ElementTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` refers to a live element.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Adds a detached element and returns its id.
    pub fn insert(&mut self, element: Element) -> ElementId {
        self.nodes.insert(Node {
            element,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Inserts `element` and appends it to `parent`'s children.
    pub fn add_new_child(&mut self, parent: ElementId, element: Element) -> Result<ElementId> {
        if !self.contains(parent) {
            return Err(not_found(parent));
        }
        let id = self.insert(element);
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Returns the element, if `id` is live.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id).map(|node| &node.element)
    }

    /// Returns the element mutably, if `id` is live.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id).map(|node| &mut node.element)
    }

    /// Returns the element or [`Error::ElementNotFound`].
    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.get(id).ok_or_else(|| not_found(id))
    }

    /// Returns the element mutably or [`Error::ElementNotFound`].
    pub fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.get_mut(id).ok_or_else(|| not_found(id))
    }

    /// Returns the parent of `id`, if it has one.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Returns the children of `id` in paint order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    /// Returns true if `ancestor` is `id` or one of its ancestors.
    fn is_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Appends `child` to `parent`'s children.
    ///
    /// A child that already has a parent is detached from it first. Attaching
    /// an element under itself or one of its descendants fails with
    /// [`Error::CircularReference`].
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        if !self.contains(parent) {
            return Err(not_found(parent));
        }
        if !self.contains(child) {
            return Err(not_found(child));
        }
        if self.is_ancestor(child, parent) {
            return Err(Error::CircularReference);
        }

        self.remove_from_parent(child)?;
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
        tracing::debug!(?parent, ?child, "attached element");
        Ok(())
    }

    /// Detaches `child` from `parent`.
    ///
    /// The child stays in the arena as the root of its own subtree.
    pub fn remove_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        let node = self.nodes.get_mut(parent).ok_or_else(|| not_found(parent))?;
        let index = node
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or_else(|| Error::NotAChild {
                parent: format!("{parent:?}"),
                child: format!("{child:?}"),
            })?;
        node.children.remove(index);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
        tracing::debug!(?parent, ?child, "detached element");
        Ok(())
    }

    /// Detaches `child` from its parent, if it has one.
    pub fn remove_from_parent(&mut self, child: ElementId) -> Result<()> {
        let node = self.nodes.get(child).ok_or_else(|| not_found(child))?;
        match node.parent {
            Some(parent) => self.remove_child(parent, child),
            None => Ok(()),
        }
    }

    /// Removes and frees every child subtree of `parent`.
    pub fn clear_children(&mut self, parent: ElementId) -> Result<()> {
        let node = self.nodes.get_mut(parent).ok_or_else(|| not_found(parent))?;
        let children = std::mem::take(&mut node.children);
        for child in children {
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = None;
            }
            self.free_subtree(child);
        }
        Ok(())
    }

    /// Detaches `id` and frees it together with its whole subtree.
    pub fn remove(&mut self, id: ElementId) -> Result<Element> {
        self.remove_from_parent(id)?;
        for descendant in self.descendants(id) {
            self.nodes.remove(descendant);
        }
        self.nodes
            .remove(id)
            .map(|node| node.element)
            .ok_or_else(|| not_found(id))
    }

    fn free_subtree(&mut self, id: ElementId) {
        for descendant in self.descendants(id) {
            self.nodes.remove(descendant);
        }
        self.nodes.remove(id);
    }

    /// Returns every descendant of `id` in depth-first paint order, not
    /// including `id` itself.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            result.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        result
    }

    /// Returns the position of `id` in screen coordinates.
    ///
    /// This walks up to the root, so it costs O(depth).
    pub fn absolute_position(&self, id: ElementId) -> Result<Position> {
        let mut position = self.element(id)?.position();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            position += self.element(parent)?.position();
            current = self.parent(parent);
        }
        Ok(position)
    }

    /// Sizes `id` to the bounding box of its children.
    ///
    /// The size becomes the largest child right edge by the largest child
    /// bottom edge, or zero without children. Frames add one column and one
    /// row so their border closes after the content. The result is still
    /// clamped to the element's maximum size.
    pub fn size_to_fit_children(&mut self, id: ElementId) -> Result<Size> {
        let mut extent = Size::ZERO;
        for &child in self.children(id) {
            let child = self.element(child)?;
            extent.width = extent.width.max(child.right());
            extent.height = extent.height.max(child.bottom());
        }

        let element = self.element_mut(id)?;
        if matches!(element.kind(), ElementKind::Frame(_)) {
            extent = extent.grow(1, 1);
        }
        element.set_size(extent);
        Ok(element.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bare_at(x: i32, y: i32, w: i32, h: i32) -> Element {
        Element::bare().position((x, y)).size((w, h)).build()
    }

    mod link_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_child_sets_parent() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(0, 0, 10, 10));
            let child = tree.insert(bare_at(1, 1, 2, 2));
            tree.add_child(root, child).unwrap();

            assert_eq!(tree.parent(child), Some(root));
            assert_eq!(tree.children(root), &[child]);
        }

        #[test]
        fn test_reparenting_detaches_from_old_parent() {
            let mut tree = ElementTree::new();
            let a = tree.insert(bare_at(0, 0, 1, 1));
            let b = tree.insert(bare_at(0, 0, 1, 1));
            let child = tree.add_new_child(a, bare_at(0, 0, 1, 1)).unwrap();

            tree.add_child(b, child).unwrap();
            assert!(tree.children(a).is_empty());
            assert_eq!(tree.children(b), &[child]);
            assert_eq!(tree.parent(child), Some(b));
        }

        #[test]
        fn test_cycles_are_rejected() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(0, 0, 1, 1));
            let child = tree.add_new_child(root, bare_at(0, 0, 1, 1)).unwrap();
            let grandchild = tree.add_new_child(child, bare_at(0, 0, 1, 1)).unwrap();

            assert!(matches!(
                tree.add_child(grandchild, root),
                Err(Error::CircularReference)
            ));
            assert!(matches!(
                tree.add_child(child, child),
                Err(Error::CircularReference)
            ));
            assert_eq!(tree.parent(root), None);
        }

        #[test]
        fn test_remove_child_that_is_not_a_child() {
            let mut tree = ElementTree::new();
            let a = tree.insert(bare_at(0, 0, 1, 1));
            let b = tree.insert(bare_at(0, 0, 1, 1));
            let err = tree.remove_child(a, b).unwrap_err();
            assert!(matches!(err, Error::NotAChild { .. }));
        }

        #[test]
        fn test_remove_child_orphans_subtree() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(0, 0, 1, 1));
            let child = tree.add_new_child(root, bare_at(0, 0, 1, 1)).unwrap();
            let leaf = tree.add_new_child(child, bare_at(0, 0, 1, 1)).unwrap();

            tree.remove_child(root, child).unwrap();
            assert_eq!(tree.parent(child), None);
            assert_eq!(tree.children(child), &[leaf]);
            assert_eq!(tree.len(), 3);
        }

        #[test]
        fn test_stale_ids() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(0, 0, 1, 1));
            let gone = tree.insert(bare_at(0, 0, 1, 1));
            tree.remove(gone).unwrap();

            assert!(!tree.contains(gone));
            assert!(matches!(tree.add_child(root, gone), Err(Error::ElementNotFound(_))));
            assert!(matches!(tree.element(gone), Err(Error::ElementNotFound(_))));
            assert!(tree.children(gone).is_empty());
        }
    }

    mod removal_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_remove_frees_subtree() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(0, 0, 1, 1));
            let child = tree.add_new_child(root, bare_at(0, 0, 1, 1)).unwrap();
            tree.add_new_child(child, bare_at(0, 0, 1, 1)).unwrap();

            tree.remove(child).unwrap();
            assert_eq!(tree.len(), 1);
            assert!(tree.children(root).is_empty());
        }

        #[test]
        fn test_clear_children() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(0, 0, 1, 1));
            for _ in 0..3 {
                let child = tree.add_new_child(root, bare_at(0, 0, 1, 1)).unwrap();
                tree.add_new_child(child, bare_at(0, 0, 1, 1)).unwrap();
            }
            assert_eq!(tree.len(), 7);

            tree.clear_children(root).unwrap();
            assert_eq!(tree.len(), 1);
            assert!(tree.children(root).is_empty());
        }

        #[test]
        fn test_descendants_in_paint_order() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(0, 0, 1, 1));
            let a = tree.add_new_child(root, bare_at(0, 0, 1, 1)).unwrap();
            let a1 = tree.add_new_child(a, bare_at(0, 0, 1, 1)).unwrap();
            let b = tree.add_new_child(root, bare_at(0, 0, 1, 1)).unwrap();

            assert_eq!(tree.descendants(root), vec![a, a1, b]);
        }
    }

    mod geometry_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_absolute_position_sums_ancestors() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(20, 7, 40, 11));
            let menu = tree.add_new_child(root, bare_at(2, 1, 36, 3)).unwrap();
            let entry = tree.add_new_child(menu, bare_at(0, 2, 10, 1)).unwrap();

            assert_eq!(tree.absolute_position(entry).unwrap(), Position::new(22, 10));
            assert_eq!(tree.absolute_position(root).unwrap(), Position::new(20, 7));
        }

        #[test]
        fn test_size_to_fit_children() {
            let mut tree = ElementTree::new();
            let root = tree.insert(bare_at(0, 0, 50, 50));
            tree.add_new_child(root, bare_at(1, 1, 5, 1)).unwrap();
            tree.add_new_child(root, bare_at(0, 3, 2, 2)).unwrap();

            assert_eq!(tree.size_to_fit_children(root).unwrap(), Size::new(6, 5));

            let empty = tree.insert(bare_at(0, 0, 9, 9));
            assert_eq!(tree.size_to_fit_children(empty).unwrap(), Size::ZERO);
        }

        #[test]
        fn test_frame_fits_with_closing_border() {
            let mut tree = ElementTree::new();
            let frame = tree.insert(Element::frame().size((40, 11)).build());
            tree.add_new_child(frame, bare_at(2, 2, 10, 3)).unwrap();

            assert_eq!(tree.size_to_fit_children(frame).unwrap(), Size::new(13, 6));
        }
    }
}
