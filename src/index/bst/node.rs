//! Tree node and owning link type.

/// An owning link to a subtree. `None` is an empty subtree.
pub(super) type Link<R> = Option<Box<Node<R>>>;

/// A node in the tree.
///
/// Each node is uniquely owned by its parent's link (or the index root), so
/// the structure is always a tree: no sharing, no cycles.
#[derive(Debug)]
pub(super) struct Node<R> {
    /// The stored record.
    pub(super) record: R,
    /// Subtree with strictly smaller keys.
    pub(super) left: Link<R>,
    /// Subtree with greater or equal keys.
    pub(super) right: Link<R>,
}

impl<R> Node<R> {
    /// Create a detached leaf.
    #[inline]
    pub(super) fn leaf(record: R) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }

    /// Whether both child slots are occupied.
    #[inline]
    pub(super) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

/// Detach the leftmost node of a non-empty subtree and return its record.
///
/// The detached node's right subtree takes its place, so the rest of the
/// subtree keeps the search property. Returns `None` for an empty subtree.
pub(super) fn take_min<R>(link: &mut Link<R>) -> Option<R> {
    let mut cur = link;
    while cur.as_ref()?.left.is_some() {
        cur = &mut cur.as_mut()?.left;
    }

    let mut min = cur.take()?;
    *cur = min.right.take();
    Some(min.record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attach(parent: &mut Node<u32>, left: Option<u32>, right: Option<u32>) {
        parent.left = left.map(Node::leaf);
        parent.right = right.map(Node::leaf);
    }

    #[test]
    fn test_leaf() {
        let node = Node::leaf(7u32);
        assert_eq!(node.record, 7);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
        assert!(!node.has_two_children());
    }

    #[test]
    fn test_has_two_children() {
        let mut node = Node::leaf(5u32);
        attach(&mut node, Some(3), None);
        assert!(!node.has_two_children());

        attach(&mut node, Some(3), Some(8));
        assert!(node.has_two_children());
    }

    #[test]
    fn test_take_min_empty() {
        let mut link: Link<u32> = None;
        assert_eq!(take_min(&mut link), None);
    }

    #[test]
    fn test_take_min_root() {
        // Root has no left child: the root itself is the minimum and its
        // right subtree is promoted.
        let mut root = Node::leaf(5u32);
        attach(&mut root, None, Some(8));
        let mut link = Some(root);

        assert_eq!(take_min(&mut link), Some(5));
        assert_eq!(link.as_ref().map(|n| n.record), Some(8));
    }

    #[test]
    fn test_take_min_splices_right_child() {
        //        10
        //       /
        //      4
        //       \
        //        6
        let mut four = Node::leaf(4u32);
        attach(&mut four, None, Some(6));
        let mut root = Node::leaf(10u32);
        root.left = Some(four);
        let mut link = Some(root);

        assert_eq!(take_min(&mut link), Some(4));

        let root = link.as_ref().unwrap();
        assert_eq!(root.record, 10);
        assert_eq!(root.left.as_ref().map(|n| n.record), Some(6));
    }
}
