//! In-order traversal.

use std::iter::FusedIterator;

use super::node::Node;

/// Lazy in-order iterator over an [`OrderedIndex`](super::OrderedIndex).
///
/// Keeps the path of not-yet-visited ancestors on an explicit stack, so
/// memory is O(h) and a degenerate tree does not recurse.
pub struct Iter<'a, R> {
    /// Nodes whose left subtree is done but which are not yet yielded.
    stack: Vec<&'a Node<R>>,
    /// Records not yet yielded.
    remaining: usize,
}

impl<'a, R> Iter<'a, R> {
    pub(super) fn new(root: Option<&'a Node<R>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cur: Option<&'a Node<R>>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<&'a R> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {}

impl<R> FusedIterator for Iter<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: u32) -> Box<Node<u32>> {
        Node::leaf(value)
    }

    #[test]
    fn test_empty() {
        let mut iter: Iter<'_, u32> = Iter::new(None, 0);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_balanced() {
        //      4
        //    /   \
        //   2     6
        //  / \   / \
        // 1   3 5   7
        let mut two = leaf(2);
        two.left = Some(leaf(1));
        two.right = Some(leaf(3));
        let mut six = leaf(6);
        six.left = Some(leaf(5));
        six.right = Some(leaf(7));
        let mut root = leaf(4);
        root.left = Some(two);
        root.right = Some(six);

        let iter = Iter::new(Some(&*root), 7);
        assert_eq!(iter.len(), 7);
        let values: Vec<u32> = iter.copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_right_leaning() {
        let mut two = leaf(2);
        two.right = Some(leaf(3));
        let mut root = leaf(1);
        root.right = Some(two);

        let mut iter = Iter::new(Some(&*root), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
    }
}
