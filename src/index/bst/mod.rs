//! Unbalanced binary search tree index.
//!
//! # Shape
//! ```text
//!                 ┌────────┐
//!                 │  S078  │  root
//!                 └────────┘
//!                /          \
//!        ┌────────┐        ┌────────┐
//!        │  S022  │        │  S087  │
//!        └────────┘        └────────┘
//!                          /
//!                  ┌────────┐
//!                  │  S080  │
//!                  └────────┘
//! ```
//! Left subtrees hold strictly smaller keys, right subtrees hold greater or
//! equal keys. Nothing rebalances the tree: inserting keys in sorted order
//! degrades it into a list of height `n`.

mod iter;
mod node;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use crate::index::Keyed;

pub use iter::Iter;
use node::{take_min, Link, Node};

/// An ordered index over records, keyed by [`Keyed::key`].
///
/// # Duplicates
/// The index does not reject duplicate keys. A record whose key is already
/// present is placed in the right subtree of the existing one, where
/// [`search`](Self::search) will usually never reach it because descent stops
/// at the first match. Callers that need unique keys check
/// [`exists`](Self::exists) first.
///
/// # Example
/// ```
/// use supplierdb::index::{Keyed, OrderedIndex};
///
/// struct Entry(u32, &'static str);
///
/// impl Keyed for Entry {
///     type Key = u32;
///     fn key(&self) -> &u32 {
///         &self.0
///     }
/// }
///
/// let mut index = OrderedIndex::new();
/// index.insert(Entry(78, "VitaCo"));
/// index.insert(Entry(22, "GlucoSafe"));
///
/// assert_eq!(index.search(&22).map(|e| e.1), Some("GlucoSafe"));
/// let keys: Vec<u32> = index.in_order().iter().map(|e| e.0).collect();
/// assert_eq!(keys, vec![22, 78]);
/// ```
pub struct OrderedIndex<R> {
    /// Root of the tree, or `None` when empty.
    root: Link<R>,

    /// Number of stored records, duplicates included.
    len: usize,
}

impl<R: Keyed> OrderedIndex<R> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Whether a record with exactly this key is reachable.
    pub fn exists<Q>(&self, key: &Q) -> bool
    where
        R::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Find the record with this key.
    ///
    /// Follows only the comparison path from the root: equal stops, smaller
    /// goes left, larger goes right.
    pub fn search<Q>(&self, key: &Q) -> Option<&R>
    where
        R::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match compare(key, &node.record) {
                Ordering::Equal => return Some(&node.record),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Find the record with this key for in-place modification.
    ///
    /// The caller must not change the record's key through the returned
    /// reference; doing so breaks the search property.
    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut R>
    where
        R::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            cur = match compare(key, &node.record) {
                Ordering::Equal => return Some(&mut node.record),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a record without checking for an existing key.
    ///
    /// Smaller keys descend left; equal and larger keys descend right. The
    /// record is attached at the first empty slot on that path.
    pub fn insert(&mut self, record: R) {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = if record.key() < node.record.key() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cur = Some(Node::leaf(record));
        self.len += 1;
    }

    /// Remove the record with this key and return it.
    ///
    /// - A leaf is unlinked from its parent.
    /// - A node with one child is replaced by that child's subtree.
    /// - A node with two children takes the record of its in-order successor
    ///   (leftmost node of the right subtree), and the successor node is
    ///   unlinked in its place.
    ///
    /// Returns `None` and leaves the tree untouched if the key is not found.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<R>
    where
        R::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = &mut self.root;
        loop {
            let ordering = match cur.as_deref() {
                Some(node) => compare(key, &node.record),
                None => return None,
            };
            match ordering {
                Ordering::Less => cur = &mut cur.as_mut()?.left,
                Ordering::Greater => cur = &mut cur.as_mut()?.right,
                Ordering::Equal => break,
            }
        }

        let node = cur.as_mut()?;
        let removed = if node.has_two_children() {
            // The successor is the minimum of the right subtree, so no node
            // above it on that path shares its key and detaching the leftmost
            // node removes exactly the successor.
            let successor = take_min(&mut node.right)?;
            mem::replace(&mut node.record, successor)
        } else {
            let mut unlinked = cur.take()?;
            *cur = unlinked.left.take().or_else(|| unlinked.right.take());
            unlinked.record
        };
        self.len -= 1;
        Some(removed)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        dismantle(&mut self.root);
        self.len = 0;
    }

    // ========================================================================
    // Enumeration and shape
    // ========================================================================

    /// All records in ascending key order, fully materialized.
    pub fn in_order(&self) -> Vec<&R> {
        let mut records = Vec::with_capacity(self.len);
        records.extend(self.iter());
        records
    }

    /// Lazy in-order iterator.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Number of stored records.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<R>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 1));
        }

        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            let children = [node.left.as_deref(), node.right.as_deref()];
            for child in children.into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        height
    }
}

impl<R: Keyed> Default for OrderedIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Drop for OrderedIndex<R> {
    fn drop(&mut self) {
        dismantle(&mut self.root);
    }
}

impl<'a, R: Keyed> IntoIterator for &'a OrderedIndex<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Keyed> FromIterator<R> for OrderedIndex<R> {
    fn from_iter<I: IntoIterator<Item = R>>(records: I) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }
}

/// Compare a lookup key against a stored record's key.
#[inline]
fn compare<R, Q>(key: &Q, record: &R) -> Ordering
where
    R: Keyed,
    R::Key: Borrow<Q>,
    Q: Ord + ?Sized,
{
    key.cmp(record.key().borrow())
}

/// Free a subtree node by node.
///
/// The default recursive drop of a degenerate tree can overflow the stack.
fn dismantle<R>(link: &mut Link<R>) {
    let mut pending: Vec<Box<Node<R>>> = link.take().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        key: String,
        tag: u32,
    }

    impl Entry {
        fn new(key: &str, tag: u32) -> Self {
            Self {
                key: key.to_string(),
                tag,
            }
        }
    }

    impl Keyed for Entry {
        type Key = String;

        fn key(&self) -> &String {
            &self.key
        }
    }

    fn keys(index: &OrderedIndex<Entry>) -> Vec<&str> {
        index.in_order().iter().map(|e| e.key.as_str()).collect()
    }

    fn build(ids: &[&str]) -> OrderedIndex<Entry> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Entry::new(id, i as u32))
            .collect()
    }

    /// Key of the root node, for checking which record a delete promoted.
    fn root_key(index: &OrderedIndex<Entry>) -> Option<&str> {
        index.root.as_ref().map(|n| n.record.key.as_str())
    }

    fn right_of_root(index: &OrderedIndex<Entry>) -> Option<&Entry> {
        let right = index.root.as_ref()?.right.as_ref()?;
        Some(&right.record)
    }

    /// Right-leaning chain of `count` nodes keyed `00000000` upward.
    ///
    /// Built by hand: sorted inserts would take quadratic time.
    fn chain(count: u32) -> OrderedIndex<Entry> {
        let mut root: Link<Entry> = None;
        for i in (0..count).rev() {
            let mut node = Node::leaf(Entry::new(&format!("{:08}", i), i));
            node.right = root.take();
            root = Some(node);
        }
        OrderedIndex {
            root,
            len: count as usize,
        }
    }

    #[test]
    fn test_new_is_empty() {
        let index: OrderedIndex<Entry> = OrderedIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.height(), 0);
        assert!(index.in_order().is_empty());
        assert!(index.search("S001").is_none());
    }

    #[test]
    fn test_insert_into_empty_becomes_root() {
        let mut index = OrderedIndex::new();
        index.insert(Entry::new("S078", 0));

        assert_eq!(root_key(&index), Some("S078"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.height(), 1);
    }

    #[test]
    fn test_in_order_sorted() {
        let index = build(&["S078", "S087", "S022"]);
        assert_eq!(keys(&index), vec!["S022", "S078", "S087"]);
        assert_eq!(root_key(&index), Some("S078"));
        assert_eq!(index.height(), 2);
    }

    #[test]
    fn test_search() {
        let index = build(&["S078", "S087", "S022"]);

        assert_eq!(index.search("S087").map(|e| e.tag), Some(1));
        assert_eq!(index.search("S022").map(|e| e.tag), Some(2));
        assert!(index.search("S999").is_none());
        assert!(index.search("S000").is_none());
    }

    #[test]
    fn test_exists_idempotent() {
        let index = build(&["S078", "S087"]);
        assert_eq!(index.exists("S087"), index.exists("S087"));
        assert!(index.exists("S087"));
        assert_eq!(index.exists("S050"), index.exists("S050"));
        assert!(!index.exists("S050"));
    }

    #[test]
    fn test_search_mut_modifies_in_place() {
        let mut index = build(&["S078", "S087", "S022"]);

        index.search_mut("S022").unwrap().tag = 99;

        assert_eq!(index.search("S022").map(|e| e.tag), Some(99));
        assert!(index.search_mut("S999").is_none());
    }

    #[test]
    fn test_duplicate_goes_right_and_is_shadowed() {
        let mut index = build(&["S078"]);
        index.insert(Entry::new("S078", 7));

        // Both are stored and enumerated...
        assert_eq!(index.len(), 2);
        assert_eq!(keys(&index), vec!["S078", "S078"]);
        // ...but search stops at the shallower, original record.
        assert_eq!(index.search("S078").map(|e| e.tag), Some(0));
        assert_eq!(right_of_root(&index).map(|e| e.tag), Some(7));
    }

    #[test]
    fn test_delete_missing_leaves_tree_untouched() {
        let mut index = build(&["S078", "S087", "S022"]);
        assert!(index.delete("S999").is_none());
        assert_eq!(index.len(), 3);
        assert_eq!(keys(&index), vec!["S022", "S078", "S087"]);

        let mut empty: OrderedIndex<Entry> = OrderedIndex::new();
        assert!(empty.delete("S001").is_none());
    }

    #[test]
    fn test_delete_leaf() {
        let mut index = build(&["S078", "S087", "S022"]);

        let removed = index.delete("S022").unwrap();
        assert_eq!(removed.key, "S022");

        assert_eq!(keys(&index), vec!["S078", "S087"]);
        assert!(index.search("S078").is_some());
        assert!(index.search("S087").is_some());
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_delete_node_with_one_child() {
        //   S078
        //      \
        //      S087
        //      /
        //    S080
        let mut index = build(&["S078", "S087", "S080"]);

        index.delete("S087").unwrap();

        assert_eq!(keys(&index), vec!["S078", "S080"]);
        let right = right_of_root(&index).map(|e| e.key.as_str());
        assert_eq!(right, Some("S080"));
    }

    #[test]
    fn test_delete_root_with_one_child() {
        let mut index = build(&["S078", "S087"]);
        index.delete("S078").unwrap();
        assert_eq!(root_key(&index), Some("S087"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_delete_only_node() {
        let mut index = build(&["S078"]);
        let removed = index.delete("S078").unwrap();
        assert_eq!(removed.key, "S078");
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_delete_two_children_promotes_successor() {
        //        S078
        //       /    \
        //    S022    S087
        //            /
        //         S080
        let mut index = build(&["S078", "S087", "S022", "S080"]);

        let removed = index.delete("S078").unwrap();
        assert_eq!(removed.key, "S078");

        // Successor S080 now sits at the root; S087 lost its left child.
        assert_eq!(root_key(&index), Some("S080"));
        assert_eq!(keys(&index), vec!["S022", "S080", "S087"]);
        assert_eq!(index.len(), 3);
        assert!(index.search("S080").is_some());
    }

    #[test]
    fn test_delete_two_children_successor_has_right_child() {
        //      S050
        //     /    \
        //  S010    S090
        //          /
        //       S060
        //          \
        //          S070
        let mut index = build(&["S050", "S010", "S090", "S060", "S070"]);

        index.delete("S050").unwrap();

        assert_eq!(root_key(&index), Some("S060"));
        assert_eq!(keys(&index), vec!["S010", "S060", "S070", "S090"]);
        for id in ["S010", "S060", "S070", "S090"] {
            assert!(index.search(id).is_some(), "{id} unreachable");
        }
    }

    #[test]
    fn test_delete_everything() {
        let ids = [
            "S050", "S020", "S080", "S010", "S030", "S070", "S090", "S060",
        ];
        let mut index = build(&ids);

        for (deleted, id) in ids.iter().enumerate() {
            assert!(index.delete(*id).is_some());
            assert_eq!(index.len(), ids.len() - deleted - 1);
            let remaining = keys(&index);
            assert!(remaining.windows(2).all(|w| w[0] <= w[1]));
        }
        assert!(index.is_empty());
    }

    #[test]
    fn test_sorted_inserts_degenerate() {
        let ids: Vec<String> = (0..100).map(|i| format!("S{:03}", i)).collect();
        let index: OrderedIndex<Entry> = ids.iter().map(|id| Entry::new(id, 0)).collect();

        assert_eq!(index.height(), 100);
        assert_eq!(index.len(), 100);
        assert!(index.search("S099").is_some());
    }

    #[test]
    fn test_lexicographic_order() {
        let index = build(&["S9", "S10", "S100"]);
        assert_eq!(keys(&index), vec!["S10", "S100", "S9"]);
    }

    #[test]
    fn test_clear() {
        let mut index = build(&["S078", "S087", "S022"]);
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.search("S078").is_none());

        index.insert(Entry::new("S001", 0));
        assert_eq!(keys(&index), vec!["S001"]);
    }

    #[test]
    fn test_drop_deep_tree() {
        let index = chain(200_000);

        assert_eq!(index.search("00000000").map(|e| e.tag), Some(0));
        assert_eq!(index.search("00199999").map(|e| e.tag), Some(199_999));
        assert_eq!(index.iter().count(), 200_000);
        drop(index);
    }

    #[test]
    fn test_delete_deep_tree() {
        let count = 200_000u32;
        let mut index = chain(count);

        // Deepest key is a leaf at the end of the chain.
        assert_eq!(index.delete("00199999").map(|e| e.tag), Some(199_999));
        // The root has a single right child.
        assert_eq!(index.delete("00000000").map(|e| e.tag), Some(0));
        assert!(index.delete("00199999").is_none());

        assert_eq!(index.len(), count as usize - 2);
        let tags: Vec<u32> = index.iter().map(|e| e.tag).collect();
        assert_eq!(tags.len(), count as usize - 2);
        assert_eq!(tags.first(), Some(&1));
        assert_eq!(tags.last(), Some(&199_998));
        assert!(tags.windows(2).all(|w| w[0] + 1 == w[1]));
    }

    #[test]
    fn test_into_iterator() {
        let index = build(&["b", "c", "a"]);
        let mut seen = Vec::new();
        for entry in &index {
            seen.push(entry.key.clone());
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
    }
}
