//! An unbalanced Binary Search Tree over a single ordered element type. The element is both the
//! key and the payload: its [`Ord`] implementation decides where it lives and whether two
//! elements are "the same" entry.
//!
//! The tree never rebalances. Inserting keys in sorted order produces a chain, which is still
//! correct, just slow. Every walk (insert, search, iteration, drop) uses a loop or an explicit
//! stack so such chains don't exhaust the call stack.
//!
//! # Examples
//!
//! ```
//! use catalog_index::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.search(&1), Some(&1));
//! assert_eq!(tree.in_order(), vec![&1, &2, &3]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

type Link<E> = Option<Box<Node<E>>>;

/// A Binary Search Tree. Elements are placed by their [`Ord`] implementation and an element
/// comparing [`Equal`][Ordering::Equal] to a stored one replaces it.
pub struct Tree<E> {
    root: Link<E>,
    /// Number of distinct elements (by `Ord`) currently stored.
    len: usize,
}

struct Node<E> {
    element: E,
    left: Link<E>,
    right: Link<E>,
}

impl<E> Node<E> {
    fn new_boxed(element: E) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }
}

impl<E> Default for Tree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Tree<E> {
    fn drop(&mut self) {
        // Detach children before each node is dropped so the default drop never recurses.
        let mut stack: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<E> Clone for Tree<E>
where
    E: Clone,
{
    /// Copies node by node, so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        let mut tree = Self {
            root: None,
            len: self.len,
        };
        {
            let mut stack: Vec<(&Node<E>, &mut Link<E>)> = Vec::new();
            if let Some(root) = self.root.as_deref() {
                stack.push((root, &mut tree.root));
            }
            while let Some((source, slot)) = stack.pop() {
                let node = slot.insert(Node::new_boxed(source.element.clone()));
                if let Some(left) = source.left.as_deref() {
                    stack.push((left, &mut node.left));
                }
                if let Some(right) = source.right.as_deref() {
                    stack.push((right, &mut node.right));
                }
            }
        }
        tree
    }
}

impl<E> fmt::Debug for Tree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E> Tree<E> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many distinct elements are stored. This is `O(1)`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator visiting every element in ascending order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Collects every element in ascending order (left subtree, node, right subtree). The result
    /// is computed fresh on each call.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_index::tree::Tree;
    ///
    /// let tree: Tree<_> = vec!["B", "A", "C"].into_iter().collect();
    /// assert_eq!(tree.in_order(), vec![&"A", &"B", &"C"]);
    /// ```
    pub fn in_order(&self) -> Vec<&E> {
        self.iter().collect()
    }

    /// Number of nodes on the longest root-to-leaf path. An empty tree has a height of 0.
    #[cfg(test)]
    fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<E>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }
}

impl<E> Tree<E>
where
    E: Ord,
{
    /// Inserts the given element. If an element comparing equal is already stored it is
    /// overwritten by this one and returned; the length is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_index::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), None);
    /// assert_eq!(tree.insert(1), Some(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: E) -> Option<E> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match element.cmp(&node.element) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.element, element)),
            }
        }

        *link = Some(Node::new_boxed(element));
        self.len += 1;
        None
    }

    /// Finds the stored element comparing equal to `probe`. Only the ordering of `probe` matters,
    /// and the returned reference is to the stored element, never to the probe.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_index::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, probe: &E) -> Option<&E> {
        let mut link = &self.root;
        while let Some(node) = link {
            match probe.cmp(&node.element) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return Some(&node.element),
            }
        }
        None
    }
}

impl<E> FromIterator<E> for Tree<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<E> for Tree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, E> IntoIterator for &'a Tree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`]. Holds the path of nodes whose element hasn't been yielded
/// yet, so memory use is bounded by the tree's height.
pub struct Iter<'a, E> {
    stack: Vec<&'a Node<E>>,
    remaining: usize,
}

impl<'a, E> Iter<'a, E> {
    fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<E>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}
