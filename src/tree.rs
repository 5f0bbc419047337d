//! An unbalanced BST whose operations can be watched step by step. Every operation has a plain
//! form and a `_with` form that reports each logical step to an [`Observer`].
//!
//! Insertion routes values smaller than a node to its left and everything else (including equal
//! values) to its right. Nothing is ever rebalanced so the shape of the tree is entirely decided
//! by insertion order.
//!
//! # Examples
//!
//! ```
//! use bstviz::observer::Recorder;
//! use bstviz::tree::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 7, 1, 10, 8, 4, 2].into_iter().collect();
//!
//! // In-order traversal is always sorted.
//! assert_eq!(tree.inorder_traversal(), vec![1, 2, 3, 4, 5, 7, 8, 10]);
//!
//! // Searches report the path they walk.
//! let mut recorder = Recorder::new();
//! assert!(tree.search_with(&4, &mut recorder));
//! assert_eq!(recorder.visited(), vec![5, 3, 4]);
//! assert_eq!(recorder.found(), vec![4]);
//!
//! // Duplicates are kept, not rejected.
//! tree.insert(5);
//! assert_eq!(tree.len(), 9);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::observer::Observer;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree that never rebalances. Values can be inserted, searched for and walked
/// in order, but never removed.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping a `Box` chain recursively would blow the stack on a degenerate tree so the nodes
    // are detached one at a time instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree. Since duplicates are never merged, this is also the
    /// number of insertions performed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The root `Node`, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstviz::tree::Tree;
    ///
    /// // Strictly increasing input degenerates into a chain.
    /// let tree: Tree<i32> = (1..=5).collect();
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Lazily walks the values in order: left subtree, then the node, then the right subtree.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root());
        iter
    }

    /// Inserts `value` into the tree. This always succeeds: duplicates are routed right of the
    /// value they equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstviz::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.inorder_traversal(), vec![5, 5]);
    /// assert!(tree.root().unwrap().left().is_none());
    /// assert_eq!(tree.root().unwrap().right().map(|n| *n.value()), Some(5));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.insert_with(value, &mut ());
    }

    /// Same as [`insert`][Tree::insert] but tells the `observer` about the new shape of the tree
    /// once the node is in place.
    pub fn insert_with<O>(&mut self, value: T, observer: &mut O)
    where
        T: Ord,
        O: Observer<T> + ?Sized,
    {
        let mut depth = 0;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;

        trace!(depth, len = self.len, "inserted node");
        observer.on_structure_changed(self);
    }

    /// Returns `true` if some node holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstviz::tree::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.search(&3));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search_with(value, &mut ())
    }

    /// Same as [`search`][Tree::search] but reports every node on the path to the `observer`,
    /// followed by the found value when the search succeeds.
    pub fn search_with<O>(&self, value: &T, observer: &mut O) -> bool
    where
        T: Ord,
        O: Observer<T> + ?Sized,
    {
        let mut steps = 0;
        let mut found = false;
        for step in self.search_path(value) {
            match step {
                Step::Visited(v) => {
                    steps += 1;
                    trace!(step = steps, "visited node");
                    observer.on_node_visited(v);
                }
                Step::Found(v) => {
                    found = true;
                    observer.on_value_found(v);
                }
            }
        }

        debug!(found, steps, "search finished");
        found
    }

    /// Lazily walks the search path for `value`. Each real node on the path yields a
    /// [`Step::Visited`]. If the last visited node holds `value` a final [`Step::Found`] follows.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstviz::tree::{Step, Tree};
    ///
    /// let tree: Tree<i32> = [5, 3, 7].into_iter().collect();
    /// let steps: Vec<_> = tree.search_path(&7).collect();
    ///
    /// assert_eq!(steps, vec![Step::Visited(&5), Step::Visited(&7), Step::Found(&7)]);
    /// ```
    pub fn search_path<'a>(&'a self, value: &'a T) -> Search<'a, T>
    where
        T: Ord,
    {
        Search {
            next: self.root(),
            target: value,
            found: None,
        }
    }

    /// Collects every value in ascending order. The result has one entry per insertion.
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inorder_traversal_with(&mut ())
    }

    /// Same as [`inorder_traversal`][Tree::inorder_traversal] but reports each node to the
    /// `observer` as it is reached.
    pub fn inorder_traversal_with<O>(&self, observer: &mut O) -> Vec<T>
    where
        T: Clone,
        O: Observer<T> + ?Sized,
    {
        let mut result = Vec::with_capacity(self.len);
        for value in self.iter() {
            result.push(value.clone());
            observer.on_node_visited(value);
        }

        debug!(len = result.len(), "traversal finished");
        result
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single element of a [`Tree`]. Its value never changes and each child slot is filled at most
/// once.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value this node was created with.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the subtree holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree holding values greater than or equal to this one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// One step of a search, as yielded by [`Search`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step<'a, T> {
    /// The search reached the node holding this value.
    Visited(&'a T),
    /// The node visited last holds the value being searched for.
    Found(&'a T),
}

/// Iterator over the steps of a search. See [`Tree::search_path`].
#[derive(Debug)]
pub struct Search<'a, T> {
    next: Option<&'a Node<T>>,
    target: &'a T,
    found: Option<&'a T>,
}

impl<'a, T> Iterator for Search<'a, T>
where
    T: Ord,
{
    type Item = Step<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.found.take() {
            return Some(Step::Found(value));
        }

        let node = self.next.take()?;
        match self.target.cmp(&node.value) {
            Ordering::Less => self.next = node.left(),
            Ordering::Equal => self.found = Some(&node.value),
            Ordering::Greater => self.next = node.right(),
        }

        Some(Step::Visited(&node.value))
    }
}

impl<T> FusedIterator for Search<'_, T> where T: Ord {}

/// In-order iterator over the values of a [`Tree`]. See [`Tree::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been queued but which haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::observer::Recorder;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and to a sorted `Vec` that models it, checking
    /// every search and traversal against the model along the way.
    fn do_ops<V>(ops: &[Op<V>], bst: &mut Tree<V>, model: &mut Vec<V>) -> bool
    where
        V: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    bst.insert(v.clone());
                    let at = model.partition_point(|x| x <= v);
                    model.insert(at, v.clone());
                }
                Op::Search(v) => {
                    let mut recorder = Recorder::new();
                    let found = bst.search_with(v, &mut recorder);
                    if found != model.contains(v) {
                        return false;
                    }
                    if found && recorder.visited().last() != Some(v) {
                        return false;
                    }
                }
                Op::Traverse => {
                    if bst.inorder_traversal() != *model {
                        return false;
                    }
                }
            }
        }

        bst.len() == model.len()
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model)
        }
    }

    quickcheck::quickcheck! {
        fn traversal_is_sorted(xs: Vec<i8>) -> bool {
            let tree: Tree<i8> = xs.iter().copied().collect();
            let values = tree.inorder_traversal();

            values.len() == xs.len() && values.windows(2).all(|w| w[0] <= w[1])
        }
    }

    quickcheck::quickcheck! {
        fn search_never_revisits(xs: Vec<i8>, needle: i8) -> bool {
            let tree: Tree<i8> = xs.iter().copied().collect();
            let mut recorder = Recorder::new();
            tree.search_with(&needle, &mut recorder);

            // A search path strictly descends so it can't be longer than the tree is tall.
            recorder.visited().len() <= tree.height()
        }
    }
}
