//! Where each node of a tree goes when it is drawn.
//!
//! Nodes are placed on a grid: the row is the node's depth and the column is its in-order rank.
//! Since ranks are unique no two nodes ever share a column, however deep the tree gets.

use crate::tree::{Node, Tree};

/// A node's value and its grid position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement<T> {
    /// The value held by the node.
    pub value: T,
    /// Depth of the node. The root is on row 0.
    pub row: usize,
    /// In-order rank of the node. The smallest value is in column 0.
    pub column: usize,
}

/// A parent to child link, identified by the columns of both ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Column of the parent.
    pub parent: usize,
    /// Column of the child.
    pub child: usize,
}

/// A snapshot of a tree's shape, detached from the tree itself.
///
/// # Examples
///
/// ```
/// use bstviz::layout::{Edge, Layout};
/// use bstviz::tree::Tree;
///
/// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
/// let layout = Layout::of(&tree);
///
/// assert_eq!(layout.width(), 3);
/// assert_eq!(layout.depth(), 2);
/// assert_eq!(layout.placements()[1].value, 2);
/// assert_eq!(layout.placements()[1].row, 0);
/// assert!(layout.edges().contains(&Edge { parent: 1, child: 0 }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout<T> {
    placements: Vec<Placement<T>>,
    edges: Vec<Edge>,
    depth: usize,
}

impl<T> Default for Layout<T> {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
            edges: Vec::new(),
            depth: 0,
        }
    }
}

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

/// A node flattened into an index-addressed list.
struct Slot<'a, T> {
    value: &'a T,
    row: usize,
    left: Option<usize>,
    right: Option<usize>,
}

impl<T> Layout<T> {
    /// Lays out the current shape of `tree`.
    pub fn of(tree: &Tree<T>) -> Self
    where
        T: Clone,
    {
        let slots = flatten(tree);
        let columns = inorder_ranks(&slots);

        let mut edges = Vec::with_capacity(slots.len().saturating_sub(1));
        for (id, slot) in slots.iter().enumerate() {
            for child in [slot.left, slot.right].into_iter().flatten() {
                edges.push(Edge {
                    parent: columns[id],
                    child: columns[child],
                });
            }
        }

        let mut placements: Vec<_> = slots
            .iter()
            .zip(&columns)
            .map(|(slot, &column)| Placement {
                value: slot.value.clone(),
                row: slot.row,
                column,
            })
            .collect();
        placements.sort_by_key(|p| p.column);

        let depth = placements.iter().map(|p| p.row + 1).max().unwrap_or(0);
        Self {
            placements,
            edges,
            depth,
        }
    }

    /// Every node, ordered by column.
    pub fn placements(&self) -> &[Placement<T>] {
        &self.placements
    }

    /// Every parent to child link.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of columns, which is also the number of nodes.
    pub fn width(&self) -> usize {
        self.placements.len()
    }

    /// Number of rows.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The placement in `column`.
    pub fn at(&self, column: usize) -> Option<&Placement<T>> {
        self.placements.get(column)
    }
}

/// Pre-order flattening. The root, if any, ends up at index 0.
fn flatten<T>(tree: &Tree<T>) -> Vec<Slot<'_, T>> {
    let mut slots: Vec<Slot<'_, T>> = Vec::with_capacity(tree.len());
    let mut pending: Vec<(&Node<T>, usize, Option<(usize, Side)>)> =
        tree.root().map(|n| (n, 0, None)).into_iter().collect();

    while let Some((node, row, parent)) = pending.pop() {
        let id = slots.len();
        slots.push(Slot {
            value: node.value(),
            row,
            left: None,
            right: None,
        });
        match parent {
            Some((p, Side::Left)) => slots[p].left = Some(id),
            Some((p, Side::Right)) => slots[p].right = Some(id),
            None => {}
        }

        pending.extend(node.right().map(|n| (n, row + 1, Some((id, Side::Right)))));
        pending.extend(node.left().map(|n| (n, row + 1, Some((id, Side::Left)))));
    }

    slots
}

/// Maps each slot index to its in-order rank.
fn inorder_ranks<T>(slots: &[Slot<'_, T>]) -> Vec<usize> {
    let mut ranks = vec![0; slots.len()];
    let mut stack = Vec::new();
    let mut next = if slots.is_empty() { None } else { Some(0) };
    let mut rank = 0;

    loop {
        while let Some(id) = next {
            stack.push(id);
            next = slots[id].left;
        }
        let Some(id) = stack.pop() else { break };
        ranks[id] = rank;
        rank += 1;
        next = slots[id].right;
    }

    ranks
}
