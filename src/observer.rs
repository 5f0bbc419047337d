//! Hooks for watching a [`Tree`] work.
//!
//! The tree calls into an [`Observer`] after every logical step so that drawing, logging or
//! recording can be layered on top without the tree knowing about any of it. Observers only ever
//! see shared references; they can't change the tree they're watching.

use crate::tree::Tree;

/// Receives a notification for each step of a tree operation. All methods default to doing
/// nothing so implementors only override what they care about.
pub trait Observer<T> {
    /// Called once after every insertion with the tree in its new shape.
    fn on_structure_changed(&mut self, _tree: &Tree<T>) {}

    /// Called for each node reached during a search or traversal, in visiting order.
    fn on_node_visited(&mut self, _value: &T) {}

    /// Called once when a search reaches the value it was looking for.
    fn on_value_found(&mut self, _value: &T) {}
}

/// The silent observer.
impl<T> Observer<T> for () {}

impl<T, O> Observer<T> for &mut O
where
    O: Observer<T> + ?Sized,
{
    fn on_structure_changed(&mut self, tree: &Tree<T>) {
        (**self).on_structure_changed(tree)
    }

    fn on_node_visited(&mut self, value: &T) {
        (**self).on_node_visited(value)
    }

    fn on_value_found(&mut self, value: &T) {
        (**self).on_value_found(value)
    }
}

/// An owned copy of a single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<T> {
    /// The tree changed shape and now holds `len` nodes.
    StructureChanged {
        /// Number of nodes after the change.
        len: usize,
    },
    /// A node holding this value was reached.
    Visited(T),
    /// A search found this value.
    Found(T),
}

/// An [`Observer`] that remembers every notification it receives, in order.
///
/// # Examples
///
/// ```
/// use bstviz::observer::{Event, Recorder};
/// use bstviz::tree::Tree;
///
/// let mut tree = Tree::new();
/// let mut recorder = Recorder::new();
/// tree.insert_with(2, &mut recorder);
/// tree.insert_with(1, &mut recorder);
/// tree.search_with(&1, &mut recorder);
///
/// assert_eq!(
///     recorder.events(),
///     &[
///         Event::StructureChanged { len: 1 },
///         Event::StructureChanged { len: 2 },
///         Event::Visited(2),
///         Event::Visited(1),
///         Event::Found(1),
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorder<T> {
    events: Vec<Event<T>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Recorder<T> {
    /// Creates a recorder that hasn't seen anything yet.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Everything recorded so far.
    pub fn events(&self) -> &[Event<T>] {
        &self.events
    }

    /// The visited values, in the order they were visited.
    pub fn visited(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Visited(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// The values searches have found.
    pub fn found(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Found(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Observer<T> for Recorder<T>
where
    T: Clone,
{
    fn on_structure_changed(&mut self, tree: &Tree<T>) {
        self.events.push(Event::StructureChanged { len: tree.len() });
    }

    fn on_node_visited(&mut self, value: &T) {
        self.events.push(Event::Visited(value.clone()));
    }

    fn on_value_found(&mut self, value: &T) {
        self.events.push(Event::Found(value.clone()));
    }
}
