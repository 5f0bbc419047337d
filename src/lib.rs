//! This crate exposes a Binary Search Tree (BST) whose operations can be
//! watched step by step, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores the value that was inserted
//! and will sometimes have child `Node`s. The invariant kept by this tree is:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than **or equal to** its own value. Duplicates are kept.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances, so inserting sorted values builds a chain whose height equals
//! the number of values. That is what the tree is for: showing exactly what
//! insertion order does to a BST. It also naturally supports sorted iteration
//! by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Watching
//!
//! Every operation on a [`Tree`][tree::Tree] has a `_with` form taking an
//! [`Observer`][observer::Observer] that hears about each step: the new shape
//! after an insertion, each node a search or traversal reaches, and the value a
//! search finds. [`Presenter`][presenter::Presenter] is an observer that draws
//! each step as a text frame.
//!
//! ```
//! use bstviz::config::PresenterConfig;
//! use bstviz::presenter::Presenter;
//! use bstviz::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let mut presenter = Presenter::new(std::io::sink(), PresenterConfig::default())?;
//!
//! for x in [5, 3, 7, 1, 10, 8, 4, 2] {
//!     tree.insert_with(x, &mut presenter);
//! }
//! assert!(tree.search_with(&7, &mut presenter));
//! assert!(!tree.search_with(&6, &mut presenter));
//! assert_eq!(presenter.found().len(), 1);
//! # Ok::<(), bstviz::error::Error>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod error;
pub mod layout;
pub mod log;
pub mod observer;
pub mod presenter;
pub mod tree;
