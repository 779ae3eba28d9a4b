//! An in-memory product catalog indexed by an unbalanced Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! records. It is defined recursively using the notion of a `Node`. A `Node` stores a value
//! (the element that was inserted) and has up to two child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! These invariants make searching take `O(height)` and give sorted iteration for free by
//! visiting the left subtree, then the subtree root, then the right subtree. The [`tree::Tree`]
//! in this crate does no balancing, so `height` can be as bad as the number of elements when keys
//! arrive already sorted.
//!
//! ## Catalog
//!
//! [`catalog::Catalog`] stores [`product::Product`]s in a tree keyed by SKU. It loads them from a
//! CSV export, skipping and reporting malformed records, and lists them by SKU or by price.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod parse;
pub mod product;
pub mod tree;
