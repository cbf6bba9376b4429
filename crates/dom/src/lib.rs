//! Minimal element tree for wiring page behaviors against.
//!
//! This crate carries just enough of a document model for handlers to look
//! elements up by selector and flip marker classes on them: no parsing, no
//! styling, no layout.

pub mod class_list;
pub mod dom_utils;
pub mod selector;

mod types;

pub use types::{Id, Node, NodeId};
