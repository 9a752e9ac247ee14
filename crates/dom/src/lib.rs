//! # dom
//!
//! An in-memory document tree that stands in for a browser environment. It offers
//! what presentation controllers need from a host: element lookup by simple
//! selectors, ancestry tests, attribute and inline-style mutation, form-control
//! values, markup fragment insertion, serialization, and layout boxes that the
//! embedder assigns per node.

mod document;
mod entities;
mod selector;
mod tokenizer;
mod types;

pub use crate::document::Document;
pub use crate::entities::{escape_attribute, escape_text};
pub use crate::selector::Selector;
pub use crate::tokenizer::tokenize;
pub use crate::types::{Id, NodeId, NodeKind, Token};
pub use core_types::{Rect, Viewport};
