//! The document capability the controller consumes.
//!
//! The controller never creates or lays out elements on its own; every read and
//! write goes through [`DomHost`], so the same controller drives a browser
//! binding, the in-memory `dom::Document` adapter, or a test double.

use core_types::{Rect, Viewport};
use std::fmt;

#[cfg(feature = "memory-host")]
mod memory;

/// An element to insert as text-content-safe markup: `text` becomes a text
/// node and is never parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub text: String,
}

pub trait DomHost {
    /// Handle to a node in this host. Handles are compared to answer
    /// "is this event for the input" style questions.
    type Node: Clone + PartialEq + fmt::Debug;

    /// First descendant of `scope` (or of the whole document when `None`)
    /// matching `selector`.
    fn query_selector(&self, scope: Option<&Self::Node>, selector: &str) -> Option<Self::Node>;

    /// Inclusive ancestor test.
    fn contains(&self, ancestor: &Self::Node, target: &Self::Node) -> bool;

    /// Nearest inclusive ancestor of `node` matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Current value of a form control.
    fn value(&self, node: &Self::Node) -> Option<String>;

    /// Set a form control's current value (not its `value` attribute).
    fn set_value(&mut self, node: &Self::Node, value: &str);

    /// Replace the inline style of `node`.
    fn set_style(&mut self, node: &Self::Node, css_text: &str);

    /// Replace all children of `node` with `children`, inserting text safely.
    fn replace_children(&mut self, node: &Self::Node, children: &[ElementSpec]);

    /// Replace all children of `node` with parsed `markup`. No sanitization.
    fn set_inner_html(&mut self, node: &Self::Node, markup: &str);

    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    fn viewport(&self) -> Viewport;
}

/// Where a widget lives: an element handle, or a selector resolved against the
/// whole document at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Root<'a, N> {
    Element(N),
    Selector(&'a str),
}

impl<'a, N> From<&'a str> for Root<'a, N> {
    fn from(selector: &'a str) -> Self {
        Root::Selector(selector)
    }
}
