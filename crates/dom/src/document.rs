use crate::entities::{escape_attribute, escape_text};
use crate::selector::Selector;
use crate::tokenizer::tokenize;
use crate::types::{Id, NodeId, NodeKind, Slot, Token, is_void_element};
use core_types::{Rect, Viewport};
use std::collections::HashMap;

/// A mutable document tree with per-node layout boxes supplied by the embedder.
///
/// Nodes live in an arena keyed by [`Id`]; removed subtrees free their ids for good
/// (ids are never reused). Operations on an unknown id are logged and ignored.
#[derive(Debug)]
pub struct Document {
    nodes: HashMap<Id, Slot>,
    next_id: NodeId,
    values: HashMap<Id, String>,
    rects: HashMap<Id, Rect>,
    viewport: Viewport,
}

impl Document {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(Id::DOCUMENT, Slot::new(NodeKind::Document));
        Self {
            nodes,
            next_id: 1,
            values: HashMap::new(),
            rects: HashMap::new(),
            viewport: Viewport::default(),
        }
    }

    /// Build a document whose children are parsed from `markup`.
    pub fn parse(markup: &str) -> Self {
        let mut doc = Self::new();
        doc.append_markup(Id::DOCUMENT, markup);
        doc
    }

    pub fn root(&self) -> Id {
        Id::DOCUMENT
    }

    pub fn is_live(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// `None` once the id space is exhausted; ids are never handed out twice.
    fn alloc(&mut self, kind: NodeKind) -> Option<Id> {
        let id = Id(self.next_id);
        let Some(next) = self.next_id.checked_add(1) else {
            log::warn!(target: "dom.document", "node ids exhausted, refusing allocation");
            return None;
        };
        self.next_id = next;
        self.nodes.insert(id, Slot::new(kind));
        Some(id)
    }

    fn slot(&self, id: Id) -> Option<&Slot> {
        let slot = self.nodes.get(&id);
        if slot.is_none() {
            log::warn!(target: "dom.document", "unknown node {id:?}");
        }
        slot
    }

    fn slot_mut(&mut self, id: Id) -> Option<&mut Slot> {
        let slot = self.nodes.get_mut(&id);
        if slot.is_none() {
            log::warn!(target: "dom.document", "unknown node {id:?}");
        }
        slot
    }

    // ---------------------------------------------------------------------
    // Tree construction
    // ---------------------------------------------------------------------

    pub fn create_element(
        &mut self,
        name: &str,
        attributes: Vec<(String, Option<String>)>,
    ) -> Option<Id> {
        self.alloc(NodeKind::Element {
            name: name.to_ascii_lowercase(),
            attributes,
            style: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> Option<Id> {
        self.alloc(NodeKind::Text {
            text: text.to_string(),
        })
    }

    /// Append `child` to `parent`, detaching it from any previous parent first.
    pub fn append_child(&mut self, parent: Id, child: Id) {
        if parent == child || self.contains(child, parent) {
            log::warn!(target: "dom.document", "refusing cyclic append {child:?} -> {parent:?}");
            return;
        }
        if !self.is_live(parent) || !self.is_live(child) {
            log::warn!(target: "dom.document", "append with unknown node {parent:?}/{child:?}");
            return;
        }
        if let Some(old) = self.nodes.get(&child).and_then(|s| s.parent) {
            if let Some(old_slot) = self.nodes.get_mut(&old) {
                old_slot.children.retain(|c| *c != child);
            }
        }
        if let Some(slot) = self.nodes.get_mut(&child) {
            slot.parent = Some(parent);
        }
        if let Some(slot) = self.nodes.get_mut(&parent) {
            slot.children.push(child);
        }
    }

    /// Attach a node that was just allocated and has never been in the tree.
    /// Such a node cannot be an ancestor of `parent`, so no cycle check is needed.
    fn attach_new(&mut self, parent: Id, child: Id) {
        debug_assert!(self.parent(child).is_none() && self.children(child).is_empty());
        if let Some(slot) = self.nodes.get_mut(&child) {
            slot.parent = Some(parent);
        }
        if let Some(slot) = self.nodes.get_mut(&parent) {
            slot.children.push(child);
        }
    }

    /// Drop every child subtree of `parent`.
    pub fn remove_children(&mut self, parent: Id) {
        let Some(slot) = self.slot_mut(parent) else {
            return;
        };
        let mut stack = std::mem::take(&mut slot.children);
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.nodes.remove(&id) {
                stack.extend(removed.children);
            }
            self.values.remove(&id);
            self.rects.remove(&id);
        }
    }

    /// Parse `markup` and append the resulting nodes to `parent`.
    ///
    /// End tags close the nearest open element of the same name; unmatched end
    /// tags close everything opened by this call.
    pub fn append_markup(&mut self, parent: Id, markup: &str) -> Vec<Id> {
        if !self.is_live(parent) {
            log::warn!(target: "dom.document", "append_markup into unknown node {parent:?}");
            return Vec::new();
        }
        let mut top_level = Vec::new();
        let mut open: Vec<(Id, String)> = Vec::new();
        for token in tokenize(markup) {
            let at = open.last().map_or(parent, |(id, _)| *id);
            let (id, open_name) = match token {
                Token::Text(text) => (self.create_text(&text), None),
                Token::Comment(text) => (self.alloc(NodeKind::Comment { text }), None),
                Token::StartTag {
                    name,
                    attributes,
                    self_closing,
                } => {
                    let id = self.create_element(&name, attributes);
                    (id, (!self_closing).then_some(name))
                }
                Token::EndTag(name) => {
                    while let Some((_, open_name)) = open.pop() {
                        if open_name == name {
                            break;
                        }
                    }
                    continue;
                }
            };
            let Some(id) = id else {
                break;
            };
            self.attach_new(at, id);
            if at == parent {
                top_level.push(id);
            }
            if let Some(name) = open_name {
                open.push((id, name));
            }
        }
        top_level
    }

    // ---------------------------------------------------------------------
    // Structure queries
    // ---------------------------------------------------------------------

    pub fn parent(&self, id: Id) -> Option<Id> {
        self.nodes.get(&id).and_then(|s| s.parent)
    }

    pub fn children(&self, id: Id) -> &[Id] {
        self.nodes
            .get(&id)
            .map(|s| s.children.as_slice())
            .unwrap_or_default()
    }

    pub fn kind(&self, id: Id) -> Option<&NodeKind> {
        self.slot(id).map(|s| &s.kind)
    }

    pub fn element_name(&self, id: Id) -> Option<&str> {
        self.nodes.get(&id).and_then(Slot::element_name)
    }

    /// Inclusive: a node contains itself.
    pub fn contains(&self, ancestor: Id, target: Id) -> bool {
        let mut cur = Some(target);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent(id);
        }
        false
    }

    /// Descendant elements of `scope` in document order.
    fn descendants(&self, scope: Id) -> Vec<Id> {
        let mut out = Vec::new();
        let mut stack: Vec<Id> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    fn parse_selector(selector: &str) -> Option<Selector> {
        let parsed = Selector::parse(selector);
        if parsed.is_none() {
            log::warn!(target: "dom.document", "unsupported selector {selector:?}");
        }
        parsed
    }

    pub fn query_selector(&self, scope: Id, selector: &str) -> Option<Id> {
        let selector = Self::parse_selector(selector)?;
        self.descendants(scope)
            .into_iter()
            .find(|id| self.nodes.get(id).is_some_and(|s| selector.matches(s)))
    }

    pub fn query_selector_all(&self, scope: Id, selector: &str) -> Vec<Id> {
        let Some(selector) = Self::parse_selector(selector) else {
            return Vec::new();
        };
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.nodes.get(id).is_some_and(|s| selector.matches(s)))
            .collect()
    }

    pub fn closest(&self, id: Id, selector: &str) -> Option<Id> {
        let selector = Self::parse_selector(selector)?;
        let mut cur = Some(id);
        while let Some(node) = cur {
            if self.nodes.get(&node).is_some_and(|s| selector.matches(s)) {
                return Some(node);
            }
            cur = self.parent(node);
        }
        None
    }

    // ---------------------------------------------------------------------
    // Attributes, values, style
    // ---------------------------------------------------------------------

    pub fn attribute(&self, id: Id, name: &str) -> Option<&str> {
        self.slot(id)?
            .attributes()
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_attribute(&self, id: Id, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    pub fn set_attribute(&mut self, id: Id, name: &str, value: &str) {
        let Some(slot) = self.slot_mut(id) else {
            return;
        };
        let NodeKind::Element { attributes, .. } = &mut slot.kind else {
            log::warn!(target: "dom.document", "set_attribute on non-element {id:?}");
            return;
        };
        let name = name.to_ascii_lowercase();
        match attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = Some(value.to_string()),
            None => attributes.push((name, Some(value.to_string()))),
        }
    }

    pub fn remove_attribute(&mut self, id: Id, name: &str) {
        if let Some(Slot {
            kind: NodeKind::Element { attributes, .. },
            ..
        }) = self.slot_mut(id)
        {
            attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        }
    }

    /// Current value of a form control, falling back to its `value` attribute.
    pub fn value(&self, id: Id) -> Option<&str> {
        self.values
            .get(&id)
            .map(String::as_str)
            .or_else(|| self.attribute(id, "value"))
    }

    pub fn set_value(&mut self, id: Id, value: &str) {
        if self.slot(id).is_some() {
            self.values.insert(id, value.to_string());
        }
    }

    /// Replace the inline style with the declarations in `css_text`.
    pub fn set_style_text(&mut self, id: Id, css_text: &str) {
        let declarations = parse_declarations(css_text);
        let rendered = declarations
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(Slot {
            kind: NodeKind::Element { style, .. },
            ..
        }) = self.slot_mut(id)
        {
            *style = declarations;
        }
        self.set_attribute(id, "style", &rendered);
    }

    pub fn style(&self, id: Id, property: &str) -> Option<&str> {
        match &self.slot(id)?.kind {
            NodeKind::Element { style, .. } => style
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(property))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    pub fn set_rect(&mut self, id: Id, rect: Rect) {
        self.rects.insert(id, rect);
    }

    /// Layout box of `id`; nodes never laid out report an empty box at the origin.
    pub fn rect(&self, id: Id) -> Rect {
        self.rects.get(&id).copied().unwrap_or_default()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ---------------------------------------------------------------------
    // Serialization
    // ---------------------------------------------------------------------

    pub fn text_content(&self, id: Id) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: Id, out: &mut String) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            match self.nodes.get(&id).map(|s| &s.kind) {
                Some(NodeKind::Text { text }) => out.push_str(text),
                Some(NodeKind::Element { .. } | NodeKind::Document) => {
                    stack.extend(self.children(id).iter().rev().copied());
                }
                _ => {}
            }
        }
    }

    pub fn inner_html(&self, id: Id) -> String {
        let mut out = String::new();
        for c in self.children(id) {
            self.write_html(*c, &mut out);
        }
        out
    }

    pub fn outer_html(&self, id: Id) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: Id, out: &mut String) {
        enum Frame<'a> {
            Enter(Id),
            Close(&'a str),
        }

        let mut stack = vec![Frame::Enter(id)];
        while let Some(frame) = stack.pop() {
            let id = match frame {
                Frame::Enter(id) => id,
                Frame::Close(name) => {
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                    continue;
                }
            };
            let Some(slot) = self.nodes.get(&id) else {
                continue;
            };
            match &slot.kind {
                NodeKind::Document => {
                    stack.extend(slot.children.iter().rev().map(|c| Frame::Enter(*c)));
                }
                NodeKind::Text { text } => out.push_str(&escape_text(text)),
                NodeKind::Comment { text } => {
                    out.push_str("<!--");
                    out.push_str(text);
                    out.push_str("-->");
                }
                NodeKind::Element {
                    name, attributes, ..
                } => {
                    out.push('<');
                    out.push_str(name);
                    for (k, v) in attributes {
                        out.push(' ');
                        out.push_str(k);
                        if let Some(v) = v {
                            out.push_str("=\"");
                            out.push_str(&escape_attribute(v));
                            out.push('"');
                        }
                    }
                    out.push('>');
                    if is_void_element(name) {
                        continue;
                    }
                    stack.push(Frame::Close(name));
                    stack.extend(slot.children.iter().rev().map(|c| Frame::Enter(*c)));
                }
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_declarations(css_text: &str) -> Vec<(String, String)> {
    css_text
        .split(';')
        .filter_map(|decl| {
            let (k, v) = decl.split_once(':')?;
            let (k, v) = (k.trim(), v.trim());
            (!k.is_empty() && !v.is_empty()).then(|| (k.to_ascii_lowercase(), v.to_string()))
        })
        .collect()
}
