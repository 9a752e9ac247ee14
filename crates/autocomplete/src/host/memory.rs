use super::{DomHost, ElementSpec};
use core_types::{Rect, Viewport};
use dom::{Document, Id};

impl DomHost for Document {
    type Node = Id;

    fn query_selector(&self, scope: Option<&Id>, selector: &str) -> Option<Id> {
        Document::query_selector(self, scope.copied().unwrap_or(self.root()), selector)
    }

    fn contains(&self, ancestor: &Id, target: &Id) -> bool {
        Document::contains(self, *ancestor, *target)
    }

    fn closest(&self, node: &Id, selector: &str) -> Option<Id> {
        Document::closest(self, *node, selector)
    }

    fn attribute(&self, node: &Id, name: &str) -> Option<String> {
        Document::attribute(self, *node, name).map(str::to_string)
    }

    fn set_attribute(&mut self, node: &Id, name: &str, value: &str) {
        Document::set_attribute(self, *node, name, value);
    }

    fn remove_attribute(&mut self, node: &Id, name: &str) {
        Document::remove_attribute(self, *node, name);
    }

    fn value(&self, node: &Id) -> Option<String> {
        Document::value(self, *node).map(str::to_string)
    }

    fn set_value(&mut self, node: &Id, value: &str) {
        Document::set_value(self, *node, value);
    }

    fn set_style(&mut self, node: &Id, css_text: &str) {
        self.set_style_text(*node, css_text);
    }

    fn replace_children(&mut self, node: &Id, children: &[ElementSpec]) {
        self.remove_children(*node);
        for spec in children {
            let attributes = spec
                .attributes
                .iter()
                .map(|(k, v)| (k.to_string(), Some(v.clone())))
                .collect();
            let Some(el) = self.create_element(spec.tag, attributes) else {
                return;
            };
            if !spec.text.is_empty() {
                let Some(text) = self.create_text(&spec.text) else {
                    return;
                };
                self.append_child(el, text);
            }
            self.append_child(*node, el);
        }
    }

    fn set_inner_html(&mut self, node: &Id, markup: &str) {
        self.remove_children(*node);
        self.append_markup(*node, markup);
    }

    fn bounding_rect(&self, node: &Id) -> Rect {
        self.rect(*node)
    }

    fn viewport(&self) -> Viewport {
        Document::viewport(self)
    }
}
