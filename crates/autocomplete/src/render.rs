//! Result-list rendering.
//!
//! The attribute escaper here matches `dom::escape_attribute`. It is kept local
//! because `dom` is only a dependency under the `memory-host` feature.

use crate::host::ElementSpec;
use std::fmt;

/// Per-option accessibility and styling attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultProps {
    pub id: String,
    pub class: String,
    pub index: usize,
    pub selected: bool,
}

impl ResultProps {
    pub fn new(base_class: &str, index: usize, selected: bool) -> Self {
        Self {
            id: option_id(base_class, index),
            class: format!("{base_class}-result"),
            index,
            selected,
        }
    }

    /// Attributes in markup order. `aria-selected` is present only when selected.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("id", self.id.clone()),
            ("class", self.class.clone()),
            ("data-result-index", self.index.to_string()),
            ("role", "option".to_string()),
        ];
        if self.selected {
            out.push(("aria-selected", "true".to_string()));
        }
        out
    }
}

/// The attribute string, ready to splice into a start tag.
impl fmt::Display for ResultProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.attributes().iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}=\"{}\"", escape_attribute(value))?;
        }
        Ok(())
    }
}

pub fn option_id(base_class: &str, index: usize) -> String {
    format!("{base_class}-result-{index}")
}

/// Trusted raw markup produced by a custom renderer. It is inserted without
/// escaping or sanitization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Markup {
    fn from(s: String) -> Self {
        Self(s)
    }
}

pub fn result_props(base_class: &str, len: usize, selected: Option<usize>) -> Vec<ResultProps> {
    (0..len)
        .map(|i| ResultProps::new(base_class, i, selected == Some(i)))
        .collect()
}

/// The default list: one `li` per result carrying its props and display text.
pub fn default_options<R>(
    results: &[R],
    props: &[ResultProps],
    get_result_value: &dyn Fn(&R) -> String,
) -> Vec<ElementSpec> {
    results
        .iter()
        .zip(props)
        .map(|(result, props)| ElementSpec {
            tag: "li",
            attributes: props.attributes(),
            text: get_result_value(result),
        })
        .collect()
}

fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_option_carries_aria_selected_only() {
        let props = result_props("autocomplete", 3, Some(1));
        assert_eq!(props[1].attributes().last(), Some(&("aria-selected", "true".to_string())));
        assert!(props[0].attributes().iter().all(|(k, _)| *k != "aria-selected"));
        assert!(props[2].attributes().iter().all(|(k, _)| *k != "aria-selected"));
    }

    #[test]
    fn no_selection_marks_nothing() {
        let props = result_props("autocomplete", 2, None);
        assert!(props.iter().all(|p| !p.selected));
    }

    #[test]
    fn attribute_string_is_exact() {
        let p = ResultProps::new("city", 4, true);
        assert_eq!(
            p.to_string(),
            r#"id="city-result-4" class="city-result" data-result-index="4" role="option" aria-selected="true""#
        );
        let p = ResultProps::new("a\"b", 0, false);
        assert_eq!(
            p.to_string(),
            r#"id="a&quot;b-result-0" class="a&quot;b-result" data-result-index="0" role="option""#
        );
    }

    #[test]
    fn default_options_use_display_value() {
        let results = ["Paris", "Lyon"];
        let props = result_props("autocomplete", 2, None);
        let specs = default_options(&results, &props, &|r: &&str| r.to_uppercase());
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].tag, "li");
        assert_eq!(specs[1].text, "LYON");
        assert_eq!(specs[1].attributes[0], ("id", "autocomplete-result-1".to_string()));
    }
}
