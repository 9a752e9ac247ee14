//! Compound selectors: `tag`, `#id`, `.class`, `[attr]`, `[attr=value]`, and
//! comma-separated lists of those. Combinators are not supported.
use crate::types::Slot;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector(Vec<Compound>);

impl Selector {
    pub fn parse(input: &str) -> Option<Selector> {
        let list = input
            .split(',')
            .map(|part| parse_compound(part.trim()))
            .collect::<Option<Vec<_>>>()?;
        (!list.is_empty()).then_some(Selector(list))
    }

    pub(crate) fn matches(&self, slot: &Slot) -> bool {
        self.0.iter().any(|c| c.matches(slot))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_compound(mut s: &str) -> Option<Compound> {
    if s.is_empty() {
        return None;
    }
    let mut out = Compound::default();
    if s.starts_with('*') {
        s = &s[1..];
    } else {
        let (tag, rest) = take_ident(s);
        if !tag.is_empty() {
            out.tag = Some(tag.to_ascii_lowercase());
        }
        s = rest;
    }
    while let Some(ch) = s.chars().next() {
        match ch {
            '#' | '.' => {
                let (ident, rest) = take_ident(&s[1..]);
                if ident.is_empty() {
                    return None;
                }
                if ch == '#' {
                    out.id = Some(ident.to_string());
                } else {
                    out.classes.push(ident.to_string());
                }
                s = rest;
            }
            '[' => {
                let close = s.find(']')?;
                let inner = s[1..close].trim();
                let attribute = match inner.split_once('=') {
                    Some((name, value)) => {
                        let value = value.trim();
                        let value = value
                            .strip_prefix('"')
                            .and_then(|v| v.strip_suffix('"'))
                            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                            .unwrap_or(value);
                        (name.trim().to_ascii_lowercase(), Some(value.to_string()))
                    }
                    None => (inner.to_ascii_lowercase(), None),
                };
                if attribute.0.is_empty() {
                    return None;
                }
                out.attributes.push(attribute);
                s = &s[close + 1..];
            }
            _ => return None,
        }
    }
    Some(out)
}

impl Compound {
    fn matches(&self, slot: &Slot) -> bool {
        let Some(name) = slot.element_name() else {
            return false;
        };
        if self.tag.as_deref().is_some_and(|t| t != name) {
            return false;
        }
        let attrs = slot.attributes();
        let attr = |key: &str| {
            attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_deref().unwrap_or(""))
        };
        if let Some(id) = &self.id {
            if attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let class = attr("class").unwrap_or("");
            if !self
                .classes
                .iter()
                .all(|c| class.split_ascii_whitespace().any(|have| have == c))
            {
                return false;
            }
        }
        self.attributes.iter().all(|(key, want)| match (attr(key), want) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(have), Some(want)) => have == want,
        })
    }
}
