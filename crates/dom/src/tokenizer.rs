//! Markup fragment tokenizer.
//!
//! Handles the subset produced by result renderers and test fixtures: elements with
//! quoted or bare attributes, text, comments. Tag and attribute names are ASCII
//! `[A-Za-z0-9:_-]` and are lowercased. Other `<!...>` declarations are skipped.
use crate::entities::decode_entities;
use crate::types::{Token, is_void_element};
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

fn is_name_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'_' || c == b':'
}

pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    // Slices are only cut at ASCII structural bytes, so they stay on char boundaries.
    while i < len {
        if bytes[i] != b'<' {
            let end = memchr(b'<', &bytes[i..]).map_or(len, |rel| i + rel);
            let decoded = decode_entities(&input[i..end]);
            if !decoded.is_empty() {
                out.push(Token::Text(decoded));
            }
            i = end;
            continue;
        }

        if input[i..].starts_with(COMMENT_START) {
            let body_start = i + COMMENT_START.len();
            match input[body_start..].find(COMMENT_END) {
                Some(rel) => {
                    out.push(Token::Comment(input[body_start..body_start + rel].to_string()));
                    i = body_start + rel + COMMENT_END.len();
                    continue;
                }
                None => {
                    out.push(Token::Comment(input[body_start..].to_string()));
                    break;
                }
            }
        }

        if i + 1 < len && bytes[i + 1] == b'!' {
            i = memchr(b'>', &bytes[i..]).map_or(len, |rel| i + rel + 1);
            continue;
        }

        if i + 1 < len && bytes[i + 1] == b'/' {
            let start = i + 2;
            let mut j = start;
            while j < len && is_name_char(bytes[j]) {
                j += 1;
            }
            let name = input[start..j].to_ascii_lowercase();
            i = memchr(b'>', &bytes[j..]).map_or(len, |rel| j + rel + 1);
            if !name.is_empty() {
                out.push(Token::EndTag(name));
            }
            continue;
        }

        let start = i + 1;
        let mut k = start;
        while k < len && is_name_char(bytes[k]) {
            k += 1;
        }
        if k == start {
            // A lone '<' is text.
            out.push(Token::Text("<".to_string()));
            i += 1;
            continue;
        }
        let name = input[start..k].to_ascii_lowercase();
        let mut attributes = Vec::new();
        let mut self_closing = false;

        let skip_whitespace = |k: &mut usize| {
            while *k < len && bytes[*k].is_ascii_whitespace() {
                *k += 1;
            }
        };

        loop {
            skip_whitespace(&mut k);
            if k >= len {
                break;
            }
            if bytes[k] == b'>' {
                k += 1;
                break;
            }
            if bytes[k] == b'/' {
                if k + 1 < len && bytes[k + 1] == b'>' {
                    self_closing = true;
                    k += 2;
                    break;
                }
                k += 1;
                continue;
            }
            let name_start = k;
            while k < len && is_name_char(bytes[k]) {
                k += 1;
            }
            if name_start == k {
                k += 1;
                continue;
            }
            let attribute_name = input[name_start..k].to_ascii_lowercase();

            skip_whitespace(&mut k);
            let value = if k < len && bytes[k] == b'=' {
                k += 1;
                skip_whitespace(&mut k);
                if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
                    let quote = bytes[k];
                    k += 1;
                    let vstart = k;
                    while k < len && bytes[k] != quote {
                        k += 1;
                    }
                    let raw = &input[vstart..k];
                    if k < len {
                        k += 1;
                    }
                    Some(decode_entities(raw))
                } else {
                    let vstart = k;
                    while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
                        k += 1;
                    }
                    Some(decode_entities(&input[vstart..k]))
                }
            } else {
                None
            };
            attributes.push((attribute_name, value));
        }

        if is_void_element(&name) {
            self_closing = true;
        }
        out.push(Token::StartTag {
            name,
            attributes,
            self_closing,
        });
        i = k;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(name: &str, attributes: &[(&str, Option<&str>)], self_closing: bool) -> Token {
        Token::StartTag {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect(),
            self_closing,
        }
    }

    #[test]
    fn tokenizes_elements_text_and_attributes() {
        let tokens = tokenize(r#"<LI id='a' data-x="1 &amp; 2" hidden>Paris</li>"#);
        assert_eq!(
            tokens,
            vec![
                start(
                    "li",
                    &[("id", Some("a")), ("data-x", Some("1 & 2")), ("hidden", None)],
                    false
                ),
                Token::Text("Paris".to_string()),
                Token::EndTag("li".to_string()),
            ]
        );
    }

    #[test]
    fn void_elements_self_close() {
        let tokens = tokenize("<input type=text><br/>");
        assert_eq!(
            tokens,
            vec![
                start("input", &[("type", Some("text"))], true),
                start("br", &[], true),
            ]
        );
    }

    #[test]
    fn comments_and_declarations() {
        let tokens = tokenize("<!doctype html><!-- note -->x");
        assert_eq!(
            tokens,
            vec![
                Token::Comment(" note ".to_string()),
                Token::Text("x".to_string()),
            ]
        );
    }

    #[test]
    fn stray_angle_bracket_is_text() {
        let tokens = tokenize("a < b");
        assert_eq!(
            tokens,
            vec![
                Token::Text("a ".to_string()),
                Token::Text("<".to_string()),
                Token::Text(" b".to_string()),
            ]
        );
    }
}
