//! Shallow markup tokenizer for editor content and pasted snippets.
//!
//! Tag and attribute names are ASCII `[A-Za-z0-9:_-]` and are lowercased.
//! `script` and `style` bodies are scanned as raw text up to their close tag.
//!
//! Known limitations:
//! - No HTML5 parse-error recovery; a `<` that does not start a tag name is text.
//! - Raw-text close-tag scanning accepts only ASCII whitespace before `>`.
use crate::entities::decode_entities;
use crate::types::{Attribute, Token};
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";
const SCRIPT_CLOSE_TAG: &[u8] = b"</script";
const STYLE_CLOSE_TAG: &[u8] = b"</style";

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

pub(crate) fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// Matches only start at ASCII `<`, which never occurs inside a UTF-8 sequence.
fn find_rawtext_close_tag(haystack: &str, close_tag: &[u8]) -> Option<(usize, usize)> {
    let bytes = haystack.as_bytes();
    let n = close_tag.len();
    let mut i = 0;
    while i + n <= bytes.len() {
        i += memchr(b'<', &bytes[i..])?;
        if starts_with_ignore_ascii_case_at(bytes, i, close_tag) {
            let mut k = i + n;
            while k < bytes.len() && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < bytes.len() && bytes[k] == b'>' {
                return Some((i, k + 1));
            }
        }
        i += 1;
    }
    None
}

/// Tokenize `input` into a flat token list.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    // Slices are only cut at ASCII structural bytes, so every endpoint is a char boundary.
    while i < len {
        if bytes[i] != b'<' {
            let start = i;
            i = memchr(b'<', &bytes[i..]).map_or(len, |rel| i + rel);
            push_text(&mut out, &input[start..i]);
            continue;
        }

        if input[i..].starts_with(COMMENT_START) {
            let body_start = i + COMMENT_START.len();
            match input[body_start..].find(COMMENT_END) {
                Some(end) => {
                    out.push(Token::Comment(input[body_start..body_start + end].to_string()));
                    i = body_start + end + COMMENT_END.len();
                    continue;
                }
                None => {
                    out.push(Token::Comment(input[body_start..].to_string()));
                    break;
                }
            }
        }

        if starts_with_ignore_ascii_case_at(bytes, i, b"<!doctype") {
            let rest = &input[i + 2..];
            let Some(end) = rest.find('>') else {
                break;
            };
            out.push(Token::Doctype(rest[..end].trim().to_string()));
            i += 2 + end + 1;
            continue;
        }

        if i + 1 < len && bytes[i + 1] == b'/' {
            let start = i + 2;
            let mut j = start;
            while j < len && is_name_byte(bytes[j]) {
                j += 1;
            }
            let name = input[start..j].to_ascii_lowercase();
            j = memchr(b'>', &bytes[j..]).map_or(len, |rel| j + rel + 1);
            if !name.is_empty() {
                out.push(Token::EndTag(name));
            }
            i = j;
            continue;
        }

        let start = i + 1;
        let mut j = start;
        while j < len && is_name_byte(bytes[j]) {
            j += 1;
        }
        if j == start {
            // `<` followed by something that is not a tag name: literal text.
            push_text(&mut out, "<");
            i += 1;
            continue;
        }

        let name = input[start..j].to_ascii_lowercase();
        let (attributes, mut self_closing, content_start) = scan_attributes(input, j);
        if is_void_element(&name) {
            self_closing = true;
        }
        let raw_close = match name.as_str() {
            "script" if !self_closing => Some(SCRIPT_CLOSE_TAG),
            "style" if !self_closing => Some(STYLE_CLOSE_TAG),
            _ => None,
        };
        out.push(Token::StartTag {
            name: name.clone(),
            attributes,
            self_closing,
        });

        let Some(close_tag) = raw_close else {
            i = content_start;
            continue;
        };
        let body = &input[content_start..];
        match find_rawtext_close_tag(body, close_tag) {
            Some((rel_start, rel_end)) => {
                if rel_start > 0 {
                    out.push(Token::Text(body[..rel_start].to_string()));
                }
                out.push(Token::EndTag(name));
                i = content_start + rel_end;
            }
            None => {
                // Missing close tag: the rest of the input is raw text.
                if !body.is_empty() {
                    out.push(Token::Text(body.to_string()));
                }
                out.push(Token::EndTag(name));
                break;
            }
        }
    }
    out
}

fn push_text(out: &mut Vec<Token>, raw: &str) {
    let decoded = decode_entities(raw);
    if decoded.is_empty() {
        return;
    }
    // Keep text tokens coalesced so `a<b` yields a single run.
    if let Some(Token::Text(prev)) = out.last_mut() {
        prev.push_str(&decoded);
    } else {
        out.push(Token::Text(decoded));
    }
}

/// Scans the attribute list starting at `k`; returns the attributes, whether the
/// tag was written self-closing, and the offset just past `>`.
fn scan_attributes(input: &str, mut k: usize) -> (Vec<Attribute>, bool, usize) {
    let bytes = input.as_bytes();
    let len = bytes.len();
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
        match bytes[k] {
            b'>' => {
                k += 1;
                break;
            }
            b'/' if k + 1 < len && bytes[k + 1] == b'>' => {
                self_closing = true;
                k += 2;
                break;
            }
            b'/' => {
                k += 1;
                continue;
            }
            _ => {}
        }

        let name_start = k;
        while k < len && is_name_byte(bytes[k]) {
            k += 1;
        }
        if name_start == k {
            // Skip one full char so we never land inside a multi-byte sequence.
            k += input[k..].chars().next().map_or(1, char::len_utf8);
            continue;
        }
        let attribute_name = input[name_start..k].to_ascii_lowercase();

        skip_whitespace(&mut k);
        if k >= len || bytes[k] != b'=' {
            attributes.push((attribute_name, None));
            continue;
        }
        k += 1;
        skip_whitespace(&mut k);

        let value = if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
            let quote = bytes[k];
            let vstart = k + 1;
            let vend = memchr(quote, &bytes[vstart..]).map_or(len, |rel| vstart + rel);
            k = (vend + 1).min(len);
            decode_entities(&input[vstart..vend])
        } else {
            let vstart = k;
            while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
                if bytes[k] == b'/' && k + 1 < len && bytes[k + 1] == b'>' {
                    break;
                }
                k += 1;
            }
            decode_entities(&input[vstart..k])
        };
        attributes.push((attribute_name, Some(value)));
    }

    (attributes, self_closing, k)
}
