use crate::tokenizer::is_void_element;
use crate::types::{Fragment, Node};

/// Escape plain text so it renders literally when inserted as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text, false);
    out
}

fn push_escaped(out: &mut String, text: &str, in_attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '"' if in_attribute => out.push_str("&quot;"),
            '<' if !in_attribute => out.push_str("&lt;"),
            '>' if !in_attribute => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Render a fragment back to markup.
///
/// Output follows `innerHTML` conventions: attribute values are always double
/// quoted, valueless attributes are written bare and void elements get no end tag.
pub fn serialize(fragment: &Fragment) -> String {
    let mut out = String::new();
    for node in &fragment.children {
        serialize_node(node, &mut out);
    }
    out
}

enum Step<'a> {
    Open(&'a Node),
    Close(&'a str),
}

pub fn serialize_node(node: &Node, out: &mut String) {
    let mut steps = vec![Step::Open(node)];
    while let Some(step) = steps.pop() {
        let node = match step {
            Step::Open(node) => node,
            Step::Close(name) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
                continue;
            }
        };
        match node {
            Node::Text { text } => push_escaped(out, text, false),
            Node::Comment { text } => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            Node::Element {
                name,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(name);
                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    if let Some(value) = value {
                        out.push_str("=\"");
                        push_escaped(out, value, true);
                        out.push('"');
                    }
                }
                out.push('>');
                if is_void_element(name) {
                    continue;
                }
                steps.push(Step::Close(name.as_str()));
                steps.extend(children.iter().rev().map(Step::Open));
            }
        }
    }
}
