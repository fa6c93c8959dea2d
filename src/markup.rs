//! Conversion between sanitized markup and the buffer's formatted text.
//!
//! Reading understands the allow-listed inline tags, `<br>`, block `<div>`s
//! and the inline `style` declarations editing surfaces emit for formatting.
//! Writing produces canonical markup that reads back to the same segments.

use html::{Fragment, Node, escape_html};
use input_core::{FormatSet, InlineFormat};

/// Flatten a fragment into `(text, formats)` pieces in document order.
pub fn fragment_to_segments(fragment: &Fragment) -> Vec<(String, FormatSet)> {
    let mut out = Vec::new();
    let mut stack: Vec<(&Node, FormatSet)> = fragment
        .children
        .iter()
        .rev()
        .map(|node| (node, FormatSet::empty()))
        .collect();
    while let Some((node, formats)) = stack.pop() {
        match node {
            Node::Text { text } => push(&mut out, text, formats),
            Node::Comment { .. } => {}
            Node::Element { name, children, .. } => {
                match name.as_str() {
                    "br" => {
                        push(&mut out, "\n", formats);
                        continue;
                    }
                    // A block starts on a fresh line unless it opens the content.
                    "div" if !ends_at_line_start(&out) => push(&mut out, "\n", formats),
                    _ => {}
                }
                let formats = element_formats(name, node.attribute("style"), formats);
                stack.extend(children.iter().rev().map(|child| (child, formats)));
            }
        }
    }
    out
}

fn push(out: &mut Vec<(String, FormatSet)>, text: &str, formats: FormatSet) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some((prev, prev_formats)) if *prev_formats == formats => prev.push_str(text),
        _ => out.push((text.to_string(), formats)),
    }
}

fn ends_at_line_start(out: &[(String, FormatSet)]) -> bool {
    out.last().is_none_or(|(text, _)| text.ends_with('\n'))
}

fn element_formats(name: &str, style: Option<&str>, mut formats: FormatSet) -> FormatSet {
    match name {
        "b" | "strong" => formats.insert(InlineFormat::Bold),
        "i" | "em" => formats.insert(InlineFormat::Italic),
        "u" => formats.insert(InlineFormat::Underline),
        "s" | "strike" => formats.insert(InlineFormat::Strikethrough),
        _ => {}
    }
    if let Some(style) = style {
        for format in style_formats(style) {
            formats.insert(format);
        }
    }
    formats
}

/// Inline formats expressed by a `style` attribute value.
fn style_formats(style: &str) -> impl Iterator<Item = InlineFormat> + '_ {
    style.split(';').flat_map(|declaration| {
        let (property, value) = declaration.split_once(':').unwrap_or((declaration, ""));
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();
        let mut found = Vec::new();
        match property.as_str() {
            "font-weight" => {
                let heavy = value.parse::<u16>().is_ok_and(|w| w >= 600);
                if heavy || value == "bold" || value == "bolder" {
                    found.push(InlineFormat::Bold);
                }
            }
            "font-style" if value == "italic" || value == "oblique" => {
                found.push(InlineFormat::Italic);
            }
            "text-decoration" | "text-decoration-line" => {
                for word in value.split_whitespace() {
                    match word {
                        "underline" => found.push(InlineFormat::Underline),
                        "line-through" => found.push(InlineFormat::Strikethrough),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        found
    })
}

const TAGS: [(InlineFormat, &str); 4] = [
    (InlineFormat::Bold, "b"),
    (InlineFormat::Italic, "i"),
    (InlineFormat::Underline, "u"),
    (InlineFormat::Strikethrough, "s"),
];

/// Render formatted pieces as markup: one tag nest per piece, `<br>` for
/// newlines, text escaped.
pub fn segments_to_markup<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = (&'a str, FormatSet)>,
{
    let mut out = String::new();
    for (text, formats) in segments {
        let tags: Vec<&str> = TAGS
            .iter()
            .filter(|(format, _)| formats.contains(*format))
            .map(|(_, tag)| *tag)
            .collect();
        for tag in &tags {
            out.push('<');
            out.push_str(tag);
            out.push('>');
        }
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            out.push_str(&escape_html(first));
        }
        for line in lines {
            out.push_str("<br>");
            out.push_str(&escape_html(line));
        }
        for tag in tags.iter().rev() {
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
    out
}
