pub mod fixtures;
pub mod generate;

use html::{Fragment, Node};
use std::fmt::Write;

/// Escape control characters so failing fixture output stays on one line.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{00A0}' => out.push_str("\\u{A0}"),
            ch if ch < ' ' => {
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// One line per node, indented by depth: `<b style="…">`, `"text"`, `<!-- … -->`.
pub fn outline(fragment: &Fragment) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match node {
            Node::Element {
                name,
                attributes,
                children,
            } => {
                let mut line = format!("{indent}<{name}");
                for (k, v) in attributes {
                    match v {
                        Some(v) => {
                            let _ = write!(&mut line, " {k}=\"{}\"", escape_text(v));
                        }
                        None => {
                            let _ = write!(&mut line, " {k}");
                        }
                    }
                }
                line.push('>');
                out.push(line);
                for c in children {
                    walk(c, depth + 1, out);
                }
            }
            Node::Text { text } => out.push(format!("{indent}\"{}\"", escape_text(text))),
            Node::Comment { text } => out.push(format!("{indent}<!-- {} -->", escape_text(text))),
        }
    }

    let mut out = Vec::new();
    for node in &fragment.children {
        walk(node, 0, &mut out);
    }
    out
}

/// Human-readable first-mismatch report for two line lists.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let missing = "<missing>";
    let max = expected.len().max(actual.len());
    let line = |lines: &[String], i: usize| lines.get(i).map_or(missing, String::as_str).to_owned();

    let mut out = String::new();
    match (0..max).find(|&i| expected.get(i) != actual.get(i)) {
        Some(i) => {
            let start = i.saturating_sub(2);
            let end = (i + 3).min(max);
            let _ = writeln!(&mut out, "first mismatch at line {}:", i + 1);
            for idx in start..end {
                let marker = if idx == i { ">" } else { " " };
                let _ = writeln!(&mut out, "{marker} {:>4}  expected: {}", idx + 1, line(expected, idx));
                let _ = writeln!(&mut out, "{marker} {:>4}    actual: {}", idx + 1, line(actual, idx));
            }
        }
        None => {
            let _ = writeln!(&mut out, "no mismatch");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_indents_children() {
        let fragment = html::parse_fragment(r#"<b style="c">x<i>y</i></b><!--n-->"#);
        assert_eq!(
            outline(&fragment),
            vec![
                r#"<b style="c">"#.to_string(),
                r#"  "x""#.to_string(),
                "  <i>".to_string(),
                r#"    "y""#.to_string(),
                "<!-- n -->".to_string(),
            ]
        );
    }

    #[test]
    fn diff_lines_points_at_first_mismatch() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let actual = vec!["a".to_string(), "c".to_string(), "d".to_string()];
        let report = diff_lines(&expected, &actual);
        assert!(report.starts_with("first mismatch at line 2:"));
        assert!(report.contains("<missing>"));
    }

    #[test]
    fn escape_text_handles_controls() {
        assert_eq!(escape_text("a\nb\t\u{1}"), "a\\nb\\t\\u{01}");
    }
}
