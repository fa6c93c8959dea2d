//! Allow-list filter over a parsed fragment.
//!
//! The filter never deletes content: an element whose tag is not allowed is
//! replaced by its (filtered) children at the same position. Allowed elements
//! lose every attribute outside the policy's attribute list.

use crate::serialize::serialize;
use crate::tokenizer::is_void_element;
use crate::types::Attribute;
use crate::{Fragment, Node, parse_fragment};

/// Inline formatting tags the editing surface accepts.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "b", "strong", "i", "em", "u", "s", "strike", "br", "div", "span",
];

/// Attributes allowed on kept elements.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] = &["style"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanitizePolicy {
    allowed_tags: Vec<String>,
    allowed_attributes: Vec<String>,
}

impl SanitizePolicy {
    pub fn new<T, A>(tags: T, attributes: A) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            allowed_tags: tags
                .into_iter()
                .map(|t| t.as_ref().to_ascii_lowercase())
                .collect(),
            allowed_attributes: attributes
                .into_iter()
                .map(|a| a.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn allows_tag(&self, name: &str) -> bool {
        self.allowed_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(name))
    }

    pub fn allows_attribute(&self, name: &str) -> bool {
        self.allowed_attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(name))
    }

    pub fn allowed_tags(&self) -> impl Iterator<Item = &str> {
        self.allowed_tags.iter().map(String::as_str)
    }
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_TAGS, DEFAULT_ALLOWED_ATTRIBUTES)
    }
}

/// What a sanitize pass removed. Purely informational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    pub unwrapped_elements: usize,
    pub stripped_attributes: usize,
    pub dropped_comments: usize,
}

impl SanitizeReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

pub fn sanitize(fragment: &Fragment, policy: &SanitizePolicy) -> Fragment {
    sanitize_with_report(fragment, policy).0
}

pub fn sanitize_with_report(
    fragment: &Fragment,
    policy: &SanitizePolicy,
) -> (Fragment, SanitizeReport) {
    let mut report = SanitizeReport::default();
    let children = reduce(&fragment.children, policy, &mut report);
    if !report.is_clean() {
        log::debug!(
            target: "html.sanitize",
            "unwrapped {} element(s), stripped {} attribute(s), dropped {} comment(s)",
            report.unwrapped_elements,
            report.stripped_attributes,
            report.dropped_comments
        );
    }
    (Fragment::new(children), report)
}

/// Parse, sanitize with the default policy and serialize.
pub fn sanitize_markup(markup: &str) -> String {
    serialize(&sanitize(&parse_fragment(markup), &SanitizePolicy::default()))
}

/// A kept element whose children are still being reduced.
struct OpenElement {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

enum Step<'a> {
    Visit(&'a Node),
    Close,
}

/// Pre-order walk over an explicit stack, so nesting depth is bounded by the
/// heap rather than the call stack.
fn reduce(nodes: &[Node], policy: &SanitizePolicy, report: &mut SanitizeReport) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut open: Vec<OpenElement> = Vec::new();
    let mut steps: Vec<Step<'_>> = nodes.iter().rev().map(Step::Visit).collect();

    while let Some(step) = steps.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::Close => {
                if let Some(element) = open.pop() {
                    current(&mut open, &mut out).push(Node::Element {
                        name: element.name,
                        attributes: element.attributes,
                        children: element.children,
                    });
                }
                continue;
            }
        };

        match node {
            Node::Text { text } => push_text(current(&mut open, &mut out), text),
            Node::Comment { .. } => report.dropped_comments += 1,
            Node::Element {
                name,
                attributes,
                children,
            } => {
                if !policy.allows_tag(name) {
                    log::trace!(target: "html.sanitize", "unwrapping <{name}>");
                    report.unwrapped_elements += 1;
                    steps.extend(children.iter().rev().map(Step::Visit));
                    continue;
                }

                let kept = keep_attributes(name, attributes, policy, report);
                let name = name.to_ascii_lowercase();
                if is_void_element(&name) {
                    // A void element cannot carry content; its children follow it.
                    current(&mut open, &mut out).push(Node::Element {
                        name,
                        attributes: kept,
                        children: Vec::new(),
                    });
                } else {
                    open.push(OpenElement {
                        name,
                        attributes: kept,
                        children: Vec::with_capacity(children.len()),
                    });
                    steps.push(Step::Close);
                }
                steps.extend(children.iter().rev().map(Step::Visit));
            }
        }
    }

    debug_assert!(open.is_empty(), "every kept element is closed");
    out
}

fn current<'a>(open: &'a mut [OpenElement], out: &'a mut Vec<Node>) -> &'a mut Vec<Node> {
    match open.last_mut() {
        Some(element) => &mut element.children,
        None => out,
    }
}

fn keep_attributes(
    name: &str,
    attributes: &[Attribute],
    policy: &SanitizePolicy,
    report: &mut SanitizeReport,
) -> Vec<Attribute> {
    let mut kept: Vec<Attribute> = Vec::new();
    for (key, value) in attributes {
        let duplicate = kept.iter().any(|(k, _)| k.eq_ignore_ascii_case(key));
        if policy.allows_attribute(key) && !duplicate {
            kept.push((key.to_ascii_lowercase(), value.clone()));
        } else {
            log::trace!(target: "html.sanitize", "stripping {key} from <{name}>");
            report.stripped_attributes += 1;
        }
    }
    kept
}

// Splicing can leave text nodes side by side; merge them the way a re-parse would.
fn push_text(out: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(Node::Text { text: prev }) => prev.push_str(text),
        _ => out.push(Node::text(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::{element_names, text_content};

    fn clean(markup: &str) -> Fragment {
        sanitize(&parse_fragment(markup), &SanitizePolicy::default())
    }

    #[test]
    fn script_is_unwrapped_and_visible_text_survives() {
        let fragment = clean("<script>alert(1)</script>hello");
        assert!(element_names(&fragment).is_empty());
        assert!(text_content(&fragment).ends_with("hello"));
        assert_eq!(sanitize_markup("<script>alert(1)</script>hello"), "alert(1)hello");
    }

    #[test]
    fn disallowed_wrapper_promotes_children_in_place() {
        let input = Fragment::new(vec![Node::element(
            "div",
            vec![
                Node::text("before"),
                Node::element(
                    "p",
                    vec![
                        Node::element("b", vec![Node::text("one")]),
                        Node::element("i", vec![Node::text("two")]),
                    ],
                ),
                Node::text("after"),
            ],
        )]);
        let output = sanitize(&input, &SanitizePolicy::default());
        assert_eq!(
            output.children,
            vec![Node::element(
                "div",
                vec![
                    Node::text("before"),
                    Node::element("b", vec![Node::text("one")]),
                    Node::element("i", vec![Node::text("two")]),
                    Node::text("after"),
                ],
            )]
        );
    }

    #[test]
    fn only_style_survives_on_allowed_elements() {
        let out = sanitize_markup(
            r#"<span class="x" style="color: red" onclick="steal()" STYLE="x">t</span>"#,
        );
        assert_eq!(out, r#"<span style="color: red">t</span>"#);
    }

    #[test]
    fn executable_attributes_are_removed_from_kept_elements() {
        let (fragment, report) = sanitize_with_report(
            &parse_fragment(r#"<b onmouseover="x()">hi</b><img src=x onerror=alert(1)>"#),
            &SanitizePolicy::default(),
        );
        assert_eq!(serialize(&fragment), "<b>hi</b>");
        assert_eq!(report.stripped_attributes, 1);
        assert_eq!(report.unwrapped_elements, 1);
    }

    #[test]
    fn comments_are_dropped() {
        let (fragment, report) = sanitize_with_report(
            &parse_fragment("a<!--[if IE]><script>x</script><![endif]-->b"),
            &SanitizePolicy::default(),
        );
        assert_eq!(fragment.children, vec![Node::text("ab")]);
        assert_eq!(report.dropped_comments, 1);
    }

    #[test]
    fn spliced_text_is_merged() {
        let fragment = clean("a<font>b</font>c");
        assert_eq!(fragment.children, vec![Node::text("abc")]);
    }

    #[test]
    fn all_allowed_tags_pass_through() {
        let markup = "<b>1</b><strong>2</strong><i>3</i><em>4</em><u>5</u><s>6</s>\
                      <strike>7</strike><br><div>8</div><span>9</span>";
        assert_eq!(sanitize_markup(markup), markup);
    }

    #[test]
    fn tag_matching_is_case_insensitive() {
        let input = Fragment::new(vec![Node::element("B", vec![Node::text("x")])]);
        let output = sanitize(&input, &SanitizePolicy::default());
        assert_eq!(output.children, vec![Node::element("b", vec![Node::text("x")])]);
    }

    #[test]
    fn void_element_children_are_kept_after_it() {
        let input = Fragment::new(vec![Node::element("br", vec![Node::text("stray")])]);
        let output = sanitize(&input, &SanitizePolicy::default());
        assert_eq!(
            output.children,
            vec![Node::element("br", vec![]), Node::text("stray")]
        );
    }

    #[test]
    fn deeply_nested_markup_does_not_exhaust_the_stack() {
        let depth = 200_000;
        let unwrapped = clean(&("<font>".repeat(depth) + "x"));
        assert_eq!(unwrapped.children, vec![Node::text("x")]);

        let kept = clean(&("<b>".repeat(depth) + "y"));
        assert_eq!(element_names(&kept).len(), depth);
        assert_eq!(text_content(&kept), "y");
        assert_eq!(
            serialize(&kept),
            "<b>".repeat(depth) + "y" + &"</b>".repeat(depth)
        );
    }

    #[test]
    fn empty_fragment_stays_empty() {
        assert!(sanitize(&Fragment::default(), &SanitizePolicy::default()).is_empty());
        assert_eq!(sanitize_markup(""), "");
    }

    #[test]
    fn custom_policy_is_honoured() {
        let policy = SanitizePolicy::new(["p"], ["title"]);
        let fragment = parse_fragment(r#"<p title="t" style="s"><b>x</b></p>"#);
        assert_eq!(
            serialize(&sanitize(&fragment, &policy)),
            r#"<p title="t">x</p>"#
        );
    }

    #[test]
    fn sanitizing_twice_changes_nothing() {
        let inputs = [
            "<script>alert(1)</script>hello",
            r#"<div id=a><p><b class=c>x</b><!--c--><i>y</i></p>z</div>"#,
            "<table><tr><td>cell</td></tr></table><span style='a'>s</span>",
            "<br>text<img src=x><em onclick=y>e</em>",
        ];
        let policy = SanitizePolicy::default();
        for input in inputs {
            let once = sanitize(&parse_fragment(input), &policy);
            let twice = sanitize(&once, &policy);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
