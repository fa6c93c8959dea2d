use crate::{Fragment, Node};

/// Concatenated text of every text node, in document order (`textContent`).
pub fn text_content(fragment: &Fragment) -> String {
    let mut out = String::new();
    let mut stack: Vec<&Node> = fragment.children.iter().rev().collect();
    while let Some(node) = stack.pop() {
        match node {
            Node::Text { text } => out.push_str(text),
            Node::Element { children, .. } => stack.extend(children.iter().rev()),
            Node::Comment { .. } => {}
        }
    }
    out
}

/// Visit every element pre-order, depth-first.
pub fn for_each_element<'a>(fragment: &'a Fragment, mut f: impl FnMut(&'a Node)) {
    let mut stack: Vec<&'a Node> = fragment.children.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if let Node::Element { children, .. } = node {
            f(node);
            stack.extend(children.iter().rev());
        }
    }
}

/// Lowercase tag names of every element, pre-order.
pub fn element_names(fragment: &Fragment) -> Vec<&str> {
    let mut names = Vec::new();
    for_each_element(fragment, |node| {
        if let Node::Element { name, .. } = node {
            names.push(name.as_str());
        }
    });
    names
}
