pub type Attribute = (String, Option<String>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Doctype(String),
    StartTag {
        name: String,
        attributes: Vec<Attribute>,
        self_closing: bool,
    },
    EndTag(String),
    Comment(String),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        name: String,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

impl Node {
    pub fn element(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            name: name.into(),
            attributes: Vec::new(),
            children,
        }
    }

    pub fn element_with_attributes(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            name: name.into(),
            attributes,
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Node::Comment { text: text.into() }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } | Node::Comment { .. } => &[],
        }
    }

    /// Returns the value of the first attribute called `name` (ASCII case-insensitive).
    ///
    /// Valueless attributes (`<b hidden>`) resolve to an empty string.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        let Node::Element { attributes, .. } = self else {
            return None;
        };
        attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }
}

// The derived drop glue recurses once per nesting level; unlink descendants
// onto a heap stack first so deep trees drop in constant stack space.
impl Drop for Node {
    fn drop(&mut self) {
        let Node::Element { children, .. } = self else {
            return;
        };
        if children.is_empty() {
            return;
        }
        let mut stack = std::mem::take(children);
        while let Some(mut node) = stack.pop() {
            if let Node::Element { children, .. } = &mut node {
                stack.append(children);
            }
        }
    }
}

/// An ordered list of top-level nodes: the content of an editing surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    pub children: Vec<Node>,
}

impl Fragment {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
