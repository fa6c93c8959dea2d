use crate::tokenizer::tokenize;
use crate::types::{Attribute, Fragment, Node, Token};

/// Parse markup into a [`Fragment`].
///
/// Tree construction is deliberately shallow: an end tag closes the nearest open
/// element with the same name (and everything opened inside it); end tags with no
/// matching open element are ignored; doctypes are dropped.
pub fn parse_fragment(input: &str) -> Fragment {
    build_fragment(&tokenize(input))
}

pub fn build_fragment(tokens: &[Token]) -> Fragment {
    let mut arena = NodeArena::new();
    let root = arena.push(ArenaNode::Root {
        children: Vec::new(),
    });
    let mut open_elements: Vec<usize> = Vec::new();

    for token in tokens {
        let parent = open_elements.last().copied().unwrap_or(root);
        match token {
            Token::Doctype(_) => {}
            Token::Comment(text) => {
                arena.add_child(parent, ArenaNode::Comment { text: text.clone() });
            }
            Token::Text(text) => {
                if !text.is_empty() {
                    arena.add_child(parent, ArenaNode::Text { text: text.clone() });
                }
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let index = arena.add_child(
                    parent,
                    ArenaNode::Element {
                        name: name.clone(),
                        attributes: attributes.clone(),
                        children: Vec::new(),
                    },
                );
                if !*self_closing {
                    open_elements.push(index);
                }
            }
            Token::EndTag(name) => {
                if let Some(pos) = open_elements
                    .iter()
                    .rposition(|&open| arena.is_element_named(open, name))
                {
                    open_elements.truncate(pos);
                } else {
                    log::trace!(target: "html.builder", "ignoring unmatched end tag </{name}>");
                }
            }
        }
    }

    Fragment::new(arena.into_children(root))
}

#[derive(Debug)]
enum ArenaNode {
    Root {
        children: Vec<usize>,
    },
    Element {
        name: String,
        attributes: Vec<Attribute>,
        children: Vec<usize>,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

impl ArenaNode {
    fn children(&self) -> &[usize] {
        match self {
            ArenaNode::Root { children } | ArenaNode::Element { children, .. } => children,
            ArenaNode::Text { .. } | ArenaNode::Comment { .. } => &[],
        }
    }
}

#[derive(Debug)]
struct NodeArena {
    nodes: Vec<ArenaNode>,
}

impl NodeArena {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, node: ArenaNode) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }

    fn add_child(&mut self, parent: usize, child: ArenaNode) -> usize {
        let index = self.push(child);
        match &mut self.nodes[parent] {
            ArenaNode::Root { children } | ArenaNode::Element { children, .. } => {
                children.push(index);
            }
            _ => unreachable!("fragment builder parent cannot have children"),
        }
        index
    }

    fn is_element_named(&self, index: usize, target: &str) -> bool {
        matches!(&self.nodes[index], ArenaNode::Element { name, .. } if name == target)
    }

    /// Converts the arena rooted at `root` into owned nodes without recursion,
    /// so arbitrarily deep pastes cannot exhaust the stack here.
    fn into_children(self, root: usize) -> Vec<Node> {
        let mut nodes = self.nodes;
        let mut built: Vec<Node> = Vec::with_capacity(nodes.len());

        fn take_children(n: usize, built: &mut Vec<Node>) -> Vec<Node> {
            built.split_off(built.len() - n)
        }

        // Post-order: a node is assembled once all of its children sit, in order,
        // at the top of `built`.
        let mut stack: Vec<(usize, bool)> = vec![(root, false)];
        let mut root_children = Vec::new();

        while let Some((index, visited)) = stack.pop() {
            if !visited {
                stack.push((index, true));
                for &child in nodes[index].children().iter().rev() {
                    stack.push((child, false));
                }
                continue;
            }

            let node = match &mut nodes[index] {
                ArenaNode::Root { children } => {
                    root_children = take_children(children.len(), &mut built);
                    continue;
                }
                ArenaNode::Element {
                    name,
                    attributes,
                    children,
                } => Node::Element {
                    name: std::mem::take(name),
                    attributes: std::mem::take(attributes),
                    children: take_children(children.len(), &mut built),
                },
                ArenaNode::Text { text } => Node::Text {
                    text: std::mem::take(text),
                },
                ArenaNode::Comment { text } => Node::Comment {
                    text: std::mem::take(text),
                },
            };
            built.push(node);
        }

        debug_assert!(built.is_empty(), "every node is consumed by its parent");
        root_children
    }
}
