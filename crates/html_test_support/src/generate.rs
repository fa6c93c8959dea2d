//! Seeded random fragments for property-style tests. Same seed, same tree.

use html::{Attribute, Fragment, Node};

const TAGS: &[&str] = &[
    "b", "strong", "i", "em", "u", "s", "strike", "br", "div", "span", "p", "a", "script",
    "style", "img", "font", "table", "td", "svg", "iframe", "B", "Em",
];

const ATTRIBUTES: &[&str] = &["style", "STYLE", "class", "onclick", "href", "id", "onerror"];

const WORDS: &[&str] = &[
    "hello", " ", "world", "&", "<", ">", "\"q\"", "\u{00A0}", "café", "😊", "\n", "x",
];

pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    pub fn gen_range(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() >> 32) as usize % upper
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.gen_range(items.len())]
    }
}

/// A fragment of up to `max_depth` levels mixing allowed and disallowed tags,
/// attributes, comments and awkward text.
pub fn random_fragment(seed: u64, max_depth: usize) -> Fragment {
    let mut rng = Lcg::new(seed);
    let count = 1 + rng.gen_range(5);
    Fragment::new((0..count).map(|_| random_node(&mut rng, max_depth)).collect())
}

fn random_node(rng: &mut Lcg, depth: usize) -> Node {
    match rng.gen_range(10) {
        0 => Node::comment(rng.pick(WORDS)),
        1..=4 => Node::text(rng.pick(WORDS)),
        _ if depth == 0 => Node::text(rng.pick(WORDS)),
        _ => {
            let name = rng.pick(TAGS);
            let attributes: Vec<Attribute> = (0..rng.gen_range(3))
                .map(|_| {
                    let value = (rng.gen_range(4) != 0).then(|| rng.pick(WORDS).to_string());
                    (rng.pick(ATTRIBUTES).to_string(), value)
                })
                .collect();
            let children = (0..rng.gen_range(4))
                .map(|_| random_node(rng, depth - 1))
                .collect();
            Node::element_with_attributes(name, attributes, children)
        }
    }
}
