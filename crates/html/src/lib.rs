//! Markup handling for the editing surface: a shallow tokenizer, a fragment
//! builder, an allow-list sanitizer and an `innerHTML`-style serializer.

pub mod sanitize;
pub mod traverse;

mod dom_builder;
mod entities;
mod serialize;
mod tokenizer;
mod types;

pub use crate::dom_builder::{build_fragment, parse_fragment};
pub use crate::sanitize::{
    SanitizePolicy, SanitizeReport, sanitize, sanitize_markup, sanitize_with_report,
};
pub use crate::serialize::{escape_html, serialize, serialize_node};
pub use crate::tokenizer::tokenize;
pub use crate::traverse::text_content;
pub use crate::types::{Attribute, Fragment, Node, Token};
