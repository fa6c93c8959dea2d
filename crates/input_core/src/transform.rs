//! Case transformations over plain text.
//!
//! Sentence and title case are regex heuristics over Unicode word characters;
//! they know nothing about abbreviations ("Mr.") or English title rules.

use regex::{Captures, Regex};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// First word character of the text, and the first one after each `.`, `!`
/// or `?` (whitespace in between allowed).
static SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^\s*\w|[.!?]\s*\w)").expect("valid sentence regex"));

/// First character of every run of word characters.
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("valid word regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Uppercase,
    Lowercase,
    SentenceCase,
    TitleCase,
}

impl TransformKind {
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Uppercase,
        TransformKind::Lowercase,
        TransformKind::SentenceCase,
        TransformKind::TitleCase,
    ];

    /// Canonical name, as used on the shell's transform buttons.
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Uppercase => "uppercase",
            TransformKind::Lowercase => "lowercase",
            TransformKind::SentenceCase => "sentence",
            TransformKind::TitleCase => "capitalize",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTransform(pub String);

impl fmt::Display for UnknownTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transformation `{}`", self.0)
    }
}

impl std::error::Error for UnknownTransform {}

impl FromStr for TransformKind {
    type Err = UnknownTransform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uppercase" | "upper" => Ok(TransformKind::Uppercase),
            "lowercase" | "lower" => Ok(TransformKind::Lowercase),
            "sentence" | "sentence-case" | "sentencecase" => Ok(TransformKind::SentenceCase),
            "capitalize" | "title" | "title-case" | "titlecase" => Ok(TransformKind::TitleCase),
            _ => Err(UnknownTransform(s.to_string())),
        }
    }
}

pub fn transform(text: &str, kind: TransformKind) -> String {
    match kind {
        TransformKind::Uppercase => text.to_uppercase(),
        TransformKind::Lowercase => text.to_lowercase(),
        TransformKind::SentenceCase => uppercase_matches(&SENTENCE_START, &text.to_lowercase()),
        TransformKind::TitleCase => uppercase_matches(&WORD_START, &text.to_lowercase()),
    }
}

/// [`transform`] by button name; `None` when the name is not a known kind.
pub fn transform_named(text: &str, name: &str) -> Option<String> {
    match name.parse::<TransformKind>() {
        Ok(kind) => Some(transform(text, kind)),
        Err(err) => {
            log::debug!(target: "input_core.transform", "{err}");
            None
        }
    }
}

// Punctuation and whitespace map to themselves, so uppercasing the whole match
// only touches the word character it ends with.
fn uppercase_matches(re: &Regex, text: &str) -> String {
    re.replace_all(text, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}
