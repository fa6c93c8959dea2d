//! TOML fixture tables shared by the workspace's integration tests.
//!
//! A fixture file is a list of `[[case]]` tables; each crate's tests pick the
//! case type matching the file.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FixtureFile<T> {
    #[serde(rename = "case")]
    cases: Vec<T>,
}

/// Markup in, sanitized markup out.
#[derive(Clone, Debug, Deserialize)]
pub struct SanitizeCase {
    pub name: String,
    pub input: String,
    pub expected: String,
    #[serde(default)]
    pub expected_text: Option<String>,
}

/// Plain text through a named transform.
#[derive(Clone, Debug, Deserialize)]
pub struct TransformCase {
    pub name: String,
    pub kind: String,
    pub input: String,
    /// `None` when the kind is expected to be rejected.
    #[serde(default)]
    pub expected: Option<String>,
}

pub fn load_cases<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture file {path:?}: {err}"));
    let file: FixtureFile<T> = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse fixture file {path:?}: {err}"));
    assert!(!file.cases.is_empty(), "fixture file {path:?} has no cases");
    file.cases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_tables() {
        let file: FixtureFile<TransformCase> = toml::from_str(
            r#"
            [[case]]
            name = "upper"
            kind = "uppercase"
            input = "a"
            expected = "A"

            [[case]]
            name = "unknown"
            kind = "rot13"
            input = "a"
            "#,
        )
        .expect("valid fixture");
        assert_eq!(file.cases.len(), 2);
        assert_eq!(file.cases[0].expected.as_deref(), Some("A"));
        assert!(file.cases[1].expected.is_none());
    }
}
