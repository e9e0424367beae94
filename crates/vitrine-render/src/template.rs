//! Placeholder substitution into a fixed-shape template.
//!
//! Placeholders look like `{{SCP_TITLE}}`: double braces around a name
//! matching `[A-Z0-9_]+`. Rendering is a single pass over the template;
//! substituted values are never rescanned, so braces inside fetched
//! summaries cannot trigger further substitution.

use regex::Regex;
use std::collections::BTreeMap;
use vitrine_core::{Error, Result};

/// Pattern matching one placeholder token.
const PLACEHOLDER_PATTERN: &str = r"\{\{([A-Z0-9_]+)\}\}";

fn placeholder_regex() -> Regex {
    Regex::new(PLACEHOLDER_PATTERN).expect("invalid placeholder regex")
}

/// The run-scoped mapping from placeholder name to fetched value.
///
/// Created fresh each run and discarded after the rendered document is
/// written; nothing persists across runs beyond the output file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    values: BTreeMap<String, String>,
}

impl ValueSet {
    /// Creates an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a placeholder name to its value, replacing any previous value.
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.values.insert(name.into(), value.into());
    }

    /// Looks up a placeholder value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns whether a placeholder name is mapped.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of mapped placeholders.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for ValueSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Lists the distinct placeholder names in a template, in order of first
/// appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let re = placeholder_regex();
    let mut seen = Vec::new();
    for caps in re.captures_iter(template) {
        if let Some(name) = caps.get(1) {
            let name = name.as_str();
            if !seen.iter().any(|existing: &String| existing == name) {
                seen.push(name.to_string());
            }
        }
    }
    seen
}

/// Renders a template by replacing every placeholder occurrence with its
/// mapped value.
///
/// All non-placeholder bytes are preserved unchanged. If any placeholder in
/// the template lacks a mapped value, rendering fails with
/// [`Error::MissingValue`] naming the first unmapped token (in template
/// order) and produces no output. Input without placeholders is returned
/// unchanged, so rendering is idempotent on already-rendered documents.
pub fn render(template: &str, values: &ValueSet) -> Result<String> {
    let re = placeholder_regex();
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;

    for caps in re.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let value = values
            .get(name.as_str())
            .ok_or_else(|| Error::missing_value(name.as_str()))?;

        rendered.push_str(&template[last..whole.start()]);
        rendered.push_str(value);
        last = whole.end();
    }

    rendered.push_str(&template[last..]);

    tracing::debug!(
        template_bytes = template.len(),
        rendered_bytes = rendered.len(),
        "Template rendered"
    );

    Ok(rendered)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> ValueSet {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_render_single_placeholder() {
        let rendered = render("<a>{{X}}</a>", &values(&[("X", "hello")])).unwrap();
        assert_eq!(rendered, "<a>hello</a>");
    }

    #[test]
    fn test_render_preserves_surrounding_markup() {
        let template = "# Title\n\n[{{SCP_TITLE}}]({{SCP_URL}}) — {{SCP_SUMMARY}}\n";
        let rendered = render(
            template,
            &values(&[
                ("SCP_TITLE", "SCP-173"),
                ("SCP_URL", "https://scp-wiki.wikidot.com/scp-173"),
                ("SCP_SUMMARY", "A statue."),
            ]),
        )
        .unwrap();
        assert_eq!(
            rendered,
            "# Title\n\n[SCP-173](https://scp-wiki.wikidot.com/scp-173) — A statue.\n"
        );
    }

    #[test]
    fn test_render_leaves_no_tokens_behind() {
        let template = "{{A}} and {{B}} and {{A}} again";
        let rendered = render(template, &values(&[("A", "1"), ("B", "2")])).unwrap();
        assert!(placeholders(&rendered).is_empty());
        assert_eq!(rendered, "1 and 2 and 1 again");
    }

    #[test]
    fn test_render_missing_value_names_token() {
        let err = render("{{A}} then {{B}}", &values(&[("A", "1")])).unwrap_err();
        let Error::MissingValue { token } = err else {
            unreachable!("Expected MissingValue error");
        };
        assert_eq!(token, "B");
    }

    #[test]
    fn test_render_is_idempotent_on_rendered_output() {
        let template = "<a>{{X}}</a>";
        let vals = values(&[("X", "hello")]);
        let once = render(template, &vals).unwrap();
        let twice = render(&once, &vals).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_render_does_not_rescan_substituted_values() {
        // A value containing placeholder syntax must land verbatim.
        let rendered = render("{{A}}", &values(&[("A", "literal {{B}} text")])).unwrap();
        assert_eq!(rendered, "literal {{B}} text");
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        let template = "no tokens here, just {braces} and {{lowercase}}";
        let rendered = render(template, &ValueSet::new()).unwrap();
        assert_eq!(rendered, template);
    }

    #[test]
    fn test_placeholders_lists_distinct_names_in_order() {
        let found = placeholders("{{B}} {{A}} {{B}} {{PRICE_BTC}}");
        assert_eq!(found, vec!["B", "A", "PRICE_BTC"]);
    }

    #[test]
    fn test_value_set_insert_and_lookup() {
        let mut set = ValueSet::new();
        assert!(set.is_empty());
        set.insert("SCP_TITLE", "SCP-173");
        assert_eq!(set.get("SCP_TITLE"), Some("SCP-173"));
        assert!(set.contains("SCP_TITLE"));
        assert_eq!(set.len(), 1);
    }
}
