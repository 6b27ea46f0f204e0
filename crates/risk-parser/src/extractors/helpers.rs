//! Shared helpers for pulling JSON out of chat text and reading loosely
//! shaped JSON objects.
//!
//! LLM output is never trusted to match a schema: every field is checked for
//! presence and type before it reaches a typed record.

use regex::Regex;
use serde_json::{Map, Value};

/// Remove one surrounding markdown code fence (```` ``` ```` or ```` ```json ````).
///
/// Text that is not fully fenced is returned trimmed but otherwise untouched.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    let inner = inner.trim_start();
    inner
        .strip_prefix("json")
        .or_else(|| inner.strip_prefix("JSON"))
        .unwrap_or(inner)
        .trim()
}

/// Greedy `{ ... }` block: from the first `{` to the last `}`.
pub fn brace_block(text: &str) -> Option<&str> {
    delimited(text, '{', '}')
}

/// Greedy `[ ... ]` block: from the first `[` to the last `]`.
pub fn bracket_block(text: &str) -> Option<&str> {
    delimited(text, '[', ']')
}

fn delimited(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    // Both delimiters are ASCII, so `end + 1` is a char boundary.
    (end > start).then(|| &text[start..=end])
}

/// First non-empty string value among `keys`, trimmed.
///
/// Non-string values (numbers, nulls, objects) are treated as absent.
pub fn str_field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Owned variant of [`str_field`] with an empty-string default.
pub fn string_field(object: &Map<String, Value>, keys: &[&str]) -> String {
    str_field(object, keys).unwrap_or_default().to_string()
}

/// String items of the first array found among `keys`; other items are dropped.
pub fn string_list(object: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Case-insensitive matcher for a list of keywords anchored at a word start.
///
/// Keywords behave as word prefixes: `vulnerab` matches `vulnerabilities`,
/// `likely` does not match inside `unlikely`. An empty keyword list never
/// matches.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    regex: Option<Regex>,
}

impl KeywordMatcher {
    /// Compile the keyword alternation.
    ///
    /// # Errors
    ///
    /// Fails only when the alternation exceeds the regex size limit.
    pub fn new(keywords: &[String]) -> Result<Self, regex::Error> {
        let alternatives = keywords
            .iter()
            .map(|keyword| keyword.trim())
            .filter(|keyword| !keyword.is_empty())
            .map(regex::escape)
            .collect::<Vec<_>>();
        if alternatives.is_empty() {
            return Ok(Self { regex: None });
        }
        let pattern = format!(r"(?i)\b(?:{})", alternatives.join("|"));
        Ok(Self {
            regex: Some(Regex::new(&pattern)?),
        })
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(text))
    }
}
