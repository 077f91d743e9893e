//! Injected dependency lists written in the inline array idiom:
//!
//! ```text
//! MainCtrl.$inject = ['$scope', '$http']
//! ['$scope', '$http', function($scope, $http) { ... }]
//! ```
//!
//! Only the last bracketed list that closes at the end of a line is used.
//! Files that declare dependencies some other way yield nothing, and a
//! trailing array literal that is not an injection list is picked up anyway.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static INJECTION_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)\[\s*([^\]]+)\s*\]\s*$").expect("valid injection regex"));

const QUOTES: &[char] = &['\'', '"', '`'];

/// Dependency names from the file's last trailing bracket list.
///
/// Names are unquoted, trimmed and deduplicated with first-occurrence order.
/// A bare `function` token is dropped. An inline constructor
/// (`function(...)`, `function Name(...)`) closes the list.
pub fn extract_dependencies(content: &str) -> Vec<String> {
    let Some(caps) = INJECTION_LIST.captures_iter(content).last() else {
        return Vec::new();
    };

    caps[1]
        .split(',')
        .map(|token| token.trim().trim_matches(QUOTES).trim())
        .filter(|token| !token.is_empty() && *token != "function")
        .take_while(|token| !is_inline_constructor(token))
        .map(str::to_string)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

fn is_inline_constructor(token: &str) -> bool {
    token
        .strip_prefix("function")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| !(c.is_alphanumeric() || c == '_' || c == '$'))
}
