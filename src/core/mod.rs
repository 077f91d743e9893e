use serde::{Deserialize, Serialize};
use std::fmt;

/// The framework construct kinds tracked by the scanner.
///
/// Declaration order is significant: files are matched category by category
/// in this order, which fixes the insertion order of the dependency map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Component,
    Directive,
    Controller,
    Service,
    Factory,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Component,
        Category::Directive,
        Category::Controller,
        Category::Service,
        Category::Factory,
    ];

    /// Registration method name used at declaration call sites, e.g. `.component(`.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Component => "component",
            Category::Directive => "directive",
            Category::Controller => "controller",
            Category::Service => "service",
            Category::Factory => "factory",
        }
    }

    /// Collection key used in the report artifact.
    pub fn plural(self) -> &'static str {
        match self {
            Category::Component => "components",
            Category::Directive => "directives",
            Category::Controller => "controllers",
            Category::Service => "services",
            Category::Factory => "factories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One matched construct occurrence.
///
/// Every file-level field (`loc`, marker flags, directive count) is shared by
/// all declarations found in the same file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRecord {
    pub name: String,
    pub path: String,
    pub dependencies: Vec<String>,
    pub loc: usize,
    pub has_template_url: bool,
    pub has_template: bool,
    pub has_translations: bool,
    pub has_forms: bool,
    pub directive_marker_count: usize,
}

/// Aggregate template marker counters across the scanned files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStats {
    pub total: usize,
    pub with_translations: usize,
    pub with_forms: usize,
    pub with_directives: usize,
}

/// A file that could not be read during the scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFailure {
    pub path: String,
    pub message: String,
}
