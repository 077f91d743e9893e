use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ng-[a-zA-Z]").expect("valid directive regex"));

/// File-level template markers. Plain substring checks, no structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TemplateMarkers {
    pub has_template_url: bool,
    pub has_template: bool,
    pub has_translations: bool,
    pub has_forms: bool,
    pub directive_marker_count: usize,
}

impl TemplateMarkers {
    pub fn scan(content: &str) -> Self {
        Self {
            has_template_url: content.contains("templateUrl"),
            has_template: content.contains("template:"),
            has_translations: content.contains("translate"),
            has_forms: content.contains("ng-model") || content.contains("form"),
            directive_marker_count: DIRECTIVE_ATTRIBUTE.find_iter(content).count(),
        }
    }

    /// Whether the file carries an inline or external template and so
    /// contributes to template statistics.
    pub fn has_any_template(&self) -> bool {
        self.has_template_url || self.has_template
    }

    pub fn has_directives(&self) -> bool {
        self.directive_marker_count > 0
    }
}
