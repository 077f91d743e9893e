use crate::core::{Category, DeclarationRecord};
use crate::extraction::{count_lines, extract_declarations, extract_dependencies, TemplateMarkers};

/// Everything learned from one file, before it is merged into the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileAnalysis {
    pub path: String,
    pub loc: usize,
    pub dependencies: Vec<String>,
    pub markers: TemplateMarkers,
    pub declarations: Vec<(Category, DeclarationRecord)>,
}

impl FileAnalysis {
    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }
}

/// Run every extractor over `content`. Pure; the caller supplies the
/// root-relative `path` to stamp onto each record.
pub fn analyze_content(path: &str, content: &str) -> FileAnalysis {
    let loc = count_lines(content);
    let dependencies = extract_dependencies(content);
    let markers = TemplateMarkers::scan(content);

    let declarations = extract_declarations(content)
        .into_iter()
        .map(|declaration| {
            let record = DeclarationRecord {
                name: declaration.name,
                path: path.to_string(),
                dependencies: dependencies.clone(),
                loc,
                has_template_url: markers.has_template_url,
                has_template: markers.has_template,
                has_translations: markers.has_translations,
                has_forms: markers.has_forms,
                directive_marker_count: markers.directive_marker_count,
            };
            (declaration.category, record)
        })
        .collect();

    FileAnalysis {
        path: path.to_string(),
        loc,
        dependencies,
        markers,
        declarations,
    }
}
