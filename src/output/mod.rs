//! Report assembly and rendering.
//!
//! [`AnalysisReport`] is the serialised artifact. Its field order is the key
//! order of the written JSON document.

pub mod json;
pub mod terminal;

pub use json::{render_json, write_report};
pub use terminal::{render_console, ConsoleFormat};

use crate::complexity::{ComplexityClassifier, ComplexityMetrics};
use crate::core::{Category, DeclarationRecord, TemplateStats};
use crate::registry::{DependencyMap, Registry};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_components: usize,
    pub total_directives: usize,
    pub total_controllers: usize,
    pub total_services: usize,
    pub total_factories: usize,
    pub template_stats: TemplateStats,
    /// Buckets for the component category only
    pub complexity_metrics: ComplexityMetrics,
    pub files_analyzed: usize,
    pub files_failed: usize,
}

impl Summary {
    pub fn total(&self, category: Category) -> usize {
        match category {
            Category::Component => self.total_components,
            Category::Directive => self.total_directives,
            Category::Controller => self.total_controllers,
            Category::Service => self.total_services,
            Category::Factory => self.total_factories,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub summary: Summary,
    pub components: Vec<DeclarationRecord>,
    pub directives: Vec<DeclarationRecord>,
    pub controllers: Vec<DeclarationRecord>,
    pub services: Vec<DeclarationRecord>,
    pub factories: Vec<DeclarationRecord>,
    pub dependencies: DependencyMap,
    pub template_stats: TemplateStats,
}

impl AnalysisReport {
    /// Snapshot the registry. Totals are taken from the very collections
    /// that are serialised, so they always agree.
    pub fn from_registry(registry: &Registry, classifier: &ComplexityClassifier) -> Self {
        let collect = |category| registry.records(category).to_vec();
        let components = collect(Category::Component);
        let directives = collect(Category::Directive);
        let controllers = collect(Category::Controller);
        let services = collect(Category::Service);
        let factories = collect(Category::Factory);

        let summary = Summary {
            total_components: components.len(),
            total_directives: directives.len(),
            total_controllers: controllers.len(),
            total_services: services.len(),
            total_factories: factories.len(),
            template_stats: registry.template_stats(),
            complexity_metrics: classifier.metrics(&components),
            files_analyzed: registry.files_analyzed(),
            files_failed: registry.failures().len(),
        };

        Self {
            summary,
            components,
            directives,
            controllers,
            services,
            factories,
            dependencies: registry.dependencies().clone(),
            template_stats: registry.template_stats(),
        }
    }

    pub fn records(&self, category: Category) -> &[DeclarationRecord] {
        match category {
            Category::Component => &self.components,
            Category::Directive => &self.directives,
            Category::Controller => &self.controllers,
            Category::Service => &self.services,
            Category::Factory => &self.factories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::analyze_content;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_matches_collections() {
        let mut registry = Registry::new();
        registry.record_file(analyze_content(
            "a.js",
            "app.component('a', {}); app.component('b', {}); app.factory('f', F);",
        ));
        registry.record_file(analyze_content("b.js", "app.controller('C', C);"));

        let report = AnalysisReport::from_registry(&registry, &ComplexityClassifier::default());
        for category in Category::ALL {
            assert_eq!(report.summary.total(category), report.records(category).len());
        }
        assert_eq!(report.summary.total_components, 2);
        assert_eq!(report.summary.complexity_metrics.low_complexity, 2);
        assert_eq!(report.summary.files_analyzed, 2);
        assert_eq!(report.summary.files_failed, 0);
    }

    #[test]
    fn test_complexity_metrics_cover_components_only() {
        let mut registry = Registry::new();
        let long_file = format!("app.service('big', B);\n{}", "x;\n".repeat(400));
        registry.record_file(analyze_content("big.js", &long_file));

        let report = AnalysisReport::from_registry(&registry, &ComplexityClassifier::default());
        assert_eq!(report.summary.complexity_metrics, ComplexityMetrics::default());
    }
}
