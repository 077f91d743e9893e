//! Accumulator for one scan.
//!
//! The registry is the only state that spans files. It is owned by the scan
//! pipeline, filled by a single writer in discovery order, and handed to
//! the planner and report generator afterwards as read-only views.

use crate::analyzers::FileAnalysis;
use crate::core::{Category, DeclarationRecord, ScanFailure, TemplateStats};
use indexmap::IndexMap;

/// Declaration name → dependency list.
///
/// A name keeps the position of its first insertion; its value is whatever
/// the most recent declaration with that name carried.
pub type DependencyMap = IndexMap<String, Vec<String>>;

#[derive(Clone, Debug, Default)]
pub struct Registry {
    components: Vec<DeclarationRecord>,
    directives: Vec<DeclarationRecord>,
    controllers: Vec<DeclarationRecord>,
    services: Vec<DeclarationRecord>,
    factories: Vec<DeclarationRecord>,
    dependencies: DependencyMap,
    template_stats: TemplateStats,
    files_analyzed: usize,
    failures: Vec<ScanFailure>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one analysed file. Records are appended, never merged, and the
    /// dependency map entry for each name is overwritten.
    pub fn record_file(&mut self, analysis: FileAnalysis) {
        self.files_analyzed += 1;

        let markers = analysis.markers;
        if markers.has_any_template() {
            self.template_stats.total += 1;
            if markers.has_translations {
                self.template_stats.with_translations += 1;
            }
            if markers.has_forms {
                self.template_stats.with_forms += 1;
            }
            if markers.has_directives() {
                self.template_stats.with_directives += 1;
            }
        }

        for (category, record) in analysis.declarations {
            self.record_declaration(category, record);
        }
    }

    pub fn record_declaration(&mut self, category: Category, record: DeclarationRecord) {
        self.dependencies
            .insert(record.name.clone(), record.dependencies.clone());
        self.collection_mut(category).push(record);
    }

    pub fn record_failure(&mut self, failure: ScanFailure) {
        self.failures.push(failure);
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

    fn collection_mut(&mut self, category: Category) -> &mut Vec<DeclarationRecord> {
        match category {
            Category::Component => &mut self.components,
            Category::Directive => &mut self.directives,
            Category::Controller => &mut self.controllers,
            Category::Service => &mut self.services,
            Category::Factory => &mut self.factories,
        }
    }

    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    /// Number of dependencies recorded for `name`, 0 when unknown.
    pub fn dependency_count(&self, name: &str) -> usize {
        self.dependencies.get(name).map_or(0, Vec::len)
    }

    pub fn template_stats(&self) -> TemplateStats {
        self.template_stats
    }

    pub fn files_analyzed(&self) -> usize {
        self.files_analyzed
    }

    pub fn failures(&self) -> &[ScanFailure] {
        &self.failures
    }

    pub fn total_declarations(&self) -> usize {
        Category::ALL.iter().map(|&c| self.records(c).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::analyze_content;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dependency_map_last_write_wins() {
        let mut registry = Registry::new();
        registry.record_file(analyze_content(
            "a.js",
            "app.controller('fooCtrl', Foo);\nFoo.$inject = ['$scope', '$http']",
        ));
        registry.record_file(analyze_content(
            "b.js",
            "app.controller('fooCtrl', Foo);\nFoo.$inject = ['$q']",
        ));

        assert_eq!(registry.records(Category::Controller).len(), 2);
        assert_eq!(registry.dependencies().len(), 1);
        assert_eq!(registry.dependencies()["fooCtrl"], vec!["$q"]);
        assert_eq!(registry.dependency_count("fooCtrl"), 1);
    }

    #[test]
    fn test_overwrite_keeps_first_insertion_position() {
        let mut registry = Registry::new();
        registry.record_file(analyze_content("a.js", "app.service('alpha', A);"));
        registry.record_file(analyze_content("b.js", "app.service('beta', B);"));
        registry.record_file(analyze_content(
            "c.js",
            "app.service('alpha', A2);\nA2.$inject = ['$log']",
        ));

        let keys: Vec<_> = registry.dependencies().keys().cloned().collect();
        assert_eq!(keys, vec!["alpha", "beta"]);
        assert_eq!(registry.dependencies()["alpha"], vec!["$log"]);
    }

    #[test]
    fn test_unknown_name_has_zero_dependencies() {
        let registry = Registry::new();
        assert_eq!(registry.dependency_count("missing"), 0);
    }

    #[test]
    fn test_template_stats_count_template_files_only() {
        let mut registry = Registry::new();
        registry.record_file(analyze_content(
            "with_template.js",
            "app.component('a', { template: '<form ng-submit=\"s()\">{{ x | translate }}</form>' });",
        ));
        registry.record_file(analyze_content(
            "external.js",
            "app.component('b', { templateUrl: 'b.html' });",
        ));
        // Markers without a template do not count
        registry.record_file(analyze_content("plain.js", "// translate ng-model form"));

        let stats = registry.template_stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.with_translations, 1);
        assert_eq!(stats.with_forms, 1);
        assert_eq!(stats.with_directives, 1);
        assert_eq!(registry.files_analyzed(), 3);
    }

    #[test]
    fn test_records_keep_discovery_order() {
        let mut registry = Registry::new();
        registry.record_file(analyze_content("x.js", "app.directive('one', a); app.directive('two', b);"));
        registry.record_file(analyze_content("y.js", "app.directive('three', c);"));

        let names: Vec<_> = registry
            .records(Category::Directive)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["one", "two", "three"]);
        assert_eq!(registry.total_declarations(), 3);
    }
}
