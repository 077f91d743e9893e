//! Migration ordering for components.
//!
//! Effort is approximated as `loc + dependency_count * dependency_weight`,
//! where the dependency count comes from the registry's dependency map, so a
//! name declared in several files is scored with the last list recorded for
//! it. Only components are ranked.

use crate::core::DeclarationRecord;
use crate::registry::DependencyMap;
use serde::Serialize;

/// A ranked component with the score it was ranked by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MigrationCandidate {
    pub name: String,
    pub path: String,
    pub score: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct MigrationPlanner {
    dependency_weight: usize,
}

impl Default for MigrationPlanner {
    fn default() -> Self {
        Self {
            dependency_weight: 10,
        }
    }
}

impl MigrationPlanner {
    pub fn new(dependency_weight: usize) -> Self {
        Self { dependency_weight }
    }

    pub fn score(&self, record: &DeclarationRecord, dependencies: &DependencyMap) -> usize {
        let dependency_count = dependencies.get(&record.name).map_or(0, Vec::len);
        record.loc + dependency_count * self.dependency_weight
    }

    /// Components in ascending score order, lowest effort first.
    ///
    /// `sort_by_key` is stable, so equal scores keep discovery order.
    pub fn rank(
        &self,
        components: &[DeclarationRecord],
        dependencies: &DependencyMap,
    ) -> Vec<MigrationCandidate> {
        let mut candidates: Vec<_> = components
            .iter()
            .map(|record| MigrationCandidate {
                name: record.name.clone(),
                path: record.path.clone(),
                score: self.score(record, dependencies),
            })
            .collect();
        candidates.sort_by_key(|candidate| candidate.score);
        candidates
    }

    /// Just the names from [`rank`](Self::rank). Repeated names appear once
    /// per declaration.
    pub fn migration_order(
        &self,
        components: &[DeclarationRecord],
        dependencies: &DependencyMap,
    ) -> Vec<String> {
        self.rank(components, dependencies)
            .into_iter()
            .map(|candidate| candidate.name)
            .collect()
    }
}
