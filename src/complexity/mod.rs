//! Line-count based complexity buckets.
//!
//! Each declaration inherits the line count of the file it was found in, so
//! two constructs declared in one 400-line file are both `High`.

use crate::core::DeclarationRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Inclusive upper bounds of the low and medium buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityThresholds {
    /// `loc <= low_max` is low complexity
    #[serde(default = "default_low_max")]
    pub low_max: usize,

    /// `low_max < loc <= medium_max` is medium; anything above is high
    #[serde(default = "default_medium_max")]
    pub medium_max: usize,
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self {
            low_max: default_low_max(),
            medium_max: default_medium_max(),
        }
    }
}

fn default_low_max() -> usize {
    100
}

fn default_medium_max() -> usize {
    300
}

impl ComplexityThresholds {
    pub fn classify(&self, loc: usize) -> ComplexityLevel {
        if loc > self.medium_max {
            ComplexityLevel::High
        } else if loc > self.low_max {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::Low
        }
    }
}

/// Bucket counts for one category, as reported in the summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMetrics {
    pub high_complexity: usize,
    pub medium_complexity: usize,
    pub low_complexity: usize,
}

impl ComplexityMetrics {
    pub fn total(&self) -> usize {
        self.high_complexity + self.medium_complexity + self.low_complexity
    }
}

/// Declarations of one category split by complexity level, discovery order kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplexityBuckets<'a> {
    pub low: Vec<&'a DeclarationRecord>,
    pub medium: Vec<&'a DeclarationRecord>,
    pub high: Vec<&'a DeclarationRecord>,
}

impl ComplexityBuckets<'_> {
    pub fn metrics(&self) -> ComplexityMetrics {
        ComplexityMetrics {
            high_complexity: self.high.len(),
            medium_complexity: self.medium.len(),
            low_complexity: self.low.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ComplexityClassifier {
    thresholds: ComplexityThresholds,
}

impl ComplexityClassifier {
    pub fn new(thresholds: ComplexityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn classify(&self, record: &DeclarationRecord) -> ComplexityLevel {
        self.thresholds.classify(record.loc)
    }

    pub fn partition<'a>(&self, records: &'a [DeclarationRecord]) -> ComplexityBuckets<'a> {
        records
            .iter()
            .fold(ComplexityBuckets::default(), |mut buckets, record| {
                match self.classify(record) {
                    ComplexityLevel::Low => buckets.low.push(record),
                    ComplexityLevel::Medium => buckets.medium.push(record),
                    ComplexityLevel::High => buckets.high.push(record),
                }
                buckets
            })
    }

    pub fn metrics(&self, records: &[DeclarationRecord]) -> ComplexityMetrics {
        self.partition(records).metrics()
    }
}
