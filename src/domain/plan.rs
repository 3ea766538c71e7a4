use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resource keys the subscription plans track out of the box. The quota
/// evaluator accepts any key set; these are the canonical ones.
pub mod resources {
    pub const TRANSACTIONS_THIS_MONTH: &str = "transactions_this_month";
    pub const BUDGETS: &str = "budgets";
    pub const COMMITMENTS: &str = "commitments";
    pub const CATEGORIES: &str = "categories";
    pub const PHONES: &str = "phones";
}

/// Per-resource plan caps. `None` means the resource is unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanLimits {
    #[serde(default)]
    pub limits: BTreeMap<String, Option<u64>>,
}

impl PlanLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, resource: impl Into<String>, limit: Option<u64>) -> Self {
        self.limits.insert(resource.into(), limit);
        self
    }
}

/// Current per-resource usage counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageCounters {
    #[serde(default)]
    pub counts: BTreeMap<String, u64>,
}

impl UsageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, resource: impl Into<String>, count: u64) -> Self {
        self.counts.insert(resource.into(), count);
        self
    }

    /// Usage for a resource; resources never touched count as zero.
    pub fn count(&self, resource: &str) -> u64 {
        self.counts.get(resource).copied().unwrap_or(0)
    }
}

/// Result of a quota evaluation pass, ready for direct display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuotaUsage {
    /// Usage percentage per resource key. Unbounded resources report 0;
    /// values above 100 are surfaced as-is.
    pub percentages: BTreeMap<String, f64>,
    /// Display-ready warning strings, ordered by resource key.
    pub warnings: Vec<String>,
}
