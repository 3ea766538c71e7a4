use std::collections::BTreeMap;

use crate::domain::{PlanLimits, QuotaUsage, UsageCounters};

/// Percentage of a bounded limit at which a warning is emitted.
pub const WARNING_THRESHOLD: f64 = 75.0;

/// Compares per-resource usage counters against plan limits.
pub struct QuotaEvaluator;

impl QuotaEvaluator {
    /// Produces a usage percentage per resource plus display-ready warning
    /// strings, ordered by resource key.
    ///
    /// Unbounded resources (limit `None`) report 0% and never warn. Values
    /// above 100% are surfaced as-is. A bounded limit of zero reports 100%
    /// as soon as anything is counted — the division is never attempted.
    pub fn evaluate(limits: &PlanLimits, counters: &UsageCounters) -> QuotaUsage {
        let mut percentages = BTreeMap::new();
        let mut warnings = Vec::new();

        for (resource, limit) in &limits.limits {
            let count = counters.count(resource);
            match limit {
                None => {
                    percentages.insert(resource.clone(), 0.0);
                }
                Some(cap) => {
                    let percentage = if *cap == 0 {
                        if count == 0 {
                            0.0
                        } else {
                            100.0
                        }
                    } else {
                        round_one_decimal(count as f64 / *cap as f64 * 100.0)
                    };
                    percentages.insert(resource.clone(), percentage);

                    if percentage >= 100.0 {
                        warnings.push(format!(
                            "Limit for {} exceeded: {} of {}",
                            label(resource),
                            count,
                            cap
                        ));
                    } else if percentage >= WARNING_THRESHOLD {
                        warnings.push(format!(
                            "You are using {}% of the {} limit",
                            percentage,
                            label(resource)
                        ));
                    }
                }
            }
        }

        QuotaUsage {
            percentages,
            warnings,
        }
    }
}

fn label(resource: &str) -> String {
    resource.replace('_', " ")
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
