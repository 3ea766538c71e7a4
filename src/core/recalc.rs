use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::status::BudgetStatusEngine;
use crate::domain::{Budget, BudgetStats, BudgetStatus, EvaluatedBudget, Transaction};

/// One budget the batch could not evaluate. The message carries the entity
/// id and field so an outer layer can build a user-facing explanation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecalculationError {
    pub budget_id: Uuid,
    pub name: String,
    pub error: String,
}

/// Outcome of one batch recalculation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecalculationReport {
    pub updated: Vec<EvaluatedBudget>,
    pub errors: Vec<RecalculationError>,
    /// Budgets whose status or percentage differ from the supplied
    /// snapshot. With no snapshot every successful evaluation counts.
    pub changed_count: usize,
    /// Inactive budgets left out of the pass.
    pub skipped: usize,
}

/// Orchestrates a full recompute of a user's budgets, e.g. after a
/// backfilled transaction or a period rollover.
pub struct RecalculationCoordinator;

impl RecalculationCoordinator {
    /// Re-evaluates every active budget against the transaction snapshot.
    ///
    /// A failing budget is recorded and skipped; the rest of the batch
    /// still completes. Running the pass twice with unchanged inputs and
    /// the first pass's `updated` as snapshot reports `changed_count == 0`.
    pub fn recalculate_all(
        budgets: &[Budget],
        transactions: &[Transaction],
        now: NaiveDate,
        snapshot: Option<&[EvaluatedBudget]>,
    ) -> RecalculationReport {
        let mut updated = Vec::new();
        let mut errors = Vec::new();
        let mut skipped = 0usize;

        for budget in budgets {
            if !budget.active {
                skipped += 1;
                continue;
            }
            match BudgetStatusEngine::evaluate(budget, transactions, now) {
                Ok(evaluated) => updated.push(evaluated),
                Err(error) => {
                    tracing::warn!(
                        budget_id = %budget.id,
                        %error,
                        "budget evaluation failed; continuing batch"
                    );
                    errors.push(RecalculationError {
                        budget_id: budget.id,
                        name: budget.name.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        let changed_count = match snapshot {
            None => updated.len(),
            Some(previous) => updated
                .iter()
                .filter(|evaluated| {
                    previous
                        .iter()
                        .find(|prior| prior.budget_id == evaluated.budget_id)
                        .map_or(true, |prior| {
                            prior.status != evaluated.status
                                || prior.percentage != evaluated.percentage
                        })
                })
                .count(),
        };

        tracing::debug!(
            updated = updated.len(),
            errors = errors.len(),
            changed_count,
            skipped,
            "recalculation pass finished"
        );

        RecalculationReport {
            updated,
            errors,
            changed_count,
            skipped,
        }
    }

    /// Dashboard rollup over an evaluated set.
    pub fn stats(evaluated: &[EvaluatedBudget]) -> BudgetStats {
        let mut stats = BudgetStats {
            total: evaluated.len(),
            ..BudgetStats::default()
        };
        for budget in evaluated {
            match budget.status {
                BudgetStatus::Active => stats.active += 1,
                BudgetStatus::NearLimit => {
                    stats.active += 1;
                    stats.near_limit += 1;
                }
                BudgetStatus::Exceeded => {
                    stats.active += 1;
                    stats.exceeded += 1;
                }
                BudgetStatus::Inactive => {}
            }
            stats.total_allocated += budget.limit;
            stats.total_spent += budget.spent;
        }
        stats
    }
}
