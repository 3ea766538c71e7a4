use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::aggregate::UsageAggregator;
use crate::core::period::PeriodCalculator;
use crate::domain::{Budget, BudgetStatus, EvaluatedBudget, Transaction};
use crate::errors::{EngineError, EngineResult};

/// Derives a budget's usage view for the period containing `now`.
pub struct BudgetStatusEngine;

impl BudgetStatusEngine {
    /// Evaluates one budget against a transaction snapshot.
    ///
    /// A zero limit is accepted and reports 0% with status `Active` — a
    /// deliberate division-by-zero default, flagged at `warn` so upstream
    /// can treat it as suspicious input. Negative limits and out-of-range
    /// notify-at thresholds are rejected at this boundary.
    pub fn evaluate(
        budget: &Budget,
        transactions: &[Transaction],
        now: NaiveDate,
    ) -> EngineResult<EvaluatedBudget> {
        Self::check_input(budget)?;

        let period =
            PeriodCalculator::current_period(budget.periodicity, budget.created_at, now)
                .map_err(|err| err.with_id(budget.id))?;
        let spent = UsageAggregator::spent_amount(transactions, budget.category_id, &period);

        let percentage = if budget.limit > Decimal::ZERO {
            spent / budget.limit * Decimal::ONE_HUNDRED
        } else {
            tracing::warn!(budget_id = %budget.id, "budget has a zero limit; reporting 0% usage");
            Decimal::ZERO
        };

        let status = if !budget.active {
            BudgetStatus::Inactive
        } else if percentage >= Decimal::ONE_HUNDRED {
            BudgetStatus::Exceeded
        } else if percentage >= budget.notify_at {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::Active
        };

        Ok(EvaluatedBudget {
            budget_id: budget.id,
            name: budget.name.clone(),
            category_id: budget.category_id,
            limit: budget.limit,
            spent,
            percentage,
            status,
            period_start: period.start,
            period_end: period.end,
            days_remaining: period.days_remaining,
        })
    }

    fn check_input(budget: &Budget) -> EngineResult<()> {
        if budget.name.trim().is_empty() {
            return Err(EngineError::invalid(
                "budget",
                budget.id,
                "name",
                "must not be empty",
            ));
        }
        if budget.limit < Decimal::ZERO {
            return Err(EngineError::invalid(
                "budget",
                budget.id,
                "limit",
                format!("must not be negative, got {}", budget.limit),
            ));
        }
        if budget.notify_at < Decimal::ZERO || budget.notify_at > Decimal::ONE_HUNDRED {
            return Err(EngineError::invalid(
                "budget",
                budget.id,
                "notify_at",
                format!("must lie in [0, 100], got {}", budget.notify_at),
            ));
        }
        Ok(())
    }
}
