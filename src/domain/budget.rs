use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};

/// Recurrence of a budget's accounting window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Periodicity {
    Weekly,
    Biweekly,
    Monthly,
}

impl Periodicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Weekly => "weekly",
            Periodicity::Biweekly => "biweekly",
            Periodicity::Monthly => "monthly",
        }
    }
}

impl FromStr for Periodicity {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "weekly" => Ok(Periodicity::Weekly),
            "biweekly" => Ok(Periodicity::Biweekly),
            "monthly" => Ok(Periodicity::Monthly),
            other => Err(EngineError::UnknownPeriodicity(other.to_string())),
        }
    }
}

/// A spending cap for a category over a recurring period.
///
/// `created_at` doubles as the anchor date for rolling (weekly/biweekly)
/// periods unless the caller resets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub limit: Decimal,
    pub periodicity: Periodicity,
    #[serde(default = "Budget::default_notify_at")]
    pub notify_at: Decimal,
    pub active: bool,
    pub created_at: NaiveDate,
}

impl Budget {
    pub fn new(
        name: impl Into<String>,
        category_id: Uuid,
        limit: Decimal,
        periodicity: Periodicity,
        created_at: NaiveDate,
    ) -> EngineResult<Self> {
        let budget = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category_id,
            limit,
            periodicity,
            notify_at: Self::default_notify_at(),
            active: true,
            created_at,
        };
        budget.validate()?;
        Ok(budget)
    }

    pub fn with_notify_at(mut self, notify_at: Decimal) -> EngineResult<Self> {
        self.notify_at = notify_at;
        self.validate()?;
        Ok(self)
    }

    pub fn default_notify_at() -> Decimal {
        Decimal::from(80)
    }

    /// Construction invariants: non-empty name, strictly positive limit,
    /// notify-at inside [0, 100].
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::invalid(
                "budget",
                self.id,
                "name",
                "must not be empty",
            ));
        }
        if self.limit <= Decimal::ZERO {
            return Err(EngineError::invalid(
                "budget",
                self.id,
                "limit",
                format!("must be strictly positive, got {}", self.limit),
            ));
        }
        if self.notify_at < Decimal::ZERO || self.notify_at > Decimal::ONE_HUNDRED {
            return Err(EngineError::invalid(
                "budget",
                self.id,
                "notify_at",
                format!("must lie in [0, 100], got {}", self.notify_at),
            ));
        }
        Ok(())
    }
}

/// Lifecycle classification of a budget's current period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Active,
    NearLimit,
    Exceeded,
    Inactive,
}

/// Derived usage view of a budget for its current period.
///
/// Recomputed on demand and always replaced wholesale, never mutated in
/// place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluatedBudget {
    pub budget_id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub limit: Decimal,
    pub spent: Decimal,
    pub percentage: Decimal,
    pub status: BudgetStatus,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub days_remaining: i64,
}

/// Aggregate counters over one evaluation pass, as shown on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetStats {
    pub total: usize,
    pub active: usize,
    pub near_limit: usize,
    pub exceeded: usize,
    pub total_allocated: Decimal,
    pub total_spent: Decimal,
}
