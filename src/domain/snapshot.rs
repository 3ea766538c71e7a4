use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spend accumulated by one category over the period under review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpend {
    pub name: String,
    pub amount: Decimal,
}

impl CategorySpend {
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// One day of income/expense flow inside the period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyFlow {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
}

impl DailyFlow {
    pub fn new(date: NaiveDate, income: Decimal, expenses: Decimal) -> Self {
        Self {
            date,
            income,
            expenses,
        }
    }
}

/// Period-level spending aggregates supplied by the dashboard layer and
/// consumed by the alert generator. `daily` is expected in chronological
/// order; `by_category` should cover the same window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpendingSnapshot {
    #[serde(default)]
    pub by_category: Vec<CategorySpend>,
    #[serde(default)]
    pub daily: Vec<DailyFlow>,
}

impl SpendingSnapshot {
    pub fn new(by_category: Vec<CategorySpend>, daily: Vec<DailyFlow>) -> Self {
        Self { by_category, daily }
    }

    /// Total period expense across the category breakdown.
    pub fn total_expenses(&self) -> Decimal {
        self.by_category.iter().map(|entry| entry.amount).sum()
    }

    /// Income minus expenses over the daily series.
    pub fn net_balance(&self) -> Decimal {
        self.daily
            .iter()
            .map(|day| day.income - day.expenses)
            .sum()
    }

    /// Mean daily expense over the whole series; `None` if no days recorded.
    pub fn daily_average(&self) -> Option<Decimal> {
        if self.daily.is_empty() {
            return None;
        }
        let total: Decimal = self.daily.iter().map(|day| day.expenses).sum();
        Some(total / Decimal::from(self.daily.len() as u64))
    }

    /// Mean daily expense over the most recent `days` entries.
    pub fn recent_average(&self, days: usize) -> Option<Decimal> {
        if self.daily.is_empty() || days == 0 {
            return None;
        }
        let tail: Vec<&DailyFlow> = self.daily.iter().rev().take(days).collect();
        let total: Decimal = tail.iter().map(|day| day.expenses).sum();
        Some(total / Decimal::from(tail.len() as u64))
    }
}
