use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::period::Period;
use crate::domain::{Transaction, TransactionKind};

/// Sums a transaction set into the spend figure for one budget category.
pub struct UsageAggregator;

impl UsageAggregator {
    /// Total of expense transactions for `category_id` dated inside
    /// `period` (both ends inclusive). Pure and deterministic, so it is
    /// safe to call repeatedly during recalculation. Negative totals are
    /// clamped to zero.
    pub fn spent_amount(
        transactions: &[Transaction],
        category_id: Uuid,
        period: &Period,
    ) -> Decimal {
        let total: Decimal = transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense)
            .filter(|txn| txn.category_id == category_id)
            .filter(|txn| period.contains(txn.date))
            .map(|txn| txn.amount)
            .sum();
        if total < Decimal::ZERO {
            tracing::warn!(%category_id, %total, "negative expense total clamped to zero");
            Decimal::ZERO
        } else {
            total
        }
    }
}
