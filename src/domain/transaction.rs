use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A categorized money movement, read-only to the engine.
///
/// Only expense transactions matching a budget's category and falling
/// inside the current period contribute to spend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category_id: Uuid,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(amount: Decimal, kind: TransactionKind, category_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            category_id,
            date,
        }
    }

    pub fn expense(amount: Decimal, category_id: Uuid, date: NaiveDate) -> Self {
        Self::new(amount, TransactionKind::Expense, category_id, date)
    }

    pub fn income(amount: Decimal, category_id: Uuid, date: NaiveDate) -> Self {
        Self::new(amount, TransactionKind::Income, category_id, date)
    }
}
