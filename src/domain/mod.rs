pub mod alert;
pub mod budget;
pub mod plan;
pub mod snapshot;
pub mod transaction;

pub use alert::{Alert, AlertKind, Severity};
pub use budget::{Budget, BudgetStats, BudgetStatus, EvaluatedBudget, Periodicity};
pub use plan::{PlanLimits, QuotaUsage, UsageCounters};
pub use snapshot::{CategorySpend, DailyFlow, SpendingSnapshot};
pub use transaction::{Transaction, TransactionKind};
