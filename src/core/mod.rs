pub mod aggregate;
pub mod alerts;
pub mod period;
pub mod quota;
pub mod recalc;
pub mod status;

pub use aggregate::UsageAggregator;
pub use alerts::AlertGenerator;
pub use period::{Period, PeriodCalculator};
pub use quota::QuotaEvaluator;
pub use recalc::{RecalculationCoordinator, RecalculationError, RecalculationReport};
pub use status::BudgetStatusEngine;
