use std::collections::HashSet;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::core::quota::WARNING_THRESHOLD;
use crate::domain::{
    Alert, AlertKind, BudgetStatus, EvaluatedBudget, QuotaUsage, Severity, SpendingSnapshot,
};

/// Scans evaluated budgets, quota usage, and period spending aggregates
/// into a ranked alert feed.
pub struct AlertGenerator;

impl AlertGenerator {
    /// Runs every alert rule and returns the surviving alerts ordered by
    /// severity descending, then percentage descending, then id.
    ///
    /// The engine holds no dismissal state: `dismissed` is the caller's id
    /// set and only filters dismissible alerts. The "all within target"
    /// encouragement is judged before that filter, so dismissing every
    /// warning does not fabricate a positive alert.
    pub fn generate(
        evaluated: &[EvaluatedBudget],
        quota: &QuotaUsage,
        snapshot: &SpendingSnapshot,
        dismissed: &HashSet<String>,
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for budget in evaluated {
            if let Some(alert) = Self::budget_alert(budget) {
                alerts.push(alert);
            }
        }
        if let Some(alert) = Self::category_spike(snapshot) {
            alerts.push(alert);
        }
        if let Some(alert) = Self::unusual_spending(snapshot) {
            alerts.push(alert);
        }
        Self::quota_alerts(quota, &mut alerts);

        if alerts.is_empty() && snapshot.net_balance() > Decimal::ZERO {
            alerts.push(
                Alert::new(
                    AlertKind::OnTrack,
                    Severity::Low,
                    "All within target",
                    format!("Positive balance of {} this period", snapshot.net_balance()),
                )
                .with_amount(snapshot.net_balance())
                .pinned(),
            );
        }

        alerts.retain(|alert| !alert.dismissible || !dismissed.contains(&alert.id));
        alerts.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then_with(|| {
                    b.percentage
                        .unwrap_or(Decimal::MIN)
                        .cmp(&a.percentage.unwrap_or(Decimal::MIN))
                })
                .then_with(|| a.id.cmp(&b.id))
        });
        alerts
    }

    /// Exceeded and near-limit rules; mutually exclusive per budget.
    fn budget_alert(budget: &EvaluatedBudget) -> Option<Alert> {
        let rounded = budget.percentage.round_dp(0);
        let alert = match budget.status {
            BudgetStatus::Exceeded => Alert::keyed(
                AlertKind::BudgetExceeded,
                budget.budget_id,
                Severity::Critical,
                "Budget exceeded",
                format!("{} went over {}% of its limit", budget.name, rounded),
            ),
            BudgetStatus::NearLimit => {
                let severity = if budget.percentage >= Decimal::from(95) {
                    Severity::High
                } else {
                    Severity::Medium
                };
                Alert::keyed(
                    AlertKind::BudgetWarning,
                    budget.budget_id,
                    severity,
                    "Budget near its limit",
                    format!("{} reached {}% of its limit", budget.name, rounded),
                )
            }
            BudgetStatus::Active | BudgetStatus::Inactive => return None,
        };
        Some(
            alert
                .with_amount(budget.spent)
                .with_limit(budget.limit)
                .with_percentage(budget.percentage),
        )
    }

    /// Flags a single category carrying more than 40% of period spend.
    fn category_spike(snapshot: &SpendingSnapshot) -> Option<Alert> {
        let total = snapshot.total_expenses();
        if total <= Decimal::ZERO {
            return None;
        }
        // Ties break on name so input order cannot change the outcome.
        let top = snapshot
            .by_category
            .iter()
            .max_by(|a, b| a.amount.cmp(&b.amount).then_with(|| b.name.cmp(&a.name)))?;
        let share = top.amount / total * Decimal::ONE_HUNDRED;
        if share <= Decimal::from(40) {
            return None;
        }
        let severity = if share > Decimal::from(60) {
            Severity::High
        } else {
            Severity::Medium
        };
        Some(
            Alert::keyed(
                AlertKind::CategorySpike,
                &top.name,
                severity,
                "High category concentration",
                format!(
                    "{} accounts for {}% of this period's spend",
                    top.name,
                    share.round_dp(0)
                ),
            )
            .with_category(top.name.clone())
            .with_amount(top.amount)
            .with_percentage(share),
        )
    }

    /// Flags a recent 3-day spend average above 1.5x the period's daily
    /// average. Skipped when no days are recorded.
    fn unusual_spending(snapshot: &SpendingSnapshot) -> Option<Alert> {
        let daily_average = snapshot.daily_average()?;
        if daily_average <= Decimal::ZERO {
            return None;
        }
        let recent = snapshot.recent_average(3)?;
        if recent <= daily_average * Decimal::new(15, 1) {
            return None;
        }
        Some(
            Alert::new(
                AlertKind::UnusualSpending,
                Severity::Medium,
                "Spending above normal",
                "Recent spending is more than 50% above the period's daily average",
            )
            .with_amount(recent),
        )
    }

    /// Plan resources at or past the quota warning threshold join the feed.
    fn quota_alerts(quota: &QuotaUsage, alerts: &mut Vec<Alert>) {
        for (resource, percentage) in &quota.percentages {
            if *percentage < WARNING_THRESHOLD {
                continue;
            }
            let (severity, title) = if *percentage >= 100.0 {
                (Severity::High, "Plan limit exceeded")
            } else {
                (Severity::Medium, "Plan limit almost reached")
            };
            let mut alert = Alert::keyed(
                AlertKind::QuotaWarning,
                resource,
                severity,
                title,
                format!(
                    "{} usage is at {}% of the plan limit",
                    resource.replace('_', " "),
                    percentage
                ),
            );
            if let Some(value) = Decimal::from_f64(*percentage) {
                alert = alert.with_percentage(value);
            }
            alerts.push(alert);
        }
    }
}
