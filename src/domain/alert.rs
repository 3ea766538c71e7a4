use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How urgently an alert should be surfaced. Ordering is the ranking used
/// by the alert feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Enumeration of the alert rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    BudgetExceeded,
    BudgetWarning,
    CategorySpike,
    UnusualSpending,
    QuotaWarning,
    OnTrack,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::BudgetExceeded => "budget_exceeded",
            AlertKind::BudgetWarning => "budget_warning",
            AlertKind::CategorySpike => "category_spike",
            AlertKind::UnusualSpending => "unusual_spending",
            AlertKind::QuotaWarning => "quota_warning",
            AlertKind::OnTrack => "on_track",
        }
    }
}

/// A transient, regenerable notice surfaced when a threshold is crossed.
///
/// Ids are deterministic (`{kind}` or `{kind}_{subject}`) so a caller-held
/// dismissed-id set keeps filtering across evaluation passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
    pub dismissible: bool,
}

impl Alert {
    /// An alert whose kind alone identifies it (at most one per feed).
    pub fn new(
        kind: AlertKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: kind.as_str().to_string(),
            kind,
            severity,
            title: title.into(),
            message: message.into(),
            category: None,
            amount: None,
            limit: None,
            percentage: None,
            dismissible: true,
        }
    }

    /// An alert keyed by the entity that triggered it.
    pub fn keyed(
        kind: AlertKind,
        subject: impl std::fmt::Display,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut alert = Self::new(kind, severity, title, message);
        alert.id = format!("{}_{}", kind.as_str(), subject);
        alert
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_limit(mut self, limit: Decimal) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = Some(percentage);
        self
    }

    /// Marks the alert as not dismissible by the user.
    pub fn pinned(mut self) -> Self {
        self.dismissible = false;
        self
    }
}
