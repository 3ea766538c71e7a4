use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use spendguard::core::{
    AlertGenerator, BudgetStatusEngine, QuotaEvaluator, RecalculationCoordinator,
};
use spendguard::domain::{
    plan::resources, AlertKind, Budget, BudgetStatus, Periodicity, PlanLimits, QuotaUsage,
    Severity, SpendingSnapshot, Transaction, UsageCounters,
};
use uuid::Uuid;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn monthly_budget(limit: Decimal) -> Budget {
    Budget::new(
        "Groceries",
        Uuid::new_v4(),
        limit,
        Periodicity::Monthly,
        date(1, 1),
    )
    .unwrap()
}

fn spend(budget: &Budget, amount: Decimal) -> Vec<Transaction> {
    vec![Transaction::expense(amount, budget.category_id, date(5, 10))]
}

fn no_dismissals() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn scenario_a_near_limit_at_eighty_percent() {
    let budget = monthly_budget(dec!(1000));
    let evaluated =
        BudgetStatusEngine::evaluate(&budget, &spend(&budget, dec!(800)), date(5, 15)).unwrap();
    assert_eq!(evaluated.percentage, dec!(80));
    assert_eq!(evaluated.status, BudgetStatus::NearLimit);

    let alerts = AlertGenerator::generate(
        &[evaluated],
        &QuotaUsage::default(),
        &SpendingSnapshot::default(),
        &no_dismissals(),
    );
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::BudgetWarning);
    assert_eq!(alerts[0].severity, Severity::Medium);
}

#[test]
fn scenario_b_exceeded_at_one_hundred_twenty_percent() {
    let budget = monthly_budget(dec!(1000));
    let evaluated =
        BudgetStatusEngine::evaluate(&budget, &spend(&budget, dec!(1200)), date(5, 15)).unwrap();
    assert_eq!(evaluated.percentage, dec!(120));
    assert_eq!(evaluated.status, BudgetStatus::Exceeded);

    let alerts = AlertGenerator::generate(
        &[evaluated],
        &QuotaUsage::default(),
        &SpendingSnapshot::default(),
        &no_dismissals(),
    );
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::BudgetExceeded);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[0].percentage, Some(dec!(120)));
}

#[test]
fn scenario_c_quota_warning_at_eighty_percent() {
    let limits = PlanLimits::new().with_limit(resources::TRANSACTIONS_THIS_MONTH, Some(50));
    let counters = UsageCounters::new().with_count(resources::TRANSACTIONS_THIS_MONTH, 40);
    let usage = QuotaEvaluator::evaluate(&limits, &counters);
    assert_eq!(usage.percentages[resources::TRANSACTIONS_THIS_MONTH], 80.0);
    assert_eq!(usage.warnings.len(), 1);
}

#[test]
fn scenario_d_unbounded_limit_stays_silent() {
    let limits = PlanLimits::new().with_limit(resources::PHONES, None);
    let counters = UsageCounters::new().with_count(resources::PHONES, 999);
    let usage = QuotaEvaluator::evaluate(&limits, &counters);
    assert_eq!(usage.percentages[resources::PHONES], 0.0);
    assert!(usage.warnings.is_empty());
}

#[test]
fn scenario_e_critical_orders_before_warning() {
    let over = monthly_budget(dec!(1000));
    let near = monthly_budget(dec!(1000));
    let transactions = vec![
        Transaction::expense(dec!(1200), over.category_id, date(5, 10)),
        Transaction::expense(dec!(850), near.category_id, date(5, 10)),
    ];
    let report = RecalculationCoordinator::recalculate_all(
        &[near.clone(), over.clone()],
        &transactions,
        date(5, 15),
        None,
    );
    let alerts = AlertGenerator::generate(
        &report.updated,
        &QuotaUsage::default(),
        &SpendingSnapshot::default(),
        &no_dismissals(),
    );
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].id, format!("budget_exceeded_{}", over.id));
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[1].id, format!("budget_warning_{}", near.id));
}

#[test]
fn recalculation_is_idempotent_given_a_snapshot() {
    let budgets = vec![monthly_budget(dec!(1000)), monthly_budget(dec!(250))];
    let transactions = vec![
        Transaction::expense(dec!(430.55), budgets[0].category_id, date(5, 3)),
        Transaction::expense(dec!(99.99), budgets[1].category_id, date(5, 20)),
    ];
    let now = date(5, 21);

    let first = RecalculationCoordinator::recalculate_all(&budgets, &transactions, now, None);
    let second = RecalculationCoordinator::recalculate_all(
        &budgets,
        &transactions,
        now,
        Some(&first.updated),
    );
    assert_eq!(second.changed_count, 0);
    assert_eq!(second.updated, first.updated);
}

#[test]
fn dismissed_ids_filter_repeat_alerts() {
    let budget = monthly_budget(dec!(1000));
    let evaluated =
        BudgetStatusEngine::evaluate(&budget, &spend(&budget, dec!(1200)), date(5, 15)).unwrap();

    let first = AlertGenerator::generate(
        std::slice::from_ref(&evaluated),
        &QuotaUsage::default(),
        &SpendingSnapshot::default(),
        &no_dismissals(),
    );
    let dismissed: HashSet<String> = first.iter().map(|alert| alert.id.clone()).collect();

    let second = AlertGenerator::generate(
        &[evaluated],
        &QuotaUsage::default(),
        &SpendingSnapshot::default(),
        &dismissed,
    );
    assert!(second.is_empty());
}

#[test]
fn evaluation_carries_days_remaining_from_period() {
    let budget = Budget::new(
        "Coffee",
        Uuid::new_v4(),
        dec!(60),
        Periodicity::Weekly,
        date(5, 6),
    )
    .unwrap();
    let evaluated = BudgetStatusEngine::evaluate(&budget, &[], date(5, 8)).unwrap();
    assert_eq!(evaluated.period_start, date(5, 6));
    assert_eq!(evaluated.period_end, date(5, 12));
    assert_eq!(evaluated.days_remaining, 4);
}

#[test]
fn alert_feed_serializes_with_snake_case_tags() {
    let budget = monthly_budget(dec!(100));
    let evaluated =
        BudgetStatusEngine::evaluate(&budget, &spend(&budget, dec!(150)), date(5, 15)).unwrap();
    let alerts = AlertGenerator::generate(
        &[evaluated],
        &QuotaUsage::default(),
        &SpendingSnapshot::default(),
        &no_dismissals(),
    );
    let value = serde_json::to_value(&alerts[0]).unwrap();
    assert_eq!(value["kind"], "budget_exceeded");
    assert_eq!(value["severity"], "critical");
    assert!(value["dismissible"].as_bool().unwrap());
}
