use budget_utils::{
    calculate_monthly_value, init,
    summary::{summarize, BudgetEntry},
    Frequency,
};

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn monthly_conversion_smoke() {
    init();

    assert!(approx(calculate_monthly_value(100.0, "weekly"), 433.0));
    assert!(approx(calculate_monthly_value(100.0, "biweekly"), 217.0));
    assert!(approx(calculate_monthly_value(1200.0, "annually"), 100.0));
    assert!(approx(calculate_monthly_value(100.0, "monthly"), 100.0));
    assert!(approx(calculate_monthly_value(100.0, "unknown"), 100.0));
    assert!(approx(
        calculate_monthly_value(52.0, Frequency::Weekly),
        52.0 * 4.33
    ));
}

#[test]
fn dashboard_summary_smoke() {
    init();

    let entries = vec![
        BudgetEntry::income("Paycheck", 1500.0, Frequency::Biweekly),
        BudgetEntry::expense("Insurance", 600.0, Frequency::Annually),
        BudgetEntry::expense("Gym", 40.0, Frequency::from_tag("Monthly")),
    ];
    let summary = summarize(&entries);
    assert!(approx(summary.income, 3255.0));
    assert!(approx(summary.expenses, 90.0));
    let rate = summary.savings_rate.expect("income present");
    assert!(approx(rate, (3255.0 - 90.0) / 3255.0 * 100.0));
}
