//! Monthly budget figures shown on the dashboard.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::currency::{format_currency_with, format_percentage_with, FormatOptions};
use crate::frequency::Frequency;

const MISSING_RATE: &str = "—";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

/// One recurring line item, e.g. a salary or a rent payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetEntry {
    pub label: String,
    pub amount: f64,
    #[serde(default)]
    pub frequency: Frequency,
    pub kind: EntryKind,
}

impl BudgetEntry {
    pub fn income(label: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            label: label.into(),
            amount,
            frequency,
            kind: EntryKind::Income,
        }
    }

    pub fn expense(label: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            label: label.into(),
            amount,
            frequency,
            kind: EntryKind::Expense,
        }
    }

    pub fn monthly_amount(&self) -> f64 {
        self.frequency.to_monthly(self.amount)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct MonthlySummary {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    /// Share of income left after expenses, in percentage units.
    pub savings_rate: Option<f64>,
    pub entry_count: usize,
}

/// Display strings for a [`MonthlySummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLines {
    pub income: String,
    pub expenses: String,
    pub net: String,
    pub savings_rate: String,
}

impl MonthlySummary {
    pub fn render(&self, config: &Config) -> SummaryLines {
        let options = FormatOptions {
            negative_style: config.negative_style,
            ..FormatOptions::default()
        };
        let money = |amount: f64| {
            format_currency_with(amount, &config.currency, &config.locale, &options)
        };
        SummaryLines {
            income: money(self.income),
            expenses: money(self.expenses),
            net: money(self.net),
            savings_rate: self
                .savings_rate
                .map(|rate| {
                    format_percentage_with(rate, &config.locale, config.percentage_precision)
                })
                .unwrap_or_else(|| MISSING_RATE.to_string()),
        }
    }
}

/// Totals the monthly equivalents of `entries` by kind.
pub fn summarize(entries: &[BudgetEntry]) -> MonthlySummary {
    let (income, expenses) =
        entries
            .iter()
            .fold((0.0, 0.0), |(income, expenses), entry| match entry.kind {
                EntryKind::Income => (income + entry.monthly_amount(), expenses),
                EntryKind::Expense => (income, expenses + entry.monthly_amount()),
            });
    let net = income - expenses;
    let savings_rate = (income > 0.0).then(|| net / income * 100.0);
    tracing::debug!(
        entries = entries.len(),
        income,
        expenses,
        "summarized monthly budget"
    );
    MonthlySummary {
        income,
        expenses,
        net,
        savings_rate,
        entry_count: entries.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household() -> Vec<BudgetEntry> {
        vec![
            BudgetEntry::income("Salary", 2000.0, Frequency::Biweekly),
            BudgetEntry::income("Bonus", 1200.0, Frequency::Annually),
            BudgetEntry::expense("Rent", 1500.0, Frequency::Monthly),
            BudgetEntry::expense("Groceries", 100.0, Frequency::Weekly),
        ]
    }

    #[test]
    fn totals_use_monthly_equivalents() {
        let summary = summarize(&household());
        assert!((summary.income - 4440.0).abs() < 1e-9);
        assert!((summary.expenses - 1933.0).abs() < 1e-9);
        assert!((summary.net - 2507.0).abs() < 1e-9);
        assert_eq!(summary.entry_count, 4);
    }

    #[test]
    fn savings_rate_requires_income() {
        let summary = summarize(&[BudgetEntry::expense("Rent", 900.0, Frequency::Monthly)]);
        assert_eq!(summary.savings_rate, None);
        assert!((summary.net + 900.0).abs() < 1e-9);
    }

    #[test]
    fn empty_summary_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary, MonthlySummary::default());
    }

    #[test]
    fn render_formats_each_figure() {
        let entries = vec![
            BudgetEntry::income("Salary", 4000.0, Frequency::Monthly),
            BudgetEntry::expense("Rent", 3000.0, Frequency::Monthly),
        ];
        let lines = summarize(&entries).render(&Config::default());
        assert_eq!(lines.income, "$4,000.00");
        assert_eq!(lines.expenses, "$3,000.00");
        assert_eq!(lines.net, "$1,000.00");
        assert_eq!(lines.savings_rate, "25.0%");
    }

    #[test]
    fn render_marks_missing_rate_and_negative_net() {
        let entries = vec![BudgetEntry::expense("Rent", 1234.5, Frequency::Monthly)];
        let lines = summarize(&entries).render(&Config::default());
        assert_eq!(lines.net, "-$1,234.50");
        assert_eq!(lines.savings_rate, "—");
    }
}
