//! Transaction history filtering and summaries.

use crate::calendar::DateRange;
use crate::{Transaction, TransactionKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    pub const ALL: [TransactionFilter; 3] = [
        TransactionFilter::All,
        TransactionFilter::Income,
        TransactionFilter::Expense,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionFilter::All => "All",
            TransactionFilter::Income => "Income",
            TransactionFilter::Expense => "Expenses",
        }
    }

    pub fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Income => kind == TransactionKind::Income,
            TransactionFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// Criteria applied by the transactions page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    pub filter: TransactionFilter,
    pub search: String,
    /// Only a complete range narrows the list
    pub range: Option<DateRange>,
}

impl TransactionQuery {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.filter.matches(transaction.kind) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !transaction.name.to_lowercase().contains(&needle)
            && !transaction.category.to_lowercase().contains(&needle)
        {
            return false;
        }
        match &self.range {
            Some(range) if range.is_complete() => range.contains(transaction.date),
            _ => true,
        }
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    /// Absolute value of all expenses
    pub expense: f64,
}

impl Totals {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let (income, expense) = transactions
        .iter()
        .fold((0.0, 0.0), |(income, expense), t| match t.kind {
            TransactionKind::Income => (income + t.amount, expense),
            TransactionKind::Expense => (income, expense + t.amount),
        });
    Totals {
        income,
        expense: expense.abs(),
    }
}

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Salary" => "💼",
        "Freelance" => "💻",
        "Entertainment" => "🎬",
        "Food" => "🍔",
        "Utilities" => "⚡",
        "Shopping" => "🛍️",
        "Investment" => "📈",
        "Transportation" => "⛽",
        "Education" => "📚",
        _ => "💳",
    }
}

/// `$1,234.50` style amount; negatives get a leading minus
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Signed amount as shown in transaction lists, e.g. `+$5,000.00`
pub fn format_signed(amount: f64) -> String {
    if amount > 0.0 {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::NaiveDate;

    #[test]
    fn test_filter_by_kind() {
        let all = mock::transactions();
        let income = TransactionQuery {
            filter: TransactionFilter::Income,
            ..Default::default()
        };
        let found = income.apply(&all);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|t| t.kind == TransactionKind::Income));

        let expense = TransactionQuery {
            filter: TransactionFilter::Expense,
            ..Default::default()
        };
        assert_eq!(expense.apply(&all).len(), 7);
        assert_eq!(TransactionQuery::default().apply(&all).len(), 10);
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let all = mock::transactions();
        let query = TransactionQuery {
            search: "FOOD".to_string(),
            ..Default::default()
        };
        let names: Vec<&str> = query.apply(&all).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Grocery Store", "Restaurant"]);

        let query = TransactionQuery {
            filter: TransactionFilter::Income,
            search: "net".to_string(),
            ..Default::default()
        };
        assert!(query.apply(&all).is_empty());
    }

    #[test]
    fn test_date_range_filter() {
        let all = mock::transactions();
        let day = |d| NaiveDate::from_ymd_opt(2024, 10, d);
        let query = TransactionQuery {
            range: Some(DateRange {
                start: day(24),
                end: day(28),
            }),
            ..Default::default()
        };
        assert_eq!(query.apply(&all).len(), 4);

        // Pending range leaves the list untouched
        let pending = TransactionQuery {
            range: Some(DateRange {
                start: day(24),
                end: None,
            }),
            ..Default::default()
        };
        assert_eq!(pending.apply(&all).len(), 10);
    }

    #[test]
    fn test_totals() {
        let totals = totals(&mock::transactions());
        assert!((totals.income - 8700.0).abs() < 1e-9);
        assert!((totals.expense - 773.98).abs() < 1e-9);
        assert!(totals.net() > 0.0);
    }

    #[test]
    fn test_category_icons() {
        assert_eq!(category_icon("Food"), "🍔");
        assert_eq!(category_icon("Crypto"), "💳");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(5000.0), "$5,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-15.99), "-$15.99");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_signed(2500.0), "+$2,500.00");
        assert_eq!(format_signed(-85.0), "-$85.00");
    }
}
