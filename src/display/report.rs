//! Terminal rendering of dashboard reports

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{
    format_balance_colored, format_currency, format_percentage, progress_bar, separator,
};
use crate::models::TransactionKind;
use crate::reports::spending::top_categories;
use crate::reports::{DashboardReport, GoalProgress, MonthlyPoint, PeriodMetrics};

const BAR_WIDTH: usize = 20;

/// Which sections to render
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub currency_symbol: String,
    pub show_monthly: bool,
    /// Maximum transactions listed; `None` lists all
    pub transaction_limit: Option<usize>,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            show_monthly: true,
            transaction_limit: None,
            color: false,
        }
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Render a full report
pub fn format_report(report: &DashboardReport, options: &RenderOptions) -> String {
    let symbol = options.currency_symbol.as_str();
    let mut sections = vec![
        format_total_balance(report.total_balance, symbol, options.color),
        format_period_metrics(&report.metrics, &report.period.label(), symbol, options.color),
        format_category_spend(report, symbol),
        format_goal_progress(&report.goal_progress, symbol),
    ];

    if options.show_monthly {
        sections.push(format_monthly_series(&report.monthly, symbol));
    }
    sections.push(format_transactions(report, symbol, options.transaction_limit));

    sections.join(&format!("\n{}\n\n", separator(60)))
}

pub fn format_total_balance(total: f64, symbol: &str, color: bool) -> String {
    let value = if color {
        format_balance_colored(total, symbol)
    } else {
        format_currency(total, symbol)
    };
    format!("Total available (all time): {}\n", value)
}

pub fn format_period_metrics(
    metrics: &PeriodMetrics,
    label: &str,
    symbol: &str,
    color: bool,
) -> String {
    let balance = if color {
        format_balance_colored(metrics.balance, symbol)
    } else {
        format_currency(metrics.balance, symbol)
    };

    let mut output = format!("Summary for {}\n", label);
    output.push_str(&format!("  Income:  {}\n", format_currency(metrics.income, symbol)));
    output.push_str(&format!("  Expense: {}\n", format_currency(metrics.expense, symbol)));
    output.push_str(&format!("  Balance: {}", balance));
    if metrics.balance < 0.0 {
        output.push_str("  (negative)");
    }
    output.push('\n');
    output
}

pub fn format_category_spend(report: &DashboardReport, symbol: &str) -> String {
    let mut output = format!("Spending by category in {}\n", report.period.label());
    if report.category_spend.is_empty() {
        output.push_str("No expenses in this period.\n");
        return output;
    }

    let ranked = top_categories(&report.category_spend, report.category_spend.len());
    let rows = ranked.into_iter().map(|(category, spent)| CategoryRow {
        category: category.to_string(),
        spent: format_currency(spent, symbol),
    });
    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');
    output
}

pub fn format_goal_progress(progress: &[GoalProgress], symbol: &str) -> String {
    let mut output = String::from("Monthly goals\n");
    if progress.is_empty() {
        output.push_str("No goal categories configured.\n");
        return output;
    }

    let name_width = progress
        .iter()
        .map(|p| p.category.chars().count())
        .max()
        .unwrap_or(0);

    for p in progress {
        output.push_str(&format!(
            "  {:<name_width$}  {} / {}  {} {}\n",
            p.category,
            format_currency(p.spent, symbol),
            format_currency(p.goal, symbol),
            progress_bar(p.capped_ratio(), BAR_WIDTH),
            format_percentage(p.ratio),
            name_width = name_width,
        ));
        if p.exceeded {
            output.push_str(&format!("    ! Goal exceeded for {}\n", p.category));
        } else if p.goal > 0.0 {
            output.push_str(&format!(
                "    {} left\n",
                format_currency(p.remaining(), symbol)
            ));
        }
    }
    output
}

/// Render the long-form series as one row per month
pub fn format_monthly_series(series: &[MonthlyPoint], symbol: &str) -> String {
    let mut output = String::from("Monthly overview\n");
    if series.is_empty() {
        output.push_str("No transactions loaded.\n");
        return output;
    }

    let mut rows: Vec<MonthRow> = Vec::new();
    for point in series {
        if rows.last().map(|r| r.month.as_str()) != Some(point.label.as_str()) {
            rows.push(MonthRow {
                month: point.label.clone(),
                income: format_currency(0.0, symbol),
                expense: format_currency(0.0, symbol),
            });
        }
        if let Some(row) = rows.last_mut() {
            let value = format_currency(point.total, symbol);
            match point.kind {
                TransactionKind::Income => row.income = value,
                TransactionKind::Expense => row.expense = value,
            }
        }
    }

    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');
    output
}

pub fn format_transactions(report: &DashboardReport, symbol: &str, limit: Option<usize>) -> String {
    let mut output = format!("Transactions in {}\n", report.period.label());
    if report.transactions.is_empty() {
        output.push_str("No transactions in this period.\n");
        return output;
    }

    let shown = limit.unwrap_or(report.transactions.len());
    let rows = report.transactions.iter().take(shown).map(|t| TransactionRow {
        date: t.date.format("%d/%m/%Y").to_string(),
        category: t.category.clone(),
        kind: t.kind.to_string(),
        amount: format_currency(t.amount, symbol),
        description: t.description.clone(),
    });
    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');

    if shown < report.transactions.len() {
        output.push_str(&format!(
            "... {} more not shown\n",
            report.transactions.len() - shown
        ));
    }
    output
}
