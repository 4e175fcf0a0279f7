use serde::{Deserialize, Serialize};

/// Spending in one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// Spending on one calendar day (`YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyAmount {
    pub date: String,
    pub amount: f64,
}

/// Response of `GET /reports/monthly?year&month`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub remaining_budget: f64,
    #[serde(default)]
    pub top_expenses: Vec<CategoryAmount>,
    #[serde(default)]
    pub daily_spending: Vec<DailyAmount>,
}

impl MonthlyReport {
    /// Largest single-category expense, if any.
    #[must_use]
    pub fn largest_expense(&self) -> Option<&CategoryAmount> {
        self.top_expenses
            .iter()
            .max_by(|a, b| a.amount.total_cmp(&b.amount))
    }
}

/// Response of `GET /reports/summary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_wealth: f64,
    pub monthly_spending: f64,
    pub monthly_income: f64,
    /// Share of the monthly budget already spent, as reported by the API.
    pub budget_status: f64,
}

/// Year/month pair addressing a monthly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportPeriod {
    /// Build a period, rejecting months outside `1..=12`.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Query pairs for `GET /reports/monthly`.
    #[must_use]
    pub fn query(self) -> [(&'static str, String); 2] {
        [
            ("year", self.year.to_string()),
            ("month", self.month.to_string()),
        ]
    }
}
