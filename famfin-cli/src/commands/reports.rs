use anyhow::{Context, Result, anyhow};
use clap::Subcommand;
use shared::models::{DashboardSummary, MonthlyReport, ReportPeriod};

use super::context::CliContext;

#[derive(Subcommand, Debug)]
pub enum ReportsCommand {
    /// Income, spending and top categories for one month
    Monthly {
        #[arg(long)]
        year: i32,

        /// 1 to 12
        #[arg(long)]
        month: u32,
    },
    /// Dashboard totals
    Summary,
}

pub async fn run(ctx: &CliContext, command: ReportsCommand) -> Result<()> {
    match command {
        ReportsCommand::Monthly { year, month } => {
            let period = ReportPeriod::new(year, month)
                .ok_or_else(|| anyhow!("month must be between 1 and 12, got {month}"))?;
            let report = ctx
                .api
                .monthly_report(period)
                .await
                .context("failed to load monthly report")?;
            print!("{}", render_monthly(period, &report));
            Ok(())
        }
        ReportsCommand::Summary => {
            let summary = ctx
                .api
                .dashboard_summary()
                .await
                .context("failed to load summary")?;
            print!("{}", render_summary(&summary));
            Ok(())
        }
    }
}

fn render_monthly(period: ReportPeriod, report: &MonthlyReport) -> String {
    let mut out = format!("Report for {}-{:02}\n", period.year, period.month);
    out.push_str(&format!("income            {:>12.2}\n", report.income));
    out.push_str(&format!("expenses          {:>12.2}\n", report.expenses));
    out.push_str(&format!("savings           {:>12.2}\n", report.savings));
    out.push_str(&format!("remaining budget  {:>12.2}\n", report.remaining_budget));
    if !report.top_expenses.is_empty() {
        out.push_str("top expenses\n");
        for entry in &report.top_expenses {
            out.push_str(&format!("  {:<16}{:>12.2}\n", entry.category, entry.amount));
        }
    }
    out
}

fn render_summary(summary: &DashboardSummary) -> String {
    format!(
        "total wealth      {:>12.2}\nmonthly income    {:>12.2}\nmonthly spending  {:>12.2}\nbudget status     {:>11.1}%\n",
        summary.total_wealth, summary.monthly_income, summary.monthly_spending, summary.budget_status
    )
}
