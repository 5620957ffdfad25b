//! Plain-text rendering of a statement report.

use cashlens_analytics::{CashFlowDirection, StatementReport};

fn direction_marker(direction: CashFlowDirection) -> &'static str {
    match direction {
        CashFlowDirection::Negative => "▼",
        CashFlowDirection::Zero => "–",
        CashFlowDirection::Positive => "▲",
    }
}

pub fn print_report(report: &StatementReport) {
    match report.bounds {
        Some((min, max)) => println!("Statement period: {min} to {max}"),
        None => println!("Statement period: (empty statement)"),
    }
    if report.range.is_selected() {
        // Both endpoints are present when is_selected() holds.
        if let (Some(start), Some(end)) = (report.range.start, report.range.end) {
            println!("Filtered to:      {start} to {end}");
        }
    }
    println!("Transactions:     {}\n", report.row_count);

    let flow = &report.cash_flow;
    println!("Total Credit:     {}", flow.total_credited);
    println!("Total Debit:      {}", flow.total_debited);
    println!(
        "Net Cash Flow:    {} ({}%) {}",
        flow.net_cash_flow,
        flow.net_cash_flow_percent,
        direction_marker(flow.direction())
    );

    println!("\nCategory-wise Credit");
    if report.credit_by_category.is_empty() {
        println!("  (none)");
    }
    for total in &report.credit_by_category {
        println!("  {:<32} {:>14.2}", total.category, total.amount);
    }

    println!("\nCategory-wise Debit");
    if report.debit_by_category.is_empty() {
        println!("  (none)");
    }
    for total in &report.debit_by_category {
        println!("  {:<32} {:>14.2}", total.category, total.amount);
    }

    println!("\nDay-wise Credit & Debit");
    if report.by_day_of_week.is_empty() {
        println!("  (none)");
    } else {
        println!("  {:<12} {:>14} {:>14}", "Day", "Credit", "Debit");
        for day in &report.by_day_of_week {
            println!("  {:<12} {:>14.2} {:>14.2}", day.day, day.credit, day.debit);
        }
    }

    println!("\nMonthly Trend");
    if report.monthly_trend.is_empty() {
        println!("  (none)");
    } else {
        println!(
            "  {:<12} {:>14} {:>14} {:>14}",
            "Month", "Credit", "Debit", "Net"
        );
        for month in &report.monthly_trend {
            println!(
                "  {:<12} {:>14.2} {:>14.2} {:>14.2}",
                month.month, month.credit, month.debit, month.net_cash_flow
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_markers() {
        assert_eq!(direction_marker(CashFlowDirection::Positive), "▲");
        assert_eq!(direction_marker(CashFlowDirection::Negative), "▼");
        assert_eq!(direction_marker(CashFlowDirection::Zero), "–");
    }
}
