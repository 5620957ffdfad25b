//! Cash-flow KPIs derived from the category totals.

use cashlens_core::round_half_even;
use serde::Serialize;

use crate::category_totals::{CategoryTotal, grand_total};

/// Sign of the net cash flow. The presenter branches on this for styling;
/// nothing else depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CashFlowDirection {
    Negative,
    Zero,
    Positive,
}

/// Headline numbers: whole-currency totals and the net-flow percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CashFlowSummary {
    pub total_credited: i64,
    pub total_debited: i64,
    pub net_cash_flow: i64,
    pub net_cash_flow_percent: i64,
}

impl CashFlowSummary {
    /// Build the KPI block from the two per-category tables.
    pub fn from_category_totals(debit: &[CategoryTotal], credit: &[CategoryTotal]) -> Self {
        let total_debited = grand_total(debit);
        let total_credited = grand_total(credit);
        let net_cash_flow = total_credited - total_debited;

        // Guarded: an empty or credit-free period reports 0%, not a division
        // error.
        let net_cash_flow_percent = if net_cash_flow != 0 && total_credited != 0 {
            round_half_even(net_cash_flow as f64 / total_credited as f64 * 100.0)
        } else {
            0
        };

        Self {
            total_credited,
            total_debited,
            net_cash_flow,
            net_cash_flow_percent,
        }
    }

    pub fn direction(&self) -> CashFlowDirection {
        match self.net_cash_flow {
            n if n < 0 => CashFlowDirection::Negative,
            0 => CashFlowDirection::Zero,
            _ => CashFlowDirection::Positive,
        }
    }
}
