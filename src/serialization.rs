/// serialization support for projections
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::payoff::Schedule;
use crate::types::{DebtId, Strategy};

/// serializable summary of a payoff projection
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleView {
    pub strategy: Strategy,
    pub surplus: Money,
    pub months_to_debt_free: usize,
    pub total_interest: Money,
    pub total_paid: Money,
    pub debts: Vec<DebtSummaryView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DebtSummaryView {
    pub debt_id: DebtId,
    pub starting_balance: Money,
    pub payoff_period: u32,
    pub payoff_date: Option<NaiveDate>,
    pub total_interest: Money,
    pub total_paid: Money,
}

impl ScheduleView {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let debts = schedule
            .summaries()
            .into_iter()
            .map(|summary| {
                let rows = schedule.rows_for(summary.debt_id);
                DebtSummaryView {
                    debt_id: summary.debt_id,
                    starting_balance: rows
                        .first()
                        .map(|r| r.payment.starting_balance)
                        .unwrap_or(Money::ZERO),
                    payoff_period: summary.payoff_period,
                    payoff_date: rows.last().and_then(|r| r.payment.due_date),
                    total_interest: summary.total_interest,
                    total_paid: summary.total_paid,
                }
            })
            .collect();

        ScheduleView {
            strategy: schedule.strategy,
            surplus: schedule.surplus,
            months_to_debt_free: schedule.len(),
            total_interest: schedule.total_interest(),
            total_paid: schedule.total_paid(),
            debts,
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
