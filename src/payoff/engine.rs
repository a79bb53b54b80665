use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Months, NaiveDate};
use tracing::{debug, info, warn};

use crate::config::ProjectionConfig;
use crate::decimal::Money;
use crate::errors::{PayoffError, Result};
use crate::events::{Event, EventStore};
use crate::payoff::prioritizer::Prioritizer;
use crate::payoff::schedule::{PeriodPayment, Schedule, SchedulePeriod};
use crate::types::{DebtAccount, DebtId};

/// advances every open debt one billing period at a time until all are retired
#[derive(Debug, Clone)]
pub struct AmortizationEngine {
    config: ProjectionConfig,
    prioritizer: Prioritizer,
}

impl AmortizationEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        let prioritizer = Prioritizer::new(config.strategy);
        Self { config, prioritizer }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// compute the full payoff schedule
    pub fn compute_schedule(&self, debts: &[DebtAccount]) -> Result<Schedule> {
        let mut events = EventStore::new();
        self.compute_schedule_with_events(debts, &mut events)
    }

    /// compute the full payoff schedule, recording milestones in `events`
    pub fn compute_schedule_with_events(
        &self,
        debts: &[DebtAccount],
        events: &mut EventStore,
    ) -> Result<Schedule> {
        self.config.validate()?;
        validate_debts(debts)?;

        let surplus = self.config.surplus;
        let mut schedule = Schedule::new(self.config.strategy, surplus);

        // zero-balance debts are already paid off and never simulated
        let mut open: Vec<DebtAccount> =
            debts.iter().filter(|d| !d.is_paid_off()).cloned().collect();
        if open.is_empty() {
            return Ok(schedule);
        }

        events.emit(Event::ProjectionStarted {
            strategy: self.config.strategy,
            surplus,
            open_debts: open.len(),
            total_balance: open
                .iter()
                .fold(Money::ZERO, |acc, d| acc.saturating_add(d.balance)),
        });

        let mut interest_to_date: BTreeMap<DebtId, Money> = BTreeMap::new();
        let mut freed = Money::ZERO;
        let mut number: u32 = 0;

        loop {
            let order = self.prioritizer.order(&open);
            let Some(&priority_debt) = order.first() else {
                break;
            };

            let open_debts = open.len();
            if number >= self.config.max_periods {
                warn!(
                    max_periods = self.config.max_periods,
                    open_debts,
                    "payoff projection hit the period cap"
                );
                return Err(self.unpayable(open_debts));
            }
            number += 1;

            let extra_applied = surplus.saturating_add(freed);
            let mut payments = BTreeMap::new();
            let mut paid_off: Vec<(DebtId, Money)> = Vec::new();

            for debt in open.iter_mut() {
                // a balance compounding past the decimal range can never be paid
                let accrued = debt
                    .monthly_interest()
                    .and_then(|interest| Some((interest, debt.balance.checked_add(interest)?)));
                let Some((interest_paid, owed)) = accrued else {
                    warn!(debt_id = debt.id, period = number, "debt balance overflowed");
                    return Err(self.unpayable(open_debts));
                };

                let planned = if debt.id == priority_debt {
                    debt.minimum_payment.saturating_add(extra_applied)
                } else {
                    debt.minimum_payment
                };
                let payment_amount = planned.min(owed);
                let remaining_balance = (owed - payment_amount).max(Money::ZERO);

                payments.insert(
                    debt.id,
                    PeriodPayment {
                        starting_balance: debt.balance,
                        interest_paid,
                        payment_amount,
                        remaining_balance,
                        due_date: self.due_date(number, debt.statement_due_day),
                    },
                );

                let total_interest = interest_to_date.entry(debt.id).or_insert(Money::ZERO);
                *total_interest = total_interest.saturating_add(interest_paid);
                debt.balance = remaining_balance;

                if remaining_balance.is_zero() {
                    debug!(debt_id = debt.id, period = number, "debt paid off");
                    events.emit(Event::DebtPaidOff {
                        debt_id: debt.id,
                        period: number,
                        final_payment: payment_amount,
                        interest_paid: *total_interest,
                    });
                    paid_off.push((debt.id, debt.minimum_payment));
                }
            }

            open.retain(|d| !d.is_paid_off());

            // freed minimums only reach the priority debt from the next period on
            freed = paid_off
                .iter()
                .fold(freed, |acc, (_, minimum)| acc.saturating_add(*minimum));
            if !open.is_empty() {
                let extra_budget = surplus.saturating_add(freed);
                for (debt_id, freed_minimum) in paid_off {
                    events.emit(Event::RolloverReleased {
                        debt_id,
                        freed_minimum,
                        extra_budget,
                        effective_period: number + 1,
                    });
                }
            }

            schedule.periods.push(SchedulePeriod {
                number,
                priority_debt,
                extra_applied,
                payments,
            });
        }

        let total_interest = schedule.total_interest();
        let total_paid = schedule.total_paid();
        info!(
            strategy = %self.config.strategy,
            periods = number,
            %total_interest,
            "payoff projection complete"
        );
        events.emit(Event::ProjectionCompleted {
            strategy: self.config.strategy,
            periods: number,
            total_interest,
            total_paid,
        });

        Ok(schedule)
    }

    fn unpayable(&self, open_debts: usize) -> PayoffError {
        PayoffError::UnpayableDebt {
            max_periods: self.config.max_periods,
            open_debts,
        }
    }

    fn due_date(&self, period: u32, statement_due_day: u8) -> Option<NaiveDate> {
        let start = self.config.start_date?;
        let month = start
            .with_day(1)?
            .checked_add_months(Months::new(period.saturating_sub(1)))?;
        let last_day = month.checked_add_months(Months::new(1))?.pred_opt()?.day();
        month.with_day(u32::from(statement_due_day).clamp(1, last_day))
    }
}

/// compute a schedule from a strategy token ("snowball" or "avalanche")
pub fn compute_schedule(debts: &[DebtAccount], strategy: &str, surplus: Money) -> Result<Schedule> {
    let config = ProjectionConfig::from_token(strategy, surplus)?;
    AmortizationEngine::new(config).compute_schedule(debts)
}

fn validate_debts(debts: &[DebtAccount]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for debt in debts {
        debt.validate()?;
        if !seen.insert(debt.id) {
            return Err(PayoffError::DuplicateDebtId { id: debt.id });
        }
    }
    Ok(())
}
