use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{DebtId, Strategy};

/// one debt's result for one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPayment {
    pub starting_balance: Money,
    pub interest_paid: Money,
    pub payment_amount: Money,
    pub remaining_balance: Money,
    /// informational due date, present when the projection has a start date
    pub due_date: Option<NaiveDate>,
}

impl PeriodPayment {
    /// portion of the payment that reduced the balance
    pub fn principal_paid(&self) -> Money {
        self.starting_balance - self.remaining_balance
    }

    pub fn is_payoff(&self) -> bool {
        self.remaining_balance.is_zero()
    }
}

/// every debt open at the start of a period, keyed by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    /// 1-based period number
    pub number: u32,
    /// debt that received the surplus and rolled-over minimums
    pub priority_debt: DebtId,
    /// surplus plus freed minimums available to the priority debt
    pub extra_applied: Money,
    pub payments: BTreeMap<DebtId, PeriodPayment>,
}

impl SchedulePeriod {
    pub fn payment(&self, debt_id: DebtId) -> Option<&PeriodPayment> {
        self.payments.get(&debt_id)
    }

    pub fn total_interest(&self) -> Money {
        self.payments.values().map(|p| p.interest_paid).sum()
    }

    pub fn total_paid(&self) -> Money {
        self.payments.values().map(|p| p.payment_amount).sum()
    }

    pub fn all_paid_off(&self) -> bool {
        self.payments.values().all(PeriodPayment::is_payoff)
    }
}

/// flattened record handed to schedule writers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub debt_id: DebtId,
    #[serde(flatten)]
    pub payment: PeriodPayment,
}

/// per-debt totals over the whole schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtSummary {
    pub debt_id: DebtId,
    pub payoff_period: u32,
    pub total_interest: Money,
    pub total_paid: Money,
}

/// full payoff projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub strategy: Strategy,
    pub surplus: Money,
    pub periods: Vec<SchedulePeriod>,
}

impl Schedule {
    pub fn new(strategy: Strategy, surplus: Money) -> Self {
        Self {
            strategy,
            surplus,
            periods: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn periods(&self) -> &[SchedulePeriod] {
        &self.periods
    }

    /// period by 1-based number
    pub fn period(&self, number: u32) -> Option<&SchedulePeriod> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.periods.get(index)
    }

    pub fn final_period(&self) -> Option<&SchedulePeriod> {
        self.periods.last()
    }

    /// every debt that appears in the schedule, ascending
    pub fn debt_ids(&self) -> Vec<DebtId> {
        self.periods
            .first()
            .map(|p| p.payments.keys().copied().collect())
            .unwrap_or_default()
    }

    /// rows for one debt in period order
    pub fn rows_for(&self, debt_id: DebtId) -> Vec<ScheduleRow> {
        self.periods
            .iter()
            .filter_map(|period| {
                period.payment(debt_id).map(|payment| ScheduleRow {
                    period: period.number,
                    debt_id,
                    payment: *payment,
                })
            })
            .collect()
    }

    /// period in which the debt reached zero
    pub fn payoff_period(&self, debt_id: DebtId) -> Option<u32> {
        self.periods
            .iter()
            .find(|period| period.payment(debt_id).is_some_and(PeriodPayment::is_payoff))
            .map(|period| period.number)
    }

    pub fn interest_for(&self, debt_id: DebtId) -> Money {
        self.periods
            .iter()
            .filter_map(|period| period.payment(debt_id))
            .map(|p| p.interest_paid)
            .sum()
    }

    pub fn total_interest(&self) -> Money {
        self.periods.iter().map(SchedulePeriod::total_interest).sum()
    }

    pub fn total_paid(&self) -> Money {
        self.periods.iter().map(SchedulePeriod::total_paid).sum()
    }

    pub fn summaries(&self) -> Vec<DebtSummary> {
        self.debt_ids()
            .into_iter()
            .map(|debt_id| {
                let rows = self.rows_for(debt_id);
                DebtSummary {
                    debt_id,
                    payoff_period: rows.last().map(|r| r.period).unwrap_or(0),
                    total_interest: rows.iter().map(|r| r.payment.interest_paid).sum(),
                    total_paid: rows.iter().map(|r| r.payment.payment_amount).sum(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(start: i64, interest: i64, paid: i64) -> PeriodPayment {
        let starting_balance = Money::from_cents(start);
        let interest_paid = Money::from_cents(interest);
        let payment_amount = Money::from_cents(paid);
        PeriodPayment {
            starting_balance,
            interest_paid,
            payment_amount,
            remaining_balance: (starting_balance + interest_paid - payment_amount).max(Money::ZERO),
            due_date: None,
        }
    }

    fn sample() -> Schedule {
        let mut schedule = Schedule::new(Strategy::Snowball, Money::from_major(100));
        schedule.periods.push(SchedulePeriod {
            number: 1,
            priority_debt: 1,
            extra_applied: Money::from_major(100),
            payments: BTreeMap::from([
                (1, payment(10_000, 83, 10_083)),
                (2, payment(200_000, 2_500, 5_000)),
            ]),
        });
        schedule.periods.push(SchedulePeriod {
            number: 2,
            priority_debt: 2,
            extra_applied: Money::from_major(130),
            payments: BTreeMap::from([(2, payment(197_500, 2_469, 199_969))]),
        });
        schedule
    }

    #[test]
    fn test_lookup_helpers() {
        let schedule = sample();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.debt_ids(), vec![1, 2]);
        assert_eq!(schedule.period(1).unwrap().number, 1);
        assert!(schedule.period(0).is_none());
        assert!(schedule.period(3).is_none());
        assert!(schedule.final_period().unwrap().all_paid_off());
        assert!(!schedule.period(1).unwrap().all_paid_off());
    }

    #[test]
    fn test_rows_and_payoff_periods() {
        let schedule = sample();
        let rows = schedule.rows_for(2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, 1);
        assert_eq!(rows[1].payment.remaining_balance, Money::ZERO);

        assert_eq!(schedule.payoff_period(1), Some(1));
        assert_eq!(schedule.payoff_period(2), Some(2));
        assert_eq!(schedule.payoff_period(42), None);
        assert!(schedule.rows_for(42).is_empty());
    }

    #[test]
    fn test_totals() {
        let schedule = sample();
        assert_eq!(schedule.total_interest(), Money::from_cents(83 + 2_500 + 2_469));
        assert_eq!(schedule.interest_for(2), Money::from_cents(4_969));
        assert_eq!(schedule.total_paid(), Money::from_cents(10_083 + 5_000 + 199_969));

        let summaries = schedule.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].payoff_period, 2);
        assert_eq!(summaries[1].total_paid, Money::from_cents(204_969));
    }

    #[test]
    fn test_principal_paid() {
        let p = payment(100_000, 1_000, 15_000);
        assert_eq!(p.remaining_balance, Money::from_major(860));
        assert_eq!(p.principal_paid(), Money::from_major(140));
        assert!(!p.is_payoff());
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::new(Strategy::Avalanche, Money::ZERO);
        assert!(schedule.is_empty());
        assert!(schedule.debt_ids().is_empty());
        assert_eq!(schedule.total_interest(), Money::ZERO);
        assert!(schedule.summaries().is_empty());
    }
}
