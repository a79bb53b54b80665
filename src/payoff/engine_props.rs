//! Property-based tests for the payoff engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::AmortizationEngine;
use super::schedule::Schedule;
use crate::config::ProjectionConfig;
use crate::decimal::{Money, Rate};
use crate::types::{DebtAccount, DebtId, Strategy as PayoffStrategy};

/// A debt whose minimum always covers its monthly interest.
fn debt_strategy() -> impl Strategy<Value = (i64, i64)> {
    // balance 50.00..=25,000.00, apr 0.00..=29.99
    (5_000i64..=2_500_000i64, 0i64..=2_999i64)
}

fn portfolio_strategy() -> impl Strategy<Value = Vec<DebtAccount>> {
    prop::collection::vec(debt_strategy(), 1..6).prop_map(|generated| {
        generated
            .into_iter()
            .enumerate()
            .map(|(i, (cents, apr_bps))| {
                let balance = Money::from_cents(cents);
                let minimum = balance * Decimal::new(3, 2) + Money::from_major(10);
                DebtAccount::new(
                    i as DebtId + 1,
                    balance,
                    Rate::from_percentage(Decimal::new(apr_bps, 2)),
                    minimum,
                )
            })
            .collect()
    })
}

fn surplus_strategy() -> impl Strategy<Value = Money> {
    (0i64..=100_000i64).prop_map(Money::from_cents)
}

fn payoff_strategy() -> impl Strategy<Value = PayoffStrategy> {
    prop_oneof![Just(PayoffStrategy::Snowball), Just(PayoffStrategy::Avalanche)]
}

fn run(debts: &[DebtAccount], strategy: PayoffStrategy, surplus: Money) -> Schedule {
    AmortizationEngine::new(ProjectionConfig::new(strategy, surplus))
        .compute_schedule(debts)
        .expect("sensible minimums always terminate")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No period ever pays more than balance plus accrued interest.
    #[test]
    fn prop_payment_never_exceeds_amount_owed(
        debts in portfolio_strategy(),
        strategy in payoff_strategy(),
        surplus in surplus_strategy(),
    ) {
        let schedule = run(&debts, strategy, surplus);
        for period in schedule.periods() {
            for (id, payment) in &period.payments {
                let debt = debts.iter().find(|d| d.id == *id).unwrap();
                let owed = payment.starting_balance + payment.interest_paid;
                let accrued = payment.starting_balance.monthly_interest(debt.apr);
                prop_assert_eq!(Some(payment.interest_paid), accrued);
                prop_assert!(payment.payment_amount <= owed);
                prop_assert_eq!(payment.remaining_balance, owed - payment.payment_amount);
            }
        }
    }

    /// Balances only go down once a minimum covers the interest.
    #[test]
    fn prop_balances_are_non_increasing(
        debts in portfolio_strategy(),
        strategy in payoff_strategy(),
        surplus in surplus_strategy(),
    ) {
        let schedule = run(&debts, strategy, surplus);
        for debt in &debts {
            let mut previous = debt.balance;
            for row in schedule.rows_for(debt.id) {
                prop_assert_eq!(row.payment.starting_balance, previous);
                prop_assert!(row.payment.remaining_balance <= previous);
                previous = row.payment.remaining_balance;
            }
            prop_assert_eq!(previous, Money::ZERO);
        }
    }

    /// The schedule ends exactly when the last debt reaches zero.
    #[test]
    fn prop_schedule_terminates_with_everything_paid(
        debts in portfolio_strategy(),
        strategy in payoff_strategy(),
        surplus in surplus_strategy(),
    ) {
        let schedule = run(&debts, strategy, surplus);
        prop_assert!(!schedule.is_empty());
        prop_assert!(schedule.final_period().unwrap().all_paid_off());
        for period in &schedule.periods()[..schedule.len() - 1] {
            prop_assert!(!period.all_paid_off());
        }
        for debt in &debts {
            let payoff = schedule.payoff_period(debt.id).unwrap();
            prop_assert_eq!(schedule.rows_for(debt.id).len(), payoff as usize);
        }
    }

    /// Only the priority debt gets more than its minimum.
    #[test]
    fn prop_extra_goes_to_priority_debt_only(
        debts in portfolio_strategy(),
        strategy in payoff_strategy(),
        surplus in surplus_strategy(),
    ) {
        let schedule = run(&debts, strategy, surplus);
        for period in schedule.periods() {
            for (id, payment) in &period.payments {
                let debt = debts.iter().find(|d| d.id == *id).unwrap();
                let owed = payment.starting_balance + payment.interest_paid;
                let planned = if *id == period.priority_debt {
                    debt.minimum_payment + period.extra_applied
                } else {
                    debt.minimum_payment
                };
                prop_assert_eq!(payment.payment_amount, planned.min(owed));
            }
        }
    }

    /// Period 1 favours the smallest balance under snowball.
    #[test]
    fn prop_snowball_targets_smallest_balance_first(
        debts in portfolio_strategy(),
        surplus in surplus_strategy(),
    ) {
        let schedule = run(&debts, PayoffStrategy::Snowball, surplus);
        let expected = debts
            .iter()
            .min_by(|a, b| a.balance.cmp(&b.balance).then(a.id.cmp(&b.id)))
            .unwrap();
        let first = schedule.period(1).unwrap();
        prop_assert_eq!(first.priority_debt, expected.id);
        prop_assert_eq!(first.extra_applied, surplus);
    }

    /// Period 1 favours the highest apr under avalanche.
    #[test]
    fn prop_avalanche_targets_highest_apr_first(
        debts in portfolio_strategy(),
        surplus in surplus_strategy(),
    ) {
        let schedule = run(&debts, PayoffStrategy::Avalanche, surplus);
        let expected = debts
            .iter()
            .min_by(|a, b| {
                b.apr
                    .cmp(&a.apr)
                    .then(a.balance.cmp(&b.balance))
                    .then(a.id.cmp(&b.id))
            })
            .unwrap();
        prop_assert_eq!(schedule.period(1).unwrap().priority_debt, expected.id);
    }

    /// Same input, same schedule.
    #[test]
    fn prop_projection_is_deterministic(
        debts in portfolio_strategy(),
        strategy in payoff_strategy(),
        surplus in surplus_strategy(),
    ) {
        prop_assert_eq!(run(&debts, strategy, surplus), run(&debts, strategy, surplus));
    }
}
