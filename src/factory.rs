//! Synthetic debt portfolios for demos and tests.
//!
//! The random source is always injected; nothing here keeps global state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::{DebtAccount, DebtId};

const NAMES: [&str; 6] = [
    "visa",
    "mastercard",
    "store card",
    "auto loan",
    "student loan",
    "personal loan",
];

/// generates debts whose minimum payment covers their first month of interest
pub struct DebtFactory<R: Rng> {
    rng: R,
}

impl DebtFactory<StdRng> {
    /// deterministic factory for reproducible fixtures
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DebtFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// balance 50.00..=25,000.00, apr 0..=29.99, minimum = 3% of balance + 10
    pub fn debt(&mut self, id: DebtId) -> DebtAccount {
        let balance = Money::from_cents(self.rng.gen_range(5_000..=2_500_000));
        let apr = Rate::from_percentage(Decimal::new(self.rng.gen_range(0..=2_999), 2));
        // 3% of balance exceeds the 2.5% monthly interest at the highest apr
        let minimum = balance * Decimal::new(3, 2) + Money::from_major(10);
        let name = NAMES[self.rng.gen_range(0..NAMES.len())];

        DebtAccount::new(id, balance, apr, minimum)
            .with_name(name)
            .with_statement_due_day(self.rng.gen_range(1..=28))
    }

    /// `count` debts with ids 1..=count
    pub fn portfolio(&mut self, count: usize) -> Vec<DebtAccount> {
        (1..=count as DebtId).map(|id| self.debt(id)).collect()
    }

    /// surplus between 0 and `max_major` whole currency units
    pub fn surplus(&mut self, max_major: i64) -> Money {
        Money::from_major(self.rng.gen_range(0..=max_major.max(0)))
    }
}
