use std::cmp::Ordering;

use crate::errors::Result;
use crate::types::{DebtAccount, DebtId, Strategy};

/// orders open debts into a payoff queue, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prioritizer {
    strategy: Strategy,
}

impl Prioritizer {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// ids of debts with a positive current balance, in payoff order
    pub fn order(&self, debts: &[DebtAccount]) -> Vec<DebtId> {
        let mut open: Vec<&DebtAccount> = debts.iter().filter(|d| !d.is_paid_off()).collect();
        open.sort_by(|a, b| self.compare(a, b));
        open.into_iter().map(|d| d.id).collect()
    }

    /// the debt that receives the extra budget this period
    pub fn top(&self, debts: &[DebtAccount]) -> Option<DebtId> {
        debts
            .iter()
            .filter(|d| !d.is_paid_off())
            .min_by(|a, b| self.compare(a, b))
            .map(|d| d.id)
    }

    /// order using a strategy token ("snowball" / "avalanche")
    pub fn order_by_token(debts: &[DebtAccount], strategy: &str) -> Result<Vec<DebtId>> {
        let strategy: Strategy = strategy.parse()?;
        Ok(Prioritizer::new(strategy).order(debts))
    }

    fn compare(&self, a: &DebtAccount, b: &DebtAccount) -> Ordering {
        match self.strategy {
            Strategy::Snowball => a.balance.cmp(&b.balance).then(a.id.cmp(&b.id)),
            Strategy::Avalanche => b
                .apr
                .cmp(&a.apr)
                .then(a.balance.cmp(&b.balance))
                .then(a.id.cmp(&b.id)),
        }
    }
}
