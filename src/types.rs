use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{PayoffError, Result};

/// caller-supplied identifier for a debt, stable across periods
pub type DebtId = u64;

/// payoff prioritization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// smallest current balance first
    Snowball,
    /// highest APR first
    Avalanche,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Snowball => "snowball",
            Strategy::Avalanche => "avalanche",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(Strategy::Snowball),
            "avalanche" => Ok(Strategy::Avalanche),
            _ => Err(PayoffError::InvalidStrategy {
                strategy: s.to_string(),
            }),
        }
    }
}

/// snapshot of one liability at schedule start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtAccount {
    pub id: DebtId,
    #[serde(default)]
    pub name: String,
    pub balance: Money,
    pub apr: Rate,
    pub minimum_payment: Money,
    /// day of month the payment is due; informational only
    #[serde(default = "default_due_day")]
    pub statement_due_day: u8,
}

fn default_due_day() -> u8 {
    1
}

impl DebtAccount {
    pub fn new(id: DebtId, balance: Money, apr: Rate, minimum_payment: Money) -> Self {
        Self {
            id,
            name: String::new(),
            balance,
            apr,
            minimum_payment,
            statement_due_day: default_due_day(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_statement_due_day(mut self, day: u8) -> Self {
        self.statement_due_day = day;
        self
    }

    pub fn is_paid_off(&self) -> bool {
        !self.balance.is_positive()
    }

    /// interest this debt accrues over the next period at its current balance,
    /// `None` if it overflows
    pub fn monthly_interest(&self) -> Option<Money> {
        self.balance.monthly_interest(self.apr)
    }

    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, Decimal); 3] = [
            ("balance", self.balance.as_decimal()),
            ("apr", self.apr.as_percentage()),
            ("minimum_payment", self.minimum_payment.as_decimal()),
        ];
        for (field, value) in checks {
            if value < Decimal::ZERO {
                return Err(PayoffError::NegativeInput {
                    field,
                    debt_id: Some(self.id),
                    value,
                });
            }
        }

        if !(1..=31).contains(&self.statement_due_day) {
            return Err(PayoffError::InvalidConfiguration {
                message: format!(
                    "statement due day {} for debt {} is not a day of month",
                    self.statement_due_day, self.id
                ),
            });
        }

        Ok(())
    }
}
