use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{PayoffError, Result};
use crate::types::Strategy;

/// 100 years of monthly periods
pub const DEFAULT_MAX_PERIODS: u32 = 1200;

fn default_max_periods() -> u32 {
    DEFAULT_MAX_PERIODS
}

/// projection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub strategy: Strategy,
    /// discretionary monthly amount above all minimum payments
    pub surplus: Money,
    /// periods simulated before the projection is declared unpayable
    #[serde(default = "default_max_periods")]
    pub max_periods: u32,
    /// month of the first period; only used to label due dates
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl ProjectionConfig {
    pub fn new(strategy: Strategy, surplus: Money) -> Self {
        Self {
            strategy,
            surplus,
            max_periods: DEFAULT_MAX_PERIODS,
            start_date: None,
        }
    }

    /// smallest balance first
    pub fn snowball(surplus: Money) -> Self {
        Self::new(Strategy::Snowball, surplus)
    }

    /// highest apr first
    pub fn avalanche(surplus: Money) -> Self {
        Self::new(Strategy::Avalanche, surplus)
    }

    /// build from a strategy token such as "snowball"
    pub fn from_token(strategy: &str, surplus: Money) -> Result<Self> {
        Ok(Self::new(strategy.parse()?, surplus))
    }

    pub fn with_max_periods(mut self, max_periods: u32) -> Self {
        self.max_periods = max_periods;
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ProjectionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.surplus.is_negative() {
            return Err(PayoffError::NegativeInput {
                field: "surplus",
                debt_id: None,
                value: self.surplus.as_decimal(),
            });
        }

        if self.max_periods == 0 {
            return Err(PayoffError::InvalidConfiguration {
                message: "max_periods must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
