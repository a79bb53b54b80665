use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{DebtId, Strategy};

/// events emitted while a projection runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ProjectionStarted {
        strategy: Strategy,
        surplus: Money,
        open_debts: usize,
        total_balance: Money,
    },
    DebtPaidOff {
        debt_id: DebtId,
        period: u32,
        final_payment: Money,
        interest_paid: Money,
    },
    /// a paid-off debt's minimum joins the extra budget from `effective_period`
    RolloverReleased {
        debt_id: DebtId,
        freed_minimum: Money,
        extra_budget: Money,
        effective_period: u32,
    },
    ProjectionCompleted {
        strategy: Strategy,
        periods: u32,
        total_interest: Money,
        total_paid: Money,
    },
}

/// event store for collecting events during a projection
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
