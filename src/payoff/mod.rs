pub mod engine;
pub mod prioritizer;
pub mod schedule;
pub mod writer;

#[cfg(test)]
mod engine_props;

pub use engine::{compute_schedule, AmortizationEngine};
pub use prioritizer::Prioritizer;
pub use schedule::{DebtSummary, PeriodPayment, Schedule, SchedulePeriod, ScheduleRow};
pub use writer::{persist_projection, JsonLinesWriter, MemoryScheduleWriter, ScheduleWriter};
