pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod factory;
pub mod payoff;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::{ProjectionConfig, DEFAULT_MAX_PERIODS};
pub use decimal::{Money, Rate};
pub use errors::{PayoffError, Result};
pub use events::{Event, EventStore};
pub use factory::DebtFactory;
pub use payoff::{
    compute_schedule, persist_projection, AmortizationEngine, DebtSummary, JsonLinesWriter,
    MemoryScheduleWriter, PeriodPayment, Prioritizer, Schedule, SchedulePeriod, ScheduleRow,
    ScheduleWriter,
};
pub use serialization::{DebtSummaryView, ScheduleView};
pub use types::{DebtAccount, DebtId, Strategy};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
