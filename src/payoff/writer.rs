use std::collections::BTreeMap;
use std::io::Write;

use crate::config::ProjectionConfig;
use crate::errors::Result;
use crate::payoff::engine::AmortizationEngine;
use crate::payoff::schedule::{Schedule, ScheduleRow};
use crate::types::{DebtAccount, DebtId};

/// persistence capability for computed schedules
pub trait ScheduleWriter {
    /// accept the ordered rows for one debt
    fn write_schedule(&mut self, debt_id: DebtId, rows: &[ScheduleRow]) -> Result<()>;

    /// accept a whole schedule; writes per debt unless overridden for bulk storage
    fn write_full_schedule(&mut self, schedule: &Schedule) -> Result<()> {
        for debt_id in schedule.debt_ids() {
            let rows = schedule.rows_for(debt_id);
            self.write_schedule(debt_id, &rows)?;
        }
        Ok(())
    }
}

impl<T: ScheduleWriter + ?Sized> ScheduleWriter for &mut T {
    fn write_schedule(&mut self, debt_id: DebtId, rows: &[ScheduleRow]) -> Result<()> {
        (**self).write_schedule(debt_id, rows)
    }

    fn write_full_schedule(&mut self, schedule: &Schedule) -> Result<()> {
        (**self).write_full_schedule(schedule)
    }
}

/// keeps written rows in memory, keyed by debt
#[derive(Debug, Default)]
pub struct MemoryScheduleWriter {
    rows: BTreeMap<DebtId, Vec<ScheduleRow>>,
}

impl MemoryScheduleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, debt_id: DebtId) -> &[ScheduleRow] {
        self.rows.get(&debt_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn debt_ids(&self) -> Vec<DebtId> {
        self.rows.keys().copied().collect()
    }

    pub fn into_rows(self) -> BTreeMap<DebtId, Vec<ScheduleRow>> {
        self.rows
    }
}

impl ScheduleWriter for MemoryScheduleWriter {
    fn write_schedule(&mut self, debt_id: DebtId, rows: &[ScheduleRow]) -> Result<()> {
        // a rewrite replaces the earlier projection for that debt
        self.rows.insert(debt_id, rows.to_vec());
        Ok(())
    }
}

/// writes one json object per row
pub struct JsonLinesWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScheduleWriter for JsonLinesWriter<W> {
    fn write_schedule(&mut self, _debt_id: DebtId, rows: &[ScheduleRow]) -> Result<()> {
        for row in rows {
            serde_json::to_writer(&mut self.out, row)?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// compute a projection and hand every debt's rows to `writer`
///
/// Nothing is written when the computation fails. Writer errors are returned
/// unchanged; rows already accepted for earlier debts stay written.
pub fn persist_projection<W: ScheduleWriter>(
    debts: &[DebtAccount],
    config: &ProjectionConfig,
    mut writer: W,
) -> Result<Schedule> {
    let schedule = AmortizationEngine::new(config.clone()).compute_schedule(debts)?;
    writer.write_full_schedule(&schedule)?;
    Ok(schedule)
}
