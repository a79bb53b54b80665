/// persist json - stream schedule rows to a writer, one json object per line
use chrono::NaiveDate;
use debt_payoff_rs::{
    persist_projection, DebtAccount, JsonLinesWriter, Money, ProjectionConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let debts: Vec<DebtAccount> = serde_json::from_str(
        r#"[
            {"id": 1, "name": "store card", "balance": "640.00", "apr": "26.99",
             "minimum_payment": "35.00", "statement_due_day": 12},
            {"id": 2, "name": "student loan", "balance": "12800.00", "apr": "4.5",
             "minimum_payment": "140.00", "statement_due_day": 28}
        ]"#,
    )?;

    let config = ProjectionConfig::avalanche(Money::from_major(150))
        .with_start_date(NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("bad start date")?);

    let stdout = std::io::stdout();
    let schedule = persist_projection(&debts, &config, JsonLinesWriter::new(stdout.lock()))?;

    let rows: usize = schedule
        .debt_ids()
        .iter()
        .map(|id| schedule.rows_for(*id).len())
        .sum();
    eprintln!("{} rows over {} months", rows, schedule.len());

    Ok(())
}
