/// quick start - minimal example to get started
use debt_payoff_rs::{compute_schedule, DebtAccount, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a credit card and a car loan
    let debts = vec![
        DebtAccount::new(1, "1850.00".parse()?, "22.9".parse()?, Money::from_major(55))
            .with_name("visa"),
        DebtAccount::new(
            2,
            "9400.00".parse()?,
            Rate::from_str_exact("6.4")?,
            Money::from_major(210),
        )
        .with_name("auto loan"),
    ];

    // $300 a month on top of the minimums, smallest balance first
    let schedule = compute_schedule(&debts, "snowball", Money::from_major(300))?;

    for period in schedule.periods() {
        for (id, payment) in &period.payments {
            println!(
                "month {:>3}  debt {}  interest {:>8}  paid {:>8}  left {:>9}",
                period.number,
                id,
                payment.interest_paid,
                payment.payment_amount,
                payment.remaining_balance
            );
        }
    }

    println!("\ndebt free after {} months, {} interest", schedule.len(), schedule.total_interest());

    Ok(())
}
