/// strategies - snowball vs avalanche on the same debts
use debt_payoff_rs::{
    AmortizationEngine, DebtFactory, EventStore, ProjectionConfig, ScheduleView, Strategy,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // reproducible synthetic portfolio
    let mut factory = DebtFactory::seeded(2024);
    let debts = factory.portfolio(4);
    let surplus = factory.surplus(400);

    println!("surplus: {surplus}");
    for debt in &debts {
        println!(
            "  #{} {:<14} balance {:>9}  apr {:>7}  minimum {:>7}",
            debt.id, debt.name, debt.balance, debt.apr, debt.minimum_payment
        );
    }

    for strategy in [Strategy::Snowball, Strategy::Avalanche] {
        let engine = AmortizationEngine::new(ProjectionConfig::new(strategy, surplus));
        let mut events = EventStore::new();
        let schedule = engine.compute_schedule_with_events(&debts, &mut events)?;

        println!("\n=== {strategy} ===");
        for event in events.events() {
            println!("  {event:?}");
        }
        println!("{}", ScheduleView::from_schedule(&schedule).to_json_pretty()?);
    }

    Ok(())
}
