//! Basic bill-splitting usage example

use billsplit_core::auth::Authenticator;
use billsplit_core::currency;
use billsplit_core::utils::MemoryStorage;
use billsplit_core::{ExpenseBuilder, SplitLedger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Billsplit Core - Basic Example\n");

    let storage = MemoryStorage::new();

    // 1. Register and log in the current user
    let mut auth = Authenticator::new(storage.clone());
    auth.register("bob", "bob@example.com", "hunter22").await?;
    let bob = auth.login("bob", "hunter22").await?;
    println!("👤 Logged in as {}\n", bob.username);

    let mut ledger = SplitLedger::new(storage);

    // 2. Record some shared expenses
    println!("💰 Recording shared expenses...\n");

    let hotel = ExpenseBuilder::new("Hotel", 240.0, "Alice")
        .split_with("Bob")
        .split_with("Carol")
        .build()?;
    let hotel = ledger.add_expense(&bob.username, hotel).await?;
    println!("  ✓ Alice fronted {} for the hotel", currency::format_amount("USD", 240.0));

    let petrol = ExpenseBuilder::new("Petrol", 60.0, "Bob")
        .split_with("Alice")
        .split_with("Carol")
        .build()?;
    ledger.add_expense(&bob.username, petrol).await?;
    println!("  ✓ Bob fronted {} for petrol\n", currency::format_amount("USD", 60.0));

    // 3. Show the per-currency summary
    let dashboard = ledger.dashboard(&bob.username).await?;
    for balance in dashboard.currency_balances.values() {
        println!("📊 {} summary:", balance.currency);
        println!("  Total    {}", currency::format_amount(&balance.currency, balance.total));
        println!("  You owe  {}", currency::format_amount(&balance.currency, balance.you_owe));
        println!(
            "  You're owed {}",
            currency::format_amount(&balance.currency, balance.you_are_owed)
        );
    }
    println!();

    // 4. Show who needs to pay whom
    println!("🔁 Payment flow:");
    for debt in dashboard.all_debts() {
        println!(
            "  {} owes {} {}",
            debt.from,
            debt.to,
            currency::format_amount(&debt.currency, debt.amount)
        );
    }
    println!();

    // 5. Settle the hotel and recompute
    ledger.mark_paid(&bob.username, &hotel.id).await?;
    let dashboard = ledger.dashboard(&bob.username).await?;
    println!("✅ Hotel settled; remaining flow:");
    for debt in dashboard.all_debts() {
        println!(
            "  {} owes {} {}",
            debt.from,
            debt.to,
            currency::format_amount(&debt.currency, debt.amount)
        );
    }

    Ok(())
}
