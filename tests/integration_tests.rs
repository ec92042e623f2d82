//! Integration tests for billsplit-core

use billsplit_core::{
    auth::Authenticator,
    currency,
    utils::{EnhancedExpenseValidator, MemoryStorage},
    Expense, ExpenseBuilder, SplitError, SplitLedger, SETTLEMENT_EPSILON,
};

#[tokio::test]
async fn test_complete_bill_splitting_workflow() {
    let storage = MemoryStorage::new();

    // Sign up and log in
    let mut auth = Authenticator::new(storage.clone());
    auth.register("Bob", "bob@example.com", "hunter22")
        .await
        .unwrap();
    let current_user = auth.login("Bob", "hunter22").await.unwrap().username;

    let mut ledger = SplitLedger::new(storage);

    // Bob records a weekend trip with Alice and Carol
    let hotel = ledger
        .add_expense(
            &current_user,
            ExpenseBuilder::new("Hotel", 240.0, "Alice")
                .split_with("Bob")
                .split_with("Carol")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    ledger
        .add_expense(
            &current_user,
            ExpenseBuilder::new("Petrol", 60.0, "Bob")
                .split_with("Alice")
                .split_with("Carol")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    // Balance summary from Bob's viewpoint
    let dashboard = ledger.dashboard(&current_user).await.unwrap();
    let usd = &dashboard.currency_balances["USD"];
    assert_eq!(usd.total, 300.0);
    assert_eq!(usd.you_owe, 80.0);
    assert_eq!(usd.you_are_owed, 40.0);
    assert_eq!(usd.net_position(), -40.0);

    // Netted debts: Bob's 80 to Alice nets against Alice's 20 to Bob
    let debts = &dashboard.debts_by_currency["USD"];
    let bob_to_alice = debts
        .iter()
        .find(|e| e.from == "Bob" && e.to == "Alice")
        .unwrap();
    assert!((bob_to_alice.amount - 60.0).abs() < 1e-9);
    let carol_to_alice = debts
        .iter()
        .find(|e| e.from == "Carol" && e.to == "Alice")
        .unwrap();
    assert!((carol_to_alice.amount - 80.0).abs() < 1e-9);
    let carol_to_bob = debts
        .iter()
        .find(|e| e.from == "Carol" && e.to == "Bob")
        .unwrap();
    assert!((carol_to_bob.amount - 20.0).abs() < 1e-9);

    // Settling the hotel leaves only the petrol split outstanding
    ledger.mark_paid(&current_user, &hotel.id).await.unwrap();

    let dashboard = ledger.dashboard(&current_user).await.unwrap();
    assert_eq!(dashboard.expense_count, 2);
    assert_eq!(dashboard.active_expense_count, 1);

    let usd = &dashboard.currency_balances["USD"];
    assert_eq!(usd.total, 60.0);
    assert_eq!(usd.you_owe, 0.0);
    assert_eq!(usd.you_are_owed, 40.0);

    let debts = dashboard.all_debts();
    assert_eq!(debts.len(), 2);
    assert!(debts.iter().all(|e| e.to == "Bob" && e.amount == 20.0));
}

#[tokio::test]
async fn test_multi_currency_trip_stays_separated() {
    let storage = MemoryStorage::new();
    let mut ledger = SplitLedger::new(storage);

    ledger
        .add_expense(
            "Bob",
            ExpenseBuilder::new("London hotel", 200.0, "Alice")
                .currency("GBP")
                .split_with("Bob")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    ledger
        .add_expense(
            "Bob",
            ExpenseBuilder::new("Paris dinner", 80.0, "Bob")
                .currency("EUR")
                .split_with("Alice")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let dashboard = ledger.dashboard("Bob").await.unwrap();
    assert_eq!(dashboard.currency_balances.len(), 2);
    assert_eq!(dashboard.currency_balances["GBP"].you_owe, 100.0);
    assert_eq!(dashboard.currency_balances["EUR"].you_are_owed, 40.0);

    // The same pair owes in both directions, one edge per currency
    let debts = dashboard.all_debts();
    assert_eq!(debts.len(), 2);
    assert!(debts
        .iter()
        .any(|e| e.currency == "GBP" && e.from == "Bob" && e.to == "Alice"));
    assert!(debts
        .iter()
        .any(|e| e.currency == "EUR" && e.from == "Alice" && e.to == "Bob"));

    for debt in &debts {
        assert!(debt.amount > SETTLEMENT_EPSILON);
        assert!(!currency::format_amount(&debt.currency, debt.amount).is_empty());
    }
}

#[tokio::test]
async fn test_deleting_an_expense_recomputes_everything() {
    let storage = MemoryStorage::new();
    let mut ledger = SplitLedger::new(storage);

    let dinner = ledger
        .add_expense(
            "Bob",
            ExpenseBuilder::new("Dinner", 90.0, "Alice")
                .split_with("Bob")
                .split_with("Carol")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    ledger.delete_expense("Bob", &dinner.id).await.unwrap();

    let dashboard = ledger.dashboard("Bob").await.unwrap();
    assert_eq!(dashboard.expense_count, 0);
    assert!(dashboard.currency_balances.is_empty());
    assert!(dashboard.is_settled());
}

#[tokio::test]
async fn test_enhanced_validator_guards_admission() {
    let storage = MemoryStorage::new();
    let mut ledger = SplitLedger::with_validator(storage, Box::new(EnhancedExpenseValidator));

    let mut doubled = ExpenseBuilder::new("Dinner", 90.0, "Alice")
        .split_with("Bob")
        .build()
        .unwrap();
    doubled.split_among.push("Bob".to_string());

    let result = ledger.add_expense("Bob", doubled).await;
    assert!(matches!(result, Err(SplitError::Validation(_))));
    assert!(ledger.list_expenses("Bob").await.unwrap().is_empty());
}

#[test]
fn test_stored_ledger_matches_browser_json_shape() {
    // The browser application persists expenses as a camelCase JSON array
    let json = r#"[{
        "id": "e1",
        "description": "Groceries",
        "amount": 90.0,
        "currency": "USD",
        "paidBy": "Alice",
        "splitAmong": ["Alice", "Bob", "Carol"],
        "isPaid": false,
        "date": "2026-08-01T12:00:00",
        "createdAt": "2026-08-01T12:00:00"
    }]"#;

    let expenses: Vec<Expense> = serde_json::from_str(json).unwrap();
    assert_eq!(expenses[0].paid_by, "Alice");
    assert_eq!(expenses[0].split_among.len(), 3);
    assert!(!expenses[0].is_paid);

    let back = serde_json::to_value(&expenses).unwrap();
    assert_eq!(back[0]["splitAmong"][1], "Bob");
    assert_eq!(back[0]["isPaid"], false);
}
