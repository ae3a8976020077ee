//! Reports and cash flow integration tests
//!
//! Covers the finalized-order statistics queries and the ledger range
//! reads that back `/api/reports` and `/api/cashflow`.
//!
//! Run: cargo test -p ops-server --test reports_flow

use std::sync::Arc;

use ops_server::db::DbService;
use ops_server::db::models::{
    CashFlowEntry, CashFlowKind, OrderCreate, OrderItemInput, OrderType,
};
use ops_server::db::repository::{CashFlowRepository, CashFlowSummary, OrderRepository};
use ops_server::utils::time;
use ops_server::{Config, NullNotifier, OrderService, ServerState};
use shared::util::now_millis;

async fn test_state() -> (ServerState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    config.ensure_work_dir_structure().unwrap();
    let db_path = config.database_dir().join("forno.db");
    let db = DbService::new(&db_path.to_string_lossy()).await.unwrap();
    (ServerState::new(config, db.db, Arc::new(NullNotifier)), tmp)
}

fn pickup_payload(item_name: &str, price: f64, quantity: u32) -> OrderCreate {
    OrderCreate {
        customer_name: "Ana".to_string(),
        customer_phone: None,
        address: None,
        neighborhood: None,
        order_type: OrderType::Pickup,
        payment_method: "pix".to_string(),
        items: vec![OrderItemInput {
            item_id: Some(format!("product:{}", item_name.to_lowercase())),
            item_type: "pizza".to_string(),
            item_name: item_name.to_string(),
            quantity,
            price_per_item: price,
            extras: Vec::new(),
        }],
        coupon_code: None,
    }
}

/// Today's [start, end) window in the store timezone
fn today_range(state: &ServerState) -> (i64, i64) {
    let tz = state.config.tz();
    let today = time::today(tz).to_string();
    time::range_millis(&today, &today, tz).unwrap()
}

#[tokio::test]
async fn test_report_stats_count_only_finalized_orders() {
    let (state, _tmp) = test_state().await;
    let service = OrderService::new(&state);

    let a = service
        .create(pickup_payload("Calabresa", 30.0, 2))
        .await
        .unwrap();
    let b = service
        .create(pickup_payload("Marguerita", 40.0, 1))
        .await
        .unwrap();
    // Third order stays in Em Preparo and must not count
    service
        .create(pickup_payload("Portuguesa", 35.0, 1))
        .await
        .unwrap();

    service
        .finalize(&a.id.unwrap().to_string())
        .await
        .unwrap();
    service
        .finalize(&b.id.unwrap().to_string())
        .await
        .unwrap();

    let (start, end) = today_range(&state);
    let repo = OrderRepository::new(state.db.clone());
    let stats = repo.finalized_stats(start, end).await.unwrap();

    assert_eq!(stats.order_count, 2);
    assert_eq!(stats.revenue, 100.0);

    let finalized = repo.finalized_between(start, end).await.unwrap();
    assert_eq!(finalized.len(), 2);
    let mut names: Vec<&str> = finalized
        .iter()
        .flat_map(|o| o.items.iter().map(|i| i.name.as_str()))
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Calabresa", "Marguerita"]);
}

#[tokio::test]
async fn test_report_stats_empty_range_is_zero() {
    let (state, _tmp) = test_state().await;
    let tz = state.config.tz();
    let (start, end) = time::range_millis("2000-01-01", "2000-01-02", tz).unwrap();

    let stats = OrderRepository::new(state.db.clone())
        .finalized_stats(start, end)
        .await
        .unwrap();
    assert_eq!(stats.order_count, 0);
    assert_eq!(stats.revenue, 0.0);
}

#[tokio::test]
async fn test_cashflow_mixes_order_income_and_manual_expenses() {
    let (state, _tmp) = test_state().await;
    let service = OrderService::new(&state);

    let order = service
        .create(pickup_payload("Calabresa", 30.0, 1))
        .await
        .unwrap();
    service
        .finalize(&order.id.unwrap().to_string())
        .await
        .unwrap();

    let ledger = CashFlowRepository::new(state.db.clone());
    let now = now_millis();
    ledger
        .create(CashFlowEntry {
            id: None,
            description: "Gas da cozinha".to_string(),
            kind: CashFlowKind::Expense,
            amount: 12.5,
            order_id: None,
            occurred_at: now,
            created_at: now,
        })
        .await
        .unwrap();

    let (start, end) = today_range(&state);
    let entries = ledger.find_range(start, end).await.unwrap();
    assert_eq!(entries.len(), 2);

    let summary = CashFlowSummary::from_entries(&entries);
    assert_eq!(summary.income, 30.0);
    assert_eq!(summary.expense, 12.5);
    assert_eq!(summary.balance, 17.5);
}

#[tokio::test]
async fn test_cashflow_range_excludes_other_days() {
    let (state, _tmp) = test_state().await;
    let tz = state.config.tz();
    let ledger = CashFlowRepository::new(state.db.clone());

    for (date, amount) in [("2026-01-10", 100.0), ("2026-01-20", 200.0)] {
        let day = time::parse_date(date).unwrap();
        ledger
            .create(CashFlowEntry {
                id: None,
                description: format!("Venda {}", date),
                kind: CashFlowKind::Income,
                amount,
                order_id: None,
                occurred_at: time::day_start_millis(day, tz),
                created_at: now_millis(),
            })
            .await
            .unwrap();
    }

    let (start, end) = time::range_millis("2026-01-10", "2026-01-15", tz).unwrap();
    let entries = ledger.find_range(start, end).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, 100.0);
}

#[tokio::test]
async fn test_cashflow_rejects_blank_description() {
    let (state, _tmp) = test_state().await;
    let ledger = CashFlowRepository::new(state.db.clone());

    let now = now_millis();
    let result = ledger
        .create(CashFlowEntry {
            id: None,
            description: "   ".to_string(),
            kind: CashFlowKind::Expense,
            amount: 10.0,
            order_id: None,
            occurred_at: now,
            created_at: now,
        })
        .await;
    assert!(result.is_err());
}
