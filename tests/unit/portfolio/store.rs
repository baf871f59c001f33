//! Unit tests for the in-memory position store

use foliotrack::portfolio::store::{InMemoryPositionStore, PortfolioError, PositionStore};

#[tokio::test]
async fn test_insert_and_get() {
    let store = InMemoryPositionStore::new();
    let position = store.insert("AAPL", 10.0, 150.0, 155.0).await.unwrap();

    assert_eq!(position.symbol, "AAPL");
    assert_eq!(position.quantity, 10.0);
    assert_eq!(position.entry_price, 150.0);
    assert_eq!(position.current_price, Some(155.0));
    assert!(position.last_updated.is_some());

    let fetched = store.get(position.id).await.unwrap();
    assert_eq!(fetched.symbol, "AAPL");
}

#[tokio::test]
async fn test_duplicate_symbol_rejected() {
    let store = InMemoryPositionStore::new();
    store.insert("AAPL", 10.0, 150.0, 155.0).await.unwrap();
    let err = store.insert("AAPL", 5.0, 140.0, 155.0).await.unwrap_err();
    assert!(matches!(err, PortfolioError::DuplicateSymbol(_)));
}

#[tokio::test]
async fn test_list_newest_first() {
    let store = InMemoryPositionStore::new();
    store.insert("AAPL", 10.0, 150.0, 155.0).await.unwrap();
    store.insert("MSFT", 5.0, 300.0, 310.0).await.unwrap();

    let positions = store.list().await;
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].symbol, "MSFT");
    assert_eq!(positions[1].symbol, "AAPL");

    assert_eq!(store.symbols().await, vec!["AAPL", "MSFT"]);
}

#[tokio::test]
async fn test_update_price() {
    let store = InMemoryPositionStore::new();
    store.insert("AAPL", 10.0, 150.0, 150.0).await.unwrap();

    assert!(store.update_price("AAPL", 160.0).await);
    let position = store.get(1).await.unwrap();
    assert_eq!(position.current_price, Some(160.0));

    assert!(!store.update_price("GHOST", 1.0).await);
}

#[tokio::test]
async fn test_price_log() {
    let store = InMemoryPositionStore::new();
    store.record_price("AAPL", 150.0).await;
    store.record_price("AAPL", 151.0).await;
    assert_eq!(store.price_log("AAPL").await, vec![150.0, 151.0]);
    assert!(store.price_log("GHOST").await.is_empty());
}

#[tokio::test]
async fn test_delete() {
    let store = InMemoryPositionStore::new();
    let position = store.insert("AAPL", 10.0, 150.0, 150.0).await.unwrap();

    store.delete(position.id).await.unwrap();
    assert!(store.get(position.id).await.is_none());

    let err = store.delete(position.id).await.unwrap_err();
    assert!(matches!(err, PortfolioError::NotFound(_)));
}

#[tokio::test]
async fn test_ids_monotonic() {
    let store = InMemoryPositionStore::new();
    let a = store.insert("AAPL", 1.0, 1.0, 1.0).await.unwrap();
    store.delete(a.id).await.unwrap();
    let b = store.insert("MSFT", 1.0, 1.0, 1.0).await.unwrap();
    assert!(b.id > a.id);
}
