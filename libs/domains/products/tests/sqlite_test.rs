//! SQLite adapter tests
//!
//! Each test gets its own database file in a temporary directory with the
//! migrations applied.

use database::sqlite::{connect, run_migrations, DatabaseConnection};
use domain_products::*;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use tempfile::TempDir;

struct TestDb {
    // Held so the directory outlives the connection
    _dir: TempDir,
    db: DatabaseConnection,
}

async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("products.db").display());
    let db = connect(&url).await.unwrap();
    run_migrations::<migration::Migrator>(&db, "domain_products_test")
        .await
        .unwrap();
    TestDb { _dir: dir, db }
}

async fn insert(db: &DatabaseConnection, name: &str, weight: f64) -> Product {
    SqliteProductRepository::new(db.clone())
        .add(Product::new(name, weight).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_add_and_get_by_id() {
    let test = test_db().await;
    let repo = SqliteProductRepository::new(test.db.clone());

    let created = repo.add(Product::new("Box", 10.0).unwrap()).await.unwrap();
    assert_eq!(created.id(), Some(1));

    let found = repo.get_by_id(1).await.unwrap().expect("product should exist");
    assert_eq!(found.name(), "Box");
    assert_eq!(found.weight(), 10.0);

    assert!(repo.get_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_ordered_and_windowed() {
    let test = test_db().await;
    for weight in [3.0, 1.0, 2.0] {
        insert(&test.db, "Box", weight).await;
    }
    let query = SqliteListProductsQuery::new(test.db.clone());

    let all = query.list(ProductPage::default()).await.unwrap();
    let ids: Vec<_> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let skipped = query
        .list(ProductPage {
            skip: Some(1),
            take: None,
        })
        .await
        .unwrap();
    let ids: Vec<_> = skipped.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let taken = query
        .list(ProductPage {
            skip: None,
            take: Some(1),
        })
        .await
        .unwrap();
    assert_eq!(taken, vec![ProductDto::new(1, "Box", 3.0)]);
}

#[tokio::test]
async fn test_filter_by_weight_is_inclusive() {
    let test = test_db().await;
    for weight in [4.99, 5.0, 10.0, 15.0, 15.01] {
        insert(&test.db, "Box", weight).await;
    }
    let query = SqliteFilterByWeightQuery::new(test.db.clone());

    let matched = query.filter_by_weight(5.0, 15.0).await.unwrap();
    let weights: Vec<_> = matched.iter().map(|p| p.weight).collect();

    assert_eq!(weights, vec![5.0, 10.0, 15.0]);
    assert!(query.filter_by_weight(20.0, 30.0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_check_tolerance() {
    let test = test_db().await;
    insert(&test.db, "Box", 10.0).await;
    let query = SqliteWeightToleranceQuery::new(test.db.clone());

    assert!(query.check_tolerance(1, 5.0, 15.0).await.unwrap());
    assert!(query.check_tolerance(1, 10.0, 10.0).await.unwrap());
    assert!(!query.check_tolerance(1, 20.0, 30.0).await.unwrap());
    assert!(!query.check_tolerance(42, 0.0, 100.0).await.unwrap());
}

#[tokio::test]
async fn test_invalid_stored_row_is_internal_fault() {
    let test = test_db().await;
    entity::ActiveModel {
        name: Set("   ".to_string()),
        weight: Set(1.0),
        ..Default::default()
    }
    .insert(&test.db)
    .await
    .unwrap();

    let err = SqliteProductRepository::new(test.db.clone())
        .get_by_id(1)
        .await
        .unwrap_err();

    assert!(matches!(err, ProductError::Internal(_)));
}

#[tokio::test]
async fn test_dispatcher_scenario() {
    let test = test_db().await;
    let dispatcher = sqlite::dispatcher(test.db.clone());

    let created = dispatcher
        .dispatch(CreateProduct::new("Box", 10.0).into())
        .await
        .unwrap();
    assert_eq!(created, ProductResponse::Created(1));

    let listed = dispatcher
        .dispatch(ListProducts::default().into())
        .await
        .unwrap();
    assert_eq!(
        listed,
        ProductResponse::Products(vec![ProductDto::new(1, "Box", 10.0)])
    );

    let check = |product_id, min_weight, max_weight| WeightToleranceCheck {
        product_id,
        min_weight,
        max_weight,
    };

    let within = dispatcher.dispatch(check(1, 5.0, 15.0).into()).await.unwrap();
    assert_eq!(within, ProductResponse::Tolerance(true));

    let outside = dispatcher.dispatch(check(1, 20.0, 30.0).into()).await.unwrap();
    assert_eq!(outside, ProductResponse::Tolerance(false));

    let err = dispatcher
        .dispatch(check(999, 0.0, 100.0).into())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = dispatcher
        .dispatch(CreateProduct::new("", 5.0).into())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let listed = dispatcher
        .dispatch(ListProducts::default().into())
        .await
        .unwrap();
    assert_eq!(
        listed,
        ProductResponse::Products(vec![ProductDto::new(1, "Box", 10.0)])
    );
}
