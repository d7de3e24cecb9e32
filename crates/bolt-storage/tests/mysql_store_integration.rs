use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use bolt_core::{ShortCode, UrlStore};
use bolt_storage::MySqlStore;
use bolt_test_infra::mysql::{MySqlServer, MysqlConfig};
use sqlx::mysql::MySqlPoolOptions;

struct Fixture {
    _mysql: MySqlServer,
    store: MySqlStore,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::new(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let url = mysql.database_url().await.expect("mysql url");
        let pool = connect_with_retry(&url).await;

        for ddl in [
            include_str!("../ddl/mysql/short_urls.sql"),
            include_str!("../ddl/mysql/counters.sql"),
        ] {
            sqlx::query(ddl).execute(&pool).await.expect("create schema");
        }

        Self {
            _mysql: mysql,
            store: MySqlStore::new(pool),
        }
    }
}

async fn connect_with_retry(url: &str) -> sqlx::MySqlPool {
    let mut last_error = None;

    for _ in 0..20 {
        match MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
        {
            Ok(pool) => return pool,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect mysql: {last_error:?}");
}

#[tokio::test]
async fn create_assigns_codes_from_one() {
    let fixture = Fixture::start().await;

    let first = fixture
        .store
        .create_record("https://example.com/a")
        .await
        .unwrap();
    let second = fixture
        .store
        .create_record("https://example.com/b")
        .await
        .unwrap();

    assert_eq!(first.short_code.value(), 1);
    assert_eq!(second.short_code.value(), 2);
}

#[tokio::test]
async fn find_by_original_url_is_exact() {
    let fixture = Fixture::start().await;

    fixture
        .store
        .create_record("https://example.com/Page")
        .await
        .unwrap();

    let found = fixture
        .store
        .find_by_original_url("https://example.com/Page")
        .await
        .unwrap();
    assert!(found.is_some());

    let miss = fixture
        .store
        .find_by_original_url("https://example.com/page")
        .await
        .unwrap();
    assert!(miss.is_none());
}

#[tokio::test]
async fn find_by_short_code_round_trip() {
    let fixture = Fixture::start().await;

    let created = fixture
        .store
        .create_record("https://example.com")
        .await
        .unwrap();

    let found = fixture
        .store
        .find_by_short_code(created.short_code)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.original_url, "https://example.com");
    assert_eq!(found.short_code, created.short_code);

    let missing = fixture
        .store
        .find_by_short_code(ShortCode::new(99))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn list_is_newest_first_and_capped() {
    let fixture = Fixture::start().await;

    for i in 0..5u64 {
        fixture
            .store
            .create_record(&format!("https://example.com/{i}"))
            .await
            .unwrap();
    }

    let listed = fixture.store.list_records(3).await.unwrap();
    let codes: Vec<u64> = listed.iter().map(|r| r.short_code.value()).collect();
    assert_eq!(codes, vec![5, 4, 3]);
}

#[tokio::test]
async fn count_follows_counter_row() {
    let fixture = Fixture::start().await;

    assert_eq!(fixture.store.count_records().await.unwrap(), 0);

    fixture
        .store
        .create_record("https://example.com/a")
        .await
        .unwrap();
    fixture
        .store
        .create_record("https://example.com/b")
        .await
        .unwrap();

    assert_eq!(fixture.store.count_records().await.unwrap(), 2);
}

#[tokio::test]
async fn concurrent_creations_get_distinct_codes() {
    let fixture = Fixture::start().await;
    let store = Arc::new(fixture.store.clone());
    let mut handles = vec![];

    for i in 0..10u64 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .create_record(&format!("https://example{i}.com"))
                .await
                .unwrap()
                .short_code
                .value()
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        assert!(codes.insert(handle.await.unwrap()));
    }

    assert_eq!(codes.len(), 10);
    assert_eq!(fixture.store.count_records().await.unwrap(), 10);
}
