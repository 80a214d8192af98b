//! Postgres-backed tests for the invoice search and the overview metrics.
//!
//! Requires Docker: testcontainers launches one PostgreSQL container per
//! test binary, kept alive in a process-global `OnceLock` so it survives
//! the per-test tokio runtimes. The dataset is seeded once and every test
//! only reads, so tests are safe to run in parallel.

use std::sync::OnceLock;

use actix_web::{App, http::StatusCode, test, web};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres;
use uuid::Uuid;

struct PgTestEnv {
    /// Container handle; dropping this stops the PostgreSQL container, so
    /// it lives in a static for the entire test binary.
    _container: testcontainers::ContainerAsync<Postgres>,
    connection_url: String,
}

static TEST_ENV: OnceLock<PgTestEnv> = OnceLock::new();

// Serializes container startup so parallel tests cannot each start one and
// seed the dataset twice.
static INIT_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Seven invoices across two customers: 4 pending, 3 paid. With a page
/// size of 5 the empty query yields two pages.
async fn seed(pool: &PgPool) {
    let amy: Uuid = sqlx::query_scalar(
        "INSERT INTO customers (name, email, image_url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("Amy Burns")
    .bind("amy@burns.com")
    .bind("/customers/amy-burns.png")
    .fetch_one(pool)
    .await
    .unwrap();

    let lee: Uuid = sqlx::query_scalar(
        "INSERT INTO customers (name, email, image_url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("Lee Robinson")
    .bind("lee@robinson.com")
    .bind("/customers/lee-robinson.png")
    .fetch_one(pool)
    .await
    .unwrap();

    let invoices: [(Uuid, i32, &str, &str); 7] = [
        (amy, 100000, "pending", "2023-10-01"),
        (amy, 200000, "paid", "2023-10-02"),
        (amy, 300000, "pending", "2023-10-03"),
        (amy, 123456, "pending", "2023-10-04"),
        (lee, 50000, "paid", "2023-10-05"),
        (lee, 60000, "pending", "2023-10-06"),
        (lee, 70000, "paid", "2023-10-07"),
    ];
    for (customer_id, amount, status, date) in invoices {
        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1, $2, $3, $4::date)",
        )
        .bind(customer_id)
        .bind(amount)
        .bind(status)
        .bind(date)
        .execute(pool)
        .await
        .unwrap();
    }
}

async fn init_pg_env() -> &'static PgTestEnv {
    if let Some(env) = TEST_ENV.get() {
        return env;
    }
    let _guard = INIT_LOCK.lock().await;
    if let Some(env) = TEST_ENV.get() {
        return env;
    }

    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start PostgreSQL container — is Docker running?");

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to PostgreSQL");
    sqlx::migrate!("../db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    seed(&pool).await;
    // The setup pool's runtime dies with this test; later tests make their own.
    pool.close().await;

    let env = PgTestEnv {
        _container: container,
        connection_url: url,
    };
    let _ = TEST_ENV.set(env);
    TEST_ENV.get().unwrap()
}

/// Fresh pool bound to the current test's runtime.
async fn pg_pool() -> Arc<PgPool> {
    let env = init_pg_env().await;
    Arc::new(
        PgPoolOptions::new()
            .max_connections(2)
            .connect(&env.connection_url)
            .await
            .expect("Failed to connect to PostgreSQL"),
    )
}

async fn get_json(path: &str) -> (StatusCode, serde_json::Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pg_pool().await))
            .service(api_dashboard::mount_dashboard()),
    )
    .await;

    let req = test::TestRequest::get().uri(path).to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    let body = test::read_body_json(res).await;
    (status, body)
}

#[actix_web::test]
async fn first_page_holds_five_items_and_reports_two_pages() {
    let (status, body) = get_json("/dashboard/invoices?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["total_pages"], 2);
}

#[actix_web::test]
async fn second_page_holds_the_remainder() {
    let (status, body) = get_json("/dashboard/invoices?page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_pages"], 2);
}

#[actix_web::test]
async fn page_past_the_match_set_keeps_total_pages() {
    let (status, body) = get_json("/dashboard/invoices?page=99").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_pages"], 2);
}

#[actix_web::test]
async fn every_returned_row_matches_the_search_term() {
    let (status, body) = get_json("/dashboard/invoices?query=pending").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    for item in items {
        assert_eq!(item["status"], "pending");
    }
    assert_eq!(body["total_pages"], 1);
}

#[actix_web::test]
async fn search_matches_customer_name_case_insensitively() {
    let (status, body) = get_json("/dashboard/invoices?query=amy").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    for item in items {
        assert_eq!(item["name"], "Amy Burns");
    }
}

#[actix_web::test]
async fn rows_are_ordered_by_date_descending() {
    let (_, body) = get_json("/dashboard/invoices?page=1").await;

    let dates: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["date"].as_str().unwrap())
        .collect();
    assert_eq!(
        dates,
        vec!["Oct 7, 2023", "Oct 6, 2023", "Oct 5, 2023", "Oct 4, 2023", "Oct 3, 2023"]
    );
}

#[actix_web::test]
async fn unknown_invoice_id_is_not_found() {
    let (status, _) =
        get_json(&format!("/dashboard/invoices/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn overview_cards_aggregate_counts_and_totals() {
    let (status, body) = get_json("/dashboard/overview/cards").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number_of_invoices"], 7);
    assert_eq!(body["number_of_customers"], 2);
    // paid: 200000 + 50000 + 70000 cents
    assert_eq!(body["total_paid_invoices"], "$3,200.00");
    // pending: 100000 + 300000 + 123456 + 60000 cents
    assert_eq!(body["total_pending_invoices"], "$5,834.56");
}
