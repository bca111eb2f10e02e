use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, AppState};

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

/// Serve the router over a private in-memory database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    let app = routes::build_router(AppState::from_db(db), CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()) })
}

fn client() -> reqwest::Client { reqwest::Client::new() }

async fn create_product(app: &TestApp, name: &str, price: f64, quantity: i32) -> anyhow::Result<Value> {
    let res = client()
        .post(app.url("/products"))
        .json(&json!({"name": name, "price": price, "quantity": quantity}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    Ok(res.json().await?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_customer_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(app.url("/customers"))
        .json(&json!({"first_name": "Popescu", "last_name": "Elena"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_i64().expect("id");
    assert!(id > 0);

    let res = c.get(app.url(&format!("/customers/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = c.put(app.url(&format!("/customers/{id}")))
        .json(&json!({"last_name": "Ionescu"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["first_name"], "Popescu");
    assert_eq!(updated["last_name"], "Ionescu");

    let res = c.delete(app.url(&format!("/customers/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(app.url(&format!("/customers/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Not Found");

    let res = c.delete(app.url(&format!("/customers/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_missing_ids_are_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    assert_eq!(c.get(app.url("/customers/0")).send().await?.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(c.get(app.url("/products/12345")).send().await?.status(), HttpStatusCode::NOT_FOUND);
    let res = c.put(app.url("/products/12345")).json(&json!({"quantity": 1})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_negative_price_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(app.url("/products"))
        .json(&json!({"name": "Broken", "price": -3.5, "quantity": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Validation Error");

    let res = client().get(app.url("/products")).send().await?;
    assert_eq!(res.json::<Value>().await?["total_elements"], 0);
    Ok(())
}

#[tokio::test]
async fn e2e_product_search_filters_and_paginates() -> anyhow::Result<()> {
    let app = start_server().await?;
    create_product(&app, "Widget-A", 10.0, 5).await?;
    create_product(&app, "Gadget", 20.0, 5).await?;
    create_product(&app, "Widget-B", 30.0, 5).await?;

    let res = client()
        .get(app.url("/products?partial_name=Widget&minimum_quantity=5&size=2&sort=name,asc"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let page = res.json::<Value>().await?;
    let names: Vec<_> = page["content"].as_array().unwrap().iter().map(|p| p["name"].as_str().unwrap().to_string()).collect();
    assert_eq!(names, vec!["Widget-A", "Widget-B"]);
    assert_eq!(page["total_elements"], 2);
    assert_eq!(page["total_pages"], 1);

    let res = client()
        .get(app.url("/products?minimum_price=15&maximum_price=25&minimum_quantity=5"))
        .send()
        .await?;
    let page = res.json::<Value>().await?;
    assert_eq!(page["content"].as_array().unwrap().len(), 1);
    assert_eq!(page["content"][0]["name"], "Gadget");

    let res = client().get(app.url("/products?partial_name=Sprocket")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["content"], json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_bad_query_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/products?sort=colour")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let res = client().get(app.url("/products?minimum_price=9&maximum_price=1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api-docs/openapi.json")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/products/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_requests_get_json_errors() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(app.url("/products")).json(&json!({"name": "NoPrice", "quantity": 1})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Validation Error");
    assert!(body["message"].as_str().unwrap_or_default().contains("price"));

    let res = c.get(app.url("/products?minimum_price=abc")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Validation Error");

    let res = c.get(app.url("/customers/99999999999")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Validation Error");

    let res = c.put(app.url("/customers/1")).header("content-type", "application/json").body("{").send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn e2e_page_far_past_the_end_is_empty() -> anyhow::Result<()> {
    let app = start_server().await?;
    create_product(&app, "Widget", 1.0, 1).await?;
    let res = client()
        .get(app.url("/products?page=18446744073709551615&size=100"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let page = res.json::<Value>().await?;
    assert_eq!(page["content"], json!([]));
    assert_eq!(page["total_elements"], 1);
    Ok(())
}
