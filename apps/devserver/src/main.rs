use std::net::SocketAddr;

use axum::{routing::get, Json, Router};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let app = build_router();

    let addr: SocketAddr = bind_addr().parse()?;
    info!(%addr, "roster feed listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn bind_addr() -> String {
    let mut bind = "127.0.0.1:3000".to_string();
    if let Ok(v) = std::env::var("SERVER_BIND") {
        bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        bind = v;
    }
    bind
}

fn build_router() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/people.json", get(people))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn people() -> Json<serde_json::Value> {
    Json(serde_json::json!([
        {
            "name": "Bob", "gender": "Male", "age": 23,
            "pets": [
                { "name": "Garfield", "type": "Cat" },
                { "name": "Fido", "type": "Dog" }
            ]
        },
        {
            "name": "Jennifer", "gender": "Female", "age": 18,
            "pets": [{ "name": "Garfield", "type": "Cat" }]
        },
        { "name": "Steve", "gender": "Male", "age": 45, "pets": null },
        {
            "name": "Fred", "gender": "Male", "age": 40,
            "pets": [
                { "name": "Tom", "type": "Cat" },
                { "name": "Max", "type": "Cat" },
                { "name": "Sam", "type": "Dog" },
                { "name": "Jim", "type": "Cat" }
            ]
        },
        {
            "name": "Samantha", "gender": "Female", "age": 40,
            "pets": [{ "name": "Tabby", "type": "Cat" }]
        },
        {
            "name": "Alice", "gender": "Female", "age": 64,
            "pets": [
                { "name": "Simba", "type": "Cat" },
                { "name": "Nemo", "type": "Fish" }
            ]
        }
    ]))
}
