//! Development server protocol checks.

use anyhow::Result;
use leafdoc::api::{self, FixedLabel};
use reqwest::{
    multipart::{Form, Part},
    StatusCode,
};
use serde_json::Value;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

async fn start() -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = api::router(Arc::new(FixedLabel::new("Tomato___Leaf_Mold", 0.5)));

    tokio::spawn(async move {
        let _ = axum::serve(listener, app.into_make_service()).await;
    });

    Ok(addr)
}

#[tokio::test]
async fn predict_without_file_part_is_bad_request() -> Result<()> {
    let addr = start().await?;

    let form = Form::new().part("image", Part::bytes(vec![1, 2, 3]).file_name("leaf.jpg"));
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/predict"))
        .multipart(form)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "No image uploaded");

    Ok(())
}

#[tokio::test]
async fn predict_without_multipart_is_bad_request() -> Result<()> {
    let addr = start().await?;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/predict"))
        .body("plain")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "No image uploaded");

    Ok(())
}

#[tokio::test]
async fn predict_returns_diagnosis() -> Result<()> {
    let addr = start().await?;

    let form = Form::new().part("file", Part::bytes(vec![1, 2, 3]).file_name("leaf.jpg"));
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/predict"))
        .multipart(form)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = response.json().await?;
    assert_eq!(body["plant"], "Tomato");
    assert_eq!(body["disease"], "Leaf Mold");
    assert_eq!(body["confidence"], "50.00%");
    assert_eq!(body["remedy"], "Improve ventilation and apply recommended fungicides.");

    Ok(())
}

#[tokio::test]
async fn health_reports_version() -> Result<()> {
    let addr = start().await?;

    let response = reqwest::get(format!("http://{addr}/health")).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-app"));

    let body: Value = response.json().await?;
    assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    Ok(())
}
