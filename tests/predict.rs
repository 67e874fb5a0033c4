//! Prediction handler against in-process HTTP endpoints.

use anyhow::Result;
use axum::{extract::Multipart, http::StatusCode, routing::post, Json, Router};
use leafdoc::{
    api::{self, FixedLabel},
    client::{PredictClient, Upload},
    error::Failure,
    handlers::predict,
    view::{RecordingView, ResultArea},
};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::net::TcpListener;
use url::Url;

async fn spawn(app: Router) -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app.into_make_service()).await;
    });

    Ok(addr)
}

fn client(addr: SocketAddr) -> Result<PredictClient> {
    let endpoint = Url::parse(&format!("http://{addr}/predict"))?;
    Ok(PredictClient::new(endpoint, None)?)
}

/// Mock endpoint returning a fixed diagnosis and counting requests.
async fn mock(hits: Arc<AtomicUsize>) -> Result<SocketAddr> {
    let app = Router::new().route(
        "/predict",
        post(move |mut multipart: Multipart| {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);

                let mut saw_file = false;
                while let Ok(Some(field)) = multipart.next_field().await {
                    if field.name() == Some("file") {
                        saw_file = true;
                    }
                }

                if !saw_file {
                    return (StatusCode::BAD_REQUEST, Json(json!({"error": "no file"})));
                }

                (
                    StatusCode::OK,
                    Json(json!({
                        "plant": "Tomato",
                        "disease": "Blight",
                        "confidence": "92%",
                        "cause": "Fungus",
                        "remedy": "Fungicide"
                    })),
                )
            }
        }),
    );

    spawn(app).await
}

#[tokio::test]
async fn renders_all_five_fields() -> Result<()> {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = mock(hits.clone()).await?;
    let client = client(addr)?;

    let mut view = RecordingView::new();
    let upload = Upload::new("leaf.jpg", vec![0xff, 0xd8, 0xff]);
    let diagnosis = predict(&client, &mut view, Some(upload)).await?;

    assert_eq!(diagnosis.plant, "Tomato");
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let text = view.result_text().unwrap_or_default();
    for value in ["Tomato", "Blight", "92%", "Fungus", "Fungicide"] {
        assert!(text.contains(value), "missing {value} in {text}");
    }

    assert_eq!(view.previews, vec!["leaf.jpg".to_string()]);
    assert_eq!(view.results.first(), Some(&ResultArea::Loading));
    assert!(view.revealed);

    Ok(())
}

#[tokio::test]
async fn no_file_makes_no_request() -> Result<()> {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = mock(hits.clone()).await?;
    let client = client(addr)?;

    let mut view = RecordingView::new();
    let result = predict(&client, &mut view, None).await;

    assert_eq!(result, Err(Failure::NoFileSelected));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(view.result_text(), Some("Please select an image".to_string()));
    assert!(view.previews.is_empty());
    assert!(!view.revealed);

    Ok(())
}

#[tokio::test]
async fn server_error_shows_generic_failure() -> Result<()> {
    let app = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
    );
    let addr = spawn(app).await?;
    let client = client(addr)?;

    let mut view = RecordingView::new();
    let result = predict(&client, &mut view, Some(Upload::new("leaf.png", vec![1]))).await;

    assert_eq!(result, Err(Failure::PredictionFailed));
    assert_eq!(
        view.result_text(),
        Some("Prediction failed. Check backend.".to_string())
    );
    assert!(!view.revealed);

    Ok(())
}

#[tokio::test]
async fn malformed_body_shows_generic_failure() -> Result<()> {
    let app = Router::new().route("/predict", post(|| async { "<html>oops</html>" }));
    let addr = spawn(app).await?;
    let client = client(addr)?;

    let mut view = RecordingView::new();
    let result = predict(&client, &mut view, Some(Upload::new("leaf.png", vec![1]))).await;

    assert_eq!(result, Err(Failure::PredictionFailed));

    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_shows_generic_failure() -> Result<()> {
    // bind then drop to get a port nothing listens on
    let addr = TcpListener::bind("127.0.0.1:0").await?.local_addr()?;
    let client = client(addr)?;

    let mut view = RecordingView::new();
    let result = predict(&client, &mut view, Some(Upload::new("leaf.png", vec![1]))).await;

    assert_eq!(result, Err(Failure::PredictionFailed));
    assert_eq!(
        view.result_text(),
        Some("Prediction failed. Check backend.".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn stalled_endpoint_times_out() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    // accept and hold connections without ever replying
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let endpoint = Url::parse(&format!("http://{addr}/predict"))?;
    let client = PredictClient::new(endpoint, Some(Duration::from_secs(1)))?;

    let mut view = RecordingView::new();
    let upload = Some(Upload::new("leaf.png", vec![1]));
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        predict(&client, &mut view, upload),
    )
    .await?;

    assert_eq!(result, Err(Failure::PredictionFailed));
    assert_eq!(
        view.result_text(),
        Some("Prediction failed. Check backend.".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn development_server_roundtrip() -> Result<()> {
    let classifier = Arc::new(FixedLabel::new("Pepper__bell___Bacterial_spot", 0.8765));
    let addr = spawn(api::router(classifier)).await?;
    let client = client(addr)?;

    let mut view = RecordingView::new();
    let diagnosis = predict(&client, &mut view, Some(Upload::new("leaf.jpg", vec![7; 64]))).await?;

    assert_eq!(diagnosis.plant, "Bell Pepper");
    assert_eq!(diagnosis.disease, "Bacterial Spot");
    assert_eq!(diagnosis.confidence, "87.65%");
    assert_eq!(
        diagnosis.remedy,
        "Use copper-based bactericide and disease-free seeds."
    );

    Ok(())
}
