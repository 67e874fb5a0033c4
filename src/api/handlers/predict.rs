use crate::{api::Classifier, client::FILE_FIELD, diagnosis::diagnose};
use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, instrument};

// axum handler for predict
#[instrument(skip_all)]
pub async fn predict(
    classifier: Extension<Arc<dyn Classifier>>,
    multipart: Option<Multipart>,
) -> Response {
    let Some(mut multipart) = multipart else {
        return no_image();
    };

    let image = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(FILE_FIELD) => match field.bytes().await {
                Ok(bytes) => break bytes,
                Err(e) => {
                    error!("Error reading upload: {}", e);

                    return (StatusCode::BAD_REQUEST, e.body_text()).into_response();
                }
            },
            Ok(Some(_)) => continue,
            Ok(None) => return no_image(),
            Err(e) => {
                error!("Error reading multipart body: {}", e);

                return (StatusCode::BAD_REQUEST, e.body_text()).into_response();
            }
        }
    };

    debug!("image received: {} bytes", image.len());

    let prediction = classifier.classify(&image);
    let diagnosis = diagnose(&prediction.label, prediction.confidence);

    (StatusCode::OK, Json(diagnosis)).into_response()
}

fn no_image() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "No image uploaded"})),
    )
        .into_response()
}
