use crate::{
    client::{PredictClient, Upload},
    diagnosis::Diagnosis,
    error::Failure,
    view::{ResultArea, View},
};
use tracing::{error, info, instrument};

/// Send the selected image for prediction and render the outcome.
///
/// Without a selection no request is made. Every request failure renders the
/// same message; the cause only goes to the log.
///
/// # Errors
/// [`Failure::NoFileSelected`] or [`Failure::PredictionFailed`].
#[instrument(skip_all, fields(endpoint = %client.endpoint()))]
pub async fn predict(
    client: &PredictClient,
    view: &mut impl View,
    selection: Option<Upload>,
) -> Result<Diagnosis, Failure> {
    let Some(upload) = selection else {
        view.result(ResultArea::Notice(Failure::NoFileSelected.to_string()));
        return Err(Failure::NoFileSelected);
    };

    view.preview(&upload);
    view.result(ResultArea::Loading);

    match client.predict(&upload).await {
        Ok(diagnosis) => {
            info!(
                plant = %diagnosis.plant,
                disease = %diagnosis.disease,
                confidence = %diagnosis.confidence,
                "prediction received"
            );

            view.result(ResultArea::Diagnosis(diagnosis.clone()));
            view.reveal_result();

            Ok(diagnosis)
        }
        Err(e) => {
            error!("Prediction failed: {}", e);

            view.result(ResultArea::Notice(Failure::PredictionFailed.to_string()));

            Err(Failure::PredictionFailed)
        }
    }
}
