use actix_web::{error, get, post, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};

use crate::inference::Classifier;
use crate::types::{
    ErrorDetail, HealthStatus, ModelInfo, PredictionRequest, PredictionResponse, RiskLabel,
};
use crate::MODEL_PATH;

#[post("/predict_risk")]
pub async fn predict_risk(
    model: web::Data<dyn Classifier>,
    input: web::Json<PredictionRequest>,
) -> impl Responder {
    let features = input.into_inner().features;

    let arity = model.arity();
    if features.len() != arity {
        return HttpResponse::BadRequest().json(ErrorDetail::new(format!(
            "Input array must contain exactly {} processed features.",
            arity
        )));
    }

    // Only the classify call is caught here; anything after it has its own
    // failure surface.
    let code = match model.classify(&features) {
        Ok(code) => code,
        Err(e) => {
            error!("classification failed: {e:#}");
            return HttpResponse::InternalServerError()
                .json(ErrorDetail::new(format!("Prediction failed: {e}")));
        }
    };

    match RiskLabel::from_code(code) {
        Some(label) => {
            info!("prediction: code={code} label={}", label.as_str());
            HttpResponse::Ok().json(PredictionResponse::new(code, label))
        }
        None => {
            error!("model returned class code {code}, outside the known enumeration");
            HttpResponse::InternalServerError().json(ErrorDetail::new(format!(
                "Prediction failed: model returned unknown class code {code}"
            )))
        }
    }
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus { status: "ok" })
}

#[get("/model_info")]
pub async fn model_info(model: web::Data<dyn Classifier>) -> impl Responder {
    HttpResponse::Ok().json(ModelInfo {
        input_arity: model.arity(),
        labels: vec![RiskLabel::Good.as_str(), RiskLabel::Bad.as_str()],
        artifact_path: MODEL_PATH,
    })
}

/// Rejects malformed bodies with the same `{"detail": ..}` shape the rest of
/// the API uses, instead of actix's plain-text default.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let body = ErrorDetail::new(err.to_string());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
