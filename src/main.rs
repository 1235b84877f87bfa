mod inference;
mod routes;
mod types;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::info;

use inference::{Classifier, OnnxClassifier};

/// Fixed artifact location, read exactly once at startup.
pub const MODEL_PATH: &str = "models/german_credit_model.onnx";

/// Feature count after one-hot encoding of the German credit data.
pub const FEATURE_ARITY: usize = 48;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    // A missing or corrupt artifact must keep the server from ever binding.
    let model = OnnxClassifier::load(MODEL_PATH, FEATURE_ARITY)
        .with_context(|| format!("failed to load model artifact from {MODEL_PATH}"))?;
    let model: Arc<dyn Classifier> = Arc::new(model);
    info!("model loaded from {MODEL_PATH} (arity {FEATURE_ARITY})");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let workers = std::env::var("WORKERS")
        .ok()
        .and_then(|w| w.parse().ok())
        .unwrap_or_else(num_cpus::get);
    let bind_address = format!("{host}:{port}");

    info!("serving on http://{bind_address} with {workers} workers");
    info!("  GET  /health       - liveness");
    info!("  GET  /model_info   - loaded artifact description");
    info!("  POST /predict_risk - score one 48-feature row");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(model.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::json_error_handler))
            .service(routes::predict_risk)
            .service(routes::health)
            .service(routes::model_info)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
