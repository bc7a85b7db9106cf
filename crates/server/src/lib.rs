//! Prediction Service
//!
//! Serves the fitted model over a minimal JSON API with actix-web. The
//! artifact is deserialized exactly once at startup into an immutable
//! handle shared by all workers; a missing or corrupt artifact fails the
//! process before the listener binds.
//!
//! ## Routes
//!
//! - `GET /` — static greeting
//! - `GET /health` — liveness probe
//! - `POST /predict` — four measurements in, one species label out

pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use iris_forest::Artifact;
use iris_forest::Forest;

#[rustfmt::skip]
pub async fn run() -> anyhow::Result<()> {
    let path = Forest::path();
    anyhow::ensure!(
        Forest::done(),
        "model artifact missing at {}; run the trainer first",
        path.display()
    );
    let model = web::Data::new(Forest::load(&path)?);
    log::info!("model loaded from {}", path.display());
    let addr = iris_core::bind_addr();
    log::info!("starting prediction server on {}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(model.clone())
            .route("/", web::get().to(handlers::index))
            .route("/health", web::get().to(handlers::health))
            .route("/predict", web::post().to(handlers::predict))
    })
    .workers(2)
    .bind(addr)?
    .run()
    .await?;
    Ok(())
}
