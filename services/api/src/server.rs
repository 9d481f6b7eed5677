use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryResultRepository};
use crate::routes::with_inventory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tci::config::AppConfig;
use tci::error::AppError;
use tci::inventory::results::AssessmentService;
use tci::inventory::{ItemCatalog, ScoringEngine};
use tci::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(ItemCatalog::standard());
    let repository = Arc::new(InMemoryResultRepository::default());
    let assessment_service = Arc::new(AssessmentService::new(
        ScoringEngine::new(catalog.clone()),
        repository,
        config.sharing.clone(),
    ));

    let app = with_inventory_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(Extension(catalog))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "TCI scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
