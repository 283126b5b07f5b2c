use crate::cli::ServeArgs;
use crate::infra::{assessment_service, AppState};
use crate::routes::with_renewal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rera_smart::config::AppConfig;
use rera_smart::error::AppError;
use rera_smart::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if !config.advisory.has_api_key() {
        warn!("no advisory API key configured, assessments will carry fallback advice");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = assessment_service(&config)?;

    let app = with_renewal_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "rent renewal assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
