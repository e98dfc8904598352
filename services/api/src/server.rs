use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_guidance_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use career_compass::guidance::GuidanceService;
use career_compass::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(GuidanceService::from_rules_path(
        config.guidance.rules_path.as_deref(),
    )?);
    let rules = service.catalog().len();

    let app = with_guidance_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, rules, "career guidance service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
