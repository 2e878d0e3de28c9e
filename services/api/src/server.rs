use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_triage_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use symptom_triage::config::AppConfig;
use symptom_triage::error::AppError;
use symptom_triage::InferenceEngine;
use tracing::info;

pub(crate) async fn run(
    mut config: AppConfig,
    mut args: ServeArgs,
    engine: InferenceEngine,
) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let rules = engine.catalog().rules().len();
    let app = with_triage_routes(Arc::new(engine))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, rules, "symptom triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
