use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use dashboard_core::{DashboardConfig, LogNotifier};
use dashboard_http::{AppState, serve};
use dashboard_loader::DataSource;
use dashboard_service::Dashboard;

/// Local data directories are also exposed under `/data`.
fn static_dir(data: &DataSource) -> Option<PathBuf> {
    match data {
        DataSource::File(path) if path.is_dir() => Some(path.clone()),
        DataSource::File(_) | DataSource::Http(_) => None,
    }
}

pub(crate) async fn run(port: u16, host: String, data: Option<String>) -> Result<()> {
    let mut config = DashboardConfig::from_env();
    if let Some(data) = data {
        config = config.with_data(data);
    }

    let dashboard = Dashboard::from_config(&config, Arc::new(LogNotifier))?;
    let report = dashboard.reload_all().await;
    if report.failures() > 0 {
        tracing::warn!(
            failures = report.failures(),
            "some collections failed to load; they stay empty until reloaded"
        );
    }

    let state = Arc::new(AppState {
        dashboard: Arc::new(dashboard),
        data_dir: static_dir(&DataSource::parse(&config.data)),
    });

    let addr = format!("{host}:{port}");
    serve(&addr, state).await
}
