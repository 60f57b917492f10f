use log::{info, error};
use chrono::Utc;

use razzie_awards::core::config::AppConfig;
use razzie_awards::core::error::AwardError;
use razzie_awards::store::{load_dataset, SqliteAwardStore};
use razzie_awards::web::models::DatasetInfo;
use razzie_awards::web::server::{start_web_server, AppState};

#[actix_web::main]
async fn main() {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    info!("Starting Golden Raspberry Awards service...");

    let (config, state) = match prepare() {
        Ok(prepared) => prepared,
        Err(e) => {
            error!("Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = start_web_server(&config.bind_address, state).await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }

    info!("Golden Raspberry Awards service shutdown complete");
}

/// Read configuration, open the store and load the initial dataset
fn prepare() -> Result<(AppConfig, AppState), AwardError> {
    let config = AppConfig::from_env()?;
    info!(
        "Configuration loaded: dataset={}, database={:?}",
        config.dataset_path.display(),
        config.database
    );

    let mut store = SqliteAwardStore::open(&config.database)?;
    let report = load_dataset(&config.dataset_path, config.delimiter)?;
    store.replace_all(&report.records)?;
    info!("Database setup complete ({} records)", report.records.len());

    let dataset = DatasetInfo {
        path: config.dataset_path.display().to_string(),
        loaded_at: Utc::now(),
        loaded: report.records.len(),
        skipped: report.skipped,
    };

    Ok((config, AppState::new(store, dataset)))
}
