use std::sync::Arc;
use tokio::sync::Mutex;
use actix_web::{web, App, HttpServer, middleware};
use log::info;

use crate::store::AwardRepository;
use crate::web::handlers;
use crate::web::models::DatasetInfo;

/// Shared application state for web handlers
pub struct AppState {
    pub repository: Arc<Mutex<dyn AwardRepository>>,
    pub dataset: DatasetInfo,
}

impl AppState {
    pub fn new<R: AwardRepository + 'static>(repository: R, dataset: DatasetInfo) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
            dataset,
        }
    }
}

/// Register every route of the awards API
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Award APIs
        .route("/awards", web::get().to(handlers::awards::list_awards))
        .route(
            "/awards/longest-fastest-consecutive-awards",
            web::get().to(handlers::awards::get_longest_fastest_consecutive_awards),
        )
        // System APIs
        .route("/system/status", web::get().to(handlers::system::get_status));
}

/// Start the web server for the awards API
pub async fn start_web_server(bind_address: &str, state: AppState) -> std::io::Result<()> {
    info!("Starting web server on http://{}", bind_address);

    let app_state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configure_routes)
            // Default route for 404
            .default_service(web::route().to(handlers::system::not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
