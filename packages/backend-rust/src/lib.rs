pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::AppState;

pub fn create_app() -> axum::Router {
    create_app_with_config(Config::from_env())
}

pub fn create_app_with_config(config: Config) -> axum::Router {
    let state = AppState::new(config);
    routes::router(state).layer(TraceLayer::new_for_http())
}
