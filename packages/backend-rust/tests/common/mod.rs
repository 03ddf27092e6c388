use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use axum::Router;

use dvmn_backend_rust::config::Config;

pub fn test_config(base_url: &str) -> Config {
    Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        log_level: "info".to_string(),
        dvmn_base_url: base_url.to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        http_timeout: Duration::from_secs(5),
    }
}

pub fn create_test_app(base_url: &str) -> Router {
    dvmn_backend_rust::create_app_with_config(test_config(base_url))
}

/// Serves a canned upstream on an ephemeral local port, returns its base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream listener");
    let addr = listener.local_addr().expect("upstream addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}
