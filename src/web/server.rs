use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use log::info;
use std::env;
use std::net::{IpAddr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::web::api::create_router;

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Only origin allowed by CORS
    pub frontend_url: String,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            frontend_url: "http://localhost:3000".to_string(),
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `FRONTEND_URL`; unset or unparsable values keep their defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            frontend_url: lookup("FRONTEND_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.frontend_url),
            enable_cors: defaults.enable_cors,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Router with CORS applied according to `config`
pub fn build_app(config: &ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    let app = create_router();
    if !config.enable_cors {
        return Ok(app);
    }

    let origin: HeaderValue = config.frontend_url.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Ok(app.layer(ServiceBuilder::new().layer(cors).into_inner()))
}

/// Start the web server with custom configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config)?;
    let addr = config.socket_addr();

    info!("graph comparison server listening on http://{}", addr);
    if config.enable_cors {
        info!("CORS origin: {}", config.frontend_url);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
