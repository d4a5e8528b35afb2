//! Configuration and constants.
//!
//! The service takes no configuration file: every value is a fixed constant
//! below. `AppConfig` gathers them into one structure that is built once at
//! startup and handed to the router and the CORS layer, so tests can inject
//! alternate values without touching globals.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use const_format::formatcp;
use http::header::HeaderName;

// =============================================================================
// HTTP Listener
// =============================================================================

/// Listen on all interfaces
pub const DEFAULT_HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub const DEFAULT_HTTP_PORT: u16 = 8080;

// =============================================================================
// CORS
// =============================================================================

/// Origin of the frontend dev server
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

pub const DEFAULT_ALLOWED_METHODS: [&str; 3] = ["GET", "POST", "OPTIONS"];

pub const DEFAULT_ALLOWED_HEADERS: [&str; 1] = ["Content-Type"];

/// Separator used when rendering method and header lists into a header value
pub const HEADER_LIST_SEPARATOR: &str = ", ";

// =============================================================================
// Routes
// =============================================================================

pub const HEALTH_PATH: &str = "/health";

// =============================================================================
// Logging
// =============================================================================

/// Fixed log filter installed at startup
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", CRATE_TARGET);

/// Tracing target of this crate (crate name with dashes replaced)
const CRATE_TARGET: &str = "auth_api";

/// Root configuration passed through startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub http: HttpServerConfig,
    pub cors: CorsConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub bind_address: SocketAddr,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::new(DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT),
        }
    }
}

/// Values injected into every response by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Value of `Access-Control-Allow-Origin`
    pub allowed_origin: String,
    /// Joined into `Access-Control-Allow-Methods`
    pub allowed_methods: Vec<String>,
    /// Joined into `Access-Control-Allow-Headers`
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            allowed_methods: DEFAULT_ALLOWED_METHODS.iter().map(|m| m.to_string()).collect(),
            allowed_headers: DEFAULT_ALLOWED_HEADERS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl CorsConfig {
    /// Methods rendered as a header value, e.g. `GET, POST, OPTIONS`
    pub fn methods_header(&self) -> String {
        self.allowed_methods.join(HEADER_LIST_SEPARATOR)
    }

    /// Headers rendered as a header value, e.g. `Content-Type`
    pub fn headers_header(&self) -> String {
        self.allowed_headers.join(HEADER_LIST_SEPARATOR)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for header {name}: {value:?}")]
    InvalidHeader { name: HeaderName, value: String },
}
