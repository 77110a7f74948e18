use http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::error::{Error, Result};

pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}

/// CORS for the browser front end. Without a configured origin every origin is allowed.
pub fn frontend_cors(frontend_url: Option<&str>) -> Result<CorsLayer> {
    let Some(url) = frontend_url else {
        return Ok(permissive_cors());
    };

    let origin = HeaderValue::from_str(url.trim_end_matches('/'))
        .map_err(|e| Error::Config(format!("Invalid FRONTEND_URL {}: {}", url, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
