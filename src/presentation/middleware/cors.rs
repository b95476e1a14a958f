//! CORS Middleware Configuration

use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsSettings;

/// Create CORS layer from settings.
///
/// A single `*` entry (or an empty list) allows any origin.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let wildcard = settings.allowed_origins.iter().any(|o| o == "*");

    let origins: Vec<_> = settings
        .allowed_origins
        .iter()
        .filter(|o| o.as_str() != "*")
        .filter_map(|o| o.parse().ok())
        .collect();

    if wildcard || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(std::time::Duration::from_secs(3600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_settings_build_a_layer() {
        let settings = CorsSettings {
            allowed_origins: vec!["*".into()],
        };
        let _ = create_cors_layer(&settings);
    }

    #[test]
    fn explicit_origins_build_a_layer() {
        let settings = CorsSettings {
            allowed_origins: vec!["http://localhost:8080".into()],
        };
        let _ = create_cors_layer(&settings);
    }
}
