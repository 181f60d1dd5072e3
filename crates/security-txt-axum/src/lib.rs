//! Axum binding for `security.txt`.
//!
//! Translates the pure [`SecurityTxtResponse`] record into an axum response
//! and offers a ready-made [`Router`] serving the two conventional paths.
//! The document is regenerated per request; the configuration is shared
//! read-only state.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use security_txt::{respond, SecurityTxtConfig, SecurityTxtResponse};

/// Request path of the canonical copy.
pub const WELL_KNOWN_ROUTE: &str = "/.well-known/security.txt";

/// Request path of the legacy web-root copy.
pub const ROOT_ROUTE: &str = "/security.txt";

/// Wrapper giving the response record an [`IntoResponse`] impl without
/// coupling the core crate to axum.
#[derive(Clone, Debug)]
pub struct SecurityTxt(pub SecurityTxtResponse);

impl IntoResponse for SecurityTxt {
    fn into_response(self) -> Response {
        let SecurityTxtResponse {
            status,
            content_type,
            cache_control,
            body,
        } = self.0;
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
        (
            status,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, cache_control),
            ],
            body,
        )
            .into_response()
    }
}

/// Builds a router serving `/.well-known/security.txt`, plus `/security.txt`
/// unless the configuration disables the web-root copy.
pub fn router(config: SecurityTxtConfig) -> Router {
    let disable_root = config.disable_root;
    let state = Arc::new(config);

    let mut router = Router::new().route(WELL_KNOWN_ROUTE, get(serve));
    if !disable_root {
        router = router.route(ROOT_ROUTE, get(serve));
    }
    router.with_state(state)
}

async fn serve(State(config): State<Arc<SecurityTxtConfig>>) -> SecurityTxt {
    SecurityTxt(respond(&config))
}
