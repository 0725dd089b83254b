//! HTTP surface of the notes server.
//!
//! [`create_router`] wires the five note routes to a [`Database`] and wraps
//! them with the shared middleware: security headers, request tracing, a
//! panic catcher, and a plain-text 404 for anything unmatched.

mod error;
mod extract;
mod notes;

use std::any::Any;
use std::future::Future;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use notes_core::Database;

pub use notes::{DESCRIPTION_REQUIRED, ID_REQUIRED, TITLE_REQUIRED};

pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Headers added to every response unless a handler already set them.
const SECURITY_HEADERS: &[(&str, &str)] = &[
    (
        "content-security-policy",
        "default-src 'self';base-uri 'self';font-src 'self' https: data:;\
         form-action 'self';frame-ancestors 'self';img-src 'self' data:;\
         object-src 'none';script-src 'self';script-src-attr 'none';\
         style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

pub fn create_router(db: Database) -> Router {
    let routes = Router::new()
        .route("/add", post(notes::add_note))
        .route("/get", post(notes::get_note))
        .route("/update", post(notes::update_note))
        .route("/all", get(notes::all_notes))
        .route("/delete", delete(notes::delete_note))
        .with_state(AppState { db });

    with_middleware(routes)
}

/// Serves the note routes until `shutdown` resolves, then lets open
/// requests finish before returning.
pub async fn serve<F>(listener: TcpListener, db: Database, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router(db))
        .with_graceful_shutdown(shutdown)
        .await
}

fn with_middleware(router: Router) -> Router {
    let router = router
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        );

    SECURITY_HEADERS.iter().fold(router, |router, &(name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
}
