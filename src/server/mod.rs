//! The pilab REST API server.
//!
//! An axum service over shared in-memory state. `run` owns the tokio runtime
//! so the binary's entry point can stay synchronous like every other
//! subcommand.

pub mod handlers;
pub mod state;

pub use state::{AppState, UserStore, UserStoreError};

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BIND: &str = "127.0.0.1";
/// Default per-algorithm budget for server-side benchmarks. Shorter than the
/// CLI default so the first `/api/v1/estimations/basic` hit stays snappy.
const DEFAULT_TIME_LIMIT: f64 = 0.25;

/// Server configuration resolved from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub bind: String,
    pub port: u16,
    pub time_limit: f64,
    pub seed: u64,
}

impl ServeConfig {
    /// Resolve configuration: explicit CLI values win, then environment
    /// (`PILAB_BIND`, `PILAB_PORT`, `PILAB_TIME_LIMIT`, `.env` honored),
    /// then defaults.
    pub fn from_env(
        bind: Option<String>,
        port: Option<u16>,
        time_limit: Option<f64>,
        seed: u64,
    ) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bind = bind
            .or_else(|| std::env::var("PILAB_BIND").ok())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let port = match port {
            Some(port) => port,
            None => match std::env::var("PILAB_PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .map_err(|_| AppError::usage(format!("Invalid PILAB_PORT '{raw}'.")))?,
                Err(_) => DEFAULT_PORT,
            },
        };

        let time_limit = match time_limit {
            Some(limit) => limit,
            None => match std::env::var("PILAB_TIME_LIMIT") {
                Ok(raw) => raw
                    .parse::<f64>()
                    .map_err(|_| AppError::usage(format!("Invalid PILAB_TIME_LIMIT '{raw}'.")))?,
                Err(_) => DEFAULT_TIME_LIMIT,
            },
        };

        if !(time_limit.is_finite() && time_limit > 0.0) {
            return Err(AppError::usage("Time limit must be a positive number of seconds."));
        }

        Ok(Self {
            bind,
            port,
            time_limit,
            seed,
        })
    }
}

/// Build the full route table over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(handlers::api_root))
        .route("/api/health", get(handlers::health))
        .route(
            "/api/usuarios",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/usuarios/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route("/api/v1/algorithms", get(handlers::algorithms))
        .route("/api/v1/estimations/basic", get(handlers::estimations))
        .route("/api/v1/formulas", get(handlers::formulas))
        .route("/api/pi/{algorithm}", get(handlers::calculate_pi))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Run the server until interrupted.
pub fn run(config: ServeConfig) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();

    let state = Arc::new(AppState::new(config.time_limit, config.seed));
    let router = build_router(state);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| AppError::runtime(format!("Failed to start async runtime: {e}")))?;

    runtime.block_on(async move {
        let addr = format!("{}:{}", config.bind, config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::runtime(format!("Failed to bind {addr}: {e}")))?;
        info!("pilab API listening on http://{addr}");
        axum::serve(listener, router)
            .await
            .map_err(|e| AppError::runtime(format!("Server error: {e}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(Arc::new(AppState::new(0.02, 42)))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn api_root_reports_version() {
        let response = test_router().oneshot(get("/api")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["message"].as_str().unwrap().contains("pilab"));
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = test_router().oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn listing_users_returns_the_demo_rows() {
        let response = test_router().oneshot(get("/api/usuarios")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total"], 2);
        assert_eq!(body["data"][0]["name"], "Ana García");
    }

    #[tokio::test]
    async fn create_requires_name_and_email() {
        let response = test_router()
            .oneshot(json_request("POST", "/api/usuarios", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Name and email are required");
    }

    #[tokio::test]
    async fn crud_flow_works_end_to_end() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/usuarios",
                r#"{"name":"Diana","email":"diana@example.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["data"]["id"], 3);
        assert!(created["data"]["created_at"].is_string());

        let response = router
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/usuarios/3",
                r#"{"email":"diana@pilab.dev"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["data"]["name"], "Diana");
        assert_eq!(updated["data"]["email"], "diana@pilab.dev");

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/usuarios/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router.oneshot(get("/api/usuarios/3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn unknown_routes_get_the_error_envelope() {
        let response = test_router().oneshot(get("/api/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("/api/nope"));
    }

    #[tokio::test]
    async fn algorithms_catalog_is_keyed_by_wire_name() {
        let response = test_router().oneshot(get("/api/v1/algorithms")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        let algorithms = body["data"]["algorithms"].as_object().unwrap();
        assert_eq!(algorithms.len(), 12);
        assert_eq!(algorithms["monte-carlo"]["type"], "probability");
        assert!(algorithms["chudnovsky"]["implementation"].is_string());
    }

    #[tokio::test]
    async fn formulas_catalog_has_latex_sources() {
        let response = test_router().oneshot(get("/api/v1/formulas")).await.unwrap();
        let body = body_json(response).await;
        let formulas = body["data"]["formulas"].as_object().unwrap();
        assert_eq!(formulas.len(), 12);
        assert!(
            formulas["bbp"]["formula"]
                .as_str()
                .unwrap()
                .contains("16^k")
        );
    }

    #[tokio::test]
    async fn estimations_are_computed_once_and_served() {
        let router = test_router();
        let response = router
            .clone()
            .oneshot(get("/api/v1/estimations/basic"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let rows = body["data"]["estimations"].as_array().unwrap();
        assert_eq!(rows.len(), 12);

        // Second hit is served from the cache and must match.
        let response = router.oneshot(get("/api/v1/estimations/basic")).await.unwrap();
        let second = body_json(response).await;
        assert_eq!(second["data"]["estimations"], body["data"]["estimations"]);
    }

    #[tokio::test]
    async fn unknown_algorithm_is_a_bad_request() {
        let response = test_router().oneshot(get("/api/pi/archimedes")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Unknown algorithm");
        assert_eq!(body["algorithm"], "archimedes");
    }

    #[tokio::test]
    async fn calculate_pi_returns_the_result_document() {
        let response = test_router().oneshot(get("/api/pi/gauss-legendre")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["algorithm"], "gauss-legendre");
        assert_eq!(body["max_decimal_digits"], 15);
        assert!(body["correct_digits"].as_u64().unwrap() >= 13);
        assert!(body["pi_estimate"].as_str().unwrap().starts_with("3.14159265"));
        assert_eq!(
            body["actual_pi"].as_str().unwrap(),
            format!("{:.15}", std::f64::consts::PI)
        );
    }
}
