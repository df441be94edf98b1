//! Request handlers for the REST API.
//!
//! Two envelope conventions coexist on purpose, matching the surfaces the
//! frontends consume:
//!
//! - user/CRUD routes answer `{"success": …, "data": …}` with `total` on
//!   lists and `message` on mutations
//! - `/api/v1/*` data routes answer `{"status": "success", "data": {…}}`

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::bench;
use crate::catalog;
use crate::domain::{AlgorithmKind, MAX_PRECISION_DIGITS};
use crate::server::state::{AppState, UserStoreError};

/// Absolute errors below this are reported as zero: they are indistinguishable
/// from rounding noise at `f64` precision.
const ERROR_DISPLAY_THRESHOLD: f64 = 1e-15;

#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// `GET /api`: welcome document.
pub async fn api_root() -> Response {
    Json(json!({
        "message": "Welcome to the pilab API",
        "version": env!("CARGO_PKG_VERSION"),
        "date": Utc::now().to_rfc3339(),
    }))
    .into_response()
}

/// `GET /api/health`.
pub async fn health() -> Response {
    Json(json!({ "status": "ok", "service": "pilab API" })).into_response()
}

/// `GET /api/usuarios`.
pub async fn list_users(State(state): State<Arc<AppState>>) -> Response {
    let users = state.users.read().await.list();
    Json(json!({
        "success": true,
        "total": users.len(),
        "data": users,
    }))
    .into_response()
}

/// `GET /api/usuarios/{id}`.
pub async fn get_user(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Response {
    match state.users.read().await.get(id) {
        Some(user) => Json(json!({ "success": true, "data": user })).into_response(),
        None => user_not_found(),
    }
}

/// `POST /api/usuarios`.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UserBody>,
) -> Response {
    let name = body.name.as_deref().unwrap_or("");
    let email = body.email.as_deref().unwrap_or("");

    match state.users.write().await.create(name, email) {
        Ok(user) => {
            info!(id = user.id, "user created");
            (
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "data": user,
                    "message": "User created",
                })),
            )
                .into_response()
        }
        Err(UserStoreError::MissingFields) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Name and email are required" })),
        )
            .into_response(),
        Err(UserStoreError::NotFound) => internal_error(),
    }
}

/// `PUT /api/usuarios/{id}`.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<UserBody>,
) -> Response {
    match state
        .users
        .write()
        .await
        .update(id, body.name.as_deref(), body.email.as_deref())
    {
        Ok(user) => Json(json!({
            "success": true,
            "data": user,
            "message": "User updated",
        }))
        .into_response(),
        Err(_) => user_not_found(),
    }
}

/// `DELETE /api/usuarios/{id}`.
pub async fn delete_user(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Response {
    match state.users.write().await.delete(id) {
        Ok(user) => Json(json!({
            "success": true,
            "data": user,
            "message": "User deleted",
        }))
        .into_response(),
        Err(_) => user_not_found(),
    }
}

/// `GET /api/v1/algorithms`: catalog keyed by wire name.
pub async fn algorithms() -> Response {
    let mut entries = BTreeMap::new();
    for kind in AlgorithmKind::ALL {
        entries.insert(
            kind.wire_name(),
            json!({
                "description": catalog::description(kind),
                "type": kind.class(),
                "implementation": crate::algo::source_snippet(kind),
            }),
        );
    }
    Json(json!({ "status": "success", "data": { "algorithms": entries } })).into_response()
}

/// `GET /api/v1/formulas`: formula catalog keyed by wire name.
pub async fn formulas() -> Response {
    let mut entries = BTreeMap::new();
    for info in catalog::all_formulas() {
        entries.insert(info.id.clone(), info);
    }
    Json(json!({ "status": "success", "data": { "formulas": entries } })).into_response()
}

/// `GET /api/v1/estimations/basic`.
///
/// The suite is computed once per process (first request pays for it) and
/// cached; the benchmark budget comes from server configuration.
pub async fn estimations(State(state): State<Arc<AppState>>) -> Response {
    if let Some(cached) = state.estimations.read().await.clone() {
        return estimations_response(&cached);
    }

    let time_limit = state.time_limit;
    let seed = state.seed;
    info!(time_limit, "computing estimation suite");

    let computed = tokio::task::spawn_blocking(move || bench::run_suite(time_limit, seed)).await;
    let suite = match computed {
        Ok(Ok(suite)) => suite,
        Ok(Err(err)) => {
            warn!(%err, "estimation suite failed");
            return internal_error();
        }
        Err(err) => {
            warn!(%err, "estimation task panicked");
            return internal_error();
        }
    };

    let mut cache = state.estimations.write().await;
    let suite = cache.get_or_insert(suite).clone();
    estimations_response(&suite)
}

fn estimations_response(suite: &[crate::domain::Estimation]) -> Response {
    Json(json!({ "status": "success", "data": { "estimations": suite } })).into_response()
}

/// `GET /api/pi/{algorithm}`: run one precision search live.
pub async fn calculate_pi(
    State(state): State<Arc<AppState>>,
    Path(algorithm): Path<String>,
) -> Response {
    let Some(kind) = AlgorithmKind::from_wire_name(&algorithm) else {
        warn!(%algorithm, "unknown algorithm requested");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unknown algorithm", "algorithm": algorithm })),
        )
            .into_response();
    };

    let time_limit = state.time_limit;
    let seed = state.seed;
    let computed = tokio::task::spawn_blocking(move || bench::search_best(kind, time_limit, seed)).await;

    let estimation = match computed {
        Ok(Ok(estimation)) => estimation,
        Ok(Err(err)) => {
            warn!(%err, algorithm = kind.wire_name(), "pi calculation failed");
            return internal_error();
        }
        Err(err) => {
            warn!(%err, "pi calculation task panicked");
            return internal_error();
        }
    };

    let perfect = estimation.correct_digits >= MAX_PRECISION_DIGITS;
    let insignificant = estimation.absolute_error < ERROR_DISPLAY_THRESHOLD;
    let display_error = if insignificant { 0.0 } else { estimation.absolute_error };
    let display_relative = if insignificant {
        0.0
    } else {
        estimation.absolute_error / std::f64::consts::PI
    };
    let error_note = insignificant
        .then_some("Error below f64 precision threshold (< 1e-15)");

    Json(json!({
        "pi_estimate": format!("{:.15}", estimation.pi_estimate),
        "algorithm": kind.wire_name(),
        "iterations": estimation.iterations,
        "time_seconds": estimation.time_seconds,
        "iterations_per_second": estimation.iterations_per_second,
        "correct_digits": estimation.correct_digits,
        "max_decimal_digits": MAX_PRECISION_DIGITS,
        "perfect_decimal_precision": perfect,
        "absolute_error": display_error,
        "relative_error": display_relative,
        "actual_pi": format!("{:.15}", std::f64::consts::PI),
        "error_note": error_note,
    }))
    .into_response()
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": format!("Route {} not found", uri.path()),
        })),
    )
        .into_response()
}

fn user_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "User not found" })),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": "Internal server error" })),
    )
        .into_response()
}
