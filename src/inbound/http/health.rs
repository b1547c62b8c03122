//! Liveness and readiness probes for orchestration and load balancers.
//!
//! The service holds no state and no external dependencies, so both probes
//! report healthy as soon as the socket is bound.

use actix_web::{HttpResponse, get, http::header};

fn probe_response() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    responses((status = 200, description = "Server is alive")),
    tags = ["health"]
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe_response()
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses((status = 200, description = "Server is ready to handle traffic")),
    tags = ["health"]
)]
#[get("/health/ready")]
pub async fn ready() -> HttpResponse {
    probe_response()
}
