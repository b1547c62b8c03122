//! Date and time endpoints.

use actix_web::{HttpResponse, get, web};
use chrono::Local;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::calendar::{self, DateRangeParams, TimeRangeParams};
use crate::domain::rng;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::default_count;

fn default_start_date() -> String {
    "01/01/2000".to_owned()
}

/// Query for `/api/FechaAleatoria`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DateRangeQuery {
    /// Start date `DD/MM/YYYY`, default 01/01/2000.
    #[serde(default = "default_start_date")]
    pub fecha_inicial: String,
    /// End date `DD/MM/YYYY`, default today.
    #[serde(default)]
    pub fecha_final: Option<String>,
    /// How many dates, `[1, 100]`, default 1.
    #[serde(default = "default_count")]
    pub cantidad: i64,
}

/// Dates uniform by day offset between two inclusive endpoints.
#[utoipa::path(
    get,
    path = "/api/FechaAleatoria",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Enveloped labeled dates",
         body = calendar::DatePayload),
        (status = 400, description = "Bad format, inverted range, or count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["calendario"]
)]
#[get("/FechaAleatoria")]
pub async fn random_dates(query: web::Query<DateRangeQuery>) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let end = query
        .fecha_final
        .unwrap_or_else(|| Local::now().format("%d/%m/%Y").to_string());
    let request = DateRangeParams {
        start: query.fecha_inicial,
        end,
        count: query.cantidad,
    }
    .validate()?;
    let payload = calendar::dates(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

fn default_start_time() -> String {
    "00:00:00".to_owned()
}

fn default_end_time() -> String {
    "23:59:59".to_owned()
}

fn default_clock() -> String {
    "24".to_owned()
}

/// Query for `/api/HoraAleatoria`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TimeRangeQuery {
    /// Start time `HH:MM:SS`, default 00:00:00.
    #[serde(default = "default_start_time")]
    pub hora_inicial: String,
    /// End time `HH:MM:SS`, default 23:59:59.
    #[serde(default = "default_end_time")]
    pub hora_final: String,
    /// Output clock, `24` or `12`, default 24.
    #[serde(default = "default_clock")]
    pub formato: String,
    /// How many times, `[1, 100]`, default 1.
    #[serde(default = "default_count")]
    pub cantidad: i64,
}

/// Times uniform by second offset between two inclusive endpoints.
#[utoipa::path(
    get,
    path = "/api/HoraAleatoria",
    params(TimeRangeQuery),
    responses(
        (status = 200, description = "Enveloped labeled times",
         body = calendar::TimePayload),
        (status = 400, description = "Bad format, inverted range, or count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["calendario"]
)]
#[get("/HoraAleatoria")]
pub async fn random_times(query: web::Query<TimeRangeQuery>) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let request = TimeRangeParams {
        start: query.hora_inicial,
        end: query.hora_final,
        format: query.formato,
        count: query.cantidad,
    }
    .validate()?;
    let payload = calendar::times(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}
