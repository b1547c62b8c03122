//! Numeric endpoints: integer ranges, decimal ranges, binary strings.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::numbers::{self, BinaryParams, DecimalRangeParams, IntegerRangeParams};
use crate::domain::rng;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::default_count;

fn default_lower() -> i64 {
    1
}

fn default_upper() -> i64 {
    100
}

/// Query for `/api/NumAleatorio`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct IntegerRangeQuery {
    /// Inclusive lower bound, default 1.
    #[serde(default = "default_lower")]
    pub lim_inferior: i64,
    /// Inclusive upper bound, default 100.
    #[serde(default = "default_upper")]
    pub lim_superior: i64,
    /// How many numbers to draw, `[1, 100]`.
    #[serde(default = "default_count")]
    pub cantidad: i64,
}

/// Uniform integers between two bounds.
#[utoipa::path(
    get,
    path = "/api/NumAleatorio",
    params(IntegerRangeQuery),
    responses(
        (status = 200, description = "Enveloped list of random integers",
         body = numbers::IntegerRangePayload),
        (status = 400, description = "Invalid bounds or count",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["numeros"]
)]
#[get("/NumAleatorio")]
pub async fn random_integers(query: web::Query<IntegerRangeQuery>) -> ApiResult<HttpResponse> {
    let request = IntegerRangeParams {
        lower: query.lim_inferior,
        upper: query.lim_superior,
        count: query.cantidad,
    }
    .validate()?;
    let payload = numbers::integers(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

fn default_lower_f() -> f64 {
    1.0
}

fn default_upper_f() -> f64 {
    100.0
}

fn default_decimals() -> i64 {
    2
}

/// Query for `/api/NumDecimalAleatorio`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct DecimalRangeQuery {
    /// Inclusive lower bound, default 1.
    #[serde(default = "default_lower_f")]
    pub lim_inferior: f64,
    /// Inclusive upper bound, default 100.
    #[serde(default = "default_upper_f")]
    pub lim_superior: f64,
    /// Fixed number of fractional digits, `[0, 10]`, default 2.
    #[serde(default = "default_decimals")]
    pub decimales: i64,
    /// How many numbers to draw, `[1, 100]`.
    #[serde(default = "default_count")]
    pub cantidad: i64,
}

/// Uniform decimals between two bounds, emitted as fixed-precision strings.
#[utoipa::path(
    get,
    path = "/api/NumDecimalAleatorio",
    params(DecimalRangeQuery),
    responses(
        (status = 200, description = "Enveloped list of formatted decimals",
         body = numbers::DecimalRangePayload),
        (status = 400, description = "Invalid bounds, precision, or count",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["numeros"]
)]
#[get("/NumDecimalAleatorio")]
pub async fn random_decimals(query: web::Query<DecimalRangeQuery>) -> ApiResult<HttpResponse> {
    let request = DecimalRangeParams {
        lower: query.lim_inferior,
        upper: query.lim_superior,
        decimals: query.decimales,
        count: query.cantidad,
    }
    .validate()?;
    let payload = numbers::decimals(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

fn default_length() -> i64 {
    8
}

/// Query for `/api/BinarioAleatorio`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct BinaryQuery {
    /// Characters per string, `[1, 128]`, default 8.
    #[serde(default = "default_length")]
    pub longitud: i64,
    /// How many strings to generate, `[1, 100]`.
    #[serde(default = "default_count")]
    pub cantidad: i64,
}

/// Random binary strings of a fixed length.
#[utoipa::path(
    get,
    path = "/api/BinarioAleatorio",
    params(BinaryQuery),
    responses(
        (status = 200, description = "Enveloped list of binary strings",
         body = numbers::BinaryPayload),
        (status = 400, description = "Invalid length or count",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["numeros"]
)]
#[get("/BinarioAleatorio")]
pub async fn random_binary(query: web::Query<BinaryQuery>) -> ApiResult<HttpResponse> {
    let request = BinaryParams {
        length: query.longitud,
        count: query.cantidad,
    }
    .validate()?;
    let payload = numbers::binary_strings(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}
