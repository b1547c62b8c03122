//! Geographic endpoints: coordinates and countries.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::geo::{self, CoordinateParams, CountryParams};
use crate::domain::rng;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::{CountQuery, default_count};

/// Uniform latitude/longitude pairs.
#[utoipa::path(
    get,
    path = "/api/CoordenadaAleatoria",
    params(CountQuery),
    responses(
        (status = 200, description = "Enveloped labeled coordinates",
         body = geo::CoordinatePayload),
        (status = 400, description = "Count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["geo"]
)]
#[get("/CoordenadaAleatoria")]
pub async fn random_coordinates(query: web::Query<CountQuery>) -> ApiResult<HttpResponse> {
    let request = CoordinateParams {
        count: query.cantidad,
    }
    .validate()?;
    let payload = geo::coordinates(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

/// Query for `/api/PaisAleatorio`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CountryQuery {
    /// How many countries, `[1, 100]`, default 1.
    #[serde(default = "default_count")]
    pub cantidad: i64,
    /// Optional comma-separated continent filter.
    #[serde(default)]
    pub continentes: Option<String>,
}

/// Countries drawn with replacement, optionally filtered by continent.
#[utoipa::path(
    get,
    path = "/api/PaisAleatorio",
    params(CountryQuery),
    responses(
        (status = 200, description = "Enveloped labeled countries",
         body = geo::CountryPayload),
        (status = 400, description = "Count out of bounds or unrecognized continents",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["geo"]
)]
#[get("/PaisAleatorio")]
pub async fn random_countries(query: web::Query<CountryQuery>) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let request = CountryParams {
        count: query.cantidad,
        continents: query.continentes,
    }
    .validate()?;
    let payload = geo::countries(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}
