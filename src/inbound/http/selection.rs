//! Random selection from a caller-supplied list.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::rng;
use crate::domain::selection::{self, SelectionParams};
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::default_count;

fn default_unique() -> i64 {
    1
}

/// Query for `/api/SeleccionAleatoria`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SelectionQuery {
    /// Required comma-separated list of values.
    #[serde(default)]
    pub valores: Option<String>,
    /// How many elements to select, `[1, 100]`, default 1.
    #[serde(default = "default_count")]
    pub cantidad: i64,
    /// 0 for draws with replacement, any other value for a unique subset;
    /// default 1.
    #[serde(default = "default_unique")]
    pub unicos: i64,
}

/// Random selection, with or without replacement.
#[utoipa::path(
    get,
    path = "/api/SeleccionAleatoria",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Enveloped labeled selections",
         body = selection::SelectionPayload),
        (status = 400, description = "Missing list, count out of bounds, or unique overflow",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["seleccion"]
)]
#[get("/SeleccionAleatoria")]
pub async fn random_selection(query: web::Query<SelectionQuery>) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let request = SelectionParams {
        values: query.valores,
        count: query.cantidad,
        unique: query.unicos != 0,
    }
    .validate()?;
    let payload = selection::select(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}
