//! Random color endpoint.

use actix_web::{HttpResponse, get, web};

use crate::domain::color::{self, ColorParams};
use crate::domain::rng;
use crate::inbound::http::CountQuery;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ApiResult;

/// Random RGB colors as lowercase hex.
#[utoipa::path(
    get,
    path = "/api/ColorAleatorio",
    params(CountQuery),
    responses(
        (status = 200, description = "Enveloped labeled hex colors",
         body = color::ColorPayload),
        (status = 400, description = "Count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["color"]
)]
#[get("/ColorAleatorio")]
pub async fn random_colors(query: web::Query<CountQuery>) -> ApiResult<HttpResponse> {
    let request = ColorParams {
        count: query.cantidad,
    }
    .validate()?;
    let payload = color::colors(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}
