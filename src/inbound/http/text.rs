//! Text endpoints: letters, printable characters, names, emoji, passwords.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::rng;
use crate::domain::text::{self, PasswordParams, TextParams};
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::{CountQuery, default_count};

/// Uniform uppercase letters A-Z.
#[utoipa::path(
    get,
    path = "/api/LetraAleatoria",
    params(CountQuery),
    responses(
        (status = 200, description = "Enveloped list of letters",
         body = text::LetterPayload),
        (status = 400, description = "Count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["texto"]
)]
#[get("/LetraAleatoria")]
pub async fn random_letters(query: web::Query<CountQuery>) -> ApiResult<HttpResponse> {
    let request = TextParams {
        count: query.cantidad,
    }
    .validate("letras")?;
    let payload = text::letters(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

/// Uniform printable ASCII characters (DEL excluded).
#[utoipa::path(
    get,
    path = "/api/CaracterAleatorio",
    params(CountQuery),
    responses(
        (status = 200, description = "Enveloped list of characters",
         body = text::CharacterPayload),
        (status = 400, description = "Count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["texto"]
)]
#[get("/CaracterAleatorio")]
pub async fn random_characters(query: web::Query<CountQuery>) -> ApiResult<HttpResponse> {
    let request = TextParams {
        count: query.cantidad,
    }
    .validate("caracteres")?;
    let payload = text::characters(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

/// Names drawn with replacement from the static corpus.
#[utoipa::path(
    get,
    path = "/api/NombreAleatorio",
    params(CountQuery),
    responses(
        (status = 200, description = "Enveloped list of names",
         body = text::NamePayload),
        (status = 400, description = "Count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["texto"]
)]
#[get("/NombreAleatorio")]
pub async fn random_names(query: web::Query<CountQuery>) -> ApiResult<HttpResponse> {
    let request = TextParams {
        count: query.cantidad,
    }
    .validate("nombres")?;
    let payload = text::names(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

/// Emoji drawn from the fixed Unicode block table.
#[utoipa::path(
    get,
    path = "/api/EmojiAleatorio",
    params(CountQuery),
    responses(
        (status = 200, description = "Enveloped list of emoji",
         body = text::EmojiPayload),
        (status = 400, description = "Count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["texto"]
)]
#[get("/EmojiAleatorio")]
pub async fn random_emoji(query: web::Query<CountQuery>) -> ApiResult<HttpResponse> {
    let request = TextParams {
        count: query.cantidad,
    }
    .validate("emojis")?;
    let payload = text::emoji(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

fn default_length() -> i64 {
    8
}

/// Query for `/api/ContraseñaAleatoria`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PasswordQuery {
    /// Characters per password, `[1, 128]`, default 8.
    #[serde(default = "default_length")]
    pub longitud: i64,
    /// How many passwords, `[1, 100]`, default 1.
    #[serde(default = "default_count")]
    pub cantidad: i64,
}

/// Passwords drawn uniformly from letters, digits, and symbols.
#[utoipa::path(
    get,
    path = "/api/ContraseñaAleatoria",
    params(PasswordQuery),
    responses(
        (status = 200, description = "Enveloped labeled passwords",
         body = text::PasswordPayload),
        (status = 400, description = "Invalid length or count",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["texto"]
)]
#[get("/ContraseñaAleatoria")]
pub async fn random_passwords(query: web::Query<PasswordQuery>) -> ApiResult<HttpResponse> {
    let request = PasswordParams {
        length: query.longitud,
        count: query.cantidad,
    }
    .validate()?;
    let payload = text::passwords(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}
