//! Game endpoints: card deals, coin flips, dice rolls, decisions, and
//! rock-paper-scissors.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::games::{
    self, CardDealParams, CoinFlipParams, DecisionParams, DiceRollParams,
};
use crate::domain::rng;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::{CountQuery, default_count};

fn default_one() -> i64 {
    1
}

/// Query for `/api/BarajaAleatoria`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct CardDealQuery {
    /// Cards dealt to each hand, default 1.
    #[serde(default = "default_one")]
    pub cartas_por_mano: i64,
    /// Hands to deal, default 1.
    #[serde(default = "default_one")]
    pub manos: i64,
}

/// Hands dealt without replacement from a 52-card deck.
#[utoipa::path(
    get,
    path = "/api/BarajaAleatoria",
    params(CardDealQuery),
    responses(
        (status = 200, description = "Enveloped hands of distinct cards",
         body = games::CardDealPayload),
        (status = 400, description = "Non-positive quantities or more than 52 cards requested",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["juegos"]
)]
#[get("/BarajaAleatoria")]
pub async fn deal_hands(query: web::Query<CardDealQuery>) -> ApiResult<HttpResponse> {
    let request = CardDealParams {
        cards_per_hand: query.cartas_por_mano,
        hands: query.manos,
    }
    .validate()?;
    let payload = games::deal_cards(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

/// Query for `/api/LanzamientosMoneda`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct CoinFlipQuery {
    /// How many flips, `[1, 100]`, default 1.
    #[serde(default = "default_count")]
    pub lanzamientos: i64,
}

/// Labeled Cara/Cruz coin flips.
#[utoipa::path(
    get,
    path = "/api/LanzamientosMoneda",
    params(CoinFlipQuery),
    responses(
        (status = 200, description = "Enveloped labeled flips",
         body = games::CoinFlipPayload),
        (status = 400, description = "Flip count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["juegos"]
)]
#[get("/LanzamientosMoneda")]
pub async fn coin_flips(query: web::Query<CoinFlipQuery>) -> ApiResult<HttpResponse> {
    let request = CoinFlipParams {
        flips: query.lanzamientos,
    }
    .validate()?;
    let payload = games::flip_coins(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

/// Query for `/api/LanzamientosDado`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct DiceRollQuery {
    /// How many rolls, `[1, 100]`, default 1.
    #[serde(default = "default_count")]
    pub lanzamientos: i64,
    /// Dice rolled per roll, `[1, 100]`, default 1.
    #[serde(default = "default_one")]
    pub dados: i64,
}

/// Labeled six-sided dice rolls.
#[utoipa::path(
    get,
    path = "/api/LanzamientosDado",
    params(DiceRollQuery),
    responses(
        (status = 200, description = "Enveloped labeled rolls",
         body = games::DiceRollPayload),
        (status = 400, description = "Roll or dice count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["juegos"]
)]
#[get("/LanzamientosDado")]
pub async fn dice_rolls(query: web::Query<DiceRollQuery>) -> ApiResult<HttpResponse> {
    let request = DiceRollParams {
        rolls: query.lanzamientos,
        dice: query.dados,
    }
    .validate()?;
    let payload = games::roll_dice(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

/// Labeled Si/No decisions.
#[utoipa::path(
    get,
    path = "/api/DecisionAleatoria",
    params(CountQuery),
    responses(
        (status = 200, description = "Enveloped labeled decisions",
         body = games::DecisionPayload),
        (status = 400, description = "Decision count out of bounds",
         body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["juegos"]
)]
#[get("/DecisionAleatoria")]
pub async fn random_decision(query: web::Query<CountQuery>) -> ApiResult<HttpResponse> {
    let request = DecisionParams {
        count: query.cantidad,
    }
    .validate()?;
    let payload = games::decide(&request, &mut rng::request_rng());
    Ok(HttpResponse::Ok().json(Envelope::ok(payload)))
}

/// A single rock-paper-scissors draw; takes no parameters.
#[utoipa::path(
    get,
    path = "/api/PiedraPapelTijera",
    responses(
        (status = 200, description = "Enveloped Piedra/Papel/Tijera decision",
         body = games::RockPaperScissorsPayload)
    ),
    tags = ["juegos"]
)]
#[get("/PiedraPapelTijera")]
pub async fn rock_paper_scissors() -> HttpResponse {
    let payload = games::rock_paper_scissors(&mut rng::request_rng());
    HttpResponse::Ok().json(Envelope::ok(payload))
}
