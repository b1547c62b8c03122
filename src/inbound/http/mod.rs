//! HTTP inbound adapter exposing the generator endpoints.
//!
//! Handlers normalize query strings into domain parameter types, run
//! validation, invoke the generator with a per-request randomness source,
//! and wrap the payload in the uniform envelope.

pub mod calendar;
pub mod color;
pub mod envelope;
pub mod error;
pub mod games;
pub mod geo;
pub mod health;
pub mod info;
pub mod numbers;
pub mod selection;
pub mod text;

pub use error::ApiResult;

use actix_web::web;
use serde::Deserialize;
use utoipa::IntoParams;

/// Count-only query shared by several endpoints.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct CountQuery {
    /// How many values to generate, `[1, 100]`.
    #[serde(default = "default_count")]
    pub cantidad: i64,
}

pub(crate) fn default_count() -> i64 {
    1
}

/// Register every route; the table is built once at process start.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(info::service_info)
        .service(health::live)
        .service(health::ready)
        .service(
            web::scope("/api")
                .service(numbers::random_integers)
                .service(numbers::random_decimals)
                .service(numbers::random_binary)
                .service(games::deal_hands)
                .service(games::coin_flips)
                .service(games::dice_rolls)
                .service(games::random_decision)
                .service(games::rock_paper_scissors)
                .service(text::random_letters)
                .service(text::random_characters)
                .service(text::random_names)
                .service(text::random_emoji)
                .service(text::random_passwords)
                .service(geo::random_coordinates)
                .service(geo::random_countries)
                .service(calendar::random_dates)
                .service(calendar::random_times)
                .service(selection::random_selection)
                .service(color::random_colors),
        );
}
