//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering every generator
//! endpoint plus the metadata and health probes. Swagger UI serves it at
//! `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{calendar, color, games, geo, numbers, selection, text};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::info::ServiceInfo;

/// OpenAPI document for the generator API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RandomMiscellaneousAPI",
        description = "Genera datos aleatorios (números, cartas, fechas, contraseñas, colores y \
                       más) listos para integrarse en pruebas y prototipos."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::info::service_info,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
        crate::inbound::http::numbers::random_integers,
        crate::inbound::http::numbers::random_decimals,
        crate::inbound::http::numbers::random_binary,
        crate::inbound::http::games::deal_hands,
        crate::inbound::http::games::coin_flips,
        crate::inbound::http::games::dice_rolls,
        crate::inbound::http::games::random_decision,
        crate::inbound::http::games::rock_paper_scissors,
        crate::inbound::http::text::random_letters,
        crate::inbound::http::text::random_characters,
        crate::inbound::http::text::random_names,
        crate::inbound::http::text::random_emoji,
        crate::inbound::http::text::random_passwords,
        crate::inbound::http::geo::random_coordinates,
        crate::inbound::http::geo::random_countries,
        crate::inbound::http::calendar::random_dates,
        crate::inbound::http::calendar::random_times,
        crate::inbound::http::selection::random_selection,
        crate::inbound::http::color::random_colors,
    ),
    components(schemas(
        ErrorBody,
        ServiceInfo,
        numbers::IntegerRangePayload,
        numbers::DecimalRangePayload,
        numbers::BinaryPayload,
        games::CardDealPayload,
        games::CoinFlipPayload,
        games::DiceRollPayload,
        games::DecisionPayload,
        games::RockPaperScissorsPayload,
        text::LetterPayload,
        text::CharacterPayload,
        text::NamePayload,
        text::EmojiPayload,
        text::PasswordPayload,
        geo::Coordinate,
        geo::CoordinatePayload,
        geo::CountryPick,
        geo::CountryPayload,
        calendar::DatePayload,
        calendar::TimePayload,
        selection::SelectionPayload,
        color::ColorPayload,
    )),
    tags(
        (name = "info", description = "Service metadata"),
        (name = "health", description = "Health probes"),
        (name = "numeros", description = "Random number generators"),
        (name = "juegos", description = "Card, coin, and dice generators"),
        (name = "texto", description = "Letter, name, emoji, and password generators"),
        (name = "geo", description = "Coordinate and country generators"),
        (name = "calendario", description = "Date and time generators"),
        (name = "seleccion", description = "List selection"),
        (name = "color", description = "Color generator")
    )
)]
pub struct ApiDoc;
