//! End-to-end tests driving every endpoint through the real route table.

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::Value;

use random_misc_api::inbound::http::configure;

async fn get(path: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(App::new().configure(configure)).await;
    let request = actix_test::TestRequest::get().uri(path).to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

fn assert_success_envelope(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["error"], false);
}

fn assert_error_envelope(status: StatusCode, body: &Value, code: u64) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], code);
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "error body must carry a message"
    );
}

#[actix_web::test]
async fn coin_flips_return_the_documented_shape() {
    let (status, body) = get("/api/LanzamientosMoneda?lanzamientos=3").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["total_lanzamientos"], 3);

    let outcomes = body["lanzamientos"][0].as_object().expect("label map");
    assert_eq!(outcomes.len(), 3);
    for i in 1..=3 {
        let face = outcomes[&format!("lanzamiento_{i}")]
            .as_str()
            .expect("string face");
        assert!(face == "Cara" || face == "Cruz");
    }
}

#[actix_web::test]
async fn integers_respect_bounds_and_echo_the_count() {
    let (status, body) = get("/api/NumAleatorio?lim_inferior=10&lim_superior=20&cantidad=25").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["cantidad"], 25);

    let values = body["aleatorios"].as_array().expect("array");
    assert_eq!(values.len(), 25);
    assert!(
        values
            .iter()
            .all(|v| (10..=20).contains(&v.as_i64().expect("integer")))
    );
}

#[actix_web::test]
async fn inverted_integer_bounds_yield_1002() {
    let (status, body) = get("/api/NumAleatorio?lim_inferior=10&lim_superior=5").await;
    assert_error_envelope(status, &body, 1002);
}

#[rstest]
#[case("/api/NumAleatorio?cantidad=0", 1001)]
#[case("/api/NumAleatorio?cantidad=101", 1000)]
#[case("/api/LanzamientosMoneda?lanzamientos=-1", 1001)]
#[case("/api/LanzamientosMoneda?lanzamientos=500", 1000)]
#[case("/api/ColorAleatorio?cantidad=0", 1001)]
#[case("/api/LetraAleatoria?cantidad=200", 1000)]
#[actix_web::test]
async fn counts_are_bounded_everywhere(#[case] path: &str, #[case] code: u64) {
    let (status, body) = get(path).await;
    assert_error_envelope(status, &body, code);
}

#[actix_web::test]
async fn decimals_are_fixed_precision_strings() {
    let (status, body) =
        get("/api/NumDecimalAleatorio?lim_inferior=0&lim_superior=1&decimales=4&cantidad=6").await;
    assert_success_envelope(status, &body);
    for value in body["aleatorios"].as_array().expect("array") {
        let text = value.as_str().expect("formatted string");
        let (_, frac) = text.split_once('.').expect("decimal point");
        assert_eq!(frac.len(), 4);
    }
}

#[actix_web::test]
async fn decimal_precision_out_of_range_yields_1002() {
    let (status, body) = get("/api/NumDecimalAleatorio?decimales=11").await;
    assert_error_envelope(status, &body, 1002);
}

#[actix_web::test]
async fn card_deal_produces_distinct_cards() {
    let (status, body) = get("/api/BarajaAleatoria?cartas_por_mano=5&manos=4").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["cartas_por_mano"], 5);
    assert_eq!(body["total_cartas"], 20);

    let hands = body["manos"].as_array().expect("hands");
    assert_eq!(hands.len(), 4);
    let mut seen = std::collections::BTreeSet::new();
    for hand in hands {
        for card in hand
            .as_object()
            .expect("hand map")
            .values()
            .flat_map(|cards| cards.as_array().expect("card list"))
        {
            assert!(seen.insert(card.as_str().expect("card").to_owned()));
        }
    }
    assert_eq!(seen.len(), 20);
}

#[actix_web::test]
async fn oversized_card_deal_yields_1002() {
    let (status, body) = get("/api/BarajaAleatoria?cartas_por_mano=27&manos=2").await;
    assert_error_envelope(status, &body, 1002);
}

#[actix_web::test]
async fn dice_rolls_carry_the_per_roll_die_count() {
    let (status, body) = get("/api/LanzamientosDado?lanzamientos=2&dados=4").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["dados_por_lanzamiento"], 4);
    let outcomes = body["lanzamientos"][0].as_object().expect("label map");
    assert_eq!(outcomes.len(), 2);
    for faces in outcomes.values() {
        let faces = faces.as_array().expect("face list");
        assert_eq!(faces.len(), 4);
        assert!(
            faces
                .iter()
                .all(|f| (1..=6).contains(&f.as_i64().expect("face")))
        );
    }
}

#[actix_web::test]
async fn unique_selection_overflow_yields_1003() {
    let (status, body) = get("/api/SeleccionAleatoria?valores=a,b&cantidad=3&unicos=1").await;
    assert_error_envelope(status, &body, 1003);
}

#[actix_web::test]
async fn missing_selection_values_yield_1002() {
    let (status, body) = get("/api/SeleccionAleatoria?cantidad=1").await;
    assert_error_envelope(status, &body, 1002);
}

#[actix_web::test]
async fn selection_with_replacement_may_exceed_the_list() {
    let (status, body) = get("/api/SeleccionAleatoria?valores=rojo,verde&cantidad=5&unicos=0").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["unicos"], false);
    assert_eq!(body["valores"], serde_json::json!(["rojo", "verde"]));
    let picks = body["seleccionados"].as_object().expect("selections");
    assert_eq!(picks.len(), 5);
    assert!(
        picks
            .values()
            .all(|v| v == "rojo" || v == "verde")
    );
}

#[actix_web::test]
async fn passwords_have_requested_length_and_labels() {
    let (status, body) = get("/api/Contrase%C3%B1aAleatoria?longitud=12&cantidad=2").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["longitud"], 12);
    let passwords = body["contrasenas"].as_object().expect("password map");
    assert_eq!(passwords.len(), 2);
    assert!(passwords.contains_key("contraseña_1"));
    assert!(
        passwords
            .values()
            .all(|p| p.as_str().expect("password").chars().count() == 12)
    );
}

#[actix_web::test]
async fn password_length_is_bounded() {
    let (status, body) = get("/api/Contrase%C3%B1aAleatoria?longitud=200").await;
    assert_error_envelope(status, &body, 1003);
}

#[actix_web::test]
async fn binary_strings_match_the_requested_length() {
    let (status, body) = get("/api/BinarioAleatorio?longitud=10&cantidad=3").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["longitud"], 10);
    for bits in body["binarios"].as_array().expect("array") {
        let bits = bits.as_str().expect("string");
        assert_eq!(bits.len(), 10);
        assert!(bits.chars().all(|c| c == '0' || c == '1'));
    }
}

#[actix_web::test]
async fn equal_date_endpoints_pin_the_output() {
    let (status, body) =
        get("/api/FechaAleatoria?fecha_inicial=15/06/2021&fecha_final=15/06/2021&cantidad=5").await;
    assert_success_envelope(status, &body);
    let dates = body["fechas_aleatorias"].as_object().expect("date map");
    assert_eq!(dates.len(), 5);
    assert!(dates.values().all(|d| d == "15/06/2021"));
}

#[rstest]
#[case("/api/FechaAleatoria?fecha_inicial=2021-01-01", 1003)]
#[case("/api/FechaAleatoria?fecha_inicial=02/02/2022&fecha_final=01/01/2021", 1002)]
#[case("/api/HoraAleatoria?hora_inicial=25:00:00", 1003)]
#[case("/api/HoraAleatoria?hora_inicial=18:00:00&hora_final=06:00:00", 1002)]
#[case("/api/HoraAleatoria?formato=48", 1004)]
#[actix_web::test]
async fn calendar_validation_codes_are_stable(#[case] path: &str, #[case] code: u64) {
    let (status, body) = get(path).await;
    assert_error_envelope(status, &body, code);
}

#[actix_web::test]
async fn twelve_hour_times_carry_a_meridiem_suffix() {
    let (status, body) =
        get("/api/HoraAleatoria?hora_inicial=13:00:00&hora_final=14:00:00&formato=12&cantidad=3")
            .await;
    assert_success_envelope(status, &body);
    let times = body["horas_aleatorias"].as_object().expect("time map");
    assert!(
        times
            .values()
            .all(|t| t.as_str().expect("time").ends_with("PM"))
    );
}

#[actix_web::test]
async fn countries_honor_the_continent_filter() {
    let (status, body) = get("/api/PaisAleatorio?cantidad=10&continentes=Europa").await;
    assert_success_envelope(status, &body);
    let picks = body["paises"].as_object().expect("country map");
    assert_eq!(picks.len(), 10);
    assert!(picks.values().all(|pick| pick["continente"] == "Europa"));
}

#[actix_web::test]
async fn unknown_continents_are_rejected_and_listed() {
    let (status, body) = get("/api/PaisAleatorio?continentes=Europa,Marte").await;
    assert_error_envelope(status, &body, 1002);
    assert!(
        body["message"]
            .as_str()
            .expect("message")
            .contains("Marte")
    );
}

#[actix_web::test]
async fn coordinates_are_pairs_inside_the_globe() {
    let (status, body) = get("/api/CoordenadaAleatoria?cantidad=4").await;
    assert_success_envelope(status, &body);
    let pairs = body["coordenadas"].as_object().expect("coordinate map");
    assert_eq!(pairs.len(), 4);
    for pair in pairs.values() {
        let lat = pair["latitud"].as_f64().expect("latitude");
        let lon = pair["longitud"].as_f64().expect("longitude");
        assert!((-90.0..=90.0).contains(&lat));
        assert!((-180.0..=180.0).contains(&lon));
    }
}

#[actix_web::test]
async fn rock_paper_scissors_needs_no_parameters() {
    let (status, body) = get("/api/PiedraPapelTijera").await;
    assert_success_envelope(status, &body);
    let decision = body["decision"].as_str().expect("decision");
    assert!(["Piedra", "Papel", "Tijera"].contains(&decision));
}

#[rstest]
#[case("/api/NombreAleatorio?cantidad=4", "nombres")]
#[case("/api/EmojiAleatorio?cantidad=4", "emojis")]
#[case("/api/LetraAleatoria?cantidad=4", "letras")]
#[case("/api/CaracterAleatorio?cantidad=4", "caracteres")]
#[actix_web::test]
async fn list_endpoints_echo_count_and_fill_their_key(#[case] path: &str, #[case] key: &str) {
    let (status, body) = get(path).await;
    assert_success_envelope(status, &body);
    assert_eq!(body["cantidad"], 4);
    assert_eq!(body[key].as_array().expect("list").len(), 4);
}

#[actix_web::test]
async fn decisions_use_accented_labels() {
    let (status, body) = get("/api/DecisionAleatoria?cantidad=2").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["total_decisiones"], 2);
    let outcomes = body["decisiones"][0].as_object().expect("label map");
    assert!(outcomes.contains_key("decisión_1"));
    assert!(outcomes.contains_key("decisión_2"));
}

#[actix_web::test]
async fn colors_are_lowercase_hex() {
    let (status, body) = get("/api/ColorAleatorio?cantidad=3").await;
    assert_success_envelope(status, &body);
    let colors = body["colores"].as_object().expect("color map");
    assert_eq!(colors.len(), 3);
    for color in colors.values() {
        let color = color.as_str().expect("hex color");
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[actix_web::test]
async fn root_serves_service_metadata() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "random-misc-api");
    assert!(body["version"].as_str().is_some());
    assert!(body["librerias"].as_array().is_some_and(|l| !l.is_empty()));
}

#[rstest]
#[case("/health/live")]
#[case("/health/ready")]
#[actix_web::test]
async fn health_probes_respond_ok(#[case] path: &str) {
    let app = actix_test::init_service(App::new().configure(configure)).await;
    let request = actix_test::TestRequest::get().uri(path).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn defaults_apply_when_no_parameters_are_sent() {
    let (status, body) = get("/api/NumAleatorio").await;
    assert_success_envelope(status, &body);
    assert_eq!(body["cantidad"], 1);
    let values = body["aleatorios"].as_array().expect("array");
    assert_eq!(values.len(), 1);
    assert!((1..=100).contains(&values[0].as_i64().expect("integer")));
}
