//! Geographic generators: coordinates and countries.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{GenerationError, GenerationResult};
use super::validate::checked_count;

const LATITUDE_BOUND: f64 = 89.999_999;
const LONGITUDE_BOUND: f64 = 179.999_999;

/// Continents recognized by the country filter.
pub const CONTINENTS: [&str; 6] = [
    "África",
    "América del Norte",
    "América del Sur",
    "Asia",
    "Europa",
    "Oceanía",
];

/// Country → continent table; draws are made with replacement.
const COUNTRIES: [(&str, &str); 60] = [
    ("Argelia", "África"),
    ("Egipto", "África"),
    ("Etiopía", "África"),
    ("Ghana", "África"),
    ("Kenia", "África"),
    ("Marruecos", "África"),
    ("Nigeria", "África"),
    ("Senegal", "África"),
    ("Sudáfrica", "África"),
    ("Tanzania", "África"),
    ("Canadá", "América del Norte"),
    ("Costa Rica", "América del Norte"),
    ("Cuba", "América del Norte"),
    ("Estados Unidos", "América del Norte"),
    ("Guatemala", "América del Norte"),
    ("Honduras", "América del Norte"),
    ("México", "América del Norte"),
    ("Panamá", "América del Norte"),
    ("Argentina", "América del Sur"),
    ("Bolivia", "América del Sur"),
    ("Brasil", "América del Sur"),
    ("Chile", "América del Sur"),
    ("Colombia", "América del Sur"),
    ("Ecuador", "América del Sur"),
    ("Paraguay", "América del Sur"),
    ("Perú", "América del Sur"),
    ("Uruguay", "América del Sur"),
    ("Venezuela", "América del Sur"),
    ("China", "Asia"),
    ("Corea del Sur", "Asia"),
    ("Filipinas", "Asia"),
    ("India", "Asia"),
    ("Indonesia", "Asia"),
    ("Japón", "Asia"),
    ("Malasia", "Asia"),
    ("Tailandia", "Asia"),
    ("Turquía", "Asia"),
    ("Vietnam", "Asia"),
    ("Alemania", "Europa"),
    ("Bélgica", "Europa"),
    ("España", "Europa"),
    ("Francia", "Europa"),
    ("Grecia", "Europa"),
    ("Irlanda", "Europa"),
    ("Italia", "Europa"),
    ("Noruega", "Europa"),
    ("Países Bajos", "Europa"),
    ("Polonia", "Europa"),
    ("Portugal", "Europa"),
    ("Reino Unido", "Europa"),
    ("Suecia", "Europa"),
    ("Suiza", "Europa"),
    ("Australia", "Oceanía"),
    ("Fiyi", "Oceanía"),
    ("Nueva Zelanda", "Oceanía"),
    ("Papúa Nueva Guinea", "Oceanía"),
    ("Samoa", "Oceanía"),
    ("Islas Salomón", "Oceanía"),
    ("Tonga", "Oceanía"),
    ("Vanuatu", "Oceanía"),
];

/// Normalized parameters for `/api/CoordenadaAleatoria`.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateParams {
    pub count: i64,
}

/// Validated coordinate request.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateRequest {
    count: usize,
}

impl CoordinateParams {
    pub fn validate(self) -> GenerationResult<CoordinateRequest> {
        let count = checked_count(
            self.count,
            "La cantidad de coordenadas debe ser mayor a 0.",
            "La cantidad de coordenadas debe ser menor a 100.",
        )?;
        Ok(CoordinateRequest { count })
    }
}

/// A latitude/longitude pair rounded to six decimal places.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Coordinate {
    pub latitud: f64,
    pub longitud: f64,
}

/// Labeled coordinate pairs.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoordinatePayload {
    pub coordenadas: BTreeMap<String, Coordinate>,
    pub cantidad: usize,
}

fn round_six(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Produce `count` uniform coordinate pairs keyed `coordenada_N`.
pub fn coordinates<R: Rng + ?Sized>(req: &CoordinateRequest, rng: &mut R) -> CoordinatePayload {
    let coordenadas = (1..=req.count)
        .map(|i| {
            let pair = Coordinate {
                latitud: round_six(rng.gen_range(-LATITUDE_BOUND..=LATITUDE_BOUND)),
                longitud: round_six(rng.gen_range(-LONGITUDE_BOUND..=LONGITUDE_BOUND)),
            };
            (format!("coordenada_{i}"), pair)
        })
        .collect();
    CoordinatePayload {
        coordenadas,
        cantidad: req.count,
    }
}

/// Normalized parameters for `/api/PaisAleatorio`.
#[derive(Debug, Clone)]
pub struct CountryParams {
    pub count: i64,
    /// Comma-separated continent filter, absent for the whole table.
    pub continents: Option<String>,
}

/// Validated country request holding the filtered draw pool.
#[derive(Debug, Clone)]
pub struct CountryRequest {
    count: usize,
    pool: Vec<(&'static str, &'static str)>,
}

impl CountryParams {
    /// Check order: count (1001/1000), then unrecognized continents (1002),
    /// listing every bad token in the message.
    pub fn validate(self) -> GenerationResult<CountryRequest> {
        let count = checked_count(
            self.count,
            "La cantidad de países debe ser mayor a 0.",
            "La cantidad de países debe ser menor a 100.",
        )?;

        let pool = match self.continents.as_deref().map(str::trim) {
            None | Some("") => COUNTRIES.to_vec(),
            Some(filter) => {
                let requested: Vec<&str> = filter.split(',').map(str::trim).collect();
                let unknown: Vec<&str> = requested
                    .iter()
                    .copied()
                    .filter(|token| !CONTINENTS.contains(token))
                    .collect();
                if !unknown.is_empty() {
                    return Err(GenerationError::new(
                        1002,
                        format!(
                            "Continentes no reconocidos: {}. Usa: {}.",
                            unknown.join(", "),
                            CONTINENTS.join(", "),
                        ),
                    ));
                }
                COUNTRIES
                    .iter()
                    .copied()
                    .filter(|(_, continent)| requested.contains(continent))
                    .collect()
            }
        };

        Ok(CountryRequest { count, pool })
    }
}

/// A country paired with its continent.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CountryPick {
    pub pais: &'static str,
    pub continente: &'static str,
}

/// Labeled country draws.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountryPayload {
    pub paises: BTreeMap<String, CountryPick>,
    pub cantidad: usize,
}

/// Draw `count` countries with replacement from the (optionally filtered)
/// table, keyed `pais_N`.
pub fn countries<R: Rng + ?Sized>(req: &CountryRequest, rng: &mut R) -> CountryPayload {
    let paises = (1..=req.count)
        .map(|i| {
            let (pais, continente) = req.pool[rng.gen_range(0..req.pool.len())];
            (format!("pais_{i}"), CountryPick { pais, continente })
        })
        .collect();
    CountryPayload {
        paises,
        cantidad: req.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rng::seeded_rng;

    #[test]
    fn coordinates_stay_inside_the_bounds() {
        let req = CoordinateParams { count: 100 }.validate().expect("valid");
        let payload = coordinates(&req, &mut seeded_rng(1));
        assert_eq!(payload.coordenadas.len(), 100);
        for pair in payload.coordenadas.values() {
            assert!((-LATITUDE_BOUND..=LATITUDE_BOUND).contains(&pair.latitud));
            assert!((-LONGITUDE_BOUND..=LONGITUDE_BOUND).contains(&pair.longitud));
        }
    }

    #[test]
    fn coordinates_are_rounded_to_six_places() {
        let req = CoordinateParams { count: 20 }.validate().expect("valid");
        let payload = coordinates(&req, &mut seeded_rng(2));
        for pair in payload.coordenadas.values() {
            assert_eq!(round_six(pair.latitud), pair.latitud);
            assert_eq!(round_six(pair.longitud), pair.longitud);
        }
    }

    #[test]
    fn every_country_maps_to_a_known_continent() {
        assert!(
            COUNTRIES
                .iter()
                .all(|(_, continent)| CONTINENTS.contains(continent))
        );
    }

    #[test]
    fn continent_filter_restricts_the_pool() {
        let req = CountryParams {
            count: 50,
            continents: Some("Europa, Oceanía".to_owned()),
        }
        .validate()
        .expect("valid filter");
        let payload = countries(&req, &mut seeded_rng(3));
        assert!(
            payload
                .paises
                .values()
                .all(|pick| pick.continente == "Europa" || pick.continente == "Oceanía")
        );
    }

    #[test]
    fn unknown_continents_are_listed_in_the_error() {
        let err = CountryParams {
            count: 1,
            continents: Some("Europa,Atlántida,Mordor".to_owned()),
        }
        .validate()
        .expect_err("unknown tokens should be rejected");
        assert_eq!(err.code(), 1002);
        assert!(err.message().contains("Atlántida"));
        assert!(err.message().contains("Mordor"));
        assert!(!err.message().starts_with("Continentes no reconocidos: Europa"));
    }

    #[test]
    fn empty_filter_uses_the_whole_table() {
        let req = CountryParams {
            count: 10,
            continents: Some("  ".to_owned()),
        }
        .validate()
        .expect("blank filter is absent");
        let payload = countries(&req, &mut seeded_rng(4));
        assert_eq!(payload.cantidad, 10);
    }
}
