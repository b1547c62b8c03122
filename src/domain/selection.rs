//! Random selection from a caller-supplied comma-separated list.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::index;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{GenerationError, GenerationResult};
use super::validate::checked_count;

/// Normalized parameters for `/api/SeleccionAleatoria`.
#[derive(Debug, Clone)]
pub struct SelectionParams {
    /// Raw comma-separated list; `None` or empty means the caller sent none.
    pub values: Option<String>,
    pub count: i64,
    pub unique: bool,
}

/// Validated selection request.
#[derive(Debug, Clone)]
pub struct SelectionRequest {
    values: Vec<String>,
    count: usize,
    unique: bool,
}

impl SelectionParams {
    /// Check order: missing list (1002), count (1001/1000), unique overflow
    /// (1003).
    pub fn validate(self) -> GenerationResult<SelectionRequest> {
        let raw = self.values.filter(|v| !v.is_empty()).ok_or_else(|| {
            GenerationError::new(
                1002,
                "Debes proporcionar una lista de valores separados por comas.",
            )
        })?;
        let values: Vec<String> = raw.split(',').map(str::to_owned).collect();
        let count = checked_count(
            self.count,
            "La cantidad debe ser mayor a 0.",
            "La cantidad debe ser menor a 100.",
        )?;
        if self.unique && count > values.len() {
            return Err(GenerationError::new(
                1003,
                "La cantidad solicitada excede el número de valores disponibles sin repetir.",
            ));
        }
        Ok(SelectionRequest {
            values,
            count,
            unique: self.unique,
        })
    }
}

/// Labeled selections, echoing the parsed input list.
#[derive(Debug, Serialize, ToSchema)]
pub struct SelectionPayload {
    pub seleccionados: BTreeMap<String, String>,
    pub valores: Vec<String>,
    pub cantidad: usize,
    pub unicos: bool,
}

/// Draw `count` elements: a random subset in random order when `unique`,
/// otherwise independent draws with replacement.
pub fn select<R: Rng + ?Sized>(req: &SelectionRequest, rng: &mut R) -> SelectionPayload {
    let picks: Vec<String> = if req.unique {
        index::sample(rng, req.values.len(), req.count)
            .into_iter()
            .map(|i| req.values[i].clone())
            .collect()
    } else {
        (0..req.count)
            .map(|_| req.values[rng.gen_range(0..req.values.len())].clone())
            .collect()
    };

    let seleccionados = picks
        .into_iter()
        .enumerate()
        .map(|(i, value)| (format!("seleccion_{}", i + 1), value))
        .collect();

    SelectionPayload {
        seleccionados,
        valores: req.values.clone(),
        cantidad: req.count,
        unicos: req.unique,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rng::seeded_rng;
    use rstest::rstest;
    use std::collections::BTreeSet;

    fn params(values: Option<&str>, count: i64, unique: bool) -> SelectionParams {
        SelectionParams {
            values: values.map(str::to_owned),
            count,
            unique,
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn missing_values_yield_1002(#[case] values: Option<&str>) {
        let err = params(values, 1, true)
            .validate()
            .expect_err("missing list should be rejected");
        assert_eq!(err.code(), 1002);
    }

    #[test]
    fn unique_overflow_yields_1003() {
        let err = params(Some("a,b"), 3, true)
            .validate()
            .expect_err("overflow should be rejected");
        assert_eq!(err.code(), 1003);
    }

    #[test]
    fn overflow_is_allowed_with_replacement() {
        let req = params(Some("a,b"), 10, false).validate().expect("valid");
        let payload = select(&req, &mut seeded_rng(1));
        assert_eq!(payload.seleccionados.len(), 10);
        assert!(!payload.unicos);
    }

    #[test]
    fn unique_selection_has_no_repeats() {
        let req = params(Some("a,b,c,d,e,f"), 6, true)
            .validate()
            .expect("valid");
        let payload = select(&req, &mut seeded_rng(2));
        let distinct: BTreeSet<&String> = payload.seleccionados.values().collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn selections_come_from_the_input_list() {
        let req = params(Some("rojo,verde,azul"), 30, false)
            .validate()
            .expect("valid");
        let payload = select(&req, &mut seeded_rng(3));
        assert_eq!(payload.valores, ["rojo", "verde", "azul"]);
        assert!(
            payload
                .seleccionados
                .values()
                .all(|v| payload.valores.contains(v))
        );
    }

    #[test]
    fn missing_list_wins_over_bad_count() {
        let err = params(None, 0, false).validate().expect_err("invalid");
        assert_eq!(err.code(), 1002);
    }
}
