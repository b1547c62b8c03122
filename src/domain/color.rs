//! Random RGB colors in hexadecimal notation.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::GenerationResult;
use super::validate::checked_count;

/// Normalized parameters for `/api/ColorAleatorio`.
#[derive(Debug, Clone, Copy)]
pub struct ColorParams {
    pub count: i64,
}

/// Validated color request.
#[derive(Debug, Clone, Copy)]
pub struct ColorRequest {
    count: usize,
}

impl ColorParams {
    pub fn validate(self) -> GenerationResult<ColorRequest> {
        let count = checked_count(
            self.count,
            "La cantidad debe ser mayor a 0.",
            "La cantidad debe ser menor a 100.",
        )?;
        Ok(ColorRequest { count })
    }
}

/// Labeled hex colors.
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorPayload {
    pub colores: BTreeMap<String, String>,
    pub cantidad: usize,
}

/// Produce `count` colors with each channel uniform in `[0, 255]`, keyed
/// `color_N` and formatted as lowercase `#rrggbb`.
pub fn colors<R: Rng + ?Sized>(req: &ColorRequest, rng: &mut R) -> ColorPayload {
    let colores = (1..=req.count)
        .map(|i| {
            let (r, g, b) = (
                rng.gen_range(0..=255u8),
                rng.gen_range(0..=255u8),
                rng.gen_range(0..=255u8),
            );
            (format!("color_{i}"), format!("#{r:02x}{g:02x}{b:02x}"))
        })
        .collect();
    ColorPayload {
        colores,
        cantidad: req.count,
    }
}
