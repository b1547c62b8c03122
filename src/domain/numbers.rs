//! Numeric generators: integer ranges, decimal ranges, and binary strings.

use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{GenerationError, GenerationResult};
use super::validate::{checked_count, checked_length};

/// Normalized parameters for `/api/NumAleatorio`.
#[derive(Debug, Clone, Copy)]
pub struct IntegerRangeParams {
    pub lower: i64,
    pub upper: i64,
    pub count: i64,
}

/// Validated integer-range request.
#[derive(Debug, Clone, Copy)]
pub struct IntegerRangeRequest {
    lower: i64,
    upper: i64,
    count: usize,
}

impl IntegerRangeParams {
    /// Check order: range (1002), then count (1001/1000).
    pub fn validate(self) -> GenerationResult<IntegerRangeRequest> {
        if self.lower >= self.upper {
            return Err(GenerationError::new(
                1002,
                "El límite inferior debe ser menor que el superior.",
            ));
        }
        let count = checked_count(
            self.count,
            "La cantidad debe ser mayor a 0.",
            "La cantidad debe ser menor a 100.",
        )?;
        Ok(IntegerRangeRequest {
            lower: self.lower,
            upper: self.upper,
            count,
        })
    }
}

/// Uniform integers drawn from an inclusive range.
#[derive(Debug, Serialize, ToSchema)]
pub struct IntegerRangePayload {
    pub aleatorios: Vec<i64>,
    pub cantidad: usize,
}

/// Draw `count` independent uniform integers in `[lower, upper]` inclusive.
pub fn integers<R: Rng + ?Sized>(req: &IntegerRangeRequest, rng: &mut R) -> IntegerRangePayload {
    let aleatorios = (0..req.count)
        .map(|_| rng.gen_range(req.lower..=req.upper))
        .collect();
    IntegerRangePayload {
        aleatorios,
        cantidad: req.count,
    }
}

/// Normalized parameters for `/api/NumDecimalAleatorio`.
#[derive(Debug, Clone, Copy)]
pub struct DecimalRangeParams {
    pub lower: f64,
    pub upper: f64,
    pub decimals: i64,
    pub count: i64,
}

/// Validated decimal-range request.
#[derive(Debug, Clone, Copy)]
pub struct DecimalRangeRequest {
    lower: f64,
    upper: f64,
    decimals: usize,
    count: usize,
}

impl DecimalRangeParams {
    /// Check order: range (1003), decimals (1002), then count (1001/1000).
    pub fn validate(self) -> GenerationResult<DecimalRangeRequest> {
        if self.lower >= self.upper {
            return Err(GenerationError::new(
                1003,
                "El límite inferior debe ser menor que el superior.",
            ));
        }
        if !(0..=10).contains(&self.decimals) {
            return Err(GenerationError::new(
                1002,
                "Los decimales deben estar entre 0 y 10.",
            ));
        }
        let count = checked_count(
            self.count,
            "La cantidad debe ser mayor a 0.",
            "La cantidad debe ser menor a 100.",
        )?;
        Ok(DecimalRangeRequest {
            lower: self.lower,
            upper: self.upper,
            decimals: self.decimals as usize,
            count,
        })
    }
}

/// Uniform decimals formatted to a fixed number of digits.
#[derive(Debug, Serialize, ToSchema)]
pub struct DecimalRangePayload {
    pub aleatorios: Vec<String>,
    pub cantidad: usize,
}

/// Draw `count` uniform floats in `[lower, upper]`, emitted as fixed-precision
/// strings. Formatting uses Rust's default tie rule (round half to even).
pub fn decimals<R: Rng + ?Sized>(req: &DecimalRangeRequest, rng: &mut R) -> DecimalRangePayload {
    let aleatorios = (0..req.count)
        .map(|_| {
            let value: f64 = rng.gen_range(req.lower..=req.upper);
            format!("{value:.prec$}", prec = req.decimals)
        })
        .collect();
    DecimalRangePayload {
        aleatorios,
        cantidad: req.count,
    }
}

/// Normalized parameters for `/api/BinarioAleatorio`.
#[derive(Debug, Clone, Copy)]
pub struct BinaryParams {
    pub length: i64,
    pub count: i64,
}

/// Validated binary-string request.
#[derive(Debug, Clone, Copy)]
pub struct BinaryRequest {
    length: usize,
    count: usize,
}

impl BinaryParams {
    /// Check order: count (1001/1000), then length (1002/1003).
    pub fn validate(self) -> GenerationResult<BinaryRequest> {
        let count = checked_count(
            self.count,
            "La cantidad debe ser mayor a 0.",
            "La cantidad debe ser menor a 100.",
        )?;
        let length = checked_length(self.length)?;
        Ok(BinaryRequest { length, count })
    }
}

/// Random binary strings of a fixed length.
#[derive(Debug, Serialize, ToSchema)]
pub struct BinaryPayload {
    pub binarios: Vec<String>,
    pub longitud: usize,
    pub cantidad: usize,
}

/// Produce `count` strings of `length` independent '0'/'1' characters.
pub fn binary_strings<R: Rng + ?Sized>(req: &BinaryRequest, rng: &mut R) -> BinaryPayload {
    let binarios = (0..req.count)
        .map(|_| {
            (0..req.length)
                .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
                .collect()
        })
        .collect();
    BinaryPayload {
        binarios,
        longitud: req.length,
        cantidad: req.count,
    }
}
