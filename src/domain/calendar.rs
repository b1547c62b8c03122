//! Date and time generators over caller-supplied inclusive ranges.
//!
//! Dates use the fixed `DD/MM/YYYY` format and draws are uniform by day
//! offset; times use `HH:MM:SS` and draws are uniform by second offset
//! within one day.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{GenerationError, GenerationResult};
use super::validate::checked_count;

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M:%S";
const TIME_FORMAT_12H: &str = "%I:%M:%S %p";

/// Normalized parameters for `/api/FechaAleatoria`.
#[derive(Debug, Clone)]
pub struct DateRangeParams {
    pub start: String,
    pub end: String,
    pub count: i64,
}

/// Validated date-range request.
#[derive(Debug, Clone, Copy)]
pub struct DateRangeRequest {
    start: NaiveDate,
    span_days: i64,
    count: usize,
}

impl DateRangeParams {
    /// Check order: parse (1003), count (1001/1000), ordering (1002).
    pub fn validate(self) -> GenerationResult<DateRangeRequest> {
        let parse = |raw: &str| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                GenerationError::new(1003, "Formato de fecha inválido. Usa DD/MM/YYYY.")
            })
        };
        let start = parse(&self.start)?;
        let end = parse(&self.end)?;
        let count = checked_count(
            self.count,
            "La cantidad debe ser mayor a 0.",
            "La cantidad debe ser menor a 100.",
        )?;
        if start > end {
            return Err(GenerationError::new(
                1002,
                "La fecha inicial no puede ser posterior a la fecha final.",
            ));
        }
        Ok(DateRangeRequest {
            start,
            span_days: (end - start).num_days(),
            count,
        })
    }
}

/// Labeled random dates.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatePayload {
    pub fechas_aleatorias: BTreeMap<String, String>,
    pub cantidad: usize,
}

/// Draw `count` dates uniformly by day offset in the inclusive range,
/// keyed `fecha_N`. When start equals end every draw is that date.
pub fn dates<R: Rng + ?Sized>(req: &DateRangeRequest, rng: &mut R) -> DatePayload {
    let fechas_aleatorias = (1..=req.count)
        .map(|i| {
            let offset = rng.gen_range(0..=req.span_days);
            let date = req.start + Duration::days(offset);
            (format!("fecha_{i}"), date.format(DATE_FORMAT).to_string())
        })
        .collect();
    DatePayload {
        fechas_aleatorias,
        cantidad: req.count,
    }
}

/// Output clock format for the time generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFormat {
    TwentyFourHour,
    TwelveHour,
}

impl ClockFormat {
    /// Parse the `formato` query flag; only `"24"` and `"12"` are accepted.
    pub fn parse(raw: &str) -> GenerationResult<Self> {
        match raw.trim() {
            "24" => Ok(Self::TwentyFourHour),
            "12" => Ok(Self::TwelveHour),
            _ => Err(GenerationError::new(1004, "El formato debe ser 12 o 24.")),
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::TwentyFourHour => TIME_FORMAT,
            Self::TwelveHour => TIME_FORMAT_12H,
        }
    }
}

/// Normalized parameters for `/api/HoraAleatoria`.
#[derive(Debug, Clone)]
pub struct TimeRangeParams {
    pub start: String,
    pub end: String,
    pub format: String,
    pub count: i64,
}

/// Validated time-range request.
#[derive(Debug, Clone, Copy)]
pub struct TimeRangeRequest {
    start: NaiveTime,
    span_seconds: i64,
    format: ClockFormat,
    count: usize,
}

impl TimeRangeParams {
    /// Check order: parse (1003), format flag (1004), count (1001/1000),
    /// ordering (1002).
    pub fn validate(self) -> GenerationResult<TimeRangeRequest> {
        let parse = |raw: &str| {
            NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| {
                GenerationError::new(1003, "Formato de hora inválido. Usa HH:MM:SS.")
            })
        };
        let start = parse(&self.start)?;
        let end = parse(&self.end)?;
        let format = ClockFormat::parse(&self.format)?;
        let count = checked_count(
            self.count,
            "La cantidad debe ser mayor a 0.",
            "La cantidad debe ser menor a 100.",
        )?;
        if start > end {
            return Err(GenerationError::new(
                1002,
                "La hora inicial no puede ser posterior a la hora final.",
            ));
        }
        let span_seconds =
            i64::from(end.num_seconds_from_midnight()) - i64::from(start.num_seconds_from_midnight());
        Ok(TimeRangeRequest {
            start,
            span_seconds,
            format,
            count,
        })
    }
}

/// Labeled random times.
#[derive(Debug, Serialize, ToSchema)]
pub struct TimePayload {
    pub horas_aleatorias: BTreeMap<String, String>,
    pub cantidad: usize,
}

/// Draw `count` times uniformly by second offset in the inclusive range,
/// keyed `hora_N`, formatted per the requested clock.
pub fn times<R: Rng + ?Sized>(req: &TimeRangeRequest, rng: &mut R) -> TimePayload {
    let horas_aleatorias = (1..=req.count)
        .map(|i| {
            let offset = rng.gen_range(0..=req.span_seconds);
            let time = req.start + Duration::seconds(offset);
            (format!("hora_{i}"), time.format(req.format.pattern()).to_string())
        })
        .collect();
    TimePayload {
        horas_aleatorias,
        cantidad: req.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rng::seeded_rng;
    use rstest::rstest;

    fn date_request(start: &str, end: &str, count: i64) -> GenerationResult<DateRangeRequest> {
        DateRangeParams {
            start: start.to_owned(),
            end: end.to_owned(),
            count,
        }
        .validate()
    }

    #[test]
    fn dates_fall_inside_the_inclusive_range() {
        let req = date_request("01/01/2020", "31/12/2020", 50).expect("valid");
        let payload = dates(&req, &mut seeded_rng(1));
        assert_eq!(payload.fechas_aleatorias.len(), 50);
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("date");
        let end = NaiveDate::from_ymd_opt(2020, 12, 31).expect("date");
        for text in payload.fechas_aleatorias.values() {
            let date = NaiveDate::parse_from_str(text, DATE_FORMAT).expect("formatted");
            assert!((start..=end).contains(&date));
        }
    }

    #[test]
    fn equal_endpoints_pin_every_draw() {
        let req = date_request("15/06/2021", "15/06/2021", 10).expect("valid");
        let payload = dates(&req, &mut seeded_rng(2));
        assert!(
            payload
                .fechas_aleatorias
                .values()
                .all(|d| d == "15/06/2021")
        );
    }

    #[rstest]
    #[case("2020-01-01", "31/12/2020")]
    #[case("01/01/2020", "December 31")]
    #[case("32/01/2020", "31/12/2020")]
    fn malformed_dates_yield_1003(#[case] start: &str, #[case] end: &str) {
        let err = date_request(start, end, 1).expect_err("format should be rejected");
        assert_eq!(err.code(), 1003);
    }

    #[test]
    fn inverted_dates_yield_1002() {
        let err = date_request("02/02/2022", "01/01/2021", 1).expect_err("order");
        assert_eq!(err.code(), 1002);
    }

    #[test]
    fn parse_error_wins_over_count_error() {
        let err = date_request("bad", "01/01/2021", 0).expect_err("invalid");
        assert_eq!(err.code(), 1003);
    }

    fn time_request(
        start: &str,
        end: &str,
        format: &str,
        count: i64,
    ) -> GenerationResult<TimeRangeRequest> {
        TimeRangeParams {
            start: start.to_owned(),
            end: end.to_owned(),
            format: format.to_owned(),
            count,
        }
        .validate()
    }

    #[test]
    fn times_fall_inside_the_inclusive_range() {
        let req = time_request("08:00:00", "17:30:00", "24", 50).expect("valid");
        let payload = times(&req, &mut seeded_rng(3));
        let start = NaiveTime::parse_from_str("08:00:00", TIME_FORMAT).expect("time");
        let end = NaiveTime::parse_from_str("17:30:00", TIME_FORMAT).expect("time");
        for text in payload.horas_aleatorias.values() {
            let time = NaiveTime::parse_from_str(text, TIME_FORMAT).expect("formatted");
            assert!((start..=end).contains(&time));
        }
    }

    #[test]
    fn twelve_hour_format_renames_the_same_instant() {
        let req24 = time_request("15:04:05", "15:04:05", "24", 1).expect("valid");
        let req12 = time_request("15:04:05", "15:04:05", "12", 1).expect("valid");
        let in_24 = &times(&req24, &mut seeded_rng(4)).horas_aleatorias["hora_1"];
        let in_12 = &times(&req12, &mut seeded_rng(4)).horas_aleatorias["hora_1"];
        assert_eq!(in_24, "15:04:05");
        assert_eq!(in_12, "03:04:05 PM");
        assert_ne!(in_24, in_12);
    }

    #[rstest]
    #[case("25:00:00", "23:00:00", 1003)]
    #[case("lunch", "23:00:00", 1003)]
    fn malformed_times_yield_1003(#[case] start: &str, #[case] end: &str, #[case] code: u16) {
        let err = time_request(start, end, "24", 1).expect_err("format");
        assert_eq!(err.code(), code);
    }

    #[test]
    fn unknown_clock_format_yields_1004() {
        let err = time_request("00:00:00", "23:59:59", "48", 1).expect_err("flag");
        assert_eq!(err.code(), 1004);
    }

    #[test]
    fn inverted_times_yield_1002() {
        let err = time_request("18:00:00", "06:00:00", "24", 1).expect_err("order");
        assert_eq!(err.code(), 1002);
    }
}
