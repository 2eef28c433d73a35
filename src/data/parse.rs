use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Unit price: "1,20 €" → 1.20
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum PriceParseError {
    #[error("empty price")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("price '{0}' is not finite")]
    NotFinite(String),
    #[error("price {0} is negative")]
    Negative(f64),
}

/// Parse a euro price written with a decimal comma, e.g. `"1,20 €"`.
pub fn parse_unit_price(raw: &str) -> Result<f64, PriceParseError> {
    let cleaned = raw.replace(',', ".").replace('€', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(PriceParseError::Empty);
    }
    let value: f64 = cleaned
        .parse()
        .map_err(|_| PriceParseError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(PriceParseError::NotFinite(raw.to_string()));
    }
    if value < 0.0 {
        return Err(PriceParseError::Negative(value));
    }
    // -0.0 would otherwise survive the sign check
    Ok(value.abs())
}

// ---------------------------------------------------------------------------
// Quantity
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum QuantityParseError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("quantity '{0}' is not finite")]
    NotFinite(String),
}

/// Parse a quantity. Negative values (returns) are allowed, `NaN`/`inf` are not.
pub fn parse_quantity(raw: &str) -> Result<f64, QuantityParseError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| QuantityParseError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(QuantityParseError::NotFinite(raw.to_string()));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Sale date
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
#[error("'{0}' is not a recognised date")]
pub struct DateParseError(pub String);

/// Month-first for slashed dates, matching what pandas infers.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a calendar date. Datetimes are accepted and truncated to the day.
pub fn parse_sale_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let s = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| DateParseError(raw.to_string()))
}
