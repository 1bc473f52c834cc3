//! Canonical decimal strings for the decimal fields of Mirror messages.
//!
//! The contracts parse decimals with 18 fractional digits. Every decimal
//! field a binding writes goes through [`canonicalize`] first and is carried
//! as a [`CanonicalDecimal`], which always serializes as
//! `<whole>.<18 digits>`.

use std::{fmt, str::FromStr};

use cosmwasm_schema::schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use cosmwasm_std::{Decimal, Uint128};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ClientError, ClientResult, NumericErrorKind};

pub const DECIMAL_PLACES: u32 = 18;

// integer digits of Decimal::MAX plus slack; anything past this cannot fit
const MAX_WHOLE_DIGITS: i64 = 40;

/// Numeric input accepted by decimal fields.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericInput {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
    Text(String),
    Decimal(Decimal),
}

macro_rules! numeric_input_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for NumericInput {
                fn from(value: $source) -> Self {
                    NumericInput::$variant(value as $target)
                }
            }
        )*
    };
}

numeric_input_from!(Signed as i128: i8, i16, i32, i64, i128, isize);
numeric_input_from!(Unsigned as u128: u8, u16, u32, u64, u128, usize);

// finite f32 values keep their own shortest decimal form, not the widened f64
impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        match value.is_finite() {
            true => NumericInput::Text(value.to_string()),
            false => NumericInput::Float(f64::from(value)),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl From<&String> for NumericInput {
    fn from(value: &String) -> Self {
        NumericInput::Text(value.clone())
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        NumericInput::Decimal(value)
    }
}

impl From<Uint128> for NumericInput {
    fn from(value: Uint128) -> Self {
        NumericInput::Unsigned(value.u128())
    }
}

impl From<CanonicalDecimal> for NumericInput {
    fn from(value: CanonicalDecimal) -> Self {
        NumericInput::Decimal(value.0)
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Signed(v) => write!(f, "{v}"),
            NumericInput::Unsigned(v) => write!(f, "{v}"),
            NumericInput::Float(v) => write!(f, "{v}"),
            NumericInput::Text(v) => f.write_str(v),
            NumericInput::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// A non-negative decimal that serializes with exactly 18 fractional digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalDecimal(Decimal);

impl CanonicalDecimal {
    pub const fn new(value: Decimal) -> Self {
        CanonicalDecimal(value)
    }

    pub fn decimal(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for CanonicalDecimal {
    fn from(value: Decimal) -> Self {
        CanonicalDecimal(value)
    }
}

impl From<CanonicalDecimal> for Decimal {
    fn from(value: CanonicalDecimal) -> Self {
        value.0
    }
}

impl FromStr for CanonicalDecimal {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonicalize("decimal", s)
    }
}

impl fmt::Display for CanonicalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atomics = self.0.atomics().u128();
        let scale = 10u128.pow(DECIMAL_PLACES);
        write!(
            f,
            "{}.{:0width$}",
            atomics / scale,
            atomics % scale,
            width = DECIMAL_PLACES as usize
        )
    }
}

impl Serialize for CanonicalDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CanonicalDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Decimal::from_str(&text)
            .map(CanonicalDecimal)
            .map_err(|err| de::Error::custom(format!("invalid decimal {text:?}: {err}")))
    }
}

impl JsonSchema for CanonicalDecimal {
    fn schema_name() -> String {
        "CanonicalDecimal".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

/// Converts `input` into the canonical decimal the contracts expect.
///
/// `field` names the message field being filled and is reported back in
/// [`ClientError::InvalidNumericInput`]. Negative values are rejected, as are
/// values needing more than 18 fractional digits; nothing is rounded.
pub fn canonicalize(
    field: &'static str,
    input: impl Into<NumericInput>,
) -> ClientResult<CanonicalDecimal> {
    let input = input.into();
    parse_input(&input)
        .map(CanonicalDecimal)
        .map_err(|kind| ClientError::InvalidNumericInput {
            field,
            input: input.to_string(),
            kind,
        })
}

fn parse_input(input: &NumericInput) -> Result<Decimal, NumericErrorKind> {
    match input {
        NumericInput::Signed(v) if *v < 0 => Err(NumericErrorKind::Negative),
        NumericInput::Signed(v) => from_whole(*v as u128),
        NumericInput::Unsigned(v) => from_whole(*v),
        NumericInput::Float(v) if !v.is_finite() => Err(NumericErrorKind::NonFinite),
        // f64 Display never uses exponent notation
        NumericInput::Float(v) => parse_text(&v.to_string()),
        NumericInput::Text(v) => parse_text(v),
        NumericInput::Decimal(v) => Ok(*v),
    }
}

fn from_whole(value: u128) -> Result<Decimal, NumericErrorKind> {
    Decimal::from_atomics(value, 0).map_err(|_| NumericErrorKind::OutOfRange)
}

fn parse_text(raw: &str) -> Result<Decimal, NumericErrorKind> {
    let text = raw.trim();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&unsigned[..idx], parse_exponent(&unsigned[idx + 1..])?),
        None => (unsigned, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(NumericErrorKind::NotANumber);
    }
    if !whole
        .bytes()
        .chain(fraction.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(NumericErrorKind::NotANumber);
    }

    // `point` is where the decimal point sits within `digits`
    let digits = format!("{whole}{fraction}");
    let significant = digits.trim_start_matches('0');
    let point = (whole.len() as i64 - (digits.len() - significant.len()) as i64)
        .saturating_add(exponent);
    let significant = significant.trim_end_matches('0');

    if significant.is_empty() {
        return Ok(Decimal::zero());
    }
    if negative {
        return Err(NumericErrorKind::Negative);
    }

    let len = significant.len() as i64;
    if len.saturating_sub(point) > i64::from(DECIMAL_PLACES) {
        return Err(NumericErrorKind::TooPrecise);
    }
    if point > MAX_WHOLE_DIGITS {
        return Err(NumericErrorKind::OutOfRange);
    }

    let normalized = if point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), significant)
    } else if point >= len {
        format!("{}{}", significant, "0".repeat((point - len) as usize))
    } else {
        let (int_part, frac_part) = significant.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    };

    Decimal::from_str(&normalized).map_err(|_| NumericErrorKind::OutOfRange)
}

fn parse_exponent(raw: &str) -> Result<i64, NumericErrorKind> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericErrorKind::NotANumber);
    }
    // saturates; anything past i64 is out of range or too precise regardless
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}
