//! Lenient decoding for integral counts.
//!
//! Counts are written as plain JSON integers, but some responses carry them
//! as floats (`1.0`). Any integral number, or numeric string, in `u32` range
//! is accepted.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, de};

/// Deserializes `null` as `None` and any integral number as `Some`.
///
/// # Errors
///
/// Fails on fractional, negative or out-of-range values.
pub fn deserialize_option<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    let Some(value) = Option::<Decimal>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if !value.fract().is_zero() {
        return Err(de::Error::custom(format!("count {value} is not an integer")));
    }
    value
        .to_u32()
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("count {value} is out of range")))
}
