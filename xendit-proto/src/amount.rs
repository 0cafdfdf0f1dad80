//! JSON codec for currency amounts.
//!
//! Amounts are held as [`Decimal`] so that values parsed from the API are
//! never rounded. On the wire they are plain JSON numbers:
//!
//! - integral amounts are written as JSON integers (`10000`, not `10000.0`),
//!   which keeps request bodies identical to hand-assembled parameter maps;
//! - fractional amounts are written as the nearest `f64`;
//! - incoming amounts may be JSON integers, floats or numeric strings.
//!
//! Use with `#[serde(with = "xendit_proto::amount")]`, or
//! [`option`] for `Option<Decimal>` fields.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serializer, ser};

/// Serializes a [`Decimal`] as a JSON number.
///
/// # Errors
///
/// Fails if a fractional amount cannot be represented as an `f64`.
pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero() {
        if let Some(int) = value.to_i64() {
            return serializer.serialize_i64(int);
        }
        if let Some(int) = value.to_u64() {
            return serializer.serialize_u64(int);
        }
    }
    let float = value
        .to_f64()
        .ok_or_else(|| ser::Error::custom(format!("amount {value} is not representable")))?;
    serializer.serialize_f64(float)
}

/// Deserializes a [`Decimal`] from a JSON number or numeric string.
///
/// # Errors
///
/// Fails if the input is not numeric or does not fit in a [`Decimal`].
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    <Decimal as Deserialize>::deserialize(deserializer)
}

/// The same codec for `Option<Decimal>` fields.
pub mod option {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `Some` through [`super::serialize`] and `None` as `null`.
    ///
    /// # Errors
    ///
    /// Fails if a fractional amount cannot be represented as an `f64`.
    pub fn serialize<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(amount) => super::serialize(amount, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `null` as `None` and anything else through [`super::deserialize`].
    ///
    /// # Errors
    ///
    /// Fails if the input is not numeric or does not fit in a [`Decimal`].
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Option::<Decimal>::deserialize(deserializer)
    }
}
