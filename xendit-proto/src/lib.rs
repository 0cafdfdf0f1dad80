//! Wire format types for the Xendit REST API.
//!
//! This crate defines the serialization-level records exchanged with the
//! Xendit API. Every record is a flat struct of optional fields whose JSON
//! keys are fixed by serde attributes; keys the API adds later are ignored
//! on the way in and unset fields are never written on the way out.
//!
//! # Modules
//!
//! - [`recurring_payment`]: `RecurringPayment` and its create parameters
//! - [`invoice`]: `Invoice`, its nested bank/outlet records and create parameters
//! - [`error`]: The structured error body returned on 4xx/5xx responses
//! - [`amount`]: JSON codec for decimal currency amounts

pub mod amount;
mod count;
pub mod error;
pub mod invoice;
pub mod recurring_payment;

pub use error::ErrorBody;
pub use invoice::{CreateInvoice, Invoice, InvoiceBank, InvoiceRetailOutlet};
pub use recurring_payment::{
    CreateRecurringPayment, Interval, RecurringPayment, RecurringPaymentAction,
};
pub use rust_decimal::Decimal;

use serde::Serialize;
use serde_json::{Map, Value};

/// Caller-assembled request parameters, keyed by wire key.
pub type Params = Map<String, Value>;

/// Errors that can occur when building request parameters.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// The value serialized to something other than a JSON object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Converts any serializable record into a [`Params`] map.
///
/// Unset optional fields are skipped by the records in this crate, so the
/// resulting map holds exactly the fields that were populated.
///
/// # Errors
///
/// Returns [`ProtoError::NotAnObject`] if `value` does not serialize to a
/// JSON object, or [`ProtoError::Json`] if serialization itself fails.
pub fn to_params<T: Serialize + ?Sized>(value: &T) -> Result<Params, ProtoError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ProtoError::NotAnObject("null")),
        Value::Bool(_) => Err(ProtoError::NotAnObject("boolean")),
        Value::Number(_) => Err(ProtoError::NotAnObject("number")),
        Value::String(_) => Err(ProtoError::NotAnObject("string")),
        Value::Array(_) => Err(ProtoError::NotAnObject("array")),
    }
}
