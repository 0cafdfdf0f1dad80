//! Recurring payment records.
//!
//! A recurring payment periodically issues an [`Invoice`](crate::Invoice) to
//! a payer until it is stopped or its `total_recurrence` is reached.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recurring payment as returned by `/recurring_payments`.
///
/// All fields are optional: a record built by the caller carries only the
/// fields it wants to send, and a record parsed from a response carries
/// whatever the API returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPayment {
    /// Recurring payment ID assigned by Xendit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Merchant-chosen identifier, typically the subscription ID in the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Email of the payer being charged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,

    /// Description shown on the recurring payment and its invoices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Amount billed per interval.
    #[serde(
        default,
        with = "crate::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,

    /// Billing frequency: `DAY`, `WEEK` or `MONTH`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// Number of intervals between two invoices.
    #[serde(
        default,
        deserialize_with = "crate::count::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_count: Option<u32>,

    /// Lifecycle status, e.g. `ACTIVE`, `PAUSED` or `STOPPED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Number of invoices to issue before the recurrence ends.
    #[serde(
        default,
        deserialize_with = "crate::count::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_recurrence: Option<u32>,

    /// Seconds each generated invoice stays payable.
    #[serde(
        default,
        deserialize_with = "crate::count::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_duration: Option<u32>,

    /// Whether Xendit emails the payer about each invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_send_email: Option<bool>,

    /// What to do when an invoice goes unpaid: `IGNORE` or `STOP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_payment_action: Option<String>,

    /// Card token used for automatic charges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<String>,

    /// ISO 8601 timestamp of the first invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Where the payer lands after a successful payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_redirect_url: Option<String>,

    /// Where the payer lands after a failed payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_redirect_url: Option<String>,

    /// Whether the stored card is charged automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recharge: Option<bool>,

    /// Whether the first invoice is charged on creation rather than at `start_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_immediately: Option<bool>,
}

/// Billing frequency of a recurring payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interval {
    /// Bill every `interval_count` days.
    Day,
    /// Bill every `interval_count` weeks.
    Week,
    /// Bill every `interval_count` months.
    Month,
}

impl Interval {
    /// Returns the wire value (`DAY`, `WEEK` or `MONTH`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The required fields of a create-recurring-payment request.
///
/// Serializes to exactly these six keys; use a [`Params`](crate::Params) map
/// to send optional fields as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRecurringPayment {
    /// Merchant-chosen identifier.
    pub external_id: String,
    /// Email of the payer being charged.
    pub payer_email: String,
    /// Billing frequency.
    pub interval: Interval,
    /// Number of intervals between two invoices, e.g. `MONTH` with `3` bills quarterly.
    pub interval_count: u32,
    /// Description for the recurring payment and its invoices.
    pub description: String,
    /// Amount per invoice.
    #[serde(with = "crate::amount")]
    pub amount: Decimal,
}

/// A state transition applied to an existing recurring payment.
///
/// The API exposes each one as `POST /recurring_payments/{id}/{action}!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurringPaymentAction {
    /// Ends the recurrence permanently.
    Stop,
    /// Suspends invoice generation.
    Pause,
    /// Restarts a paused recurrence.
    Resume,
}

impl RecurringPaymentAction {
    /// Returns the endpoint path segment, including the trailing `!`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Stop => "stop!",
            Self::Pause => "pause!",
            Self::Resume => "resume!",
        }
    }
}

impl fmt::Display for RecurringPaymentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stop => "stop",
            Self::Pause => "pause",
            Self::Resume => "resume",
        })
    }
}
