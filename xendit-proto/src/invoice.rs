//! Invoice records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An invoice as returned by `/v2/invoices`.
///
/// Invoices are either created directly or generated by a
/// [`RecurringPayment`](crate::RecurringPayment), in which case
/// `recurring_payment_id` links back to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID assigned by Xendit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// ID of the Xendit account that owns the invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Merchant-chosen identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// `PENDING`, `PAID`, `SETTLED` or `EXPIRED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Merchant name displayed on the checkout page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    /// Merchant logo displayed on the checkout page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_profile_picture_url: Option<String>,

    /// Invoice amount.
    #[serde(
        default,
        with = "crate::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,

    /// Email of the payer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hosted checkout page for this invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,

    /// ISO 8601 timestamp after which the invoice can no longer be paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    /// Virtual account options offered to the payer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_banks: Option<Vec<InvoiceBank>>,

    /// Over-the-counter options offered to the payer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_retail_outlets: Option<Vec<InvoiceRetailOutlet>>,

    /// Whether card payment is hidden from the checkout page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_exclude_credit_card: Option<bool>,

    /// Whether Xendit emails the payer about this invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_send_email: Option<bool>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    /// Merchant ID label used for card payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_label: Option<String>,

    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Payment timestamp, set once the invoice is paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,

    /// Card charge created when the invoice was paid by card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card_charge_id: Option<String>,

    /// Method used to pay, e.g. `BANK_TRANSFER` or `CREDIT_CARD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Channel used to pay, e.g. `BCA` or `ALFAMART`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_channel: Option<String>,

    /// Account number or payment code the payer paid to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_destination: Option<String>,

    /// Recurring payment that generated this invoice, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_payment_id: Option<String>,

    /// Where the payer lands after a successful payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_redirect_url: Option<String>,

    /// Where the payer lands after a failed payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_redirect_url: Option<String>,

    /// Fixed virtual account to reuse for this payer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_va: Option<bool>,

    /// Amount credited to the merchant after fees.
    #[serde(
        default,
        with = "crate::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub adjusted_received_amount: Option<Decimal>,

    /// Fees paid by the payer.
    #[serde(
        default,
        with = "crate::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fees_paid_amount: Option<Decimal>,

    /// Bank used to pay, when paid through a virtual account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,

    /// Outlet used to pay, when paid over the counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_outlet_name: Option<String>,
}

/// A virtual account offered on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceBank {
    /// Bank code, e.g. `BCA`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,

    /// `POOL` or `FIXED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,

    /// Virtual account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,

    /// Amount to transfer.
    #[serde(
        default,
        with = "crate::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_amount: Option<Decimal>,

    /// Branch label shown with the account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_branch: Option<String>,

    /// Name shown to the payer as the account holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,

    /// Unique amount used to match pool transfers.
    #[serde(
        default,
        with = "crate::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub identity_amount: Option<Decimal>,
}

/// An over-the-counter outlet offered on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRetailOutlet {
    /// Outlet name, e.g. `ALFAMART`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_outlet_name: Option<String>,

    /// Code the payer presents at the counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_code: Option<String>,

    /// Amount to pay.
    #[serde(
        default,
        with = "crate::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_amount: Option<Decimal>,
}

/// The required fields of a create-invoice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateInvoice {
    /// Merchant-chosen identifier.
    pub external_id: String,
    /// Invoice amount.
    #[serde(with = "crate::amount")]
    pub amount: Decimal,
    /// Email of the payer.
    pub payer_email: String,
    /// Free-text description.
    pub description: String,
}
