#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Typed async client for the [Xendit](https://www.xendit.co) REST API.
//!
//! Each remote resource is exposed as a handle borrowed from a shared
//! [`XenditClient`]. The handle builds the endpoint URL and parameter map,
//! the client sends the request and decodes the response into the records
//! from [`xendit_proto`], or into a [`XenditError`].
//!
//! ```no_run
//! use xendit::{CreateRecurringPayment, Decimal, Interval, XenditClient, XenditConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = XenditClient::new(XenditConfig::new("xnd_development_..."))?;
//!
//! let payment = client
//!     .recurring_payments()
//!     .create(&CreateRecurringPayment {
//!         external_id: "recurring_123".into(),
//!         payer_email: "payer@example.com".into(),
//!         interval: Interval::Month,
//!         interval_count: 1,
//!         description: "Monthly plan".into(),
//!         amount: Decimal::from(100_000),
//!     })
//!     .await?;
//!
//! let id = payment.id.unwrap_or_default();
//! client.recurring_payments().pause(&id).await?;
//! for invoice in client.recurring_payments().list_invoices(&id).await? {
//!     println!("{:?} {:?}", invoice.id, invoice.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`]: The request dispatcher shared by every resource
//! - [`config`]: Client configuration
//! - [`constants`]: Default endpoint, environment variables, header names
//! - [`error`]: Error types
//! - [`recurring_payment`]: Recurring payment operations
//! - [`invoice`]: Invoice operations
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of every request

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod invoice;
pub mod recurring_payment;

pub use client::XenditClient;
pub use config::XenditConfig;
pub use error::{ApiError, ConfigError, XenditError};
pub use invoice::Invoices;
pub use recurring_payment::RecurringPayments;

pub use http::{HeaderMap, HeaderValue, Method};
pub use xendit_proto as proto;
pub use xendit_proto::{
    CreateInvoice, CreateRecurringPayment, Decimal, Interval, Invoice, Params, RecurringPayment,
    RecurringPaymentAction, to_params,
};
