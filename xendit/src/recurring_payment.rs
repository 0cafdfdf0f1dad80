//! Recurring payment operations.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`create`](RecurringPayments::create) | `POST /recurring_payments` |
//! | [`edit`](RecurringPayments::edit) | `PATCH /recurring_payments/{id}` |
//! | [`get`](RecurringPayments::get) | `GET /recurring_payments/{id}` |
//! | [`stop`](RecurringPayments::stop), [`pause`](RecurringPayments::pause), [`resume`](RecurringPayments::resume) | `POST /recurring_payments/{id}/{action}!` |
//! | [`list_invoices`](RecurringPayments::list_invoices) | `GET /v2/invoices?recurring_payment_id={id}` |

use http::{HeaderMap, Method};
use xendit_proto::{
    CreateRecurringPayment, Invoice, Params, RecurringPayment, RecurringPaymentAction, to_params,
};

use crate::client::XenditClient;
use crate::error::XenditError;
use crate::invoice::INVOICES_PATH;

const RECURRING_PAYMENTS_PATH: &str = "recurring_payments";

/// Recurring payment endpoints, borrowed from a [`XenditClient`].
#[derive(Debug, Clone, Copy)]
pub struct RecurringPayments<'a> {
    client: &'a XenditClient,
}

impl<'a> RecurringPayments<'a> {
    pub(crate) const fn new(client: &'a XenditClient) -> Self {
        Self { client }
    }

    /// Creates a recurring payment from its required fields.
    ///
    /// Sends exactly the six required keys; use
    /// [`create_with_params`](Self::create_with_params) for optional ones.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn create(
        &self,
        request: &CreateRecurringPayment,
    ) -> Result<RecurringPayment, XenditError> {
        self.create_with_params(to_params(request)?).await
    }

    /// Creates a recurring payment from a caller-assembled parameter map.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn create_with_params(
        &self,
        params: Params,
    ) -> Result<RecurringPayment, XenditError> {
        self.create_with_headers(&HeaderMap::new(), params).await
    }

    /// Creates a recurring payment, sending extra headers such as
    /// [`IDEMPOTENCY_KEY_HEADER`](crate::constants::IDEMPOTENCY_KEY_HEADER).
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn create_with_headers(
        &self,
        headers: &HeaderMap,
        params: Params,
    ) -> Result<RecurringPayment, XenditError> {
        let url = self.client.endpoint(&[RECURRING_PAYMENTS_PATH])?;
        self.client
            .send(Method::POST, url, Some(headers), Some(&params))
            .await
    }

    /// Updates the given fields of a recurring payment.
    ///
    /// Only the supplied fields are sent; nothing is merged client-side.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn edit(&self, id: &str, params: Params) -> Result<RecurringPayment, XenditError> {
        let url = self.client.endpoint(&[RECURRING_PAYMENTS_PATH, id])?;
        self.client.request(Method::PATCH, url, Some(&params)).await
    }

    /// Fetches a recurring payment by ID.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails, including when no
    /// recurring payment has this ID.
    pub async fn get(&self, id: &str) -> Result<RecurringPayment, XenditError> {
        let url = self.client.endpoint(&[RECURRING_PAYMENTS_PATH, id])?;
        self.client.request(Method::GET, url, None).await
    }

    /// Applies an action and returns the recurring payment in its new state.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn action(
        &self,
        id: &str,
        action: RecurringPaymentAction,
    ) -> Result<RecurringPayment, XenditError> {
        let url = self
            .client
            .endpoint(&[RECURRING_PAYMENTS_PATH, id, action.path_segment()])?;
        self.client.request(Method::POST, url, None).await
    }

    /// Stops a recurring payment permanently.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn stop(&self, id: &str) -> Result<RecurringPayment, XenditError> {
        self.action(id, RecurringPaymentAction::Stop).await
    }

    /// Pauses a recurring payment.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn pause(&self, id: &str) -> Result<RecurringPayment, XenditError> {
        self.action(id, RecurringPaymentAction::Pause).await
    }

    /// Resumes a paused recurring payment.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn resume(&self, id: &str) -> Result<RecurringPayment, XenditError> {
        self.action(id, RecurringPaymentAction::Resume).await
    }

    /// Lists the invoices generated by a recurring payment, in API order.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn list_invoices(&self, id: &str) -> Result<Vec<Invoice>, XenditError> {
        let mut url = self.client.endpoint(INVOICES_PATH)?;
        url.query_pairs_mut().append_pair("recurring_payment_id", id);
        self.client.request(Method::GET, url, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::XenditConfig;
    use http::HeaderValue;
    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use xendit_proto::{Decimal, Interval};

    fn client_for(server: &MockServer) -> XenditClient {
        XenditClient::new(XenditConfig::new("xnd_development_key").with_base_url(server.uri()))
            .unwrap()
    }

    fn payment_json(status: &str) -> Value {
        json!({
            "id": "rp_1",
            "external_id": "recurring_123",
            "status": status,
            "amount": 100_000,
            "payer_email": "payer@example.com",
            "description": "Monthly plan",
            "interval": "MONTH",
            "interval_count": 1,
            "recurrence_progress": 3,
            "last_created_invoice_url": "https://invoice.xendit.co/web/invoices/inv_3"
        })
    }

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[tokio::test]
    async fn typed_and_map_create_send_identical_bodies() {
        let server = MockServer::start().await;
        let expected_body = json!({
            "external_id": "recurring_123",
            "payer_email": "payer@example.com",
            "interval": "MONTH",
            "interval_count": 1,
            "description": "Monthly plan",
            "amount": 100_000
        });

        Mock::given(method("POST"))
            .and(path("/recurring_payments"))
            .and(body_json(&expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("ACTIVE")))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let typed = client
            .recurring_payments()
            .create(&CreateRecurringPayment {
                external_id: "recurring_123".to_owned(),
                payer_email: "payer@example.com".to_owned(),
                interval: Interval::Month,
                interval_count: 1,
                description: "Monthly plan".to_owned(),
                amount: Decimal::from(100_000),
            })
            .await
            .unwrap();
        let from_map = client
            .recurring_payments()
            .create_with_params(params(expected_body.clone()))
            .await
            .unwrap();

        assert_eq!(typed, from_map);
        assert_eq!(typed.id.as_deref(), Some("rp_1"));
        assert_eq!(typed.amount, Some(Decimal::from(100_000)));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].body, requests[1].body);
    }

    #[tokio::test]
    async fn create_with_headers_forwards_idempotency_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/recurring_payments"))
            .and(header("x-idempotency-key", "order-42"))
            .and(body_json(json!({ "external_id": "recurring_123", "recharge": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("ACTIVE")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut headers = HeaderMap::new();
        headers.insert(
            crate::constants::IDEMPOTENCY_KEY_HEADER,
            HeaderValue::from_static("order-42"),
        );

        let payment = client
            .recurring_payments()
            .create_with_headers(
                &headers,
                params(json!({ "external_id": "recurring_123", "recharge": true })),
            )
            .await
            .unwrap();

        assert_eq!(payment.status.as_deref(), Some("ACTIVE"));
    }

    #[tokio::test]
    async fn edit_patches_only_supplied_fields() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/recurring_payments/rp_1"))
            .and(body_json(json!({ "amount": 150_000 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("ACTIVE")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let update = RecurringPayment {
            amount: Some(Decimal::from(150_000)),
            ..RecurringPayment::default()
        };

        client
            .recurring_payments()
            .edit("rp_1", to_params(&update).unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn get_sends_no_body_and_ignores_unknown_fields() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/recurring_payments/rp_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("ACTIVE")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let payment = client.recurring_payments().get("rp_1").await.unwrap();

        assert_eq!(payment.external_id.as_deref(), Some("recurring_123"));
        assert_eq!(payment.interval.as_deref(), Some("MONTH"));
        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_fails_with_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/recurring_payments/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error_code": "NOT_FOUND_ERROR",
                "message": "Could not find recurring payment"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .recurring_payments()
            .get("missing")
            .await
            .unwrap_err();

        assert_eq!(err.as_api().unwrap().error_code, "NOT_FOUND_ERROR");
    }

    #[tokio::test]
    async fn actions_post_to_bang_suffixed_paths() {
        let server = MockServer::start().await;

        for (action_path, status) in [
            ("/recurring_payments/rp_1/stop!", "STOPPED"),
            ("/recurring_payments/rp_1/pause!", "PAUSED"),
            ("/recurring_payments/rp_1/resume!", "ACTIVE"),
        ] {
            Mock::given(method("POST"))
                .and(path(action_path))
                .respond_with(ResponseTemplate::new(200).set_body_json(payment_json(status)))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        let payments = client.recurring_payments();

        let stopped = payments.stop("rp_1").await.unwrap();
        let paused = payments.pause("rp_1").await.unwrap();
        let resumed = payments.resume("rp_1").await.unwrap();

        assert_eq!(stopped.status.as_deref(), Some("STOPPED"));
        assert_eq!(paused.status.as_deref(), Some("PAUSED"));
        assert_eq!(resumed.status.as_deref(), Some("ACTIVE"));

        let requests = server.received_requests().await.unwrap();
        let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
        assert_eq!(
            paths,
            [
                "/recurring_payments/rp_1/stop!",
                "/recurring_payments/rp_1/pause!",
                "/recurring_payments/rp_1/resume!",
            ]
        );
    }

    #[tokio::test]
    async fn list_invoices_preserves_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/invoices"))
            .and(query_param("recurring_payment_id", "rp_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "inv_1", "recurring_payment_id": "rp_1", "status": "PAID" },
                { "id": "inv_2", "recurring_payment_id": "rp_1", "status": "SETTLED" },
                { "id": "inv_3", "recurring_payment_id": "rp_1", "status": "PENDING" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let invoices = client
            .recurring_payments()
            .list_invoices("rp_1")
            .await
            .unwrap();

        let ids: Vec<_> = invoices.iter().filter_map(|i| i.id.as_deref()).collect();
        assert_eq!(ids, ["inv_1", "inv_2", "inv_3"]);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("recurring_payment_id=rp_1"));
    }

    #[tokio::test]
    async fn list_invoices_accepts_empty_array() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/invoices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let invoices = client
            .recurring_payments()
            .list_invoices("rp_without_invoices")
            .await
            .unwrap();

        assert!(invoices.is_empty());
    }

    #[tokio::test]
    async fn dot_ids_never_reach_the_server() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let err = client.recurring_payments().stop("..").await.unwrap_err();
        assert!(matches!(err, XenditError::UrlParse { .. }));
        let err = client.recurring_payments().get("").await.unwrap_err();
        assert!(matches!(err, XenditError::UrlParse { .. }));

        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
