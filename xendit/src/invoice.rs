//! Invoice operations.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`create`](Invoices::create) | `POST /v2/invoices` |
//! | [`get`](Invoices::get) | `GET /v2/invoices/{id}` |
//! | [`list`](Invoices::list) | `GET /v2/invoices?{params}` |
//! | [`expire`](Invoices::expire) | `POST /invoices/{id}/expire!` |

use http::{HeaderMap, Method};
use serde_json::Value;
use url::Url;
use xendit_proto::{CreateInvoice, Invoice, Params, to_params};

use crate::client::XenditClient;
use crate::error::XenditError;

/// Path of the invoice collection.
pub(crate) const INVOICES_PATH: &[&str] = &["v2", "invoices"];

/// Invoice endpoints, borrowed from a [`XenditClient`].
#[derive(Debug, Clone, Copy)]
pub struct Invoices<'a> {
    client: &'a XenditClient,
}

impl<'a> Invoices<'a> {
    pub(crate) const fn new(client: &'a XenditClient) -> Self {
        Self { client }
    }

    /// Creates an invoice from its required fields.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn create(&self, request: &CreateInvoice) -> Result<Invoice, XenditError> {
        self.create_with_params(to_params(request)?).await
    }

    /// Creates an invoice from a caller-assembled parameter map.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn create_with_params(&self, params: Params) -> Result<Invoice, XenditError> {
        self.create_with_headers(&HeaderMap::new(), params).await
    }

    /// Creates an invoice, sending extra headers such as `for-user-id`.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn create_with_headers(
        &self,
        headers: &HeaderMap,
        params: Params,
    ) -> Result<Invoice, XenditError> {
        let url = self.client.endpoint(INVOICES_PATH)?;
        self.client
            .send(Method::POST, url, Some(headers), Some(&params))
            .await
    }

    /// Fetches an invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn get(&self, id: &str) -> Result<Invoice, XenditError> {
        let url = self.client.endpoint(&["v2", "invoices", id])?;
        self.client.request(Method::GET, url, None).await
    }

    /// Lists invoices matching the given filters, e.g. `limit`, `statuses`
    /// or `last_invoice_id`.
    ///
    /// Each parameter becomes one query pair: strings are sent verbatim,
    /// other values as their JSON text, and nulls are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn list(&self, params: &Params) -> Result<Vec<Invoice>, XenditError> {
        let mut url = self.client.endpoint(INVOICES_PATH)?;
        append_query(&mut url, params);
        self.client.request(Method::GET, url, None).await
    }

    /// Expires a pending invoice so it can no longer be paid.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn expire(&self, id: &str) -> Result<Invoice, XenditError> {
        let url = self.client.endpoint(&["invoices", id, "expire!"])?;
        self.client.request(Method::POST, url, None).await
    }
}

fn append_query(url: &mut Url, params: &Params) {
    let mut pairs = params.iter().filter(|(_, value)| !value.is_null()).peekable();
    if pairs.peek().is_none() {
        return;
    }
    let mut query = url.query_pairs_mut();
    for (key, value) in pairs {
        match value {
            Value::String(text) => query.append_pair(key, text),
            other => query.append_pair(key, &other.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::XenditConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use xendit_proto::Decimal;

    fn client_for(server: &MockServer) -> XenditClient {
        XenditClient::new(XenditConfig::new("xnd_development_key").with_base_url(server.uri()))
            .unwrap()
    }

    fn invoice_json(id: &str, status: &str) -> Value {
        json!({
            "id": id,
            "external_id": "invoice_123",
            "status": status,
            "amount": 50_000,
            "payer_email": "payer@example.com",
            "description": "Order #123",
            "invoice_url": format!("https://invoice.xendit.co/web/invoices/{id}"),
            "available_ewallets": [{ "ewallet_type": "OVO" }]
        })
    }

    #[tokio::test]
    async fn create_posts_required_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/invoices"))
            .and(header("for-user-id", "sub_1"))
            .and(body_json(json!({
                "external_id": "invoice_123",
                "amount": 50_000,
                "payer_email": "payer@example.com",
                "description": "Order #123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(invoice_json("inv_1", "PENDING")))
            .expect(1)
            .mount(&server)
            .await;

        let client = XenditClient::new(
            XenditConfig::new("xnd_development_key")
                .with_base_url(server.uri())
                .with_header(crate::constants::FOR_USER_ID_HEADER, "sub_1"),
        )
        .unwrap();

        let invoice = client
            .invoices()
            .create(&CreateInvoice {
                external_id: "invoice_123".to_owned(),
                amount: Decimal::from(50_000),
                payer_email: "payer@example.com".to_owned(),
                description: "Order #123".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(invoice.id.as_deref(), Some("inv_1"));
        assert_eq!(invoice.status.as_deref(), Some("PENDING"));
    }

    #[tokio::test]
    async fn get_fetches_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/invoices/inv_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(invoice_json("inv_1", "PAID")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let invoice = client.invoices().get("inv_1").await.unwrap();

        assert_eq!(invoice.status.as_deref(), Some("PAID"));
        assert_eq!(invoice.amount, Some(Decimal::from(50_000)));
    }

    #[tokio::test]
    async fn list_encodes_filters_into_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/invoices"))
            .and(query_param("limit", "2"))
            .and(query_param("statuses", r#"["SETTLED","EXPIRED"]"#))
            .and(query_param("last_invoice_id", "inv_0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                invoice_json("inv_1", "SETTLED"),
                invoice_json("inv_2", "EXPIRED")
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let Value::Object(filters) = json!({
            "limit": 2,
            "statuses": r#"["SETTLED","EXPIRED"]"#,
            "last_invoice_id": "inv_0",
            "client_types": null
        }) else {
            unreachable!()
        };

        let invoices = client.invoices().list(&filters).await.unwrap();

        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[1].id.as_deref(), Some("inv_2"));
        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].url.query().unwrap().contains("client_types"));
    }

    #[tokio::test]
    async fn list_without_filters_has_no_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/invoices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let invoices = client.invoices().list(&Params::new()).await.unwrap();

        assert!(invoices.is_empty());
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn expire_posts_to_legacy_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/invoices/inv_1/expire!"))
            .respond_with(ResponseTemplate::new(200).set_body_json(invoice_json("inv_1", "EXPIRED")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let invoice = client.invoices().expire("inv_1").await.unwrap();

        assert_eq!(invoice.status.as_deref(), Some("EXPIRED"));
    }
}
