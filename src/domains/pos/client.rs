//! Authenticated HTTP client for the TouchBistro cloud API.
//!
//! One typed method per tool; all of them funnel through [`TouchBistroClient::execute`],
//! which attaches the bearer token, the venue-scoping header, and JSON
//! content/accept headers, then normalizes the HTTP outcome. A single attempt
//! per call: no retries, no backoff, no timeout beyond reqwest defaults.

use reqwest::{Method, header};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::core::config::PosConfig;
use crate::domains::tools::definitions::{
    CreateReservationParams, GetSalesReportParams, ListMenuItemsParams, ListOrdersParams,
    ListReservationsParams, ListStaffParams,
};

use super::error::PosError;

/// Client for the TouchBistro cloud API.
///
/// Holds the read-only credential/venue/base-URL triple for the process
/// lifetime. Cheap to share behind an `Arc`; `reqwest::Client` pools
/// connections internally.
pub struct TouchBistroClient {
    http: reqwest::Client,
    api_key: String,
    venue_id: String,
    base_url: String,
}

impl TouchBistroClient {
    /// Create a new client from validated configuration.
    ///
    /// Credential presence is enforced at config load, not here.
    pub fn new(config: &PosConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            venue_id: config.venue_id.clone(),
            base_url: config.base_url.clone(),
        }
    }

    // ========================================================================
    // Request primitives
    // ========================================================================

    /// Build a request with the default header set.
    fn prepare(&self, method: Method, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header("X-Venue-Id", &self.venue_id)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
    }

    /// Issue a prepared request and normalize the outcome.
    ///
    /// Non-success statuses become [`PosError::Upstream`] with the raw body
    /// text preserved; success bodies must parse as JSON.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, PosError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PosError::upstream(status, body));
        }

        serde_json::from_str(&body).map_err(PosError::Parse)
    }

    /// GET an endpoint.
    async fn get(&self, endpoint: &str) -> Result<Value, PosError> {
        self.execute(self.prepare(Method::GET, endpoint)).await
    }

    /// GET an endpoint with query parameters taken from `params`.
    async fn get_with_query(
        &self,
        endpoint: &str,
        params: &impl Serialize,
    ) -> Result<Value, PosError> {
        self.get(&query_path(endpoint, params)?).await
    }

    /// POST a JSON body to an endpoint.
    async fn post(&self, endpoint: &str, body: &impl Serialize) -> Result<Value, PosError> {
        self.execute(self.prepare(Method::POST, endpoint).json(body))
            .await
    }

    // ========================================================================
    // Operations (one per tool)
    // ========================================================================

    /// List orders, optionally filtered by status, type, and date range.
    pub async fn list_orders(&self, params: &ListOrdersParams) -> Result<Value, PosError> {
        self.get_with_query("/orders", params).await
    }

    /// Fetch a single order by identifier.
    pub async fn get_order(&self, id: &str) -> Result<Value, PosError> {
        self.get(&format!("/orders/{}", id)).await
    }

    /// List menu items, optionally filtered by category and active flag.
    pub async fn list_menu_items(&self, params: &ListMenuItemsParams) -> Result<Value, PosError> {
        self.get_with_query("/menu/items", params).await
    }

    /// List reservations, optionally filtered by date, status, and party size.
    pub async fn list_reservations(
        &self,
        params: &ListReservationsParams,
    ) -> Result<Value, PosError> {
        self.get_with_query("/reservations", params).await
    }

    /// Create a reservation. Unset optional fields are absent from the body,
    /// never sent as null.
    pub async fn create_reservation(
        &self,
        params: &CreateReservationParams,
    ) -> Result<Value, PosError> {
        self.post("/reservations", params).await
    }

    /// List staff members, optionally filtered by role and active flag.
    pub async fn list_staff(&self, params: &ListStaffParams) -> Result<Value, PosError> {
        self.get_with_query("/staff", params).await
    }

    /// Fetch a sales report for a date range.
    pub async fn get_sales_report(
        &self,
        params: &GetSalesReportParams,
    ) -> Result<Value, PosError> {
        self.get_with_query("/reports/sales", params).await
    }
}

/// Append the encoded query string to an endpoint path.
///
/// Only parameters that are present are emitted, in struct field order;
/// numbers and booleans are stringified. An empty parameter set yields the
/// bare path so the remote service applies its own defaults.
fn query_path(endpoint: &str, params: &impl Serialize) -> Result<String, PosError> {
    let query = serde_urlencoded::to_string(params)?;
    if query.is_empty() {
        Ok(endpoint.to_string())
    } else {
        Ok(format!("{}?{}", endpoint, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::OrderStatus;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn test_client(base_url: String) -> TouchBistroClient {
        TouchBistroClient::new(&PosConfig {
            api_key: "test-key".to_string(),
            venue_id: "venue-1".to_string(),
            base_url,
        })
    }

    /// A request is complete once the headers have arrived and the body, if
    /// a Content-Length is declared, is fully buffered.
    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text
            .lines()
            .take_while(|line| !line.is_empty())
            .find_map(|line| {
                let lower = line.to_lowercase();
                lower
                    .strip_prefix("content-length:")
                    .and_then(|v| v.trim().parse::<usize>().ok())
            })
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }

    /// Serve exactly one canned HTTP response, returning the raw request text.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }
            let request = String::from_utf8_lossy(&buf).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            request
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_success_parses_json_and_sends_headers() {
        let (base_url, handle) = serve_once("200 OK", r#"{"orders":[],"total":0}"#).await;
        let client = test_client(base_url);

        let value = client.get("/orders").await.unwrap();
        assert_eq!(value, serde_json::json!({"orders": [], "total": 0}));

        let request = handle.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /orders http/1.1"));
        assert!(request.contains("authorization: bearer test-key"));
        assert!(request.contains("x-venue-id: venue-1"));
        assert!(request.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let (base_url, _handle) = serve_once("404 Not Found", "Not Found").await;
        let client = test_client(base_url);

        let err = client.get_order("missing-order").await.unwrap_err();
        match &err {
            PosError::Upstream { status, body, .. } => {
                assert_eq!(*status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("expected Upstream error, got {:?}", other),
        }
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not Found"));
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_parse_error() {
        let (base_url, _handle) = serve_once("200 OK", "this is not json").await;
        let client = test_client(base_url);

        let err = client.get("/orders").await.unwrap_err();
        assert!(matches!(err, PosError::Parse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = test_client(format!("http://{}", addr));
        let err = client.get("/orders").await.unwrap_err();
        assert!(matches!(err, PosError::Transport(_)));
    }

    #[tokio::test]
    async fn test_create_reservation_posts_exact_body() {
        let (base_url, handle) = serve_once("201 Created", r#"{"id":"res-1"}"#).await;
        let client = test_client(base_url);

        let params: CreateReservationParams = serde_json::from_value(serde_json::json!({
            "customerName": "Jane Doe",
            "partySize": 4,
            "date": "2024-06-01",
            "time": "19:00"
        }))
        .unwrap();
        client.create_reservation(&params).await.unwrap();

        let request = handle.await.unwrap();
        assert!(request.starts_with("POST /reservations HTTP/1.1"));

        let body = request.split("\r\n\r\n").nth(1).unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(body).unwrap(),
            serde_json::json!({
                "customerName": "Jane Doe",
                "partySize": 4,
                "date": "2024-06-01",
                "time": "19:00"
            })
        );
    }

    #[tokio::test]
    async fn test_get_order_path() {
        let (base_url, handle) = serve_once("200 OK", r#"{"id":"ord-7"}"#).await;
        let client = test_client(base_url);

        client.get_order("ord-7").await.unwrap();
        let request = handle.await.unwrap();
        assert!(request.starts_with("GET /orders/ord-7 HTTP/1.1"));
    }

    #[test]
    fn test_query_path_preserves_declared_order() {
        let params = ListOrdersParams {
            page: None,
            page_size: None,
            status: Some(OrderStatus::Open),
            order_type: None,
            start_date: Some("2024-01-01".to_string()),
            end_date: None,
        };
        assert_eq!(
            query_path("/orders", &params).unwrap(),
            "/orders?status=open&startDate=2024-01-01"
        );
    }

    #[test]
    fn test_query_path_empty_params_means_bare_path() {
        let params = ListOrdersParams {
            page: None,
            page_size: None,
            status: None,
            order_type: None,
            start_date: None,
            end_date: None,
        };
        assert_eq!(query_path("/orders", &params).unwrap(), "/orders");
    }

    #[test]
    fn test_query_path_stringifies_numbers() {
        let params = ListOrdersParams {
            page: Some(2),
            page_size: Some(50),
            status: None,
            order_type: None,
            start_date: None,
            end_date: None,
        };
        assert_eq!(
            query_path("/orders", &params).unwrap(),
            "/orders?page=2&pageSize=50"
        );
    }
}
