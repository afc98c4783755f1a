//! CoinGate REST API client implementation.
//!
//! [`CoinGateClient`] is generic over the [`ApiVersion`] it speaks: the two
//! versions share the whole request-dispatch path and differ only in
//! authentication and order schema. [`CoinGateV1Client`] and
//! [`CoinGateV2Client`] are the concrete variants.
//!
//! # Example
//!
//! ```rust,ignore
//! use coingate::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGateV2Client::new("my-app", "my-api-token", Environment::Sandbox)?;
//!
//!     let order = V2Order::new("invoice-1", 49.99, "USD", "EUR");
//!     let created = client.create_order(&order).await?;
//!     println!("created {created}");
//!
//!     let page = client.list_orders(50, 1, OrderSort::CreatedAtDesc).await?;
//!     println!("{} orders total", page.total_orders);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_stream::try_stream;
use futures_core::Stream;
use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::api::error::{ApiError, ClientError, ErrorResponse, Result};
use crate::api::types::{ApiOrder, OrderPage, OrderSort, RateCategory, RateNode, TraderSide};
use crate::auth::{ApiVersion, V1Credentials, V2Credentials};
use crate::network::Environment;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CoinGate client speaking the v1 API (HMAC-signed requests).
pub type CoinGateV1Client = CoinGateClient<V1Credentials>;

/// CoinGate client speaking the v2 API (token authentication).
pub type CoinGateV2Client = CoinGateClient<V2Credentials>;

/// Builder for configuring [`CoinGateClient`].
#[derive(Debug, Clone)]
pub struct CoinGateClientBuilder<V> {
    credentials: V,
    environment: Environment,
    base_url: Option<String>,
    timeout: Duration,
}

impl<V: ApiVersion> CoinGateClientBuilder<V> {
    /// Create a new builder with the given credentials and environment.
    pub fn new(credentials: V, environment: Environment) -> Self {
        CoinGateClientBuilder {
            credentials,
            environment,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Override the scheme-and-host part of the base URL, replacing the one
    /// derived from the environment. The `/v{n}` prefix is still appended.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CoinGateClient<V>> {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClientError::Initialization(e.to_string()))?;

        let host = self
            .base_url
            .unwrap_or_else(|| self.environment.base_url());
        let base_url = format!("{}/v{}", host.trim_end_matches('/'), V::VERSION);

        Ok(CoinGateClient {
            http,
            credentials: self.credentials,
            base_url,
        })
    }
}

/// CoinGate REST API client.
///
/// Each call issues exactly one request; there is no internal retry, caching,
/// or shared mutable state, so one instance can be cloned and used freely.
#[derive(Debug, Clone)]
pub struct CoinGateClient<V> {
    http: Client,
    credentials: V,
    base_url: String,
}

/// Wire shape of a `GET /orders` listing page, before order mapping.
#[derive(Debug, Deserialize)]
struct RawPage {
    orders: Vec<Value>,
    per_page: u32,
    current_page: u32,
    total_orders: u64,
    total_pages: u32,
}

impl CoinGateClient<V1Credentials> {
    /// Create a v1 client with default settings (30 s timeout).
    pub fn new(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        environment: Environment,
    ) -> Result<Self> {
        Self::builder(V1Credentials::new(app_id, api_key, api_secret), environment).build()
    }
}

impl CoinGateClient<V2Credentials> {
    /// Create a v2 client with default settings (30 s timeout).
    pub fn new(
        app_id: impl Into<String>,
        api_token: impl Into<String>,
        environment: Environment,
    ) -> Result<Self> {
        Self::builder(V2Credentials::new(app_id, api_token), environment).build()
    }
}

impl<V: ApiVersion> CoinGateClient<V> {
    /// Create a new client builder for custom configuration.
    pub fn builder(credentials: V, environment: Environment) -> CoinGateClientBuilder<V> {
        CoinGateClientBuilder::new(credentials, environment)
    }

    /// Versioned base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Issue one authenticated request and verify the status.
    ///
    /// Transport failures surface as [`ClientError::Connection`]; any status
    /// other than 200 is decoded into an [`ApiError`].
    async fn dispatch(
        &self,
        method: Method,
        route: &str,
        query: Option<&[(&str, String)]>,
        form: Option<&[(&str, String)]>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, route);
        let headers = self.credentials.auth_headers()?;

        tracing::debug!(%method, route, "dispatching CoinGate API request");

        let mut request = self.http.request(method, &url).headers(headers);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(form) = form {
            request = request.form(form);
        }

        let response = request.send().await.map_err(ClientError::Connection)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Self::decode_api_error(status, response).await.into());
        }
        Ok(response)
    }

    /// Decode a non-200 response body into an [`ApiError`].
    async fn decode_api_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("failed to read error response body: {e}");
                return ApiError::from_response(
                    status.as_u16(),
                    ErrorResponse::from_text(format!("HTTP {status} (body unreadable: {e})")),
                );
            }
        };
        let decoded = serde_json::from_str::<ErrorResponse>(&text)
            .unwrap_or_else(|_| ErrorResponse::from_text(text));
        ApiError::from_response(status.as_u16(), decoded)
    }

    async fn request_json(
        &self,
        method: Method,
        route: &str,
        query: Option<&[(&str, String)]>,
        form: Option<&[(&str, String)]>,
    ) -> Result<Value> {
        let response = self.dispatch(method, route, query, form).await?;
        let text = response.text().await.map_err(ClientError::Connection)?;
        Ok(serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))?)
    }

    async fn request_text(&self, method: Method, route: &str) -> Result<String> {
        let response = self.dispatch(method, route, None, None).await?;
        Ok(response.text().await.map_err(ClientError::Connection)?)
    }

    /// Map one decoded response value into an order of this version.
    fn map_order(value: &Value) -> Result<V::Order> {
        let record = value
            .as_object()
            .ok_or_else(|| ClientError::Decode("expected a JSON object for an order".to_string()))?;
        Ok(V::Order::from_response_data(record)?)
    }

    // =========================================================================
    // Order endpoints
    // =========================================================================

    /// Create a payment order.
    ///
    /// Serializes `order` (which must have a `receive_currency`), posts it to
    /// `POST /orders`, and maps the response back into an order carrying the
    /// server-assigned fields.
    pub async fn create_order(&self, order: &V::Order) -> Result<V::Order> {
        let form = order.to_request_data()?;
        let response = self
            .request_json(Method::POST, "/orders", None, Some(&form))
            .await?;
        Self::map_order(&response)
    }

    /// Fetch a single order by its CoinGate-assigned id.
    pub async fn get_order(&self, coingate_id: i64) -> Result<V::Order> {
        let route = format!("/orders/{coingate_id}");
        let response = self.request_json(Method::GET, &route, None, None).await?;
        Self::map_order(&response)
    }

    /// Fetch one page of the order listing.
    pub async fn list_orders(
        &self,
        per_page: u32,
        page: u32,
        sort_by: OrderSort,
    ) -> Result<OrderPage<V::Order>> {
        let query = [
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
            ("sort_by", sort_by.as_str().to_string()),
        ];
        let response = self
            .request_json(Method::GET, "/orders", Some(&query), None)
            .await?;
        let raw: RawPage = serde_json::from_value(response)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let orders = raw
            .orders
            .iter()
            .map(Self::map_order)
            .collect::<Result<Vec<_>>>()?;
        Ok(OrderPage {
            orders,
            per_page: raw.per_page,
            current_page: raw.current_page,
            total_orders: raw.total_orders,
            total_pages: raw.total_pages,
        })
    }

    /// Walk the whole order listing lazily, page by page.
    ///
    /// The stream starts at page 1 and fetches the next page only once the
    /// previous one has been consumed, stopping after the last page the
    /// server reports. Each call starts a fresh iteration; dropping the
    /// stream cancels it. This is plain offset pagination: orders created or
    /// deleted while iterating may be skipped or seen twice.
    pub fn iterate_all_orders(
        &self,
        per_page: u32,
        sort_by: OrderSort,
    ) -> impl Stream<Item = Result<V::Order>> + '_ {
        try_stream! {
            let mut page = 1u32;
            loop {
                let response = self.list_orders(per_page, page, sort_by).await?;
                let total_pages = response.total_pages;
                tracing::debug!(page, total_pages, count = response.orders.len(), "fetched order page");
                for order in response.orders {
                    yield order;
                }
                if page >= total_pages {
                    break;
                }
                page += 1;
            }
        }
    }

    // =========================================================================
    // Rate endpoints
    // =========================================================================

    /// Fetch the exchange rate listing, optionally narrowed to a category or
    /// a trader subcategory.
    ///
    /// Only the [`Trader`](RateCategory::Trader) category supports a
    /// subcategory; any other combination fails client-side before a request
    /// is sent.
    pub async fn get_rates(
        &self,
        category: Option<RateCategory>,
        subcategory: Option<TraderSide>,
    ) -> Result<RateNode> {
        if subcategory.is_some() && category != Some(RateCategory::Trader) {
            return Err(ClientError::InvalidRateQuery(
                "only the \"trader\" category supports a subcategory".to_string(),
            )
            .into());
        }

        let mut route = String::from("/rates");
        if let Some(category) = category {
            route.push('/');
            route.push_str(category.as_str());
        }
        if let Some(side) = subcategory {
            route.push('/');
            route.push_str(side.as_str());
        }

        let response = self.request_json(Method::GET, &route, None, None).await?;
        Ok(RateNode::from_value(&response).map_err(ClientError::Decode)?)
    }

    /// Fetch the merchant exchange rate for a single currency pair.
    ///
    /// The endpoint answers with a bare numeric body; an empty body means
    /// the pair is not supported and fails with
    /// [`ClientError::NoRateAvailable`].
    pub async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        let route = format!(
            "/rates/merchant/{}/{}",
            urlencoding::encode(from),
            urlencoding::encode(to)
        );
        let body = self.request_text(Method::GET, &route).await?;
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(ClientError::NoRateAvailable(from.to_string(), to.to_string()).into());
        }
        Ok(trimmed
            .parse()
            .map_err(|_| ClientError::Decode(format!("invalid rate body `{trimmed}`")))?)
    }
}
