//! Payment order types for the v1 and v2 CoinGate schemas.
//!
//! The two schema versions are not interchangeable: v1 prices an order with
//! `price`/`currency`, v2 with `price_amount`/`price_currency`, and the
//! server-populated payment details differ. Each version declares its wire
//! schema as a [`FieldSpec`] table and shares the conversion routine in
//! [`mapping`](crate::api::mapping).
//!
//! An order is either *local* (`coingate_id` is `None`, possibly no
//! `receive_currency` yet) or *remote-backed* (`coingate_id` set along with
//! the other server-populated fields). Only a local order with a
//! `receive_currency` can be serialized into a creation request.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::api::error::ClientError;
use crate::api::mapping::{cast, map_record, FieldSpec};

/// Maximum length of an order title, in characters.
pub const MAX_TITLE_LEN: usize = 150;

/// Maximum length of an order description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A payment order under one of the CoinGate API schemas.
///
/// Implementations provide the declarative field table; conversion from a
/// response record and serialization to a creation payload are shared.
pub trait ApiOrder: Default + fmt::Display + 'static {
    /// Declarative wire-to-attribute mapping for this schema version.
    fn field_map() -> &'static [FieldSpec<Self>];

    /// Build an order from a decoded API response record.
    fn from_response_data(record: &Map<String, Value>) -> Result<Self, ClientError> {
        map_record(Self::field_map(), record)
    }

    /// Serialize the order into form fields for `POST /orders`.
    ///
    /// Only non-null submittable fields are included; server-assigned fields
    /// never are. Fails with [`ClientError::MissingReceiveCurrency`] when
    /// `receive_currency` is unset.
    fn to_request_data(&self) -> Result<Vec<(&'static str, String)>, ClientError>;
}

fn push_opt(form: &mut Vec<(&'static str, String)>, field: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        form.push((field, value.clone()));
    }
}

/// Format a price for the form payload. Whole amounts keep a decimal point
/// (`10.0`, not `10`), matching the payloads the API documents.
fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

// ============================================================================
// API v1
// ============================================================================

/// Payment order under the v1 schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct V1Order {
    /// Merchant-assigned order identifier. Immutable after creation.
    pub order_id: String,
    /// Price set by the merchant.
    pub price: f64,
    /// ISO 4217 code of the pricing currency.
    pub currency: String,
    /// ISO 4217 code of the payout currency. Required for submission.
    pub receive_currency: Option<String>,
    /// Order title, at most [`MAX_TITLE_LEN`] characters.
    pub title: Option<String>,
    /// Order description, at most [`MAX_DESCRIPTION_LEN`] characters.
    pub description: Option<String>,
    /// Merchant URL notified when the order status changes.
    pub callback_url: Option<String>,
    /// Merchant URL the buyer is sent to after cancelling.
    pub cancel_url: Option<String>,
    /// Merchant URL the buyer is sent to after paying.
    pub success_url: Option<String>,
    /// CoinGate-assigned id. `None` until the order exists remotely.
    pub coingate_id: Option<i64>,
    /// Order status as reported by the server.
    pub status: Option<String>,
    /// Server-side creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Time at which the order expires.
    pub expire_at: Option<DateTime<Utc>>,
    /// Invoice URL the buyer pays at.
    pub payment_url: Option<String>,
    /// Amount due in BTC.
    pub btc_amount: Option<f64>,
    /// Bitcoin address to pay to.
    pub bitcoin_address: Option<String>,
    /// `bitcoin:` payment URI.
    pub bitcoin_uri: Option<String>,
}

const V1_FIELDS: &[FieldSpec<V1Order>] = &[
    FieldSpec {
        field: "order_id",
        required: true,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| cast::string(v).map(|x| o.order_id = x).is_some(),
    },
    FieldSpec {
        field: "price",
        required: true,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| cast::float(v).map(|x| o.price = x).is_some(),
    },
    FieldSpec {
        field: "currency",
        required: true,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| cast::string(v).map(|x| o.currency = x).is_some(),
    },
    FieldSpec {
        field: "receive_currency",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::string(v).map(|x| o.receive_currency = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "title",
        required: false,
        validate: Some(|v: &Value| cast::str_within(v, MAX_TITLE_LEN)),
        apply: |o: &mut V1Order, v: &Value| cast::string(v).map(|x| o.title = Some(x)).is_some(),
    },
    FieldSpec {
        field: "description",
        required: false,
        validate: Some(|v: &Value| cast::str_within(v, MAX_DESCRIPTION_LEN)),
        apply: |o: &mut V1Order, v: &Value| {
            cast::string(v).map(|x| o.description = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "callback_url",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::string(v).map(|x| o.callback_url = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "cancel_url",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::string(v).map(|x| o.cancel_url = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "success_url",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::string(v).map(|x| o.success_url = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "id",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| cast::int(v).map(|x| o.coingate_id = Some(x)).is_some(),
    },
    FieldSpec {
        field: "status",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| cast::string(v).map(|x| o.status = Some(x)).is_some(),
    },
    FieldSpec {
        field: "created_at",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::timestamp(v).map(|x| o.created_at = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "expire_at",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::timestamp(v).map(|x| o.expire_at = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "payment_url",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::string(v).map(|x| o.payment_url = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "btc_amount",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::float(v).map(|x| o.btc_amount = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "bitcoin_address",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::string(v).map(|x| o.bitcoin_address = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "bitcoin_uri",
        required: false,
        validate: None,
        apply: |o: &mut V1Order, v: &Value| {
            cast::string(v).map(|x| o.bitcoin_uri = Some(x)).is_some()
        },
    },
];

impl V1Order {
    /// Construct a new local order with the fields order creation requires.
    ///
    /// Optional creation fields are added with the `with_*` methods.
    pub fn new(
        order_id: impl Into<String>,
        price: f64,
        currency: impl Into<String>,
        receive_currency: impl Into<String>,
    ) -> Self {
        V1Order {
            order_id: order_id.into(),
            price,
            currency: currency.into(),
            receive_currency: Some(receive_currency.into()),
            ..V1Order::default()
        }
    }

    /// Set the order title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the order description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status-change callback URL.
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Set the buyer-cancelled redirect URL.
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Set the successful-payment redirect URL.
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = Some(url.into());
        self
    }
}

impl ApiOrder for V1Order {
    fn field_map() -> &'static [FieldSpec<Self>] {
        V1_FIELDS
    }

    fn to_request_data(&self) -> Result<Vec<(&'static str, String)>, ClientError> {
        let receive_currency = self
            .receive_currency
            .as_ref()
            .ok_or(ClientError::MissingReceiveCurrency)?;

        let mut form = vec![
            ("order_id", self.order_id.clone()),
            ("price", format_amount(self.price)),
            ("currency", self.currency.clone()),
            ("receive_currency", receive_currency.clone()),
        ];
        push_opt(&mut form, "title", &self.title);
        push_opt(&mut form, "description", &self.description);
        push_opt(&mut form, "callback_url", &self.callback_url);
        push_opt(&mut form, "cancel_url", &self.cancel_url);
        push_opt(&mut form, "success_url", &self.success_url);
        Ok(form)
    }
}

impl fmt::Display for V1Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coingate_id {
            Some(id) => write!(f, "<CoinGate Order {} ({})>", self.order_id, id),
            None => write!(f, "<CoinGate Order {}>", self.order_id),
        }
    }
}

// ============================================================================
// API v2
// ============================================================================

/// Payment order under the v2 schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct V2Order {
    /// Merchant-assigned order identifier. Immutable after creation.
    pub order_id: String,
    /// Price set by the merchant.
    pub price_amount: f64,
    /// ISO 4217 code of the pricing currency.
    pub price_currency: String,
    /// ISO 4217 code of the payout currency. Required for submission.
    pub receive_currency: Option<String>,
    /// Order title, at most [`MAX_TITLE_LEN`] characters.
    pub title: Option<String>,
    /// Order description, at most [`MAX_DESCRIPTION_LEN`] characters.
    pub description: Option<String>,
    /// Merchant URL notified when the order status changes.
    pub callback_url: Option<String>,
    /// Merchant URL the buyer is sent to after cancelling.
    pub cancel_url: Option<String>,
    /// Merchant URL the buyer is sent to after paying.
    pub success_url: Option<String>,
    /// Merchant token echoed back in callbacks.
    pub token: Option<String>,
    /// CoinGate-assigned id. `None` until the order exists remotely.
    pub coingate_id: Option<i64>,
    /// Order status as reported by the server.
    pub status: Option<String>,
    /// Server-side creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Time at which the order expires.
    pub expire_at: Option<DateTime<Utc>>,
    /// Invoice URL the buyer pays at.
    pub payment_url: Option<String>,
    /// Address to pay to, in the buyer's chosen currency.
    pub payment_address: Option<String>,
    /// Currency the buyer pays with.
    pub pay_currency: Option<String>,
    /// Amount due in `pay_currency`.
    pub pay_amount: Option<f64>,
}

const V2_FIELDS: &[FieldSpec<V2Order>] = &[
    FieldSpec {
        field: "order_id",
        required: true,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| cast::string(v).map(|x| o.order_id = x).is_some(),
    },
    FieldSpec {
        field: "price_amount",
        required: true,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| cast::float(v).map(|x| o.price_amount = x).is_some(),
    },
    FieldSpec {
        field: "price_currency",
        required: true,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| cast::string(v).map(|x| o.price_currency = x).is_some(),
    },
    FieldSpec {
        field: "receive_currency",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::string(v).map(|x| o.receive_currency = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "title",
        required: false,
        validate: Some(|v: &Value| cast::str_within(v, MAX_TITLE_LEN)),
        apply: |o: &mut V2Order, v: &Value| cast::string(v).map(|x| o.title = Some(x)).is_some(),
    },
    FieldSpec {
        field: "description",
        required: false,
        validate: Some(|v: &Value| cast::str_within(v, MAX_DESCRIPTION_LEN)),
        apply: |o: &mut V2Order, v: &Value| {
            cast::string(v).map(|x| o.description = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "callback_url",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::string(v).map(|x| o.callback_url = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "cancel_url",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::string(v).map(|x| o.cancel_url = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "success_url",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::string(v).map(|x| o.success_url = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "token",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| cast::string(v).map(|x| o.token = Some(x)).is_some(),
    },
    FieldSpec {
        field: "id",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| cast::int(v).map(|x| o.coingate_id = Some(x)).is_some(),
    },
    FieldSpec {
        field: "status",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| cast::string(v).map(|x| o.status = Some(x)).is_some(),
    },
    FieldSpec {
        field: "created_at",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::timestamp(v).map(|x| o.created_at = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "expire_at",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::timestamp(v).map(|x| o.expire_at = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "payment_url",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::string(v).map(|x| o.payment_url = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "payment_address",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::string(v).map(|x| o.payment_address = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "pay_currency",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::string(v).map(|x| o.pay_currency = Some(x)).is_some()
        },
    },
    FieldSpec {
        field: "pay_amount",
        required: false,
        validate: None,
        apply: |o: &mut V2Order, v: &Value| {
            cast::float(v).map(|x| o.pay_amount = Some(x)).is_some()
        },
    },
];

impl V2Order {
    /// Construct a new local order with the fields order creation requires.
    ///
    /// Optional creation fields are added with the `with_*` methods.
    pub fn new(
        order_id: impl Into<String>,
        price_amount: f64,
        price_currency: impl Into<String>,
        receive_currency: impl Into<String>,
    ) -> Self {
        V2Order {
            order_id: order_id.into(),
            price_amount,
            price_currency: price_currency.into(),
            receive_currency: Some(receive_currency.into()),
            ..V2Order::default()
        }
    }

    /// Set the order title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the order description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status-change callback URL.
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Set the buyer-cancelled redirect URL.
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Set the successful-payment redirect URL.
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = Some(url.into());
        self
    }

    /// Set the merchant token echoed back in callbacks.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl ApiOrder for V2Order {
    fn field_map() -> &'static [FieldSpec<Self>] {
        V2_FIELDS
    }

    fn to_request_data(&self) -> Result<Vec<(&'static str, String)>, ClientError> {
        let receive_currency = self
            .receive_currency
            .as_ref()
            .ok_or(ClientError::MissingReceiveCurrency)?;

        let mut form = vec![
            ("order_id", self.order_id.clone()),
            ("price_amount", format_amount(self.price_amount)),
            ("price_currency", self.price_currency.clone()),
            ("receive_currency", receive_currency.clone()),
        ];
        push_opt(&mut form, "title", &self.title);
        push_opt(&mut form, "description", &self.description);
        push_opt(&mut form, "callback_url", &self.callback_url);
        push_opt(&mut form, "cancel_url", &self.cancel_url);
        push_opt(&mut form, "success_url", &self.success_url);
        push_opt(&mut form, "token", &self.token);
        Ok(form)
    }
}

impl fmt::Display for V2Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coingate_id {
            Some(id) => write!(f, "<CoinGate Order {} ({})>", self.order_id, id),
            None => write!(f, "<CoinGate Order {}>", self.order_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn v2_response() -> Map<String, Value> {
        record(json!({
            "id": 1587,
            "order_id": "invoice-1",
            "price_amount": "49.99",
            "price_currency": "USD",
            "receive_currency": "EUR",
            "status": "pending",
            "created_at": "2018-05-04T21:45:11+00:00",
            "expire_at": "2018-05-04T22:05:11+00:00",
            "payment_url": "https://coingate.com/invoice/abc",
            "payment_address": "2MzyF5xfYRAmHVPwG6YPRMY74dojhAVEtmm",
            "pay_currency": "BTC",
            "pay_amount": 0.006,
            "token": "cb-token",
        }))
    }

    #[test]
    fn v2_round_trips_response_fields() {
        let order = V2Order::from_response_data(&v2_response()).unwrap();
        assert_eq!(order.coingate_id, Some(1587));
        assert_eq!(order.order_id, "invoice-1");
        assert_eq!(order.price_amount, 49.99);
        assert_eq!(order.price_currency, "USD");
        assert_eq!(order.receive_currency.as_deref(), Some("EUR"));
        assert_eq!(order.status.as_deref(), Some("pending"));
        assert_eq!(order.pay_currency.as_deref(), Some("BTC"));
        assert_eq!(order.pay_amount, Some(0.006));
        assert!(order.created_at.unwrap() < order.expire_at.unwrap());
    }

    #[test]
    fn schema_versions_share_one_generic_decoder() {
        // The static field tables must stay usable behind a generic bound.
        fn decode<O: ApiOrder>(record: &Map<String, Value>) -> Result<O, ClientError> {
            O::from_response_data(record)
        }

        let order: V2Order = decode(&v2_response()).unwrap();
        assert_eq!(order.coingate_id, Some(1587));
    }

    #[test]
    fn v1_round_trips_response_fields() {
        let rec = record(json!({
            "id": 42,
            "order_id": "invoice-2",
            "price": 10.0,
            "currency": "USD",
            "status": "new",
            "btc_amount": "0.12345678",
            "bitcoin_address": "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2",
            "bitcoin_uri": "bitcoin:1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2?amount=0.12345678",
        }));
        let order = V1Order::from_response_data(&rec).unwrap();
        assert_eq!(order.coingate_id, Some(42));
        assert_eq!(order.price, 10.0);
        assert_eq!(order.btc_amount, Some(0.123_456_78));
        assert_eq!(
            order.bitcoin_address.as_deref(),
            Some("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2")
        );
    }

    #[test]
    fn v1_missing_price_is_rejected() {
        let rec = record(json!({"order_id": "invoice-3", "currency": "USD"}));
        let err = V1Order::from_response_data(&rec).unwrap_err();
        assert!(matches!(err, ClientError::MissingField("price")));
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut rec = v2_response();
        rec.insert("title".to_string(), json!("x".repeat(MAX_TITLE_LEN + 1)));
        let err = V2Order::from_response_data(&rec).unwrap_err();
        assert!(matches!(err, ClientError::InvalidField("title")));
    }

    #[test]
    fn title_at_the_limit_is_accepted() {
        let mut rec = v2_response();
        rec.insert("title".to_string(), json!("x".repeat(MAX_TITLE_LEN)));
        let order = V2Order::from_response_data(&rec).unwrap();
        assert_eq!(order.title.unwrap().len(), MAX_TITLE_LEN);
    }

    #[test]
    fn overlong_description_is_rejected() {
        let mut rec = v2_response();
        rec.insert(
            "description".to_string(),
            json!("x".repeat(MAX_DESCRIPTION_LEN + 1)),
        );
        let err = V2Order::from_response_data(&rec).unwrap_err();
        assert!(matches!(err, ClientError::InvalidField("description")));
    }

    #[test]
    fn request_data_requires_receive_currency() {
        let mut order = V2Order::new("invoice-1", 49.99, "USD", "EUR");
        order.receive_currency = None;
        let err = order.to_request_data().unwrap_err();
        assert!(matches!(err, ClientError::MissingReceiveCurrency));
    }

    #[test]
    fn request_data_contains_only_set_submittable_fields() {
        let order = V2Order::new("invoice-1", 49.99, "USD", "EUR")
            .with_title("Pro subscription")
            .with_token("cb-token");
        let form = order.to_request_data().unwrap();
        assert_eq!(
            form,
            vec![
                ("order_id", "invoice-1".to_string()),
                ("price_amount", "49.99".to_string()),
                ("price_currency", "USD".to_string()),
                ("receive_currency", "EUR".to_string()),
                ("title", "Pro subscription".to_string()),
                ("token", "cb-token".to_string()),
            ]
        );
    }

    #[test]
    fn request_data_never_contains_server_fields() {
        let order = V2Order {
            coingate_id: Some(99),
            status: Some("paid".to_string()),
            payment_url: Some("https://coingate.com/invoice/abc".to_string()),
            ..V2Order::new("invoice-1", 1.0, "USD", "EUR")
        };
        let form = order.to_request_data().unwrap();
        for (field, _) in &form {
            assert!(!matches!(*field, "id" | "status" | "payment_url"));
        }
    }

    #[test]
    fn v1_request_data_uses_v1_field_names() {
        let order = V1Order::new("invoice-1", 10.0, "USD", "BTC").with_description("two books");
        let form = order.to_request_data().unwrap();
        assert_eq!(
            form,
            vec![
                ("order_id", "invoice-1".to_string()),
                ("price", "10.0".to_string()),
                ("currency", "USD".to_string()),
                ("receive_currency", "BTC".to_string()),
                ("description", "two books".to_string()),
            ]
        );
    }

    #[test]
    fn whole_prices_keep_their_decimal_point() {
        let form = V2Order::new("invoice-1", 10.0, "USD", "EUR")
            .to_request_data()
            .unwrap();
        assert!(form.contains(&("price_amount", "10.0".to_string())));

        let form = V2Order::new("invoice-1", 49.99, "USD", "EUR")
            .to_request_data()
            .unwrap();
        assert!(form.contains(&("price_amount", "49.99".to_string())));
    }

    #[test]
    fn display_reflects_local_vs_remote() {
        let local = V2Order::new("invoice-1", 1.0, "USD", "EUR");
        assert_eq!(local.to_string(), "<CoinGate Order invoice-1>");

        let remote = V2Order {
            coingate_id: Some(1587),
            ..local
        };
        assert_eq!(remote.to_string(), "<CoinGate Order invoice-1 (1587)>");
    }
}
