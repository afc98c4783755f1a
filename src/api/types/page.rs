//! Order listing pages and sort tokens.

use std::fmt;
use std::str::FromStr;

use crate::api::error::ClientError;

/// One page of an order listing.
///
/// Pages are independent requests; nothing is cached between them.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPage<O> {
    /// Orders on this page, in the requested sort order.
    pub orders: Vec<O>,
    /// Page size echoed by the server.
    pub per_page: u32,
    /// 1-based index of this page.
    pub current_page: u32,
    /// Total number of orders across all pages.
    pub total_orders: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

/// Sort tokens accepted by the order listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderSort {
    /// Oldest orders first.
    CreatedAtAsc,
    /// Newest orders first.
    #[default]
    CreatedAtDesc,
    /// Ascending by merchant order id.
    OrderIdAsc,
    /// Descending by merchant order id.
    OrderIdDesc,
}

impl OrderSort {
    /// Wire token sent in the `sort_by` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSort::CreatedAtAsc => "created_at_asc",
            OrderSort::CreatedAtDesc => "created_at_desc",
            OrderSort::OrderIdAsc => "order_id_asc",
            OrderSort::OrderIdDesc => "order_id_desc",
        }
    }
}

impl fmt::Display for OrderSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSort {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at_asc" => Ok(OrderSort::CreatedAtAsc),
            "created_at_desc" => Ok(OrderSort::CreatedAtDesc),
            "order_id_asc" => Ok(OrderSort::OrderIdAsc),
            "order_id_desc" => Ok(OrderSort::OrderIdDesc),
            other => Err(ClientError::InvalidSortToken(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for sort in [
            OrderSort::CreatedAtAsc,
            OrderSort::CreatedAtDesc,
            OrderSort::OrderIdAsc,
            OrderSort::OrderIdDesc,
        ] {
            assert_eq!(sort.as_str().parse::<OrderSort>().unwrap(), sort);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "updated_at_desc".parse::<OrderSort>().unwrap_err();
        assert!(matches!(err, ClientError::InvalidSortToken(ref t) if t == "updated_at_desc"));
    }

    #[test]
    fn defaults_to_newest_first() {
        assert_eq!(OrderSort::default(), OrderSort::CreatedAtDesc);
    }
}
