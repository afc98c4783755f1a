//! Domain types for the CoinGate REST API.

pub mod order;
pub mod page;
pub mod rates;

pub use order::{ApiOrder, V1Order, V2Order, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
pub use page::{OrderPage, OrderSort};
pub use rates::{RateCategory, RateNode, TraderSide};
