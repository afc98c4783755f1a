//! Exchange rate types.
//!
//! The `/rates` family of endpoints returns a read-only nested mapping: the
//! full listing has top-level `merchant` and `trader` keys, `trader` is split
//! into `buy`/`sell`, and leaves are from-currency → to-currency → rate. The
//! category endpoints return the corresponding subtree, so [`RateNode`]
//! models the whole family uniformly.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Rate category of the `/rates` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateCategory {
    /// Settlement rates applied to merchant orders.
    Merchant,
    /// Trader buy/sell rates.
    Trader,
}

impl RateCategory {
    /// Path segment of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            RateCategory::Merchant => "merchant",
            RateCategory::Trader => "trader",
        }
    }
}

/// Subcategory of the trader rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraderSide {
    /// Rates for buying cryptocurrency.
    Buy,
    /// Rates for selling cryptocurrency.
    Sell,
}

impl TraderSide {
    /// Path segment of the subcategory.
    pub fn as_str(self) -> &'static str {
        match self {
            TraderSide::Buy => "buy",
            TraderSide::Sell => "sell",
        }
    }
}

/// Node of the decoded rate mapping: either a leaf exchange rate or a branch
/// keyed by category or currency code.
///
/// The API reports rates both as JSON numbers and as numeric strings; leaves
/// are normalized to `f64` while decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum RateNode {
    /// Exchange rate leaf.
    Rate(f64),
    /// Nested mapping.
    Branch(BTreeMap<String, RateNode>),
}

impl RateNode {
    pub(crate) fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, child)| Ok((key.clone(), RateNode::from_value(child)?)))
                .collect::<Result<BTreeMap<_, _>, String>>()
                .map(RateNode::Branch),
            Value::Number(n) => n
                .as_f64()
                .map(RateNode::Rate)
                .ok_or_else(|| format!("rate value {n} is not representable as f64")),
            Value::String(s) => s
                .trim()
                .parse()
                .map(RateNode::Rate)
                .map_err(|_| format!("invalid rate value `{s}`")),
            other => Err(format!("unexpected rate node: {other}")),
        }
    }

    /// Child node of a branch, by key.
    pub fn get(&self, key: &str) -> Option<&RateNode> {
        match self {
            RateNode::Branch(map) => map.get(key),
            RateNode::Rate(_) => None,
        }
    }

    /// Leaf rate value, if this node is a leaf.
    pub fn as_rate(&self) -> Option<f64> {
        match self {
            RateNode::Rate(rate) => Some(*rate),
            RateNode::Branch(_) => None,
        }
    }

    /// Leaf rate reached by walking `keys` from this node.
    pub fn rate(&self, keys: &[&str]) -> Option<f64> {
        let mut node = self;
        for key in keys {
            node = node.get(key)?;
        }
        node.as_rate()
    }
}

impl<'de> Deserialize<'de> for RateNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RateNode::from_value(&value).map_err(serde::de::Error::custom)
    }
}
