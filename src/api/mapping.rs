//! Declarative field mapping from API response records to typed orders.
//!
//! CoinGate's v1 and v2 schemas disagree on field names and payment-method
//! details, but both versions need the same conversion algorithm. Each order
//! type therefore declares a table of [`FieldSpec`]s — data, not code — and
//! [`map_record`] is the one shared routine that evaluates it. Adding a field
//! or a schema version changes a table, never the conversion logic.

use serde_json::{Map, Value};

use crate::api::error::ClientError;

/// How one wire field translates to an attribute of `T`.
///
/// `apply` performs the cast and the assignment to the destination attribute
/// in one step, returning `false` when the raw value cannot be cast.
pub struct FieldSpec<T> {
    /// Field name in CoinGate's wire schema.
    pub field: &'static str,
    /// Whether an inbound record must carry the field.
    pub required: bool,
    /// Validation predicate run on the raw value before casting.
    pub validate: Option<fn(&Value) -> bool>,
    /// Cast the raw value and assign it to the destination attribute.
    pub apply: fn(&mut T, &Value) -> bool,
}

/// Convert a raw response record into a `T` according to its field table.
///
/// For every mandatory field absent from `record` this fails with
/// [`ClientError::MissingField`]; a validator returning false or a failed
/// cast fails with [`ClientError::InvalidField`]. Fields of `record` that no
/// spec recognizes are silently ignored.
pub fn map_record<T: Default>(
    fields: &[FieldSpec<T>],
    record: &Map<String, Value>,
) -> Result<T, ClientError> {
    let mut out = T::default();
    for spec in fields {
        match record.get(spec.field) {
            None if spec.required => return Err(ClientError::MissingField(spec.field)),
            None => {}
            Some(value) => {
                if let Some(validate) = spec.validate {
                    if !validate(value) {
                        return Err(ClientError::InvalidField(spec.field));
                    }
                }
                if !(spec.apply)(&mut out, value) {
                    return Err(ClientError::InvalidField(spec.field));
                }
            }
        }
    }
    Ok(out)
}

/// Casting helpers used by the field tables.
pub mod cast {
    use chrono::{DateTime, Utc};
    use serde_json::Value;

    /// String attribute. Numbers are stringified, mirroring the permissive
    /// wire format (CoinGate occasionally returns numeric ids as numbers).
    pub fn string(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Float attribute. Accepts JSON numbers and numeric strings; the v2 API
    /// reports amounts as decimal strings.
    pub fn float(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Integer attribute.
    pub fn int(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// RFC 3339 timestamp attribute, normalized to UTC.
    pub fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
        let raw = value.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Validator: string value of at most `limit` characters.
    pub fn str_within(value: &Value, limit: usize) -> bool {
        value.as_str().is_some_and(|s| s.chars().count() <= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Probe {
        name: String,
        amount: f64,
        note: Option<String>,
        seen_at: Option<DateTime<Utc>>,
    }

    const PROBE_FIELDS: &[FieldSpec<Probe>] = &[
        FieldSpec {
            field: "name",
            required: true,
            validate: None,
            apply: |p: &mut Probe, v: &Value| cast::string(v).map(|x| p.name = x).is_some(),
        },
        FieldSpec {
            field: "amount",
            required: true,
            validate: None,
            apply: |p: &mut Probe, v: &Value| cast::float(v).map(|x| p.amount = x).is_some(),
        },
        FieldSpec {
            field: "note",
            required: false,
            validate: Some(|v: &Value| cast::str_within(v, 5)),
            apply: |p: &mut Probe, v: &Value| cast::string(v).map(|x| p.note = Some(x)).is_some(),
        },
        FieldSpec {
            field: "seen_at",
            required: false,
            validate: None,
            apply: |p: &mut Probe, v: &Value| {
                cast::timestamp(v).map(|x| p.seen_at = Some(x)).is_some()
            },
        },
    ];

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn maps_a_full_record() {
        let rec = record(json!({
            "name": "test",
            "amount": "10.5",
            "note": "hi",
            "seen_at": "2018-05-04T21:45:11+00:00",
        }));
        let probe = map_record(PROBE_FIELDS, &rec).unwrap();
        assert_eq!(probe.name, "test");
        assert_eq!(probe.amount, 10.5);
        assert_eq!(probe.note.as_deref(), Some("hi"));
        assert_eq!(
            probe.seen_at.unwrap(),
            "2018-05-04T21:45:11Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn missing_required_field_fails() {
        let rec = record(json!({"amount": 1.0}));
        let err = map_record(PROBE_FIELDS, &rec).unwrap_err();
        assert!(matches!(err, ClientError::MissingField("name")));
    }

    #[test]
    fn failed_validator_fails() {
        let rec = record(json!({"name": "x", "amount": 1.0, "note": "too long"}));
        let err = map_record(PROBE_FIELDS, &rec).unwrap_err();
        assert!(matches!(err, ClientError::InvalidField("note")));
    }

    #[test]
    fn failed_cast_fails() {
        let rec = record(json!({"name": "x", "amount": "not a number"}));
        let err = map_record(PROBE_FIELDS, &rec).unwrap_err();
        assert!(matches!(err, ClientError::InvalidField("amount")));
    }

    #[test]
    fn unrecognized_fields_are_ignored() {
        let rec = record(json!({"name": "x", "amount": 2, "brand_new_field": true}));
        let probe = map_record(PROBE_FIELDS, &rec).unwrap();
        assert_eq!(probe.amount, 2.0);
    }

    #[test]
    fn str_within_counts_characters_not_bytes() {
        assert!(cast::str_within(&json!("ééééé"), 5));
        assert!(!cast::str_within(&json!("éééééé"), 5));
        assert!(!cast::str_within(&json!(150), 5));
    }
}
