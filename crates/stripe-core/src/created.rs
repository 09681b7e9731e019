//! # Created Filter
//!
//! The polymorphic `created` filter accepted by Stripe list endpoints.
//!
//! On the wire this parameter is either a bare timestamp (exact match) or an
//! object of optional range bounds:
//!
//! ```text
//! created=1577836800
//! created[gt]=1577836800&created[lte]=1580515200
//! ```
//!
//! Decoding dispatches on the JSON value's kind: an object is always a
//! range, a string or number is always a timestamp. Dispatch peeks the kind
//! first and commits to one variant parser; it never attempts one variant
//! and falls back to the other, so a malformed bound inside an object
//! surfaces as a field-level error rather than a misleading top-level one.

use crate::error::DecodeError;
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Tag reported when the filter value matches neither variant shape.
const UNKNOWN_INPUT_TAG: &str = "UnknownCreatedInput";

/// A `created` filter value for list-style API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedInput {
    /// Match objects created at exactly this point in time.
    Timestamp(DateTime<Utc>),
    /// Match objects created within the given bounds.
    Range(CreatedRange),
}

/// Date bounds for the range form of the filter.
///
/// Every bound is optional; absence means unbounded on that side. A range
/// with no bounds at all is valid and matches everything. No consistency
/// check is made between bounds (e.g. `gt < lt`); the API applies them
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreatedRange {
    /// Exclusive lower bound
    pub gt: Option<DateTime<Utc>>,
    /// Inclusive lower bound
    pub gte: Option<DateTime<Utc>>,
    /// Exclusive upper bound
    pub lt: Option<DateTime<Utc>>,
    /// Inclusive upper bound
    pub lte: Option<DateTime<Utc>>,
}

impl CreatedRange {
    /// Range with no bounds set
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builder: set the exclusive lower bound
    pub fn gt(mut self, dt: DateTime<Utc>) -> Self {
        self.gt = Some(dt);
        self
    }

    /// Builder: set the inclusive lower bound
    pub fn gte(mut self, dt: DateTime<Utc>) -> Self {
        self.gte = Some(dt);
        self
    }

    /// Builder: set the exclusive upper bound
    pub fn lt(mut self, dt: DateTime<Utc>) -> Self {
        self.lt = Some(dt);
        self
    }

    /// Builder: set the inclusive upper bound
    pub fn lte(mut self, dt: DateTime<Utc>) -> Self {
        self.lte = Some(dt);
        self
    }

    /// True if no bound is set
    pub fn is_unbounded(&self) -> bool {
        self.gt.is_none() && self.gte.is_none() && self.lt.is_none() && self.lte.is_none()
    }

    fn bound_pairs(&self) -> [(&'static str, Option<DateTime<Utc>>); 4] {
        [
            ("gt", self.gt),
            ("gte", self.gte),
            ("lt", self.lt),
            ("lte", self.lte),
        ]
    }
}

impl CreatedInput {
    /// Exact-match filter at the given instant
    pub fn at(dt: DateTime<Utc>) -> Self {
        CreatedInput::Timestamp(dt)
    }

    /// Range filter with the given bounds
    pub fn range(bounds: CreatedRange) -> Self {
        CreatedInput::Range(bounds)
    }

    /// Decode a wire value into a filter, dispatching on its JSON kind.
    ///
    /// Objects decode as [`CreatedInput::Range`] (all bounds optional,
    /// `null` counts as absent); strings and numbers decode as
    /// [`CreatedInput::Timestamp`] via the shared timestamp codec. Any other
    /// kind, or a scalar the codec rejects, is a
    /// [`DecodeError::ShapeMismatch`] tagged `UnknownCreatedInput`. A bound
    /// that is present but not a valid timestamp is a
    /// [`DecodeError::FieldType`] naming the bound.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(CreatedInput::Range(CreatedRange {
                gt: decode_bound(map, "gt")?,
                gte: decode_bound(map, "gte")?,
                lt: decode_bound(map, "lt")?,
                lte: decode_bound(map, "lte")?,
            })),
            Value::String(_) | Value::Number(_) => timestamp::parse(value)
                .map(CreatedInput::Timestamp)
                .map_err(|_| {
                    DecodeError::shape_mismatch(UNKNOWN_INPUT_TAG, timestamp::kind_of(value))
                }),
            other => Err(DecodeError::shape_mismatch(
                UNKNOWN_INPUT_TAG,
                timestamp::kind_of(other),
            )),
        }
    }

    /// Encode the filter back to its wire shape.
    ///
    /// A timestamp encodes as the bare epoch-seconds number, not wrapped in
    /// an object. A range encodes as an object carrying only the bounds that
    /// are set; absent bounds are omitted rather than emitted as `null`.
    pub fn to_value(&self) -> Value {
        match self {
            CreatedInput::Timestamp(dt) => timestamp::to_value(*dt),
            CreatedInput::Range(bounds) => {
                let mut map = Map::new();
                for (key, bound) in bounds.bound_pairs() {
                    if let Some(dt) = bound {
                        map.insert(key.to_string(), timestamp::to_value(dt));
                    }
                }
                Value::Object(map)
            }
        }
    }

    /// Render the filter as query parameters under the given key, using
    /// Stripe's bracket syntax for the range form:
    /// `created=...` or `created[gt]=...`.
    pub fn to_query_params(&self, key: &str) -> Vec<(String, String)> {
        match self {
            CreatedInput::Timestamp(dt) => {
                vec![(key.to_string(), timestamp::to_query_string(*dt))]
            }
            CreatedInput::Range(bounds) => bounds
                .bound_pairs()
                .into_iter()
                .filter_map(|(bound_key, bound)| {
                    bound.map(|dt| {
                        (
                            format!("{}[{}]", key, bound_key),
                            timestamp::to_query_string(dt),
                        )
                    })
                })
                .collect(),
        }
    }
}

fn decode_bound(
    map: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<DateTime<Utc>>, DecodeError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => timestamp::parse(value)
            .map(Some)
            .map_err(|detail| DecodeError::field_type(key, detail)),
    }
}

impl From<DateTime<Utc>> for CreatedInput {
    fn from(dt: DateTime<Utc>) -> Self {
        CreatedInput::Timestamp(dt)
    }
}

impl From<CreatedRange> for CreatedInput {
    fn from(bounds: CreatedRange) -> Self {
        CreatedInput::Range(bounds)
    }
}

impl Serialize for CreatedInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CreatedInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        CreatedInput::from_value(&value).map_err(de::Error::custom)
    }
}
