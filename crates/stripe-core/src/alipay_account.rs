//! # Alipay Account
//!
//! Snapshot of an Alipay payment source attached to a customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An Alipay account resource, as returned by
/// `GET /v1/customers/{customer}/sources/{id}`.
///
/// Immutable snapshot; no field is mutated after construction. Optional
/// wire fields map to `Option`, never to sentinels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlipayAccount {
    /// Object id (aliacc_...)
    pub id: String,

    /// Always "alipay_account"
    pub object: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    pub livemode: bool,

    /// Owning customer id, absent when detached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// Uniquely identifies the underlying account across customers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Amount this account is approved to pay, in the smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_currency: Option<String>,

    /// Whether the account can be reused for further payments
    pub reusable: bool,

    /// Whether the account has already been used for a payment
    pub used: bool,

    /// Masked Alipay login name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}
