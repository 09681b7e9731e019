//! # Discounts & Coupons
//!
//! A discount records a coupon applied to a customer or subscription.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A discount currently applied to a customer or subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    /// Always "discount"
    pub object: String,

    /// The coupon granting this discount
    pub coupon: Coupon,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// When the discount began
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,

    /// When the discount ends; absent for forever-duration coupons
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<DateTime<Utc>>,

    /// Subscription the discount is scoped to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

/// A coupon definition.
///
/// Exactly one of `amount_off`/`percent_off` is set by the API; this type
/// does not enforce that, mirroring the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,

    /// Always "coupon"
    pub object: String,

    /// Fixed discount, in the smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_off: Option<i64>,

    /// Percentage discount (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_off: Option<f64>,

    /// Currency of `amount_off`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    /// "once", "repeating" or "forever"
    pub duration: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_months: Option<i64>,

    pub livemode: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redemptions: Option<i64>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    /// Last date the coupon can be redeemed
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub redeem_by: Option<DateTime<Utc>>,

    pub times_redeemed: i64,

    /// Whether the coupon can still be redeemed
    pub valid: bool,
}

/// Confirmation returned when a customer discount is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedDiscount {
    /// Always "discount"
    pub object: String,

    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_discount_with_coupon() {
        let body = serde_json::json!({
            "object": "discount",
            "coupon": {
                "id": "25OFF",
                "object": "coupon",
                "percent_off": 25.0,
                "created": 1577836800,
                "duration": "repeating",
                "duration_in_months": 3,
                "livemode": false,
                "times_redeemed": 7,
                "valid": true
            },
            "customer": "cus_123",
            "start": 1577836800,
            "end": 1585699200
        });

        let discount: Discount = serde_json::from_value(body).unwrap();
        assert_eq!(discount.coupon.id, "25OFF");
        assert_eq!(discount.coupon.percent_off, Some(25.0));
        assert!(discount.coupon.amount_off.is_none());
        assert_eq!(discount.end.map(|e| e.timestamp()), Some(1585699200));
        assert!(discount.subscription.is_none());
    }

    #[test]
    fn test_forever_discount_has_no_end() {
        let body = serde_json::json!({
            "object": "discount",
            "coupon": {
                "id": "FREESHIP",
                "object": "coupon",
                "amount_off": 500,
                "currency": "usd",
                "created": 1577836800,
                "duration": "forever",
                "livemode": true,
                "times_redeemed": 0,
                "valid": true
            },
            "start": 1577836800
        });

        let discount: Discount = serde_json::from_value(body).unwrap();
        assert!(discount.end.is_none());
        assert_eq!(discount.coupon.amount_off, Some(500));
    }

    #[test]
    fn test_deleted_confirmation() {
        let body = serde_json::json!({"object": "discount", "deleted": true});
        let deleted: DeletedDiscount = serde_json::from_value(body).unwrap();
        assert!(deleted.deleted);
    }
}
