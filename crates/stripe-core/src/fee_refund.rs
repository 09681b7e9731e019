//! # Application Fee Refund
//!
//! Refund of an application fee collected on a connected account's charge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An application fee refund, as returned by the
/// `/v1/application_fees/{fee}/refunds` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationFeeRefund {
    /// Object id (fr_...)
    pub id: String,

    /// Always "fee_refund"
    pub object: String,

    /// Amount refunded, in the smallest currency unit
    pub amount: i64,

    /// Balance transaction recording the funds movement, absent until settled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_transaction: Option<String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    /// Three-letter ISO currency code
    pub currency: String,

    /// Id of the application fee that was refunded
    pub fee: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wire_record() {
        let body = serde_json::json!({
            "id": "fr_123",
            "object": "fee_refund",
            "amount": 150,
            "balance_transaction": "txn_456",
            "created": 1577836800,
            "currency": "usd",
            "fee": "fee_789",
            "metadata": {}
        });

        let refund: ApplicationFeeRefund = serde_json::from_value(body).unwrap();
        assert_eq!(refund.amount, 150);
        assert_eq!(refund.fee, "fee_789");
        assert_eq!(refund.balance_transaction.as_deref(), Some("txn_456"));
    }

    #[test]
    fn test_unsettled_refund_has_no_balance_transaction() {
        let body = serde_json::json!({
            "id": "fr_124",
            "object": "fee_refund",
            "amount": 50,
            "created": 1577836800,
            "currency": "eur",
            "fee": "fee_789"
        });

        let refund: ApplicationFeeRefund = serde_json::from_value(body).unwrap();
        assert!(refund.balance_transaction.is_none());
        assert!(refund.metadata.is_empty());
    }
}
