//! # Application Fee Refund Calls
//!
//! Create, retrieve, update and list refunds of an application fee.
//! All write calls are form-encoded POSTs carrying an idempotency key.

use crate::http::StripeClient;
use std::collections::HashMap;
use stripe_core::{ApplicationFeeRefund, List, ListParams, StripeResult};
use tracing::{info, instrument};

/// Parameters for creating an application fee refund
#[derive(Debug, Clone, Default)]
pub struct CreateFeeRefundParams {
    /// Amount to refund, in the smallest currency unit; the full remaining
    /// fee is refunded when absent
    pub amount: Option<i64>,

    pub metadata: HashMap<String, String>,

    /// Explicit idempotency key; one is generated when absent
    pub idempotency_key: Option<String>,
}

impl CreateFeeRefundParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: refund a partial amount
    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Builder: attach metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Builder: set the idempotency key
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    fn to_form_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(amount) = self.amount {
            params.push(("amount".to_string(), amount.to_string()));
        }
        for (key, value) in &self.metadata {
            params.push((format!("metadata[{}]", key), value.clone()));
        }
        params
    }
}

impl StripeClient {
    /// Refund an application fee, in full or in part.
    ///
    /// `POST /v1/application_fees/{fee}/refunds`
    #[instrument(skip(self, params))]
    pub async fn create_fee_refund(
        &self,
        fee: &str,
        params: &CreateFeeRefundParams,
    ) -> StripeResult<ApplicationFeeRefund> {
        let path = format!("/v1/application_fees/{}/refunds", fee);
        let refund: ApplicationFeeRefund = self
            .post_form(&path, &params.to_form_params(), params.idempotency_key.as_deref())
            .await?;

        info!("Refunded application fee: fee={}, refund={}", fee, refund.id);
        Ok(refund)
    }

    /// Retrieve a single application fee refund.
    ///
    /// `GET /v1/application_fees/{fee}/refunds/{id}`
    #[instrument(skip(self))]
    pub async fn retrieve_fee_refund(
        &self,
        fee: &str,
        id: &str,
    ) -> StripeResult<ApplicationFeeRefund> {
        let path = format!("/v1/application_fees/{}/refunds/{}", fee, id);
        self.get_json(&path, &[]).await
    }

    /// Update a refund's metadata; other fields are immutable.
    ///
    /// `POST /v1/application_fees/{fee}/refunds/{id}`
    #[instrument(skip(self, metadata))]
    pub async fn update_fee_refund(
        &self,
        fee: &str,
        id: &str,
        metadata: &HashMap<String, String>,
    ) -> StripeResult<ApplicationFeeRefund> {
        let path = format!("/v1/application_fees/{}/refunds/{}", fee, id);
        let params: Vec<(String, String)> = metadata
            .iter()
            .map(|(key, value)| (format!("metadata[{}]", key), value.clone()))
            .collect();
        self.post_form(&path, &params, None).await
    }

    /// List refunds of an application fee, newest first.
    ///
    /// `GET /v1/application_fees/{fee}/refunds`
    #[instrument(skip(self, params))]
    pub async fn list_fee_refunds(
        &self,
        fee: &str,
        params: &ListParams,
    ) -> StripeResult<List<ApplicationFeeRefund>> {
        let path = format!("/v1/application_fees/{}/refunds", fee);
        self.get_json(&path, &params.to_query_params()).await
    }
}
