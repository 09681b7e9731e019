//! # Discount Calls
//!
//! The only direct call on a discount is removing it; discounts are created
//! by applying a coupon to the customer or subscription.

use crate::http::StripeClient;
use stripe_core::{DeletedDiscount, StripeResult};
use tracing::{info, instrument};

impl StripeClient {
    /// Remove the discount currently applied to a customer.
    ///
    /// `DELETE /v1/customers/{customer}/discount`
    #[instrument(skip(self))]
    pub async fn delete_customer_discount(
        &self,
        customer: &str,
    ) -> StripeResult<DeletedDiscount> {
        let path = format!("/v1/customers/{}/discount", customer);
        let deleted: DeletedDiscount = self.delete_json(&path).await?;

        info!("Removed discount for customer {}", customer);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StripeConfig;
    use crate::http::StripeClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_delete_customer_discount() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/customers/cus_123/discount"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "object": "discount",
                "deleted": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = StripeConfig::new("sk_test_abc")
            .unwrap()
            .with_api_base_url(server.uri());
        let client = StripeClient::new(config).unwrap();

        let deleted = client.delete_customer_discount("cus_123").await.unwrap();
        assert!(deleted.deleted);
    }
}
