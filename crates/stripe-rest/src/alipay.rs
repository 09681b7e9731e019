//! # Alipay Account Calls
//!
//! Alipay accounts live under a customer's payment sources; there is no
//! top-level collection for them.

use crate::http::StripeClient;
use stripe_core::{AlipayAccount, StripeResult};
use tracing::instrument;

impl StripeClient {
    /// Retrieve an Alipay account attached to a customer.
    ///
    /// `GET /v1/customers/{customer}/sources/{id}`
    #[instrument(skip(self))]
    pub async fn retrieve_alipay_account(
        &self,
        customer: &str,
        id: &str,
    ) -> StripeResult<AlipayAccount> {
        let path = format!("/v1/customers/{}/sources/{}", customer, id);
        self.get_json(&path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StripeConfig;
    use crate::http::StripeClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_retrieve_alipay_account() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/customers/cus_123/sources/aliacc_456"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "aliacc_456",
                "object": "alipay_account",
                "created": 1577836800,
                "livemode": false,
                "customer": "cus_123",
                "reusable": true,
                "used": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = StripeConfig::new("sk_test_abc")
            .unwrap()
            .with_api_base_url(server.uri());
        let client = StripeClient::new(config).unwrap();

        let account = client
            .retrieve_alipay_account("cus_123", "aliacc_456")
            .await
            .unwrap();

        assert_eq!(account.id, "aliacc_456");
        assert_eq!(account.customer.as_deref(), Some("cus_123"));
        assert!(account.reusable);
    }
}
