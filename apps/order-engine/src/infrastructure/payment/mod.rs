//! Payment adapters.

use async_trait::async_trait;

use crate::application::ports::{CheckoutRequest, CheckoutSession, PaymentError, PaymentPort};
use crate::domain::shared::PaymentRef;

/// Demo implementation of [`PaymentPort`].
///
/// Issues a local checkout URL and a fresh reference without contacting
/// any provider. Lets the full online-payment flow run end to end in
/// environments without provider credentials.
pub struct DemoPaymentAdapter {
    base_url: String,
}

impl DemoPaymentAdapter {
    /// Create an adapter issuing URLs under the given base.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PaymentPort for DemoPaymentAdapter {
    async fn create_checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        Ok(CheckoutSession {
            url: format!("{}/checkout/{}", self.base_url, request.order_id),
            reference: Some(PaymentRef::generate()),
            demo: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RedirectTargets;
    use crate::domain::shared::{Money, OrderId, TenantId};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn demo_adapter_issues_local_checkout() {
        let adapter = DemoPaymentAdapter::new("https://demo.test");
        let session = adapter
            .create_checkout(CheckoutRequest {
                order_id: OrderId::new("ord-1"),
                tenant_id: TenantId::new("tenant-1"),
                total: Money::new(dec!(10)),
                lines: vec![],
                payer_email: None,
                redirect: RedirectTargets::default(),
            })
            .await
            .unwrap();

        assert_eq!(session.url, "https://demo.test/checkout/ord-1");
        assert!(session.reference.is_some());
        assert!(session.demo);
    }
}
