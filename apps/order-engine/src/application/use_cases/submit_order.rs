//! Checkout: turn a cart into a persisted order.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::application::dto::CheckoutOutcome;
use crate::application::ports::{
    CartStore, ChangeFeedPort, CheckoutLine, CheckoutRequest, PaymentPort, RedirectTargets,
};
use crate::application::use_cases::CartSession;
use crate::domain::cart::LinePricing;
use crate::domain::ordering::aggregate::{Order, OrderItem, PlaceOrderCommand};
use crate::domain::ordering::value_objects::{CustomerInfo, FieldError};
use crate::domain::ordering::{OrderError, OrderRepository};

/// Errors surfaced by checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Customer data failed validation; carries every violated field.
    #[error("Customer validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Checkout was attempted with an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The order could not be persisted.
    #[error("Failed to persist order")]
    Persistence(#[source] OrderError),
}

/// Submit Order use case.
///
/// Validates the customer, freezes the cart into an order, persists it,
/// initiates payment for gated methods, then clears the cart and
/// notifies subscribers. A payment provider failure does not fail the
/// checkout; the order stays awaiting payment and can be retried.
pub struct SubmitOrderUseCase<R, P, F>
where
    R: OrderRepository,
    P: PaymentPort,
    F: ChangeFeedPort,
{
    repository: Arc<R>,
    payment: Arc<P>,
    change_feed: Arc<F>,
    redirect: RedirectTargets,
}

impl<R, P, F> SubmitOrderUseCase<R, P, F>
where
    R: OrderRepository,
    P: PaymentPort,
    F: ChangeFeedPort,
{
    /// Create the use case with its collaborators.
    pub fn new(
        repository: Arc<R>,
        payment: Arc<P>,
        change_feed: Arc<F>,
        redirect: RedirectTargets,
    ) -> Self {
        Self {
            repository,
            payment,
            change_feed,
            redirect,
        }
    }

    /// Run checkout for a cart session.
    ///
    /// On success the cart is emptied and its persisted copy dropped.
    /// The cart is left intact on every failure path so the buyer can
    /// correct and retry.
    ///
    /// # Errors
    ///
    /// Returns error if validation fails, the cart is empty, or the
    /// order cannot be persisted.
    pub async fn execute<S: CartStore>(
        &self,
        session: &mut CartSession<S>,
        customer: CustomerInfo,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        customer.validate().map_err(CheckoutError::Validation)?;

        if session.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let items: Vec<OrderItem> = session.lines().iter().map(OrderItem::from_line).collect();
        let tenant_id = session.cart().tenant_id().clone();

        let order = Order::place(PlaceOrderCommand {
            tenant_id: tenant_id.clone(),
            customer,
            items,
        })
        .map_err(CheckoutError::Persistence)?;

        let mut order = self
            .repository
            .create(order)
            .await
            .map_err(CheckoutError::Persistence)?;

        let mut checkout_url = None;
        let mut demo = false;

        if order.payment_method().is_gating() {
            match self.payment.create_checkout(self.checkout_request(&order)).await {
                Ok(checkout) => {
                    if let Err(error) = order.begin_payment(checkout.reference) {
                        warn!(order_id = %order.id(), %error, "payment already initiated");
                    }
                    checkout_url = Some(checkout.url);
                    demo = checkout.demo;
                }
                Err(error) => {
                    // The order stands; payment can be retried from the
                    // awaiting-payment view.
                    warn!(order_id = %order.id(), %error, "checkout link creation failed");
                    if let Err(error) = order.begin_payment(None) {
                        warn!(order_id = %order.id(), %error, "payment already initiated");
                    }
                }
            }

            if let Err(error) = self.repository.update(&order).await {
                warn!(order_id = %order.id(), %error, "failed to record payment initiation");
            }
        }

        session.clear().await;
        self.change_feed.notify(&tenant_id);

        info!(
            order_id = %order.id(),
            number = order.number(),
            %tenant_id,
            total = %order.total(),
            "order placed"
        );

        Ok(CheckoutOutcome {
            order_id: order.id().clone(),
            number: order.number(),
            checkout_url,
            demo,
        })
    }

    fn checkout_request(&self, order: &Order) -> CheckoutRequest {
        let lines = order
            .items()
            .iter()
            .map(|item| match item.pricing() {
                LinePricing::Unit { quantity } => CheckoutLine {
                    title: item.name().to_string(),
                    unit_price: item.unit_price(),
                    quantity: *quantity,
                },
                // Providers price whole units, so a weighed line becomes
                // one unit at the line subtotal.
                LinePricing::Weight { .. } => CheckoutLine {
                    title: item.name().to_string(),
                    unit_price: item.subtotal(),
                    quantity: 1,
                },
            })
            .collect();

        CheckoutRequest {
            order_id: order.id().clone(),
            tenant_id: order.tenant_id().clone(),
            total: order.total(),
            lines,
            payer_email: order.customer().email.clone(),
            redirect: self.redirect.clone(),
        }
    }
}
