//! Order aggregate root.

use serde::{Deserialize, Serialize};

use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::services::StatusMachine;
use crate::domain::ordering::value_objects::{
    CustomerInfo, OrderStatus, PaymentMethod, PaymentStatus,
};
use crate::domain::shared::{Money, OrderId, PaymentRef, TenantId, Timestamp};

use super::OrderItem;

/// Command to place a new order from a confirmed cart.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    /// Tenant the order belongs to.
    pub tenant_id: TenantId,
    /// Validated customer checkout data.
    pub customer: CustomerInfo,
    /// Frozen line items, at least one.
    pub items: Vec<OrderItem>,
}

impl PlaceOrderCommand {
    /// Validate the command before creating an order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyOrder`] if the command carries no items.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(())
    }
}

/// Parameters for rebuilding an order from storage.
#[derive(Debug, Clone)]
pub struct ReconstitutedOrderParams {
    /// Order ID.
    pub id: OrderId,
    /// Tenant the order belongs to.
    pub tenant_id: TenantId,
    /// Per-tenant display number.
    pub number: u64,
    /// Customer checkout data.
    pub customer: CustomerInfo,
    /// Frozen line items.
    pub items: Vec<OrderItem>,
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Delivery fee applied at checkout.
    pub delivery_fee: Money,
    /// Discount applied at checkout.
    pub discount: Money,
    /// Amount owed.
    pub total: Money,
    /// Kitchen status.
    pub status: OrderStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Provider payment reference, if any.
    pub payment_ref: Option<PaymentRef>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Time of the last kitchen status change.
    pub status_changed_at: Timestamp,
    /// Deferral deadline, if snoozed.
    pub snoozed_until: Option<Timestamp>,
}

/// An order placed by a customer, owned by a tenant.
///
/// The aggregate enforces both status machines: every kitchen or
/// payment transition is validated before it is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    tenant_id: TenantId,
    number: u64,
    customer: CustomerInfo,
    items: Vec<OrderItem>,
    subtotal: Money,
    delivery_fee: Money,
    discount: Money,
    total: Money,
    status: OrderStatus,
    payment_status: PaymentStatus,
    payment_ref: Option<PaymentRef>,
    created_at: Timestamp,
    status_changed_at: Timestamp,
    snoozed_until: Option<Timestamp>,
}

impl Order {
    /// Place a new order.
    ///
    /// Starts in `Pending` kitchen status and `Pending` payment status.
    /// Totals are computed from the frozen items; the delivery fee and
    /// discount are currently always zero.
    ///
    /// # Errors
    ///
    /// Returns error if the command is invalid.
    pub fn place(command: PlaceOrderCommand) -> Result<Self, OrderError> {
        command.validate()?;

        let subtotal: Money = command.items.iter().map(OrderItem::subtotal).sum();
        let delivery_fee = Money::ZERO;
        let discount = Money::ZERO;
        let total = subtotal + delivery_fee - discount;
        let now = Timestamp::now();

        Ok(Self {
            id: OrderId::generate(),
            tenant_id: command.tenant_id,
            number: 0,
            payment_status: PaymentStatus::Pending,
            payment_ref: None,
            customer: command.customer,
            items: command.items,
            subtotal,
            delivery_fee,
            discount,
            total,
            status: OrderStatus::Pending,
            created_at: now,
            status_changed_at: now,
            snoozed_until: None,
        })
    }

    /// Rebuild an order from persisted state.
    ///
    /// Skips invariant checks: the stored state is trusted.
    #[must_use]
    pub fn reconstitute(params: ReconstitutedOrderParams) -> Self {
        Self {
            id: params.id,
            tenant_id: params.tenant_id,
            number: params.number,
            customer: params.customer,
            items: params.items,
            subtotal: params.subtotal,
            delivery_fee: params.delivery_fee,
            discount: params.discount,
            total: params.total,
            status: params.status,
            payment_status: params.payment_status,
            payment_ref: params.payment_ref,
            created_at: params.created_at,
            status_changed_at: params.status_changed_at,
            snoozed_until: params.snoozed_until,
        }
    }

    /// Order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Tenant the order belongs to.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Per-tenant display number, assigned on first persist.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Customer checkout data.
    #[must_use]
    pub const fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Frozen line items.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of line subtotals.
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Delivery fee applied at checkout.
    #[must_use]
    pub const fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// Discount applied at checkout.
    #[must_use]
    pub const fn discount(&self) -> Money {
        self.discount
    }

    /// Amount owed: `subtotal + delivery_fee - discount`.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Kitchen status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Payment method chosen at checkout.
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.customer.payment_method
    }

    /// Payment status.
    #[must_use]
    pub const fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    /// Provider payment reference, if a checkout was initiated.
    #[must_use]
    pub const fn payment_ref(&self) -> Option<&PaymentRef> {
        self.payment_ref.as_ref()
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Time of the last kitchen status change.
    #[must_use]
    pub const fn status_changed_at(&self) -> Timestamp {
        self.status_changed_at
    }

    /// Deferral deadline, if snoozed.
    #[must_use]
    pub const fn snoozed_until(&self) -> Option<Timestamp> {
        self.snoozed_until
    }

    /// Advance the kitchen status.
    ///
    /// # Errors
    ///
    /// Returns error if the transition violates the status machine.
    pub fn advance(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        StatusMachine::validate_transition(self.status, next)?;
        self.status = next;
        self.status_changed_at = Timestamp::now();
        Ok(())
    }

    /// Cancel the order.
    ///
    /// # Errors
    ///
    /// Returns error if the order is already in a terminal state.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.advance(OrderStatus::Cancelled)
    }

    /// Defer the order for a number of minutes.
    ///
    /// Snoozed orders keep their status but sort last in the kitchen
    /// queue until the deadline passes.
    pub fn snooze(&mut self, minutes: i64) {
        self.snoozed_until = Some(Timestamp::now().plus_minutes(minutes));
    }

    /// Record a payment status change.
    ///
    /// # Errors
    ///
    /// Returns error if the transition violates the payment machine.
    pub fn set_payment_status(&mut self, next: PaymentStatus) -> Result<(), OrderError> {
        StatusMachine::validate_payment_transition(self.payment_status, next)?;
        self.payment_status = next;
        Ok(())
    }

    /// Mark the payment as initiated with the provider.
    ///
    /// # Errors
    ///
    /// Returns error if payment is not in `Pending`.
    pub fn begin_payment(&mut self, reference: Option<PaymentRef>) -> Result<(), OrderError> {
        self.set_payment_status(PaymentStatus::Processing)?;
        self.payment_ref = reference;
        Ok(())
    }

    /// True if the kitchen may act on this order.
    ///
    /// Cash orders are actionable immediately; gated methods wait for
    /// a confirmed payment.
    #[must_use]
    pub fn is_ready_to_cook(&self) -> bool {
        !self.payment_method().is_gating() || self.payment_status == PaymentStatus::Paid
    }

    /// True if this order counts as revenue.
    ///
    /// Online orders count once paid; cash orders count once dispatched,
    /// when the money actually changes hands.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        match self.payment_method() {
            PaymentMethod::MercadoPago => self.payment_status == PaymentStatus::Paid,
            PaymentMethod::Cash => self.status == OrderStatus::Dispatched,
        }
    }

    /// True if the order is deferred at the given instant.
    #[must_use]
    pub fn is_snoozed(&self, now: Timestamp) -> bool {
        self.snoozed_until.is_some_and(|until| until > now)
    }

    pub(crate) fn assign_number(&mut self, number: u64) {
        self.number = number;
    }
}
