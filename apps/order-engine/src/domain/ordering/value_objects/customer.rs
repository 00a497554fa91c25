//! Checkout-time customer identity and delivery data.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PaymentMethod;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const PHONE_MIN: usize = 6;
const PHONE_MAX: usize = 20;
const ADDRESS_MAX: usize = 500;
const NOTES_MAX: usize = 500;

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    /// Customer picks the order up.
    Pickup,
    /// Order is delivered to the customer's address.
    Delivery,
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pickup => write!(f, "pickup"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the violated field.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Identity and delivery data supplied by the buyer at checkout.
///
/// Validated in full before any order is created; validation returns
/// every violated field, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Customer name, 2-100 characters.
    pub name: String,
    /// Contact phone, 6-20 characters.
    pub phone: String,
    /// Optional email; must be well-formed when present.
    #[serde(default)]
    pub email: Option<String>,
    /// Pickup or delivery.
    pub delivery: DeliveryType,
    /// Delivery address; required and non-empty only for delivery.
    #[serde(default)]
    pub address: Option<String>,
    /// Free-form notes, up to 500 characters.
    #[serde(default)]
    pub notes: Option<String>,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
}

impl CustomerInfo {
    /// Validate all fields against the checkout schema.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per violated field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let name_len = self.name.trim().chars().count();
        if name_len < NAME_MIN || name_len > NAME_MAX {
            errors.push(FieldError::new(
                "name",
                format!("must be between {NAME_MIN} and {NAME_MAX} characters"),
            ));
        }

        let phone_len = self.phone.trim().chars().count();
        if phone_len < PHONE_MIN || phone_len > PHONE_MAX {
            errors.push(FieldError::new(
                "phone",
                format!("must be between {PHONE_MIN} and {PHONE_MAX} characters"),
            ));
        }

        if let Some(email) = self.email.as_deref() {
            if !email.is_empty() && !is_well_formed_email(email) {
                errors.push(FieldError::new("email", "must be a valid email address"));
            }
        }

        match self.delivery {
            DeliveryType::Delivery => {
                let address = self.address.as_deref().unwrap_or("").trim();
                if address.is_empty() {
                    errors.push(FieldError::new("address", "required for delivery orders"));
                } else if address.chars().count() > ADDRESS_MAX {
                    errors.push(FieldError::new(
                        "address",
                        format!("must be at most {ADDRESS_MAX} characters"),
                    ));
                }
            }
            DeliveryType::Pickup => {}
        }

        if let Some(notes) = self.notes.as_deref() {
            if notes.chars().count() > NOTES_MAX {
                errors.push(FieldError::new(
                    "notes",
                    format!("must be at most {NOTES_MAX} characters"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}
