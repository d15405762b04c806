//! Payment record shape.
//!
//! Payments carry no active rules: the schema is empty and only the typed
//! decoding constrains the record.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::domain::validation::{Dto, Schema};

static PAYMENT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| Schema::new("payment", Vec::new()));

/// How a payment was made. Unknown methods are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    /// Card payment.
    Card,
    /// Cash payment.
    Cash,
    /// Bank transfer.
    Transfer,
    /// Any other method.
    Other(String),
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "card" => Self::Card,
            "cash" => Self::Cash,
            "transfer" => Self::Transfer,
            _ => Self::Other(value),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Card => "card".to_owned(),
            PaymentMethod::Cash => "cash".to_owned(),
            PaymentMethod::Transfer => "transfer".to_owned(),
            PaymentMethod::Other(other) => other,
        }
    }
}

/// Settlement state of a payment. Unknown states are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    /// Funds received.
    Completed,
    /// Awaiting settlement.
    Pending,
    /// Settlement failed.
    Failed,
    /// Any other state.
    Other(String),
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => Self::Completed,
            "pending" => Self::Pending,
            "failed" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Completed => "completed".to_owned(),
            PaymentStatus::Pending => "pending".to_owned(),
            PaymentStatus::Failed => "failed".to_owned(),
            PaymentStatus::Other(other) => other,
        }
    }
}

/// A payment against a subscription.
///
/// `paymentDate` is an ISO-8601 date string and is kept as supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    subscription_id: String,
    amount: Number,
    payment_date: String,
    payment_method: PaymentMethod,
    status: PaymentStatus,
}

impl PaymentRecord {
    /// Subscription the payment settles.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        self.subscription_id.as_str()
    }

    /// Amount paid.
    #[must_use]
    pub const fn amount(&self) -> &Number {
        &self.amount
    }

    /// ISO-8601 payment date as supplied.
    #[must_use]
    pub fn payment_date(&self) -> &str {
        self.payment_date.as_str()
    }

    /// Payment method.
    #[must_use]
    pub const fn payment_method(&self) -> &PaymentMethod {
        &self.payment_method
    }

    /// Settlement state.
    #[must_use]
    pub const fn status(&self) -> &PaymentStatus {
        &self.status
    }
}

impl Dto for PaymentRecord {
    fn schema() -> &'static Schema {
        &PAYMENT_SCHEMA
    }
}
