//! Task kinds: the categories of work a record can represent.

use super::{ParseTaskKindError, ReferenceType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a task record represents.
///
/// Kinds are opaque to the lifecycle engine; reassignment in particular
/// operates on the reference key alone, regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Raise an invoice for an order.
    CreateInvoice,
    /// Arrange pickup for an order.
    ArrangePickup,
    /// Collect an outstanding payment from an entity.
    CollectPayment,
    /// Assign a customer entity to a sales person.
    AssignCustomerToSalesPerson,
}

impl TaskKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateInvoice => "create_invoice",
            Self::ArrangePickup => "arrange_pickup",
            Self::CollectPayment => "collect_payment",
            Self::AssignCustomerToSalesPerson => "assign_customer_to_sales_person",
        }
    }

    /// Returns the reference type this kind of work is raised against.
    #[must_use]
    pub const fn applies_to(self) -> ReferenceType {
        match self {
            Self::CreateInvoice | Self::ArrangePickup => ReferenceType::Order,
            Self::CollectPayment | Self::AssignCustomerToSalesPerson => ReferenceType::Entity,
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "create_invoice" => Ok(Self::CreateInvoice),
            "arrange_pickup" => Ok(Self::ArrangePickup),
            "collect_payment" => Ok(Self::CollectPayment),
            "assign_customer_to_sales_person" => Ok(Self::AssignCustomerToSalesPerson),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
