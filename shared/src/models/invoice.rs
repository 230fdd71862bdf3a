//! Invoice model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outstanding invoice line as rendered on the invoice-selection page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Service-side invoice document name (e.g. "ACC-SINV-2026-00042")
    pub id: String,
    /// Customer the invoice is billed to
    pub customer_name: String,
    /// Invoice grand total
    pub grand_total: Decimal,
    /// Amount still owed; an invoice with a non-positive outstanding
    /// amount is settled and never offered for selection
    pub outstanding_amount: Decimal,
    /// Due date, if the service provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Invoice {
    /// Whether this invoice still has a payable balance
    pub fn is_outstanding(&self) -> bool {
        self.outstanding_amount > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(amount: Decimal) -> Invoice {
        Invoice {
            id: "INV1".to_string(),
            customer_name: "John Doe".to_string(),
            grand_total: amount,
            outstanding_amount: amount,
            due_date: None,
        }
    }

    #[test]
    fn test_outstanding() {
        assert!(invoice(Decimal::new(2500, 2)).is_outstanding());
        assert!(!invoice(Decimal::ZERO).is_outstanding());
        assert!(!invoice(Decimal::new(-100, 2)).is_outstanding());
    }
}
