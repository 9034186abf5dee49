//! Invoice line items and derived totals.

use serde::{Deserialize, Serialize};

use super::Money;

/// One purchasable line on an invoice.
///
/// Lines with a non-positive quantity or a negative unit price are accepted
/// as values but contribute nothing to an invoice; see [`LineItem::is_billable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Number of units purchased.
    pub quantity: i64,
    /// Price of a single unit.
    pub unit_price: Money,
}

impl LineItem {
    /// Creates a line from a quantity and a unit price in cents.
    pub const fn new(quantity: i64, unit_price_cents: i64) -> Self {
        Self {
            quantity,
            unit_price: Money::from_cents(unit_price_cents),
        }
    }

    /// Returns true if the line counts towards the subtotal.
    ///
    /// # Examples
    ///
    /// ```
    /// use invoice_engine::models::LineItem;
    ///
    /// assert!(LineItem::new(2, 250).is_billable());
    /// assert!(LineItem::new(1, 0).is_billable());
    /// assert!(!LineItem::new(0, 1000).is_billable());
    /// assert!(!LineItem::new(2, -500).is_billable());
    /// ```
    pub fn is_billable(&self) -> bool {
        self.quantity > 0 && !self.unit_price.is_negative()
    }

    /// Returns `quantity * unit_price`, or zero for a non-billable line.
    pub fn line_total(&self) -> Money {
        if self.is_billable() {
            self.unit_price * self.quantity
        } else {
            Money::ZERO
        }
    }
}

/// Amounts derived from a set of line items.
///
/// `total` always equals `subtotal - discount + tax`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all billable line totals.
    pub subtotal: Money,
    /// Discount, rounded to the nearest cent.
    pub discount: Money,
    /// Tax on the discounted subtotal, rounded to the nearest cent.
    pub tax: Money,
    /// `subtotal - discount + tax`.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_multiplies_quantity_and_price() {
        assert_eq!(LineItem::new(3, 1999).line_total(), Money::from_cents(5997));
    }

    #[test]
    fn test_line_total_is_zero_for_inert_lines() {
        assert!(LineItem::new(0, 1000).line_total().is_zero());
        assert!(LineItem::new(-1, 2000).line_total().is_zero());
        assert!(LineItem::new(2, -500).line_total().is_zero());
    }

    #[test]
    fn test_deserialize_line_item() {
        let json = r#"{"quantity": 2, "unit_price": 1500}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, LineItem::new(2, 1500));
    }

    #[test]
    fn test_serialize_totals_uses_integer_cents() {
        let totals = Totals {
            subtotal: Money::from_cents(333),
            discount: Money::from_cents(50),
            tax: Money::from_cents(28),
            total: Money::from_cents(311),
        };
        let value = serde_json::to_value(totals).unwrap();
        assert_eq!(value["subtotal"], 333);
        assert_eq!(value["discount"], 50);
        assert_eq!(value["tax"], 28);
        assert_eq!(value["total"], 311);
    }
}
