//! Invoice totals calculation.
//!
//! Computes subtotal, discount, tax and grand total for a list of line items
//! using integer cents throughout. Discount is taken off the subtotal first and
//! tax is charged on what remains.
//!
//! Line items with a non-positive quantity or a negative unit price are
//! skipped without error. Callers that need strict validation must reject such
//! lines before calling in; the lenient policy is kept so results stay
//! compatible with existing invoices and may be worth revisiting.

use crate::models::{LineItem, Money, Totals};

/// Computes `amount * pct / 100`, rounded half-up to the nearest cent.
///
/// Returns zero when `pct <= 0` or `amount` is zero, so a negative percentage
/// behaves like 0%. Percentages above 100 are honored as given.
///
/// The product is formed in `i64` and is not range-checked. Overflow panics
/// in debug builds and wraps in release builds.
///
/// # Examples
///
/// ```
/// use invoice_engine::calculation::round_percent;
/// use invoice_engine::models::Money;
///
/// // 15% of $3.33 is 49.95 cents, which rounds up
/// assert_eq!(round_percent(Money::from_cents(333), 15), Money::from_cents(50));
/// // 10% of $2.83 is 28.3 cents, which rounds down
/// assert_eq!(round_percent(Money::from_cents(283), 10), Money::from_cents(28));
/// ```
pub fn round_percent(amount: Money, pct: i64) -> Money {
    if pct <= 0 || amount.is_zero() {
        return Money::ZERO;
    }

    // +50 before dividing by 100 rounds halves up
    let raw = amount.cents() * pct;
    Money::from_cents((raw + 50) / 100)
}

/// Computes invoice totals for `items` with whole-percent discount and tax.
///
/// 1. Subtotal is the sum of billable line totals.
/// 2. Discount is `round_percent(subtotal, discount_pct)`.
/// 3. Tax is `round_percent(subtotal - discount, tax_pct)`, with the base
///    clamped at zero when the discount exceeds the subtotal.
/// 4. Total is `subtotal - discount + tax`.
///
/// The function is pure: identical inputs always give identical totals.
///
/// # Examples
///
/// ```
/// use invoice_engine::calculation::compute_totals;
/// use invoice_engine::models::{LineItem, Money};
///
/// let items = [LineItem::new(3, 1999), LineItem::new(1, 505)];
/// let totals = compute_totals(&items, 10, 11);
///
/// assert_eq!(totals.subtotal, Money::from_cents(6502));
/// assert_eq!(totals.discount, Money::from_cents(650));
/// assert_eq!(totals.tax, Money::from_cents(644));
/// assert_eq!(totals.total, Money::from_cents(6496));
/// ```
pub fn compute_totals(items: &[LineItem], discount_pct: i64, tax_pct: i64) -> Totals {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();

    let discount = round_percent(subtotal, discount_pct);

    let tax_base = (subtotal - discount).max(Money::ZERO);
    let tax = round_percent(tax_base, tax_pct);

    Totals {
        subtotal,
        discount,
        tax,
        total: subtotal - discount + tax,
    }
}
